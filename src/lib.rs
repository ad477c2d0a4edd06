pub mod access_log;
pub mod config;
pub mod cors;
pub mod error;
pub mod file;
pub mod file_server;
pub mod handler;
pub mod header;
pub mod listing;
pub mod resolve;
pub mod shutdown;

#[cfg(test)]
mod fixture;
