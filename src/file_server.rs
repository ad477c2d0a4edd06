use crate::{
    access_log::AccessLog,
    config::Config,
    cors::Cors,
    handler::{Handler, StaticFiles},
};
use anyhow::{Error, Result};
use std::{
    net::SocketAddr,
    sync::{Arc, Weak},
};
use tiny_http::Server;

pub struct FileServer {
    config: Config,
    server: Arc<Server>,
    handler: AccessLog<Cors<StaticFiles>>,
}

impl FileServer {
    /// Binds the listener. Nothing is retried: a busy port or an unknown host is fatal.
    pub fn new(config: Config) -> Result<Self> {
        let server = Server::http((config.host.as_str(), config.port)).map_err(|error| {
            Error::msg(format!(
                "Could not start server on {}:{}: {error}",
                config.host, config.port
            ))
        })?;

        let handler = AccessLog::new(Cors::new(StaticFiles::new(config.root.clone())));

        Ok(Self {
            config,
            server: Arc::new(server),
            handler,
        })
    }

    pub fn addr(&self) -> Option<SocketAddr> {
        self.server.server_addr().to_ip()
    }

    pub fn url(&self) -> String {
        let port = self.addr().map_or(self.config.port, |addr| addr.port());

        format!("http://{}:{port}", self.config.host)
    }

    pub fn shutdown_handle(&self) -> ShutdownHandle {
        ShutdownHandle {
            server: Arc::downgrade(&self.server),
        }
    }

    /// Serves requests one at a time until the shutdown handle is triggered.
    pub fn start(&self) -> Result<()> {
        println!("{}", "=".repeat(60));
        println!("CORS File Server");
        println!("{}", "=".repeat(60));
        println!("Server started at: {}", self.url());
        println!("Serving directory: {}", self.config.root.display());
        println!("\nPress Ctrl+C to stop the server");
        println!("{}", "=".repeat(60));

        for request in self.server.incoming_requests() {
            // Content-Length is always sent, never chunked
            let response = self
                .handler
                .handle(&request)
                .with_chunked_threshold(usize::MAX);

            if let Err(error) = request.respond(response) {
                println!("Error while processing request: {error}");
            }
        }

        println!("\n\nServer stopped");
        println!("{}", "=".repeat(60));

        Ok(())
    }
}

/// Stops the accept loop of a running [`FileServer`] from any thread.
///
/// The handle does not keep the server alive: once the [`FileServer`] is
/// dropped the listener closes and triggering does nothing.
#[derive(Clone)]
pub struct ShutdownHandle {
    server: Weak<Server>,
}

impl ShutdownHandle {
    /// Requests already queued are still answered before the loop ends.
    pub fn trigger(&self) {
        if let Some(server) = self.server.upgrade() {
            server.unblock();
        }
    }
}
