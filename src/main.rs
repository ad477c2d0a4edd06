use anyhow::Result;
use cors_file_server::{config::Config, file_server::FileServer, shutdown::listen_for_interrupt};

fn main() -> Result<()> {
    let server = FileServer::new(Config::get()?)?;

    listen_for_interrupt(server.shutdown_handle())?;

    server.start()
}
