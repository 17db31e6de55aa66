//! RAX Chat Server - Entry Point
//!
//! A TCP group chat relay: every line a client sends is broadcast to all
//! other connected clients.
//!
//! Usage: `rax-chat-server [PORT]`

use log::{error, info};
use std::process;

use rax_chat_server::error::ServerError;
use rax_chat_server::error::handlers::handle_error;
use rax_chat_server::utils::logging::setup_logging;
use rax_chat_server::utils::network::parse_port;
use rax_chat_server::{Server, ServerConfig};

#[tokio::main]
async fn main() {
    setup_logging();

    info!("Launching chat server...");

    let mut config = match ServerConfig::load() {
        Ok(config) => config,
        Err(e) => {
            handle_error(&ServerError::from(e));
            process::exit(1);
        }
    };

    if let Some(arg) = std::env::args().nth(1) {
        match parse_port(&arg) {
            Ok(port) => config = config.with_port(port),
            Err(e) => {
                error!("Invalid port '{}': {}", arg, e);
                process::exit(2);
            }
        }
    }

    let server = match Server::bind(&config).await {
        Ok(server) => server,
        Err(e) => {
            handle_error(&e);
            process::exit(1);
        }
    };

    server.run().await;
}
