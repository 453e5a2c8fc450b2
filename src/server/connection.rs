// Connection accept module
// Accepts connections and hands each one to its own handler task

use crate::config::Config;
use crate::handler::ConnectionHandler;
use crate::logger;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::io::BufReader;
use tokio::net::{TcpListener, TcpStream};

/// Accept connections forever, spawning one task per connection
///
/// Accept errors are logged and the loop continues.
pub async fn run_accept_loop(
    listener: TcpListener,
    config: Arc<Config>,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        match listener.accept().await {
            Ok((stream, peer_addr)) => accept_connection(stream, peer_addr, &config),
            Err(e) => logger::log_error(&format!("Failed to accept connection: {e}")),
        }
    }
}

/// Hand one accepted connection to a fresh handler on its own task
///
/// The stream halves are owned by the task; dropping them when the
/// handler returns closes the socket.
fn accept_connection(stream: TcpStream, peer_addr: SocketAddr, config: &Arc<Config>) {
    if config.logging.access_log {
        logger::log_connection_accepted(&peer_addr);
    }

    let handler = ConnectionHandler::new(Arc::clone(config), peer_addr);
    tokio::spawn(async move {
        let (read_half, write_half) = stream.into_split();
        handler.handle(BufReader::new(read_half), write_half).await;
    });
}
