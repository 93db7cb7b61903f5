// Server loop module
// Accepts connections until the process is terminated

use std::sync::Arc;
use tokio::net::TcpListener;

use super::connection::handle_connection;
use crate::config;
use crate::logger;

/// Accept connections forever, one task per connection.
///
/// Accept errors are logged and the loop keeps going.
pub async fn start_server_loop(listener: TcpListener, state: Arc<config::AppState>) {
    loop {
        match listener.accept().await {
            Ok((stream, _peer_addr)) => handle_connection(stream, Arc::clone(&state)),
            Err(e) => logger::log_error(&format!("Failed to accept connection: {e}")),
        }
    }
}
