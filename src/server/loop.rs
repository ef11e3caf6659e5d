// Server loop module
// Binds the listener once, announces the serving URL, then accepts and
// serves connections one at a time

use std::sync::Arc;
use tokio::net::TcpListener;

use super::connection::serve_connection;
use super::listener::bind_listener;
use crate::config::{self, AppState, Config};
use crate::logger;

/// Run the preview server until the process is killed.
///
/// A bind failure (port already in use, permission denied) propagates out
/// immediately; nothing is retried.
pub async fn run(cfg: Config) -> Result<(), Box<dyn std::error::Error>> {
    let state = Arc::new(AppState::new(&cfg)?);
    let addr = config::serve_addr();

    let listener = bind_listener(addr)?;
    logger::log_server_start(&addr, &state.serve_root);

    accept_loop(listener, state).await
}

/// Sequential accept loop: each connection is served to completion before
/// the next one is accepted. No per-connection tasks, no timeouts.
async fn accept_loop(
    listener: TcpListener,
    state: Arc<AppState>,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        match listener.accept().await {
            Ok((stream, peer_addr)) => {
                serve_connection(stream, peer_addr, Arc::clone(&state)).await;
            }
            Err(e) => {
                logger::log_error(&format!("Failed to accept connection: {e}"));
            }
        }
    }
}
