// Server loop module
// Sequential accept loop: one connection at a time

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;

use super::connection::serve_connection;
use crate::config::ServerState;
use crate::logger;

/// Pause after a failed `accept` (e.g. out of file descriptors)
const ACCEPT_RETRY_DELAY: Duration = Duration::from_millis(100);

/// Accept and serve connections forever.
///
/// Each connection is served to completion before the next `accept`, so
/// requests are handled strictly one after another.
pub async fn run(listener: &TcpListener, state: &Arc<ServerState>) {
    loop {
        match listener.accept().await {
            Ok((stream, peer_addr)) => {
                serve_connection(stream, peer_addr, Arc::clone(state)).await;
            }
            Err(e) => {
                logger::log_error(&format!("Failed to accept connection: {e}"));
                tokio::time::sleep(ACCEPT_RETRY_DELAY).await;
            }
        }
    }
}

/// Run the accept loop until `shutdown` completes.
///
/// A request in progress when `shutdown` fires is abandoned; nothing further
/// is accepted.
#[allow(clippy::ignored_unit_patterns)]
pub async fn run_until<F>(listener: &TcpListener, state: &Arc<ServerState>, shutdown: F)
where
    F: Future<Output = ()>,
{
    tokio::select! {
        _ = run(listener, state) => {}
        _ = shutdown => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accept_retry_delay_is_short_but_nonzero() {
        assert!(!ACCEPT_RETRY_DELAY.is_zero());
        assert!(ACCEPT_RETRY_DELAY < Duration::from_secs(1));
    }
}
