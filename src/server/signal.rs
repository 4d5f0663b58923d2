// Signal handling module
//
// Only the interrupt signal (SIGINT / Ctrl+C) is ever handled, and only by
// variants that ask for it. Until `interrupt()` is first polled the default
// disposition stays in place and an interrupt terminates the process.

use crate::logger;

/// Completes when the process receives an interrupt.
///
/// If the handler cannot be installed the error is logged and the future
/// never completes, leaving the server running.
pub async fn interrupt() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        logger::log_error(&format!("Failed to listen for interrupt signal: {e}"));
        std::future::pending::<()>().await;
    }
}
