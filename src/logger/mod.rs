//! Logger module
//!
//! - Startup banner and shutdown message on stdout
//! - Access log, one line per request, in a configurable format
//! - Error and warning log
//!
//! Until `init()` runs, access and error lines go straight to stderr.

mod format;
pub mod writer;

pub use format::AccessLogEntry;

use crate::config::{Config, Variant};
use std::path::Path;

/// Initialize the logger with configuration
///
/// Should be called once at application startup.
pub fn init(config: &Config) -> std::io::Result<()> {
    writer::init(
        config.logging.access_log_file.as_deref(),
        config.logging.error_log_file.as_deref(),
    )
}

fn write_info(message: &str) {
    println!("{message}");
}

fn write_error(message: &str) {
    match writer::get() {
        Some(w) => w.write_error(message),
        None => eprintln!("{message}"),
    }
}

fn write_access(message: &str) {
    match writer::get() {
        Some(w) => w.write_access(message),
        None => eprintln!("{message}"),
    }
}

/// Printed before the listener is bound (interrupt-aware variant only)
pub fn log_environment(working_dir: &Path) {
    write_info(&format!("devserve version: {}", env!("CARGO_PKG_VERSION")));
    write_info(&format!("Working directory: {}", working_dir.display()));
}

/// Printed once the listener is bound
pub fn log_server_start(variant: Variant, port: u16) {
    if variant.handles_interrupt() {
        write_info(&format!("Server started at http://localhost:{port}"));
        write_info(&format!(
            "Open http://localhost:{port}/index.html in your browser"
        ));
        write_info("Press Ctrl+C to stop the server");
    } else {
        write_info(&format!("Server running at http://localhost:{port}/"));
    }
}

pub fn log_shutdown() {
    write_info("\nServer stopped");
}

pub fn log_access(entry: &AccessLogEntry, format: &str) {
    write_access(&entry.format(format));
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    write_error(&format!("[ERROR] Failed to serve connection: {err:?}"));
}

pub fn log_error(message: &str) {
    write_error(&format!("[ERROR] {message}"));
}

pub fn log_warning(message: &str) {
    write_error(&format!("[WARN] {message}"));
}
