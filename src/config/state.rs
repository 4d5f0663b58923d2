// Server state module
// Immutable per-process state shared by every request

use std::path::PathBuf;

use super::types::Config;
use super::variant::Variant;
use crate::http::HeaderSet;

/// Everything a request needs, fixed at startup
#[derive(Debug, Clone)]
pub struct ServerState {
    /// Canonical served root
    pub root: PathBuf,
    /// Extra headers added to every response
    pub headers: HeaderSet,
    pub server_name: String,
    pub index_files: Vec<String>,
    pub access_log: bool,
    pub access_log_format: String,
}

impl ServerState {
    /// `root` should come from `Config::resolve_root`
    pub fn new(config: &Config, variant: Variant, root: PathBuf) -> Self {
        Self {
            root,
            headers: variant.header_set(),
            server_name: config.http.server_name.clone(),
            index_files: config.http.index_files.clone(),
            access_log: config.logging.access_log,
            access_log_format: config.logging.access_log_format.clone(),
        }
    }
}
