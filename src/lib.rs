//! Local static-file development servers.
//!
//! One single-threaded server, three presets ([`Variant`]): permissive CORS
//! headers on port 8000, cache-busting headers on port 8080, or no extra
//! headers on port 8080.

pub mod app;
pub mod config;
pub mod handler;
pub mod http;
pub mod logger;
pub mod server;

pub use app::run;
pub use config::{Config, ServerState, Variant};
pub use server::Server;
