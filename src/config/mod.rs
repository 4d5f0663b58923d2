// Configuration module entry point
// Layered configuration (variant defaults < config file < environment) and
// the immutable server state derived from it

mod state;
mod types;
mod variant;

use std::io;
use std::net::SocketAddr;
use std::path::PathBuf;

pub use state::ServerState;
pub use types::{Config, HttpConfig, LoggingConfig, ServerConfig};
pub use variant::{RootDir, Variant, NOCACHE_DEFAULT_ROOT};

/// Listen on all interfaces
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Environment overrides look like `DEVSERVE_SERVER__PORT=9000`
pub const ENV_PREFIX: &str = "DEVSERVE";

impl Config {
    /// Built-in defaults for a variant, no file or environment involved
    pub fn for_variant(variant: Variant) -> Self {
        Self {
            server: ServerConfig {
                host: DEFAULT_HOST.to_string(),
                port: variant.default_port(),
                root: None,
            },
            logging: LoggingConfig::default(),
            http: HttpConfig::default(),
        }
    }

    /// Load configuration for a variant from `<binary name>.toml` (optional)
    /// and the environment
    pub fn load(variant: Variant) -> Result<Self, ::config::ConfigError> {
        Self::load_from(variant, variant.name())
    }

    /// Load configuration from the given file path (extension optional);
    /// a missing file is not an error
    pub fn load_from(variant: Variant, config_path: &str) -> Result<Self, ::config::ConfigError> {
        let defaults = Self::for_variant(variant);

        let settings = ::config::Config::builder()
            .add_source(::config::File::with_name(config_path).required(false))
            .add_source(
                ::config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_default("server.host", defaults.server.host)?
            .set_default("server.port", i64::from(defaults.server.port))?
            .set_default("logging.access_log", defaults.logging.access_log)?
            .set_default("logging.access_log_format", defaults.logging.access_log_format)?
            .set_default("http.server_name", defaults.http.server_name)?
            .set_default("http.index_files", defaults.http.index_files)?
            .build()?;

        settings.try_deserialize()
    }

    pub fn get_socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }

    /// Absolute, canonical directory to serve.
    ///
    /// Uses `server.root` when set, the variant's default otherwise. Fails if
    /// the directory does not exist or is not a directory.
    pub fn resolve_root(&self, variant: Variant) -> io::Result<PathBuf> {
        let root = match &self.server.root {
            Some(dir) => PathBuf::from(dir),
            None => match variant.default_root() {
                RootDir::CurrentDir => std::env::current_dir()?,
                RootDir::Fixed(path) => path,
            },
        };

        let canonical = root.canonicalize().map_err(|e| {
            io::Error::new(e.kind(), format!("Cannot serve '{}': {e}", root.display()))
        })?;
        if !canonical.is_dir() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("Cannot serve '{}': not a directory", canonical.display()),
            ));
        }
        Ok(canonical)
    }
}
