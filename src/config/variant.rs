// Server variants
// Presets for the three development servers: port, served root, header set
// and interrupt behaviour

use std::path::PathBuf;

use crate::http::HeaderSet;

/// Root served by the cache-busting server unless `server.root` overrides it
pub const NOCACHE_DEFAULT_ROOT: &str = "/Users/enguerran.avril/CascadeProjects/windsurf-project";

/// The three server flavours
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// Port 8000, current directory, permissive CORS headers, Ctrl+C caught
    Cors,
    /// Port 8080, fixed root, cache-prevention headers
    NoCache,
    /// Port 8080, current directory, no extra headers
    Plain,
}

/// Where a variant serves from when no root is configured
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RootDir {
    /// The process working directory at startup
    CurrentDir,
    /// A fixed absolute path
    Fixed(PathBuf),
}

impl Variant {
    pub const ALL: [Self; 3] = [Self::Cors, Self::NoCache, Self::Plain];

    pub const fn default_port(self) -> u16 {
        match self {
            Self::Cors => 8000,
            Self::NoCache | Self::Plain => 8080,
        }
    }

    pub fn default_root(self) -> RootDir {
        match self {
            Self::NoCache => RootDir::Fixed(PathBuf::from(NOCACHE_DEFAULT_ROOT)),
            Self::Cors | Self::Plain => RootDir::CurrentDir,
        }
    }

    pub fn header_set(self) -> HeaderSet {
        match self {
            Self::Cors => HeaderSet::cors(),
            Self::NoCache => HeaderSet::no_cache(),
            Self::Plain => HeaderSet::empty(),
        }
    }

    /// Whether Ctrl+C is caught for a clean stop. Other variants leave the
    /// default signal disposition in place.
    pub const fn handles_interrupt(self) -> bool {
        matches!(self, Self::Cors)
    }

    /// Binary name, also the base name of the optional config file
    pub const fn name(self) -> &'static str {
        match self {
            Self::Cors => "cors-server",
            Self::NoCache => "nocache-server",
            Self::Plain => "plain-server",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ports() {
        assert_eq!(Variant::Cors.default_port(), 8000);
        assert_eq!(Variant::NoCache.default_port(), 8080);
        assert_eq!(Variant::Plain.default_port(), 8080);
    }

    #[test]
    fn test_roots() {
        assert_eq!(Variant::Cors.default_root(), RootDir::CurrentDir);
        assert_eq!(Variant::Plain.default_root(), RootDir::CurrentDir);
        assert_eq!(
            Variant::NoCache.default_root(),
            RootDir::Fixed(PathBuf::from(NOCACHE_DEFAULT_ROOT))
        );
    }

    #[test]
    fn test_header_sets() {
        assert_eq!(Variant::Cors.header_set(), HeaderSet::cors());
        assert_eq!(Variant::NoCache.header_set(), HeaderSet::no_cache());
        assert!(Variant::Plain.header_set().is_empty());
    }

    #[test]
    fn test_only_cors_catches_interrupt() {
        let catching: Vec<_> = Variant::ALL
            .into_iter()
            .filter(|v| v.handles_interrupt())
            .collect();
        assert_eq!(catching, vec![Variant::Cors]);
    }
}
