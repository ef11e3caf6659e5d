//! Configuration module
//!
//! The serving address is intentionally not configurable: port 4280 and the
//! process's working directory are the whole contract of this tool. Only the
//! ambient logging toggles load from the usual optional file + environment
//! overlay.

use serde::Deserialize;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Port the preview server listens on.
pub const SERVE_PORT: u16 = 4280;

/// Address the server binds: all interfaces, fixed preview port.
pub fn serve_addr() -> SocketAddr {
    SocketAddr::from(([0, 0, 0, 0], SERVE_PORT))
}

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub access_log: bool,
    pub show_headers: bool,
}

impl Config {
    /// Load configuration from an optional `config.*` file and the
    /// environment, falling back to the defaults below.
    pub fn load() -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name("config").required(false))
            .add_source(config::Environment::with_prefix("UTF8SERVE"))
            .set_default("logging.access_log", true)?
            .set_default("logging.show_headers", false)?
            .build()?;

        settings.try_deserialize()
    }
}

/// Process-lifetime state shared by the accept loop and the handler.
pub struct AppState {
    /// Canonicalized serving root, the cwd at launch.
    pub serve_root: PathBuf,
    pub logging: LoggingConfig,
}

impl AppState {
    /// Resolve the serving root once at startup.
    pub fn new(config: &Config) -> std::io::Result<Self> {
        Ok(Self {
            serve_root: std::env::current_dir()?.canonicalize()?,
            logging: config.logging.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serve_addr_is_fixed_port() {
        let addr = serve_addr();
        assert_eq!(addr.port(), 4280);
        assert!(addr.ip().is_unspecified());
    }

    #[test]
    fn test_defaults() {
        let cfg = Config::load().expect("defaults should load");
        assert!(cfg.logging.access_log);
        assert!(!cfg.logging.show_headers);
    }
}
