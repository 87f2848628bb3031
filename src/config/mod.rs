//! Process configuration.

mod loader;

pub use loader::{DEFAULT_BODY_LIMIT, DEFAULT_DATABASE_PATH, DEFAULT_PORT, DEFAULT_STATIC_DIR};

use std::path::PathBuf;

/// Server settings, read once at startup.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// SQLite file holding the `cars` table; created on first start.
    pub database_path: PathBuf,
    /// Directory of the pre-built front-end bundle.
    pub static_dir: PathBuf,
    pub body_limit: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: DEFAULT_PORT,
            database_path: PathBuf::from(DEFAULT_DATABASE_PATH),
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            body_limit: DEFAULT_BODY_LIMIT,
        }
    }
}

impl ServerConfig {
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
