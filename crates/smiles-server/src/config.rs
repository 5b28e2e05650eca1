//! Server Configuration

use std::path::PathBuf;

/// Where to listen and what to serve
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    /// Socket address to bind
    pub bind_addr: String,

    /// Directory holding the built site (`index.html` plus the wasm bundle)
    pub site_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:3000".into(),
            site_dir: PathBuf::from("static"),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_vars(std::env::var("BIND_ADDR").ok(), std::env::var("SITE_DIR").ok())
    }

    fn from_vars(bind_addr: Option<String>, site_dir: Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            bind_addr: bind_addr.filter(|s| !s.trim().is_empty()).unwrap_or(defaults.bind_addr),
            site_dir: site_dir
                .filter(|s| !s.trim().is_empty())
                .map_or(defaults.site_dir, PathBuf::from),
        }
    }

    pub fn index_file(&self) -> PathBuf {
        self.site_dir.join("index.html")
    }
}
