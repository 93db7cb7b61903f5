// Configuration types module
// Defines the startup configuration deserialized by `Config::load`

use serde::Deserialize;
use std::path::PathBuf;

/// Main configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
}

/// Server configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Listen address, all interfaces by default
    pub host: String,
    pub port: u16,
    /// Serving root that request paths resolve against
    pub root: PathBuf,
}
