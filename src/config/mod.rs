// Configuration module entry point
// Layers built-in defaults under the command line overrides

mod state;
mod types;

use std::net::SocketAddr;

use crate::cli::CliArgs;

// Re-export public types
pub use state::AppState;
pub use types::Config;
#[cfg(test)]
pub use types::ServerConfig;

pub const DEFAULT_PORT: u16 = 8080;

impl Config {
    /// Build the configuration from defaults and parsed command line arguments.
    /// There is no config file or environment source; the port is the only knob.
    pub fn load(args: &CliArgs) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", i64::from(DEFAULT_PORT))?
            .set_default("server.root", ".")?
            .set_override_option("server.port", args.port.map(i64::from))?
            .build()?;

        settings.try_deserialize()
    }

    pub fn get_socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }
}
