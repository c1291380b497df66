use core_config::{server::ServerConfig, FromEnv};

// Re-export Environment for use in other modules
pub use core_config::Environment;

/// Application configuration, composed from the shared `core_config`
/// components.
#[derive(Clone, Debug)]
pub struct Config {
    pub server: ServerConfig,
    pub environment: Environment,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let server = ServerConfig::from_env()?; // Uses defaults: HOST=0.0.0.0, PORT=8080

        Ok(Self {
            server,
            environment,
        })
    }
}
