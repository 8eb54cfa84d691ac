use std::net::SocketAddr;
use std::path::Path;

use dt2_chain::ChainConfig;
use serde::{Deserialize, Serialize};

use crate::error::{ServerError, ServerResult};

/// Environment variable overriding [`ServerConfig::bind_addr`].
pub const ENV_BIND_ADDR: &str = "BIND_ADDR";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    /// Answer cross-origin requests from any origin.
    pub cors: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            cors: true,
        }
    }
}

/// Everything the process needs at startup.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub chain: ChainConfig,
}

impl AppConfig {
    pub fn from_toml_str(source: &str) -> ServerResult<Self> {
        toml::from_str(source).map_err(|e| ServerError::Config(e.to_string()))
    }

    pub fn load(path: &Path) -> ServerResult<Self> {
        let source = std::fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }

    /// Overlay process environment variables.
    pub fn apply_env(&mut self) -> ServerResult<()> {
        self.apply_env_with(|key| std::env::var(key).ok())
    }

    pub fn apply_env_with<F>(&mut self, lookup: F) -> ServerResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(bind) = lookup(ENV_BIND_ADDR) {
            self.server.bind_addr = bind
                .parse()
                .map_err(|e| ServerError::Config(format!("{ENV_BIND_ADDR}={bind}: {e}")))?;
        }
        self.chain.apply_env_with(lookup);
        Ok(())
    }
}
