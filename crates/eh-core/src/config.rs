use crate::error::{EhError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EcoHomeConfig {
    pub advisor: AdvisorConfig,
    pub server: ServerConfig,
}

/// Simulated "typing" delay before an advisor reply is surfaced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdvisorConfig {
    pub base_delay_ms: u64,
    pub jitter_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self { base_delay_ms: 800, jitter_ms: 700 }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: "0.0.0.0".into(), port: 8080 }
    }
}

impl EcoHomeConfig {
    /// Parse a JSON document; absent sections keep their defaults.
    pub fn from_json_str(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|e| EhError::Config(format!("{}: {}", path.display(), e)))?;
        let config = Self::from_json_str(&raw)?;
        tracing::debug!(path = %path.display(), "loaded EcoHome config");
        Ok(config)
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
