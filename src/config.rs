use serde::Deserialize;
use thiserror::Error;

use crate::generating::spec::TunnelSpec;

#[derive(Deserialize, Debug, PartialEq)]
pub(crate) struct SshforgeConfig {
    pub tunnels: Vec<TunnelSpec>,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("error while reading config: {0}")]
    Io(#[from] std::io::Error),
    #[error("error while parsing config: {0}")]
    Parse(#[from] toml::de::Error),
}

pub(crate) fn load(path: &str) -> Result<SshforgeConfig, ConfigError> {
    let raw = std::fs::read_to_string(path)?;
    Ok(toml::from_str(&raw)?)
}
