use crate::failure::FailureKind;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub report: Report,
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading config: {}", path.display()))?;
        let cfg: Config = toml::from_str(&raw).with_context(|| "parsing TOML")?;
        Ok(cfg)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            report: Default::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// Kinds that never raise a popup. Their instances still land in the
    /// audit log; suppression only removes the interruption.
    #[serde(default)]
    pub suppress: Vec<FailureKind>,
}

impl Default for Report {
    fn default() -> Self {
        Self {
            suppress: Vec::new(),
        }
    }
}
