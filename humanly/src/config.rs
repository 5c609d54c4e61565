use std::path::Path;

use anyhow::Context as _;
use humanly_core::{FloatFormat, PreciseOptions, SizeOptions, TimeOptions};
use serde::Deserialize;

use crate::run_error::RunError;

/// Per-command defaults read from `--config`. Missing sections keep built-in defaults.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct FileConfig {
    /// `time` and `delta`.
    pub time: TimeOptions,
    pub precise: PreciseOptions,
    pub size: SizeOptions,
    pub word: WordConfig,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct WordConfig {
    pub format: FloatFormat,
}

impl FileConfig {
    pub(crate) fn load(path: Option<&Path>) -> Result<Self, RunError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read config file {}", path.display()))
            .map_err(RunError::RuntimeError)?;
        let cfg = Self::parse(&text)
            .with_context(|| format!("invalid config file {}", path.display()))
            .map_err(RunError::InvalidInput)?;
        log::debug!("loaded config from {}: {cfg:?}", path.display());
        Ok(cfg)
    }

    fn parse(text: &str) -> anyhow::Result<Self> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(text)?)
    }
}
