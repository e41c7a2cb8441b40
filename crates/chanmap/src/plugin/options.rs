use std::str::FromStr;

use indexmap::IndexMap;
use serde::Deserialize;

use crate::error::ConfigError;
use crate::host::{Stage, UnknownStage};

/// Options accepted when the plugin is registered.
///
/// `config` is consumed by the mapper itself; `when` is consumed by the
/// host when it places the plugin in its pipeline. Unknown keys are kept
/// so hosts can pass extra arguments through untouched.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct MapperOptions {
    /// Path to the mapping file.
    pub config: Option<String>,
    /// Requested lifecycle stage.
    pub when: Option<Stage>,
    /// Unrecognized options, in the order they were given.
    #[serde(flatten)]
    pub extra: IndexMap<String, String>,
}

impl MapperOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(mut self, path: impl Into<String>) -> Self {
        self.config = Some(path.into());
        self
    }

    pub fn with_when(mut self, when: Stage) -> Self {
        self.when = Some(when);
        self
    }
}

impl FromStr for MapperOptions {
    type Err = ConfigError;

    /// Parses the `key=value;key=value` option string hosts forward from
    /// their command line.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut options = MapperOptions::default();

        for pair in s.split(';') {
            let pair = pair.trim();
            if pair.is_empty() {
                continue;
            }

            let (key, value) = pair.split_once('=').ok_or_else(|| ConfigError::InvalidOptions {
                raw: s.to_string(),
                reason: format!("expected key=value, got '{pair}'"),
            })?;
            let (key, value) = (key.trim(), value.trim());

            match key {
                "config" => options.config = Some(value.to_string()),
                "when" => {
                    let stage = value.parse().map_err(|e: UnknownStage| {
                        ConfigError::InvalidOptions {
                            raw: s.to_string(),
                            reason: e.to_string(),
                        }
                    })?;
                    options.when = Some(stage);
                }
                _ => {
                    options.extra.insert(key.to_string(), value.to_string());
                }
            }
        }

        Ok(options)
    }
}
