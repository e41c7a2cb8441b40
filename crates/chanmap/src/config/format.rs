use std::path::Path;

use crate::config::schema::MappingDocument;
use crate::error::ConfigError;

/// Serialization formats the mapping file can use.
///
/// YAML support is a build-time capability behind the `yaml` feature;
/// builds without it treat `.yaml`/`.yml` paths as unsupported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    #[cfg(feature = "yaml")]
    Yaml,
}

impl ConfigFormat {
    /// Formats compiled into this build.
    pub fn available() -> &'static [ConfigFormat] {
        &[
            ConfigFormat::Json,
            #[cfg(feature = "yaml")]
            ConfigFormat::Yaml,
        ]
    }

    /// Selects a format from the path's extension, matched
    /// case-insensitively. `None` when no compiled format claims it.
    pub fn from_path(path: &Path) -> Option<ConfigFormat> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "json" => Some(ConfigFormat::Json),
            #[cfg(feature = "yaml")]
            "yaml" | "yml" => Some(ConfigFormat::Yaml),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ConfigFormat::Json => "json",
            #[cfg(feature = "yaml")]
            ConfigFormat::Yaml => "yaml",
        }
    }

    /// Extensions this format claims.
    pub fn extensions(self) -> &'static [&'static str] {
        match self {
            ConfigFormat::Json => &["json"],
            #[cfg(feature = "yaml")]
            ConfigFormat::Yaml => &["yaml", "yml"],
        }
    }

    /// Every extension claimed by a compiled format.
    pub fn known_extensions() -> Vec<&'static str> {
        Self::available()
            .iter()
            .flat_map(|format| format.extensions().iter().copied())
            .collect()
    }

    /// Decodes a mapping document. `path` is used for error context only.
    pub fn decode(self, content: &str, path: &Path) -> Result<MappingDocument, ConfigError> {
        match self {
            ConfigFormat::Json => serde_json::from_str(content).map_err(|e| ConfigError::Parse {
                path: path.to_path_buf(),
                message: e.to_string(),
            }),
            #[cfg(feature = "yaml")]
            ConfigFormat::Yaml => serde_yaml::from_str(content).map_err(|e| ConfigError::Parse {
                path: path.to_path_buf(),
                message: e.to_string(),
            }),
        }
    }

    /// Encodes a mapping document for writing to disk. JSON is
    /// pretty-printed since the file is meant to be edited by hand.
    pub fn encode(self, document: &MappingDocument) -> Result<String, ConfigError> {
        match self {
            ConfigFormat::Json => {
                serde_json::to_string_pretty(document).map_err(|e| ConfigError::Template {
                    message: e.to_string(),
                })
            }
            #[cfg(feature = "yaml")]
            ConfigFormat::Yaml => {
                serde_yaml::to_string(document).map_err(|e| ConfigError::Template {
                    message: e.to_string(),
                })
            }
        }
    }
}
