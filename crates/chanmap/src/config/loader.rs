use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::format::ConfigFormat;
use crate::config::schema::MappingDocument;
use crate::error::ConfigError;
use crate::paths;

/// A mapping document together with where it came from.
#[derive(Debug, Clone)]
pub struct LoadedMapping {
    pub document: MappingDocument,
    /// Normalized path the document was read from.
    pub path: PathBuf,
    /// Set when no file existed and a starter template was written first.
    pub created_template: bool,
}

/// Loads the mapping document at `raw_path`, writing a starter template
/// there first when nothing exists yet.
///
/// The path is normalized before use: `~` and environment variables are
/// expanded and relative segments resolved against the working directory.
pub fn load_mapping(raw_path: &str) -> Result<LoadedMapping, ConfigError> {
    let path = paths::normalize(raw_path);
    let format =
        ConfigFormat::from_path(&path).ok_or_else(|| ConfigError::UnsupportedExtension {
            path: path.clone(),
            expected: ConfigFormat::known_extensions().join(", "),
        })?;

    let created_template = if path.exists() {
        false
    } else {
        write_template(&path, format)?;
        true
    };

    let content = fs::read_to_string(&path).map_err(|e| ConfigError::ReadFile {
        path: path.clone(),
        source: e,
    })?;
    let document = format.decode(&content, &path)?;

    debug!(
        path = %path.display(),
        format = format.name(),
        categories = document.categories.len(),
        "loaded mapping document"
    );

    Ok(LoadedMapping {
        document,
        path,
        created_template,
    })
}

fn write_template(path: &Path, format: ConfigFormat) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| ConfigError::WriteFile {
            path: path.to_path_buf(),
            source: e,
        })?;
    }

    let content = format.encode(&MappingDocument::template())?;
    fs::write(path, content).map_err(|e| ConfigError::WriteFile {
        path: path.to_path_buf(),
        source: e,
    })
}
