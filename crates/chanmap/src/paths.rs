//! Path normalization for operator-supplied locations.

use std::path::{Component, Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;

static RE_ENV_VAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$(?:\{([A-Za-z_][A-Za-z0-9_]*)\}|([A-Za-z_][A-Za-z0-9_]*))").unwrap()
});

/// Expands `~` to the home directory in a path string.
fn expand_tilde(path: &str) -> String {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest).to_string_lossy().into_owned();
        }
    } else if path == "~" {
        if let Some(home) = dirs::home_dir() {
            return home.to_string_lossy().into_owned();
        }
    }
    path.to_string()
}

/// Expands `$VAR` and `${VAR}` references from the process environment.
/// Unset variables are left verbatim.
fn expand_env(path: &str) -> String {
    RE_ENV_VAR
        .replace_all(path, |caps: &regex::Captures<'_>| {
            let name = caps
                .get(1)
                .or_else(|| caps.get(2))
                .map(|m| m.as_str())
                .unwrap_or_default();
            match std::env::var(name) {
                Ok(value) => value,
                Err(_) => caps[0].to_string(),
            }
        })
        .into_owned()
}

/// Makes a path absolute and resolves `.`/`..` segments lexically.
/// Never touches the filesystem, so the path does not have to exist.
pub fn absolutize(path: &Path) -> PathBuf {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        match std::env::current_dir() {
            Ok(cwd) => cwd.join(path),
            Err(_) => path.to_path_buf(),
        }
    };

    let mut resolved = PathBuf::new();
    for component in joined.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                resolved.pop();
            }
            other => resolved.push(other),
        }
    }
    resolved
}

/// Normalizes an operator-supplied path: `~` expansion, then environment
/// variables, then lexical absolutization. An empty string stays empty.
pub fn normalize(raw: &str) -> PathBuf {
    if raw.is_empty() {
        return PathBuf::new();
    }
    let expanded = expand_env(&expand_tilde(raw));
    absolutize(Path::new(&expanded))
}

/// Canonicalizes a path that is expected to exist, falling back to the
/// lexically resolved form when the filesystem lookup fails.
pub fn canonicalize_or_lexical(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| absolutize(path))
}
