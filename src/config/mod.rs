pub mod models;

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::config::models::BareNameResolution;
use crate::errors::{Error, Result};

/// Optional sidecar config looked up beside the wrapper executable.
pub const CONFIG_FILE_NAME: &str = "7za-shim.json";

/// The only setting the sidecar may carry. Target name and exclusion
/// flags are fixed; any other key is rejected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ShimConfig {
    pub bare_name_resolution: BareNameResolution,
}

impl ShimConfig {
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::config(format!(
                "Configuration file '{}' not found.",
                path.display()
            )));
        }
        let text = fs::read_to_string(path)
            .map_err(|e| Error::config(format!("Failed to read {}: {}", path.display(), e)))?;
        serde_json::from_str(&text)
            .map_err(|e| Error::config(format!("Invalid JSON in '{}': {}", path.display(), e)))
    }

    /// Load the sidecar next to the running executable `exe`. No sidecar
    /// means the defaults.
    pub fn load_beside(exe: &Path) -> Result<Self> {
        match Self::sidecar_path(exe) {
            Some(path) if path.is_file() => Self::load_from(path),
            _ => Ok(Self::default()),
        }
    }

    pub fn sidecar_path(exe: &Path) -> Option<PathBuf> {
        exe.parent()
            .filter(|dir| !dir.as_os_str().is_empty())
            .map(|dir| dir.join(CONFIG_FILE_NAME))
    }
}
