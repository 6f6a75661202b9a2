use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde::Deserialize;

const CONFIG_DIR: &str = "ticklist";
const CONFIG_FILE: &str = "config.toml";

/// Optional user configuration loaded from `<config dir>/ticklist/config.toml`.
///
/// A missing file yields the defaults; a malformed file is an error, since
/// silently ignoring explicit configuration would be worse than refusing
/// to start.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    /// Storage directory override.
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
}

impl Config {
    /// Load configuration from the platform config directory.
    ///
    /// # Errors
    /// Returns an error if an existing file cannot be read or parsed.
    pub fn load() -> Result<Self> {
        match dirs::config_dir() {
            Some(base) => Self::from_path(&base.join(CONFIG_DIR).join(CONFIG_FILE)),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from an explicit file path.
    ///
    /// # Errors
    /// Returns an error if an existing file cannot be read or parsed.
    pub fn from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let config: Self = toml::from_str(&contents)
            .with_context(|| format!("failed to parse {}", path.display()))?;
        Ok(config)
    }

    /// Resolve the storage root: an explicit override wins, then the
    /// configured directory, then the platform data directory.
    ///
    /// # Errors
    /// Returns an error when no data directory can be determined at all.
    pub fn resolve_data_dir(&self, override_dir: Option<PathBuf>) -> Result<PathBuf> {
        if let Some(dir) = override_dir {
            return Ok(dir);
        }
        if let Some(dir) = &self.data_dir {
            return Ok(dir.clone());
        }
        dirs::data_dir()
            .map(|base| base.join(CONFIG_DIR))
            .context("failed to determine a data directory for task storage")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn missing_file_yields_defaults() {
        let config = Config::from_path(Path::new("/nonexistent/ticklist/config.toml"))
            .unwrap_or_else(|err| panic!("missing config must default: {err}"));
        assert!(config.data_dir.is_none());
    }

    #[test]
    fn data_dir_is_read_from_toml() {
        let mut file =
            NamedTempFile::new().unwrap_or_else(|err| panic!("temp file must be created: {err}"));
        writeln!(file, "data_dir = \"/tmp/ticklist-data\"")
            .unwrap_or_else(|err| panic!("fixture write must succeed: {err}"));

        let config = Config::from_path(file.path())
            .unwrap_or_else(|err| panic!("config must parse: {err}"));
        assert_eq!(config.data_dir.as_deref(), Some(Path::new("/tmp/ticklist-data")));
    }

    #[test]
    fn malformed_config_is_an_error() {
        let mut file =
            NamedTempFile::new().unwrap_or_else(|err| panic!("temp file must be created: {err}"));
        writeln!(file, "data_dir = [not toml")
            .unwrap_or_else(|err| panic!("fixture write must succeed: {err}"));

        assert!(Config::from_path(file.path()).is_err());
    }

    #[test]
    fn explicit_override_beats_configured_directory() {
        let config = Config {
            data_dir: Some(PathBuf::from("/from/config")),
        };
        let resolved = config
            .resolve_data_dir(Some(PathBuf::from("/from/flag")))
            .unwrap_or_else(|err| panic!("resolve must succeed: {err}"));
        assert_eq!(resolved, PathBuf::from("/from/flag"));

        let resolved = config
            .resolve_data_dir(None)
            .unwrap_or_else(|err| panic!("resolve must succeed: {err}"));
        assert_eq!(resolved, PathBuf::from("/from/config"));
    }
}
