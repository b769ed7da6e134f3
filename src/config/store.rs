//! Load and persist the configuration file.

use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::error::ConfigError;

use super::model::Configuration;

/// Directory, relative to the working directory, holding the config file.
pub const CONFIG_DIR: &str = ".gitllm";
pub const CONFIG_FILE: &str = "config.yml";

/// File-backed configuration store at `<root>/.gitllm/config.yml`.
///
/// No locking: concurrent writers race and the last rename wins.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    pub fn in_dir(root: impl AsRef<Path>) -> Self {
        Self {
            path: root.as_ref().join(CONFIG_DIR).join(CONFIG_FILE),
        }
    }

    pub fn in_current_dir() -> Result<Self, ConfigError> {
        let cwd = std::env::current_dir().map_err(|source| ConfigError::ReadFailed {
            path: PathBuf::from("."),
            source,
        })?;
        Ok(Self::in_dir(cwd))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Load the configuration, writing the built-in defaults first if the file is absent.
    pub fn load(&self) -> Result<Configuration, ConfigError> {
        if !self.exists() {
            let config = Configuration::default();
            self.save(&config)?;
            info!(path = %self.path.display(), "created default configuration");
            println!("Created default configuration at {}", self.path.display());
            return Ok(config);
        }

        let content = std::fs::read_to_string(&self.path).map_err(|source| {
            ConfigError::ReadFailed {
                path: self.path.clone(),
                source,
            }
        })?;

        let config = serde_yaml::from_str(&content).map_err(|source| ConfigError::ParseFailed {
            path: self.path.clone(),
            source,
        })?;

        debug!(path = %self.path.display(), "loaded configuration");
        Ok(config)
    }

    /// Overwrite the file with `config`.
    ///
    /// Writes to a temp file in the same directory and renames it over the target.
    pub fn save(&self, config: &Configuration) -> Result<(), ConfigError> {
        let yaml = serde_yaml::to_string(config).map_err(ConfigError::SerializeFailed)?;

        let dir = self
            .path
            .parent()
            .ok_or_else(|| self.write_error(std::io::ErrorKind::NotFound.into()))?;
        std::fs::create_dir_all(dir).map_err(|e| self.write_error(e))?;

        let mut tmp = NamedTempFile::new_in(dir).map_err(|e| self.write_error(e))?;
        tmp.write_all(yaml.as_bytes())
            .map_err(|e| self.write_error(e))?;
        tmp.persist(&self.path)
            .map_err(|e| self.write_error(e.error))?;

        debug!(path = %self.path.display(), "saved configuration");
        Ok(())
    }

    fn write_error(&self, source: std::io::Error) -> ConfigError {
        ConfigError::WriteFailed {
            path: self.path.clone(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_layout() {
        let store = ConfigStore::in_dir("/repo");
        assert_eq!(store.path(), Path::new("/repo/.gitllm/config.yml"));
    }

    #[test]
    fn test_load_creates_default_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = ConfigStore::in_dir(dir.path());
        assert!(!store.exists());

        let config = store.load().unwrap();
        assert_eq!(config, Configuration::default());
        assert!(store.exists());

        let written = std::fs::read_to_string(store.path()).unwrap();
        assert!(written.contains("defaultModel: gpt-4.1"));
    }

    #[test]
    fn test_save_then_load_preserves_edits() {
        let dir = tempfile::tempdir().unwrap();
        let store = ConfigStore::in_dir(dir.path());

        let mut config = Configuration::default();
        config.style = "detailed".to_string();
        config.provider_mut_or_insert("openai").api_key = Some("sk-test".to_string());
        store.save(&config).unwrap();

        assert_eq!(store.load().unwrap(), config);
    }

    #[test]
    fn test_save_load_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let store = ConfigStore::in_dir(dir.path());
        std::fs::create_dir_all(store.path().parent().unwrap()).unwrap();
        std::fs::write(
            store.path(),
            "providers:\n  zeta:\n    models: [z1]\n  alpha:\n    url: http://a\n    models: [a1, a2]\nstyle: detailed\n",
        )
        .unwrap();

        store.save(&store.load().unwrap()).unwrap();
        let first = std::fs::read(store.path()).unwrap();
        store.save(&store.load().unwrap()).unwrap();
        let second = std::fs::read(store.path()).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_load_invalid_yaml_fails_with_path() {
        let dir = tempfile::tempdir().unwrap();
        let store = ConfigStore::in_dir(dir.path());
        std::fs::create_dir_all(store.path().parent().unwrap()).unwrap();
        std::fs::write(store.path(), "providers: [not, a, map").unwrap();

        let err = store.load().unwrap_err();
        assert!(matches!(err, ConfigError::ParseFailed { ref path, .. } if path == store.path()));
    }

    #[test]
    fn test_save_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = ConfigStore::in_dir(dir.path());
        store.load().unwrap();

        let mut config = Configuration::default();
        config.default_model = "claude-3".to_string();
        store.save(&config).unwrap();

        let written = std::fs::read_to_string(store.path()).unwrap();
        assert!(written.contains("defaultModel: claude-3"));
        assert!(!written.contains("defaultModel: gpt-4.1"));
    }
}
