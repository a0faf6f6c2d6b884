use crate::{NotecycleError, NotecycleResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

const DATA_FILE_NAME: &str = "notecycle.json";
const KEY_VALUE_FILE_NAME: &str = "prefs.json";

/// Backing medium for the persisted snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BackendKind {
    File,
    KeyValue,
}

impl BackendKind {
    /// Backend used when neither the config file nor the command line picks one.
    pub fn platform_default() -> Self {
        if cfg!(target_family = "wasm") {
            Self::KeyValue
        } else {
            Self::File
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::File => "file",
            Self::KeyValue => "key-value",
        }
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BackendKind {
    type Err = NotecycleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "file" => Ok(Self::File),
            "key-value" | "keyvalue" | "kv" => Ok(Self::KeyValue),
            other => Err(NotecycleError::Config(format!(
                "unknown backend '{}', expected 'file' or 'key-value'",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub backend: Option<BackendKind>,
    #[serde(default)]
    pub data_file: Option<PathBuf>,
    #[serde(default)]
    pub key_value_file: Option<PathBuf>,
    /// Clamp `activeIndex` into range on ordinary loads, not only on import.
    #[serde(default)]
    pub clamp_active_index_on_load: bool,
}

impl AppConfig {
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(target_os = "macos")]
        {
            dirs::home_dir().map(|home| home.join(".config/notecycle/config.toml"))
        }
        #[cfg(target_os = "linux")]
        {
            dirs::config_dir().map(|config| config.join("notecycle/config.toml"))
        }
        #[cfg(target_os = "windows")]
        {
            dirs::config_dir().map(|config| config.join("notecycle\\config.toml"))
        }
        #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
        {
            None
        }
    }

    pub fn load() -> Self {
        match Self::config_path() {
            Some(config_path) => Self::load_from(&config_path),
            None => Self::default(),
        }
    }

    /// Read the config at `path`; a missing file means defaults.
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        let loaded = std::fs::read_to_string(path)
            .map_err(NotecycleError::from)
            .and_then(|content| Self::from_toml_str(&content));
        match loaded {
            Ok(config) => {
                tracing::debug!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                tracing::warn!(
                    "Ignoring config {}: {}; using defaults",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }

    pub fn from_toml_str(content: &str) -> NotecycleResult<Self> {
        toml::from_str(content).map_err(|e| NotecycleError::Config(e.to_string()))
    }

    pub fn effective_backend(&self) -> BackendKind {
        self.backend.unwrap_or_else(BackendKind::platform_default)
    }

    pub fn effective_data_file(&self) -> PathBuf {
        self.data_file
            .clone()
            .unwrap_or_else(|| Self::data_dir().join(DATA_FILE_NAME))
    }

    pub fn effective_key_value_file(&self) -> PathBuf {
        self.key_value_file
            .clone()
            .unwrap_or_else(|| Self::data_dir().join(KEY_VALUE_FILE_NAME))
    }

    fn data_dir() -> PathBuf {
        dirs::data_dir()
            .map(|dir| dir.join("notecycle"))
            .unwrap_or_else(|| PathBuf::from("."))
    }
}
