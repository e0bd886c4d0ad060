use crate::error::{BridgeError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_PATH_ENV: &str = "COLLBRIDGE_CONFIG";
pub const DISABLED_REGISTRARS_ENV: &str = "COLLBRIDGE_DISABLED_REGISTRARS";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Registrar ids to leave out even when their library is available.
    pub disabled_registrars: Vec<String>,
    /// Default tracing filter when `RUST_LOG` is unset.
    pub log_filter: Option<String>,
}

impl RegistryConfig {
    /// Loads `$COLLBRIDGE_CONFIG`, falling back to `~/.collbridge/config.json`,
    /// then applies environment overrides. A missing file yields defaults.
    pub fn load() -> Result<Self> {
        let path = std::env::var_os(CONFIG_PATH_ENV)
            .map(PathBuf::from)
            .or_else(Self::default_path);

        let mut config = match path {
            Some(path) if path.exists() => Self::from_file(&path)?,
            _ => Self::default(),
        };

        if let Ok(list) = std::env::var(DISABLED_REGISTRARS_ENV) {
            config.apply_disabled_override(&list);
        }

        Ok(config)
    }

    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".collbridge").join("config.json"))
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Replaces the disabled list with a comma separated override.
    pub fn apply_disabled_override(&mut self, list: &str) {
        self.disabled_registrars = list
            .split(',')
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(str::to_string)
            .collect();
    }

    pub fn is_disabled(&self, registrar_id: &str) -> bool {
        self.disabled_registrars.iter().any(|id| id == registrar_id)
    }

    pub fn log_filter(&self) -> &str {
        self.log_filter.as_deref().unwrap_or("info")
    }

    fn validate(&self) -> Result<()> {
        if let Some(id) = self.disabled_registrars.iter().find(|id| id.trim().is_empty()) {
            return Err(BridgeError::Config(format!(
                "disabled_registrars contains a blank id: {id:?}"
            )));
        }
        Ok(())
    }
}
