use crate::error::{CurioError, Result};
use crate::sort::SortKey;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_LIST_LIMIT: usize = 20;

/// Configuration for curio, stored next to the state slots as config.json
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CurioConfig {
    /// Rows shown per listing before results are cut off (0 = show all)
    #[serde(default = "default_list_limit")]
    pub list_limit: usize,

    /// Sort order used when the command line gives none
    #[serde(default)]
    pub default_sort: SortKey,

    /// Catalog file to load instead of the bundled dataset
    #[serde(default)]
    pub data_file: Option<PathBuf>,
}

fn default_list_limit() -> usize {
    DEFAULT_LIST_LIMIT
}

impl Default for CurioConfig {
    fn default() -> Self {
        Self {
            list_limit: DEFAULT_LIST_LIMIT,
            default_sort: SortKey::Default,
            data_file: None,
        }
    }
}

impl CurioConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(CurioError::Io)?;
        let config: CurioConfig =
            serde_json::from_str(&content).map_err(CurioError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(CurioError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(CurioError::Serialization)?;
        fs::write(config_path, content).map_err(CurioError::Io)?;
        Ok(())
    }

    /// Display value for a config key.
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "list_limit" => Some(self.list_limit.to_string()),
            "default_sort" => Some(self.default_sort.to_string()),
            "data_file" => Some(
                self.data_file
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| "bundled".to_string()),
            ),
            _ => None,
        }
    }

    /// Set a config key from its string form.
    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "list_limit" => {
                self.list_limit = value
                    .parse()
                    .map_err(|_| format!("Invalid list limit: {}", value))?;
                Ok(())
            }
            "default_sort" => {
                self.default_sort = SortKey::from_str(value)?;
                Ok(())
            }
            "data_file" => {
                // "bundled" switches back to the built-in dataset
                self.data_file = if value == "bundled" || value.is_empty() {
                    None
                } else {
                    Some(PathBuf::from(value))
                };
                Ok(())
            }
            _ => Err(format!("Unknown config key: {}", key)),
        }
    }
}
