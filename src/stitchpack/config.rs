use crate::error::{Result, StitchpackError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_PYTHON: &str = "python3";
const DEFAULT_FORMAT_VERSION: &str = "6";

/// Keys accepted by [`StitchpackConfig::get`] and [`StitchpackConfig::set`].
pub const CONFIG_KEYS: [&str; 3] = ["python", "python-args", "format-version"];

/// Configuration for stitchpack, stored in `<config dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StitchpackConfig {
    /// Interpreter used to run pyembroidery
    #[serde(default = "default_python")]
    pub python: String,

    /// Extra arguments placed before the script, for wrappers like `uv run`
    #[serde(default)]
    pub python_args: Vec<String>,

    /// Format version passed to the embroidery writer on import
    #[serde(default = "default_format_version")]
    pub format_version: String,
}

fn default_python() -> String {
    DEFAULT_PYTHON.to_string()
}

fn default_format_version() -> String {
    DEFAULT_FORMAT_VERSION.to_string()
}

impl Default for StitchpackConfig {
    fn default() -> Self {
        Self {
            python: default_python(),
            python_args: Vec::new(),
            format_version: default_format_version(),
        }
    }
}

impl StitchpackConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: StitchpackConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_path, content)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "python" => Some(self.python.clone()),
            "python-args" => Some(self.python_args.join(" ")),
            "format-version" => Some(self.format_version.clone()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "python" => {
                let value = value.trim();
                if value.is_empty() {
                    return Err(StitchpackError::Config("python cannot be empty".into()));
                }
                self.python = value.to_string();
            }
            "python-args" => {
                self.python_args = value.split_whitespace().map(str::to_string).collect();
            }
            "format-version" => {
                let value = value.trim();
                if value.is_empty() {
                    return Err(StitchpackError::Config(
                        "format-version cannot be empty".into(),
                    ));
                }
                self.format_version = value.to_string();
            }
            other => {
                return Err(StitchpackError::Config(format!(
                    "Unknown config key: {}",
                    other
                )));
            }
        }
        Ok(())
    }
}
