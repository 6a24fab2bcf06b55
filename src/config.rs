use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::core_types::DEFAULT_BUDGET_FACTOR;
use crate::directory_io::{DIRECTORY_FILE, FIND_FILE};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AppConfig {
    pub log_level: String,
    pub log_dir: String,
    pub log_file: String,
    pub use_json: bool,
    pub rotation: String,
    /// Directory holding both input files
    pub data_dir: String,
    #[serde(default = "default_directory_file")]
    pub directory_file: String,
    #[serde(default = "default_find_file")]
    pub find_file: String,
    /// Sort budget = budget_factor × linear search time
    #[serde(default = "default_budget_factor")]
    pub budget_factor: u32,
    /// Reuse one working list across phases instead of copying per phase
    #[serde(default)]
    pub share_directory: bool,
    /// Write `summary.txt` here when set
    #[serde(default)]
    pub output_dir: Option<String>,
}

fn default_directory_file() -> String {
    DIRECTORY_FILE.to_string()
}

fn default_find_file() -> String {
    FIND_FILE.to_string()
}

fn default_budget_factor() -> u32 {
    DEFAULT_BUDGET_FACTOR
}

impl AppConfig {
    pub fn load(env: &str) -> Result<Self> {
        let config_path = format!("config/{}.yaml", env);
        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config file: {}", config_path))?;
        Self::from_yaml(&content)
            .with_context(|| format!("Failed to parse config file: {}", config_path))
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn directory_path(&self) -> PathBuf {
        PathBuf::from(&self.data_dir).join(&self.directory_file)
    }

    pub fn find_path(&self) -> PathBuf {
        PathBuf::from(&self.data_dir).join(&self.find_file)
    }

    pub fn summary_path(&self) -> Option<PathBuf> {
        self.output_dir
            .as_ref()
            .map(|dir| PathBuf::from(dir).join("summary.txt"))
    }
}
