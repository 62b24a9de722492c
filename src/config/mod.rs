use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Spot count of the reference lot
pub const DEFAULT_CAPACITY: u32 = 60;
pub const DEFAULT_TITLE: &str = "Park-o-Tron";

fn default_capacity() -> u32 {
    DEFAULT_CAPACITY
}
fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}
fn default_verbose() -> bool {
    false
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    #[serde(default = "default_capacity")]
    pub capacity: u32,
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_verbose")]
    pub verbose: bool,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            capacity: default_capacity(),
            title: default_title(),
            verbose: default_verbose(),
        }
    }
}

impl FileConfig {
    /// Read an explicitly requested config file. Missing or malformed files
    /// are errors.
    pub fn from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            bail!("Config file not found: {:?}", path);
        }
        let contents = std::fs::read_to_string(path)
            .context(format!("Failed to read config file: {:?}", path))?;
        toml::from_str(&contents).context(format!("Failed to parse config file: {:?}", path))
    }

    /// Search the standard locations and return the first config that parses
    pub fn load() -> Option<Self> {
        Self::load_from(&get_config_paths())
    }

    fn load_from(paths: &[PathBuf]) -> Option<Self> {
        for path in paths {
            if path.exists()
                && let Ok(contents) = std::fs::read_to_string(path)
            {
                match toml::from_str(&contents) {
                    Ok(config) => return Some(config),
                    Err(e) => {
                        tracing::warn!(path = ?path, error = %e, "failed to parse config file");
                    }
                }
            }
        }
        None
    }
}

fn get_config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    paths.push(PathBuf::from("parkotron.toml"));
    paths.push(PathBuf::from(".parkotron.toml"));

    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("parkotron").join("config.toml"));
        paths.push(config_dir.join("parkotron.toml"));
    }

    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(".parkotron.toml"));
    }

    paths
}
