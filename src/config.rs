use crate::errors::ProjectError;
use serde::Deserialize;
use std::collections::HashMap;
use std::env;
use std::path::{Path, PathBuf};

const CONFIG_FILE_NAME: &str = ".project-config.json";

/// User-level configuration, loaded once per run and read-only afterwards.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Directory the generated project files are written into.
    pub project_dir: PathBuf,
    /// Default source folder template, may contain `{NAME}`.
    #[serde(default)]
    pub dir_path: Option<String>,
    /// Path to the Sublime Text binary.
    #[serde(default)]
    pub binary: Option<PathBuf>,
    /// Named path shortcuts, each value may contain `{NAME}`.
    #[serde(default)]
    pub dir_path_favorites: HashMap<String, String>,
}

/// Reads and parses the JSON config at `path`. A missing file is fatal,
/// no default config is synthesized.
pub fn load_config(path: &Path) -> Result<Config, ProjectError> {
    if !path.exists() {
        return Err(ProjectError::ConfigNotFound {
            path: path.to_path_buf(),
        });
    }

    let contents = std::fs::read_to_string(path)?;
    serde_json::from_str(&contents).map_err(|source| ProjectError::ConfigParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Default config location: `${HOME}/.project-config.json`.
pub fn default_config_path() -> PathBuf {
    PathBuf::from(env::var("HOME").unwrap_or_default()).join(CONFIG_FILE_NAME)
}
