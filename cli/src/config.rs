use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use directories::ProjectDirs;
use minigames_core::snake::SnakeConfig;
use serde::Deserialize;

pub const CONFIG_FILE: &str = "config.toml";

pub fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", "minigames")
}

/// Contents of `config.toml`, every section and field is optional.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub snake: SnakeConfig,
    pub storage: StorageSettings,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct StorageSettings {
    /// Where saved games and scores live, the platform data dir when unset.
    pub dir: Option<PathBuf>,
}

impl Settings {
    /// Reads `path` when given, otherwise the platform config file if it exists.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        if let Some(path) = path {
            return Self::read(path);
        }

        let default_path = project_dirs().map(|dirs| dirs.config_dir().join(CONFIG_FILE));
        match default_path {
            Some(path) if path.is_file() => Self::read(&path),
            _ => {
                log::debug!("No config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn parse(text: &str) -> anyhow::Result<Self> {
        let mut settings: Self = toml::from_str(text)?;
        settings.snake = settings.snake.sanitized();
        Ok(settings)
    }

    fn read(path: &Path) -> anyhow::Result<Self> {
        log::debug!("Reading config from {}", path.display());
        let text = fs::read_to_string(path)
            .with_context(|| format!("Could not read config file {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("Invalid config file {}", path.display()))
    }
}
