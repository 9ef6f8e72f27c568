use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use salesgen_core::SalesWindow;
use salesgen_core::window::DEFAULT_WINDOW_DAYS;
use salesgen_generate::model::DEFAULT_ROWS;

use crate::{CliError, CliResult};

/// Settings file looked up in the working directory when `--config` is absent.
pub const DEFAULT_SETTINGS_FILE: &str = "salesgen.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub generate: GenerateSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerateSettings {
    pub rows: usize,
    pub seed: Option<u64>,
    pub base_dir: PathBuf,
    pub catalog: Option<PathBuf>,
    pub window_end: Option<NaiveDate>,
    pub window_days: Option<u32>,
}

impl Default for GenerateSettings {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            seed: None,
            base_dir: PathBuf::from("data"),
            catalog: None,
            window_end: None,
            window_days: None,
        }
    }
}

impl GenerateSettings {
    pub fn window(&self) -> CliResult<SalesWindow> {
        let default = SalesWindow::default();
        let end = self.window_end.unwrap_or(default.end());
        let days = self.window_days.unwrap_or(DEFAULT_WINDOW_DAYS);
        Ok(SalesWindow::new(end, days)?)
    }
}

/// Load settings from `path`, or from `salesgen.toml` when present.
///
/// An explicit path must exist; the implicit file is optional.
pub fn load_settings(path: Option<&Path>) -> CliResult<Settings> {
    let (path, required) = match path {
        Some(path) => (path.to_path_buf(), true),
        None => (PathBuf::from(DEFAULT_SETTINGS_FILE), false),
    };

    if !path.exists() {
        if required {
            return Err(CliError::InvalidConfig(format!(
                "settings file not found: {}",
                path.display()
            )));
        }
        return Ok(Settings::default());
    }

    let content = std::fs::read_to_string(&path).map_err(|source| CliError::Io {
        path: path.clone(),
        source,
    })?;
    parse_settings(&content).map_err(|source| CliError::Settings { path, source })
}

pub fn parse_settings(content: &str) -> Result<Settings, toml::de::Error> {
    toml::from_str(content)
}
