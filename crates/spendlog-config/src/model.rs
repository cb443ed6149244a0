use serde::{Deserialize, Serialize};
use std::{
    env,
    path::{Path, PathBuf},
};

const DEFAULT_DIR_NAME: &str = ".spendlog";
const DEFAULT_SNAPSHOT_FILE: &str = "expense_data.json";
pub const HOME_ENV_VAR: &str = "SPENDLOG_HOME";

/// Returns the application data directory, defaulting to `~/.spendlog`.
pub fn app_home() -> PathBuf {
    if let Some(custom) = env::var_os(HOME_ENV_VAR) {
        return PathBuf::from(custom);
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

/// Stores user-configurable CLI preferences.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default = "Config::default_currency_symbol")]
    pub currency_symbol: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Name used when no snapshot exists yet. Interactive sessions prompt otherwise.
    pub default_user_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Optional custom snapshot location. Defaults to `<home>/data/expense_data.json`.
    pub snapshot_file: Option<PathBuf>,

    #[serde(default = "Config::default_backup_retention")]
    pub backup_retention: usize,

    #[serde(default = "Config::default_ui_color_enabled")]
    pub ui_color_enabled: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency_symbol: Self::default_currency_symbol(),
            default_user_name: None,
            snapshot_file: None,
            backup_retention: Self::default_backup_retention(),
            ui_color_enabled: Self::default_ui_color_enabled(),
        }
    }
}

impl Config {
    pub fn default_currency_symbol() -> String {
        "₹".into()
    }

    pub fn default_backup_retention() -> usize {
        5
    }

    pub fn default_ui_color_enabled() -> bool {
        true
    }

    pub fn resolve_snapshot_file(&self, home: &Path) -> PathBuf {
        if let Some(path) = &self.snapshot_file {
            return path.clone();
        }
        home.join("data").join(DEFAULT_SNAPSHOT_FILE)
    }

    pub fn resolve_backup_root(&self, home: &Path) -> PathBuf {
        home.join("backups")
    }
}
