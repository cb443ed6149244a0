//! Shared runtime state for CLI interactions and command execution.

use std::path::PathBuf;

use dialoguer::theme::ColorfulTheme;
use spendlog_config::{app_home, Config, ConfigManager};
use spendlog_core::{SnapshotSession, SnapshotStorage};
use spendlog_storage_json::{JsonSnapshotStorage, StoragePaths};
use tracing::{info, warn};

use crate::errors::CliError;

use super::{commands, io, output, registry::CommandRegistry};

const DEFAULT_USER_NAME: &str = "Guest";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

pub struct ShellContext {
    pub mode: CliMode,
    pub registry: CommandRegistry,
    pub theme: ColorfulTheme,
    pub config: Config,
    pub config_manager: ConfigManager,
    pub storage: JsonSnapshotStorage,
    pub session: SnapshotSession,
    pub running: bool,
}

impl ShellContext {
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        Self::with_home(mode, app_home())
    }

    pub fn with_home(mode: CliMode, home: PathBuf) -> Result<Self, CliError> {
        let config_manager = ConfigManager::with_base_dir(home.clone())?;
        let config = match config_manager.load() {
            Ok(config) => config,
            Err(err) => {
                warn!(
                    path = %config_manager.config_path().display(),
                    "ignoring unreadable config: {err}"
                );
                Config::default()
            }
        };
        output::set_color_enabled(config.ui_color_enabled && mode == CliMode::Interactive);

        let storage = JsonSnapshotStorage::with_retention(
            StoragePaths {
                snapshot_file: config.resolve_snapshot_file(&home),
                backup_root: config.resolve_backup_root(&home),
            },
            config.backup_retention,
        )?;

        let mut registry = CommandRegistry::new();
        commands::register_all(&mut registry);
        let theme = ColorfulTheme::default();

        let session = match storage.load() {
            Some(snapshot) => {
                let session = SnapshotSession::from_snapshot(snapshot);
                output::info("Previous data loaded.");
                session
            }
            None => SnapshotSession::fresh(resolve_user_name(mode, &config, &theme)?),
        };
        info!(
            user = %session.user.name,
            expenses = session.service.len(),
            snapshot = %storage.snapshot_path().display(),
            "session ready"
        );

        Ok(Self {
            mode,
            registry,
            theme,
            config,
            config_manager,
            storage,
            session,
            running: true,
        })
    }

    pub fn currency_symbol(&self) -> &str {
        &self.config.currency_symbol
    }

    pub fn prompt(&self) -> String {
        format!("spendlog ({})> ", self.session.user.name)
    }
}

fn resolve_user_name(
    mode: CliMode,
    config: &Config,
    theme: &ColorfulTheme,
) -> Result<String, CliError> {
    if let Some(name) = config
        .default_user_name
        .as_deref()
        .map(str::trim)
        .filter(|name| !name.is_empty())
    {
        return Ok(name.to_string());
    }
    match mode {
        CliMode::Interactive => Ok(io::prompt_text(theme, "Enter your name")?),
        CliMode::Script => Ok(DEFAULT_USER_NAME.to_string()),
    }
}
