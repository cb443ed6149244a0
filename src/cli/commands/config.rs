use spendlog_storage_json::{JsonSnapshotStorage, StoragePaths};
use tracing::info;

use crate::cli::dispatch::CommandResult;
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::cli::shell_context::{CliMode, ShellContext};
use crate::errors::CommandError;

const CONFIG_USAGE: &str = "config [show|set <currency|name|retention|color> <value>]";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "config",
        "View and change saved preferences",
        CONFIG_USAGE,
        cmd_config,
    )]
}

fn cmd_config(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if args.is_empty() || args[0].eq_ignore_ascii_case("show") {
        show_config(context);
        return Ok(());
    }

    match args[0].to_lowercase().as_str() {
        "set" => {
            if args.len() < 3 {
                return Err(CommandError::InvalidArguments(format!(
                    "Usage: {CONFIG_USAGE}"
                )));
            }
            let value = args[2..].join(" ");
            set_config_value(context, &args[1].to_lowercase(), value.trim())
        }
        other => Err(CommandError::InvalidArguments(format!(
            "Unknown config action `{other}`. Usage: {CONFIG_USAGE}"
        ))),
    }
}

fn show_config(context: &ShellContext) {
    let config = &context.config;
    output::section("Configuration");
    output::plain(format!("  currency  : {}", config.currency_symbol));
    output::plain(format!(
        "  name      : {}",
        config.default_user_name.as_deref().unwrap_or("(ask)")
    ));
    output::plain(format!("  retention : {}", config.backup_retention));
    output::plain(format!(
        "  color     : {}",
        if config.ui_color_enabled { "on" } else { "off" }
    ));
    output::plain(format!(
        "  file      : {}",
        context.config_manager.config_path().display()
    ));
    output::plain(format!(
        "  data      : {}",
        context.storage.snapshot_path().display()
    ));
}

fn set_config_value(context: &mut ShellContext, key: &str, value: &str) -> CommandResult {
    let mut updated = context.config.clone();
    match key {
        "currency" => {
            if value.is_empty() {
                return Err(CommandError::InvalidArguments(
                    "Currency symbol must not be empty".into(),
                ));
            }
            updated.currency_symbol = value.to_string();
        }
        "name" => {
            updated.default_user_name = match value {
                "" | "-" | "none" => None,
                name => Some(name.to_string()),
            };
        }
        "retention" => {
            updated.backup_retention = match value.parse::<usize>() {
                Ok(count) if count > 0 => count,
                _ => {
                    return Err(CommandError::InvalidArguments(format!(
                        "`{value}` is not a valid retention count (use 1 or more)"
                    )))
                }
            };
        }
        "color" => {
            updated.ui_color_enabled = parse_switch(value)?;
        }
        other => {
            return Err(CommandError::InvalidArguments(format!(
                "Unknown config key `{other}`. Usage: {CONFIG_USAGE}"
            )))
        }
    }

    context.config_manager.save(&updated)?;
    if updated.backup_retention != context.config.backup_retention {
        context.storage = JsonSnapshotStorage::with_retention(
            StoragePaths {
                snapshot_file: context.storage.snapshot_path().to_path_buf(),
                backup_root: context.storage.backup_root().to_path_buf(),
            },
            updated.backup_retention,
        )?;
    }
    output::set_color_enabled(updated.ui_color_enabled && context.mode == CliMode::Interactive);
    context.config = updated;

    info!(key, value, "config updated");
    output::success(format!("Config `{key}` set to `{value}`."));
    Ok(())
}

fn parse_switch(value: &str) -> Result<bool, CommandError> {
    match value.to_lowercase().as_str() {
        "on" | "true" | "yes" => Ok(true),
        "off" | "false" | "no" => Ok(false),
        _ => Err(CommandError::InvalidArguments(format!(
            "`{value}` is not on/off"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spendlog_config::ConfigManager;
    use tempfile::tempdir;

    #[test]
    fn config_set_persists_and_applies() {
        let home = tempdir().unwrap();
        let mut context =
            ShellContext::with_home(CliMode::Script, home.path().to_path_buf()).unwrap();

        context.process_line("config set currency $").unwrap();
        context.process_line("config set retention 2").unwrap();
        context.process_line("config set name Asha Rao").unwrap();
        assert_eq!(context.currency_symbol(), "$");

        let manager = ConfigManager::with_base_dir(home.path().to_path_buf()).unwrap();
        let saved = manager.load().unwrap();
        assert_eq!(saved.currency_symbol, "$");
        assert_eq!(saved.backup_retention, 2);
        assert_eq!(saved.default_user_name.as_deref(), Some("Asha Rao"));
    }

    #[test]
    fn config_set_rejects_bad_values_without_saving() {
        let home = tempdir().unwrap();
        let mut context =
            ShellContext::with_home(CliMode::Script, home.path().to_path_buf()).unwrap();

        for line in [
            "config set retention 0",
            "config set color maybe",
            "config set theme dark",
            "config set currency",
        ] {
            let err = context.process_line(line).unwrap_err();
            assert!(
                matches!(err, CommandError::InvalidArguments(_)),
                "{line}: {err}"
            );
        }
        assert!(!context.config_manager.config_path().exists());
        assert_eq!(context.config.backup_retention, 5);
    }
}
