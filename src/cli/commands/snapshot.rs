use spendlog_core::{SnapshotSession, SnapshotStorage};
use tracing::info;

use crate::cli::dispatch::CommandResult;
use crate::cli::io;
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::cli::shell_context::{CliMode, ShellContext};
use crate::errors::CommandError;

const RESTORE_USAGE: &str = "restore <index>";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new("save", "Write the data file now", "save", cmd_save),
        CommandEntry::new("backups", "List data file backups", "backups", cmd_backups),
        CommandEntry::new(
            "restore",
            "Restore a backup (0 = newest) and reload it",
            RESTORE_USAGE,
            cmd_restore,
        ),
    ]
}

fn cmd_save(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    context.session.save(&context.storage)?;
    output::success(format!(
        "Data saved to {}",
        context.storage.snapshot_path().display()
    ));
    Ok(())
}

fn cmd_backups(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let backups = context.storage.list_backups()?;
    if backups.is_empty() {
        output::info("No backups found.");
        return Ok(());
    }
    output::section("Backups (newest first)");
    for (index, backup) in backups.iter().enumerate() {
        output::plain(format!("  {:>2}. {}  {}", index, backup.created_at, backup.id));
    }
    output::hint(format!("Use `{RESTORE_USAGE}` to roll back."));
    Ok(())
}

fn cmd_restore(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let raw = context.require_arg(args, 0, "Backup index", RESTORE_USAGE)?;
    let index: usize = raw.trim().parse().map_err(|_| {
        CommandError::InvalidArguments(format!("`{}` is not a valid backup index", raw))
    })?;

    let backups = context.storage.list_backups()?;
    let backup = backups.get(index).ok_or_else(|| {
        CommandError::InvalidArguments(format!(
            "No backup at index {} ({} available)",
            index,
            backups.len()
        ))
    })?;

    if context.mode == CliMode::Interactive {
        let prompt = format!("Replace current data with {}?", backup.id);
        if !io::confirm_action(&context.theme, &prompt, false)? {
            output::info("Restore cancelled.");
            return Ok(());
        }
    }

    let snapshot = context.storage.restore_backup(backup)?;
    context.session = SnapshotSession::from_snapshot(snapshot);
    info!(backup = %backup.id, "snapshot restored from backup");
    output::success(format!(
        "Restored {} ({} expense(s)).",
        backup.id,
        context.session.service.len()
    ));
    Ok(())
}
