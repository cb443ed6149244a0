use crate::cli::output;
use crate::cli::registry::{CommandEntry, CommandRegistry};

fn alias_label(entry: &CommandEntry) -> String {
    entry
        .alias
        .map(|alias| format!("{alias}."))
        .unwrap_or_default()
}

pub fn print_overview(registry: &CommandRegistry) {
    output::section("Available commands");
    for entry in registry.list() {
        output::plain(format!(
            "  {:<4}{:<10} {}",
            alias_label(entry),
            entry.name,
            entry.description
        ));
    }
    output::hint("Use `help <command>` for details. Menu numbers work as shortcuts.");
}

pub fn print_command(entry: &CommandEntry) {
    output::section(format!("Help: {}", entry.name));
    output::plain(format!("  Description: {}", entry.description));
    output::plain(format!("  Usage: {}", entry.usage));
    if let Some(alias) = entry.alias {
        output::plain(format!("  Shortcut: {}", alias));
    }
}
