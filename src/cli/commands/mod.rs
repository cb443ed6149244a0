pub mod config;
pub mod expense;
pub mod report;
pub mod snapshot;
pub mod system;

use super::registry::{CommandEntry, CommandRegistry};

/// Menu order; anything not listed goes last in registration order.
const ROOT_COMMAND_ORDER: &[&str] = &[
    "food", "travel", "add", "list", "budget", "total", "summary", "save", "backups",
    "restore", "config", "help", "version", "exit",
];

pub(crate) fn all_definitions() -> Vec<CommandEntry> {
    let mut commands = Vec::new();
    commands.extend(expense::definitions());
    commands.extend(report::definitions());
    commands.extend(snapshot::definitions());
    commands.extend(config::definitions());
    commands.extend(system::definitions());
    commands.sort_by_key(|entry| {
        ROOT_COMMAND_ORDER
            .iter()
            .position(|name| *name == entry.name)
            .unwrap_or(ROOT_COMMAND_ORDER.len())
    });
    commands
}

pub fn register_all(registry: &mut CommandRegistry) {
    for entry in all_definitions() {
        registry.register(entry);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_aliases_follow_the_classic_numbering() {
        let mut registry = CommandRegistry::new();
        register_all(&mut registry);

        let expected = [
            ("1", "food"),
            ("2", "travel"),
            ("3", "list"),
            ("4", "budget"),
            ("5", "total"),
            ("6", "exit"),
        ];
        for (alias, name) in expected {
            assert_eq!(registry.get(alias).map(|entry| entry.name), Some(name));
        }
        let names: Vec<_> = registry.names().collect();
        assert_eq!(names, ROOT_COMMAND_ORDER);
    }
}
