pub mod commands;
pub(crate) mod dispatch;
pub mod help;
pub mod io;
pub mod output;
pub mod registry;
mod shell;
pub mod shell_context;

pub use dispatch::CommandResult;
pub use shell::{run_cli, SCRIPT_ENV_VAR};
