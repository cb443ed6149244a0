//! Command dispatch, argument helpers and session lifecycle for the shell.

use rust_decimal::Decimal;
use std::str::FromStr;
use strsim::levenshtein;
use tracing::{error, info};

use spendlog_core::CoreError;

use crate::errors::CommandError;

use super::{
    io, output,
    shell_context::{CliMode, ShellContext},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoopControl {
    Continue,
    Exit,
}

pub type CommandResult = Result<(), CommandError>;

impl ShellContext {
    pub(crate) fn dispatch(
        &mut self,
        command: &str,
        raw: &str,
        args: &[&str],
    ) -> Result<LoopControl, CommandError> {
        if let Some(handler) = self.registry.handler(command) {
            match handler(self, args) {
                Ok(()) => Ok(LoopControl::Continue),
                Err(CommandError::ExitRequested) => Ok(LoopControl::Exit),
                Err(err) => Err(err),
            }
        } else {
            self.suggest_command(raw);
            Ok(LoopControl::Continue)
        }
    }

    /// Tokenizes and dispatches one input line.
    pub(crate) fn process_line(&mut self, line: &str) -> Result<LoopControl, CommandError> {
        let tokens = match super::shell::parse_command_line(line) {
            Ok(tokens) => tokens,
            Err(err) => {
                output::warning(err);
                return Ok(LoopControl::Continue);
            }
        };

        let Some(raw) = tokens.first() else {
            return Ok(LoopControl::Continue);
        };
        let command = raw.to_lowercase();
        let args: Vec<&str> = tokens.iter().skip(1).map(String::as_str).collect();

        match self.dispatch(&command, raw, &args) {
            Ok(LoopControl::Exit) => {
                self.running = false;
                Ok(LoopControl::Exit)
            }
            other => other,
        }
    }

    pub(crate) fn suggest_command(&self, input: &str) {
        output::warning(format!(
            "Unknown command `{}`. Type `help` to see available commands.",
            input
        ));

        let needle = input.to_lowercase();
        let best = self
            .registry
            .names()
            .map(|key| (levenshtein(key, &needle), key))
            .min_by_key(|(distance, _)| *distance);

        if let Some((distance, name)) = best {
            if distance <= 3 {
                output::hint(format!("Did you mean `{}`?", name));
            }
        }
    }

    pub(crate) fn report_error(&self, err: CommandError) {
        match err {
            CommandError::ExitRequested => {}
            CommandError::InvalidArguments(message) => {
                output::error(message);
                output::hint("Use `help <command>` for usage details.");
            }
            CommandError::Core(CoreError::InvalidExpense(message))
            | CommandError::Core(CoreError::InvalidBudget(message)) => {
                output::error(message);
            }
            other => output::error(other),
        }
    }

    pub(crate) fn confirm_exit(&self) -> Result<bool, CommandError> {
        if self.mode == CliMode::Script {
            return Ok(true);
        }
        Ok(io::confirm_action(&self.theme, "Exit and save?", true)?)
    }

    /// Returns `args[index]`, prompting for it in interactive mode.
    pub(crate) fn require_arg(
        &self,
        args: &[&str],
        index: usize,
        prompt: &str,
        usage: &str,
    ) -> Result<String, CommandError> {
        if let Some(value) = args.get(index) {
            return Ok((*value).to_string());
        }
        match self.mode {
            CliMode::Interactive => Ok(io::prompt_text(&self.theme, prompt)?),
            CliMode::Script => Err(CommandError::InvalidArguments(format!("Usage: {usage}"))),
        }
    }

    /// Writes the snapshot on the way out. A failed write is reported, never fatal.
    pub(crate) fn shutdown(&mut self) {
        self.running = false;
        match self.session.save(&self.storage) {
            Ok(()) => {
                info!(
                    expenses = self.session.service.len(),
                    path = %self.storage.snapshot_path().display(),
                    "snapshot saved"
                );
                output::success("Data saved. Bye!");
            }
            Err(err) => {
                error!("failed to save snapshot: {err}");
                output::warning(format!("Could not save data: {err}"));
                output::info("Bye!");
            }
        }
    }
}

pub(crate) fn parse_amount(raw: &str) -> Result<Decimal, CommandError> {
    let cleaned = raw.trim().replace(',', "");
    Decimal::from_str(&cleaned)
        .map_err(|_| CommandError::InvalidArguments(format!("`{}` is not a valid amount", raw)))
}
