use strsim::levenshtein;

use crate::cli::commands::{CommandEntry, CommandError, CommandTable};
use crate::cli::io as cli_io;
use crate::cli::ui::{display::TerminalDisplay, prompts::TerminalAmountProvider};
use crate::config::{Config, ConfigManager};
use crate::errors::CliError;
use crate::ledger::{EventOutcome, LedgerEvent, Session};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoopControl {
    Continue,
    Exit,
}

/// State owned by one shell run: the ledger session plus preferences.
pub struct ShellContext {
    pub mode: CliMode,
    pub commands: CommandTable,
    pub session: Session<TerminalDisplay>,
    pub prompt: TerminalAmountProvider,
    pub config_manager: ConfigManager,
    pub config: Config,
}

impl ShellContext {
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        let config_manager = ConfigManager::new()?;
        Self::with_config_manager(mode, config_manager)
    }

    pub fn with_config_manager(
        mode: CliMode,
        config_manager: ConfigManager,
    ) -> Result<Self, CliError> {
        let config = config_manager.load()?;
        cli_io::apply_config(&config);

        Ok(ShellContext {
            mode,
            commands: CommandTable::standard(),
            session: Session::new(TerminalDisplay),
            prompt: TerminalAmountProvider::new(mode),
            config_manager,
            config,
        })
    }

    pub fn prompt_text(&self) -> String {
        format!("spendchart [{}] > ", self.session.display().balance)
    }

    pub fn command(&self, name: &str) -> Option<&CommandEntry> {
        self.commands.get(name)
    }

    /// Forwards an event into the session, prompting through the terminal
    /// provider when the event needs an amount.
    pub(crate) fn apply_event(&mut self, event: LedgerEvent) -> Result<EventOutcome, CommandError> {
        let outcome = self.session.dispatch(event, &mut self.prompt)?;
        Ok(outcome)
    }

    pub(crate) fn persist_config(&self) -> Result<(), CommandError> {
        self.config_manager.save(&self.config)?;
        cli_io::apply_config(&self.config);
        Ok(())
    }

    pub(crate) fn dispatch(
        &mut self,
        command: &str,
        raw: &str,
        args: &[&str],
    ) -> Result<LoopControl, CommandError> {
        if let Some(handler) = self.commands.get(command).map(|entry| entry.handler) {
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

    pub(crate) fn suggest_command(&self, input: &str) {
        cli_io::print_warning(format!("Unknown command `{}`.", input));
        let lowered = input.to_ascii_lowercase();
        let mut suggestions: Vec<(usize, &str)> = self
            .commands
            .names()
            .map(|key| (levenshtein(key, &lowered), key))
            .collect();
        suggestions.sort_by_key(|(distance, _)| *distance);

        if let Some((distance, best)) = suggestions.first() {
            if *distance <= 3 {
                cli_io::print_info(format!("Suggestion: `{}`?", best));
            }
        }
    }

    pub(crate) fn confirm_exit(&self) -> Result<bool, CliError> {
        if self.mode == CliMode::Script || !self.config.confirm_exit {
            return Ok(true);
        }
        cli_io::confirm_action("Exit SpendChart? All figures will be discarded.")
            .map_err(|err| match err {
                CommandError::Dialoguer(err) => CliError::Dialoguer(err),
                CommandError::Io(err) => CliError::from(err),
                other => CliError::from(std::io::Error::other(other.to_string())),
            })
    }

    pub(crate) fn report_error(&self, err: CommandError) -> Result<(), CliError> {
        match err {
            CommandError::ExitRequested => Ok(()),
            CommandError::InvalidArguments(message) => {
                cli_io::print_error(&message);
                cli_io::print_info("Use `help <command>` for usage details.");
                Ok(())
            }
            other => {
                cli_io::print_error(other.to_string());
                Ok(())
            }
        }
    }
}
