pub mod config;
pub mod ledger;
pub mod system;

use std::io;

use thiserror::Error;

use crate::cli::shell_context::ShellContext;
use crate::config::ConfigError;
use crate::errors::PromptError;

/// Root commands in the order `help` lists them.
pub(crate) const ROOT_COMMAND_ORDER: &[&str] = &[
    "set", "clear", "budget", "savings", "show", "items", "reset", "config", "help", "version",
    "exit",
];

pub type CommandResult = Result<(), CommandError>;

pub type CommandHandler = fn(&mut ShellContext, &[&str]) -> CommandResult;

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("{0}")]
    InvalidArguments(String),
    #[error("{0}")]
    Message(String),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Prompt(#[from] PromptError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Dialoguer(#[from] dialoguer::Error),
    #[error("exit requested")]
    ExitRequested,
}

/// One shell command plus the words its arguments complete to.
pub struct CommandEntry {
    pub name: &'static str,
    pub description: &'static str,
    pub usage: &'static str,
    /// Completion words for each argument position, first argument first.
    pub arguments: &'static [&'static [&'static str]],
    pub handler: CommandHandler,
}

impl CommandEntry {
    pub const fn new(
        name: &'static str,
        description: &'static str,
        usage: &'static str,
        handler: CommandHandler,
    ) -> Self {
        Self {
            name,
            description,
            usage,
            arguments: &[],
            handler,
        }
    }

    pub fn with_arguments(self, arguments: &'static [&'static [&'static str]]) -> Self {
        Self { arguments, ..self }
    }

    /// Words offered for the argument at `position` (0 = first argument).
    pub fn argument_words(&self, position: usize) -> &'static [&'static str] {
        self.arguments.get(position).copied().unwrap_or(&[])
    }
}

/// Every shell command, kept in `help` order.
pub struct CommandTable {
    entries: Vec<CommandEntry>,
}

impl CommandTable {
    pub fn standard() -> Self {
        let mut entries = Vec::new();
        entries.extend(ledger::definitions());
        entries.extend(config::definitions());
        entries.extend(system::definitions());
        entries.sort_by_key(|entry| {
            ROOT_COMMAND_ORDER
                .iter()
                .position(|name| *name == entry.name)
                .unwrap_or(ROOT_COMMAND_ORDER.len())
        });
        Self { entries }
    }

    /// Looks a command up by its lowercase name.
    pub fn get(&self, name: &str) -> Option<&CommandEntry> {
        self.entries.iter().find(|entry| entry.name == name)
    }

    pub fn entries(&self) -> &[CommandEntry] {
        &self.entries
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|entry| entry.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_follows_help_order() {
        let table = CommandTable::standard();
        let names: Vec<_> = table.names().collect();
        assert_eq!(names, ROOT_COMMAND_ORDER);
    }

    #[test]
    fn argument_words_follow_positions() {
        let table = CommandTable::standard();
        let config = table.get("config").unwrap();
        assert!(config.argument_words(0).contains(&"set"));
        assert!(config.argument_words(1).contains(&"quiet_mode"));
        assert!(config.argument_words(2).is_empty());
        assert!(table.get("set").unwrap().argument_words(0).contains(&"groceries"));
        assert!(table.get("items").unwrap().argument_words(0).is_empty());
    }
}
