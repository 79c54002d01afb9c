use std::io::{self, BufRead};

use rustyline::{
    completion::{Completer, Pair},
    error::ReadlineError,
    highlight::Highlighter,
    hint::Hinter,
    history::DefaultHistory,
    validate::Validator,
    Cmd, Context as ReadlineContext, Editor, Helper, KeyEvent,
};

use crate::cli::commands::CommandTable;
use crate::cli::io as cli_io;
use crate::cli::shell_context::{CliMode, LoopControl, ShellContext};
use crate::cli::ui::display::TerminalDisplay;
use crate::errors::CliError;

pub const SCRIPT_MODE_VAR: &str = "SPENDCHART_CLI_SCRIPT";

pub fn run_cli() -> Result<(), CliError> {
    let mode = if std::env::var_os(SCRIPT_MODE_VAR).is_some() {
        CliMode::Script
    } else {
        CliMode::Interactive
    };

    let mut context = ShellContext::new(mode)?;
    match mode {
        CliMode::Interactive => run_interactive(&mut context),
        CliMode::Script => run_script(&mut context),
    }
}

fn run_interactive(context: &mut ShellContext) -> Result<(), CliError> {
    let mut editor = Editor::<LedgerHelper, DefaultHistory>::new()?;
    editor.set_helper(Some(LedgerHelper::new(&context.commands)));
    editor.bind_sequence(KeyEvent::from('?'), Cmd::Complete);

    cli_io::print_info("SpendChart. Type `help` for commands.");
    TerminalDisplay::print(&context.session.display());

    loop {
        match editor.readline(&context.prompt_text()) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    editor.add_history_entry(line.trim()).ok();
                }
                if run_line(context, &line)? == LoopControl::Exit {
                    return Ok(());
                }
            }
            Err(ReadlineError::Interrupted) => {
                if context.confirm_exit()? {
                    return Ok(());
                }
            }
            Err(ReadlineError::Eof) => {
                cli_io::print_info("Exiting shell.");
                return Ok(());
            }
            Err(err) => return Err(err.into()),
        }
    }
}

fn run_script(context: &mut ShellContext) -> Result<(), CliError> {
    for line in io::stdin().lock().lines() {
        if run_line(context, &line?)? == LoopControl::Exit {
            break;
        }
    }
    Ok(())
}

/// Runs one input line. Command failures are reported and the shell goes on.
fn run_line(context: &mut ShellContext, line: &str) -> Result<LoopControl, CliError> {
    let tokens = match tokenize(line) {
        Ok(Some(tokens)) => tokens,
        Ok(None) => return Ok(LoopControl::Continue),
        Err(err) => {
            cli_io::print_warning(format!("Could not read `{}`: {err}", line.trim()));
            return Ok(LoopControl::Continue);
        }
    };

    let Some((raw, rest)) = tokens.split_first() else {
        return Ok(LoopControl::Continue);
    };
    let args: Vec<&str> = rest.iter().map(String::as_str).collect();
    match context.dispatch(&raw.to_lowercase(), raw, &args) {
        Ok(control) => Ok(control),
        Err(err) => {
            context.report_error(err)?;
            Ok(LoopControl::Continue)
        }
    }
}

/// Splits a line shell-style. Blank lines and `#` comments yield `None`.
fn tokenize(line: &str) -> Result<Option<Vec<String>>, shell_words::ParseError> {
    let tokens = shell_words::split(line)?;
    match tokens.first() {
        None => Ok(None),
        Some(first) if first.starts_with('#') => Ok(None),
        Some(_) => Ok(Some(tokens)),
    }
}

/// Completes command names, then the argument words each command declares.
struct LedgerHelper {
    commands: Vec<(&'static str, &'static [&'static [&'static str]])>,
}

impl LedgerHelper {
    fn new(table: &CommandTable) -> Self {
        Self {
            commands: table
                .entries()
                .iter()
                .map(|entry| (entry.name, entry.arguments))
                .collect(),
        }
    }

    /// Replacement start and the words matching the token under the cursor.
    fn candidates(&self, head: &str) -> (usize, Vec<&'static str>) {
        let start = head.rfind(char::is_whitespace).map_or(0, |idx| idx + 1);
        let needle = head[start..].to_ascii_lowercase();
        let typed: Vec<String> = head[..start]
            .split_whitespace()
            .map(str::to_ascii_lowercase)
            .collect();

        let words: Vec<&'static str> = match typed.split_first() {
            None => self.commands.iter().map(|(name, _)| *name).collect(),
            Some((command, args)) => self
                .commands
                .iter()
                .find(|(name, _)| *name == command.as_str())
                .and_then(|(_, arguments)| arguments.get(args.len()))
                .map(|words| words.to_vec())
                .unwrap_or_default(),
        };

        let matches = words
            .into_iter()
            .filter(|word| word.starts_with(&needle))
            .collect();
        (start, matches)
    }
}

impl Helper for LedgerHelper {}

impl Completer for LedgerHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &ReadlineContext<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let (start, words) = self.candidates(&line[..pos]);
        let pairs = words
            .into_iter()
            .map(|word| Pair {
                display: word.to_string(),
                replacement: word.to_string(),
            })
            .collect();
        Ok((start, pairs))
    }
}

impl Hinter for LedgerHelper {
    type Hint = String;
}

impl Highlighter for LedgerHelper {}

impl Validator for LedgerHelper {}

#[cfg(test)]
mod tests {
    use super::*;

    fn helper() -> LedgerHelper {
        LedgerHelper::new(&CommandTable::standard())
    }

    #[test]
    fn completes_command_names() {
        assert_eq!(helper().candidates("s"), (0, vec!["set", "savings", "show"]));
        assert_eq!(helper().candidates("  bu"), (2, vec!["budget"]));
    }

    #[test]
    fn completes_arguments_per_command() {
        assert_eq!(helper().candidates("set gr"), (4, vec!["groceries"]));
        assert_eq!(helper().candidates("budget "), (7, vec!["add"]));
        assert_eq!(helper().candidates("SAVINGS a"), (8, vec!["add"]));
        assert_eq!(helper().candidates("config set q"), (11, vec!["quiet_mode"]));
        assert_eq!(helper().candidates("help re"), (5, vec!["reset"]));
    }

    #[test]
    fn offers_nothing_past_known_arguments() {
        assert!(helper().candidates("set rent 12").1.is_empty());
        assert!(helper().candidates("items x").1.is_empty());
        assert!(helper().candidates("bogus a").1.is_empty());
    }

    #[test]
    fn quoted_arguments_stay_together() {
        let tokens = tokenize("set \"rent/mortgage\" '1 200'").unwrap();
        assert_eq!(
            tokens,
            Some(vec!["set".to_string(), "rent/mortgage".to_string(), "1 200".to_string()])
        );
    }

    #[test]
    fn blank_and_comment_lines_are_skipped() {
        assert_eq!(tokenize("   ").unwrap(), None);
        assert_eq!(tokenize("# budget add 10").unwrap(), None);
    }

    #[test]
    fn unbalanced_quotes_are_reported() {
        assert!(tokenize("set 'rent 12").is_err());
    }
}
