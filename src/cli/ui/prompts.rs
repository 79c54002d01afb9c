use std::io::{self, Stdout, Write};

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    terminal::{self, ClearType},
    ExecutableCommand,
};

use crate::cli::io as cli_io;
use crate::cli::shell_context::CliMode;
use crate::cli::ui::test_mode::{self, TextTestInput};
use crate::errors::PromptError;
use crate::ledger::{AdjustmentTarget, Amount, AmountProvider};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextPromptResult {
    Value(String),
    Cancel,
}

/// Reads one line in raw mode. Esc or Ctrl-C cancels, Ctrl-U clears.
pub fn text_input(label: &str) -> io::Result<TextPromptResult> {
    if let Some(scripted) = test_mode::next_text_input(label) {
        return Ok(match scripted {
            TextTestInput::Value(value) => TextPromptResult::Value(value),
            TextTestInput::Cancel => TextPromptResult::Cancel,
        });
    }

    println!("{label}");
    let mut guard = RawModeGuard::activate()?;
    let mut stdout = io::stdout();
    redraw_input(&mut stdout, "")?;
    let mut buffer = String::new();

    loop {
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('c') | KeyCode::Char('C') => {
                    guard.deactivate();
                    println!();
                    return Ok(TextPromptResult::Cancel);
                }
                KeyCode::Char('u') | KeyCode::Char('U') => {
                    buffer.clear();
                    redraw_input(&mut stdout, &buffer)?;
                    continue;
                }
                _ => {}
            }
        }

        match key.code {
            KeyCode::Esc => {
                guard.deactivate();
                println!();
                return Ok(TextPromptResult::Cancel);
            }
            KeyCode::Enter => {
                guard.deactivate();
                println!();
                return Ok(TextPromptResult::Value(buffer));
            }
            KeyCode::Backspace => {
                buffer.pop();
                redraw_input(&mut stdout, &buffer)?;
            }
            KeyCode::Char(ch) => {
                buffer.push(ch);
                redraw_input(&mut stdout, &buffer)?;
            }
            _ => {}
        }
    }
}

fn redraw_input(stdout: &mut Stdout, buffer: &str) -> io::Result<()> {
    stdout.execute(cursor::MoveToColumn(0))?;
    stdout.execute(terminal::Clear(ClearType::CurrentLine))?;
    write!(stdout, "> {}", buffer)?;
    stdout.flush()
}

struct RawModeGuard {
    active: bool,
}

impl RawModeGuard {
    fn activate() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(Self { active: true })
    }

    fn deactivate(&mut self) {
        if self.active {
            let _ = terminal::disable_raw_mode();
            self.active = false;
        }
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        self.deactivate();
    }
}

/// Asks the person at the terminal for budget and savings amounts.
///
/// Unreadable or negative answers are reported and treated as a cancel.
#[derive(Debug, Clone, Copy)]
pub struct TerminalAmountProvider {
    mode: CliMode,
}

impl TerminalAmountProvider {
    pub fn new(mode: CliMode) -> Self {
        Self { mode }
    }
}

impl AmountProvider for TerminalAmountProvider {
    fn request_amount(&mut self, target: AdjustmentTarget) -> Result<Option<Amount>, PromptError> {
        if self.mode == CliMode::Script && !test_mode::is_enabled() {
            cli_io::print_warning(format!(
                "No prompt available in script mode; pass an amount: `{target} add <amount>`."
            ));
            return Ok(None);
        }

        let answer = text_input(target.prompt_label())?;
        Ok(interpret_answer(target, answer))
    }
}

fn interpret_answer(target: AdjustmentTarget, answer: TextPromptResult) -> Option<Amount> {
    match answer {
        TextPromptResult::Cancel => None,
        TextPromptResult::Value(text) => {
            let amount = Amount::parse_prompt(&text);
            if amount.is_none() {
                cli_io::print_warning(format!(
                    "`{}` is not a valid amount; {target} unchanged.",
                    text.trim()
                ));
            }
            amount
        }
    }
}
