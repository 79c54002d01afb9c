use std::fmt;

use dialoguer::{theme::ColorfulTheme, Confirm};

use crate::cli::commands::CommandError;
use crate::cli::output::{self, OutputPreferences};
use crate::config::Config;

/// Print an informational message via the standard shell output helpers.
pub fn print_info(message: impl fmt::Display) {
    output::info(message);
}

/// Print a warning message via the standard shell output helpers.
pub fn print_warning(message: impl fmt::Display) {
    output::warning(message);
}

/// Print an error message via the standard shell output helpers.
pub fn print_error(message: impl fmt::Display) {
    output::error(message);
}

/// Print a success message via the standard shell output helpers.
pub fn print_success(message: impl fmt::Display) {
    output::success(message);
}

/// Pushes configuration-driven preferences into the output layer.
pub fn apply_config(config: &Config) {
    output::set_preferences(OutputPreferences::from(config));
    if config.ui_color_enabled && !config.screen_reader_mode {
        colored::control::unset_override();
    } else {
        colored::control::set_override(false);
    }
}

/// Prompt the user for confirmation with a yes/no question.
pub fn confirm_action(prompt: &str) -> Result<bool, CommandError> {
    Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .default(false)
        .interact()
        .map_err(CommandError::from)
}
