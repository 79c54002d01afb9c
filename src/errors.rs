use thiserror::Error;

use crate::config::ConfigError;

/// Failure raised by an amount prompt before any value was collected.
#[derive(Debug, Error)]
pub enum PromptError {
    #[error("prompt I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("prompt unavailable: {0}")]
    Unavailable(String),
}

/// Unified error type for the configuration and file layers.
#[derive(Debug, Error)]
pub enum SpendChartError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// User-facing shell error wrapper.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] SpendChartError),
    #[error("Line editor error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),
    #[error("Prompt error: {0}")]
    Dialoguer(#[from] dialoguer::Error),
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::Core(SpendChartError::Io(err))
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        CliError::Core(SpendChartError::Config(err))
    }
}
