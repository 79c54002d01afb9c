pub mod commands;
pub mod help;
pub mod io;
pub mod output;
mod shell;
pub mod shell_context;
pub mod ui;

pub use shell::{run_cli, SCRIPT_MODE_VAR};
pub use shell_context::{CliMode, ShellContext};
