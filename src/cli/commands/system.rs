use crate::cli::commands::{CommandEntry, CommandError, CommandResult, ROOT_COMMAND_ORDER};
use crate::cli::help;
use crate::cli::output;
use crate::cli::shell_context::ShellContext;

pub const CLI_VERSION: &str = env!("CARGO_PKG_VERSION");

const HELP_ARGUMENTS: &[&[&str]] = &[ROOT_COMMAND_ORDER];

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new("version", "Show version information", "version", cmd_version),
        CommandEntry::new("help", "Show available commands", "help [command]", cmd_help)
            .with_arguments(HELP_ARGUMENTS),
        CommandEntry::new("exit", "Exit the shell", "exit", cmd_exit),
    ]
}

fn cmd_version(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    output::two_column(&[("SpendChart", CLI_VERSION)]);
    Ok(())
}

fn cmd_help(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if let Some(command) = args.first().map(|name| name.to_lowercase()) {
        if let Some(command) = context.command(&command) {
            help::print_command(command);
        } else {
            context.suggest_command(args[0]);
        }
        return Ok(());
    }

    help::print_overview(&context.commands);
    Ok(())
}

fn cmd_exit(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    Err(CommandError::ExitRequested)
}
