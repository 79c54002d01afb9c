use crate::cli::commands::{CommandEntry, CommandError, CommandResult};
use crate::cli::io as cli_io;
use crate::cli::output;
use crate::cli::shell_context::ShellContext;
use crate::config::Config;

const CONFIG_ARGUMENTS: &[&[&str]] = &[&["show", "set"], Config::KEYS];

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "config",
        "Show or change shell preferences",
        "config [show | set <key> <true|false>]",
        cmd_config,
    )
    .with_arguments(CONFIG_ARGUMENTS)]
}

fn cmd_config(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args.first().map(|sub| sub.to_ascii_lowercase()).as_deref() {
        None | Some("show") => {
            show_config(context);
            Ok(())
        }
        Some("set") => {
            let (Some(key), Some(value)) = (args.get(1), args.get(2)) else {
                return Err(CommandError::InvalidArguments(format!(
                    "Usage: config set <key> <true|false> (keys: {})",
                    Config::KEYS.join(", ")
                )));
            };
            context.config.set(key, value)?;
            context.persist_config()?;
            cli_io::print_success(format!("Setting `{key}` updated."));
            Ok(())
        }
        Some(other) => Err(CommandError::InvalidArguments(format!(
            "Unknown config action `{other}`. Usage: config [show | set <key> <value>]"
        ))),
    }
}

fn show_config(context: &ShellContext) {
    let rows: Vec<(&str, String)> = context
        .config
        .entries()
        .into_iter()
        .map(|(key, value)| (key, value.to_string()))
        .collect();
    let borrowed: Vec<(&str, &str)> = rows
        .iter()
        .map(|(key, value)| (*key, value.as_str()))
        .collect();
    output::section("Configuration");
    output::two_column(&borrowed);
    cli_io::print_info(format!(
        "Stored at {}",
        context.config_manager.config_path().display()
    ));
}
