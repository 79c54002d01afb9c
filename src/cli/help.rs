use crate::cli::io;
use crate::cli::output::section as output_section;
use crate::cli::commands::{CommandEntry, CommandTable};

pub fn print_overview(commands: &CommandTable) {
    output_section("Available commands");
    for entry in commands.entries() {
        io::print_info(format!("  {:<10} {}", entry.name, entry.description));
    }
    io::print_info("Use `help <command>` for details.");
}

pub fn print_command(entry: &CommandEntry) {
    output_section(format!("Help: {}", entry.name));
    io::print_info(format!("  Description: {}", entry.description));
    io::print_info(format!("  Usage: {}", entry.usage));
}
