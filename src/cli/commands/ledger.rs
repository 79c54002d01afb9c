use crate::cli::commands::{CommandEntry, CommandError, CommandResult};
use crate::cli::io as cli_io;
use crate::cli::output;
use crate::cli::shell_context::ShellContext;
use crate::cli::ui::display::TerminalDisplay;
use crate::ledger::{AdjustmentTarget, Amount, EventOutcome, ExpenseCategory, LedgerEvent};

const ITEM_NAMES: &[&str] = &[
    "rent",
    "utilities",
    "groceries",
    "transportation",
    "entertainment",
];

const ITEM_ARGUMENTS: &[&[&str]] = &[ITEM_NAMES];
const ADD_ARGUMENTS: &[&[&str]] = &[&["add"]];
const SHOW_ARGUMENTS: &[&[&str]] = &[&["json"]];

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "set",
            "Set an expense line item",
            "set <1-5|rent|utilities|groceries|transportation|entertainment> [value]",
            cmd_set,
        )
        .with_arguments(ITEM_ARGUMENTS),
        CommandEntry::new("clear", "Clear an expense line item", "clear <item>", cmd_clear)
            .with_arguments(ITEM_ARGUMENTS),
        CommandEntry::new("budget", "Add to the budget", "budget add [amount]", cmd_budget)
            .with_arguments(ADD_ARGUMENTS),
        CommandEntry::new("savings", "Add to savings", "savings add [amount]", cmd_savings)
            .with_arguments(ADD_ARGUMENTS),
        CommandEntry::new("show", "Show budget, expenses, balance and savings", "show [json]", cmd_show)
            .with_arguments(SHOW_ARGUMENTS),
        CommandEntry::new("items", "List expense line items", "items", cmd_items),
        CommandEntry::new("reset", "Discard all figures and start over", "reset", cmd_reset),
    ]
}

fn resolve_item(token: Option<&&str>) -> Result<ExpenseCategory, CommandError> {
    let token = token.ok_or_else(|| {
        CommandError::InvalidArguments("Missing expense item (1-5 or a name).".to_string())
    })?;
    ExpenseCategory::lookup(token).ok_or_else(|| {
        CommandError::InvalidArguments(format!(
            "Unknown expense item `{}`. Use 1-5 or one of: {}.",
            token,
            ITEM_NAMES.join(", ")
        ))
    })
}

fn cmd_set(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let category = resolve_item(args.first())?;
    let text = args.get(1..).map(|rest| rest.join(" ")).unwrap_or_default();
    context.apply_event(LedgerEvent::line_item(category, text))?;
    Ok(())
}

fn cmd_clear(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let category = resolve_item(args.first())?;
    context.apply_event(LedgerEvent::line_item(category, String::new()))?;
    Ok(())
}

fn cmd_budget(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    add_to(context, AdjustmentTarget::Budget, args)
}

fn cmd_savings(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    add_to(context, AdjustmentTarget::Savings, args)
}

fn add_to(context: &mut ShellContext, target: AdjustmentTarget, args: &[&str]) -> CommandResult {
    match args.first().map(|sub| sub.to_ascii_lowercase()) {
        Some(sub) if sub == "add" || sub == "add+" => {}
        _ => {
            return Err(CommandError::InvalidArguments(format!(
                "Usage: {target} add [amount]"
            )))
        }
    }

    match args.get(1) {
        Some(raw) => match Amount::parse_prompt(raw) {
            Some(amount) => {
                context.session.add(target, amount);
                cli_io::print_success(format!("Added {amount} to {target}."));
            }
            None => {
                cli_io::print_warning(format!("`{raw}` is not a valid amount; {target} unchanged."));
            }
        },
        None => match context.apply_event(LedgerEvent::AddRequested(target))? {
            EventOutcome::Applied => cli_io::print_success(format!("Updated {target}.")),
            EventOutcome::Cancelled => cli_io::print_info(format!("No amount entered; {target} unchanged.")),
        },
    }
    Ok(())
}

fn cmd_show(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let display = context.session.display();
    match args.first() {
        Some(format) if format.eq_ignore_ascii_case("json") => {
            let json = serde_json::to_string_pretty(&display)
                .map_err(|err| CommandError::Message(err.to_string()))?;
            println!("{json}");
        }
        Some(other) => {
            return Err(CommandError::InvalidArguments(format!(
                "Unknown format `{other}`. Usage: show [json]"
            )))
        }
        None => TerminalDisplay::print(&display),
    }
    Ok(())
}

fn cmd_items(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let ledger = context.session.ledger();
    let rows: Vec<(String, String)> = ledger
        .line_items()
        .iter()
        .map(|item| {
            (
                format!("{}. {}", item.category.index() + 1, item.label()),
                item.amount.to_string(),
            )
        })
        .collect();
    let borrowed: Vec<(&str, &str)> = rows
        .iter()
        .map(|(label, value)| (label.as_str(), value.as_str()))
        .collect();
    output::section("Expenses");
    output::two_column(&borrowed);
    Ok(())
}

fn cmd_reset(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    context.session.reset();
    cli_io::print_success("All figures reset.");
    Ok(())
}
