use crate::cli::output;
use crate::ledger::{DisplaySink, LedgerDisplay};

/// Prints the four display slots to stdout after each mutating event.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalDisplay;

impl TerminalDisplay {
    pub fn print(display: &LedgerDisplay) {
        let rows: Vec<(&str, &str)> = display
            .rows()
            .into_iter()
            .map(|(slot, value)| (slot.label(), value))
            .collect();
        output::two_column(&rows);
    }
}

impl DisplaySink for TerminalDisplay {
    fn render(&mut self, display: &LedgerDisplay) {
        Self::print(display);
    }
}
