use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{
    amount::Amount,
    category::{ExpenseCategory, LineItem},
};
use crate::currency::format_currency;

/// Budget, savings and the five expense line items of one session.
///
/// `total_expenses` and `balance` are derived on read, so they can never
/// disagree with the inputs they are computed from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetLedger {
    budget: Amount,
    savings: Amount,
    line_items: [LineItem; ExpenseCategory::COUNT],
}

impl Default for BudgetLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl BudgetLedger {
    /// Creates a ledger with every quantity at zero.
    pub fn new() -> Self {
        Self {
            budget: Amount::ZERO,
            savings: Amount::ZERO,
            line_items: ExpenseCategory::ALL.map(LineItem::new),
        }
    }

    /// Replaces a line item's amount with the leniently parsed `raw` text.
    pub fn set_line_item(&mut self, category: ExpenseCategory, raw: &str) {
        let amount = Amount::parse_lenient(raw);
        self.line_items[category.index()].amount = amount;
        tracing::debug!(
            item = category.label(),
            %amount,
            total_expenses = %self.total_expenses(),
            balance = %self.balance(),
            "line item updated"
        );
    }

    /// Increments the budget. A sum past [`Amount::MAX`] is capped there.
    pub fn add_to_budget(&mut self, amount: Amount) {
        self.budget = capped_sum(self.budget, amount, "budget");
        tracing::debug!(%amount, budget = %self.budget, balance = %self.balance(), "budget increased");
    }

    /// Savings are tracked separately and never affect the balance.
    pub fn add_to_savings(&mut self, amount: Amount) {
        self.savings = capped_sum(self.savings, amount, "savings");
        tracing::debug!(%amount, savings = %self.savings, "savings increased");
    }

    pub fn budget(&self) -> Amount {
        self.budget
    }

    pub fn savings(&self) -> Amount {
        self.savings
    }

    pub fn line_items(&self) -> &[LineItem] {
        &self.line_items
    }

    pub fn line_item(&self, category: ExpenseCategory) -> &LineItem {
        &self.line_items[category.index()]
    }

    pub fn total_expenses(&self) -> Amount {
        self.line_items
            .iter()
            .fold(Amount::ZERO, |total, item| total.saturating_add(item.amount))
    }

    /// Budget minus total expenses; negative when overspent.
    pub fn balance(&self) -> Decimal {
        self.budget.value() - self.total_expenses().value()
    }

    /// Formats the four display slots.
    pub fn display(&self) -> LedgerDisplay {
        LedgerDisplay {
            budget: format_currency(self.budget.value()),
            expenses: format_currency(self.total_expenses().value()),
            balance: format_currency(self.balance()),
            savings: format_currency(self.savings.value()),
        }
    }
}

fn capped_sum(current: Amount, amount: Amount, total: &'static str) -> Amount {
    current.checked_add(amount).unwrap_or_else(|| {
        tracing::warn!(total, %amount, "sum exceeds the largest representable amount; capped");
        Amount::MAX
    })
}

/// The four rendered display slots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerDisplay {
    pub budget: String,
    pub expenses: String,
    pub balance: String,
    pub savings: String,
}

impl LedgerDisplay {
    pub fn slot(&self, slot: DisplaySlot) -> &str {
        match slot {
            DisplaySlot::Budget => &self.budget,
            DisplaySlot::Expenses => &self.expenses,
            DisplaySlot::Balance => &self.balance,
            DisplaySlot::Savings => &self.savings,
        }
    }

    pub fn rows(&self) -> Vec<(DisplaySlot, &str)> {
        DisplaySlot::ALL
            .iter()
            .map(|slot| (*slot, self.slot(*slot)))
            .collect()
    }
}

/// Identifies one display slot on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DisplaySlot {
    Budget,
    Expenses,
    Balance,
    Savings,
}

impl DisplaySlot {
    pub const ALL: [DisplaySlot; 4] = [
        DisplaySlot::Budget,
        DisplaySlot::Expenses,
        DisplaySlot::Balance,
        DisplaySlot::Savings,
    ];

    /// Element id of the slot on the SpendChart page.
    pub fn element_id(self) -> &'static str {
        match self {
            DisplaySlot::Budget => "budget",
            DisplaySlot::Expenses => "expenses",
            DisplaySlot::Balance => "balance",
            DisplaySlot::Savings => "savings",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DisplaySlot::Budget => "Budget",
            DisplaySlot::Expenses => "Total Expenses",
            DisplaySlot::Balance => "Remaining Balance",
            DisplaySlot::Savings => "Savings",
        }
    }
}

impl fmt::Display for DisplaySlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
