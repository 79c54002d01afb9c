use std::fmt;

use serde::{Deserialize, Serialize};

use super::amount::Amount;

/// The five fixed expense categories, in display order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ExpenseCategory {
    RentMortgage,
    Utilities,
    Groceries,
    Transportation,
    Entertainment,
}

impl ExpenseCategory {
    pub const COUNT: usize = 5;

    pub const ALL: [ExpenseCategory; Self::COUNT] = [
        ExpenseCategory::RentMortgage,
        ExpenseCategory::Utilities,
        ExpenseCategory::Groceries,
        ExpenseCategory::Transportation,
        ExpenseCategory::Entertainment,
    ];

    /// Zero-based position in the fixed ordering.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn label(self) -> &'static str {
        match self {
            ExpenseCategory::RentMortgage => "Rent/Mortgage",
            ExpenseCategory::Utilities => "Utilities",
            ExpenseCategory::Groceries => "Groceries",
            ExpenseCategory::Transportation => "Transportation",
            ExpenseCategory::Entertainment => "Entertainment",
        }
    }

    /// Resolves a 1-based position, a label, or a short alias.
    pub fn lookup(token: &str) -> Option<Self> {
        let needle = token.trim().to_ascii_lowercase();
        if let Ok(position) = needle.parse::<usize>() {
            return position.checked_sub(1).and_then(Self::from_index);
        }
        match needle.as_str() {
            "rent" | "mortgage" | "rent/mortgage" => Some(ExpenseCategory::RentMortgage),
            "utilities" | "utility" => Some(ExpenseCategory::Utilities),
            "groceries" | "grocery" | "food" => Some(ExpenseCategory::Groceries),
            "transportation" | "transport" | "travel" => Some(ExpenseCategory::Transportation),
            "entertainment" | "fun" => Some(ExpenseCategory::Entertainment),
            _ => None,
        }
    }
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One editable expense row.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct LineItem {
    pub category: ExpenseCategory,
    pub amount: Amount,
}

impl LineItem {
    pub fn new(category: ExpenseCategory) -> Self {
        Self {
            category,
            amount: Amount::ZERO,
        }
    }

    pub fn label(&self) -> &'static str {
        self.category.label()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_follow_display_order() {
        for (position, category) in ExpenseCategory::ALL.iter().enumerate() {
            assert_eq!(category.index(), position);
            assert_eq!(ExpenseCategory::from_index(position), Some(*category));
        }
        assert_eq!(ExpenseCategory::from_index(5), None);
    }

    #[test]
    fn lookup_accepts_positions_labels_and_aliases() {
        assert_eq!(ExpenseCategory::lookup("1"), Some(ExpenseCategory::RentMortgage));
        assert_eq!(ExpenseCategory::lookup("5"), Some(ExpenseCategory::Entertainment));
        assert_eq!(ExpenseCategory::lookup("0"), None);
        assert_eq!(ExpenseCategory::lookup("6"), None);
        assert_eq!(ExpenseCategory::lookup("Groceries"), Some(ExpenseCategory::Groceries));
        assert_eq!(
            ExpenseCategory::lookup("rent/mortgage"),
            Some(ExpenseCategory::RentMortgage)
        );
        assert_eq!(ExpenseCategory::lookup("transport"), Some(ExpenseCategory::Transportation));
        assert_eq!(ExpenseCategory::lookup("coffee"), None);
    }
}
