use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::currency::{format_currency, parse_lenient, parse_numeric_prefix};

/// A non-negative monetary amount.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Amount(Decimal);

impl Amount {
    pub const ZERO: Amount = Amount(Decimal::ZERO);

    /// Largest representable amount; sums past it stay here.
    pub const MAX: Amount = Amount(Decimal::MAX);

    /// Wraps `value`, rejecting negatives.
    pub fn new(value: Decimal) -> Option<Self> {
        if value.is_sign_negative() && !value.is_zero() {
            None
        } else {
            Some(Self(value.abs()))
        }
    }

    /// Reads line-item text. Unreadable or negative input becomes zero.
    pub fn parse_lenient(raw: &str) -> Self {
        Self::new(parse_lenient(raw)).unwrap_or_else(|| {
            tracing::warn!(input = raw, "negative line-item amount treated as zero");
            Self::ZERO
        })
    }

    /// Validates a prompt answer. `None` means nothing usable was entered.
    pub fn parse_prompt(raw: &str) -> Option<Self> {
        parse_numeric_prefix(raw).and_then(Self::new)
    }

    pub fn value(self) -> Decimal {
        self.0
    }

    pub fn is_zero(self) -> bool {
        self.0.is_zero()
    }

    /// `None` when the sum does not fit a decimal.
    pub fn checked_add(self, rhs: Amount) -> Option<Amount> {
        self.0.checked_add(rhs.0).map(Amount)
    }

    /// Adds `rhs`, capping the result at [`Amount::MAX`].
    pub fn saturating_add(self, rhs: Amount) -> Amount {
        self.checked_add(rhs).unwrap_or(Amount::MAX)
    }
}


impl From<Amount> for Decimal {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

impl TryFrom<Decimal> for Amount {
    type Error = String;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Amount::new(value).ok_or_else(|| format!("amount must not be negative: {value}"))
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_currency(self.0))
    }
}
