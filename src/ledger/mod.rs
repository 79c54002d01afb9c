//! Ledger state, line items, and the session adapter that drives them.

pub mod amount;
pub mod category;
#[allow(clippy::module_inception)]
pub mod ledger;
pub mod session;

pub use amount::Amount;
pub use category::{ExpenseCategory, LineItem};
pub use ledger::{BudgetLedger, DisplaySlot, LedgerDisplay};
pub use session::{
    AdjustmentTarget, AmountProvider, DisplaySink, EventOutcome, FixedAmounts, LedgerEvent,
    RecordingSink, Session,
};
