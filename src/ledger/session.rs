//! Event-driven adapter that owns a [`BudgetLedger`] for one page session.
//!
//! UI layers forward [`LedgerEvent`]s into [`Session::dispatch`]. Budget and
//! savings amounts come from an injected [`AmountProvider`], and every
//! mutating event ends with exactly one render to the [`DisplaySink`].

use std::{collections::VecDeque, fmt};

use super::{
    amount::Amount,
    category::ExpenseCategory,
    ledger::{BudgetLedger, LedgerDisplay},
};
use crate::errors::PromptError;

/// Which running total an add request targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AdjustmentTarget {
    Budget,
    Savings,
}

impl AdjustmentTarget {
    /// The `data-type` attribute of the matching Add+ button.
    pub fn data_type(self) -> &'static str {
        match self {
            AdjustmentTarget::Budget => "budget",
            AdjustmentTarget::Savings => "savings",
        }
    }

    pub fn from_data_type(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "budget" => Some(AdjustmentTarget::Budget),
            "savings" => Some(AdjustmentTarget::Savings),
            _ => None,
        }
    }

    pub fn prompt_label(self) -> &'static str {
        match self {
            AdjustmentTarget::Budget => "Enter amount to add to budget:",
            AdjustmentTarget::Savings => "Enter amount to add to savings:",
        }
    }
}

impl fmt::Display for AdjustmentTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.data_type())
    }
}

/// Input events accepted from the UI surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LedgerEvent {
    LineItemChanged {
        category: ExpenseCategory,
        text: String,
    },
    AddRequested(AdjustmentTarget),
}

impl LedgerEvent {
    pub fn line_item(category: ExpenseCategory, text: impl Into<String>) -> Self {
        LedgerEvent::LineItemChanged {
            category,
            text: text.into(),
        }
    }
}

/// Result of handling one event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventOutcome {
    Applied,
    Cancelled,
}

/// Supplies amounts for add requests. `Ok(None)` means the user cancelled.
pub trait AmountProvider {
    fn request_amount(&mut self, target: AdjustmentTarget) -> Result<Option<Amount>, PromptError>;
}

/// Queue-backed provider; an empty queue behaves like a cancelled prompt.
#[derive(Debug, Default, Clone)]
pub struct FixedAmounts {
    answers: VecDeque<Option<Amount>>,
}

impl FixedAmounts {
    pub fn new(answers: impl IntoIterator<Item = Option<Amount>>) -> Self {
        Self {
            answers: answers.into_iter().collect(),
        }
    }

    pub fn single(amount: Amount) -> Self {
        Self::new([Some(amount)])
    }

    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl AmountProvider for FixedAmounts {
    fn request_amount(&mut self, _target: AdjustmentTarget) -> Result<Option<Amount>, PromptError> {
        Ok(self.answers.pop_front().flatten())
    }
}

/// Receives the display slots after every mutating event.
pub trait DisplaySink {
    fn render(&mut self, display: &LedgerDisplay);
}

/// Keeps every rendered frame, newest last.
#[derive(Debug, Default, Clone)]
pub struct RecordingSink {
    frames: Vec<LedgerDisplay>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames(&self) -> &[LedgerDisplay] {
        &self.frames
    }

    pub fn last(&self) -> Option<&LedgerDisplay> {
        self.frames.last()
    }
}

impl DisplaySink for RecordingSink {
    fn render(&mut self, display: &LedgerDisplay) {
        self.frames.push(display.clone());
    }
}

/// Owns the ledger of one session and the sink it renders to.
pub struct Session<S: DisplaySink> {
    ledger: BudgetLedger,
    sink: S,
}

impl<S: DisplaySink> Session<S> {
    pub fn new(sink: S) -> Self {
        tracing::info!("session started");
        Self {
            ledger: BudgetLedger::new(),
            sink,
        }
    }

    pub fn ledger(&self) -> &BudgetLedger {
        &self.ledger
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn display(&self) -> LedgerDisplay {
        self.ledger.display()
    }

    /// Handles one event to completion.
    ///
    /// A provider error leaves the ledger untouched and skips rendering.
    pub fn dispatch(
        &mut self,
        event: LedgerEvent,
        provider: &mut dyn AmountProvider,
    ) -> Result<EventOutcome, PromptError> {
        match event {
            LedgerEvent::LineItemChanged { category, text } => {
                self.ledger.set_line_item(category, &text);
            }
            LedgerEvent::AddRequested(target) => {
                let Some(amount) = provider.request_amount(target)? else {
                    tracing::debug!(kind = %target, "add request cancelled");
                    return Ok(EventOutcome::Cancelled);
                };
                self.apply_amount(target, amount);
            }
        }
        self.render();
        Ok(EventOutcome::Applied)
    }

    /// Adds an already-validated amount without consulting a provider.
    pub fn add(&mut self, target: AdjustmentTarget, amount: Amount) {
        self.apply_amount(target, amount);
        self.render();
    }

    /// Discards all figures, as reloading the page would.
    pub fn reset(&mut self) {
        self.ledger = BudgetLedger::new();
        tracing::info!("session reset");
        self.render();
    }

    /// Pushes the current display slots to the sink.
    pub fn render(&mut self) {
        let display = self.ledger.display();
        self.sink.render(&display);
    }

    fn apply_amount(&mut self, target: AdjustmentTarget, amount: Amount) {
        match target {
            AdjustmentTarget::Budget => self.ledger.add_to_budget(amount),
            AdjustmentTarget::Savings => self.ledger.add_to_savings(amount),
        }
    }
}
