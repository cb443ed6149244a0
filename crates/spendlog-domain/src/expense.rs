//! Domain types representing individual expenses.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::common::*;

/// Closed set of expense variants. Each variant owns its cost formula.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ExpenseKind {
    Food,
    Travel,
}

impl ExpenseKind {
    pub const ALL: [ExpenseKind; 2] = [ExpenseKind::Food, ExpenseKind::Travel];

    /// Effective cost charged for a recorded `amount`.
    pub fn effective_cost(self, amount: Decimal) -> Decimal {
        match self {
            ExpenseKind::Food => amount,
            ExpenseKind::Travel => amount,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ExpenseKind::Food => "Food",
            ExpenseKind::Travel => "Travel",
        }
    }

    /// Case-insensitive lookup by label.
    pub fn from_label(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.label().eq_ignore_ascii_case(value.trim()))
    }
}

impl fmt::Display for ExpenseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single dated, categorised expense. Never mutated after creation.
///
/// Construction performs no validation; callers check `amount > 0` first.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Expense {
    kind: ExpenseKind,
    amount: Decimal,
    date: String,
}

impl Expense {
    pub fn new(kind: ExpenseKind, amount: Decimal, date: impl Into<String>) -> Self {
        Self {
            kind,
            amount,
            date: date.into(),
        }
    }

    pub fn food(amount: Decimal, date: impl Into<String>) -> Self {
        Self::new(ExpenseKind::Food, amount, date)
    }

    pub fn travel(amount: Decimal, date: impl Into<String>) -> Self {
        Self::new(ExpenseKind::Travel, amount, date)
    }

    pub fn kind(&self) -> ExpenseKind {
        self.kind
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn category(&self) -> &'static str {
        self.kind.label()
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn calculate_expense(&self) -> Decimal {
        self.kind.effective_cost(self.amount)
    }

    /// `"<date> | <category> | <symbol><amount>"`
    pub fn display_line(&self, symbol: &str) -> String {
        format!(
            "{} | {} | {}",
            self.date,
            self.category(),
            format_money(symbol, self.amount)
        )
    }
}

impl Displayable for Expense {
    fn display_label(&self) -> String {
        self.display_line(DEFAULT_CURRENCY_SYMBOL)
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_label())
    }
}
