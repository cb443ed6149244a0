//! The single user record persisted alongside the ledger.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub name: String,
    /// Zero means no budget has been set.
    #[serde(default)]
    pub monthly_budget: Decimal,
}

impl User {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            monthly_budget: Decimal::ZERO,
        }
    }

    pub fn monthly_budget(&self) -> Decimal {
        self.monthly_budget
    }

    /// Raw setter. Use `BudgetService::set_monthly_budget` for validated input.
    pub fn set_monthly_budget(&mut self, amount: Decimal) {
        self.monthly_budget = amount;
    }

    pub fn has_budget(&self) -> bool {
        self.monthly_budget > Decimal::ZERO
    }
}
