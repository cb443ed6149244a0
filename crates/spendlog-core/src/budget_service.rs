//! Monthly budget rules.

use rust_decimal::Decimal;
use spendlog_domain::User;

use crate::{validate_budget, CoreError};

pub struct BudgetService;

/// Outcome of comparing spend against the user's monthly budget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BudgetStatus {
    Unset {
        spent: Decimal,
    },
    Within {
        budget: Decimal,
        spent: Decimal,
        remaining: Decimal,
    },
    Exceeded {
        budget: Decimal,
        spent: Decimal,
        overage: Decimal,
    },
}

impl BudgetStatus {
    pub fn is_exceeded(&self) -> bool {
        matches!(self, BudgetStatus::Exceeded { .. })
    }
}

impl BudgetService {
    /// Validated budget update. Negative values are rejected and leave the user untouched.
    pub fn set_monthly_budget(user: &mut User, amount: Decimal) -> Result<(), CoreError> {
        let amount = validate_budget(amount)?;
        user.set_monthly_budget(amount);
        Ok(())
    }

    /// A non-positive budget counts as unset and never triggers.
    pub fn is_exceeded(user: &User, total: Decimal) -> bool {
        user.has_budget() && total > user.monthly_budget()
    }

    pub fn status(user: &User, spent: Decimal) -> BudgetStatus {
        if !user.has_budget() {
            return BudgetStatus::Unset { spent };
        }
        let budget = user.monthly_budget();
        if spent > budget {
            BudgetStatus::Exceeded {
                budget,
                spent,
                overage: spent.saturating_sub(budget),
            }
        } else {
            BudgetStatus::Within {
                budget,
                spent,
                remaining: budget.saturating_sub(spent),
            }
        }
    }
}
