//! Precondition checks applied before values reach the ledger.

use rust_decimal::Decimal;
use spendlog_domain::Snapshot;

use crate::CoreError;

/// Accepts strictly positive expense amounts.
pub fn validate_amount(amount: Decimal) -> Result<Decimal, CoreError> {
    if amount <= Decimal::ZERO {
        return Err(CoreError::InvalidExpense("Amount must be positive".into()));
    }
    Ok(amount)
}

/// Accepts zero (unset) or positive budgets.
pub fn validate_budget(amount: Decimal) -> Result<Decimal, CoreError> {
    if amount < Decimal::ZERO {
        return Err(CoreError::InvalidBudget(
            "Budget cannot be negative; use 0 to clear it".into(),
        ));
    }
    Ok(amount)
}

/// Rejects blank dates or labels.
pub fn validate_date(date: &str) -> Result<&str, CoreError> {
    let trimmed = date.trim();
    if trimmed.is_empty() {
        return Err(CoreError::InvalidExpense("Date must not be empty".into()));
    }
    Ok(trimmed)
}

/// Applies the `record` rules to every entry of a loaded snapshot.
pub fn validate_snapshot(snapshot: &Snapshot) -> Result<(), CoreError> {
    let mut total = Decimal::ZERO;
    for (index, expense) in snapshot.expenses.iter().enumerate() {
        let entry = index + 1;
        validate_amount(expense.amount())
            .and_then(|_| validate_date(expense.date()))
            .map_err(|err| CoreError::Storage(format!("entry {entry}: {err}")))?;
        total = total
            .checked_add(expense.calculate_expense())
            .ok_or_else(|| CoreError::Storage(format!("entry {entry}: Amount too large")))?;
    }
    Ok(())
}
