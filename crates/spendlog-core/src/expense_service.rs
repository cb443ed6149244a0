//! The in-memory expense ledger and its reporting helpers.

use rust_decimal::Decimal;
use spendlog_domain::{Expense, ExpenseKind, User};

use crate::{validate_amount, validate_date, BudgetService, BudgetStatus, CoreError};

/// Owns the ordered expense sequence for one session.
#[derive(Debug, Clone, Default)]
pub struct ExpenseService {
    expenses: Vec<Expense>,
}

/// Aggregated spend for a single category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTotal {
    pub kind: ExpenseKind,
    pub count: usize,
    pub total: Decimal,
}

impl ExpenseService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an already validated expense.
    pub fn add_expense(&mut self, expense: Expense) {
        self.expenses.push(expense);
    }

    /// Validates the raw values, builds the expense and appends it.
    ///
    /// The ledger is left untouched when the new entry would push the running
    /// total past what `Decimal` can represent.
    pub fn record(
        &mut self,
        kind: ExpenseKind,
        amount: Decimal,
        date: &str,
    ) -> Result<&Expense, CoreError> {
        let amount = validate_amount(amount)?;
        let date = validate_date(date)?;
        let expense = Expense::new(kind, amount, date);
        self.checked_total()
            .and_then(|total| total.checked_add(expense.calculate_expense()))
            .ok_or_else(|| CoreError::InvalidExpense("Amount too large".into()))?;

        let index = self.expenses.len();
        self.expenses.push(expense);
        Ok(&self.expenses[index])
    }

    /// Display strings in insertion order.
    pub fn display_lines<'a>(&'a self, symbol: &'a str) -> impl Iterator<Item = String> + 'a {
        self.expenses
            .iter()
            .map(move |expense| expense.display_line(symbol))
    }

    /// Saturates at `Decimal::MAX`; `record` refuses entries that would get there.
    pub fn total_expense(&self) -> Decimal {
        self.expenses
            .iter()
            .map(Expense::calculate_expense)
            .fold(Decimal::ZERO, Decimal::saturating_add)
    }

    /// Exact total, or `None` on overflow.
    pub fn checked_total(&self) -> Option<Decimal> {
        self.expenses
            .iter()
            .map(Expense::calculate_expense)
            .try_fold(Decimal::ZERO, Decimal::checked_add)
    }

    /// `true` when a budget is set and the running total is above it.
    pub fn check_budget(&self, user: &User) -> bool {
        BudgetService::is_exceeded(user, self.total_expense())
    }

    pub fn budget_status(&self, user: &User) -> BudgetStatus {
        BudgetService::status(user, self.total_expense())
    }

    /// Per-category totals in first-seen order.
    pub fn totals_by_category(&self) -> Vec<CategoryTotal> {
        let mut totals: Vec<CategoryTotal> = Vec::new();
        for expense in &self.expenses {
            match totals.iter_mut().find(|entry| entry.kind == expense.kind()) {
                Some(entry) => {
                    entry.count += 1;
                    entry.total = entry.total.saturating_add(expense.calculate_expense());
                }
                None => totals.push(CategoryTotal {
                    kind: expense.kind(),
                    count: 1,
                    total: expense.calculate_expense(),
                }),
            }
        }
        totals
    }

    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    /// Replaces the whole ledger. Any unsaved entries are dropped.
    pub fn set_expenses(&mut self, expenses: Vec<Expense>) {
        self.expenses = expenses;
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }
}
