use std::cell::RefCell;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use spendlog_domain::{Expense, ExpenseKind, Snapshot, User};

use crate::{
    storage::SnapshotBackupInfo, validate_snapshot, BudgetService, BudgetStatus, CoreError,
    ExpenseService, SnapshotSession, SnapshotStorage,
};

#[derive(Default)]
struct MemoryStorage {
    stored: RefCell<Option<Snapshot>>,
}

impl SnapshotStorage for MemoryStorage {
    fn save(&self, expenses: &[Expense], user: &User) -> Result<(), CoreError> {
        *self.stored.borrow_mut() = Some(Snapshot::new(expenses.to_vec(), user.clone()));
        Ok(())
    }

    fn load_snapshot(&self) -> Result<Snapshot, CoreError> {
        self.stored
            .borrow()
            .clone()
            .ok_or_else(|| CoreError::Storage("nothing saved".into()))
    }

    fn list_backups(&self) -> Result<Vec<SnapshotBackupInfo>, CoreError> {
        Ok(Vec::new())
    }

    fn restore_backup(&self, backup: &SnapshotBackupInfo) -> Result<Snapshot, CoreError> {
        Err(CoreError::Storage(format!("backup `{}` not found", backup.id)))
    }
}

struct BrokenStorage;

impl SnapshotStorage for BrokenStorage {
    fn save(&self, _expenses: &[Expense], _user: &User) -> Result<(), CoreError> {
        Err(CoreError::Storage("read-only".into()))
    }

    fn load_snapshot(&self) -> Result<Snapshot, CoreError> {
        Err(CoreError::Serde("expected value at line 1 column 1".into()))
    }

    fn list_backups(&self) -> Result<Vec<SnapshotBackupInfo>, CoreError> {
        Ok(Vec::new())
    }

    fn restore_backup(&self, _backup: &SnapshotBackupInfo) -> Result<Snapshot, CoreError> {
        Err(CoreError::Storage("read-only".into()))
    }
}

fn user_with_budget(budget: Decimal) -> User {
    let mut user = User::new("Asha");
    user.set_monthly_budget(budget);
    user
}

#[test]
fn empty_ledger_totals_zero() {
    let service = ExpenseService::new();
    assert_eq!(service.total_expense(), Decimal::ZERO);
    assert!(service.is_empty());
    assert_eq!(service.display_lines("₹").count(), 0);
}

#[test]
fn total_is_order_independent_and_exact() {
    let amounts = [dec!(0.10), dec!(0.20), dec!(1999.99), dec!(0.01)];
    let mut forward = ExpenseService::new();
    let mut backward = ExpenseService::new();
    for amount in amounts {
        forward.add_expense(Expense::food(amount, "2024-01-01"));
    }
    for amount in amounts.iter().rev() {
        backward.add_expense(Expense::travel(*amount, "2024-01-01"));
    }
    assert_eq!(forward.total_expense(), dec!(2000.30));
    assert_eq!(forward.total_expense(), backward.total_expense());
}

#[test]
fn food_and_travel_scenario_checks_budget() {
    let mut service = ExpenseService::new();
    service.add_expense(Expense::food(dec!(500), "2024-01-01"));
    service.add_expense(Expense::travel(dec!(300), "2024-01-02"));
    assert_eq!(service.total_expense(), dec!(800));

    let mut user = User::new("Asha");
    BudgetService::set_monthly_budget(&mut user, dec!(700)).unwrap();
    assert!(service.check_budget(&user));

    BudgetService::set_monthly_budget(&mut user, dec!(900)).unwrap();
    assert!(!service.check_budget(&user));
}

#[test]
fn zero_budget_never_triggers() {
    let mut service = ExpenseService::new();
    service.add_expense(Expense::food(dec!(1000000), "2024-01-01"));
    assert!(!service.check_budget(&User::new("Asha")));
    assert_eq!(
        service.budget_status(&User::new("Asha")),
        BudgetStatus::Unset {
            spent: dec!(1000000)
        }
    );
}

#[test]
fn budget_equal_to_total_is_not_exceeded() {
    let mut service = ExpenseService::new();
    service.add_expense(Expense::food(dec!(250.50), "2024-01-01"));
    let user = user_with_budget(dec!(250.50));
    assert!(!service.check_budget(&user));
    assert_eq!(
        service.budget_status(&user),
        BudgetStatus::Within {
            budget: dec!(250.50),
            spent: dec!(250.50),
            remaining: Decimal::ZERO,
        }
    );
}

#[test]
fn budget_status_reports_overage() {
    let mut service = ExpenseService::new();
    service.add_expense(Expense::travel(dec!(120), "2024-01-03"));
    let status = service.budget_status(&user_with_budget(dec!(100)));
    assert!(status.is_exceeded());
    assert_eq!(
        status,
        BudgetStatus::Exceeded {
            budget: dec!(100),
            spent: dec!(120),
            overage: dec!(20),
        }
    );
}

#[test]
fn negative_amount_is_rejected_before_reaching_ledger() {
    let mut service = ExpenseService::new();
    service.add_expense(Expense::food(dec!(10), "2024-01-01"));

    let err = service
        .record(ExpenseKind::Food, dec!(-10), "2024-01-02")
        .expect_err("negative amount must fail");
    assert!(matches!(err, CoreError::InvalidExpense(_)));

    let err = service
        .record(ExpenseKind::Travel, Decimal::ZERO, "2024-01-02")
        .expect_err("zero amount must fail");
    assert_eq!(err.to_string(), "Invalid expense: Amount must be positive");
    assert_eq!(service.len(), 1);
}

#[test]
fn amount_that_would_overflow_total_is_rejected() {
    let mut service = ExpenseService::new();
    service
        .record(ExpenseKind::Food, Decimal::MAX, "2024-01-01")
        .unwrap();

    let err = service
        .record(ExpenseKind::Food, Decimal::MAX, "2024-01-02")
        .expect_err("second maximal amount must fail");
    assert_eq!(err.to_string(), "Invalid expense: Amount too large");
    assert_eq!(service.len(), 1);
    assert_eq!(service.total_expense(), Decimal::MAX);
    assert_eq!(service.checked_total(), Some(Decimal::MAX));

    let user = user_with_budget(dec!(700));
    assert!(service.check_budget(&user));
    assert_eq!(
        service.budget_status(&user),
        BudgetStatus::Exceeded {
            budget: dec!(700),
            spent: Decimal::MAX,
            overage: Decimal::MAX - dec!(700),
        }
    );
}

#[test]
fn unvalidated_entries_saturate_instead_of_panicking() {
    let mut service = ExpenseService::new();
    service.add_expense(Expense::travel(Decimal::MAX, "2024-01-01"));
    service.add_expense(Expense::travel(Decimal::MAX, "2024-01-02"));

    assert_eq!(service.checked_total(), None);
    assert_eq!(service.total_expense(), Decimal::MAX);
    assert_eq!(service.totals_by_category()[0].total, Decimal::MAX);
}

#[test]
fn blank_date_is_rejected() {
    let mut service = ExpenseService::new();
    let err = service
        .record(ExpenseKind::Food, dec!(5), "   ")
        .expect_err("blank date must fail");
    assert!(matches!(err, CoreError::InvalidExpense(_)));
    assert!(service.is_empty());
}

#[test]
fn record_appends_in_insertion_order() {
    let mut service = ExpenseService::new();
    service
        .record(ExpenseKind::Travel, dec!(300), "2024-01-02")
        .unwrap();
    let recorded = service
        .record(ExpenseKind::Food, dec!(500), " 2024-01-01 ")
        .unwrap();
    assert_eq!(recorded.date(), "2024-01-01");

    let lines: Vec<_> = service.display_lines("₹").collect();
    assert_eq!(
        lines,
        vec![
            "2024-01-02 | Travel | ₹300.00".to_string(),
            "2024-01-01 | Food | ₹500.00".to_string(),
        ]
    );
}

#[test]
fn negative_budget_is_rejected_and_user_unchanged() {
    let mut user = user_with_budget(dec!(400));
    let err = BudgetService::set_monthly_budget(&mut user, dec!(-1)).unwrap_err();
    assert!(matches!(err, CoreError::InvalidBudget(_)));
    assert_eq!(user.monthly_budget(), dec!(400));

    BudgetService::set_monthly_budget(&mut user, Decimal::ZERO).unwrap();
    assert!(!user.has_budget());
}

#[test]
fn negative_raw_budget_counts_as_unset() {
    let mut service = ExpenseService::new();
    service.add_expense(Expense::food(dec!(1), "2024-01-01"));
    assert!(!service.check_budget(&user_with_budget(dec!(-50))));
}

#[test]
fn totals_by_category_keep_first_seen_order() {
    let mut service = ExpenseService::new();
    service.add_expense(Expense::travel(dec!(40), "d1"));
    service.add_expense(Expense::food(dec!(10), "d2"));
    service.add_expense(Expense::travel(dec!(2.5), "d3"));

    let totals = service.totals_by_category();
    assert_eq!(totals.len(), 2);
    assert_eq!(totals[0].kind, ExpenseKind::Travel);
    assert_eq!(totals[0].count, 2);
    assert_eq!(totals[0].total, dec!(42.5));
    assert_eq!(totals[1].kind, ExpenseKind::Food);
    assert_eq!(totals[1].total, dec!(10));
}

#[test]
fn session_round_trips_through_storage() {
    let storage = MemoryStorage::default();
    let mut session = SnapshotSession::fresh("Asha");
    session
        .service
        .record(ExpenseKind::Food, dec!(500), "2024-01-01")
        .unwrap();
    session
        .service
        .record(ExpenseKind::Travel, dec!(300), "2024-01-02")
        .unwrap();
    BudgetService::set_monthly_budget(&mut session.user, dec!(700)).unwrap();
    session.save(&storage).unwrap();

    let reopened = SnapshotSession::open(&storage, "ignored");
    assert!(reopened.restored);
    assert_eq!(reopened.service.expenses(), session.service.expenses());
    assert_eq!(reopened.user, session.user);
}

#[test]
fn unusable_storage_yields_fresh_session() {
    let session = SnapshotSession::open(&BrokenStorage, "Guest");
    assert!(!session.restored);
    assert!(session.service.is_empty());
    assert_eq!(session.user.name, "Guest");
    assert_eq!(session.user.monthly_budget(), Decimal::ZERO);
    assert!(BrokenStorage.load().is_none());
}

#[test]
fn save_failure_is_reported_not_panicked() {
    let session = SnapshotSession::fresh("Asha");
    let err = session.save(&BrokenStorage).unwrap_err();
    assert_eq!(err.to_string(), "Persistence error: read-only");
}

#[test]
fn snapshot_entries_follow_record_rules() {
    let user = User::new("Asha");
    let valid = Snapshot::new(vec![Expense::food(dec!(5), "2024-01-01")], user.clone());
    assert!(validate_snapshot(&valid).is_ok());

    let negative = Snapshot::new(
        vec![
            Expense::food(dec!(5), "2024-01-01"),
            Expense::travel(dec!(-3), "2024-01-02"),
        ],
        user.clone(),
    );
    let err = validate_snapshot(&negative).unwrap_err();
    assert!(err.to_string().contains("entry 2"), "unexpected error: {err}");

    let blank_date = Snapshot::new(vec![Expense::food(dec!(5), " ")], user.clone());
    assert!(validate_snapshot(&blank_date).is_err());

    let overflowing = Snapshot::new(
        vec![
            Expense::food(Decimal::MAX, "d1"),
            Expense::food(Decimal::MAX, "d2"),
        ],
        user,
    );
    let err = validate_snapshot(&overflowing).unwrap_err();
    assert!(err.to_string().contains("Amount too large"));
}
