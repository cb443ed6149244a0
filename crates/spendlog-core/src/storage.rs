use std::path::PathBuf;

use spendlog_domain::{Expense, Snapshot, User};
use tracing::{debug, info};

use crate::{CoreError, ExpenseService};

/// Describes a persisted backup of the snapshot file.
#[derive(Debug, Clone)]
pub struct SnapshotBackupInfo {
    pub id: String,
    pub created_at: String,
    pub path: PathBuf,
}

/// Abstraction over persistence backends capable of storing snapshots and backups.
pub trait SnapshotStorage {
    /// Writes expenses and user as one snapshot. Either the whole snapshot
    /// replaces the previous one or the previous one is left as it was.
    fn save(&self, expenses: &[Expense], user: &User) -> Result<(), CoreError>;
    fn load_snapshot(&self) -> Result<Snapshot, CoreError>;
    fn list_backups(&self) -> Result<Vec<SnapshotBackupInfo>, CoreError>;
    fn restore_backup(&self, backup: &SnapshotBackupInfo) -> Result<Snapshot, CoreError>;

    /// Lenient read: a missing, unreadable or incompatible snapshot is "no prior data".
    fn load(&self) -> Option<Snapshot> {
        match self.load_snapshot() {
            Ok(snapshot) => Some(snapshot),
            Err(err) => {
                info!("no prior snapshot loaded: {err}");
                None
            }
        }
    }
}

/// Ledger and user for one running session.
#[derive(Debug, Clone)]
pub struct SnapshotSession {
    pub service: ExpenseService,
    pub user: User,
    pub restored: bool,
}

impl SnapshotSession {
    /// Starts an empty session for `name`.
    pub fn fresh(name: impl Into<String>) -> Self {
        Self {
            service: ExpenseService::new(),
            user: User::new(name),
            restored: false,
        }
    }

    /// Bulk-loads a prior snapshot, replacing whatever the ledger held.
    pub fn from_snapshot(snapshot: Snapshot) -> Self {
        let mut service = ExpenseService::new();
        service.set_expenses(snapshot.expenses);
        Self {
            service,
            user: snapshot.user,
            restored: true,
        }
    }

    /// Loads the prior snapshot, or starts fresh under `fallback_name` when none is usable.
    pub fn open(storage: &dyn SnapshotStorage, fallback_name: impl Into<String>) -> Self {
        match storage.load() {
            Some(snapshot) => {
                debug!(
                    expenses = snapshot.expenses.len(),
                    "restored session from snapshot"
                );
                Self::from_snapshot(snapshot)
            }
            None => Self::fresh(fallback_name),
        }
    }

    pub fn save(&self, storage: &dyn SnapshotStorage) -> Result<(), CoreError> {
        storage.save(self.service.expenses(), &self.user)
    }
}
