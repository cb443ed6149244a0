//! Persisted state captured at a point in time.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{expense::Expense, user::User};

pub const CURRENT_SCHEMA_VERSION: u32 = 1;

/// Ledger plus user record. Field order is part of the on-disk format:
/// the expense sequence is written before the user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Snapshot {
    #[serde(default = "Snapshot::schema_version_default")]
    pub schema_version: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saved_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub expenses: Vec<Expense>,
    pub user: User,
}

impl Snapshot {
    pub fn new(expenses: Vec<Expense>, user: User) -> Self {
        Self {
            schema_version: CURRENT_SCHEMA_VERSION,
            saved_at: Some(Utc::now()),
            expenses,
            user,
        }
    }

    pub fn schema_version_default() -> u32 {
        CURRENT_SCHEMA_VERSION
    }
}
