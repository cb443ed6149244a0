//! spendlog-core
//!
//! Business logic and services for spendlog.
//! Depends on spendlog-domain. No CLI, no terminal I/O, no direct file access.

pub mod budget_service;
pub mod error;
pub mod expense_service;
pub mod storage;
pub mod validation;

pub use budget_service::*;
pub use error::CoreError;
pub use expense_service::*;
pub use storage::{SnapshotSession, SnapshotStorage};
pub use validation::*;

#[cfg(test)]
mod tests;
