//! spendlog-domain
//!
//! Pure domain models (Expense, User, Snapshot).
//! No I/O, no CLI, no storage. Only data types and core enums.

pub mod common;
pub mod expense;
pub mod snapshot;
pub mod user;

pub use common::*;
pub use expense::*;
pub use snapshot::*;
pub use user::*;
