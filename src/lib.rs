#![doc(test(attr(deny(warnings))))]

//! spendlog records dated Food and Travel expenses, checks them against a
//! monthly budget, and keeps the session in a JSON snapshot between runs.

pub mod cli;
pub mod errors;
pub mod utils;

pub use spendlog_config as config;
pub use spendlog_core as services;
pub use spendlog_domain as domain;
pub use spendlog_storage_json as storage;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup debug log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::debug!("spendlog tracing initialized");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
        super::init();
    }
}
