#![doc(test(attr(deny(warnings))))]

//! Cashbook Core offers the ledger, summary, and reporting primitives behind
//! a local-first personal cash-book application: independent cash books,
//! income/expense transactions, debt records, and derived reports.

pub mod cli;
pub mod domain;
pub mod errors;
pub mod report;
pub mod storage;
pub mod store;
pub mod summary;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Cashbook Core tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
    }
}
