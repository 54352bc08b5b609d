#![doc(test(attr(deny(warnings))))]

//! Account Core offers a minimal single-account ledger: immutable transaction
//! records carrying fixed USD conversion rates, aggregate balance queries, and
//! whole-account snapshot persistence keyed by the account number.

pub mod config;
pub mod currency;
pub mod errors;
pub mod ledger;
pub mod storage;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Account Core tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
    }
}
