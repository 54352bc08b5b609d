//! Ledger domain models: accounts and the transactions applied to them.

pub mod account;
pub mod transaction;

pub use account::Account;
pub use transaction::Transaction;
