//! Whole-account snapshot persistence keyed by the account number.

pub mod json_backend;

use crate::errors::Result;
use crate::ledger::Account;

/// Abstraction over persistence backends that store one snapshot per account.
///
/// The account number is the storage key: implementations derive the snapshot
/// location from it deterministically, with no separate path parameter.
pub trait AccountStorage: Send + Sync {
    /// Persists a snapshot of the account, replacing any prior one. The
    /// in-memory account is never mutated, even on failure.
    fn save(&self, account: &Account) -> Result<()>;

    /// Reads the snapshot stored under `number` and reconstructs the account.
    /// Fails when the stored number does not match the requested one.
    fn load(&self, number: &str) -> Result<Account>;

    /// In-place restore: on success replaces the account's `name` and
    /// `transactions` wholesale; on any failure the account is left untouched.
    fn load_into(&self, account: &mut Account) -> Result<()> {
        let loaded = self.load(account.number())?;
        account.replace_contents(loaded);
        Ok(())
    }

    /// Account numbers with a snapshot in the store, sorted.
    fn list_accounts(&self) -> Result<Vec<String>>;
}

pub use json_backend::{
    read_snapshot, write_snapshot, AccountSnapshot, JsonAccountStore, SNAPSHOT_SCHEMA_VERSION,
};
