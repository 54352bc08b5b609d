use crate::errors::{AccountError, Result};

use super::transaction::Transaction;

/// A single ledger account: an identity, a display name, and the ordered
/// sequence of transactions applied to it.
///
/// The number doubles as the persistence key and never changes after
/// construction. Transactions are append-only; there is no removal or edit
/// operation.
///
/// ```
/// use account_core::ledger::{Account, Transaction};
/// use chrono::NaiveDate;
///
/// let mut account = Account::new("1001", "Household");
/// assert_eq!((account.balance(), account.all_usd(), account.len()), (0.0, true, 0));
///
/// account.apply(Transaction::new(100.0, NaiveDate::from_ymd_opt(2008, 11, 14).unwrap()));
/// account.apply(Transaction::new(150.0, NaiveDate::from_ymd_opt(2008, 12, 9).unwrap()));
/// account.apply(Transaction::new(-95.0, NaiveDate::from_ymd_opt(2009, 1, 22).unwrap()));
/// assert_eq!((account.balance(), account.all_usd(), account.len()), (155.0, true, 3));
///
/// let eur = Transaction::new(50.0, NaiveDate::from_ymd_opt(2008, 12, 9).unwrap())
///     .with_currency("EUR", 1.53);
/// account.apply(eur);
/// assert_eq!((account.balance(), account.all_usd(), account.len()), (231.5, false, 4));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    number: String,
    name: String,
    transactions: Vec<Transaction>,
}

impl Account {
    /// Creates an empty account with the given number and name.
    ///
    /// The name is taken as-is here; the longer-than-3-characters rule is
    /// enforced by [`Account::set_name`] only. Construction deliberately
    /// skips the check so existing accounts with short names stay loadable.
    pub fn new(number: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            number: number.into(),
            name: name.into(),
            transactions: Vec::new(),
        }
    }

    /// Account number; doubles as the storage key.
    pub fn number(&self) -> &str {
        &self.number
    }

    /// Human-readable label. The number, not the name, is the true
    /// identifier.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Renames the account.
    ///
    /// Fails with [`AccountError::InvalidName`] when the new name has three
    /// characters or fewer; the previous name is kept in that case.
    pub fn set_name(&mut self, name: impl Into<String>) -> Result<()> {
        let name = name.into();
        if name.chars().count() <= 3 {
            return Err(AccountError::InvalidName(name));
        }
        self.name = name;
        Ok(())
    }

    /// Applied transactions in insertion order.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Number of applied transactions.
    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Applies (appends) the given transaction to the account. Never fails.
    pub fn apply(&mut self, transaction: Transaction) {
        self.transactions.push(transaction);
    }

    /// Balance in the reference currency: the sum of every transaction's USD
    /// value, 0.0 for an empty account. Recomputed on every call.
    pub fn balance(&self) -> f64 {
        self.transactions.iter().map(Transaction::usd).sum()
    }

    /// True when every applied transaction is denominated in USD; vacuously
    /// true for an empty account. Short-circuits on the first other currency.
    pub fn all_usd(&self) -> bool {
        self.transactions.iter().all(|t| t.currency.is_reference())
    }

    /// Rebuilds an account from persisted parts, bypassing the name check so
    /// legacy snapshots with short names still load.
    pub(crate) fn from_parts(
        number: String,
        name: String,
        transactions: Vec<Transaction>,
    ) -> Self {
        Self {
            number,
            name,
            transactions,
        }
    }

    /// Wholesale replacement of `name` and `transactions` by a successful
    /// load; the number is left untouched. Callers must validate before
    /// calling so the account never ends up half-replaced.
    pub(crate) fn replace_contents(&mut self, loaded: Account) {
        self.name = loaded.name;
        self.transactions = loaded.transactions;
    }
}
