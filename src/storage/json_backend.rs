use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    config::StoreConfig,
    errors::{AccountError, Result},
    ledger::{Account, Transaction},
};

use super::AccountStorage;

const TMP_SUFFIX: &str = "tmp";

/// Version stamp written into every snapshot. Loading a snapshot from a newer
/// schema version fails.
pub const SNAPSHOT_SCHEMA_VERSION: u32 = 1;

/// On-disk record for one account: identity, display name, and the full
/// ordered transaction list. The field list is the whole format — nothing is
/// derived from reflection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountSnapshot {
    pub schema_version: u32,
    pub number: String,
    pub name: String,
    pub transactions: Vec<Transaction>,
}

impl AccountSnapshot {
    pub fn of(account: &Account) -> Self {
        Self {
            schema_version: SNAPSHOT_SCHEMA_VERSION,
            number: account.number().to_string(),
            name: account.name().to_string(),
            transactions: account.transactions().to_vec(),
        }
    }

    pub fn into_account(self) -> Account {
        Account::from_parts(self.number, self.name, self.transactions)
    }
}

/// Stores one pretty-printed JSON snapshot per account at
/// `root/<number>.<extension>`.
#[derive(Debug, Clone)]
pub struct JsonAccountStore {
    root: Option<PathBuf>,
    extension: String,
}

impl JsonAccountStore {
    pub fn new(config: StoreConfig) -> Self {
        Self {
            root: config.root,
            extension: config.extension,
        }
    }

    /// Store over the working directory with the `.acc` extension.
    pub fn with_defaults() -> Self {
        Self::new(StoreConfig::default())
    }

    /// Deterministic number → location mapping. The number is used verbatim
    /// as the file stem; callers own the choice of filesystem-safe numbers.
    pub fn account_path(&self, number: &str) -> PathBuf {
        let file_name = format!("{}.{}", number, self.extension);
        match &self.root {
            Some(root) => root.join(file_name),
            None => PathBuf::from(file_name),
        }
    }

    fn root_dir(&self) -> PathBuf {
        self.root.clone().unwrap_or_else(|| PathBuf::from("."))
    }
}

impl Default for JsonAccountStore {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl AccountStorage for JsonAccountStore {
    fn save(&self, account: &Account) -> Result<()> {
        let path = self.account_path(account.number());
        write_snapshot(&path, &AccountSnapshot::of(account))?;
        debug!(number = account.number(), "account snapshot saved");
        Ok(())
    }

    fn load(&self, number: &str) -> Result<Account> {
        let path = self.account_path(number);
        let snapshot = read_snapshot(&path)?;
        if snapshot.number != number {
            return Err(AccountError::Load(format!(
                "snapshot at `{}` belongs to account `{}`, not `{}`",
                path.display(),
                snapshot.number,
                number
            )));
        }
        debug!(number, "account snapshot loaded");
        Ok(snapshot.into_account())
    }

    fn list_accounts(&self) -> Result<Vec<String>> {
        let root = self.root_dir();
        if !root.exists() {
            return Ok(Vec::new());
        }
        let entries = fs::read_dir(&root).map_err(|err| AccountError::Load(err.to_string()))?;
        let mut numbers = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|err| AccountError::Load(err.to_string()))?;
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some(self.extension.as_str()) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) {
                numbers.push(stem.to_string());
            }
        }
        numbers.sort();
        Ok(numbers)
    }
}

/// Writes the snapshot as pretty-printed JSON, staging through a sibling temp
/// file and committing with a rename so a failed write never replaces prior
/// content.
pub fn write_snapshot(path: &Path, snapshot: &AccountSnapshot) -> Result<()> {
    let json =
        serde_json::to_string_pretty(snapshot).map_err(|err| AccountError::Save(err.to_string()))?;
    if let Some(parent) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|err| AccountError::Save(err.to_string()))?;
    }
    let tmp = tmp_path(path);
    write_scoped(&tmp, &json).map_err(|err| AccountError::Save(err.to_string()))?;
    fs::rename(&tmp, path).map_err(|err| AccountError::Save(err.to_string()))?;
    Ok(())
}

/// Reads and validates a snapshot from an explicit path. Rejects snapshots
/// stamped with a newer schema version.
pub fn read_snapshot(path: &Path) -> Result<AccountSnapshot> {
    let data = fs::read_to_string(path).map_err(|err| AccountError::Load(err.to_string()))?;
    let snapshot: AccountSnapshot =
        serde_json::from_str(&data).map_err(|err| AccountError::Load(err.to_string()))?;
    if snapshot.schema_version > SNAPSHOT_SCHEMA_VERSION {
        return Err(AccountError::Load(format!(
            "snapshot at `{}` is from a newer schema version ({})",
            path.display(),
            snapshot.schema_version
        )));
    }
    Ok(snapshot)
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

// The file handle is dropped on every exit path; flush surfaces write errors
// before the rename commits.
fn write_scoped(path: &Path, data: &str) -> std::io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn store_with_temp_dir() -> (JsonAccountStore, TempDir) {
        let temp = TempDir::new().expect("temp dir");
        let store = JsonAccountStore::new(StoreConfig::default().with_root(temp.path()));
        (store, temp)
    }

    fn sample_account() -> Account {
        let mut account = Account::new("12345", "Savings account");
        account.apply(Transaction::new(
            100.0,
            NaiveDate::from_ymd_opt(2008, 11, 14).unwrap(),
        ));
        account.apply(
            Transaction::new(250.0, NaiveDate::from_ymd_opt(2009, 3, 12).unwrap())
                .with_currency("EUR", 1.53)
                .with_description("transfer from abroad"),
        );
        account
    }

    #[test]
    fn account_path_joins_number_and_extension() {
        let store = JsonAccountStore::new(
            StoreConfig::default()
                .with_root("/data/accounts")
                .with_extension("snapshot"),
        );
        assert_eq!(
            store.account_path("12345"),
            PathBuf::from("/data/accounts/12345.snapshot")
        );
    }

    #[test]
    fn save_and_load_roundtrip() {
        let (store, _guard) = store_with_temp_dir();
        let account = sample_account();
        store.save(&account).expect("save account");
        let loaded = store.load("12345").expect("load account");
        assert_eq!(loaded, account);
    }

    #[test]
    fn load_rejects_number_mismatch() {
        let (store, _guard) = store_with_temp_dir();
        let snapshot = AccountSnapshot::of(&sample_account());
        write_snapshot(&store.account_path("99999"), &snapshot).expect("write snapshot");

        let err = store.load("99999").expect_err("stored number differs");
        assert!(matches!(err, AccountError::Load(_)));
    }

    #[test]
    fn load_rejects_newer_schema_version() {
        let (store, _guard) = store_with_temp_dir();
        let mut snapshot = AccountSnapshot::of(&sample_account());
        snapshot.schema_version = SNAPSHOT_SCHEMA_VERSION + 1;
        write_snapshot(&store.account_path("12345"), &snapshot).expect("write snapshot");

        let err = store.load("12345").expect_err("newer schema must fail");
        assert!(matches!(err, AccountError::Load(_)));
    }

    #[test]
    fn list_accounts_returns_sorted_numbers() {
        let (store, _guard) = store_with_temp_dir();
        for number in ["31", "7", "2024"] {
            store
                .save(&Account::new(number, "Placeholder"))
                .expect("save account");
        }
        // Foreign extensions are ignored.
        fs::write(store.root_dir().join("notes.txt"), "ignore me").unwrap();

        let numbers = store.list_accounts().expect("list accounts");
        assert_eq!(numbers, vec!["2024", "31", "7"]);
    }

    #[test]
    fn list_accounts_on_missing_root_is_empty() {
        let temp = TempDir::new().expect("temp dir");
        let store =
            JsonAccountStore::new(StoreConfig::default().with_root(temp.path().join("absent")));
        assert!(store.list_accounts().expect("list").is_empty());
    }
}
