use account_core::{config::StoreConfig, storage::JsonAccountStore};
use tempfile::TempDir;

/// Builds a store rooted in a fresh temporary directory. The returned guard
/// keeps the directory alive for the duration of the test.
pub fn temp_store() -> (JsonAccountStore, TempDir) {
    let temp = TempDir::new().expect("create temp dir");
    let store = JsonAccountStore::new(StoreConfig::default().with_root(temp.path()));
    (store, temp)
}
