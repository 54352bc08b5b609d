use std::path::{Path, PathBuf};

const DEFAULT_EXTENSION: &str = "acc";
const DEFAULT_DIR_NAME: &str = ".account_core";
const ACCOUNTS_DIR: &str = "accounts";

/// Where a store keeps its snapshots and which file extension it uses.
///
/// By default snapshots land in the process working directory as
/// `<number>.acc`.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Directory holding the snapshot files; `None` means the working
    /// directory.
    pub root: Option<PathBuf>,
    /// File extension appended to the account number, without the dot.
    pub extension: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            root: None,
            extension: DEFAULT_EXTENSION.into(),
        }
    }
}

impl StoreConfig {
    pub fn with_root(mut self, root: impl AsRef<Path>) -> Self {
        self.root = Some(root.as_ref().to_path_buf());
        self
    }

    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    /// Per-user data directory for managed snapshots,
    /// `~/.account_core/accounts`.
    pub fn user_data_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(DEFAULT_DIR_NAME)
            .join(ACCOUNTS_DIR)
    }
}
