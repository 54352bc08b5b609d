use thiserror::Error;

/// Error type that captures account persistence and validation failures.
///
/// Save and load failures carry the underlying cause's message. The same
/// `io::Error` must surface as [`AccountError::Save`] on the write path and
/// [`AccountError::Load`] on the read path, so conversions are explicit
/// `map_err` calls rather than `From` impls.
#[derive(Debug, Error)]
pub enum AccountError {
    #[error("Save failed: {0}")]
    Save(String),
    #[error("Load failed: {0}")]
    Load(String),
    #[error("Invalid account name `{0}`: must be longer than 3 characters")]
    InvalidName(String),
}

pub type Result<T> = std::result::Result<T, AccountError>;
