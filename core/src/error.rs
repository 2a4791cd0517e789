use alloc::string::String;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Preference storage is not available")]
    Unavailable,
    #[error("Could not save {key}: {reason}")]
    Write { key: &'static str, reason: String },
}

pub type Result<T> = core::result::Result<T, StoreError>;
