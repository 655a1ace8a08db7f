//! Error types for cipher breaking operations

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BreakError {
    #[error("Invalid key length (must be > 0)")]
    InvalidKeyLength,

    #[error("Ciphertext is empty")]
    EmptyCiphertext,
}

pub type Result<T> = std::result::Result<T, BreakError>;
