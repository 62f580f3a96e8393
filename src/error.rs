use thiserror::Error;

use crate::entities::account::Role;
use crate::storage::StorageError;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    /// Login failed; the current session is left untouched.
    #[error("invalid email or password")]
    InvalidCredentials,

    /// A role-gated mutation was attempted without a permitted role.
    /// `actual` is `None` when no session is active.
    #[error("operation requires one of {required:?}, caller role is {actual:?}")]
    Forbidden {
        required: &'static [Role],
        actual: Option<Role>,
    },

    /// A blob read or write failed. The in-memory mutation that triggered
    /// the write is not rolled back; memory is the source of truth.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}
