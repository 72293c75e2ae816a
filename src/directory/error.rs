//! Error definitions for directory operations.

use thiserror::Error;

/// Errors returned by [`Directory`](crate::directory::Directory) operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DirectoryError {
    /// Name is empty or contains characters outside letters, spaces, and
    /// the accented set (á é í ó ú ñ, either case).
    #[error("invalid name: only letters and spaces are allowed")]
    InvalidName,

    /// Phone contains non-separator garbage or the digit count is out of
    /// the 7-15 range.
    #[error("invalid phone: must contain 7 to 15 digits")]
    InvalidPhone,

    /// A contact with the same normalized name is already registered.
    #[error("contact '{0}' already exists")]
    Duplicate(String),

    /// No contact stored under the exact (case-preserved) name.
    #[error("contact '{0}' does not exist")]
    NotFound(String),
}
