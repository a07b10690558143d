//! Error types for the zshelf plugin.
//!
//! This module defines the centralized error type [`ZshelfError`] and a type alias
//! [`Result`] for convenient error handling throughout the plugin. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.

use thiserror::Error;

/// The main error type for zshelf plugin operations.
///
/// This enum consolidates all error conditions that can occur during plugin
/// execution, from storage writes to I/O failures and theme loading. Most user
/// interactions never see these: load-side persistence failures degrade to
/// defaults instead of erroring, so the error paths that remain are save
/// failures and initialization problems.
///
/// # Examples
///
/// ```
/// use zshelf::domain::ZshelfError;
///
/// fn persist() -> Result<(), ZshelfError> {
///     Err(ZshelfError::Storage("disk full".to_string()))
/// }
/// ```
#[derive(Debug, Error)]
pub enum ZshelfError {
    /// Storage operation failed.
    ///
    /// Occurs when writing a persisted value fails. Reads never produce this
    /// variant; corrupt or missing values fall back to defaults instead.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations. Automatically converts
    /// from `std::io::Error` using the `#[from]` attribute.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme parsing or application failed.
    ///
    /// Occurs when the plugin cannot read or parse a theme file.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Catalog document parsing failed.
    ///
    /// Only reachable for malformed external catalog documents; the embedded
    /// catalog is validated by tests.
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Communication with the background worker failed.
    ///
    /// Occurs when the worker cannot service a request, typically because its
    /// storage backend failed to initialize.
    #[error("Worker communication error: {0}")]
    Worker(String),
}

/// A specialized `Result` type for zshelf operations.
///
/// This is a type alias for `std::result::Result<T, ZshelfError>` that simplifies
/// function signatures throughout the codebase.
pub type Result<T> = std::result::Result<T, ZshelfError>;
