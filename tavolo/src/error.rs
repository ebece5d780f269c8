//! Error types for the tavolo library.
//!
//! All fallible operations in the library return [`Result`], whose error
//! type groups failures into recoverable validation, not-found, and
//! conflict classes, plus the ambient I/O, parse, and
//! configuration conditions of the persistence layer.

use std::path::PathBuf;

use thiserror::Error;

use crate::reservation::ReservationId;
use crate::table::TableIndex;

/// Result type alias for operations that may fail with a tavolo error.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the tavolo library.
///
/// Every variant is recoverable: callers are expected to report the error
/// and re-prompt or retry, never abort the process.
#[derive(Debug, Error)]
pub enum Error {
    /// A field failed validation. Names the offending field.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// The requested resource was not found.
    #[error("not found: {resource}")]
    NotFound {
        /// The resource that was not found.
        resource: String,
    },

    /// The requested table is already booked by another reservation.
    #[error("table {table} is already booked")]
    TableConflict {
        /// The table that is already booked (displayed 1-based).
        table: TableIndex,
    },

    /// The requested reservation ID is already in use.
    #[error("reservation ID '{id}' already exists")]
    IdConflict {
        /// The colliding reservation ID.
        id: ReservationId,
    },

    /// An account with the given username already exists.
    #[error("account '{username}' already exists")]
    AccountExists {
        /// The colliding username.
        username: String,
    },

    /// A persisted record could not be parsed.
    #[error("malformed record at {}:{line}: {message}", path.display())]
    Parse {
        /// The file containing the malformed record.
        path: PathBuf,
        /// The 1-based line number of the malformed record.
        line: usize,
        /// A description of what was wrong with the record.
        message: String,
    },

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A configuration file could not be read or parsed.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),
}

impl From<crate::validate::ValidationError> for Error {
    fn from(err: crate::validate::ValidationError) -> Self {
        Self::Validation {
            field: err.field,
            message: err.message,
        }
    }
}

impl From<crate::table::InvalidTableError> for Error {
    fn from(err: crate::table::InvalidTableError) -> Self {
        Self::Validation {
            field: "table".into(),
            message: err.to_string(),
        }
    }
}

impl Error {
    /// Check if this error is a validation failure.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    /// Check if this error indicates a missing reservation or account.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this error is a table, ID, or account collision.
    #[must_use]
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            Self::TableConflict { .. } | Self::IdConflict { .. } | Self::AccountExists { .. }
        )
    }
}
