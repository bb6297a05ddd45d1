// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use thiserror::Error;

/// Errors that can occur during persistence operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PersistenceError {
    /// Database connection failed.
    #[error("Database connection failed: {0}")]
    DatabaseConnectionFailed(String),
    /// Database migration failed.
    #[error("Migration failed: {0}")]
    MigrationFailed(String),
    /// Query execution failed.
    #[error("Query failed: {0}")]
    QueryFailed(String),
    /// The requested row does not exist.
    #[error("Not found: {0}")]
    NotFound(String),
    /// An active booking already occupies the requested slot.
    #[error("Slot already booked for barber {barber_id} at {date}")]
    SlotOccupied {
        /// The barber whose slot is occupied.
        barber_id: String,
        /// The requested start instant (RFC 3339).
        date: String,
    },
    /// A uniqueness constraint was violated.
    #[error("Unique constraint violated: {0}")]
    UniqueViolation(String),
    /// A stored record could not be interpreted as domain data.
    #[error("Corrupt record: {0}")]
    CorruptRecord(String),
    /// Initialization error.
    #[error("Initialization error: {0}")]
    InitializationError(String),
    /// Foreign key enforcement is not enabled.
    #[error("Foreign key enforcement is not enabled")]
    ForeignKeyEnforcementNotEnabled,
}

impl From<diesel::result::Error> for PersistenceError {
    fn from(err: diesel::result::Error) -> Self {
        match err {
            diesel::result::Error::NotFound => Self::NotFound(err.to_string()),
            diesel::result::Error::DatabaseError(
                diesel::result::DatabaseErrorKind::UniqueViolation,
                info,
            ) => Self::UniqueViolation(info.message().to_string()),
            _ => Self::QueryFailed(err.to_string()),
        }
    }
}
