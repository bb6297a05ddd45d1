// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Booking status string is not a known status.
    InvalidStatus(String),
    /// Role string is not a known role.
    InvalidRole(String),
    /// Failed to parse an instant from a string.
    DateParseError {
        /// The invalid date string.
        date_string: String,
        /// The parsing error message.
        error: String,
    },
    /// Failed to format an instant as a string.
    DateFormatError {
        /// The formatting error message.
        error: String,
    },
    /// A duration value is out of range.
    InvalidDuration {
        /// The invalid duration in minutes.
        minutes: i32,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidStatus(status) => write!(f, "Invalid booking status: {status}"),
            Self::InvalidRole(role) => write!(f, "Invalid role: {role}"),
            Self::DateParseError { date_string, error } => {
                write!(f, "Failed to parse date '{date_string}': {error}")
            }
            Self::DateFormatError { error } => {
                write!(f, "Failed to format date: {error}")
            }
            Self::InvalidDuration { minutes } => {
                write!(f, "Invalid duration: {minutes} minutes")
            }
        }
    }
}

impl std::error::Error for DomainError {}
