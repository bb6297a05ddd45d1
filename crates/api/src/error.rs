// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

/// The one message `ApiError::Internal` ever shows a client.
///
/// Infrastructure failure detail goes to the logs at the error boundary;
/// clients only see this retryable message.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error. Please try again.";

/// API-level errors.
///
/// These are distinct from domain/persistence errors and represent the
/// API contract. Business variants carry their precise human-readable
/// message; `Internal` is deliberately opaque.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The caller did not authenticate.
    NotAuthenticated,
    /// The caller does not have permission for this action.
    Unauthorized {
        /// The action that was attempted.
        action: String,
    },
    /// A requested resource was not found.
    NotFound {
        /// The type of resource that was not found.
        resource: &'static str,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// The requested slot overlaps an existing active booking.
    SlotOccupied {
        /// The barber whose slot is occupied.
        barber_id: String,
        /// The requested start instant (RFC 3339).
        date: String,
    },
    /// The booking is already cancelled.
    AlreadyCancelled {
        /// The booking that was already cancelled.
        booking_id: String,
    },
    /// The barber is not accepting bookings.
    BarberInactive {
        /// The barber's display name.
        name: String,
    },
    /// One or more request fields violated a validation rule.
    ValidationFailed {
        /// Every violated rule, as `field: message` strings.
        errors: Vec<String>,
    },
    /// An internal error occurred. The message is always the generic
    /// retryable one; the real cause is logged at the boundary.
    Internal {
        /// The generic client-facing message.
        message: String,
    },
}

impl ApiError {
    /// Creates the opaque internal error.
    #[must_use]
    pub fn internal() -> Self {
        Self::Internal {
            message: String::from(INTERNAL_ERROR_MESSAGE),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotAuthenticated => {
                write!(f, "Authentication required")
            }
            Self::Unauthorized { action } => {
                write!(f, "Unauthorized: '{action}' is not permitted for this caller")
            }
            Self::NotFound { resource, message } => {
                write!(f, "{resource} not found: {message}")
            }
            Self::SlotOccupied { barber_id, date } => {
                write!(
                    f,
                    "This time slot is already booked for barber {barber_id} at {date}"
                )
            }
            Self::AlreadyCancelled { booking_id } => {
                write!(f, "Booking {booking_id} is already cancelled")
            }
            Self::BarberInactive { name } => {
                write!(f, "Barber '{name}' is not currently accepting bookings")
            }
            Self::ValidationFailed { errors } => {
                write!(f, "Validation failed: {}", errors.join("; "))
            }
            Self::Internal { message } => {
                write!(f, "{message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}
