// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The lifecycle status of a booking.
///
/// A booking is created as `Scheduled` and only moves forward:
///
/// ```text
/// Scheduled ──► InProgress ──► Completed
///     │              │
///     └──────────────┴────────► Cancelled
/// ```
///
/// `Completed` is also cancellable (a finished appointment can still be
/// voided by the customer), but `Cancelled` is terminal: the only way out
/// is the privileged hard delete, which removes the row entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum BookingStatus {
    /// Booked and waiting for the appointment time.
    #[default]
    Scheduled,
    /// The barber is currently attending the customer.
    InProgress,
    /// The appointment happened (or is assumed to have happened).
    Completed,
    /// Cancelled by the customer or the shop. Row retained for audit.
    Cancelled,
}

impl FromStr for BookingStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SCHEDULED" => Ok(Self::Scheduled),
            "IN_PROGRESS" => Ok(Self::InProgress),
            "COMPLETED" => Ok(Self::Completed),
            "CANCELLED" => Ok(Self::Cancelled),
            _ => Err(DomainError::InvalidStatus(s.to_string())),
        }
    }
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl BookingStatus {
    /// Converts this status to its storage representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Scheduled => "SCHEDULED",
            Self::InProgress => "IN_PROGRESS",
            Self::Completed => "COMPLETED",
            Self::Cancelled => "CANCELLED",
        }
    }

    /// Returns whether this booking occupies its barber's slot.
    ///
    /// Every status except `Cancelled` blocks the slot.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        !matches!(self, Self::Cancelled)
    }

    /// Returns whether this status is terminal.
    ///
    /// Terminal states are not expected to change again without a
    /// privileged override.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled)
    }

    /// Checks if a forward transition from this status to another is valid.
    ///
    /// Valid transitions are:
    /// - `Scheduled` → `InProgress`, `Completed`, or `Cancelled`
    /// - `InProgress` → `Completed` or `Cancelled`
    /// - `Completed` → `Cancelled`
    ///
    /// The cancel path consults this table to decide whether a booking
    /// can still be voided. The staff status-update path deliberately
    /// does not enforce it (it writes unconditionally).
    #[must_use]
    pub const fn can_transition_to(&self, target: Self) -> bool {
        matches!(
            (self, target),
            (Self::Scheduled, Self::InProgress)
                | (Self::Scheduled, Self::Completed)
                | (Self::Scheduled, Self::Cancelled)
                | (Self::InProgress, Self::Completed)
                | (Self::InProgress, Self::Cancelled)
                | (Self::Completed, Self::Cancelled)
        )
    }
}
