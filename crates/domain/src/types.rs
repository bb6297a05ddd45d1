// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::status::BookingStatus;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::{Duration, OffsetDateTime, Weekday};

/// Upper bound on service duration, in minutes.
///
/// The conflict engine widens its candidate window by this amount so that
/// a long-running earlier booking is always considered when probing a slot.
pub const MAX_SERVICE_DURATION_MINUTES: i32 = 240;

/// The role of a registered user.
///
/// Roles gate the privileged operations (hard delete, bulk status update).
/// They are stored with the user record, not supplied by the identity
/// provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Role {
    /// A regular customer.
    #[default]
    User,
    /// Shop staff operating the dashboard.
    Staff,
    /// Shop owner or manager.
    Owner,
}

impl FromStr for Role {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "USER" => Ok(Self::User),
            "STAFF" => Ok(Self::Staff),
            "OWNER" => Ok(Self::Owner),
            _ => Err(DomainError::InvalidRole(s.to_string())),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Role {
    /// Converts this role to its storage representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::User => "USER",
            Self::Staff => "STAFF",
            Self::Owner => "OWNER",
        }
    }

    /// Returns whether this role may operate on other users' bookings.
    #[must_use]
    pub const fn can_manage_bookings(&self) -> bool {
        matches!(self, Self::Staff | Self::Owner)
    }
}

/// Opening and closing time for a single weekday, in `"HH:MM"` form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayHours {
    /// Opening time.
    pub start: String,
    /// Closing time.
    pub end: String,
}

/// A barber's weekly working-hours structure.
///
/// `None` for a weekday means the barber does not work that day. The JSON
/// shape matches the seeded shop data (`monday` through `sunday` keys).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct WorkingHours {
    pub monday: Option<DayHours>,
    pub tuesday: Option<DayHours>,
    pub wednesday: Option<DayHours>,
    pub thursday: Option<DayHours>,
    pub friday: Option<DayHours>,
    pub saturday: Option<DayHours>,
    pub sunday: Option<DayHours>,
}

impl WorkingHours {
    /// Returns the hours for the given weekday, if the barber works it.
    #[must_use]
    pub const fn for_weekday(&self, weekday: Weekday) -> Option<&DayHours> {
        match weekday {
            Weekday::Monday => self.monday.as_ref(),
            Weekday::Tuesday => self.tuesday.as_ref(),
            Weekday::Wednesday => self.wednesday.as_ref(),
            Weekday::Thursday => self.thursday.as_ref(),
            Weekday::Friday => self.friday.as_ref(),
            Weekday::Saturday => self.saturday.as_ref(),
            Weekday::Sunday => self.sunday.as_ref(),
        }
    }
}

/// A service provider.
///
/// Barbers are referenced by bookings, never owned by them. Only active
/// barbers accept new bookings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Barber {
    /// Opaque unique identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Contact email, if known.
    pub email: Option<String>,
    /// Whether this barber currently accepts bookings.
    pub is_active: bool,
    /// Specialty tags (e.g. "Barba", "Acabamento").
    pub specialties: Vec<String>,
    /// Weekly working hours.
    pub working_hours: WorkingHours,
}

/// A sellable offering.
///
/// Price and duration are snapshotted onto each booking at creation time,
/// decoupling historical bookings from future catalogue changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Service {
    /// Opaque unique identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Customer-facing description.
    pub description: String,
    /// Price in integer cents.
    pub price_cents: i64,
    /// Appointment length in whole minutes.
    pub duration_minutes: i32,
}

/// A booking: the central entity of the system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Booking {
    /// Opaque unique identifier.
    pub id: String,
    /// The owning user.
    pub user_id: String,
    /// The booked service.
    pub service_id: String,
    /// The barber performing the service.
    pub barber_id: String,
    /// Scheduled start instant (UTC, whole-second). Immutable after creation.
    pub date: OffsetDateTime,
    /// Lifecycle status.
    pub status: BookingStatus,
    /// Optional sanitized free-text notes.
    pub notes: Option<String>,
    /// Price in cents, snapshotted from the service at creation time.
    pub total_price_cents: Option<i64>,
    /// Appointment length in minutes, snapshotted from the service.
    pub duration_minutes: i32,
    /// Creation timestamp.
    pub created_at: OffsetDateTime,
    /// Last-update timestamp.
    pub updated_at: OffsetDateTime,
}

impl Booking {
    /// Returns the slot this booking occupies.
    #[must_use]
    pub const fn slot(&self) -> Slot {
        Slot {
            start: self.date,
            duration_minutes: self.duration_minutes,
        }
    }
}

/// A (start, duration) time window on a barber's column.
///
/// Occupancy of slots is governed by the conflict engine: at most one
/// active booking may overlap any slot for a given barber.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    /// Start instant of the window.
    pub start: OffsetDateTime,
    /// Window length in whole minutes.
    pub duration_minutes: i32,
}

impl Slot {
    /// Creates a new slot.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidDuration` if the duration is not
    /// strictly positive or exceeds the service-duration ceiling.
    pub const fn new(start: OffsetDateTime, duration_minutes: i32) -> Result<Self, DomainError> {
        if duration_minutes <= 0 || duration_minutes > MAX_SERVICE_DURATION_MINUTES {
            return Err(DomainError::InvalidDuration {
                minutes: duration_minutes,
            });
        }
        Ok(Self {
            start,
            duration_minutes,
        })
    }

    /// The exclusive end instant of the window.
    #[must_use]
    pub fn end(&self) -> OffsetDateTime {
        self.start + Duration::minutes(i64::from(self.duration_minutes))
    }

    /// Returns whether two half-open windows `[start, end)` overlap.
    ///
    /// Back-to-back slots (one ending exactly when the other starts) do
    /// not overlap.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end() && other.start < self.end()
    }
}
