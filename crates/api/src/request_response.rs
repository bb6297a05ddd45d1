// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Request and response DTOs.
//!
//! These are distinct from domain types and represent the API contract.
//! Instants cross the wire as RFC 3339 strings.

use barber_booking_domain::{Barber, Booking, Service, WorkingHours};
use barber_booking_persistence::{BookingStats, BookingWithNames};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// API request to create a booking.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateBookingRequest {
    /// The service to book.
    pub service_id: String,
    /// The barber to book with.
    pub barber_id: String,
    /// The requested start instant.
    #[serde(with = "time::serde::rfc3339")]
    pub date: OffsetDateTime,
    /// Optional free-text notes.
    pub notes: Option<String>,
}

/// API request to probe slot availability.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AvailabilityRequest {
    /// The barber to probe.
    pub barber_id: String,
    /// The service whose duration defines the probed interval.
    pub service_id: String,
    /// The candidate start instant.
    #[serde(with = "time::serde::rfc3339")]
    pub date: OffsetDateTime,
}

/// API response for an availability probe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AvailabilityResponse {
    /// Whether the probed slot is free.
    pub available: bool,
    /// Why the slot is unavailable, when it is.
    pub reason: Option<String>,
}

/// API request to set one booking's status.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UpdateStatusRequest {
    /// The target status, in storage spelling (e.g. `IN_PROGRESS`).
    pub status: String,
}

/// API request to set many bookings' status at once.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BulkStatusRequest {
    /// The bookings to update.
    pub booking_ids: Vec<String>,
    /// The target status, in storage spelling.
    pub status: String,
}

/// API response for a bulk status update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BulkStatusResponse {
    /// How many rows were actually updated.
    pub updated_count: usize,
}

/// API response for a privileged booking delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeleteBookingResponse {
    /// Whether the delete happened.
    pub success: bool,
    /// A human-readable outcome message.
    pub message: String,
}

/// API response for an expiry sweep.
///
/// The two categories are swept independently; a category that failed
/// contributes a message to `failures` without blocking the other.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SweepResponse {
    /// `SCHEDULED` bookings whose start had passed, now `COMPLETED`.
    pub expired_count: usize,
    /// `IN_PROGRESS` bookings past the grace window, now `COMPLETED`.
    pub long_running_count: usize,
    /// Human-readable descriptions of any failed categories.
    pub failures: Vec<String>,
}

/// A booking as returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookingInfo {
    /// Opaque unique identifier.
    pub id: String,
    /// The owning user.
    pub user_id: String,
    /// The booked service.
    pub service_id: String,
    /// The barber performing the service.
    pub barber_id: String,
    /// Scheduled start instant.
    #[serde(with = "time::serde::rfc3339")]
    pub date: OffsetDateTime,
    /// Lifecycle status, in storage spelling.
    pub status: String,
    /// Sanitized notes, if any.
    pub notes: Option<String>,
    /// Price in cents, snapshotted from the service at creation time.
    pub total_price_cents: Option<i64>,
    /// Appointment length in minutes, snapshotted from the service.
    pub duration_minutes: i32,
    /// Creation timestamp.
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    /// Last-update timestamp.
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl From<Booking> for BookingInfo {
    fn from(booking: Booking) -> Self {
        Self {
            id: booking.id,
            user_id: booking.user_id,
            service_id: booking.service_id,
            barber_id: booking.barber_id,
            date: booking.date,
            status: booking.status.as_str().to_string(),
            notes: booking.notes,
            total_price_cents: booking.total_price_cents,
            duration_minutes: booking.duration_minutes,
            created_at: booking.created_at,
            updated_at: booking.updated_at,
        }
    }
}

/// A dashboard row: one booking joined with its display names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayBookingInfo {
    /// The booking's unique identifier.
    pub id: String,
    /// Scheduled start instant.
    #[serde(with = "time::serde::rfc3339")]
    pub date: OffsetDateTime,
    /// Lifecycle status, in storage spelling.
    pub status: String,
    /// The owning user's display name.
    pub user_name: String,
    /// The booked service's display name.
    pub service_name: String,
    /// The barber's display name.
    pub barber_name: String,
    /// Sanitized notes, if any.
    pub notes: Option<String>,
    /// Price in cents, snapshotted at creation time.
    pub total_price_cents: Option<i64>,
    /// Appointment length in minutes.
    pub duration_minutes: i32,
}

impl From<BookingWithNames> for DayBookingInfo {
    fn from(row: BookingWithNames) -> Self {
        Self {
            id: row.booking.id,
            date: row.booking.date,
            status: row.booking.status.as_str().to_string(),
            user_name: row.user_name,
            service_name: row.service_name,
            barber_name: row.barber_name,
            notes: row.booking.notes,
            total_price_cents: row.booking.total_price_cents,
            duration_minutes: row.booking.duration_minutes,
        }
    }
}

/// A barber as returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BarberInfo {
    /// Opaque unique identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Contact email, if published.
    pub email: Option<String>,
    /// Whether the barber is accepting bookings.
    pub is_active: bool,
    /// Service specialties.
    pub specialties: Vec<String>,
    /// Weekly working hours.
    pub working_hours: WorkingHours,
}

impl From<Barber> for BarberInfo {
    fn from(barber: Barber) -> Self {
        Self {
            id: barber.id,
            name: barber.name,
            email: barber.email,
            is_active: barber.is_active,
            specialties: barber.specialties,
            working_hours: barber.working_hours,
        }
    }
}

/// A service as returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceInfo {
    /// Opaque unique identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Marketing description.
    pub description: String,
    /// Price in cents.
    pub price_cents: i64,
    /// Appointment length in minutes.
    pub duration_minutes: i32,
}

impl From<Service> for ServiceInfo {
    fn from(service: Service) -> Self {
        Self {
            id: service.id,
            name: service.name,
            description: service.description,
            price_cents: service.price_cents,
            duration_minutes: service.duration_minutes,
        }
    }
}

/// Dashboard statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatsResponse {
    /// Bookings currently `SCHEDULED`.
    pub scheduled: i64,
    /// Bookings currently `IN_PROGRESS`.
    pub in_progress: i64,
    /// Bookings currently `COMPLETED`.
    pub completed: i64,
    /// Bookings currently `CANCELLED`.
    pub cancelled: i64,
    /// Sum of snapshotted prices over completed bookings, in cents.
    pub completed_revenue_cents: i64,
}

impl From<BookingStats> for StatsResponse {
    fn from(stats: BookingStats) -> Self {
        Self {
            scheduled: stats.scheduled,
            in_progress: stats.in_progress,
            completed: stats.completed,
            cancelled: stats.cancelled,
            completed_revenue_cents: stats.completed_revenue_cents,
        }
    }
}
