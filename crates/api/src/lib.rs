// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API boundary layer for the Barber Booking System.
//!
//! Handlers orchestrate the booking lifecycle over the persistence
//! adapter: authentication, validation, conflict-checked creation,
//! cancellation, the expiry sweep, and the staff read surface. All
//! persistence failures cross one error boundary so infrastructure
//! detail never leaks to clients.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod auth;
mod boundary;
mod error;
mod handlers;
mod request_response;
mod revalidate;

#[cfg(test)]
mod tests;

pub use auth::{require_user, AuthenticatedUser};
pub use error::{ApiError, INTERNAL_ERROR_MESSAGE};
pub use handlers::{
    booking_stats, cancel_booking, check_availability, create_booking, delete_booking,
    list_barbers, list_day_bookings, list_services, list_user_bookings, update_booking_status,
    update_expired_bookings, update_multiple_bookings_status, IN_PROGRESS_GRACE,
};
pub use request_response::{
    AvailabilityRequest, AvailabilityResponse, BarberInfo, BookingInfo, BulkStatusRequest,
    BulkStatusResponse, CreateBookingRequest, DayBookingInfo, DeleteBookingResponse, ServiceInfo,
    StatsResponse, SweepResponse, UpdateStatusRequest,
};
pub use revalidate::{NoopRevalidation, RevalidationHook, BOOKINGS_PATH, DASHBOARD_PATH};
