// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

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

mod clock;
mod error;
mod policy;
mod status;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use clock::{format_instant, normalize_instant, parse_instant};
pub use error::DomainError;
pub use policy::SchedulingPolicy;
pub use status::BookingStatus;
pub use types::{
    Barber, Booking, DayHours, Role, Service, Slot, WorkingHours, MAX_SERVICE_DURATION_MINUTES,
};
pub use validation::{
    sanitize_notes, validate_booking_request, BookingRequest, ValidBookingRequest,
    ValidationViolation, MAX_NOTES_LENGTH,
};
