// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::clock::normalize_instant;
use crate::policy::SchedulingPolicy;
use time::OffsetDateTime;
use uuid::Uuid;

/// Maximum length of booking notes after sanitization, in characters.
pub const MAX_NOTES_LENGTH: usize = 500;

/// A raw booking-creation request as received from a client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingRequest {
    /// The service to book.
    pub service_id: String,
    /// The barber to book with.
    pub barber_id: String,
    /// The requested start instant.
    pub date: OffsetDateTime,
    /// Optional free-text notes.
    pub notes: Option<String>,
}

/// A booking-creation request that passed every validation rule.
///
/// `date` is normalized (UTC, whole-second) and `notes` is sanitized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidBookingRequest {
    /// The service to book.
    pub service_id: String,
    /// The barber to book with.
    pub barber_id: String,
    /// The normalized start instant.
    pub date: OffsetDateTime,
    /// Sanitized notes, if any were provided.
    pub notes: Option<String>,
}

/// A single field-scoped validation violation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationViolation {
    /// The offending request field.
    pub field: &'static str,
    /// A human-readable description of the violation.
    pub message: String,
}

impl ValidationViolation {
    fn new(field: &'static str, message: &str) -> Self {
        Self {
            field,
            message: message.to_string(),
        }
    }
}

impl std::fmt::Display for ValidationViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Sanitizes free-text notes.
///
/// Trims, collapses internal whitespace runs to single spaces, and strips
/// `<` and `>`. Stripping is defense in depth against markup injection,
/// not a substitute for output encoding at render time.
#[must_use]
pub fn sanitize_notes(input: &str) -> String {
    let stripped: String = input.chars().filter(|c| *c != '<' && *c != '>').collect();
    stripped.split_whitespace().collect::<Vec<&str>>().join(" ")
}

/// Validates a booking-creation request against the scheduling policy.
///
/// This function is pure and has no side effects. All violations are
/// collected rather than short-circuiting on the first, so a client can
/// surface every problem at once.
///
/// # Arguments
///
/// * `request` - The raw request to validate
/// * `now` - The evaluation instant
/// * `policy` - The deployment's scheduling policy
///
/// # Returns
///
/// * `Ok(ValidBookingRequest)` with normalized date and sanitized notes
/// * `Err(Vec<ValidationViolation>)` with every violated rule
///
/// # Errors
///
/// Returns the collected violations if:
/// - `service_id` or `barber_id` is not a well-formed UUID
/// - the date is not strictly in the future
/// - the date is under the minimum lead time
/// - the date falls outside operating days or opening hours
/// - the sanitized notes exceed the length cap
pub fn validate_booking_request(
    request: &BookingRequest,
    now: OffsetDateTime,
    policy: &SchedulingPolicy,
) -> Result<ValidBookingRequest, Vec<ValidationViolation>> {
    let mut violations: Vec<ValidationViolation> = Vec::new();

    if Uuid::parse_str(&request.service_id).is_err() {
        violations.push(ValidationViolation::new(
            "service_id",
            "Service ID must be a valid UUID",
        ));
    }

    if Uuid::parse_str(&request.barber_id).is_err() {
        violations.push(ValidationViolation::new(
            "barber_id",
            "Barber ID must be a valid UUID",
        ));
    }

    let date: OffsetDateTime = normalize_instant(request.date);
    let now: OffsetDateTime = normalize_instant(now);

    if date <= now {
        violations.push(ValidationViolation::new(
            "date",
            "Booking date must be in the future",
        ));
    }

    if !policy.has_lead_time(date, now) {
        violations.push(ValidationViolation::new(
            "date",
            "Bookings require at least 1 hour of advance notice",
        ));
    }

    if !policy.is_operating_day(date) {
        violations.push(ValidationViolation::new(
            "date",
            "Bookings are only accepted Monday through Saturday",
        ));
    }

    if !policy.is_within_opening_hours(date) {
        violations.push(ValidationViolation::new(
            "date",
            "Bookings are only accepted between 09:00 and 19:00",
        ));
    }

    let notes: Option<String> = match request.notes.as_deref() {
        Some(raw) => {
            let sanitized: String = sanitize_notes(raw);
            if sanitized.chars().count() > MAX_NOTES_LENGTH {
                violations.push(ValidationViolation::new(
                    "notes",
                    "Notes must be at most 500 characters",
                ));
            }
            if sanitized.is_empty() {
                None
            } else {
                Some(sanitized)
            }
        }
        None => None,
    };

    if violations.is_empty() {
        Ok(ValidBookingRequest {
            service_id: request.service_id.clone(),
            barber_id: request.barber_id.clone(),
            date,
            notes,
        })
    } else {
        Err(violations)
    }
}
