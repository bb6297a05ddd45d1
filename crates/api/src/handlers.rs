// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Booking lifecycle handlers.
//!
//! Every handler takes the persistence adapter first, translates
//! persistence failures through the error boundary, and fires the
//! revalidation hook after a successful mutation. Handlers that evaluate
//! time-dependent rules take `now` explicitly so callers (and tests)
//! control the clock.

use crate::auth::{require_user, AuthenticatedUser};
use crate::boundary::map_persistence_error;
use crate::error::ApiError;
use crate::request_response::{
    AvailabilityRequest, AvailabilityResponse, BarberInfo, BookingInfo, BulkStatusRequest,
    BulkStatusResponse, CreateBookingRequest, DayBookingInfo, DeleteBookingResponse, ServiceInfo,
    StatsResponse, SweepResponse,
};
use crate::revalidate::{RevalidationHook, BOOKINGS_PATH, DASHBOARD_PATH};
use barber_booking_domain::{
    normalize_instant, validate_booking_request, Booking, BookingRequest, BookingStatus, Role,
    SchedulingPolicy, Service, Slot,
};
use barber_booking_persistence::{NewBooking, Persistence};
use std::str::FromStr;
use time::{Date, Duration, OffsetDateTime};
use uuid::Uuid;

/// How long an `IN_PROGRESS` booking may run past its start before the
/// sweeper force-completes it.
pub const IN_PROGRESS_GRACE: Duration = Duration::hours(2);

fn validation_failed(violations: &[impl std::fmt::Display]) -> ApiError {
    ApiError::ValidationFailed {
        errors: violations.iter().map(ToString::to_string).collect(),
    }
}

fn parse_status(status: &str) -> Result<BookingStatus, ApiError> {
    BookingStatus::from_str(status).map_err(|e| ApiError::ValidationFailed {
        errors: vec![format!("status: {e}")],
    })
}

fn load_role(persistence: &mut Persistence, user_id: &str) -> Result<Option<Role>, ApiError> {
    persistence
        .get_user_role(user_id)
        .map_err(|e| map_persistence_error("load_role", "User", user_id, e))
}

fn notify_booking_views(hook: &dyn RevalidationHook) {
    hook.revalidate(BOOKINGS_PATH);
    hook.revalidate(DASHBOARD_PATH);
}

/// Creates a booking.
///
/// Validation collects every violated rule before touching storage. The
/// barber must exist and be active, the service must exist, and the
/// requested interval must not overlap any active booking for the
/// barber. Price and duration are snapshotted from the service at
/// creation time.
///
/// # Errors
///
/// * `ApiError::NotAuthenticated` for anonymous callers
/// * `ApiError::ValidationFailed` with every violated rule
/// * `ApiError::NotFound` if the service or barber does not exist
/// * `ApiError::BarberInactive` if the barber is not accepting bookings
/// * `ApiError::SlotOccupied` if the interval overlaps an active booking
/// * `ApiError::Internal` on infrastructure failure
pub fn create_booking(
    persistence: &mut Persistence,
    caller: Option<&AuthenticatedUser>,
    hook: &dyn RevalidationHook,
    request: &CreateBookingRequest,
    now: OffsetDateTime,
) -> Result<BookingInfo, ApiError> {
    let user: &AuthenticatedUser = require_user(caller)?;

    let raw: BookingRequest = BookingRequest {
        service_id: request.service_id.clone(),
        barber_id: request.barber_id.clone(),
        date: request.date,
        notes: request.notes.clone(),
    };
    let valid = validate_booking_request(&raw, now, &SchedulingPolicy::default())
        .map_err(|violations| validation_failed(&violations))?;

    let service: Service = persistence
        .get_service(&valid.service_id)
        .map_err(|e| map_persistence_error("create_booking", "Service", &valid.service_id, e))?
        .ok_or_else(|| ApiError::NotFound {
            resource: "Service",
            message: format!("service {}", valid.service_id),
        })?;

    let barber = persistence
        .get_barber(&valid.barber_id)
        .map_err(|e| map_persistence_error("create_booking", "Barber", &valid.barber_id, e))?
        .ok_or_else(|| ApiError::NotFound {
            resource: "Barber",
            message: format!("barber {}", valid.barber_id),
        })?;
    if !barber.is_active {
        return Err(ApiError::BarberInactive { name: barber.name });
    }

    let new: NewBooking = NewBooking {
        id: Uuid::new_v4().to_string(),
        user_id: user.id.clone(),
        service_id: valid.service_id,
        barber_id: valid.barber_id,
        date: valid.date,
        notes: valid.notes,
        total_price_cents: Some(service.price_cents),
        duration_minutes: service.duration_minutes,
        created_at: normalize_instant(now),
    };
    let booking: Booking = persistence
        .create_booking(&new)
        .map_err(|e| map_persistence_error("create_booking", "Booking", &new.id, e))?;

    tracing::info!(
        booking_id = %booking.id,
        user_id = %booking.user_id,
        barber_id = %booking.barber_id,
        "booking created"
    );
    notify_booking_views(hook);
    Ok(BookingInfo::from(booking))
}

/// Cancels the caller's own booking.
///
/// The row is retained with status `CANCELLED`; cancellation is the
/// terminal customer-facing action, deletion is a separate privileged
/// operation.
///
/// # Errors
///
/// * `ApiError::NotAuthenticated` for anonymous callers
/// * `ApiError::ValidationFailed` if `booking_id` is blank
/// * `ApiError::NotFound` if the booking does not exist
/// * `ApiError::Unauthorized` if the caller does not own the booking
/// * `ApiError::AlreadyCancelled` if the booking is already cancelled
/// * `ApiError::Internal` on infrastructure failure
pub fn cancel_booking(
    persistence: &mut Persistence,
    caller: Option<&AuthenticatedUser>,
    hook: &dyn RevalidationHook,
    booking_id: &str,
    now: OffsetDateTime,
) -> Result<BookingInfo, ApiError> {
    let user: &AuthenticatedUser = require_user(caller)?;
    if booking_id.trim().is_empty() {
        return Err(ApiError::ValidationFailed {
            errors: vec![String::from("booking_id: Booking ID is required")],
        });
    }

    let booking: Booking = persistence
        .get_booking(booking_id)
        .map_err(|e| map_persistence_error("cancel_booking", "Booking", booking_id, e))?
        .ok_or_else(|| ApiError::NotFound {
            resource: "Booking",
            message: format!("booking {booking_id}"),
        })?;

    if booking.user_id != user.id {
        return Err(ApiError::Unauthorized {
            action: String::from("cancel_booking"),
        });
    }
    if !booking.status.can_transition_to(BookingStatus::Cancelled) {
        return Err(ApiError::AlreadyCancelled {
            booking_id: booking.id,
        });
    }

    let updated: Booking = persistence
        .set_booking_status(&booking.id, BookingStatus::Cancelled, normalize_instant(now))
        .map_err(|e| map_persistence_error("cancel_booking", "Booking", booking_id, e))?;

    tracing::info!(
        booking_id = %updated.id,
        user_id = %user.id,
        "booking cancelled by owner"
    );
    notify_booking_views(hook);
    Ok(BookingInfo::from(updated))
}

/// Sets one booking's status unconditionally.
///
/// This is the staff dashboard's direct status control; it does not
/// enforce transition rules beyond the status spelling itself.
///
/// # Errors
///
/// * `ApiError::ValidationFailed` if `status` is not a known status
/// * `ApiError::NotFound` if the booking does not exist
/// * `ApiError::Internal` on infrastructure failure
pub fn update_booking_status(
    persistence: &mut Persistence,
    hook: &dyn RevalidationHook,
    booking_id: &str,
    status: &str,
    now: OffsetDateTime,
) -> Result<BookingInfo, ApiError> {
    let status: BookingStatus = parse_status(status)?;
    let updated: Booking = persistence
        .set_booking_status(booking_id, status, normalize_instant(now))
        .map_err(|e| map_persistence_error("update_booking_status", "Booking", booking_id, e))?;

    notify_booking_views(hook);
    Ok(BookingInfo::from(updated))
}

/// Sets many bookings' status at once. Staff/owner only.
///
/// # Errors
///
/// * `ApiError::NotAuthenticated` for anonymous callers
/// * `ApiError::Unauthorized` if the caller's stored role cannot manage
///   bookings
/// * `ApiError::ValidationFailed` if `status` is not a known status
/// * `ApiError::Internal` on infrastructure failure
pub fn update_multiple_bookings_status(
    persistence: &mut Persistence,
    caller: Option<&AuthenticatedUser>,
    hook: &dyn RevalidationHook,
    request: &BulkStatusRequest,
    now: OffsetDateTime,
) -> Result<BulkStatusResponse, ApiError> {
    let user: &AuthenticatedUser = require_user(caller)?;
    let role: Option<Role> = load_role(persistence, &user.id)?;
    if !role.is_some_and(|r| r.can_manage_bookings()) {
        return Err(ApiError::Unauthorized {
            action: String::from("update_multiple_bookings_status"),
        });
    }

    let status: BookingStatus = parse_status(&request.status)?;
    let updated_count: usize = persistence
        .set_many_bookings_status(&request.booking_ids, status, normalize_instant(now))
        .map_err(|e| {
            map_persistence_error("update_multiple_bookings_status", "Booking", &user.id, e)
        })?;

    tracing::info!(
        user_id = %user.id,
        updated_count,
        status = status.as_str(),
        "bulk status update"
    );
    notify_booking_views(hook);
    Ok(BulkStatusResponse { updated_count })
}

/// Runs the expiry sweep.
///
/// Two independent categories: `SCHEDULED` bookings whose start is
/// strictly before `now` become `COMPLETED`, and `IN_PROGRESS` bookings
/// that started more than [`IN_PROGRESS_GRACE`] ago become `COMPLETED`.
/// A failed category is logged and surfaced in `failures` without
/// blocking the other. Running the sweep twice in a row finds nothing
/// the second time.
pub fn update_expired_bookings(
    persistence: &mut Persistence,
    hook: &dyn RevalidationHook,
    now: OffsetDateTime,
) -> SweepResponse {
    let now: OffsetDateTime = normalize_instant(now);
    let mut failures: Vec<String> = Vec::new();

    let expired_count: usize = match persistence.complete_expired_scheduled(now) {
        Ok(count) => count,
        Err(e) => {
            tracing::error!(operation = "sweep_expired_scheduled", error = %e, "sweep category failed");
            failures.push(String::from("Failed to sweep expired scheduled bookings"));
            0
        }
    };

    let cutoff: OffsetDateTime = now - IN_PROGRESS_GRACE;
    let long_running_count: usize = match persistence.complete_stale_in_progress(cutoff, now) {
        Ok(count) => count,
        Err(e) => {
            tracing::error!(operation = "sweep_stale_in_progress", error = %e, "sweep category failed");
            failures.push(String::from("Failed to sweep long-running bookings"));
            0
        }
    };

    if expired_count > 0 || long_running_count > 0 {
        tracing::info!(expired_count, long_running_count, "expiry sweep corrected bookings");
        notify_booking_views(hook);
    }

    SweepResponse {
        expired_count,
        long_running_count,
        failures,
    }
}

/// Probes whether a slot is free. Read-only; never blocks on cancelled
/// bookings.
///
/// # Errors
///
/// * `ApiError::NotFound` if the service does not exist
/// * `ApiError::ValidationFailed` if the service duration cannot form a
///   slot
/// * `ApiError::Internal` on infrastructure failure
pub fn check_availability(
    persistence: &mut Persistence,
    request: &AvailabilityRequest,
) -> Result<AvailabilityResponse, ApiError> {
    let service: Service = persistence
        .get_service(&request.service_id)
        .map_err(|e| map_persistence_error("check_availability", "Service", &request.service_id, e))?
        .ok_or_else(|| ApiError::NotFound {
            resource: "Service",
            message: format!("service {}", request.service_id),
        })?;

    let slot: Slot = Slot::new(normalize_instant(request.date), service.duration_minutes)
        .map_err(|e| ApiError::ValidationFailed {
            errors: vec![format!("date: {e}")],
        })?;

    let occupied = persistence
        .find_overlapping_booking(&request.barber_id, &slot)
        .map_err(|e| {
            map_persistence_error("check_availability", "Booking", &request.barber_id, e)
        })?;

    Ok(occupied.map_or(
        AvailabilityResponse {
            available: true,
            reason: None,
        },
        |_| AvailabilityResponse {
            available: false,
            reason: Some(String::from("This time slot is already booked")),
        },
    ))
}

/// Hard-deletes a cancelled booking. Staff/owner only.
///
/// # Errors
///
/// * `ApiError::NotAuthenticated` for anonymous callers
/// * `ApiError::Unauthorized` if the caller's stored role cannot manage
///   bookings
/// * `ApiError::NotFound` if the booking does not exist
/// * `ApiError::ValidationFailed` if the booking is not cancelled
/// * `ApiError::Internal` on infrastructure failure
pub fn delete_booking(
    persistence: &mut Persistence,
    caller: Option<&AuthenticatedUser>,
    hook: &dyn RevalidationHook,
    booking_id: &str,
) -> Result<DeleteBookingResponse, ApiError> {
    let user: &AuthenticatedUser = require_user(caller)?;
    let role: Option<Role> = load_role(persistence, &user.id)?;
    if !role.is_some_and(|r| r.can_manage_bookings()) {
        return Err(ApiError::Unauthorized {
            action: String::from("delete_booking"),
        });
    }

    let booking: Booking = persistence
        .get_booking(booking_id)
        .map_err(|e| map_persistence_error("delete_booking", "Booking", booking_id, e))?
        .ok_or_else(|| ApiError::NotFound {
            resource: "Booking",
            message: format!("booking {booking_id}"),
        })?;

    if booking.status != BookingStatus::Cancelled {
        return Err(ApiError::ValidationFailed {
            errors: vec![String::from(
                "status: Only cancelled bookings can be deleted",
            )],
        });
    }

    persistence
        .delete_booking(booking_id)
        .map_err(|e| map_persistence_error("delete_booking", "Booking", booking_id, e))?;

    tracing::info!(
        booking_id,
        user_id = %user.id,
        "booking deleted by staff"
    );
    notify_booking_views(hook);
    Ok(DeleteBookingResponse {
        success: true,
        message: format!("Booking {booking_id} deleted"),
    })
}

/// Lists the caller's bookings, most recent start first.
///
/// # Errors
///
/// * `ApiError::NotAuthenticated` for anonymous callers
/// * `ApiError::Internal` on infrastructure failure
pub fn list_user_bookings(
    persistence: &mut Persistence,
    caller: Option<&AuthenticatedUser>,
) -> Result<Vec<BookingInfo>, ApiError> {
    let user: &AuthenticatedUser = require_user(caller)?;
    let bookings: Vec<Booking> = persistence
        .list_bookings_for_user(&user.id)
        .map_err(|e| map_persistence_error("list_user_bookings", "Booking", &user.id, e))?;
    Ok(bookings.into_iter().map(BookingInfo::from).collect())
}

/// Lists one day's bookings joined with display names, for the staff
/// dashboard. The day is interpreted in UTC.
///
/// # Errors
///
/// Returns `ApiError::Internal` on infrastructure failure.
pub fn list_day_bookings(
    persistence: &mut Persistence,
    day: Date,
) -> Result<Vec<DayBookingInfo>, ApiError> {
    let window_start: OffsetDateTime = day.midnight().assume_utc();
    let window_end: OffsetDateTime = window_start + Duration::days(1);
    let rows = persistence
        .list_bookings_in_window(window_start, window_end)
        .map_err(|e| map_persistence_error("list_day_bookings", "Booking", "dashboard", e))?;
    Ok(rows.into_iter().map(DayBookingInfo::from).collect())
}

/// Lists all active barbers.
///
/// # Errors
///
/// Returns `ApiError::Internal` on infrastructure failure.
pub fn list_barbers(persistence: &mut Persistence) -> Result<Vec<BarberInfo>, ApiError> {
    let barbers = persistence
        .list_active_barbers()
        .map_err(|e| map_persistence_error("list_barbers", "Barber", "catalogue", e))?;
    Ok(barbers.into_iter().map(BarberInfo::from).collect())
}

/// Lists all services.
///
/// # Errors
///
/// Returns `ApiError::Internal` on infrastructure failure.
pub fn list_services(persistence: &mut Persistence) -> Result<Vec<ServiceInfo>, ApiError> {
    let services = persistence
        .list_services()
        .map_err(|e| map_persistence_error("list_services", "Service", "catalogue", e))?;
    Ok(services.into_iter().map(ServiceInfo::from).collect())
}

/// Computes dashboard statistics.
///
/// # Errors
///
/// Returns `ApiError::Internal` on infrastructure failure.
pub fn booking_stats(persistence: &mut Persistence) -> Result<StatsResponse, ApiError> {
    let stats = persistence
        .booking_stats()
        .map_err(|e| map_persistence_error("booking_stats", "Booking", "dashboard", e))?;
    Ok(StatsResponse::from(stats))
}
