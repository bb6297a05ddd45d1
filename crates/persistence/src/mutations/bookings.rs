// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Booking mutation operations.
//!
//! Status transitions always refresh `updated_at`; rows are only ever
//! removed by the privileged hard delete.

use crate::data_models::BookingRow;
use crate::diesel_schema::bookings;
use crate::error::PersistenceError;
use barber_booking_domain::BookingStatus;
use diesel::prelude::*;
use diesel::SqliteConnection;

/// Insert a new booking row.
///
/// The partial unique index on `(barber_id, date)` over non-cancelled
/// rows turns a lost race for the same exact slot into a
/// `UniqueViolation`, which the adapter reports as `SlotOccupied`.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn insert_booking(
    conn: &mut SqliteConnection,
    row: &BookingRow,
) -> Result<(), PersistenceError> {
    diesel::insert_into(bookings::table)
        .values(row)
        .execute(conn)?;
    Ok(())
}

/// Update a single booking's status and refresh its update timestamp.
///
/// Returns the number of affected rows (0 when the booking is absent).
///
/// # Errors
///
/// Returns an error if the update fails.
pub fn update_status(
    conn: &mut SqliteConnection,
    booking_id: &str,
    status: BookingStatus,
    updated_at: &str,
) -> Result<usize, PersistenceError> {
    diesel::update(bookings::table.filter(bookings::id.eq(booking_id)))
        .set((
            bookings::status.eq(status.as_str()),
            bookings::updated_at.eq(updated_at),
        ))
        .execute(conn)
        .map_err(|e| PersistenceError::QueryFailed(format!("update_status: {e}")))
}

/// Update many bookings to one target status in a single statement.
///
/// Returns the number of affected rows.
///
/// # Errors
///
/// Returns an error if the update fails.
pub fn update_many_status(
    conn: &mut SqliteConnection,
    booking_ids: &[String],
    status: BookingStatus,
    updated_at: &str,
) -> Result<usize, PersistenceError> {
    diesel::update(bookings::table.filter(bookings::id.eq_any(booking_ids)))
        .set((
            bookings::status.eq(status.as_str()),
            bookings::updated_at.eq(updated_at),
        ))
        .execute(conn)
        .map_err(|e| PersistenceError::QueryFailed(format!("update_many_status: {e}")))
}

/// Sweep: complete every `SCHEDULED` booking whose start is strictly
/// before the given instant.
///
/// Policy: if the shop did not actively cancel an appointment that has
/// passed, assume it happened.
///
/// # Errors
///
/// Returns an error if the update fails.
pub fn complete_expired_scheduled(
    conn: &mut SqliteConnection,
    now: &str,
) -> Result<usize, PersistenceError> {
    diesel::update(
        bookings::table
            .filter(bookings::status.eq(BookingStatus::Scheduled.as_str()))
            .filter(bookings::date.lt(now)),
    )
    .set((
        bookings::status.eq(BookingStatus::Completed.as_str()),
        bookings::updated_at.eq(now),
    ))
    .execute(conn)
    .map_err(|e| PersistenceError::QueryFailed(format!("complete_expired_scheduled: {e}")))
}

/// Sweep: complete every `IN_PROGRESS` booking whose start is strictly
/// before the given cutoff.
///
/// Guards against a forgotten "in progress" flag blocking a barber's
/// column indefinitely.
///
/// # Errors
///
/// Returns an error if the update fails.
pub fn complete_stale_in_progress(
    conn: &mut SqliteConnection,
    cutoff: &str,
    now: &str,
) -> Result<usize, PersistenceError> {
    diesel::update(
        bookings::table
            .filter(bookings::status.eq(BookingStatus::InProgress.as_str()))
            .filter(bookings::date.lt(cutoff)),
    )
    .set((
        bookings::status.eq(BookingStatus::Completed.as_str()),
        bookings::updated_at.eq(now),
    ))
    .execute(conn)
    .map_err(|e| PersistenceError::QueryFailed(format!("complete_stale_in_progress: {e}")))
}

/// Hard-delete a booking row.
///
/// Returns the number of affected rows (0 when the booking is absent).
/// Callers enforce the cancelled-only precondition before reaching here.
///
/// # Errors
///
/// Returns an error if the delete fails.
pub fn delete_booking(
    conn: &mut SqliteConnection,
    booking_id: &str,
) -> Result<usize, PersistenceError> {
    diesel::delete(bookings::table.filter(bookings::id.eq(booking_id)))
        .execute(conn)
        .map_err(|e| PersistenceError::QueryFailed(format!("delete_booking: {e}")))
}
