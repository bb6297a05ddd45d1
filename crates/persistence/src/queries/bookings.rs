// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Booking query operations.

use crate::data_models::BookingRow;
use crate::diesel_schema::{barbers, bookings, services, users};
use crate::error::PersistenceError;
use barber_booking_domain::BookingStatus;
use diesel::prelude::*;
use diesel::SqliteConnection;

/// Query a single booking by id.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn get_booking(
    conn: &mut SqliteConnection,
    booking_id: &str,
) -> Result<Option<BookingRow>, PersistenceError> {
    bookings::table
        .filter(bookings::id.eq(booking_id))
        .first::<BookingRow>(conn)
        .optional()
        .map_err(|e| PersistenceError::QueryFailed(format!("get_booking: {e}")))
}

/// Query active bookings for a barber whose start lies in the given window.
///
/// `window_start` and `window_end` are RFC 3339 UTC strings; the stored
/// format orders lexicographically, so plain string comparison is a
/// chronological range filter. Cancelled bookings are excluded - a
/// cancelled booking never blocks a slot.
///
/// The caller widens the window backwards by the maximum service duration
/// and checks true interval overlap against each candidate's own stored
/// duration.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn overlap_candidates(
    conn: &mut SqliteConnection,
    barber_id: &str,
    window_start: &str,
    window_end: &str,
) -> Result<Vec<BookingRow>, PersistenceError> {
    bookings::table
        .filter(bookings::barber_id.eq(barber_id))
        .filter(bookings::status.ne(BookingStatus::Cancelled.as_str()))
        .filter(bookings::date.ge(window_start))
        .filter(bookings::date.lt(window_end))
        .order(bookings::date.asc())
        .load::<BookingRow>(conn)
        .map_err(|e| PersistenceError::QueryFailed(format!("overlap_candidates: {e}")))
}

/// Query all bookings owned by a user, most recent first.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn list_for_user(
    conn: &mut SqliteConnection,
    user_id: &str,
) -> Result<Vec<BookingRow>, PersistenceError> {
    bookings::table
        .filter(bookings::user_id.eq(user_id))
        .order(bookings::date.desc())
        .load::<BookingRow>(conn)
        .map_err(|e| PersistenceError::QueryFailed(format!("list_for_user: {e}")))
}

/// Query all bookings in a date window together with the display names of
/// the owning user, the booked service, and the barber.
///
/// This backs the staff dashboard's agenda view for a single day.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn list_in_window_with_names(
    conn: &mut SqliteConnection,
    window_start: &str,
    window_end: &str,
) -> Result<Vec<(BookingRow, String, String, String)>, PersistenceError> {
    bookings::table
        .inner_join(users::table)
        .inner_join(services::table)
        .inner_join(barbers::table)
        .filter(bookings::date.ge(window_start))
        .filter(bookings::date.lt(window_end))
        .order(bookings::date.asc())
        .select((
            bookings::all_columns,
            users::name,
            services::name,
            barbers::name,
        ))
        .load::<(BookingRow, String, String, String)>(conn)
        .map_err(|e| PersistenceError::QueryFailed(format!("list_in_window_with_names: {e}")))
}
