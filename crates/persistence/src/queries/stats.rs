// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Dashboard aggregate queries.

use crate::diesel_schema::bookings;
use crate::error::PersistenceError;
use barber_booking_domain::BookingStatus;
use diesel::dsl::sql;
use diesel::prelude::*;
use diesel::sql_types::{BigInt, Nullable};
use diesel::SqliteConnection;

/// Per-status booking counts plus completed revenue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BookingStats {
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

fn count_with_status(
    conn: &mut SqliteConnection,
    status: BookingStatus,
) -> Result<i64, PersistenceError> {
    bookings::table
        .filter(bookings::status.eq(status.as_str()))
        .count()
        .get_result::<i64>(conn)
        .map_err(|e| PersistenceError::QueryFailed(format!("count_with_status: {e}")))
}

/// Computes per-status counts and completed revenue for the dashboard.
///
/// # Errors
///
/// Returns an error if any of the aggregate queries fails.
pub fn booking_stats(conn: &mut SqliteConnection) -> Result<BookingStats, PersistenceError> {
    let revenue: Option<i64> = bookings::table
        .filter(bookings::status.eq(BookingStatus::Completed.as_str()))
        .select(sql::<Nullable<BigInt>>("SUM(total_price_cents)"))
        .get_result::<Option<i64>>(conn)
        .map_err(|e| PersistenceError::QueryFailed(format!("booking_stats: {e}")))?;

    Ok(BookingStats {
        scheduled: count_with_status(conn, BookingStatus::Scheduled)?,
        in_progress: count_with_status(conn, BookingStatus::InProgress)?,
        completed: count_with_status(conn, BookingStatus::Completed)?,
        cancelled: count_with_status(conn, BookingStatus::Cancelled)?,
        completed_revenue_cents: revenue.unwrap_or(0),
    })
}
