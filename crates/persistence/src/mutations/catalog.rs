// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! User, barber, and service inserts. Used by seeding and tests; the
//! customer-facing flows never create catalogue rows.

use crate::data_models::{BarberRow, ServiceRow, UserRow};
use crate::diesel_schema::{barbers, services, users};
use crate::error::PersistenceError;
use diesel::prelude::*;
use diesel::SqliteConnection;

/// Insert a user row.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn insert_user(conn: &mut SqliteConnection, row: &UserRow) -> Result<(), PersistenceError> {
    diesel::insert_into(users::table).values(row).execute(conn)?;
    Ok(())
}

/// Insert a barber row.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn insert_barber(conn: &mut SqliteConnection, row: &BarberRow) -> Result<(), PersistenceError> {
    diesel::insert_into(barbers::table)
        .values(row)
        .execute(conn)?;
    Ok(())
}

/// Insert a service row.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn insert_service(
    conn: &mut SqliteConnection,
    row: &ServiceRow,
) -> Result<(), PersistenceError> {
    diesel::insert_into(services::table)
        .values(row)
        .execute(conn)?;
    Ok(())
}

/// Flip a barber's `is_active` flag.
///
/// # Errors
///
/// Returns an error if the update fails.
pub fn set_barber_active(
    conn: &mut SqliteConnection,
    barber_id: &str,
    is_active: bool,
) -> Result<usize, PersistenceError> {
    diesel::update(barbers::table.filter(barbers::id.eq(barber_id)))
        .set(barbers::is_active.eq(is_active))
        .execute(conn)
        .map_err(|e| PersistenceError::QueryFailed(format!("set_barber_active: {e}")))
}
