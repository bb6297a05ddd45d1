// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Barber and service catalogue queries.

use crate::data_models::{BarberRow, ServiceRow};
use crate::diesel_schema::{barbers, services};
use crate::error::PersistenceError;
use diesel::prelude::*;
use diesel::SqliteConnection;

/// Query a single barber by id.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn get_barber(
    conn: &mut SqliteConnection,
    barber_id: &str,
) -> Result<Option<BarberRow>, PersistenceError> {
    barbers::table
        .filter(barbers::id.eq(barber_id))
        .first::<BarberRow>(conn)
        .optional()
        .map_err(|e| PersistenceError::QueryFailed(format!("get_barber: {e}")))
}

/// Query all active barbers, ordered by name.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn list_active_barbers(
    conn: &mut SqliteConnection,
) -> Result<Vec<BarberRow>, PersistenceError> {
    barbers::table
        .filter(barbers::is_active.eq(true))
        .order(barbers::name.asc())
        .load::<BarberRow>(conn)
        .map_err(|e| PersistenceError::QueryFailed(format!("list_active_barbers: {e}")))
}

/// Count all barbers, active or not. Used for seed idempotence.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn count_barbers(conn: &mut SqliteConnection) -> Result<i64, PersistenceError> {
    barbers::table
        .count()
        .get_result::<i64>(conn)
        .map_err(|e| PersistenceError::QueryFailed(format!("count_barbers: {e}")))
}

/// Query a single service by id.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn get_service(
    conn: &mut SqliteConnection,
    service_id: &str,
) -> Result<Option<ServiceRow>, PersistenceError> {
    services::table
        .filter(services::id.eq(service_id))
        .first::<ServiceRow>(conn)
        .optional()
        .map_err(|e| PersistenceError::QueryFailed(format!("get_service: {e}")))
}

/// Query all services, ordered by name.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn list_services(conn: &mut SqliteConnection) -> Result<Vec<ServiceRow>, PersistenceError> {
    services::table
        .order(services::name.asc())
        .load::<ServiceRow>(conn)
        .map_err(|e| PersistenceError::QueryFailed(format!("list_services: {e}")))
}
