// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Diesel row structs and their conversions to domain types.

use crate::diesel_schema::{barbers, bookings, services, users};
use crate::error::PersistenceError;
use barber_booking_domain::{
    parse_instant, Barber, Booking, BookingStatus, Service, WorkingHours,
};
use diesel::prelude::*;
use std::str::FromStr;

/// A row of the `users` table.
#[derive(Debug, Clone, Queryable, Insertable)]
#[diesel(table_name = users)]
pub struct UserRow {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
    pub created_at: String,
}

/// A row of the `barbers` table.
#[derive(Debug, Clone, Queryable, Insertable)]
#[diesel(table_name = barbers)]
pub struct BarberRow {
    pub id: String,
    pub name: String,
    pub email: Option<String>,
    pub is_active: bool,
    pub specialties: String,
    pub working_hours: String,
    pub created_at: String,
}

/// A row of the `services` table.
#[derive(Debug, Clone, Queryable, Insertable)]
#[diesel(table_name = services)]
pub struct ServiceRow {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price_cents: i64,
    pub duration_minutes: i32,
    pub created_at: String,
}

/// A row of the `bookings` table.
#[derive(Debug, Clone, Queryable, Insertable)]
#[diesel(table_name = bookings)]
pub struct BookingRow {
    pub id: String,
    pub user_id: String,
    pub service_id: String,
    pub barber_id: String,
    pub date: String,
    pub status: String,
    pub notes: Option<String>,
    pub total_price_cents: Option<i64>,
    pub duration_minutes: i32,
    pub created_at: String,
    pub updated_at: String,
}

/// Converts a booking row into the domain type.
///
/// # Errors
///
/// Returns `PersistenceError::CorruptRecord` if the stored status or any
/// stored instant cannot be interpreted.
pub fn booking_from_row(row: BookingRow) -> Result<Booking, PersistenceError> {
    let status: BookingStatus = BookingStatus::from_str(&row.status)
        .map_err(|e| PersistenceError::CorruptRecord(format!("booking {}: {e}", row.id)))?;
    let date = parse_instant(&row.date)
        .map_err(|e| PersistenceError::CorruptRecord(format!("booking {}: {e}", row.id)))?;
    let created_at = parse_instant(&row.created_at)
        .map_err(|e| PersistenceError::CorruptRecord(format!("booking {}: {e}", row.id)))?;
    let updated_at = parse_instant(&row.updated_at)
        .map_err(|e| PersistenceError::CorruptRecord(format!("booking {}: {e}", row.id)))?;

    Ok(Booking {
        id: row.id,
        user_id: row.user_id,
        service_id: row.service_id,
        barber_id: row.barber_id,
        date,
        status,
        notes: row.notes,
        total_price_cents: row.total_price_cents,
        duration_minutes: row.duration_minutes,
        created_at,
        updated_at,
    })
}

/// Converts a barber row into the domain type.
///
/// # Errors
///
/// Returns `PersistenceError::CorruptRecord` if the JSON-encoded
/// specialties or working hours cannot be decoded.
pub fn barber_from_row(row: BarberRow) -> Result<Barber, PersistenceError> {
    let specialties: Vec<String> = serde_json::from_str(&row.specialties)
        .map_err(|e| PersistenceError::CorruptRecord(format!("barber {}: {e}", row.id)))?;
    let working_hours: WorkingHours = serde_json::from_str(&row.working_hours)
        .map_err(|e| PersistenceError::CorruptRecord(format!("barber {}: {e}", row.id)))?;

    Ok(Barber {
        id: row.id,
        name: row.name,
        email: row.email,
        is_active: row.is_active,
        specialties,
        working_hours,
    })
}

/// Converts a service row into the domain type.
#[must_use]
pub fn service_from_row(row: ServiceRow) -> Service {
    Service {
        id: row.id,
        name: row.name,
        description: row.description,
        price_cents: row.price_cents,
        duration_minutes: row.duration_minutes,
    }
}
