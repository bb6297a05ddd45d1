// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for the Barber Booking System.
//!
//! This crate provides `SQLite` persistence for users, barbers, services,
//! and bookings, built on Diesel with embedded migrations.
//!
//! In-memory databases are used for development defaults and tests; each
//! in-memory instance gets a unique shared-memory name via an atomic
//! counter so tests are isolated without time-based collisions. File
//! databases run in WAL mode. Foreign-key enforcement is verified at
//! startup.
//!
//! The conflict engine's write-time guarantee lives here: booking
//! creation re-checks interval overlap and inserts inside one immediate
//! (write-locking) transaction, and a partial unique index over
//! non-cancelled `(barber_id, date)` pairs backstops the exact-start
//! race at the storage layer.

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

use std::path::Path;
use std::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering};

use barber_booking_domain::{
    format_instant, Barber, Booking, BookingStatus, Role, Service, Slot,
    MAX_SERVICE_DURATION_MINUTES,
};
use diesel::SqliteConnection;
use time::{Duration, OffsetDateTime};

mod data_models;
mod diesel_schema;
mod error;
mod mutations;
mod queries;
mod seed;
mod sqlite;

#[cfg(test)]
mod tests;

pub use error::PersistenceError;
pub use queries::stats::BookingStats;

use data_models::{barber_from_row, booking_from_row, service_from_row, BookingRow, UserRow};

/// Atomic counter for generating unique in-memory database names.
///
/// This ensures deterministic test isolation by eliminating time-based
/// collisions. Each call to `new_in_memory()` receives a unique
/// sequential ID.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Input for creating a booking row.
///
/// Price and duration are already snapshotted from the service by the
/// caller; `date` is a validated, normalized start instant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBooking {
    /// Opaque unique identifier for the new booking.
    pub id: String,
    /// The owning user.
    pub user_id: String,
    /// The booked service.
    pub service_id: String,
    /// The barber performing the service.
    pub barber_id: String,
    /// Scheduled start instant.
    pub date: OffsetDateTime,
    /// Sanitized notes, if any.
    pub notes: Option<String>,
    /// Price in cents, snapshotted from the service.
    pub total_price_cents: Option<i64>,
    /// Appointment length in minutes, snapshotted from the service.
    pub duration_minutes: i32,
    /// Creation instant. Also used as the initial update timestamp.
    pub created_at: OffsetDateTime,
}

/// A booking joined with the display names the dashboard renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingWithNames {
    /// The booking itself.
    pub booking: Booking,
    /// The owning user's display name.
    pub user_name: String,
    /// The booked service's display name.
    pub service_name: String,
    /// The barber's display name.
    pub barber_name: String,
}

fn encode_instant(instant: OffsetDateTime) -> Result<String, PersistenceError> {
    format_instant(instant).map_err(|e| PersistenceError::QueryFailed(format!("encode: {e}")))
}

/// Persistence adapter for the booking schema.
///
/// All access goes through this adapter; handlers never see a raw
/// connection. One logical operation per method call.
pub struct Persistence {
    conn: SqliteConnection,
}

impl Persistence {
    /// Creates a persistence adapter backed by an in-memory `SQLite`
    /// database.
    ///
    /// Each call receives a unique database instance via atomic counter,
    /// ensuring deterministic test isolation.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        let db_id: u64 = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let db_name = format!("memdb_booking_{db_id}");
        let shared_memory_url = format!("file:{db_name}?mode=memory&cache=shared");

        let mut conn: SqliteConnection = sqlite::initialize_database(&shared_memory_url)?;
        sqlite::verify_foreign_key_enforcement(&mut conn)?;

        Ok(Self { conn })
    }

    /// Creates a persistence adapter backed by a file-based `SQLite`
    /// database.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let path_str: &str = path.as_ref().to_str().ok_or_else(|| {
            PersistenceError::InitializationError("Invalid database path".to_string())
        })?;

        let mut conn: SqliteConnection = sqlite::initialize_database(path_str)?;
        sqlite::enable_wal_mode(&mut conn)?;
        sqlite::verify_foreign_key_enforcement(&mut conn)?;

        Ok(Self { conn })
    }

    // ========================================================================
    // Bookings
    // ========================================================================

    /// Creates a booking, guaranteeing the slot is free at write time.
    ///
    /// The interval-overlap re-check and the insert run inside one
    /// immediate transaction, closing the race between an earlier
    /// availability probe and the commit. Cancelled bookings never
    /// count as conflicts.
    ///
    /// # Errors
    ///
    /// * `PersistenceError::SlotOccupied` if an active booking overlaps
    ///   the requested window (including a lost race surfacing as a
    ///   unique-constraint violation)
    /// * other variants if the transaction fails
    pub fn create_booking(&mut self, new: &NewBooking) -> Result<Booking, PersistenceError> {
        let slot: Slot = Slot::new(new.date, new.duration_minutes)
            .map_err(|e| PersistenceError::CorruptRecord(format!("new booking: {e}")))?;
        let date_str: String = encode_instant(new.date)?;
        let created_str: String = encode_instant(new.created_at)?;
        let window_start: String = encode_instant(
            new.date - Duration::minutes(i64::from(MAX_SERVICE_DURATION_MINUTES)),
        )?;
        let window_end: String = encode_instant(slot.end())?;

        let row = BookingRow {
            id: new.id.clone(),
            user_id: new.user_id.clone(),
            service_id: new.service_id.clone(),
            barber_id: new.barber_id.clone(),
            date: date_str.clone(),
            status: BookingStatus::Scheduled.as_str().to_string(),
            notes: new.notes.clone(),
            total_price_cents: new.total_price_cents,
            duration_minutes: new.duration_minutes,
            created_at: created_str.clone(),
            updated_at: created_str,
        };

        let result: Result<(), PersistenceError> =
            self.conn.immediate_transaction(|conn| {
                let candidates: Vec<BookingRow> = queries::bookings::overlap_candidates(
                    conn,
                    &new.barber_id,
                    &window_start,
                    &window_end,
                )?;
                for candidate in candidates {
                    let existing: Booking = booking_from_row(candidate)?;
                    if existing.slot().overlaps(&slot) {
                        return Err(PersistenceError::SlotOccupied {
                            barber_id: new.barber_id.clone(),
                            date: row.date.clone(),
                        });
                    }
                }
                mutations::bookings::insert_booking(conn, &row)
            });

        match result {
            Ok(()) => booking_from_row(row),
            // A concurrent creator that slipped past the read-check trips
            // the partial unique index instead.
            Err(PersistenceError::UniqueViolation(_)) => Err(PersistenceError::SlotOccupied {
                barber_id: new.barber_id.clone(),
                date: encode_instant(new.date)?,
            }),
            Err(e) => Err(e),
        }
    }

    /// Loads a booking by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or the stored row is corrupt.
    pub fn get_booking(&mut self, booking_id: &str) -> Result<Option<Booking>, PersistenceError> {
        queries::bookings::get_booking(&mut self.conn, booking_id)?
            .map(booking_from_row)
            .transpose()
    }

    /// Finds the first active booking overlapping the given slot for a
    /// barber, if any. Read-only availability probe.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a stored row is corrupt.
    pub fn find_overlapping_booking(
        &mut self,
        barber_id: &str,
        slot: &Slot,
    ) -> Result<Option<Booking>, PersistenceError> {
        let window_start: String = encode_instant(
            slot.start - Duration::minutes(i64::from(MAX_SERVICE_DURATION_MINUTES)),
        )?;
        let window_end: String = encode_instant(slot.end())?;

        let candidates: Vec<BookingRow> = queries::bookings::overlap_candidates(
            &mut self.conn,
            barber_id,
            &window_start,
            &window_end,
        )?;
        for candidate in candidates {
            let existing: Booking = booking_from_row(candidate)?;
            if existing.slot().overlaps(slot) {
                return Ok(Some(existing));
            }
        }
        Ok(None)
    }

    /// Lists all bookings owned by a user, most recent first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a stored row is corrupt.
    pub fn list_bookings_for_user(
        &mut self,
        user_id: &str,
    ) -> Result<Vec<Booking>, PersistenceError> {
        queries::bookings::list_for_user(&mut self.conn, user_id)?
            .into_iter()
            .map(booking_from_row)
            .collect()
    }

    /// Lists bookings with start instants in `[window_start, window_end)`
    /// joined with user, service, and barber display names.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a stored row is corrupt.
    pub fn list_bookings_in_window(
        &mut self,
        window_start: OffsetDateTime,
        window_end: OffsetDateTime,
    ) -> Result<Vec<BookingWithNames>, PersistenceError> {
        let start_str: String = encode_instant(window_start)?;
        let end_str: String = encode_instant(window_end)?;

        queries::bookings::list_in_window_with_names(&mut self.conn, &start_str, &end_str)?
            .into_iter()
            .map(|(row, user_name, service_name, barber_name)| {
                Ok(BookingWithNames {
                    booking: booking_from_row(row)?,
                    user_name,
                    service_name,
                    barber_name,
                })
            })
            .collect()
    }

    /// Writes a booking's status unconditionally and refreshes its
    /// update timestamp, returning the updated booking.
    ///
    /// # Errors
    ///
    /// * `PersistenceError::NotFound` if the booking does not exist
    /// * other variants if the update fails
    pub fn set_booking_status(
        &mut self,
        booking_id: &str,
        status: BookingStatus,
        now: OffsetDateTime,
    ) -> Result<Booking, PersistenceError> {
        let now_str: String = encode_instant(now)?;
        let affected: usize =
            mutations::bookings::update_status(&mut self.conn, booking_id, status, &now_str)?;
        if affected == 0 {
            return Err(PersistenceError::NotFound(format!(
                "booking {booking_id}"
            )));
        }
        self.get_booking(booking_id)?.ok_or_else(|| {
            PersistenceError::NotFound(format!("booking {booking_id} vanished after update"))
        })
    }

    /// Writes one target status across many bookings, returning the
    /// affected count.
    ///
    /// # Errors
    ///
    /// Returns an error if the update fails.
    pub fn set_many_bookings_status(
        &mut self,
        booking_ids: &[String],
        status: BookingStatus,
        now: OffsetDateTime,
    ) -> Result<usize, PersistenceError> {
        let now_str: String = encode_instant(now)?;
        mutations::bookings::update_many_status(&mut self.conn, booking_ids, status, &now_str)
    }

    /// Sweeps `SCHEDULED` bookings whose start is strictly before `now`
    /// into `COMPLETED`, returning the corrected count. Idempotent.
    ///
    /// # Errors
    ///
    /// Returns an error if the update fails.
    pub fn complete_expired_scheduled(
        &mut self,
        now: OffsetDateTime,
    ) -> Result<usize, PersistenceError> {
        let now_str: String = encode_instant(now)?;
        mutations::bookings::complete_expired_scheduled(&mut self.conn, &now_str)
    }

    /// Sweeps `IN_PROGRESS` bookings whose start is strictly before
    /// `cutoff` into `COMPLETED`, returning the corrected count.
    /// Idempotent.
    ///
    /// # Errors
    ///
    /// Returns an error if the update fails.
    pub fn complete_stale_in_progress(
        &mut self,
        cutoff: OffsetDateTime,
        now: OffsetDateTime,
    ) -> Result<usize, PersistenceError> {
        let cutoff_str: String = encode_instant(cutoff)?;
        let now_str: String = encode_instant(now)?;
        mutations::bookings::complete_stale_in_progress(&mut self.conn, &cutoff_str, &now_str)
    }

    /// Hard-deletes a booking row.
    ///
    /// # Errors
    ///
    /// * `PersistenceError::NotFound` if the booking does not exist
    /// * other variants if the delete fails
    pub fn delete_booking(&mut self, booking_id: &str) -> Result<(), PersistenceError> {
        let affected: usize = mutations::bookings::delete_booking(&mut self.conn, booking_id)?;
        if affected == 0 {
            return Err(PersistenceError::NotFound(format!(
                "booking {booking_id}"
            )));
        }
        Ok(())
    }

    /// Per-status counts and completed revenue for the dashboard.
    ///
    /// # Errors
    ///
    /// Returns an error if an aggregate query fails.
    pub fn booking_stats(&mut self) -> Result<BookingStats, PersistenceError> {
        queries::stats::booking_stats(&mut self.conn)
    }

    // ========================================================================
    // Catalogue
    // ========================================================================

    /// Loads a barber by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or the stored row is corrupt.
    pub fn get_barber(&mut self, barber_id: &str) -> Result<Option<Barber>, PersistenceError> {
        queries::catalog::get_barber(&mut self.conn, barber_id)?
            .map(barber_from_row)
            .transpose()
    }

    /// Lists all active barbers, ordered by name.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a stored row is corrupt.
    pub fn list_active_barbers(&mut self) -> Result<Vec<Barber>, PersistenceError> {
        queries::catalog::list_active_barbers(&mut self.conn)?
            .into_iter()
            .map(barber_from_row)
            .collect()
    }

    /// Loads a service by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_service(&mut self, service_id: &str) -> Result<Option<Service>, PersistenceError> {
        Ok(queries::catalog::get_service(&mut self.conn, service_id)?.map(service_from_row))
    }

    /// Lists all services, ordered by name.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_services(&mut self) -> Result<Vec<Service>, PersistenceError> {
        Ok(queries::catalog::list_services(&mut self.conn)?
            .into_iter()
            .map(service_from_row)
            .collect())
    }

    /// Flips a barber's active flag.
    ///
    /// # Errors
    ///
    /// * `PersistenceError::NotFound` if the barber does not exist
    /// * other variants if the update fails
    pub fn set_barber_active(
        &mut self,
        barber_id: &str,
        is_active: bool,
    ) -> Result<(), PersistenceError> {
        let affected: usize =
            mutations::catalog::set_barber_active(&mut self.conn, barber_id, is_active)?;
        if affected == 0 {
            return Err(PersistenceError::NotFound(format!("barber {barber_id}")));
        }
        Ok(())
    }

    // ========================================================================
    // Users
    // ========================================================================

    /// Loads a user's stored role.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or the stored role is corrupt.
    pub fn get_user_role(&mut self, user_id: &str) -> Result<Option<Role>, PersistenceError> {
        queries::users::get_user_role(&mut self.conn, user_id)?
            .map(|role| {
                Role::from_str(&role)
                    .map_err(|e| PersistenceError::CorruptRecord(format!("user {user_id}: {e}")))
            })
            .transpose()
    }

    /// Inserts a user.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn insert_user(
        &mut self,
        id: &str,
        name: &str,
        email: &str,
        role: Role,
        now: OffsetDateTime,
    ) -> Result<(), PersistenceError> {
        let row = UserRow {
            id: id.to_string(),
            name: name.to_string(),
            email: email.to_string(),
            role: role.as_str().to_string(),
            created_at: encode_instant(now)?,
        };
        mutations::catalog::insert_user(&mut self.conn, &row)
    }

    /// Inserts a barber.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the insert fails.
    pub fn insert_barber(
        &mut self,
        barber: &Barber,
        now: OffsetDateTime,
    ) -> Result<(), PersistenceError> {
        let specialties: String = serde_json::to_string(&barber.specialties)
            .map_err(|e| PersistenceError::CorruptRecord(format!("barber {}: {e}", barber.id)))?;
        let working_hours: String = serde_json::to_string(&barber.working_hours)
            .map_err(|e| PersistenceError::CorruptRecord(format!("barber {}: {e}", barber.id)))?;

        let row = data_models::BarberRow {
            id: barber.id.clone(),
            name: barber.name.clone(),
            email: barber.email.clone(),
            is_active: barber.is_active,
            specialties,
            working_hours,
            created_at: encode_instant(now)?,
        };
        mutations::catalog::insert_barber(&mut self.conn, &row)
    }

    /// Inserts a service.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn insert_service(
        &mut self,
        service: &Service,
        now: OffsetDateTime,
    ) -> Result<(), PersistenceError> {
        let row = data_models::ServiceRow {
            id: service.id.clone(),
            name: service.name.clone(),
            description: service.description.clone(),
            price_cents: service.price_cents,
            duration_minutes: service.duration_minutes,
            created_at: encode_instant(now)?,
        };
        mutations::catalog::insert_service(&mut self.conn, &row)
    }

    /// Seeds the demo shop if the catalogue is empty.
    ///
    /// Returns `true` when data was inserted, `false` when the database
    /// already had barbers and seeding was skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if any insert fails.
    pub fn seed_dev_data(&mut self) -> Result<bool, PersistenceError> {
        if queries::catalog::count_barbers(&mut self.conn)? > 0 {
            return Ok(false);
        }
        seed::insert_dev_data(self)?;
        Ok(true)
    }
}
