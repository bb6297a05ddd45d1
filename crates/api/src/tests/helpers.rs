// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Shared fixtures for handler tests.

use crate::auth::AuthenticatedUser;
use crate::request_response::CreateBookingRequest;
use crate::revalidate::RevalidationHook;
use barber_booking_domain::{Barber, DayHours, Role, Service, WorkingHours};
use barber_booking_persistence::Persistence;
use std::cell::RefCell;
use time::macros::datetime;
use time::OffsetDateTime;

pub const USER_ID: &str = "0191d8a0-5f2e-7c3b-9b1a-000000000001";
pub const STAFF_ID: &str = "0191d8a0-5f2e-7c3b-9b1a-000000000002";
pub const BARBER_ID: &str = "0191d8a0-5f2e-7c3b-9b1a-000000000003";
pub const INACTIVE_BARBER_ID: &str = "0191d8a0-5f2e-7c3b-9b1a-000000000004";
pub const SERVICE_ID: &str = "0191d8a0-5f2e-7c3b-9b1a-000000000005";

/// A Tuesday morning inside opening hours.
pub const NOW: OffsetDateTime = datetime!(2026-09-01 10:00 UTC);

/// A Wednesday afternoon slot, comfortably past the lead time.
pub const SLOT: OffsetDateTime = datetime!(2026-09-02 14:00 UTC);

const SEEDED_AT: OffsetDateTime = datetime!(2026-08-01 12:00 UTC);

fn fixture_barber(id: &str, name: &str, is_active: bool) -> Barber {
    Barber {
        id: id.to_string(),
        name: name.to_string(),
        email: None,
        is_active,
        specialties: vec![String::from("Cabelo")],
        working_hours: WorkingHours {
            wednesday: Some(DayHours {
                start: String::from("09:00"),
                end: String::from("18:00"),
            }),
            ..WorkingHours::default()
        },
    }
}

/// Creates an in-memory database with a customer, a staff member, an
/// active and an inactive barber, and one 45-minute service.
pub fn setup() -> Persistence {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();
    persistence
        .insert_user(USER_ID, "Test User", "user@example.com", Role::User, SEEDED_AT)
        .unwrap();
    persistence
        .insert_user(
            STAFF_ID,
            "Staff Member",
            "staff@example.com",
            Role::Staff,
            SEEDED_AT,
        )
        .unwrap();
    persistence
        .insert_barber(&fixture_barber(BARBER_ID, "Lucas Silva", true), SEEDED_AT)
        .unwrap();
    persistence
        .insert_barber(
            &fixture_barber(INACTIVE_BARBER_ID, "Pedro Santos", false),
            SEEDED_AT,
        )
        .unwrap();
    persistence
        .insert_service(
            &Service {
                id: SERVICE_ID.to_string(),
                name: String::from("Corte de Cabelo"),
                description: String::from("Corte completo"),
                price_cents: 6000,
                duration_minutes: 45,
            },
            SEEDED_AT,
        )
        .unwrap();
    persistence
}

pub fn customer() -> AuthenticatedUser {
    AuthenticatedUser::new(
        String::from(USER_ID),
        String::from("user@example.com"),
        String::from("Test User"),
    )
}

pub fn staff() -> AuthenticatedUser {
    AuthenticatedUser::new(
        String::from(STAFF_ID),
        String::from("staff@example.com"),
        String::from("Staff Member"),
    )
}

pub fn valid_request() -> CreateBookingRequest {
    CreateBookingRequest {
        service_id: SERVICE_ID.to_string(),
        barber_id: BARBER_ID.to_string(),
        date: SLOT,
        notes: None,
    }
}

/// A hook that records every path it was asked to revalidate.
#[derive(Debug, Default)]
pub struct RecordingHook {
    pub paths: RefCell<Vec<String>>,
}

impl RevalidationHook for RecordingHook {
    fn revalidate(&self, path: &str) {
        self.paths.borrow_mut().push(path.to_string());
    }
}
