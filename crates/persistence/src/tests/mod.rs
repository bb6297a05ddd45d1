// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.


use crate::{NewBooking, Persistence};
use barber_booking_domain::{Barber, DayHours, Role, Service, WorkingHours};
use time::macros::datetime;
use time::OffsetDateTime;

pub const USER_ID: &str = "0191d8a0-5f2e-7c3b-9b1a-000000000001";
pub const OTHER_USER_ID: &str = "0191d8a0-5f2e-7c3b-9b1a-000000000002";
pub const BARBER_ID: &str = "0191d8a0-5f2e-7c3b-9b1a-000000000003";
pub const OTHER_BARBER_ID: &str = "0191d8a0-5f2e-7c3b-9b1a-000000000004";
pub const SERVICE_ID: &str = "0191d8a0-5f2e-7c3b-9b1a-000000000005";

pub const SEEDED_AT: OffsetDateTime = datetime!(2026-08-01 12:00 UTC);

pub fn test_barber(id: &str, name: &str) -> Barber {
    Barber {
        id: id.to_string(),
        name: name.to_string(),
        email: None,
        is_active: true,
        specialties: vec![String::from("Cabelo")],
        working_hours: WorkingHours {
            monday: Some(DayHours {
                start: String::from("09:00"),
                end: String::from("18:00"),
            }),
            ..WorkingHours::default()
        },
    }
}

pub fn test_service() -> Service {
    Service {
        id: SERVICE_ID.to_string(),
        name: String::from("Corte de Cabelo"),
        description: String::from("Corte completo"),
        price_cents: 6000,
        duration_minutes: 45,
    }
}

/// Creates an in-memory database with one user, two barbers, and one
/// service.
pub fn setup() -> Persistence {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();
    persistence
        .insert_user(USER_ID, "Test User", "user@example.com", Role::User, SEEDED_AT)
        .unwrap();
    persistence
        .insert_user(
            OTHER_USER_ID,
            "Other User",
            "other@example.com",
            Role::Staff,
            SEEDED_AT,
        )
        .unwrap();
    persistence
        .insert_barber(&test_barber(BARBER_ID, "Lucas Silva"), SEEDED_AT)
        .unwrap();
    persistence
        .insert_barber(&test_barber(OTHER_BARBER_ID, "Pedro Santos"), SEEDED_AT)
        .unwrap();
    persistence.insert_service(&test_service(), SEEDED_AT).unwrap();
    persistence
}

pub fn new_booking(id: &str, date: OffsetDateTime) -> NewBooking {
    NewBooking {
        id: id.to_string(),
        user_id: USER_ID.to_string(),
        service_id: SERVICE_ID.to_string(),
        barber_id: BARBER_ID.to_string(),
        date,
        notes: None,
        total_price_cents: Some(6000),
        duration_minutes: 45,
        created_at: SEEDED_AT,
    }
}
