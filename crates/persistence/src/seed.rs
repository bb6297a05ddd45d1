// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Development seed data: the demo shop used by local environments.

use crate::{Persistence, PersistenceError};
use barber_booking_domain::{Barber, DayHours, Role, Service, WorkingHours};
use time::OffsetDateTime;
use uuid::Uuid;

fn hours(start: &str, end: &str) -> Option<DayHours> {
    Some(DayHours {
        start: start.to_string(),
        end: end.to_string(),
    })
}

fn weekday_hours(start: &str, end: &str, sat_start: &str, sat_end: &str) -> WorkingHours {
    WorkingHours {
        monday: hours(start, end),
        tuesday: hours(start, end),
        wednesday: hours(start, end),
        thursday: hours(start, end),
        friday: hours(start, end),
        saturday: hours(sat_start, sat_end),
        sunday: None,
    }
}

fn demo_barbers() -> Vec<Barber> {
    vec![
        Barber {
            id: Uuid::new_v4().to_string(),
            name: String::from("Lucas Silva"),
            email: Some(String::from("lucas@barbeariapremium.com")),
            is_active: true,
            specialties: vec![
                String::from("Cabelo"),
                String::from("Barba"),
                String::from("Acabamento"),
            ],
            working_hours: weekday_hours("09:00", "18:00", "08:00", "17:00"),
        },
        Barber {
            id: Uuid::new_v4().to_string(),
            name: String::from("Pedro Santos"),
            email: Some(String::from("pedro@barbeariapremium.com")),
            is_active: true,
            specialties: vec![
                String::from("Barba"),
                String::from("Sobrancelha"),
                String::from("Massagem"),
            ],
            working_hours: weekday_hours("10:00", "19:00", "09:00", "18:00"),
        },
        Barber {
            id: Uuid::new_v4().to_string(),
            name: String::from("Maria Oliveira"),
            email: Some(String::from("maria@barbeariapremium.com")),
            is_active: true,
            specialties: vec![
                String::from("Cabelo"),
                String::from("Sobrancelha"),
                String::from("Hidratação"),
            ],
            working_hours: weekday_hours("09:00", "17:00", "08:00", "16:00"),
        },
        Barber {
            id: Uuid::new_v4().to_string(),
            name: String::from("Carlos Mendes"),
            email: Some(String::from("carlos@barbeariapremium.com")),
            is_active: true,
            specialties: vec![String::from("Cabelo"), String::from("Barba")],
            working_hours: weekday_hours("09:00", "18:00", "08:00", "17:00"),
        },
    ]
}

fn demo_services() -> Vec<Service> {
    vec![
        Service {
            id: Uuid::new_v4().to_string(),
            name: String::from("Corte de Cabelo"),
            description: String::from("Estilo personalizado com as últimas tendências."),
            price_cents: 6000,
            duration_minutes: 45,
        },
        Service {
            id: Uuid::new_v4().to_string(),
            name: String::from("Barba"),
            description: String::from("Modelagem completa para destacar sua masculinidade."),
            price_cents: 4000,
            duration_minutes: 30,
        },
        Service {
            id: Uuid::new_v4().to_string(),
            name: String::from("Pézinho"),
            description: String::from("Acabamento perfeito para um visual renovado."),
            price_cents: 3500,
            duration_minutes: 15,
        },
        Service {
            id: Uuid::new_v4().to_string(),
            name: String::from("Sobrancelha"),
            description: String::from("Expressão acentuada com modelagem precisa."),
            price_cents: 2000,
            duration_minutes: 15,
        },
        Service {
            id: Uuid::new_v4().to_string(),
            name: String::from("Massagem"),
            description: String::from("Relaxe com uma massagem revigorante."),
            price_cents: 5000,
            duration_minutes: 60,
        },
        Service {
            id: Uuid::new_v4().to_string(),
            name: String::from("Hidratação"),
            description: String::from("Hidratação profunda para cabelo e barba."),
            price_cents: 2500,
            duration_minutes: 30,
        },
    ]
}

/// Inserts the demo shop: barbers, services, and a staff dashboard user.
///
/// The adapter's `seed_dev_data` guards this with an emptiness check so
/// repeated startups do not duplicate the catalogue.
pub fn insert_dev_data(persistence: &mut Persistence) -> Result<(), PersistenceError> {
    let now: OffsetDateTime = OffsetDateTime::now_utc();

    for barber in demo_barbers() {
        persistence.insert_barber(&barber, now)?;
    }
    for service in demo_services() {
        persistence.insert_service(&service, now)?;
    }
    persistence.insert_user(
        &Uuid::new_v4().to_string(),
        "Equipe Premium",
        "staff@barbeariapremium.com",
        Role::Staff,
        now,
    )?;

    Ok(())
}
