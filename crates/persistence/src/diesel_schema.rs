// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Diesel table definitions for the booking schema.
//!
//! Instants are stored as RFC 3339 UTC text with whole-second precision,
//! so textual comparison matches chronological order. Specialties and
//! working hours are JSON-encoded text columns.

diesel::table! {
    users (id) {
        id -> Text,
        name -> Text,
        email -> Text,
        role -> Text,
        created_at -> Text,
    }
}

diesel::table! {
    barbers (id) {
        id -> Text,
        name -> Text,
        email -> Nullable<Text>,
        is_active -> Bool,
        specialties -> Text,
        working_hours -> Text,
        created_at -> Text,
    }
}

diesel::table! {
    services (id) {
        id -> Text,
        name -> Text,
        description -> Text,
        price_cents -> BigInt,
        duration_minutes -> Integer,
        created_at -> Text,
    }
}

diesel::table! {
    bookings (id) {
        id -> Text,
        user_id -> Text,
        service_id -> Text,
        barber_id -> Text,
        date -> Text,
        status -> Text,
        notes -> Nullable<Text>,
        total_price_cents -> Nullable<BigInt>,
        duration_minutes -> Integer,
        created_at -> Text,
        updated_at -> Text,
    }
}

diesel::joinable!(bookings -> users (user_id));
diesel::joinable!(bookings -> services (service_id));
diesel::joinable!(bookings -> barbers (barber_id));

diesel::allow_tables_to_appear_in_same_query!(users, barbers, services, bookings);
