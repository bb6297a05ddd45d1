// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::handlers::{create_booking, update_booking_status, update_expired_bookings};
use crate::request_response::{BookingInfo, CreateBookingRequest, SweepResponse};
use crate::revalidate::NoopRevalidation;
use crate::tests::helpers::{customer, setup, valid_request, RecordingHook, NOW};
use barber_booking_persistence::Persistence;
use time::macros::datetime;
use time::OffsetDateTime;

fn create_at(persistence: &mut Persistence, date: OffsetDateTime) -> BookingInfo {
    let mut request: CreateBookingRequest = valid_request();
    request.date = date;
    create_booking(
        persistence,
        Some(&customer()),
        &NoopRevalidation,
        &request,
        NOW,
    )
    .unwrap()
}

#[test]
fn test_sweep_completes_expired_scheduled_bookings() {
    let mut persistence: Persistence = setup();
    let booking: BookingInfo = create_at(&mut persistence, datetime!(2026-09-02 14:00 UTC));

    let response: SweepResponse = update_expired_bookings(
        &mut persistence,
        &NoopRevalidation,
        datetime!(2026-09-02 18:00 UTC),
    );

    assert_eq!(response.expired_count, 1);
    assert_eq!(response.long_running_count, 0);
    assert!(response.failures.is_empty());
    let swept = persistence.get_booking(&booking.id).unwrap().unwrap();
    assert_eq!(swept.status.as_str(), "COMPLETED");
}

#[test]
fn test_sweep_leaves_future_bookings_alone() {
    let mut persistence: Persistence = setup();
    let booking: BookingInfo = create_at(&mut persistence, datetime!(2026-09-02 14:00 UTC));

    let response: SweepResponse = update_expired_bookings(
        &mut persistence,
        &NoopRevalidation,
        datetime!(2026-09-02 12:00 UTC),
    );

    assert_eq!(response.expired_count, 0);
    let untouched = persistence.get_booking(&booking.id).unwrap().unwrap();
    assert_eq!(untouched.status.as_str(), "SCHEDULED");
}

#[test]
fn test_sweep_completes_long_running_in_progress_bookings() {
    let mut persistence: Persistence = setup();
    let booking: BookingInfo = create_at(&mut persistence, datetime!(2026-09-02 14:00 UTC));
    update_booking_status(
        &mut persistence,
        &NoopRevalidation,
        &booking.id,
        "IN_PROGRESS",
        datetime!(2026-09-02 14:00 UTC),
    )
    .unwrap();

    // Started three hours ago: past the two-hour grace window.
    let response: SweepResponse = update_expired_bookings(
        &mut persistence,
        &NoopRevalidation,
        datetime!(2026-09-02 17:00 UTC),
    );

    assert_eq!(response.expired_count, 0);
    assert_eq!(response.long_running_count, 1);
    let swept = persistence.get_booking(&booking.id).unwrap().unwrap();
    assert_eq!(swept.status.as_str(), "COMPLETED");
}

#[test]
fn test_sweep_respects_in_progress_grace_window() {
    let mut persistence: Persistence = setup();
    let booking: BookingInfo = create_at(&mut persistence, datetime!(2026-09-02 14:00 UTC));
    update_booking_status(
        &mut persistence,
        &NoopRevalidation,
        &booking.id,
        "IN_PROGRESS",
        datetime!(2026-09-02 14:00 UTC),
    )
    .unwrap();

    // One hour in: still within the grace window.
    let response: SweepResponse = update_expired_bookings(
        &mut persistence,
        &NoopRevalidation,
        datetime!(2026-09-02 15:00 UTC),
    );

    assert_eq!(response.long_running_count, 0);
    let untouched = persistence.get_booking(&booking.id).unwrap().unwrap();
    assert_eq!(untouched.status.as_str(), "IN_PROGRESS");
}

#[test]
fn test_sweep_is_idempotent() {
    let mut persistence: Persistence = setup();
    create_at(&mut persistence, datetime!(2026-09-02 14:00 UTC));
    let sweep_at: OffsetDateTime = datetime!(2026-09-02 18:00 UTC);

    let first: SweepResponse =
        update_expired_bookings(&mut persistence, &NoopRevalidation, sweep_at);
    let second: SweepResponse =
        update_expired_bookings(&mut persistence, &NoopRevalidation, sweep_at);

    assert_eq!(first.expired_count, 1);
    assert_eq!(second.expired_count, 0);
    assert_eq!(second.long_running_count, 0);
}

#[test]
fn test_sweep_fires_hook_only_when_it_corrects_something() {
    let mut persistence: Persistence = setup();
    let hook: RecordingHook = RecordingHook::default();

    update_expired_bookings(&mut persistence, &hook, NOW);
    assert!(hook.paths.borrow().is_empty());

    create_at(&mut persistence, datetime!(2026-09-02 14:00 UTC));
    update_expired_bookings(&mut persistence, &hook, datetime!(2026-09-02 18:00 UTC));
    assert_eq!(
        hook.paths.borrow().clone(),
        vec!["/bookings", "/dashboard"]
    );
}
