// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{DayHours, DomainError, Role, Slot, WorkingHours};
use std::str::FromStr;
use time::macros::datetime;
use time::Weekday;

#[test]
fn test_role_round_trips_through_storage_representation() {
    for role in [Role::User, Role::Staff, Role::Owner] {
        assert_eq!(Role::from_str(role.as_str()).unwrap(), role);
    }
}

#[test]
fn test_role_rejects_unknown_spelling() {
    let result: Result<Role, DomainError> = Role::from_str("ADMIN");
    assert!(matches!(result, Err(DomainError::InvalidRole(_))));
}

#[test]
fn test_plain_users_cannot_manage_bookings() {
    assert!(!Role::User.can_manage_bookings());
    assert!(Role::Staff.can_manage_bookings());
    assert!(Role::Owner.can_manage_bookings());
}

#[test]
fn test_slot_rejects_non_positive_duration() {
    let start = datetime!(2026-09-01 14:00 UTC);
    assert!(matches!(
        Slot::new(start, 0),
        Err(DomainError::InvalidDuration { minutes: 0 })
    ));
    assert!(matches!(
        Slot::new(start, -30),
        Err(DomainError::InvalidDuration { minutes: -30 })
    ));
}

#[test]
fn test_slot_rejects_duration_above_ceiling() {
    let start = datetime!(2026-09-01 14:00 UTC);
    assert!(matches!(
        Slot::new(start, 241),
        Err(DomainError::InvalidDuration { minutes: 241 })
    ));
    assert!(Slot::new(start, 240).is_ok());
}

#[test]
fn test_identical_slots_overlap() {
    let a: Slot = Slot::new(datetime!(2026-09-01 14:00 UTC), 30).unwrap();
    assert!(a.overlaps(&a));
}

#[test]
fn test_partially_overlapping_slots_overlap() {
    let a: Slot = Slot::new(datetime!(2026-09-01 14:00 UTC), 60).unwrap();
    let b: Slot = Slot::new(datetime!(2026-09-01 14:45 UTC), 30).unwrap();
    assert!(a.overlaps(&b));
    assert!(b.overlaps(&a));
}

#[test]
fn test_containing_slot_overlaps() {
    let outer: Slot = Slot::new(datetime!(2026-09-01 14:00 UTC), 120).unwrap();
    let inner: Slot = Slot::new(datetime!(2026-09-01 14:30 UTC), 15).unwrap();
    assert!(outer.overlaps(&inner));
    assert!(inner.overlaps(&outer));
}

#[test]
fn test_back_to_back_slots_do_not_overlap() {
    let a: Slot = Slot::new(datetime!(2026-09-01 14:00 UTC), 30).unwrap();
    let b: Slot = Slot::new(datetime!(2026-09-01 14:30 UTC), 30).unwrap();
    assert!(!a.overlaps(&b));
    assert!(!b.overlaps(&a));
}

#[test]
fn test_disjoint_slots_do_not_overlap() {
    let a: Slot = Slot::new(datetime!(2026-09-01 09:00 UTC), 30).unwrap();
    let b: Slot = Slot::new(datetime!(2026-09-01 16:00 UTC), 30).unwrap();
    assert!(!a.overlaps(&b));
}

#[test]
fn test_slot_end_is_exclusive_bound() {
    let slot: Slot = Slot::new(datetime!(2026-09-01 14:00 UTC), 45).unwrap();
    assert_eq!(slot.end(), datetime!(2026-09-01 14:45 UTC));
}

fn weekday_hours() -> WorkingHours {
    WorkingHours {
        monday: Some(DayHours {
            start: String::from("09:00"),
            end: String::from("18:00"),
        }),
        saturday: Some(DayHours {
            start: String::from("08:00"),
            end: String::from("17:00"),
        }),
        ..WorkingHours::default()
    }
}

#[test]
fn test_working_hours_lookup_by_weekday() {
    let hours: WorkingHours = weekday_hours();
    assert_eq!(
        hours.for_weekday(Weekday::Monday).map(|h| h.start.as_str()),
        Some("09:00")
    );
    assert_eq!(
        hours
            .for_weekday(Weekday::Saturday)
            .map(|h| h.end.as_str()),
        Some("17:00")
    );
    assert!(hours.for_weekday(Weekday::Sunday).is_none());
}

#[test]
fn test_working_hours_json_shape_matches_seed_data() {
    let json = r#"{"monday":{"start":"09:00","end":"18:00"},"tuesday":null,"wednesday":null,"thursday":null,"friday":null,"saturday":null,"sunday":null}"#;
    let parsed: WorkingHours = serde_json::from_str(json).unwrap();
    assert_eq!(
        parsed.monday,
        Some(DayHours {
            start: String::from("09:00"),
            end: String::from("18:00"),
        })
    );
    assert!(parsed.sunday.is_none());
}
