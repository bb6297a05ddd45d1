// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{BookingStatus, DomainError};
use std::str::FromStr;

#[test]
fn test_status_round_trips_through_storage_representation() {
    let statuses: [BookingStatus; 4] = [
        BookingStatus::Scheduled,
        BookingStatus::InProgress,
        BookingStatus::Completed,
        BookingStatus::Cancelled,
    ];
    for status in statuses {
        let parsed: BookingStatus = BookingStatus::from_str(status.as_str()).unwrap();
        assert_eq!(parsed, status);
    }
}

#[test]
fn test_status_rejects_unknown_spelling() {
    let result: Result<BookingStatus, DomainError> = BookingStatus::from_str("NO_SHOW");
    assert!(matches!(result, Err(DomainError::InvalidStatus(_))));
}

#[test]
fn test_status_rejects_lowercase_spelling() {
    let result: Result<BookingStatus, DomainError> = BookingStatus::from_str("scheduled");
    assert!(matches!(result, Err(DomainError::InvalidStatus(_))));
}

#[test]
fn test_cancelled_is_not_active() {
    assert!(!BookingStatus::Cancelled.is_active());
}

#[test]
fn test_every_non_cancelled_status_is_active() {
    assert!(BookingStatus::Scheduled.is_active());
    assert!(BookingStatus::InProgress.is_active());
    assert!(BookingStatus::Completed.is_active());
}

#[test]
fn test_terminal_states() {
    assert!(BookingStatus::Completed.is_terminal());
    assert!(BookingStatus::Cancelled.is_terminal());
    assert!(!BookingStatus::Scheduled.is_terminal());
    assert!(!BookingStatus::InProgress.is_terminal());
}

#[test]
fn test_forward_transitions_are_valid() {
    assert!(BookingStatus::Scheduled.can_transition_to(BookingStatus::InProgress));
    assert!(BookingStatus::Scheduled.can_transition_to(BookingStatus::Completed));
    assert!(BookingStatus::Scheduled.can_transition_to(BookingStatus::Cancelled));
    assert!(BookingStatus::InProgress.can_transition_to(BookingStatus::Completed));
    assert!(BookingStatus::InProgress.can_transition_to(BookingStatus::Cancelled));
    assert!(BookingStatus::Completed.can_transition_to(BookingStatus::Cancelled));
}

#[test]
fn test_nothing_transitions_out_of_cancelled() {
    assert!(!BookingStatus::Cancelled.can_transition_to(BookingStatus::Scheduled));
    assert!(!BookingStatus::Cancelled.can_transition_to(BookingStatus::InProgress));
    assert!(!BookingStatus::Cancelled.can_transition_to(BookingStatus::Completed));
}

#[test]
fn test_no_backward_transitions() {
    assert!(!BookingStatus::InProgress.can_transition_to(BookingStatus::Scheduled));
    assert!(!BookingStatus::Completed.can_transition_to(BookingStatus::Scheduled));
    assert!(!BookingStatus::Completed.can_transition_to(BookingStatus::InProgress));
}

#[test]
fn test_default_status_is_scheduled() {
    assert_eq!(BookingStatus::default(), BookingStatus::Scheduled);
}
