// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use time::{Duration, OffsetDateTime, Weekday};

/// Deployment-level scheduling constants.
///
/// These are the booking-acceptance rules, distinct from the dashboard's
/// display window (a presentation concern that renders 8:00–20:00).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchedulingPolicy {
    /// Minimum lead time between "now" and the booking start. Inclusive:
    /// a booking exactly this far ahead is accepted.
    pub min_lead_time: Duration,
    /// First bookable hour of the day (inclusive).
    pub opening_hour: u8,
    /// First non-bookable hour of the day (exclusive upper bound).
    pub closing_hour: u8,
    /// Weekdays on which the shop accepts bookings.
    pub operating_days: [Weekday; 6],
}

impl Default for SchedulingPolicy {
    /// The production deployment: 1 hour lead time, Monday through
    /// Saturday, 9:00 inclusive to 19:00 exclusive.
    fn default() -> Self {
        Self {
            min_lead_time: Duration::hours(1),
            opening_hour: 9,
            closing_hour: 19,
            operating_days: [
                Weekday::Monday,
                Weekday::Tuesday,
                Weekday::Wednesday,
                Weekday::Thursday,
                Weekday::Friday,
                Weekday::Saturday,
            ],
        }
    }
}

impl SchedulingPolicy {
    /// Returns whether the requested instant satisfies the minimum lead
    /// time. The boundary is inclusive: exactly `min_lead_time` ahead
    /// passes.
    #[must_use]
    pub fn has_lead_time(&self, date: OffsetDateTime, now: OffsetDateTime) -> bool {
        date - now >= self.min_lead_time
    }

    /// Returns whether the instant falls on an operating day.
    #[must_use]
    pub fn is_operating_day(&self, date: OffsetDateTime) -> bool {
        self.operating_days.contains(&date.weekday())
    }

    /// Returns whether the instant's hour falls within opening hours.
    /// The upper bound is exclusive: 18:59:59 passes, 19:00:00 does not.
    #[must_use]
    pub const fn is_within_opening_hours(&self, date: OffsetDateTime) -> bool {
        date.hour() >= self.opening_hour && date.hour() < self.closing_hour
    }
}
