// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Instant parsing, formatting, and normalization.
//!
//! All instants in the system are normalized to UTC with whole-second
//! precision and stored as RFC 3339 text. With a fixed offset and no
//! sub-second component, stored values compare lexicographically in
//! chronological order, which the persistence layer relies on for
//! range queries over booking dates.

use crate::error::DomainError;
use time::format_description::well_known::Rfc3339;
use time::{Duration, OffsetDateTime, UtcOffset};

/// Normalizes an instant to UTC with whole-second precision.
#[must_use]
pub fn normalize_instant(instant: OffsetDateTime) -> OffsetDateTime {
    let utc: OffsetDateTime = instant.to_offset(UtcOffset::UTC);
    utc - Duration::nanoseconds(i64::from(utc.nanosecond()))
}

/// Parses an RFC 3339 string into a normalized instant.
///
/// # Errors
///
/// Returns `DomainError::DateParseError` if the string is not valid RFC 3339.
pub fn parse_instant(value: &str) -> Result<OffsetDateTime, DomainError> {
    OffsetDateTime::parse(value, &Rfc3339)
        .map(normalize_instant)
        .map_err(|e| DomainError::DateParseError {
            date_string: value.to_string(),
            error: e.to_string(),
        })
}

/// Formats an instant as normalized RFC 3339 text.
///
/// # Errors
///
/// Returns `DomainError::DateFormatError` if formatting fails. This only
/// happens for instants outside the RFC 3339 representable range.
pub fn format_instant(instant: OffsetDateTime) -> Result<String, DomainError> {
    normalize_instant(instant)
        .format(&Rfc3339)
        .map_err(|e| DomainError::DateFormatError {
            error: e.to_string(),
        })
}
