// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The error/logging boundary between persistence and the API contract.
//!
//! Business failures (`SlotOccupied`, `NotFound`) translate to their API
//! kinds and propagate verbatim. Everything else is an infrastructure
//! failure: its detail is logged with the operation name and identifying
//! ids, and the client sees only the opaque internal error.

use crate::error::ApiError;
use barber_booking_persistence::PersistenceError;

/// Translates a persistence failure into an API error.
///
/// `resource` names what a `NotFound` should be reported as; `context`
/// carries the identifying ids for the error log.
pub(crate) fn map_persistence_error(
    operation: &'static str,
    resource: &'static str,
    context: &str,
    err: PersistenceError,
) -> ApiError {
    match err {
        PersistenceError::SlotOccupied { barber_id, date } => {
            ApiError::SlotOccupied { barber_id, date }
        }
        PersistenceError::NotFound(message) => ApiError::NotFound { resource, message },
        other => {
            tracing::error!(operation, context, error = %other, "persistence failure");
            ApiError::internal()
        }
    }
}
