// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! User queries.

use crate::diesel_schema::users;
use crate::error::PersistenceError;
use diesel::prelude::*;
use diesel::SqliteConnection;

/// Query only a user's stored role.
///
/// Privileged paths load the role from storage rather than trusting the
/// identity provider, which knows nothing about shop roles.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn get_user_role(
    conn: &mut SqliteConnection,
    user_id: &str,
) -> Result<Option<String>, PersistenceError> {
    users::table
        .filter(users::id.eq(user_id))
        .select(users::role)
        .first::<String>(conn)
        .optional()
        .map_err(|e| PersistenceError::QueryFailed(format!("get_user_role: {e}")))
}
