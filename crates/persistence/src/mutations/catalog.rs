// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Club, court, and activity insert operations.
//!
//! The catalog is administrator-maintained reference data; there are no
//! update or delete operations here.

use diesel::prelude::*;

use crate::data_models::{NewActivityRow, NewClubRow, NewCourtRow};
use crate::diesel_schema::{activities, clubs, courts};
use crate::error::PersistenceError;
use crate::sqlite::get_last_insert_rowid;

/// Insert a club and return its assigned ID.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn insert_club(conn: &mut SqliteConnection, name: &str) -> Result<i64, PersistenceError> {
    diesel::insert_into(clubs::table)
        .values(NewClubRow { name })
        .execute(conn)?;
    get_last_insert_rowid(conn)
}

/// Insert a court and return its assigned ID.
///
/// # Errors
///
/// Returns an error if the insert fails (including a foreign key failure
/// when the club does not exist).
pub fn insert_court(
    conn: &mut SqliteConnection,
    club_id: i64,
    name: &str,
    maintenance: bool,
    timezone: Option<&str>,
) -> Result<i64, PersistenceError> {
    diesel::insert_into(courts::table)
        .values(NewCourtRow {
            club_id,
            name,
            maintenance: i32::from(maintenance),
            timezone,
        })
        .execute(conn)?;
    get_last_insert_rowid(conn)
}

/// Toggle the maintenance flag on a court.
///
/// # Errors
///
/// Returns `PersistenceError::CourtNotFound` if no row was updated.
pub fn set_court_maintenance(
    conn: &mut SqliteConnection,
    court_id: i64,
    maintenance: bool,
) -> Result<(), PersistenceError> {
    let updated = diesel::update(courts::table.filter(courts::court_id.eq(court_id)))
        .set(courts::maintenance.eq(i32::from(maintenance)))
        .execute(conn)?;
    if updated == 0 {
        return Err(PersistenceError::CourtNotFound(court_id));
    }
    Ok(())
}

/// Insert an activity and return its assigned ID.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn insert_activity(
    conn: &mut SqliteConnection,
    name: &str,
    duration_minutes: i32,
) -> Result<i64, PersistenceError> {
    diesel::insert_into(activities::table)
        .values(NewActivityRow {
            name,
            duration_minutes,
        })
        .execute(conn)?;
    get_last_insert_rowid(conn)
}
