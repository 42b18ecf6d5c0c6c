// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Club, court, and activity lookup operations.

use diesel::prelude::*;

use courtside_domain::{Activity, Club, Court};

use crate::data_models::{ActivityRow, ClubRow, CourtRow};
use crate::diesel_schema::{activities, clubs, courts};
use crate::error::PersistenceError;

/// Fetch a club by ID.
///
/// # Errors
///
/// Returns `PersistenceError::ClubNotFound` if no such club exists.
pub fn get_club(conn: &mut SqliteConnection, club_id: i64) -> Result<Club, PersistenceError> {
    clubs::table
        .filter(clubs::club_id.eq(club_id))
        .select(ClubRow::as_select())
        .first(conn)
        .optional()?
        .map(Club::from)
        .ok_or(PersistenceError::ClubNotFound(club_id))
}

/// Fetch a court by ID.
///
/// # Errors
///
/// Returns `PersistenceError::CourtNotFound` if no such court exists.
pub fn get_court(conn: &mut SqliteConnection, court_id: i64) -> Result<Court, PersistenceError> {
    courts::table
        .filter(courts::court_id.eq(court_id))
        .select(CourtRow::as_select())
        .first(conn)
        .optional()?
        .map(Court::from)
        .ok_or(PersistenceError::CourtNotFound(court_id))
}

/// Fetch all courts belonging to a club, ordered by name.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn get_courts_for_club(
    conn: &mut SqliteConnection,
    club_id: i64,
) -> Result<Vec<Court>, PersistenceError> {
    let rows = courts::table
        .filter(courts::club_id.eq(club_id))
        .order(courts::name.asc())
        .select(CourtRow::as_select())
        .load::<CourtRow>(conn)?;
    Ok(rows.into_iter().map(Court::from).collect())
}

/// Fetch an activity by ID.
///
/// # Errors
///
/// Returns `PersistenceError::ActivityNotFound` if no such activity exists,
/// or `CorruptRow` if the stored duration is invalid.
pub fn get_activity(
    conn: &mut SqliteConnection,
    activity_id: i64,
) -> Result<Activity, PersistenceError> {
    activities::table
        .filter(activities::activity_id.eq(activity_id))
        .select(ActivityRow::as_select())
        .first(conn)
        .optional()?
        .ok_or(PersistenceError::ActivityNotFound(activity_id))?
        .try_into()
}

/// Fetch all activities, ordered by name.
///
/// # Errors
///
/// Returns an error if the query fails or a stored row is invalid.
pub fn list_activities(conn: &mut SqliteConnection) -> Result<Vec<Activity>, PersistenceError> {
    let rows = activities::table
        .order(activities::name.asc())
        .select(ActivityRow::as_select())
        .load::<ActivityRow>(conn)?;
    rows.into_iter().map(Activity::try_from).collect()
}
