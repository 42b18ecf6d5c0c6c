// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Reservation query operations.
//!
//! Interval filters compare the stored RFC 3339 `Z` strings directly.
//! The stored format is fixed-width UTC, so lexicographic order equals
//! chronological order and overlap checks reduce to string comparisons
//! that SQLite can serve from the `(court_id, starts_at, ends_at)` index.

use chrono::{DateTime, Utc};
use diesel::prelude::*;

use courtside_domain::{Reservation, format_instant};

use crate::data_models::ReservationRow;
use crate::diesel_schema::reservations;
use crate::error::PersistenceError;

const ACTIVE_STATUSES: [&str; 2] = ["Pending", "Confirmed"];

/// Fetch a reservation by ID.
///
/// # Errors
///
/// Returns `PersistenceError::ReservationNotFound` if no such reservation
/// exists, or `CorruptRow` if a stored field does not parse.
pub fn get_reservation(
    conn: &mut SqliteConnection,
    reservation_id: i64,
) -> Result<Reservation, PersistenceError> {
    reservations::table
        .filter(reservations::reservation_id.eq(reservation_id))
        .select(ReservationRow::as_select())
        .first(conn)
        .optional()?
        .ok_or(PersistenceError::ReservationNotFound(reservation_id))?
        .try_into()
}

/// Fetch active (Pending or Confirmed) reservations on one court whose
/// interval intersects `[range_start, range_end)`.
///
/// # Errors
///
/// Returns an error if the query fails or a stored row is invalid.
pub fn active_in_range(
    conn: &mut SqliteConnection,
    court_id: i64,
    range_start: DateTime<Utc>,
    range_end: DateTime<Utc>,
) -> Result<Vec<Reservation>, PersistenceError> {
    let start = format_instant(range_start);
    let end = format_instant(range_end);
    let rows = reservations::table
        .filter(reservations::court_id.eq(court_id))
        .filter(reservations::status.eq_any(ACTIVE_STATUSES))
        .filter(reservations::starts_at.lt(end))
        .filter(reservations::ends_at.gt(start))
        .order(reservations::starts_at.asc())
        .select(ReservationRow::as_select())
        .load::<ReservationRow>(conn)?;
    rows.into_iter().map(Reservation::try_from).collect()
}

/// Fetch active reservations across a set of courts whose interval
/// intersects `[range_start, range_end)`.
///
/// # Errors
///
/// Returns an error if the query fails or a stored row is invalid.
pub fn active_in_range_for_courts(
    conn: &mut SqliteConnection,
    court_ids: &[i64],
    range_start: DateTime<Utc>,
    range_end: DateTime<Utc>,
) -> Result<Vec<Reservation>, PersistenceError> {
    let start = format_instant(range_start);
    let end = format_instant(range_end);
    let rows = reservations::table
        .filter(reservations::court_id.eq_any(court_ids.iter().copied()))
        .filter(reservations::status.eq_any(ACTIVE_STATUSES))
        .filter(reservations::starts_at.lt(end))
        .filter(reservations::ends_at.gt(start))
        .order(reservations::starts_at.asc())
        .select(ReservationRow::as_select())
        .load::<ReservationRow>(conn)?;
    rows.into_iter().map(Reservation::try_from).collect()
}

/// Fetch the occurrences generated by a fixed series, ordered by start.
///
/// # Errors
///
/// Returns an error if the query fails or a stored row is invalid.
pub fn for_series(
    conn: &mut SqliteConnection,
    series_id: i64,
) -> Result<Vec<Reservation>, PersistenceError> {
    let rows = reservations::table
        .filter(reservations::series_id.eq(series_id))
        .order(reservations::starts_at.asc())
        .select(ReservationRow::as_select())
        .load::<ReservationRow>(conn)?;
    rows.into_iter().map(Reservation::try_from).collect()
}

/// Fetch active reservations whose interval has fully elapsed at `now`.
///
/// These are the candidates the completion sweep flips to Completed.
///
/// # Errors
///
/// Returns an error if the query fails or a stored row is invalid.
pub fn active_ended_by(
    conn: &mut SqliteConnection,
    now: DateTime<Utc>,
) -> Result<Vec<Reservation>, PersistenceError> {
    let cutoff = format_instant(now);
    let rows = reservations::table
        .filter(reservations::status.eq_any(ACTIVE_STATUSES))
        .filter(reservations::ends_at.le(cutoff))
        .order(reservations::ends_at.asc())
        .select(ReservationRow::as_select())
        .load::<ReservationRow>(conn)?;
    rows.into_iter().map(Reservation::try_from).collect()
}
