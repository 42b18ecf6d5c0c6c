// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Fixed series query operations.

use diesel::prelude::*;

use courtside_domain::FixedSeries;

use crate::data_models::SeriesRow;
use crate::diesel_schema::fixed_series;
use crate::error::PersistenceError;

/// Fetch a fixed series by ID.
///
/// # Errors
///
/// Returns `PersistenceError::SeriesNotFound` if no such series exists,
/// or `CorruptRow` if a stored field does not parse.
pub fn get_series(
    conn: &mut SqliteConnection,
    series_id: i64,
) -> Result<FixedSeries, PersistenceError> {
    fixed_series::table
        .filter(fixed_series::series_id.eq(series_id))
        .select(SeriesRow::as_select())
        .first(conn)
        .optional()?
        .ok_or(PersistenceError::SeriesNotFound(series_id))?
        .try_into()
}

/// Fetch all Active series on one court.
///
/// Used to validate a candidate series against the standing weekly
/// claims before it is accepted.
///
/// # Errors
///
/// Returns an error if the query fails or a stored row is invalid.
pub fn active_for_court(
    conn: &mut SqliteConnection,
    court_id: i64,
) -> Result<Vec<FixedSeries>, PersistenceError> {
    let rows = fixed_series::table
        .filter(fixed_series::court_id.eq(court_id))
        .filter(fixed_series::status.eq("Active"))
        .select(SeriesRow::as_select())
        .load::<SeriesRow>(conn)?;
    rows.into_iter().map(FixedSeries::try_from).collect()
}
