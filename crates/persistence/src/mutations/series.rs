// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Fixed series insert and update operations.

use diesel::prelude::*;

use courtside_domain::{FixedSeries, SeriesStatus};

use crate::data_models::NewSeriesRow;
use crate::diesel_schema::fixed_series;
use crate::error::PersistenceError;
use crate::sqlite::get_last_insert_rowid;

/// Insert a fixed series and return its assigned ID.
///
/// The caller must have already validated the candidate against the
/// standing series on the same court inside the same transaction.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn insert_series(
    conn: &mut SqliteConnection,
    series: &FixedSeries,
) -> Result<i64, PersistenceError> {
    diesel::insert_into(fixed_series::table)
        .values(NewSeriesRow::from_domain(series))
        .execute(conn)?;
    get_last_insert_rowid(conn)
}

/// Update the status of a fixed series.
///
/// # Errors
///
/// Returns `PersistenceError::SeriesNotFound` if no row was updated.
pub fn update_series_status(
    conn: &mut SqliteConnection,
    series_id: i64,
    status: SeriesStatus,
) -> Result<(), PersistenceError> {
    let updated =
        diesel::update(fixed_series::table.filter(fixed_series::series_id.eq(series_id)))
            .set(fixed_series::status.eq(status.as_str()))
            .execute(conn)?;
    if updated == 0 {
        return Err(PersistenceError::SeriesNotFound(series_id));
    }
    Ok(())
}
