// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Ledger insert operations.
//!
//! The ledger is append-only; there are no update or delete operations.

use diesel::prelude::*;

use courtside_domain::LedgerMovement;

use crate::data_models::NewMovementRow;
use crate::diesel_schema::ledger_movements;
use crate::error::PersistenceError;
use crate::sqlite::get_last_insert_rowid;

/// Insert a ledger movement and return its assigned ID.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn insert_movement(
    conn: &mut SqliteConnection,
    movement: &LedgerMovement,
) -> Result<i64, PersistenceError> {
    diesel::insert_into(ledger_movements::table)
        .values(NewMovementRow::from_domain(movement))
        .execute(conn)?;
    get_last_insert_rowid(conn)
}
