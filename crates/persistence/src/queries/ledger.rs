// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Ledger query operations.

use chrono::{DateTime, Utc};
use diesel::prelude::*;

use courtside_domain::{LedgerMovement, MovementDirection, format_instant};

use crate::data_models::MovementRow;
use crate::diesel_schema::ledger_movements;
use crate::error::PersistenceError;

/// Fetch all movements tied to one reservation, ordered chronologically.
///
/// # Errors
///
/// Returns an error if the query fails or a stored row is invalid.
pub fn for_reservation(
    conn: &mut SqliteConnection,
    reservation_id: i64,
) -> Result<Vec<LedgerMovement>, PersistenceError> {
    let rows = ledger_movements::table
        .filter(ledger_movements::reservation_id.eq(reservation_id))
        .order(ledger_movements::occurred_at.asc())
        .select(MovementRow::as_select())
        .load::<MovementRow>(conn)?;
    rows.into_iter().map(LedgerMovement::try_from).collect()
}

/// Fetch all movements that occurred in `[range_start, range_end)`,
/// ordered chronologically.
///
/// # Errors
///
/// Returns an error if the query fails or a stored row is invalid.
pub fn in_range(
    conn: &mut SqliteConnection,
    range_start: DateTime<Utc>,
    range_end: DateTime<Utc>,
) -> Result<Vec<LedgerMovement>, PersistenceError> {
    let start = format_instant(range_start);
    let end = format_instant(range_end);
    let rows = ledger_movements::table
        .filter(ledger_movements::occurred_at.ge(start))
        .filter(ledger_movements::occurred_at.lt(end))
        .order(ledger_movements::occurred_at.asc())
        .select(MovementRow::as_select())
        .load::<MovementRow>(conn)?;
    rows.into_iter().map(LedgerMovement::try_from).collect()
}

/// Sum the money collected against one reservation.
///
/// Incomes count positively and expenses (refunds) negatively, so the
/// result feeds `derive_payment_status` directly. Netting refunds is a
/// deliberate widening of the income-only sum: expense rows exist only
/// for cancelled reservations, and there a payment status that still
/// claimed Paid after the money went back out would be wrong.
///
/// # Errors
///
/// Returns an error if the query fails or a stored row is invalid.
pub fn collected_cents(
    conn: &mut SqliteConnection,
    reservation_id: i64,
) -> Result<i64, PersistenceError> {
    let rows = ledger_movements::table
        .filter(ledger_movements::reservation_id.eq(reservation_id))
        .select((ledger_movements::direction, ledger_movements::amount_cents))
        .load::<(String, i64)>(conn)?;
    let mut total = 0i64;
    for (direction, amount) in rows {
        let direction: MovementDirection = direction
            .parse()
            .map_err(|err| PersistenceError::CorruptRow {
                table: "ledger_movements",
                detail: format!("{err}"),
            })?;
        total += match direction {
            MovementDirection::Income => amount,
            MovementDirection::Expense => -amount,
        };
    }
    Ok(total)
}
