// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Reservation insert and update operations.

use chrono::{DateTime, Utc};
use diesel::prelude::*;

use courtside_domain::{PaymentStatus, Reservation, ReservationStatus, format_instant};

use crate::data_models::NewReservationRow;
use crate::diesel_schema::reservations;
use crate::error::PersistenceError;
use crate::sqlite::get_last_insert_rowid;

/// Insert a reservation and return its assigned ID.
///
/// The caller must have already re-checked the overlap invariant inside
/// the same transaction.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn insert_reservation(
    conn: &mut SqliteConnection,
    reservation: &Reservation,
) -> Result<i64, PersistenceError> {
    diesel::insert_into(reservations::table)
        .values(NewReservationRow::from_domain(reservation))
        .execute(conn)?;
    get_last_insert_rowid(conn)
}

/// Update the lifecycle status of a reservation.
///
/// # Errors
///
/// Returns `PersistenceError::ReservationNotFound` if no row was updated.
pub fn update_status(
    conn: &mut SqliteConnection,
    reservation_id: i64,
    status: ReservationStatus,
) -> Result<(), PersistenceError> {
    let updated = diesel::update(
        reservations::table.filter(reservations::reservation_id.eq(reservation_id)),
    )
    .set(reservations::status.eq(status.as_str()))
    .execute(conn)?;
    if updated == 0 {
        return Err(PersistenceError::ReservationNotFound(reservation_id));
    }
    Ok(())
}

/// Mark a reservation cancelled and record who cancelled it and when.
///
/// # Errors
///
/// Returns `PersistenceError::ReservationNotFound` if no row was updated.
pub fn mark_cancelled(
    conn: &mut SqliteConnection,
    reservation_id: i64,
    cancelled_by: &str,
    cancelled_at: DateTime<Utc>,
) -> Result<(), PersistenceError> {
    let updated = diesel::update(
        reservations::table.filter(reservations::reservation_id.eq(reservation_id)),
    )
    .set((
        reservations::status.eq(ReservationStatus::Cancelled.as_str()),
        reservations::cancelled_by.eq(cancelled_by),
        reservations::cancelled_at.eq(format_instant(cancelled_at)),
    ))
    .execute(conn)?;
    if updated == 0 {
        return Err(PersistenceError::ReservationNotFound(reservation_id));
    }
    Ok(())
}

/// Overwrite the cached payment status of a reservation.
///
/// Always called with the value freshly derived from the ledger inside
/// the same transaction as the mutation that invalidated it.
///
/// # Errors
///
/// Returns `PersistenceError::ReservationNotFound` if no row was updated.
pub fn update_payment_status(
    conn: &mut SqliteConnection,
    reservation_id: i64,
    payment_status: PaymentStatus,
) -> Result<(), PersistenceError> {
    let updated = diesel::update(
        reservations::table.filter(reservations::reservation_id.eq(reservation_id)),
    )
    .set(reservations::payment_status.eq(payment_status.as_str()))
    .execute(conn)?;
    if updated == 0 {
        return Err(PersistenceError::ReservationNotFound(reservation_id));
    }
    Ok(())
}

/// Add an incidental charge to a reservation's accumulated extras.
///
/// # Errors
///
/// Returns `PersistenceError::ReservationNotFound` if no row was updated.
pub fn add_extras(
    conn: &mut SqliteConnection,
    reservation_id: i64,
    amount_cents: i64,
) -> Result<(), PersistenceError> {
    let updated = diesel::update(
        reservations::table.filter(reservations::reservation_id.eq(reservation_id)),
    )
    .set(reservations::extras_cents.eq(reservations::extras_cents + amount_cents))
    .execute(conn)?;
    if updated == 0 {
        return Err(PersistenceError::ReservationNotFound(reservation_id));
    }
    Ok(())
}
