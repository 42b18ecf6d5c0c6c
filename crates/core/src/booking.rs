// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Booking planning: the pure half of the booking transaction.
//!
//! `plan_reservation` validates a request and produces a draft; the
//! persistence layer re-runs `check_slot_free` against fresh state inside
//! its transaction before inserting. Confirmation and cancellation are
//! planned the same way: a status transition plus an optional ledger
//! movement draft the store commits alongside the flip.

use crate::error::CoreError;
use chrono::{DateTime, Duration, Utc};
use courtside_domain::{
    Activity, Holder, LedgerMovement, MovementDirection, PaymentMethod, Reservation,
    ReservationStatus, overlaps, validate_guest,
};

/// Deployment-level booking policy.
///
/// Prices are a configured input, not a derived rule; whether price should
/// vary by activity or duration is an open product question, so the policy
/// carries a single flat default the boundary layer may override per call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookingPolicy {
    /// How far ahead non-privileged callers may book, in days.
    pub max_advance_days: u32,
    /// Flat default price per booking, in cents.
    pub default_price_cents: i64,
}

impl Default for BookingPolicy {
    fn default() -> Self {
        Self {
            max_advance_days: 31,
            default_price_cents: 0,
        }
    }
}

/// Validates a booking request and produces a `Pending` reservation draft.
///
/// # Arguments
///
/// * `holder` - The member or guest booking the slot
/// * `court_id` - The court to book
/// * `activity` - The activity; fixes the interval length
/// * `starts_at` - Requested absolute start
/// * `now` - The caller's reference instant
/// * `privileged` - Unlocks the extended window and the
///   guest-without-contact override
/// * `price_cents` - The price for this booking
/// * `policy` - Deployment booking policy
///
/// # Errors
///
/// * `CoreError::BookingInPast` if `starts_at < now`, regardless of
///   privilege
/// * `CoreError::BookingTooFarAhead` if a non-privileged caller books
///   beyond the advance window
/// * `CoreError::DomainViolation` for guest descriptor or amount problems
#[allow(clippy::too_many_arguments)]
pub fn plan_reservation(
    holder: Holder,
    court_id: i64,
    activity: &Activity,
    starts_at: DateTime<Utc>,
    now: DateTime<Utc>,
    privileged: bool,
    price_cents: i64,
    policy: &BookingPolicy,
) -> Result<Reservation, CoreError> {
    if starts_at < now {
        return Err(CoreError::BookingInPast { starts_at, now });
    }
    if !privileged && starts_at > now + Duration::days(i64::from(policy.max_advance_days)) {
        return Err(CoreError::BookingTooFarAhead {
            max_advance_days: policy.max_advance_days,
        });
    }
    validate_guest(&holder, privileged)?;

    let reservation = Reservation::new(
        court_id,
        activity,
        starts_at,
        price_cents,
        ReservationStatus::Pending,
        holder,
        now,
    )?;
    Ok(reservation)
}

/// Checks a candidate interval against a snapshot of reservations.
///
/// Only active (pending or confirmed) reservations conflict. The
/// persistence layer re-runs this inside the booking transaction so the
/// check always sees fresh state at commit.
///
/// # Errors
///
/// Returns `CoreError::SlotConflict` carrying the first conflicting
/// interval.
pub fn check_slot_free(
    existing: &[Reservation],
    court_id: i64,
    starts_at: DateTime<Utc>,
    ends_at: DateTime<Utc>,
) -> Result<(), CoreError> {
    for reservation in existing {
        if reservation.court_id == court_id
            && reservation.is_active()
            && overlaps(starts_at, ends_at, reservation.starts_at, reservation.ends_at())
        {
            return Err(CoreError::SlotConflict {
                court_id,
                conflicting_start: reservation.starts_at,
                conflicting_end: reservation.ends_at(),
            });
        }
    }
    Ok(())
}

/// The planned outcome of confirming a reservation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmationPlan {
    /// The income movement to append, unless payment is deferred.
    pub movement: Option<LedgerMovement>,
}

/// Plans confirmation of a reservation.
///
/// Unless the payment method defers collection, an income movement equal
/// to the reservation price is drafted for the same transaction as the
/// status flip.
///
/// # Errors
///
/// Returns `CoreError::InvalidTransition` if the reservation cannot move
/// to `Confirmed` from its current status.
pub fn plan_confirmation(
    reservation: &Reservation,
    method: PaymentMethod,
    now: DateTime<Utc>,
) -> Result<ConfirmationPlan, CoreError> {
    require_transition(reservation.status, ReservationStatus::Confirmed)?;

    let movement = if method.is_deferred() {
        None
    } else {
        Some(
            LedgerMovement::new(
                now,
                MovementDirection::Income,
                reservation.price_cents,
                method,
                format!(
                    "Booking payment for reservation {}",
                    reservation.reservation_id.unwrap_or_default()
                ),
                reservation.reservation_id,
            )
            .map_err(CoreError::DomainViolation)?,
        )
    };
    Ok(ConfirmationPlan { movement })
}

/// The planned outcome of cancelling a reservation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CancellationPlan {
    /// The offsetting expense movement to append, when the reservation
    /// was confirmed (a refund obligation). Best-effort on commit.
    pub refund: Option<LedgerMovement>,
}

/// Plans cancellation of a reservation.
///
/// A confirmed reservation drafts an offsetting expense movement equal to
/// its price; the store treats that append as best-effort (logged, never
/// fatal). Cancellation is a status transition, not a deletion.
///
/// # Errors
///
/// Returns `CoreError::InvalidTransition` if the reservation cannot move
/// to `Cancelled` from its current status.
pub fn plan_cancellation(
    reservation: &Reservation,
    now: DateTime<Utc>,
) -> Result<CancellationPlan, CoreError> {
    require_transition(reservation.status, ReservationStatus::Cancelled)?;

    let refund = if reservation.status == ReservationStatus::Confirmed {
        Some(
            LedgerMovement::new(
                now,
                MovementDirection::Expense,
                reservation.price_cents,
                PaymentMethod::Cash,
                format!(
                    "Refund for cancelled reservation {}",
                    reservation.reservation_id.unwrap_or_default()
                ),
                reservation.reservation_id,
            )
            .map_err(CoreError::DomainViolation)?,
        )
    } else {
        None
    };
    Ok(CancellationPlan { refund })
}

fn require_transition(
    from: ReservationStatus,
    to: ReservationStatus,
) -> Result<(), CoreError> {
    if from.can_transition_to(to) {
        Ok(())
    } else {
        Err(CoreError::InvalidTransition {
            from: from.as_str().to_string(),
            to: to.as_str().to_string(),
        })
    }
}
