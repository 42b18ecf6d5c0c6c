// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::{Activity, Holder, PaymentStatus, ReservationStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One occupied interval on one court.
///
/// The end instant is always `starts_at + activity duration` and is never
/// independently settable: the only constructor computes it. Reservations
/// are never physically deleted; cancellation is a status transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    /// Canonical numeric identifier assigned by the database.
    /// `None` indicates the reservation has not been persisted yet.
    pub reservation_id: Option<i64>,
    /// The court this reservation occupies.
    pub court_id: i64,
    /// The booked activity (implies the duration).
    pub activity_id: i64,
    /// Absolute start instant (UTC).
    pub starts_at: DateTime<Utc>,
    /// Absolute end instant (UTC). Always `starts_at + duration`.
    ends_at: DateTime<Utc>,
    /// Booking price in integer cents.
    pub price_cents: i64,
    /// Accumulated incidental charges in integer cents.
    pub extras_cents: i64,
    /// Lifecycle status.
    pub status: ReservationStatus,
    /// Cached payment status; a cache of `derive_payment_status`, only
    /// meaningful while the reservation is not cancelled.
    pub payment_status: PaymentStatus,
    /// The registered member or guest holding this reservation.
    pub holder: Holder,
    /// Back-reference to the fixed series that generated this
    /// reservation, if any. Children are found by indexed lookup on this
    /// field; a series never owns a collection of its occurrences.
    pub series_id: Option<i64>,
    /// Creation instant (UTC).
    pub created_at: DateTime<Utc>,
    /// The actor that cancelled this reservation, if cancelled.
    pub cancelled_by: Option<String>,
    /// Cancellation instant, if cancelled.
    pub cancelled_at: Option<DateTime<Utc>>,
}

impl Reservation {
    /// Creates a new unpersisted reservation.
    ///
    /// # Arguments
    ///
    /// * `court_id` - The court to occupy
    /// * `activity` - The booked activity; its duration fixes `ends_at`
    /// * `starts_at` - Absolute start instant
    /// * `price_cents` - Booking price in cents
    /// * `status` - Initial lifecycle status
    /// * `holder` - The member or guest holding the reservation
    /// * `created_at` - Creation instant
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidAmount` if the price is negative.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        court_id: i64,
        activity: &Activity,
        starts_at: DateTime<Utc>,
        price_cents: i64,
        status: ReservationStatus,
        holder: Holder,
        created_at: DateTime<Utc>,
    ) -> Result<Self, DomainError> {
        if price_cents < 0 {
            return Err(DomainError::InvalidAmount(price_cents));
        }
        let activity_id = activity.activity_id.unwrap_or_default();
        Ok(Self {
            reservation_id: None,
            court_id,
            activity_id,
            starts_at,
            ends_at: starts_at + activity.duration(),
            price_cents,
            extras_cents: 0,
            status,
            payment_status: PaymentStatus::Debt,
            holder,
            series_id: None,
            created_at,
            cancelled_by: None,
            cancelled_at: None,
        })
    }

    /// Rehydrates a reservation from persisted fields.
    ///
    /// Used only by the persistence layer, which stored `ends_at` as
    /// computed at creation time.
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub const fn from_stored(
        reservation_id: i64,
        court_id: i64,
        activity_id: i64,
        starts_at: DateTime<Utc>,
        ends_at: DateTime<Utc>,
        price_cents: i64,
        extras_cents: i64,
        status: ReservationStatus,
        payment_status: PaymentStatus,
        holder: Holder,
        series_id: Option<i64>,
        created_at: DateTime<Utc>,
        cancelled_by: Option<String>,
        cancelled_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            reservation_id: Some(reservation_id),
            court_id,
            activity_id,
            starts_at,
            ends_at,
            price_cents,
            extras_cents,
            status,
            payment_status,
            holder,
            series_id,
            created_at,
            cancelled_by,
            cancelled_at,
        }
    }

    /// Returns the absolute end instant.
    #[must_use]
    pub const fn ends_at(&self) -> DateTime<Utc> {
        self.ends_at
    }

    /// Returns whether this reservation occupies its interval.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.status.is_active()
    }

    /// Returns the effective total owed: price plus incidental charges.
    #[must_use]
    pub const fn total_cents(&self) -> i64 {
        self.price_cents + self.extras_cents
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn padel() -> Activity {
        Activity::with_id(7, String::from("Padel"), 90).unwrap()
    }

    #[test]
    fn test_end_is_start_plus_duration() {
        let start = Utc.with_ymd_and_hms(2026, 3, 2, 8, 0, 0).unwrap();
        let reservation = Reservation::new(
            1,
            &padel(),
            start,
            1500,
            ReservationStatus::Pending,
            Holder::Member(42),
            start,
        )
        .unwrap();
        assert_eq!(reservation.ends_at() - reservation.starts_at, chrono::Duration::minutes(90));
    }

    #[test]
    fn test_negative_price_rejected() {
        let start = Utc.with_ymd_and_hms(2026, 3, 2, 8, 0, 0).unwrap();
        let result = Reservation::new(
            1,
            &padel(),
            start,
            -100,
            ReservationStatus::Pending,
            Holder::Member(42),
            start,
        );
        assert_eq!(result.unwrap_err(), DomainError::InvalidAmount(-100));
    }

    #[test]
    fn test_total_includes_extras() {
        let start = Utc.with_ymd_and_hms(2026, 3, 2, 8, 0, 0).unwrap();
        let mut reservation = Reservation::new(
            1,
            &padel(),
            start,
            10_000,
            ReservationStatus::Confirmed,
            Holder::Member(42),
            start,
        )
        .unwrap();
        reservation.extras_cents = 2_000;
        assert_eq!(reservation.total_cents(), 12_000);
    }
}
