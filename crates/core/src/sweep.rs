// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Completion sweep selection.
//!
//! The periodic sweep flips elapsed active reservations to `Completed`.
//! This module only selects; the flip is a pure status transition with no
//! ledger effect, so running the sweep twice over the same snapshot is a
//! no-op the second time.

use chrono::{DateTime, Utc};
use courtside_domain::Reservation;

/// Selects the reservations the completion sweep should flip.
///
/// A reservation is completable when it is active (pending or confirmed)
/// and its end instant has passed.
#[must_use]
pub fn completable(reservations: &[Reservation], now: DateTime<Utc>) -> Vec<i64> {
    reservations
        .iter()
        .filter(|reservation| reservation.is_active() && reservation.ends_at() <= now)
        .filter_map(|reservation| reservation.reservation_id)
        .collect()
}
