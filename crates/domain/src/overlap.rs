// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Interval overlap predicates.
//!
//! This module is the single source of truth for conflict detection.
//! Every overlap check in the system — ad-hoc bookings, availability,
//! recurring series — routes through these two functions. Duplicating
//! the comparison anywhere else is a design violation.

use chrono::{DateTime, NaiveTime, Utc};

/// Returns whether two half-open instant intervals `[start, end)` overlap.
///
/// Zero-length intervals never overlap anything, including themselves.
#[must_use]
pub fn overlaps(
    start_a: DateTime<Utc>,
    end_a: DateTime<Utc>,
    start_b: DateTime<Utc>,
    end_b: DateTime<Utc>,
) -> bool {
    start_a < end_a && start_b < end_b && start_a < end_b && end_a > start_b
}

/// Returns whether two half-open local time-of-day intervals overlap.
///
/// Used for fixed-series conflict checks, which compare wall-clock
/// ranges on a shared weekday rather than absolute instants.
#[must_use]
pub fn local_overlaps(
    start_a: NaiveTime,
    end_a: NaiveTime,
    start_b: NaiveTime,
    end_b: NaiveTime,
) -> bool {
    start_a < end_a && start_b < end_b && start_a < end_b && end_a > start_b
}
