// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Derives free slots for a day from the catalog and a reservation
//! snapshot. Pure functions of their inputs: deterministic, finite,
//! side-effect free.

use crate::error::CoreError;
use chrono::NaiveDate;
use chrono_tz::Tz;
use courtside_domain::{
    Activity, Court, Reservation, SlotCatalog, SlotTime, local_slot_to_instant, overlaps,
};

/// Computes the catalog slots free on one court for a date and activity.
///
/// For each catalog slot the instant interval is derived from the slot
/// start and the activity duration; slots overlapping any active
/// reservation in the snapshot are dropped. Output preserves catalog
/// order.
///
/// # Errors
///
/// Returns `CoreError::DomainViolation` if a slot cannot be resolved in
/// `tz` (DST-skipped local times).
pub fn available_slots(
    court_id: i64,
    date: NaiveDate,
    activity: &Activity,
    catalog: &SlotCatalog,
    reservations: &[Reservation],
    tz: Tz,
) -> Result<Vec<SlotTime>, CoreError> {
    let mut free = Vec::with_capacity(catalog.len());
    for slot in catalog {
        let starts_at = local_slot_to_instant(date, *slot, tz)?;
        let ends_at = starts_at + activity.duration();
        let taken = reservations.iter().any(|reservation| {
            reservation.court_id == court_id
                && reservation.is_active()
                && overlaps(starts_at, ends_at, reservation.starts_at, reservation.ends_at())
        });
        if !taken {
            free.push(*slot);
        }
    }
    Ok(free)
}

/// Computes, per catalog slot, the set of courts available for a date and
/// activity.
///
/// Courts under maintenance are filtered out before the overlap pass.
/// Slots with no available court are dropped entirely.
///
/// # Errors
///
/// Returns `CoreError::DomainViolation` if a slot cannot be resolved in
/// `tz`.
pub fn available_slots_across_courts(
    courts: &[Court],
    date: NaiveDate,
    activity: &Activity,
    catalog: &SlotCatalog,
    reservations: &[Reservation],
    tz: Tz,
) -> Result<Vec<(SlotTime, Vec<i64>)>, CoreError> {
    let bookable: Vec<i64> = courts
        .iter()
        .filter(|court| !court.maintenance)
        .filter_map(|court| court.court_id)
        .collect();

    let mut result = Vec::with_capacity(catalog.len());
    for slot in catalog {
        let starts_at = local_slot_to_instant(date, *slot, tz)?;
        let ends_at = starts_at + activity.duration();
        let free_courts: Vec<i64> = bookable
            .iter()
            .copied()
            .filter(|&court_id| {
                !reservations.iter().any(|reservation| {
                    reservation.court_id == court_id
                        && reservation.is_active()
                        && overlaps(
                            starts_at,
                            ends_at,
                            reservation.starts_at,
                            reservation.ends_at(),
                        )
                })
            })
            .collect();
        if !free_courts.is_empty() {
            result.push((*slot, free_courts));
        }
    }
    Ok(result)
}
