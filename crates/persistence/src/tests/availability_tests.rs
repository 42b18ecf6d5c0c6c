// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Availability computation over stored reservations.

use chrono::NaiveDate;
use courtside_domain::{Holder, SlotCatalog, SlotTime};

use super::{at, fixture, member, policy};
use crate::PersistenceError;

const TZ: &str = "UTC";

fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 2).unwrap()
}

#[test]
fn test_empty_day_offers_full_catalog() {
    let mut f = fixture();
    let catalog = SlotCatalog::standard();

    let free = f
        .store
        .day_availability(f.court_id, day(), f.activity_id, &catalog, TZ)
        .unwrap();

    assert_eq!(free.len(), catalog.len());
}

#[test]
fn test_booked_slot_disappears() {
    let mut f = fixture();
    let catalog = SlotCatalog::standard();
    f.store
        .create_reservation(
            member(),
            f.court_id,
            f.activity_id,
            at(2026, 3, 2, 8, 0),
            at(2026, 3, 1, 12, 0),
            false,
            None,
            &policy(),
        )
        .unwrap();

    let free = f
        .store
        .day_availability(f.court_id, day(), f.activity_id, &catalog, TZ)
        .unwrap();

    assert_eq!(free.len(), catalog.len() - 1);
    assert!(!free.contains(&SlotTime::new(8, 0).unwrap()));
    assert!(free.contains(&SlotTime::new(9, 30).unwrap()));
}

#[test]
fn test_next_day_reservation_blocks_late_slot_running_past_midnight() {
    let mut f = fixture();
    let catalog = SlotCatalog::standard();
    // A four-hour activity: the 21:30 slot would run until 01:30 the
    // next local day.
    let marathon = f.store.create_activity("Marathon", 240).unwrap();

    // The court is taken from midnight on March 3rd.
    f.store
        .create_reservation(
            member(),
            f.court_id,
            marathon,
            at(2026, 3, 3, 0, 0),
            at(2026, 3, 1, 12, 0),
            false,
            None,
            &policy(),
        )
        .unwrap();

    let free = f
        .store
        .day_availability(f.court_id, day(), marathon, &catalog, TZ)
        .unwrap();

    assert!(!free.contains(&SlotTime::new(21, 30).unwrap()));
    assert_eq!(free.len(), catalog.len() - 1);
}

#[test]
fn test_maintenance_court_has_no_availability() {
    let mut f = fixture();
    f.store.set_court_maintenance(f.court_id, true).unwrap();

    let free = f
        .store
        .day_availability(f.court_id, day(), f.activity_id, &SlotCatalog::standard(), TZ)
        .unwrap();
    assert!(free.is_empty());
}

#[test]
fn test_unknown_court_reported() {
    let mut f = fixture();
    let result =
        f.store
            .day_availability(999, day(), f.activity_id, &SlotCatalog::standard(), TZ);
    assert_eq!(result.unwrap_err(), PersistenceError::CourtNotFound(999));
}

#[test]
fn test_club_availability_lists_free_courts_per_slot() {
    let mut f = fixture();
    let court_two = f.store.create_court(f.club_id, "Court 2", None).unwrap();
    let catalog = SlotCatalog::standard();

    // Court 1 taken at 08:00; both courts taken at 09:30.
    f.store
        .create_reservation(
            member(),
            f.court_id,
            f.activity_id,
            at(2026, 3, 2, 8, 0),
            at(2026, 3, 1, 12, 0),
            false,
            None,
            &policy(),
        )
        .unwrap();
    f.store
        .create_reservation(
            Holder::Member(7),
            f.court_id,
            f.activity_id,
            at(2026, 3, 2, 9, 30),
            at(2026, 3, 1, 12, 0),
            false,
            None,
            &policy(),
        )
        .unwrap();
    f.store
        .create_reservation(
            Holder::Member(8),
            court_two,
            f.activity_id,
            at(2026, 3, 2, 9, 30),
            at(2026, 3, 1, 12, 0),
            false,
            None,
            &policy(),
        )
        .unwrap();

    let free = f
        .store
        .club_availability(f.club_id, day(), f.activity_id, &catalog, TZ)
        .unwrap();

    // 09:30 has no free court and is dropped entirely.
    assert!(!free.iter().any(|(slot, _)| *slot == SlotTime::new(9, 30).unwrap()));

    let (_, courts_at_eight) = free
        .iter()
        .find(|(slot, _)| *slot == SlotTime::new(8, 0).unwrap())
        .unwrap();
    assert_eq!(courts_at_eight, &vec![court_two]);

    let (_, courts_at_eleven) = free
        .iter()
        .find(|(slot, _)| *slot == SlotTime::new(11, 0).unwrap())
        .unwrap();
    assert_eq!(courts_at_eleven.len(), 2);
}

#[test]
fn test_club_availability_excludes_maintenance_courts() {
    let mut f = fixture();
    let court_two = f.store.create_court(f.club_id, "Court 2", None).unwrap();
    f.store.set_court_maintenance(court_two, true).unwrap();

    let free = f
        .store
        .club_availability(f.club_id, day(), f.activity_id, &SlotCatalog::standard(), TZ)
        .unwrap();

    for (_, courts) in &free {
        assert_eq!(courts, &vec![f.court_id]);
    }
}
