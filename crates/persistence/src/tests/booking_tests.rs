// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Atomic booking, confirmation, and cancellation tests.

use std::sync::{Arc, Mutex};
use std::thread;

use courtside_domain::{
    GuestDetails, Holder, MovementDirection, PaymentMethod, PaymentStatus, ReservationStatus,
};

use super::{at, fixture, member, policy};
use crate::PersistenceError;

#[test]
fn test_create_reservation_round_trip() {
    let mut f = fixture();
    let now = at(2026, 3, 1, 12, 0);
    let start = at(2026, 3, 2, 8, 0);

    let reservation = f
        .store
        .create_reservation(
            member(),
            f.court_id,
            f.activity_id,
            start,
            now,
            false,
            None,
            &policy(),
        )
        .unwrap();

    assert!(reservation.reservation_id.is_some());
    assert_eq!(reservation.status, ReservationStatus::Pending);
    assert_eq!(reservation.payment_status, PaymentStatus::Debt);
    assert_eq!(reservation.holder, Holder::Member(42));
    assert_eq!(reservation.starts_at, start);
    assert_eq!(reservation.ends_at() - start, chrono::Duration::minutes(90));
    assert_eq!(reservation.price_cents, 1500);

    let fetched = f
        .store
        .get_reservation(reservation.reservation_id.unwrap())
        .unwrap();
    assert_eq!(fetched, reservation);
}

#[test]
fn test_double_booking_rejected() {
    let mut f = fixture();
    let now = at(2026, 3, 1, 12, 0);
    let start = at(2026, 3, 2, 8, 0);

    f.store
        .create_reservation(
            member(),
            f.court_id,
            f.activity_id,
            start,
            now,
            false,
            None,
            &policy(),
        )
        .unwrap();

    // Second request overlaps the first by an hour.
    let result = f.store.create_reservation(
        Holder::Member(7),
        f.court_id,
        f.activity_id,
        at(2026, 3, 2, 8, 30),
        now,
        false,
        None,
        &policy(),
    );
    assert!(matches!(
        result,
        Err(PersistenceError::SlotTaken { court_id, .. }) if court_id == f.court_id
    ));
}

// The store is shared exactly as the server shares it; with the lock
// serializing the check-then-insert, two racing overlapping requests
// must resolve to one winner and one SlotTaken.
#[test]
fn test_concurrent_overlapping_bookings_have_one_winner() {
    let f = fixture();
    let court_id = f.court_id;
    let activity_id = f.activity_id;
    let store = Arc::new(Mutex::new(f.store));
    let now = at(2026, 3, 1, 12, 0);
    let start = at(2026, 3, 2, 8, 0);

    let mut handles = Vec::new();
    for holder_id in [42, 7] {
        let store = Arc::clone(&store);
        handles.push(thread::spawn(move || {
            store.lock().unwrap().create_reservation(
                Holder::Member(holder_id),
                court_id,
                activity_id,
                start,
                now,
                false,
                None,
                &policy(),
            )
        }));
    }

    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(results.iter().filter(|r| r.is_ok()).count(), 1);
    assert!(
        results
            .iter()
            .any(|r| matches!(r, Err(PersistenceError::SlotTaken { .. })))
    );
}

#[test]
fn test_back_to_back_reservations_allowed() {
    let mut f = fixture();
    let now = at(2026, 3, 1, 12, 0);

    f.store
        .create_reservation(
            member(),
            f.court_id,
            f.activity_id,
            at(2026, 3, 2, 8, 0),
            now,
            false,
            None,
            &policy(),
        )
        .unwrap();

    // Starts exactly when the first ends.
    let result = f.store.create_reservation(
        Holder::Member(7),
        f.court_id,
        f.activity_id,
        at(2026, 3, 2, 9, 30),
        now,
        false,
        None,
        &policy(),
    );
    assert!(result.is_ok());
}

#[test]
fn test_past_booking_rejected() {
    let mut f = fixture();
    let now = at(2026, 3, 1, 12, 0);

    let result = f.store.create_reservation(
        member(),
        f.court_id,
        f.activity_id,
        at(2026, 3, 1, 8, 0),
        now,
        false,
        None,
        &policy(),
    );
    assert!(matches!(result, Err(PersistenceError::RuleViolation(_))));
}

#[test]
fn test_advance_window_enforced_for_members_only() {
    let mut f = fixture();
    let now = at(2026, 3, 1, 12, 0);
    let far = at(2026, 5, 1, 8, 0);

    let member_result = f.store.create_reservation(
        member(),
        f.court_id,
        f.activity_id,
        far,
        now,
        false,
        None,
        &policy(),
    );
    assert!(matches!(member_result, Err(PersistenceError::RuleViolation(_))));

    let admin_result = f.store.create_reservation(
        member(),
        f.court_id,
        f.activity_id,
        far,
        now,
        true,
        None,
        &policy(),
    );
    assert!(admin_result.is_ok());
}

#[test]
fn test_guest_without_contact_requires_privilege() {
    let mut f = fixture();
    let now = at(2026, 3, 1, 12, 0);
    let guest = Holder::Guest(GuestDetails {
        name: String::from("Walk-in"),
        email: None,
        phone: None,
        document: None,
    });

    let result = f.store.create_reservation(
        guest.clone(),
        f.court_id,
        f.activity_id,
        at(2026, 3, 2, 8, 0),
        now,
        false,
        None,
        &policy(),
    );
    assert!(matches!(result, Err(PersistenceError::RuleViolation(_))));

    let privileged = f.store.create_reservation(
        guest,
        f.court_id,
        f.activity_id,
        at(2026, 3, 2, 8, 0),
        now,
        true,
        None,
        &policy(),
    );
    assert!(privileged.is_ok());
}

#[test]
fn test_maintenance_court_rejects_bookings() {
    let mut f = fixture();
    f.store.set_court_maintenance(f.court_id, true).unwrap();

    let result = f.store.create_reservation(
        member(),
        f.court_id,
        f.activity_id,
        at(2026, 3, 2, 8, 0),
        at(2026, 3, 1, 12, 0),
        false,
        None,
        &policy(),
    );
    assert!(matches!(result, Err(PersistenceError::RuleViolation(_))));
}

#[test]
fn test_unknown_court_and_activity() {
    let mut f = fixture();
    let now = at(2026, 3, 1, 12, 0);

    let no_court = f.store.create_reservation(
        member(),
        999,
        f.activity_id,
        at(2026, 3, 2, 8, 0),
        now,
        false,
        None,
        &policy(),
    );
    assert_eq!(no_court.unwrap_err(), PersistenceError::CourtNotFound(999));

    let no_activity = f.store.create_reservation(
        member(),
        f.court_id,
        999,
        at(2026, 3, 2, 8, 0),
        now,
        false,
        None,
        &policy(),
    );
    assert_eq!(no_activity.unwrap_err(), PersistenceError::ActivityNotFound(999));
}

#[test]
fn test_confirm_with_immediate_payment() {
    let mut f = fixture();
    let now = at(2026, 3, 1, 12, 0);
    let reservation = f
        .store
        .create_reservation(
            member(),
            f.court_id,
            f.activity_id,
            at(2026, 3, 2, 8, 0),
            now,
            false,
            None,
            &policy(),
        )
        .unwrap();
    let id = reservation.reservation_id.unwrap();

    let confirmed = f
        .store
        .confirm_reservation(id, PaymentMethod::Card, at(2026, 3, 1, 13, 0))
        .unwrap();

    assert_eq!(confirmed.status, ReservationStatus::Confirmed);
    assert_eq!(confirmed.payment_status, PaymentStatus::Paid);

    let movements = f.store.movements_for_reservation(id).unwrap();
    assert_eq!(movements.len(), 1);
    assert_eq!(movements[0].direction, MovementDirection::Income);
    assert_eq!(movements[0].amount_cents(), 1500);
    assert_eq!(movements[0].method, PaymentMethod::Card);
}

#[test]
fn test_confirm_on_account_defers_payment() {
    let mut f = fixture();
    let now = at(2026, 3, 1, 12, 0);
    let reservation = f
        .store
        .create_reservation(
            member(),
            f.court_id,
            f.activity_id,
            at(2026, 3, 2, 8, 0),
            now,
            false,
            None,
            &policy(),
        )
        .unwrap();
    let id = reservation.reservation_id.unwrap();

    let confirmed = f
        .store
        .confirm_reservation(id, PaymentMethod::OnAccount, at(2026, 3, 1, 13, 0))
        .unwrap();

    assert_eq!(confirmed.status, ReservationStatus::Confirmed);
    assert_eq!(confirmed.payment_status, PaymentStatus::Debt);
    assert!(f.store.movements_for_reservation(id).unwrap().is_empty());
}

#[test]
fn test_confirm_twice_rejected() {
    let mut f = fixture();
    let now = at(2026, 3, 1, 12, 0);
    let reservation = f
        .store
        .create_reservation(
            member(),
            f.court_id,
            f.activity_id,
            at(2026, 3, 2, 8, 0),
            now,
            false,
            None,
            &policy(),
        )
        .unwrap();
    let id = reservation.reservation_id.unwrap();

    f.store
        .confirm_reservation(id, PaymentMethod::Cash, at(2026, 3, 1, 13, 0))
        .unwrap();
    let again = f
        .store
        .confirm_reservation(id, PaymentMethod::Cash, at(2026, 3, 1, 14, 0));
    assert!(matches!(again, Err(PersistenceError::RuleViolation(_))));
}

#[test]
fn test_cancel_pending_leaves_no_refund() {
    let mut f = fixture();
    let now = at(2026, 3, 1, 12, 0);
    let reservation = f
        .store
        .create_reservation(
            member(),
            f.court_id,
            f.activity_id,
            at(2026, 3, 2, 8, 0),
            now,
            false,
            None,
            &policy(),
        )
        .unwrap();
    let id = reservation.reservation_id.unwrap();

    let cancelled = f
        .store
        .cancel_reservation(id, "front-desk", None, at(2026, 3, 1, 14, 0))
        .unwrap();

    assert_eq!(cancelled.status, ReservationStatus::Cancelled);
    assert_eq!(cancelled.cancelled_by.as_deref(), Some("front-desk"));
    assert_eq!(cancelled.cancelled_at, Some(at(2026, 3, 1, 14, 0)));
    assert!(f.store.movements_for_reservation(id).unwrap().is_empty());
}

#[test]
fn test_cancel_confirmed_appends_refund() {
    let mut f = fixture();
    let now = at(2026, 3, 1, 12, 0);
    let reservation = f
        .store
        .create_reservation(
            member(),
            f.court_id,
            f.activity_id,
            at(2026, 3, 2, 8, 0),
            now,
            false,
            None,
            &policy(),
        )
        .unwrap();
    let id = reservation.reservation_id.unwrap();
    f.store
        .confirm_reservation(id, PaymentMethod::Cash, at(2026, 3, 1, 13, 0))
        .unwrap();

    f.store
        .cancel_reservation(id, "front-desk", None, at(2026, 3, 1, 14, 0))
        .unwrap();

    let movements = f.store.movements_for_reservation(id).unwrap();
    assert_eq!(movements.len(), 2);
    assert_eq!(movements[1].direction, MovementDirection::Expense);
    assert_eq!(movements[1].amount_cents(), 1500);
}

#[test]
fn test_cancel_scope_guard() {
    let mut f = fixture();
    let now = at(2026, 3, 1, 12, 0);
    let reservation = f
        .store
        .create_reservation(
            member(),
            f.court_id,
            f.activity_id,
            at(2026, 3, 2, 8, 0),
            now,
            false,
            None,
            &policy(),
        )
        .unwrap();
    let id = reservation.reservation_id.unwrap();

    let other_club = f.club_id + 100;
    let result = f
        .store
        .cancel_reservation(id, "outsider", Some(other_club), at(2026, 3, 1, 14, 0));
    assert_eq!(
        result.unwrap_err(),
        PersistenceError::Forbidden {
            scope_club_id: other_club,
            owning_club_id: f.club_id,
        }
    );

    // Matching scope succeeds.
    let ok = f
        .store
        .cancel_reservation(id, "front-desk", Some(f.club_id), at(2026, 3, 1, 14, 0));
    assert!(ok.is_ok());
}

#[test]
fn test_cancelled_slot_can_be_rebooked() {
    let mut f = fixture();
    let now = at(2026, 3, 1, 12, 0);
    let start = at(2026, 3, 2, 8, 0);
    let reservation = f
        .store
        .create_reservation(
            member(),
            f.court_id,
            f.activity_id,
            start,
            now,
            false,
            None,
            &policy(),
        )
        .unwrap();
    f.store
        .cancel_reservation(
            reservation.reservation_id.unwrap(),
            "front-desk",
            None,
            at(2026, 3, 1, 14, 0),
        )
        .unwrap();

    let rebooked = f.store.create_reservation(
        Holder::Member(7),
        f.court_id,
        f.activity_id,
        start,
        at(2026, 3, 1, 15, 0),
        false,
        None,
        &policy(),
    );
    assert!(rebooked.is_ok());
}
