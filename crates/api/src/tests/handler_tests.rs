// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Handler behavior tests over a seeded in-memory store.

use super::{admin, at, config, fixture, member_actor};
use crate::handlers;
use crate::notify::LogNotifier;
use crate::request_response::{
    AddChargeRequest, AvailabilityRequest, CancelReservationRequest, CancelSeriesRequest,
    ConfirmReservationRequest, CreateReservationRequest, CreateSeriesRequest, GuestPayload,
};
use crate::{ApiError, Role, authenticate_stub};
use chrono::NaiveDate;

fn booking_request(f: &super::Fixture) -> CreateReservationRequest {
    CreateReservationRequest {
        court_id: f.court_id,
        activity_id: f.activity_id,
        starts_at: at(2026, 3, 2, 8, 0),
        member_id: Some(42),
        guest: None,
        price_cents: None,
    }
}

#[test]
fn test_create_reservation_response() {
    let mut f = fixture();
    let request = booking_request(&f);
    let response = handlers::create_reservation(
        &mut f.store,
        &member_actor(),
        &config(),
        &LogNotifier,
        request,
        at(2026, 3, 1, 12, 0),
    )
    .unwrap();

    assert_eq!(response.reservation.status, "Pending");
    assert_eq!(response.reservation.payment_status, "Debt");
    assert_eq!(response.reservation.price_cents, 1500);
    assert_eq!(response.reservation.holder_name, "member#42");
    assert_eq!(response.reservation.court_id, f.court_id);
}

#[test]
fn test_create_reservation_requires_exactly_one_holder() {
    let mut f = fixture();
    let mut request = booking_request(&f);
    request.guest = Some(GuestPayload {
        name: String::from("Walk-in"),
        email: Some(String::from("walkin@example.com")),
        phone: None,
        document: None,
    });

    let result = handlers::create_reservation(
        &mut f.store,
        &member_actor(),
        &config(),
        &LogNotifier,
        request,
        at(2026, 3, 1, 12, 0),
    );
    assert!(matches!(result, Err(ApiError::InvalidInput { ref field, .. }) if field == "holder"));
}

#[test]
fn test_double_booking_maps_to_conflict() {
    let mut f = fixture();
    let now = at(2026, 3, 1, 12, 0);
    let first = booking_request(&f);
    handlers::create_reservation(
        &mut f.store,
        &member_actor(),
        &config(),
        &LogNotifier,
        first,
        now,
    )
    .unwrap();

    let second = booking_request(&f);
    let result = handlers::create_reservation(
        &mut f.store,
        &member_actor(),
        &config(),
        &LogNotifier,
        second,
        now,
    );
    assert!(matches!(result, Err(ApiError::Conflict { .. })));
}

#[test]
fn test_unknown_court_maps_to_not_found() {
    let mut f = fixture();
    let mut request = booking_request(&f);
    request.court_id = 999;

    let result = handlers::create_reservation(
        &mut f.store,
        &member_actor(),
        &config(),
        &LogNotifier,
        request,
        at(2026, 3, 1, 12, 0),
    );
    assert!(matches!(
        result,
        Err(ApiError::ResourceNotFound { ref resource_type, .. }) if resource_type == "Court"
    ));
}

#[test]
fn test_confirm_and_cancel_flow() {
    let mut f = fixture();
    let now = at(2026, 3, 1, 12, 0);
    let request = booking_request(&f);
    let created = handlers::create_reservation(
        &mut f.store,
        &member_actor(),
        &config(),
        &LogNotifier,
        request,
        now,
    )
    .unwrap();
    let id = created.reservation.reservation_id;

    let confirmed = handlers::confirm_reservation(
        &mut f.store,
        id,
        ConfirmReservationRequest {
            method: String::from("Card"),
        },
        at(2026, 3, 1, 13, 0),
    )
    .unwrap();
    assert_eq!(confirmed.reservation.status, "Confirmed");
    assert_eq!(confirmed.reservation.payment_status, "Paid");

    let cancelled = handlers::cancel_reservation(
        &mut f.store,
        &admin(),
        id,
        CancelReservationRequest { club_scope: None },
        at(2026, 3, 1, 14, 0),
    )
    .unwrap();
    assert_eq!(cancelled.reservation.status, "Cancelled");
}

#[test]
fn test_unknown_payment_method_rejected() {
    let mut f = fixture();
    let result = handlers::confirm_reservation(
        &mut f.store,
        1,
        ConfirmReservationRequest {
            method: String::from("Barter"),
        },
        at(2026, 3, 1, 13, 0),
    );
    assert!(matches!(result, Err(ApiError::InvalidInput { ref field, .. }) if field == "method"));
}

#[test]
fn test_member_scope_enforced_admin_scope_ignored() {
    let mut f = fixture();
    let now = at(2026, 3, 1, 12, 0);
    let request = booking_request(&f);
    let created = handlers::create_reservation(
        &mut f.store,
        &member_actor(),
        &config(),
        &LogNotifier,
        request,
        now,
    )
    .unwrap();
    let id = created.reservation.reservation_id;

    let wrong_scope = handlers::cancel_reservation(
        &mut f.store,
        &member_actor(),
        id,
        CancelReservationRequest {
            club_scope: Some(f.club_id + 1),
        },
        at(2026, 3, 1, 14, 0),
    );
    assert!(matches!(wrong_scope, Err(ApiError::Forbidden { .. })));

    // An admin carrying a stale scope is not constrained by it.
    let admin_result = handlers::cancel_reservation(
        &mut f.store,
        &admin(),
        id,
        CancelReservationRequest {
            club_scope: Some(f.club_id + 1),
        },
        at(2026, 3, 1, 14, 0),
    );
    assert!(admin_result.is_ok());
}

#[test]
fn test_add_charge_response() {
    let mut f = fixture();
    let now = at(2026, 3, 1, 12, 0);
    let request = booking_request(&f);
    let created = handlers::create_reservation(
        &mut f.store,
        &member_actor(),
        &config(),
        &LogNotifier,
        request,
        now,
    )
    .unwrap();

    let response = handlers::add_charge(
        &mut f.store,
        created.reservation.reservation_id,
        AddChargeRequest {
            amount_cents: 400,
            description: String::from("Ball rental"),
            method: String::from("Cash"),
        },
        at(2026, 3, 2, 8, 15),
    )
    .unwrap();
    assert_eq!(response.reservation.extras_cents, 400);
}

#[test]
fn test_availability_single_court() {
    let mut f = fixture();
    let request = AvailabilityRequest {
        court_id: Some(f.court_id),
        club_id: None,
        date: NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(),
        activity_id: f.activity_id,
    };

    let response = handlers::availability(&mut f.store, &config(), request).unwrap();
    assert_eq!(response.slots.len(), config().catalog.len());
    assert_eq!(response.slots[0].slot, "08:00");
    assert_eq!(response.slots[0].court_ids, vec![f.court_id]);
}

#[test]
fn test_availability_requires_one_target() {
    let mut f = fixture();
    let request = AvailabilityRequest {
        court_id: Some(f.court_id),
        club_id: Some(f.club_id),
        date: NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(),
        activity_id: f.activity_id,
    };
    let result = handlers::availability(&mut f.store, &config(), request);
    assert!(matches!(result, Err(ApiError::InvalidInput { .. })));
}

#[test]
fn test_series_flow() {
    let mut f = fixture();
    let now = at(2026, 3, 1, 12, 0);

    // Occupy week 2 so the series generates a gap.
    let mut occupied = booking_request(&f);
    occupied.starts_at = at(2026, 3, 9, 8, 0);
    handlers::create_reservation(
        &mut f.store,
        &member_actor(),
        &config(),
        &LogNotifier,
        occupied,
        now,
    )
    .unwrap();

    let created = handlers::create_series(
        &mut f.store,
        &member_actor(),
        &config(),
        CreateSeriesRequest {
            court_id: f.court_id,
            activity_id: f.activity_id,
            first_start: at(2026, 3, 2, 8, 0),
            weeks: 4,
            member_id: Some(42),
            guest: None,
            price_cents: None,
        },
        now,
    )
    .unwrap();
    assert_eq!(created.weekday, "Mon");
    assert_eq!(created.weeks_requested, 4);
    assert_eq!(created.occurrences_created, 3);
    assert_eq!(created.skipped, vec![at(2026, 3, 9, 8, 0)]);

    let cancelled = handlers::cancel_series(
        &mut f.store,
        &admin(),
        created.series_id,
        CancelSeriesRequest { club_scope: None },
        now,
    )
    .unwrap();
    assert_eq!(cancelled.cancelled_occurrence_ids.len(), 3);
}

#[test]
fn test_request_json_shape() {
    let body = r#"{
        "court_id": 1,
        "activity_id": 2,
        "starts_at": "2026-03-02T08:00:00Z",
        "member_id": 42,
        "guest": null,
        "price_cents": null
    }"#;
    let request: CreateReservationRequest = serde_json::from_str(body).unwrap();
    assert_eq!(request.court_id, 1);
    assert_eq!(request.member_id, Some(42));
    assert_eq!(request.starts_at, at(2026, 3, 2, 8, 0));
}

#[test]
fn test_authenticate_stub() {
    assert!(authenticate_stub(String::from("front-desk"), Role::Admin).is_ok());
    assert!(authenticate_stub(String::new(), Role::Member).is_err());
}
