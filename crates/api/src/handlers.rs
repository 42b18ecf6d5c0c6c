// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API handler functions for booking, availability, series, and charges.
//!
//! Each handler resolves the request into domain inputs, calls the
//! persistence adapter (which runs the core planners inside its
//! transactions), and maps failures into the `ApiError` contract.

use chrono::{DateTime, Utc};

use courtside::BookingPolicy;
use courtside_domain::{
    GuestDetails, Holder, PaymentMethod, Reservation, SlotCatalog, resolve_timezone,
};
use courtside_persistence::Persistence;

use crate::error::{ApiError, translate_persistence_error};
use crate::notify::{BookingNotification, NotificationSink};
use crate::request_response::{
    AddChargeRequest, AddChargeResponse, AvailabilityRequest, AvailabilityResponse,
    CancelReservationRequest, CancelSeriesRequest, CancelSeriesResponse,
    ConfirmReservationRequest, CreateReservationRequest, CreateReservationResponse,
    CreateSeriesRequest, CreateSeriesResponse, GuestPayload, ReservationInfo, SlotAvailability,
};
use crate::{AuthenticatedActor, Role};

/// Deployment configuration the handlers apply to every request.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// IANA timezone used when a court carries no override.
    pub default_timezone: String,
    /// Booking policy (advance window, default price).
    pub policy: BookingPolicy,
    /// The bookable slot grid.
    pub catalog: SlotCatalog,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            default_timezone: String::from("Europe/Madrid"),
            policy: BookingPolicy::default(),
            catalog: SlotCatalog::standard(),
        }
    }
}

fn resolve_holder(
    member_id: Option<i64>,
    guest: Option<GuestPayload>,
) -> Result<Holder, ApiError> {
    match (member_id, guest) {
        (Some(member_id), None) => Ok(Holder::Member(member_id)),
        (None, Some(guest)) => Ok(Holder::Guest(GuestDetails {
            name: guest.name,
            email: guest.email,
            phone: guest.phone,
            document: guest.document,
        })),
        _ => Err(ApiError::InvalidInput {
            field: String::from("holder"),
            message: String::from("Exactly one of member_id and guest must be provided"),
        }),
    }
}

fn parse_method(method: &str) -> Result<PaymentMethod, ApiError> {
    method.parse().map_err(|_| ApiError::InvalidInput {
        field: String::from("method"),
        message: format!("Unknown payment method '{method}'"),
    })
}

/// The club scope a cancellation runs under: admins operate across all
/// clubs, everyone else is held to the scope they supplied.
const fn effective_scope(actor: &AuthenticatedActor, club_scope: Option<i64>) -> Option<i64> {
    match actor.role {
        Role::Admin => None,
        Role::Member => club_scope,
    }
}

fn notify_booking(
    store: &mut Persistence,
    config: &ApiConfig,
    sink: &dyn NotificationSink,
    reservation: &Reservation,
) {
    let notification = match store.get_court(reservation.court_id) {
        Ok(court) => {
            let local_start = resolve_timezone(&court, &config.default_timezone).map_or_else(
                |_| reservation.starts_at.to_rfc3339(),
                |tz| {
                    reservation
                        .starts_at
                        .with_timezone(&tz)
                        .format("%Y-%m-%d %H:%M")
                        .to_string()
                },
            );
            BookingNotification {
                holder_name: reservation.holder.display_name(),
                court_name: court.name,
                local_start,
                price_cents: reservation.price_cents,
            }
        }
        Err(err) => {
            tracing::warn!(error = %err, "could not resolve court for booking notification");
            return;
        }
    };
    if let Err(err) = sink.dispatch(&notification) {
        tracing::warn!(error = %err, "booking notification dispatch failed");
    }
}

/// Books a single slot.
///
/// After the commit, a booking notification is dispatched through the
/// sink; dispatch failures are logged and never surface to the caller.
///
/// # Errors
///
/// * `InvalidInput` for holder/validation problems
/// * `Conflict` when the slot is taken
/// * `ResourceNotFound` for unknown court or activity
pub fn create_reservation(
    store: &mut Persistence,
    actor: &AuthenticatedActor,
    config: &ApiConfig,
    sink: &dyn NotificationSink,
    request: CreateReservationRequest,
    now: DateTime<Utc>,
) -> Result<CreateReservationResponse, ApiError> {
    let holder = resolve_holder(request.member_id, request.guest)?;
    let reservation = store
        .create_reservation(
            holder,
            request.court_id,
            request.activity_id,
            request.starts_at,
            now,
            actor.role.is_privileged(),
            request.price_cents,
            &config.policy,
        )
        .map_err(|err| translate_persistence_error(&err))?;

    notify_booking(store, config, sink, &reservation);

    Ok(CreateReservationResponse {
        reservation: ReservationInfo::from(&reservation),
        message: String::from("Reservation created"),
    })
}

/// Computes the free slots for a day, for one court or across a club.
///
/// # Errors
///
/// * `InvalidInput` unless exactly one of `court_id`/`club_id` is set
/// * `ResourceNotFound` for unknown references
pub fn availability(
    store: &mut Persistence,
    config: &ApiConfig,
    request: AvailabilityRequest,
) -> Result<AvailabilityResponse, ApiError> {
    let slots = match (request.court_id, request.club_id) {
        (Some(court_id), None) => store
            .day_availability(
                court_id,
                request.date,
                request.activity_id,
                &config.catalog,
                &config.default_timezone,
            )
            .map_err(|err| translate_persistence_error(&err))?
            .into_iter()
            .map(|slot| SlotAvailability {
                slot: slot.to_string(),
                court_ids: vec![court_id],
            })
            .collect(),
        (None, Some(club_id)) => store
            .club_availability(
                club_id,
                request.date,
                request.activity_id,
                &config.catalog,
                &config.default_timezone,
            )
            .map_err(|err| translate_persistence_error(&err))?
            .into_iter()
            .map(|(slot, court_ids)| SlotAvailability {
                slot: slot.to_string(),
                court_ids,
            })
            .collect(),
        _ => {
            return Err(ApiError::InvalidInput {
                field: String::from("court_id"),
                message: String::from("Exactly one of court_id and club_id must be provided"),
            });
        }
    };

    Ok(AvailabilityResponse {
        date: request.date,
        slots,
    })
}

/// Confirms a reservation, collecting payment unless deferred.
///
/// # Errors
///
/// * `InvalidInput` for an unknown method or an illegal transition
/// * `ResourceNotFound` for an unknown reservation
pub fn confirm_reservation(
    store: &mut Persistence,
    reservation_id: i64,
    request: ConfirmReservationRequest,
    now: DateTime<Utc>,
) -> Result<CreateReservationResponse, ApiError> {
    let method = parse_method(&request.method)?;
    let reservation = store
        .confirm_reservation(reservation_id, method, now)
        .map_err(|err| translate_persistence_error(&err))?;
    Ok(CreateReservationResponse {
        reservation: ReservationInfo::from(&reservation),
        message: String::from("Reservation confirmed"),
    })
}

/// Cancels a reservation under the actor's club scope.
///
/// # Errors
///
/// * `Forbidden` when the scope does not cover the court's club
/// * `InvalidInput` for an illegal transition
/// * `ResourceNotFound` for an unknown reservation
pub fn cancel_reservation(
    store: &mut Persistence,
    actor: &AuthenticatedActor,
    reservation_id: i64,
    request: CancelReservationRequest,
    now: DateTime<Utc>,
) -> Result<CreateReservationResponse, ApiError> {
    let scope = effective_scope(actor, request.club_scope);
    let reservation = store
        .cancel_reservation(reservation_id, &actor.id, scope, now)
        .map_err(|err| translate_persistence_error(&err))?;
    Ok(CreateReservationResponse {
        reservation: ReservationInfo::from(&reservation),
        message: String::from("Reservation cancelled"),
    })
}

/// Adds an incidental charge to a reservation.
///
/// # Errors
///
/// * `InvalidInput` for an unknown method, negative amount, or inactive
///   reservation
/// * `ResourceNotFound` for an unknown reservation
pub fn add_charge(
    store: &mut Persistence,
    reservation_id: i64,
    request: AddChargeRequest,
    now: DateTime<Utc>,
) -> Result<AddChargeResponse, ApiError> {
    let method = parse_method(&request.method)?;
    let reservation = store
        .add_incidental_charge(
            reservation_id,
            request.amount_cents,
            &request.description,
            method,
            now,
        )
        .map_err(|err| translate_persistence_error(&err))?;
    Ok(AddChargeResponse {
        reservation: ReservationInfo::from(&reservation),
        message: String::from("Charge recorded"),
    })
}

/// Creates a fixed weekly series and its occurrences.
///
/// # Errors
///
/// * `Conflict` when an active series already blocks the range
/// * `InvalidInput` for holder/validation problems
/// * `ResourceNotFound` for unknown court or activity
pub fn create_series(
    store: &mut Persistence,
    actor: &AuthenticatedActor,
    config: &ApiConfig,
    request: CreateSeriesRequest,
    now: DateTime<Utc>,
) -> Result<CreateSeriesResponse, ApiError> {
    let holder = resolve_holder(request.member_id, request.guest)?;
    let creation = store
        .create_series(
            holder,
            request.court_id,
            request.activity_id,
            request.first_start,
            request.weeks,
            now,
            actor.role.is_privileged(),
            request.price_cents,
            &config.policy,
            &config.default_timezone,
        )
        .map_err(|err| translate_persistence_error(&err))?;

    Ok(CreateSeriesResponse {
        series_id: creation.series.series_id.unwrap_or_default(),
        weekday: creation.series.weekday.to_string(),
        occurrences_created: creation.occurrences.len(),
        weeks_requested: request.weeks,
        skipped: creation.skipped,
        message: String::from("Series created"),
    })
}

/// Cancels a fixed series and its future occurrences.
///
/// # Errors
///
/// * `Forbidden` when the scope does not cover the court's club
/// * `InvalidInput` when the series is already cancelled
/// * `ResourceNotFound` for an unknown series
pub fn cancel_series(
    store: &mut Persistence,
    actor: &AuthenticatedActor,
    series_id: i64,
    request: CancelSeriesRequest,
    now: DateTime<Utc>,
) -> Result<CancelSeriesResponse, ApiError> {
    let scope = effective_scope(actor, request.club_scope);
    let cancellation = store
        .cancel_series(series_id, &actor.id, scope, now)
        .map_err(|err| translate_persistence_error(&err))?;
    Ok(CancelSeriesResponse {
        series_id,
        cancelled_occurrence_ids: cancellation.cancelled_occurrence_ids,
        message: String::from("Series cancelled"),
    })
}
