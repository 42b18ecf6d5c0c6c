// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Request and response DTOs.
//!
//! These records are the API contract, distinct from domain types:
//! statuses and methods travel as strings, holders as a member ID or a
//! guest payload.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use courtside_domain::Reservation;

/// A guest descriptor supplied at booking time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuestPayload {
    /// Display name of the guest.
    pub name: String,
    /// Contact e-mail, if provided.
    pub email: Option<String>,
    /// Contact phone, if provided.
    pub phone: Option<String>,
    /// Identity document, if provided.
    pub document: Option<String>,
}

/// API request to book a single slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateReservationRequest {
    /// The court to book.
    pub court_id: i64,
    /// The activity to book; fixes the interval length.
    pub activity_id: i64,
    /// Absolute start instant.
    pub starts_at: DateTime<Utc>,
    /// The booking member, when the holder is a member.
    pub member_id: Option<i64>,
    /// The guest descriptor, when the holder is a guest.
    pub guest: Option<GuestPayload>,
    /// Price override in cents; the configured default applies if absent.
    pub price_cents: Option<i64>,
}

/// A stored reservation rendered for API consumers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservationInfo {
    /// Canonical reservation ID.
    pub reservation_id: i64,
    /// The occupied court.
    pub court_id: i64,
    /// The booked activity.
    pub activity_id: i64,
    /// Absolute start instant.
    pub starts_at: DateTime<Utc>,
    /// Absolute end instant.
    pub ends_at: DateTime<Utc>,
    /// Lifecycle status string.
    pub status: String,
    /// Payment status string.
    pub payment_status: String,
    /// Booking price in cents.
    pub price_cents: i64,
    /// Accumulated incidental charges in cents.
    pub extras_cents: i64,
    /// Display name of the holder.
    pub holder_name: String,
    /// Generating series, if this is a recurring occurrence.
    pub series_id: Option<i64>,
}

impl From<&Reservation> for ReservationInfo {
    fn from(reservation: &Reservation) -> Self {
        Self {
            reservation_id: reservation.reservation_id.unwrap_or_default(),
            court_id: reservation.court_id,
            activity_id: reservation.activity_id,
            starts_at: reservation.starts_at,
            ends_at: reservation.ends_at(),
            status: reservation.status.to_string(),
            payment_status: reservation.payment_status.to_string(),
            price_cents: reservation.price_cents,
            extras_cents: reservation.extras_cents,
            holder_name: reservation.holder.display_name(),
            series_id: reservation.series_id,
        }
    }
}

/// API response for a successful booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateReservationResponse {
    /// The stored reservation.
    pub reservation: ReservationInfo,
    /// A success message.
    pub message: String,
}

/// API request for a day's availability, by court or across a club.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityRequest {
    /// A single court to inspect. Exactly one of `court_id` and
    /// `club_id` must be set.
    pub court_id: Option<i64>,
    /// A club whose courts are inspected together.
    pub club_id: Option<i64>,
    /// The local calendar day.
    pub date: NaiveDate,
    /// The activity determining the interval each slot would occupy.
    pub activity_id: i64,
}

/// One free slot and the courts open at it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotAvailability {
    /// The slot start as local "HH:mm".
    pub slot: String,
    /// Courts free for the full interval starting at this slot.
    pub court_ids: Vec<i64>,
}

/// API response for an availability request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityResponse {
    /// The local calendar day inspected.
    pub date: NaiveDate,
    /// The free slots, in catalog order.
    pub slots: Vec<SlotAvailability>,
}

/// API request to confirm a reservation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfirmReservationRequest {
    /// Payment method string (`Cash`, `Card`, `Transfer`, `OnAccount`).
    pub method: String,
}

/// API request to cancel a reservation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CancelReservationRequest {
    /// The club scope the caller operates under. Ignored for admins.
    pub club_scope: Option<i64>,
}

/// API request to add an incidental charge to a reservation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddChargeRequest {
    /// Charge amount in cents.
    pub amount_cents: i64,
    /// Ledger description (e.g. "Ball rental").
    pub description: String,
    /// Payment method string.
    pub method: String,
}

/// API response for a charge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddChargeResponse {
    /// The reservation after the charge and reconciliation.
    pub reservation: ReservationInfo,
    /// A success message.
    pub message: String,
}

/// API request to create a fixed weekly series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateSeriesRequest {
    /// The court to claim weekly.
    pub court_id: i64,
    /// The activity of every occurrence.
    pub activity_id: i64,
    /// Absolute start of the first occurrence.
    pub first_start: DateTime<Utc>,
    /// Number of weekly occurrences to generate.
    pub weeks: u32,
    /// The holding member, when the holder is a member.
    pub member_id: Option<i64>,
    /// The guest descriptor, when the holder is a guest.
    pub guest: Option<GuestPayload>,
    /// Price override per occurrence, in cents.
    pub price_cents: Option<i64>,
}

/// API response for a successful series creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateSeriesResponse {
    /// Canonical series ID.
    pub series_id: i64,
    /// The claimed weekday (e.g. "Mon").
    pub weekday: String,
    /// How many occurrences were actually stored.
    pub occurrences_created: usize,
    /// How many weeks were requested.
    pub weeks_requested: u32,
    /// Start instants skipped because of pre-existing conflicts.
    pub skipped: Vec<DateTime<Utc>>,
    /// A success message.
    pub message: String,
}

/// API request to cancel a fixed series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CancelSeriesRequest {
    /// The club scope the caller operates under. Ignored for admins.
    pub club_scope: Option<i64>,
}

/// API response for a series cancellation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CancelSeriesResponse {
    /// The cancelled series.
    pub series_id: i64,
    /// IDs of the future occurrences cancelled with it.
    pub cancelled_occurrence_ids: Vec<i64>,
    /// A success message.
    pub message: String,
}
