// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API boundary layer for the Courtside reservation system.
//!
//! Handlers translate request DTOs into core planner and persistence
//! calls and map every failure into an `ApiError` the transport layer
//! can render. Identity issuance is an external collaborator; this
//! crate only carries the authenticated actor it is handed.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod error;
pub mod handlers;
mod notify;
mod request_response;

#[cfg(test)]
mod tests;

pub use error::{ApiError, AuthError};
pub use handlers::ApiConfig;
pub use notify::{BookingNotification, LogNotifier, NotificationSink, NotifyError};
pub use request_response::{
    AddChargeRequest, AddChargeResponse, AvailabilityRequest, AvailabilityResponse,
    CancelReservationRequest, CancelSeriesRequest, CancelSeriesResponse,
    ConfirmReservationRequest, CreateReservationRequest, CreateReservationResponse,
    CreateSeriesRequest, CreateSeriesResponse, GuestPayload, ReservationInfo, SlotAvailability,
};

/// Actor roles for authorization.
///
/// Roles apply to the authenticated caller, never to the reservation
/// holder: a front-desk operator books on behalf of members and guests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Administrative staff: extended booking window, may register
    /// guests without contact details, and operate across club scopes.
    Admin,
    /// A registered member booking for themselves.
    Member,
}

impl Role {
    /// Returns whether this role unlocks the privileged booking paths.
    #[must_use]
    pub const fn is_privileged(self) -> bool {
        matches!(self, Self::Admin)
    }
}

/// An authenticated actor with an associated role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedActor {
    /// The unique identifier for this actor.
    pub id: String,
    /// The role assigned to this actor.
    pub role: Role,
}

impl AuthenticatedActor {
    /// Creates a new authenticated actor.
    #[must_use]
    pub const fn new(id: String, role: Role) -> Self {
        Self { id, role }
    }
}

/// Stub authentication function.
///
/// Identity issuance is an external collaborator; this placeholder only
/// rejects empty actor IDs and otherwise trusts the caller-supplied
/// role.
///
/// # Errors
///
/// Returns an error if the actor ID is empty.
pub fn authenticate_stub(actor_id: String, role: Role) -> Result<AuthenticatedActor, AuthError> {
    if actor_id.is_empty() {
        return Err(AuthError::AuthenticationFailed {
            reason: String::from("Actor ID cannot be empty"),
        });
    }
    Ok(AuthenticatedActor::new(actor_id, role))
}
