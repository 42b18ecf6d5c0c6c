// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Represents the lifecycle state of a reservation.
///
/// Explicit lifecycle states govern which operations are permitted.
/// `Completed` and `Cancelled` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ReservationStatus {
    /// Initial state after an ad-hoc booking is created.
    #[default]
    Pending,
    /// The booking has been confirmed (and normally paid).
    Confirmed,
    /// The reserved interval has elapsed.
    Completed,
    /// The reservation was cancelled. Never deleted, only flagged.
    Cancelled,
}

impl FromStr for ReservationStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pending" => Ok(Self::Pending),
            "Confirmed" => Ok(Self::Confirmed),
            "Completed" => Ok(Self::Completed),
            "Cancelled" => Ok(Self::Cancelled),
            _ => Err(DomainError::InvalidStatus(s.to_string())),
        }
    }
}

impl std::fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl ReservationStatus {
    /// Converts this status to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Confirmed => "Confirmed",
            Self::Completed => "Completed",
            Self::Cancelled => "Cancelled",
        }
    }

    /// Checks if a transition from this status to another is valid.
    ///
    /// Valid transitions are:
    /// - Pending → Confirmed
    /// - Pending → Completed (completion sweep over an unconfirmed booking)
    /// - Pending → Cancelled
    /// - Confirmed → Completed
    /// - Confirmed → Cancelled
    #[must_use]
    pub const fn can_transition_to(&self, target: Self) -> bool {
        matches!(
            (self, target),
            (Self::Pending, Self::Confirmed)
                | (Self::Pending | Self::Confirmed, Self::Completed)
                | (Self::Pending | Self::Confirmed, Self::Cancelled)
        )
    }

    /// Returns whether this status occupies its interval on the court.
    ///
    /// Active reservations are the ones the overlap invariant protects:
    /// no two active reservations on the same court may overlap.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        matches!(self, Self::Pending | Self::Confirmed)
    }
}

/// Represents the derived payment state of a reservation.
///
/// The stored value is a cache of `derive_payment_status` and is only
/// meaningful while the reservation is not cancelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PaymentStatus {
    /// Nothing has been collected against an outstanding total.
    #[default]
    Debt,
    /// Something has been collected but a balance remains.
    Partial,
    /// Collected funds cover the full price plus incidental charges.
    Paid,
}

impl FromStr for PaymentStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Debt" => Ok(Self::Debt),
            "Partial" => Ok(Self::Partial),
            "Paid" => Ok(Self::Paid),
            _ => Err(DomainError::InvalidStatus(s.to_string())),
        }
    }
}

impl std::fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl PaymentStatus {
    /// Converts this status to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Debt => "Debt",
            Self::Partial => "Partial",
            Self::Paid => "Paid",
        }
    }
}

/// Represents how a payment was (or will be) made.
///
/// Payment methods are fixed domain constants; `OnAccount` signals a
/// deferred payment with no immediate ledger movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentMethod {
    /// Cash at the club desk.
    Cash,
    /// Card payment.
    Card,
    /// Bank transfer.
    Transfer,
    /// Deferred payment charged to the holder's account.
    OnAccount,
}

impl FromStr for PaymentMethod {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Cash" => Ok(Self::Cash),
            "Card" => Ok(Self::Card),
            "Transfer" => Ok(Self::Transfer),
            "OnAccount" => Ok(Self::OnAccount),
            _ => Err(DomainError::InvalidStatus(s.to_string())),
        }
    }
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl PaymentMethod {
    /// Converts this method to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Cash => "Cash",
            Self::Card => "Card",
            Self::Transfer => "Transfer",
            Self::OnAccount => "OnAccount",
        }
    }

    /// Returns whether this method defers collection to a later payment.
    #[must_use]
    pub const fn is_deferred(&self) -> bool {
        matches!(self, Self::OnAccount)
    }
}

/// A club owning one or more courts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Club {
    /// Canonical numeric identifier assigned by the database.
    pub club_id: Option<i64>,
    /// Display name.
    pub name: String,
}

/// A bookable court.
///
/// Courts carry only the state the scheduling core needs: a maintenance
/// flag gating bookability and an optional timezone override. Everything
/// else about a court belongs to the (external) catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Court {
    /// Canonical numeric identifier assigned by the database.
    pub court_id: Option<i64>,
    /// The club this court belongs to.
    pub club_id: i64,
    /// Display name (e.g. "Court 1").
    pub name: String,
    /// Whether the court is under maintenance and unavailable for booking.
    pub maintenance: bool,
    /// Optional IANA timezone identifier. Falls back to the configured
    /// process-wide default when absent.
    pub timezone: Option<String>,
}

/// A bookable activity type carrying a default duration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    /// Canonical numeric identifier assigned by the database.
    pub activity_id: Option<i64>,
    /// Display name (e.g. "Padel", "Tennis").
    pub name: String,
    /// Slot duration in minutes. Always positive.
    duration_minutes: u32,
}

impl Activity {
    /// Creates a new `Activity`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidDuration` if `duration_minutes` is zero.
    pub fn new(name: String, duration_minutes: u32) -> Result<Self, DomainError> {
        if duration_minutes == 0 {
            return Err(DomainError::InvalidDuration(duration_minutes));
        }
        Ok(Self {
            activity_id: None,
            name,
            duration_minutes,
        })
    }

    /// Creates an `Activity` with an existing persisted ID.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidDuration` if `duration_minutes` is zero.
    pub fn with_id(
        activity_id: i64,
        name: String,
        duration_minutes: u32,
    ) -> Result<Self, DomainError> {
        let mut activity = Self::new(name, duration_minutes)?;
        activity.activity_id = Some(activity_id);
        Ok(activity)
    }

    /// Returns the activity duration in minutes.
    #[must_use]
    pub const fn duration_minutes(&self) -> u32 {
        self.duration_minutes
    }

    /// Returns the activity duration as a chrono `Duration`.
    #[must_use]
    pub fn duration(&self) -> chrono::Duration {
        chrono::Duration::minutes(i64::from(self.duration_minutes))
    }
}

/// A guest descriptor captured directly on a reservation.
///
/// Guests are unauthenticated bookers; their contact details are
/// denormalized onto the reservation for the front desk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuestDetails {
    /// The guest's name. Required.
    pub name: String,
    /// Contact e-mail, if provided.
    pub email: Option<String>,
    /// Contact phone number, if provided.
    pub phone: Option<String>,
    /// Identity document or member-candidate token, if provided.
    pub document: Option<String>,
}

impl GuestDetails {
    /// Returns whether at least one contact channel is present.
    #[must_use]
    pub const fn has_contact(&self) -> bool {
        self.email.is_some() || self.phone.is_some() || self.document.is_some()
    }
}

/// The holder of a reservation: a registered member or a guest.
///
/// Exactly one of the two is present by construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Holder {
    /// A registered member, referenced by identity id.
    Member(i64),
    /// A walk-in guest, described inline.
    Guest(GuestDetails),
}

impl Holder {
    /// Returns a display name for notifications and listings.
    #[must_use]
    pub fn display_name(&self) -> String {
        match self {
            Self::Member(member_id) => format!("member#{member_id}"),
            Self::Guest(guest) => guest.name.clone(),
        }
    }
}
