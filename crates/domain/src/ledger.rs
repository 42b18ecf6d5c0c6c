// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Append-only ledger movements and payment status derivation.

use crate::error::DomainError;
use crate::types::{PaymentMethod, PaymentStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Direction of a monetary movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MovementDirection {
    /// Money entering the club.
    Income,
    /// Money leaving the club (e.g. a refund obligation).
    Expense,
}

impl FromStr for MovementDirection {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Income" => Ok(Self::Income),
            "Expense" => Ok(Self::Expense),
            _ => Err(DomainError::InvalidStatus(s.to_string())),
        }
    }
}

impl std::fmt::Display for MovementDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl MovementDirection {
    /// Converts this direction to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "Income",
            Self::Expense => "Expense",
        }
    }
}

/// One monetary event, optionally tied to a reservation.
///
/// Movements are append-only: created, never mutated or deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerMovement {
    /// Canonical numeric identifier assigned by the database.
    pub movement_id: Option<i64>,
    /// When the movement occurred (UTC).
    pub occurred_at: DateTime<Utc>,
    /// Income or expense.
    pub direction: MovementDirection,
    /// Non-negative amount in integer cents. Sign is carried by the
    /// direction, never by the amount.
    amount_cents: i64,
    /// How the money moved.
    pub method: PaymentMethod,
    /// Human-readable description for the ledger view.
    pub description: String,
    /// Back-reference to the reservation this movement settles, if any.
    pub reservation_id: Option<i64>,
}

impl LedgerMovement {
    /// Creates a new unpersisted movement.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidAmount` if `amount_cents` is negative.
    pub fn new(
        occurred_at: DateTime<Utc>,
        direction: MovementDirection,
        amount_cents: i64,
        method: PaymentMethod,
        description: String,
        reservation_id: Option<i64>,
    ) -> Result<Self, DomainError> {
        if amount_cents < 0 {
            return Err(DomainError::InvalidAmount(amount_cents));
        }
        Ok(Self {
            movement_id: None,
            occurred_at,
            direction,
            amount_cents,
            method,
            description,
            reservation_id,
        })
    }

    /// Rehydrates a movement from persisted fields.
    #[must_use]
    pub const fn from_stored(
        movement_id: i64,
        occurred_at: DateTime<Utc>,
        direction: MovementDirection,
        amount_cents: i64,
        method: PaymentMethod,
        description: String,
        reservation_id: Option<i64>,
    ) -> Self {
        Self {
            movement_id: Some(movement_id),
            occurred_at,
            direction,
            amount_cents,
            method,
            description,
            reservation_id,
        }
    }

    /// Returns the non-negative amount in cents.
    #[must_use]
    pub const fn amount_cents(&self) -> i64 {
        self.amount_cents
    }

    /// Returns the signed effect on the club balance.
    #[must_use]
    pub const fn net_cents(&self) -> i64 {
        match self.direction {
            MovementDirection::Income => self.amount_cents,
            MovementDirection::Expense => -self.amount_cents,
        }
    }
}

/// Derives the payment status of a reservation from the ledger formula.
///
/// `remaining = price + extras - collected`. The result is `Paid` when
/// nothing remains, `Partial` when something was collected but a balance
/// remains, and `Debt` otherwise. This derivation is authoritative; the
/// status stored on a reservation is a cache of this function and must be
/// re-derived after every charge or payment mutation.
#[must_use]
pub const fn derive_payment_status(
    price_cents: i64,
    extras_cents: i64,
    collected_cents: i64,
) -> PaymentStatus {
    let remaining = price_cents + extras_cents - collected_cents;
    if remaining <= 0 {
        PaymentStatus::Paid
    } else if collected_cents > 0 {
        PaymentStatus::Partial
    } else {
        PaymentStatus::Debt
    }
}
