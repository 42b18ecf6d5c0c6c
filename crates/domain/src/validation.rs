// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Input validation helpers shared across the workspace.
//!
//! Validation failures are rejected before any state is read.

use crate::error::DomainError;
use crate::types::{GuestDetails, Holder};

/// Validates a monetary amount.
///
/// # Errors
///
/// Returns `DomainError::InvalidAmount` if `cents` is negative.
pub const fn validate_amount(cents: i64) -> Result<(), DomainError> {
    if cents < 0 {
        return Err(DomainError::InvalidAmount(cents));
    }
    Ok(())
}

/// Validates a reservation holder.
///
/// Guest holders require a non-empty name and, unless
/// `allow_guest_without_contact` is set (a privileged override), at least
/// one contact channel. Member holders always pass.
///
/// # Errors
///
/// Returns `DomainError::MissingGuestName` or
/// `DomainError::MissingGuestContact`.
pub fn validate_guest(
    holder: &Holder,
    allow_guest_without_contact: bool,
) -> Result<(), DomainError> {
    match holder {
        Holder::Member(_) => Ok(()),
        Holder::Guest(guest) => validate_guest_details(guest, allow_guest_without_contact),
    }
}

fn validate_guest_details(
    guest: &GuestDetails,
    allow_guest_without_contact: bool,
) -> Result<(), DomainError> {
    if guest.name.trim().is_empty() {
        return Err(DomainError::MissingGuestName);
    }
    if !guest.has_contact() && !allow_guest_without_contact {
        return Err(DomainError::MissingGuestContact);
    }
    Ok(())
}
