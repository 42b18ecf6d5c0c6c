// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Booking notification dispatch seam.
//!
//! Outbound delivery (e-mail, SMS) is an external collaborator; this
//! module only defines the seam and a logging default. Dispatch happens
//! after the booking commit and must never affect its outcome.

/// A notification describing a committed booking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingNotification {
    /// Display name of the reservation holder.
    pub holder_name: String,
    /// Display name of the booked court.
    pub court_name: String,
    /// The booking start rendered in the court's local time.
    pub local_start: String,
    /// Booking price in cents.
    pub price_cents: i64,
}

/// Dispatch failure. Callers log it; it never propagates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotifyError(pub String);

impl std::fmt::Display for NotifyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Notification dispatch failed: {}", self.0)
    }
}

impl std::error::Error for NotifyError {}

/// The seam through which committed bookings are announced.
pub trait NotificationSink: Send + Sync {
    /// Dispatches a booking notification.
    ///
    /// # Errors
    ///
    /// Returns an error when delivery fails; the caller logs it and
    /// continues.
    fn dispatch(&self, notification: &BookingNotification) -> Result<(), NotifyError>;
}

/// Default sink: writes the notification to the structured log.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl NotificationSink for LogNotifier {
    fn dispatch(&self, notification: &BookingNotification) -> Result<(), NotifyError> {
        tracing::info!(
            holder = %notification.holder_name,
            court = %notification.court_name,
            starts_at = %notification.local_start,
            price_cents = notification.price_cents,
            "booking confirmed"
        );
        Ok(())
    }
}
