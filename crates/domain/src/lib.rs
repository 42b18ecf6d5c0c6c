// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

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

mod clock;
mod error;
mod ledger;
mod overlap;
mod reservation;
mod series;
mod slots;
mod types;
mod validation;

pub use clock::{
    format_instant, local_day_range, local_slot_to_instant, parse_instant, resolve_timezone,
};
pub use error::DomainError;
pub use ledger::{LedgerMovement, MovementDirection, derive_payment_status};
pub use overlap::{local_overlaps, overlaps};
pub use reservation::Reservation;
pub use series::{FixedSeries, SeriesStatus};
pub use slots::{SlotCatalog, SlotTime};
pub use types::{
    Activity, Club, Court, GuestDetails, Holder, PaymentMethod, PaymentStatus, ReservationStatus,
};
pub use validation::{validate_amount, validate_guest};
