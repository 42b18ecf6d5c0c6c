// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The Courtside scheduling engine.
//!
//! Pure planning and validation over snapshots of existing reservations
//! and series. Nothing here performs I/O or holds module-level mutable
//! state; the persistence layer re-validates conflict checks inside its
//! atomic transactions and this crate supplies the predicates it uses.

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

mod availability;
mod booking;
mod error;
mod recurrence;
mod sweep;

#[cfg(test)]
mod tests;

pub use availability::{available_slots, available_slots_across_courts};
pub use booking::{
    BookingPolicy, CancellationPlan, ConfirmationPlan, check_slot_free, plan_cancellation,
    plan_confirmation, plan_reservation,
};
pub use error::CoreError;
pub use recurrence::{
    OccurrencePlan, check_series_free, future_occurrence_filter, plan_occurrences, plan_series,
};
pub use sweep::completable;
