// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for the Courtside reservation system.
//!
//! Built on Diesel over `SQLite`. Timestamps are stored as fixed-width
//! RFC 3339 UTC strings, statuses as their canonical string forms, and
//! money as integer cents.
//!
//! ## Atomicity
//!
//! Every multi-step operation runs inside one Diesel transaction that
//! re-reads fresh state before writing: the booking path re-checks the
//! overlap invariant against the committed reservations, and the series
//! path re-validates both the weekly claim and each occurrence slot. The
//! server serializes access by holding the `Persistence` adapter behind
//! a mutex, so the read-check-write sequence inside a transaction can
//! never interleave with another writer.
//!
//! ## Testing
//!
//! Standard tests run against unique shared in-memory `SQLite` databases
//! (one per adapter, named off an atomic counter), so they are fast,
//! deterministic, and fully isolated from each other.

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

use chrono::{DateTime, Duration, NaiveDate, Utc};
use chrono_tz::Tz;
use diesel::prelude::*;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};

use courtside::{
    BookingPolicy, check_series_free, check_slot_free, future_occurrence_filter, plan_cancellation,
    plan_confirmation, plan_occurrences, plan_reservation, plan_series,
};
use courtside::{CoreError, available_slots, available_slots_across_courts, completable};
use courtside_domain::{
    Activity, Club, Court, FixedSeries, Holder, LedgerMovement, MovementDirection, PaymentMethod,
    PaymentStatus, Reservation, ReservationStatus, SeriesStatus, SlotCatalog, SlotTime,
    derive_payment_status, local_day_range, resolve_timezone, validate_amount,
};

mod data_models;
mod diesel_schema;
mod error;
mod mutations;
mod queries;
mod sqlite;

#[cfg(test)]
mod tests;

pub use error::PersistenceError;

/// Atomic counter for generating unique in-memory database names.
///
/// Each call to `new_in_memory()` receives a unique sequential ID, so
/// tests are isolated without time-based collisions.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

/// The outcome of creating a fixed series.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeriesCreation {
    /// The stored series template.
    pub series: FixedSeries,
    /// The stored occurrences, in chronological order.
    pub occurrences: Vec<Reservation>,
    /// Start instants skipped because of pre-existing conflicts.
    pub skipped: Vec<DateTime<Utc>>,
}

/// The outcome of cancelling a fixed series.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeriesCancellation {
    /// The series after the status flip.
    pub series: FixedSeries,
    /// IDs of the future occurrences that were cancelled with it.
    pub cancelled_occurrence_ids: Vec<i64>,
}

fn core_error(err: CoreError) -> PersistenceError {
    match err {
        CoreError::SlotConflict {
            court_id,
            conflicting_start,
            conflicting_end,
        } => PersistenceError::SlotTaken {
            court_id,
            conflicting_start,
            conflicting_end,
        },
        CoreError::SeriesConflict {
            court_id,
            blocking_series_id,
        } => PersistenceError::SeriesTaken {
            court_id,
            blocking_series_id: blocking_series_id.unwrap_or_default(),
        },
        other => PersistenceError::RuleViolation(other.to_string()),
    }
}

/// Persistence adapter owning the `SQLite` connection.
///
/// Callers that need concurrent access wrap the adapter in a mutex; the
/// adapter itself assumes it is the only writer while a method runs.
pub struct Persistence {
    conn: SqliteConnection,
}

impl Persistence {
    /// Creates a new persistence adapter with an in-memory `SQLite`
    /// database.
    ///
    /// Each call receives a unique shared in-memory database via an
    /// atomic counter, ensuring deterministic test isolation.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        let db_id = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let shared_memory_url = format!("file:memdb_test_{db_id}?mode=memory&cache=shared");

        let mut conn = sqlite::initialize_database(&shared_memory_url)?;
        sqlite::verify_foreign_key_enforcement(&mut conn)?;

        Ok(Self { conn })
    }

    /// Creates a new persistence adapter with a file-based `SQLite`
    /// database, running migrations and enabling WAL mode.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let path_str = path.as_ref().to_str().ok_or_else(|| {
            PersistenceError::DatabaseConnectionFailed("Invalid database path".to_string())
        })?;

        let mut conn = sqlite::initialize_database(path_str)?;
        sqlite::enable_wal_mode(&mut conn)?;
        sqlite::verify_foreign_key_enforcement(&mut conn)?;

        Ok(Self { conn })
    }

    // ========================================================================
    // Booking
    // ========================================================================

    /// Creates a reservation with an atomic check-then-insert.
    ///
    /// Inside one transaction: validates the request, re-reads the
    /// active reservations overlapping the requested interval, and
    /// inserts only when the slot is genuinely free. Returns the stored
    /// reservation.
    ///
    /// # Errors
    ///
    /// * `CourtNotFound` / `ActivityNotFound` for unknown references
    /// * `SlotTaken` when the interval conflicts with a committed
    ///   reservation
    /// * `RuleViolation` for past bookings, advance-window violations,
    ///   guest descriptor problems, or a court under maintenance
    #[allow(clippy::too_many_arguments)]
    pub fn create_reservation(
        &mut self,
        holder: Holder,
        court_id: i64,
        activity_id: i64,
        starts_at: DateTime<Utc>,
        now: DateTime<Utc>,
        privileged: bool,
        price_cents: Option<i64>,
        policy: &BookingPolicy,
    ) -> Result<Reservation, PersistenceError> {
        let price = price_cents.unwrap_or(policy.default_price_cents);
        let policy = *policy;
        self.conn
            .transaction::<Reservation, PersistenceError, _>(|conn| {
                let court = queries::catalog::get_court(conn, court_id)?;
                require_bookable(&court)?;
                let activity = queries::catalog::get_activity(conn, activity_id)?;

                let draft = plan_reservation(
                    holder, court_id, &activity, starts_at, now, privileged, price, &policy,
                )
                .map_err(core_error)?;

                let existing = queries::reservations::active_in_range(
                    conn,
                    court_id,
                    draft.starts_at,
                    draft.ends_at(),
                )?;
                check_slot_free(&existing, court_id, draft.starts_at, draft.ends_at())
                    .map_err(core_error)?;

                let reservation_id = mutations::reservations::insert_reservation(conn, &draft)?;
                queries::reservations::get_reservation(conn, reservation_id)
            })
    }

    /// Confirms a reservation, collecting payment unless deferred.
    ///
    /// The status flip, the income movement, and the payment status
    /// recomputation commit in the same transaction.
    ///
    /// # Errors
    ///
    /// * `ReservationNotFound` if missing
    /// * `RuleViolation` if the current status cannot move to Confirmed
    pub fn confirm_reservation(
        &mut self,
        reservation_id: i64,
        method: PaymentMethod,
        now: DateTime<Utc>,
    ) -> Result<Reservation, PersistenceError> {
        self.conn
            .transaction::<Reservation, PersistenceError, _>(|conn| {
                let reservation = queries::reservations::get_reservation(conn, reservation_id)?;
                let plan = plan_confirmation(&reservation, method, now).map_err(core_error)?;

                mutations::reservations::update_status(
                    conn,
                    reservation_id,
                    ReservationStatus::Confirmed,
                )?;
                if let Some(movement) = plan.movement {
                    mutations::ledger::insert_movement(conn, &movement)?;
                }
                recompute_payment_in_tx(conn, reservation_id)?;
                queries::reservations::get_reservation(conn, reservation_id)
            })
    }

    /// Cancels a reservation, recording the actor and instant.
    ///
    /// When the actor carries a club scope, the targeted court must
    /// belong to that club. A previously confirmed reservation drafts an
    /// offsetting refund movement; appending it is best-effort and never
    /// fails the cancellation.
    ///
    /// # Errors
    ///
    /// * `ReservationNotFound` if missing
    /// * `Forbidden` if the scope does not cover the court's club
    /// * `RuleViolation` if the current status cannot move to Cancelled
    pub fn cancel_reservation(
        &mut self,
        reservation_id: i64,
        cancelled_by: &str,
        scope_club_id: Option<i64>,
        now: DateTime<Utc>,
    ) -> Result<Reservation, PersistenceError> {
        self.conn
            .transaction::<Reservation, PersistenceError, _>(|conn| {
                let reservation = queries::reservations::get_reservation(conn, reservation_id)?;
                let court = queries::catalog::get_court(conn, reservation.court_id)?;
                require_scope(scope_club_id, &court)?;

                let plan = plan_cancellation(&reservation, now).map_err(core_error)?;
                mutations::reservations::mark_cancelled(conn, reservation_id, cancelled_by, now)?;
                if let Some(refund) = plan.refund
                    && let Err(err) = mutations::ledger::insert_movement(conn, &refund)
                {
                    tracing::warn!(
                        reservation_id,
                        error = %err,
                        "failed to append refund movement for cancelled reservation"
                    );
                }
                queries::reservations::get_reservation(conn, reservation_id)
            })
    }

    /// Adds an incidental charge to an active reservation.
    ///
    /// The charge raises the total owed; non-deferred methods append a
    /// matching income movement (best-effort, like cancellation
    /// refunds). The payment status is always recomputed from the
    /// ledger formula, so a deferred charge on a paid reservation
    /// demotes it to Partial.
    ///
    /// # Errors
    ///
    /// * `ReservationNotFound` if missing
    /// * `RuleViolation` for a negative amount or an inactive reservation
    pub fn add_incidental_charge(
        &mut self,
        reservation_id: i64,
        amount_cents: i64,
        description: &str,
        method: PaymentMethod,
        now: DateTime<Utc>,
    ) -> Result<Reservation, PersistenceError> {
        self.conn
            .transaction::<Reservation, PersistenceError, _>(|conn| {
                let reservation = queries::reservations::get_reservation(conn, reservation_id)?;
                if !reservation.is_active() {
                    return Err(PersistenceError::RuleViolation(format!(
                        "Cannot charge reservation {} in status {}",
                        reservation_id, reservation.status
                    )));
                }
                validate_amount(amount_cents)
                    .map_err(|err| PersistenceError::RuleViolation(err.to_string()))?;

                mutations::reservations::add_extras(conn, reservation_id, amount_cents)?;
                if !method.is_deferred() {
                    let movement = LedgerMovement::new(
                        now,
                        MovementDirection::Income,
                        amount_cents,
                        method,
                        description.to_string(),
                        Some(reservation_id),
                    )
                    .map_err(|err| PersistenceError::RuleViolation(err.to_string()))?;
                    // The movement append is best-effort: the charge
                    // itself must not fail on a ledger write problem.
                    if let Err(err) = mutations::ledger::insert_movement(conn, &movement) {
                        tracing::warn!(
                            reservation_id,
                            error = %err,
                            "failed to append income movement for incidental charge"
                        );
                    }
                }
                recompute_payment_in_tx(conn, reservation_id)?;
                queries::reservations::get_reservation(conn, reservation_id)
            })
    }

    /// Re-derives and stores the payment status of a reservation from
    /// the ledger formula.
    ///
    /// # Errors
    ///
    /// Returns `ReservationNotFound` if the reservation does not exist.
    pub fn recompute_payment_status(
        &mut self,
        reservation_id: i64,
    ) -> Result<PaymentStatus, PersistenceError> {
        self.conn
            .transaction::<PaymentStatus, PersistenceError, _>(|conn| {
                recompute_payment_in_tx(conn, reservation_id)
            })
    }

    // ========================================================================
    // Fixed series
    // ========================================================================

    /// Creates a fixed weekly series and expands it into occurrences.
    ///
    /// Inside one transaction: re-validates the weekly claim against the
    /// standing series on the court, inserts the template, then inserts
    /// one confirmed occurrence per conflict-free week. Conflicting
    /// weeks are skipped and reported, not errors.
    ///
    /// # Errors
    ///
    /// * `CourtNotFound` / `ActivityNotFound` for unknown references
    /// * `SeriesTaken` when an active series already blocks the range
    /// * `RuleViolation` for a past first start, a court under
    ///   maintenance, or guest descriptor problems
    #[allow(clippy::too_many_arguments)]
    pub fn create_series(
        &mut self,
        holder: Holder,
        court_id: i64,
        activity_id: i64,
        first_start: DateTime<Utc>,
        weeks: u32,
        now: DateTime<Utc>,
        privileged: bool,
        price_cents: Option<i64>,
        policy: &BookingPolicy,
        default_tz: &str,
    ) -> Result<SeriesCreation, PersistenceError> {
        let price = price_cents.unwrap_or(policy.default_price_cents);
        let default_tz = default_tz.to_string();
        self.conn
            .transaction::<SeriesCreation, PersistenceError, _>(|conn| {
                if first_start < now {
                    return Err(PersistenceError::RuleViolation(format!(
                        "Series first occurrence {first_start} is in the past"
                    )));
                }
                let court = queries::catalog::get_court(conn, court_id)?;
                require_bookable(&court)?;
                let activity = queries::catalog::get_activity(conn, activity_id)?;
                let tz = resolve_timezone(&court, &default_tz)
                    .map_err(|err| PersistenceError::RuleViolation(err.to_string()))?;

                let candidate = plan_series(holder, court_id, &activity, first_start, tz, privileged)
                    .map_err(core_error)?;
                let standing = queries::series::active_for_court(conn, court_id)?;
                check_series_free(&standing, &candidate).map_err(core_error)?;

                let series_id = mutations::series::insert_series(conn, &candidate)?;
                let series = queries::series::get_series(conn, series_id)?;

                let horizon_end =
                    first_start + Duration::weeks(i64::from(weeks)) + activity.duration();
                let existing = queries::reservations::active_in_range(
                    conn, court_id, first_start, horizon_end,
                )?;
                let plan =
                    plan_occurrences(&series, &activity, first_start, weeks, &existing, price, now)
                        .map_err(core_error)?;

                let mut occurrences = Vec::with_capacity(plan.drafts.len());
                for draft in &plan.drafts {
                    let id = mutations::reservations::insert_reservation(conn, draft)?;
                    occurrences.push(queries::reservations::get_reservation(conn, id)?);
                }

                Ok(SeriesCreation {
                    series,
                    occurrences,
                    skipped: plan.skipped,
                })
            })
    }

    /// Cancels a fixed series and its future occurrences.
    ///
    /// Occurrences that already started (or finished) are untouched;
    /// future active children flip to Cancelled in the same transaction,
    /// each with a best-effort refund movement where applicable.
    ///
    /// # Errors
    ///
    /// * `SeriesNotFound` if missing
    /// * `Forbidden` if the scope does not cover the court's club
    /// * `RuleViolation` if the series is already cancelled
    pub fn cancel_series(
        &mut self,
        series_id: i64,
        cancelled_by: &str,
        scope_club_id: Option<i64>,
        now: DateTime<Utc>,
    ) -> Result<SeriesCancellation, PersistenceError> {
        self.conn
            .transaction::<SeriesCancellation, PersistenceError, _>(|conn| {
                let series = queries::series::get_series(conn, series_id)?;
                let court = queries::catalog::get_court(conn, series.court_id)?;
                require_scope(scope_club_id, &court)?;
                if series.status == SeriesStatus::Cancelled {
                    return Err(PersistenceError::RuleViolation(format!(
                        "Series {series_id} is already cancelled"
                    )));
                }

                mutations::series::update_series_status(conn, series_id, SeriesStatus::Cancelled)?;

                let children = queries::reservations::for_series(conn, series_id)?;
                let mut cancelled_occurrence_ids = Vec::new();
                for child in children {
                    if !future_occurrence_filter(&child, now) {
                        continue;
                    }
                    let Some(child_id) = child.reservation_id else {
                        continue;
                    };
                    let plan = plan_cancellation(&child, now).map_err(core_error)?;
                    mutations::reservations::mark_cancelled(conn, child_id, cancelled_by, now)?;
                    if let Some(refund) = plan.refund
                        && let Err(err) = mutations::ledger::insert_movement(conn, &refund)
                    {
                        tracing::warn!(
                            reservation_id = child_id,
                            error = %err,
                            "failed to append refund movement for cancelled occurrence"
                        );
                    }
                    cancelled_occurrence_ids.push(child_id);
                }

                let series = queries::series::get_series(conn, series_id)?;
                Ok(SeriesCancellation {
                    series,
                    cancelled_occurrence_ids,
                })
            })
    }

    // ========================================================================
    // Completion sweep
    // ========================================================================

    /// Flips every active reservation whose interval has fully elapsed
    /// to Completed. Idempotent; returns the IDs that were flipped.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub fn sweep_completed(&mut self, now: DateTime<Utc>) -> Result<Vec<i64>, PersistenceError> {
        self.conn.transaction::<Vec<i64>, PersistenceError, _>(|conn| {
            let ended = queries::reservations::active_ended_by(conn, now)?;
            let ids = completable(&ended, now);
            for &id in &ids {
                mutations::reservations::update_status(conn, id, ReservationStatus::Completed)?;
            }
            Ok(ids)
        })
    }

    // ========================================================================
    // Availability
    // ========================================================================

    /// Computes the free slots on one court for one local calendar day.
    ///
    /// A court under maintenance has no availability.
    ///
    /// # Errors
    ///
    /// Returns `CourtNotFound` / `ActivityNotFound` for unknown
    /// references, or `RuleViolation` for an unresolvable timezone.
    pub fn day_availability(
        &mut self,
        court_id: i64,
        date: NaiveDate,
        activity_id: i64,
        catalog: &SlotCatalog,
        default_tz: &str,
    ) -> Result<Vec<SlotTime>, PersistenceError> {
        let conn = &mut self.conn;
        let court = queries::catalog::get_court(conn, court_id)?;
        if court.maintenance {
            return Ok(Vec::new());
        }
        let activity = queries::catalog::get_activity(conn, activity_id)?;
        let tz = resolve_timezone(&court, default_tz)
            .map_err(|err| PersistenceError::RuleViolation(err.to_string()))?;
        let (day_start, day_end) = local_day_range(date, tz)
            .map_err(|err| PersistenceError::RuleViolation(err.to_string()))?;
        // A late slot can extend past local midnight, so the snapshot
        // reaches one activity length beyond the day.
        let reservations = queries::reservations::active_in_range(
            conn,
            court_id,
            day_start,
            day_end + activity.duration(),
        )?;
        available_slots(court_id, date, &activity, catalog, &reservations, tz)
            .map_err(core_error)
    }

    /// Computes, per slot, which courts of a club are free for one local
    /// calendar day. Slots with no free court are dropped.
    ///
    /// # Errors
    ///
    /// Returns `ClubNotFound` / `ActivityNotFound` for unknown
    /// references, or `RuleViolation` for an unresolvable timezone.
    pub fn club_availability(
        &mut self,
        club_id: i64,
        date: NaiveDate,
        activity_id: i64,
        catalog: &SlotCatalog,
        default_tz: &str,
    ) -> Result<Vec<(SlotTime, Vec<i64>)>, PersistenceError> {
        let conn = &mut self.conn;
        queries::catalog::get_club(conn, club_id)?;
        let activity = queries::catalog::get_activity(conn, activity_id)?;
        let courts = queries::catalog::get_courts_for_club(conn, club_id)?;
        let tz: Tz = default_tz
            .parse()
            .map_err(|_| PersistenceError::RuleViolation(format!("Invalid timezone {default_tz}")))?;
        let (day_start, day_end) = local_day_range(date, tz)
            .map_err(|err| PersistenceError::RuleViolation(err.to_string()))?;
        let court_ids: Vec<i64> = courts.iter().filter_map(|court| court.court_id).collect();
        let reservations = queries::reservations::active_in_range_for_courts(
            conn,
            &court_ids,
            day_start,
            day_end + activity.duration(),
        )?;
        available_slots_across_courts(&courts, date, &activity, catalog, &reservations, tz)
            .map_err(core_error)
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Fetches a reservation by ID.
    ///
    /// # Errors
    ///
    /// Returns `ReservationNotFound` if missing.
    pub fn get_reservation(&mut self, reservation_id: i64) -> Result<Reservation, PersistenceError> {
        queries::reservations::get_reservation(&mut self.conn, reservation_id)
    }

    /// Fetches the active reservations on one court intersecting a range.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn active_reservations_in_range(
        &mut self,
        court_id: i64,
        range_start: DateTime<Utc>,
        range_end: DateTime<Utc>,
    ) -> Result<Vec<Reservation>, PersistenceError> {
        queries::reservations::active_in_range(&mut self.conn, court_id, range_start, range_end)
    }

    /// Fetches a fixed series by ID.
    ///
    /// # Errors
    ///
    /// Returns `SeriesNotFound` if missing.
    pub fn get_series(&mut self, series_id: i64) -> Result<FixedSeries, PersistenceError> {
        queries::series::get_series(&mut self.conn, series_id)
    }

    /// Fetches the occurrences generated by a series.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn series_occurrences(
        &mut self,
        series_id: i64,
    ) -> Result<Vec<Reservation>, PersistenceError> {
        queries::reservations::for_series(&mut self.conn, series_id)
    }

    /// Fetches the ledger movements tied to one reservation.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn movements_for_reservation(
        &mut self,
        reservation_id: i64,
    ) -> Result<Vec<LedgerMovement>, PersistenceError> {
        queries::ledger::for_reservation(&mut self.conn, reservation_id)
    }

    /// Fetches the ledger movements in a date range.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn movements_in_range(
        &mut self,
        range_start: DateTime<Utc>,
        range_end: DateTime<Utc>,
    ) -> Result<Vec<LedgerMovement>, PersistenceError> {
        queries::ledger::in_range(&mut self.conn, range_start, range_end)
    }

    /// Fetches a club by ID.
    ///
    /// # Errors
    ///
    /// Returns `ClubNotFound` if missing.
    pub fn get_club(&mut self, club_id: i64) -> Result<Club, PersistenceError> {
        queries::catalog::get_club(&mut self.conn, club_id)
    }

    /// Fetches a court by ID.
    ///
    /// # Errors
    ///
    /// Returns `CourtNotFound` if missing.
    pub fn get_court(&mut self, court_id: i64) -> Result<Court, PersistenceError> {
        queries::catalog::get_court(&mut self.conn, court_id)
    }

    /// Fetches the courts of a club.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn courts_for_club(&mut self, club_id: i64) -> Result<Vec<Court>, PersistenceError> {
        queries::catalog::get_courts_for_club(&mut self.conn, club_id)
    }

    /// Fetches an activity by ID.
    ///
    /// # Errors
    ///
    /// Returns `ActivityNotFound` if missing.
    pub fn get_activity(&mut self, activity_id: i64) -> Result<Activity, PersistenceError> {
        queries::catalog::get_activity(&mut self.conn, activity_id)
    }

    /// Fetches all activities.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_activities(&mut self) -> Result<Vec<Activity>, PersistenceError> {
        queries::catalog::list_activities(&mut self.conn)
    }

    // ========================================================================
    // Seeding
    // ========================================================================

    /// Inserts a club and returns its ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn create_club(&mut self, name: &str) -> Result<i64, PersistenceError> {
        mutations::catalog::insert_club(&mut self.conn, name)
    }

    /// Inserts a court and returns its ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn create_court(
        &mut self,
        club_id: i64,
        name: &str,
        timezone: Option<&str>,
    ) -> Result<i64, PersistenceError> {
        mutations::catalog::insert_court(&mut self.conn, club_id, name, false, timezone)
    }

    /// Toggles the maintenance flag on a court.
    ///
    /// # Errors
    ///
    /// Returns `CourtNotFound` if missing.
    pub fn set_court_maintenance(
        &mut self,
        court_id: i64,
        maintenance: bool,
    ) -> Result<(), PersistenceError> {
        mutations::catalog::set_court_maintenance(&mut self.conn, court_id, maintenance)
    }

    /// Inserts an activity and returns its ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn create_activity(
        &mut self,
        name: &str,
        duration_minutes: i32,
    ) -> Result<i64, PersistenceError> {
        mutations::catalog::insert_activity(&mut self.conn, name, duration_minutes)
    }
}

fn require_bookable(court: &Court) -> Result<(), PersistenceError> {
    if court.maintenance {
        return Err(PersistenceError::RuleViolation(format!(
            "Court {} is under maintenance",
            court.court_id.unwrap_or_default()
        )));
    }
    Ok(())
}

fn require_scope(scope_club_id: Option<i64>, court: &Court) -> Result<(), PersistenceError> {
    if let Some(scope) = scope_club_id
        && scope != court.club_id
    {
        return Err(PersistenceError::Forbidden {
            scope_club_id: scope,
            owning_club_id: court.club_id,
        });
    }
    Ok(())
}

fn recompute_payment_in_tx(
    conn: &mut SqliteConnection,
    reservation_id: i64,
) -> Result<PaymentStatus, PersistenceError> {
    let reservation = queries::reservations::get_reservation(conn, reservation_id)?;
    let collected = queries::ledger::collected_cents(conn, reservation_id)?;
    let status =
        derive_payment_status(reservation.price_cents, reservation.extras_cents, collected);
    mutations::reservations::update_payment_status(conn, reservation_id, status)?;
    Ok(status)
}
