// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Recurrence planning for fixed weekly series.
//!
//! A series is a template; its dated occurrences are ordinary
//! reservations carrying a back-reference. Expansion skips candidate
//! weeks that collide with pre-existing reservations — a gap, not an
//! error — so partial generation is expected and correct.

use crate::error::CoreError;
use chrono::{DateTime, Datelike, Duration, Utc};
use chrono_tz::Tz;
use courtside_domain::{
    Activity, FixedSeries, Holder, Reservation, ReservationStatus, SeriesStatus, overlaps,
    validate_guest,
};

/// Derives a series template from the first occurrence instant.
///
/// Local start/end time-of-day and weekday come from `first_start`
/// rendered in the court's timezone.
///
/// # Errors
///
/// Returns `CoreError::DomainViolation` for guest descriptor problems.
pub fn plan_series(
    holder: Holder,
    court_id: i64,
    activity: &Activity,
    first_start: DateTime<Utc>,
    tz: Tz,
    privileged: bool,
) -> Result<FixedSeries, CoreError> {
    validate_guest(&holder, privileged)?;

    let local_start = first_start.with_timezone(&tz);
    let local_end = local_start + activity.duration();
    Ok(FixedSeries {
        series_id: None,
        court_id,
        activity_id: activity.activity_id.unwrap_or_default(),
        starts_on: local_start.date_naive(),
        weekday: local_start.weekday(),
        start_time: local_start.time(),
        end_time: local_end.time(),
        status: SeriesStatus::Active,
        holder,
    })
}

/// Checks a candidate series against the active series on its court.
///
/// # Errors
///
/// Returns `CoreError::SeriesConflict` if any active series on the same
/// court and weekday overlaps the candidate's local time range.
pub fn check_series_free(
    existing: &[FixedSeries],
    candidate: &FixedSeries,
) -> Result<(), CoreError> {
    for series in existing {
        if series.blocks(candidate) {
            return Err(CoreError::SeriesConflict {
                court_id: candidate.court_id,
                blocking_series_id: series.series_id,
            });
        }
    }
    Ok(())
}

/// The expansion of a series into dated occurrence drafts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OccurrencePlan {
    /// Drafts to insert, already `Confirmed`, in chronological order.
    pub drafts: Vec<Reservation>,
    /// Start instants skipped because of pre-existing conflicts.
    pub skipped: Vec<DateTime<Utc>>,
}

/// Expands a series into up to `weeks` weekly occurrence drafts.
///
/// Each candidate week is checked against the reservation snapshot;
/// conflicting weeks are recorded as gaps. Callers must not assume
/// `weeks` drafts exist — the plan reports what it skipped.
///
/// # Errors
///
/// Returns `CoreError::DomainViolation` if a draft cannot be constructed
/// (negative price).
pub fn plan_occurrences(
    series: &FixedSeries,
    activity: &Activity,
    first_start: DateTime<Utc>,
    weeks: u32,
    existing: &[Reservation],
    price_cents: i64,
    now: DateTime<Utc>,
) -> Result<OccurrencePlan, CoreError> {
    let mut drafts = Vec::with_capacity(weeks as usize);
    let mut skipped = Vec::new();

    for week in 0..weeks {
        let starts_at = first_start + Duration::weeks(i64::from(week));
        let ends_at = starts_at + activity.duration();

        let conflicts = existing.iter().any(|reservation| {
            reservation.court_id == series.court_id
                && reservation.is_active()
                && overlaps(starts_at, ends_at, reservation.starts_at, reservation.ends_at())
        });
        if conflicts {
            skipped.push(starts_at);
            continue;
        }

        let mut draft = Reservation::new(
            series.court_id,
            activity,
            starts_at,
            price_cents,
            ReservationStatus::Confirmed,
            series.holder.clone(),
            now,
        )
        .map_err(CoreError::DomainViolation)?;
        draft.series_id = series.series_id;
        drafts.push(draft);
    }

    Ok(OccurrencePlan { drafts, skipped })
}

/// Selects the child occurrences a series cancellation should flip:
/// still active and strictly in the future. Past and in-progress
/// occurrences stay untouched.
#[must_use]
pub fn future_occurrence_filter(reservation: &Reservation, now: DateTime<Utc>) -> bool {
    reservation.is_active() && reservation.starts_at > now
}
