// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Conversion between court-local wall-clock notation and UTC instants.
//!
//! ## Invariants
//!
//! - All persisted timestamps are UTC, rendered RFC 3339 with a `Z`
//!   suffix (fixed width, so lexicographic order equals chronological
//!   order in the database).
//! - Local slot semantics are resolved in the court's declared timezone,
//!   falling back to an explicit process-wide default. Absence of both is
//!   a configuration error at the boundary, never a silent UTC fallback.
//! - DST-ambiguous or skipped local times are rejected, not guessed.

use crate::error::DomainError;
use crate::slots::SlotTime;
use crate::types::Court;
use chrono::{DateTime, NaiveDate, SecondsFormat, TimeZone, Utc};
use chrono_tz::Tz;

/// Resolves the effective timezone for a court.
///
/// # Arguments
///
/// * `court` - The court whose timezone override (if any) applies
/// * `default_tz` - The deployment-wide default IANA identifier
///
/// # Errors
///
/// Returns `DomainError::InvalidTimezone` if the effective identifier
/// does not parse.
pub fn resolve_timezone(court: &Court, default_tz: &str) -> Result<Tz, DomainError> {
    let identifier = court.timezone.as_deref().unwrap_or(default_tz);
    identifier
        .parse()
        .map_err(|_| DomainError::InvalidTimezone(identifier.to_string()))
}

/// Computes the UTC instant range covering a full local calendar day.
///
/// The range is half-open: local midnight of `date` up to local midnight
/// of the following day.
///
/// # Errors
///
/// Returns `DomainError::AmbiguousLocalTime` if either midnight is
/// ambiguous or non-existent in `tz` (rare, but some zones shift at
/// midnight).
pub fn local_day_range(
    date: NaiveDate,
    tz: Tz,
) -> Result<(DateTime<Utc>, DateTime<Utc>), DomainError> {
    let start = local_midnight(date, tz)?;
    let next_day = date
        .succ_opt()
        .ok_or_else(|| DomainError::TimestampParseError(format!("day after {date}")))?;
    let end = local_midnight(next_day, tz)?;
    Ok((start, end))
}

/// Converts a local calendar date plus catalog slot to a UTC instant.
///
/// # Errors
///
/// Returns `DomainError::AmbiguousLocalTime` if the wall-clock time is
/// ambiguous or non-existent in `tz` due to a DST transition.
pub fn local_slot_to_instant(
    date: NaiveDate,
    slot: SlotTime,
    tz: Tz,
) -> Result<DateTime<Utc>, DomainError> {
    let naive = date.and_time(slot.as_naive_time());
    tz.from_local_datetime(&naive)
        .single()
        .map(|local| local.with_timezone(&Utc))
        .ok_or(DomainError::AmbiguousLocalTime {
            date,
            time: slot.as_naive_time(),
            timezone: tz.name().to_string(),
        })
}

/// Formats an instant as the canonical storage string.
///
/// RFC 3339, whole seconds, `Z` suffix: `2026-03-02T08:00:00Z`.
#[must_use]
pub fn format_instant(instant: DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Parses a canonical storage string back into an instant.
///
/// # Errors
///
/// Returns `DomainError::TimestampParseError` on malformed input.
pub fn parse_instant(value: &str) -> Result<DateTime<Utc>, DomainError> {
    DateTime::parse_from_rfc3339(value)
        .map(|parsed| parsed.with_timezone(&Utc))
        .map_err(|_| DomainError::TimestampParseError(value.to_string()))
}

fn local_midnight(date: NaiveDate, tz: Tz) -> Result<DateTime<Utc>, DomainError> {
    let midnight = chrono::NaiveTime::MIN;
    tz.from_local_datetime(&date.and_time(midnight))
        .single()
        .map(|local| local.with_timezone(&Utc))
        .ok_or(DomainError::AmbiguousLocalTime {
            date,
            time: midnight,
            timezone: tz.name().to_string(),
        })
}
