// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use chrono::{DateTime, Utc};
use courtside_domain::DomainError;

/// Errors produced by the scheduling engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A domain rule was violated.
    DomainViolation(DomainError),
    /// The requested start instant is in the past.
    BookingInPast {
        /// The requested start.
        starts_at: DateTime<Utc>,
        /// The reference "now".
        now: DateTime<Utc>,
    },
    /// The requested start is beyond the advance booking window.
    BookingTooFarAhead {
        /// The configured window in days.
        max_advance_days: u32,
    },
    /// The requested interval conflicts with an existing reservation.
    SlotConflict {
        /// The court on which the conflict occurred.
        court_id: i64,
        /// Start of the conflicting existing reservation.
        conflicting_start: DateTime<Utc>,
        /// End of the conflicting existing reservation.
        conflicting_end: DateTime<Utc>,
    },
    /// The requested series conflicts with an existing active series.
    SeriesConflict {
        /// The court on which the conflict occurred.
        court_id: i64,
        /// The identifier of the blocking series, if persisted.
        blocking_series_id: Option<i64>,
    },
    /// The requested lifecycle transition is not permitted.
    InvalidTransition {
        /// The current status.
        from: String,
        /// The requested status.
        to: String,
    },
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainViolation(err) => write!(f, "Domain rule violation: {err}"),
            Self::BookingInPast { starts_at, now } => {
                write!(f, "Cannot book {starts_at}: already past (now {now})")
            }
            Self::BookingTooFarAhead { max_advance_days } => {
                write!(
                    f,
                    "Requested start exceeds the {max_advance_days}-day advance booking window"
                )
            }
            Self::SlotConflict {
                court_id,
                conflicting_start,
                conflicting_end,
            } => {
                write!(
                    f,
                    "Slot conflict on court {court_id}: overlaps reservation {conflicting_start}..{conflicting_end}"
                )
            }
            Self::SeriesConflict {
                court_id,
                blocking_series_id,
            } => match blocking_series_id {
                Some(id) => {
                    write!(f, "Series conflict on court {court_id}: blocked by series {id}")
                }
                None => write!(f, "Series conflict on court {court_id}"),
            },
            Self::InvalidTransition { from, to } => {
                write!(f, "Invalid status transition from {from} to {to}")
            }
        }
    }
}

impl std::error::Error for CoreError {}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}
