// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use chrono::{DateTime, Utc};

/// Errors that can occur during persistence operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersistenceError {
    /// A database error occurred.
    DatabaseError(String),
    /// Database connection failed.
    DatabaseConnectionFailed(String),
    /// Database migration failed.
    MigrationFailed(String),
    /// Foreign key enforcement is not enabled.
    ForeignKeyEnforcementNotEnabled,
    /// The requested club was not found.
    ClubNotFound(i64),
    /// The requested court was not found.
    CourtNotFound(i64),
    /// The requested activity was not found.
    ActivityNotFound(i64),
    /// The requested reservation was not found.
    ReservationNotFound(i64),
    /// The requested series was not found.
    SeriesNotFound(i64),
    /// The caller's club scope does not cover the targeted court.
    Forbidden {
        /// The club the actor is scoped to.
        scope_club_id: i64,
        /// The club owning the targeted court.
        owning_club_id: i64,
    },
    /// The requested interval is taken: the core overlap invariant would
    /// be violated. The caller may retry with a different interval.
    SlotTaken {
        /// The court on which the conflict occurred.
        court_id: i64,
        /// Start of the conflicting reservation.
        conflicting_start: DateTime<Utc>,
        /// End of the conflicting reservation.
        conflicting_end: DateTime<Utc>,
    },
    /// An active series already blocks the requested weekly range.
    SeriesTaken {
        /// The court on which the conflict occurred.
        court_id: i64,
        /// The blocking series.
        blocking_series_id: i64,
    },
    /// A lifecycle or validation rule was violated.
    RuleViolation(String),
    /// A stored row failed to parse back into its domain type.
    CorruptRow {
        /// The table the row came from.
        table: &'static str,
        /// What failed to parse.
        detail: String,
    },
}

impl std::fmt::Display for PersistenceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DatabaseError(msg) => write!(f, "Database error: {msg}"),
            Self::DatabaseConnectionFailed(msg) => {
                write!(f, "Database connection failed: {msg}")
            }
            Self::MigrationFailed(msg) => write!(f, "Migration failed: {msg}"),
            Self::ForeignKeyEnforcementNotEnabled => {
                write!(f, "Foreign key enforcement is not enabled")
            }
            Self::ClubNotFound(id) => write!(f, "Club {id} not found"),
            Self::CourtNotFound(id) => write!(f, "Court {id} not found"),
            Self::ActivityNotFound(id) => write!(f, "Activity {id} not found"),
            Self::ReservationNotFound(id) => write!(f, "Reservation {id} not found"),
            Self::SeriesNotFound(id) => write!(f, "Series {id} not found"),
            Self::Forbidden {
                scope_club_id,
                owning_club_id,
            } => {
                write!(
                    f,
                    "Actor scoped to club {scope_club_id} cannot act on club {owning_club_id}"
                )
            }
            Self::SlotTaken {
                court_id,
                conflicting_start,
                conflicting_end,
            } => {
                write!(
                    f,
                    "Slot taken on court {court_id}: overlaps reservation {conflicting_start}..{conflicting_end}"
                )
            }
            Self::SeriesTaken {
                court_id,
                blocking_series_id,
            } => {
                write!(
                    f,
                    "Series slot taken on court {court_id}: blocked by series {blocking_series_id}"
                )
            }
            Self::RuleViolation(msg) => write!(f, "Rule violation: {msg}"),
            Self::CorruptRow { table, detail } => {
                write!(f, "Corrupt row in {table}: {detail}")
            }
        }
    }
}

impl std::error::Error for PersistenceError {}

impl From<diesel::result::Error> for PersistenceError {
    fn from(err: diesel::result::Error) -> Self {
        Self::DatabaseError(err.to_string())
    }
}

impl From<diesel::ConnectionError> for PersistenceError {
    fn from(err: diesel::ConnectionError) -> Self {
        Self::DatabaseConnectionFailed(err.to_string())
    }
}
