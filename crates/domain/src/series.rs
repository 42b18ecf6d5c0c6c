// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::Holder;
use chrono::{NaiveDate, NaiveTime, Weekday};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Lifecycle state of a fixed weekly series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SeriesStatus {
    /// The series is live; its local time range blocks competing series.
    #[default]
    Active,
    /// The series was retired; future occurrences were cancelled with it.
    Cancelled,
}

impl FromStr for SeriesStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Active" => Ok(Self::Active),
            "Cancelled" => Ok(Self::Cancelled),
            _ => Err(DomainError::InvalidStatus(s.to_string())),
        }
    }
}

impl std::fmt::Display for SeriesStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl SeriesStatus {
    /// Converts this status to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Cancelled => "Cancelled",
        }
    }
}

/// A weekly-repeating reservation template.
///
/// A series owns no in-memory collection of its occurrences; children
/// carry a `series_id` back-reference and are found by indexed lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixedSeries {
    /// Canonical numeric identifier assigned by the database.
    pub series_id: Option<i64>,
    /// The court every occurrence books.
    pub court_id: i64,
    /// The booked activity.
    pub activity_id: i64,
    /// First occurrence date (local calendar).
    pub starts_on: NaiveDate,
    /// Day of week every occurrence falls on.
    pub weekday: Weekday,
    /// Local wall-clock start time.
    pub start_time: NaiveTime,
    /// Local wall-clock end time (start + activity duration).
    pub end_time: NaiveTime,
    /// Lifecycle status.
    pub status: SeriesStatus,
    /// The member or guest holding the series.
    pub holder: Holder,
}

impl FixedSeries {
    /// Returns whether this series blocks competing series: same court,
    /// same weekday, overlapping local time range, both active.
    #[must_use]
    pub fn blocks(&self, other: &Self) -> bool {
        self.status == SeriesStatus::Active
            && other.status == SeriesStatus::Active
            && self.court_id == other.court_id
            && self.weekday == other.weekday
            && crate::overlap::local_overlaps(
                self.start_time,
                self.end_time,
                other.start_time,
                other.end_time,
            )
    }
}
