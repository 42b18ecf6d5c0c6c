// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A slot time string was not in `HH:mm` form or out of range.
    InvalidTimeFormat(String),
    /// A timezone identifier could not be resolved.
    InvalidTimezone(String),
    /// A local wall-clock time is ambiguous or skipped (DST transition).
    AmbiguousLocalTime {
        /// The local date being resolved.
        date: chrono::NaiveDate,
        /// The local time being resolved.
        time: chrono::NaiveTime,
        /// The timezone in which resolution was attempted.
        timezone: String,
    },
    /// An activity duration must be a positive number of minutes.
    InvalidDuration(u32),
    /// A monetary amount must be non-negative.
    InvalidAmount(i64),
    /// A guest reservation requires a non-empty guest name.
    MissingGuestName,
    /// A guest reservation requires at least one contact channel.
    MissingGuestContact,
    /// A stored status string did not match any known status.
    InvalidStatus(String),
    /// The slot catalog must contain at least one slot.
    EmptySlotCatalog,
    /// Failed to parse a stored timestamp.
    TimestampParseError(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidTimeFormat(value) => {
                write!(f, "Invalid slot time '{value}': expected HH:mm")
            }
            Self::InvalidTimezone(tz) => write!(f, "Invalid timezone identifier '{tz}'"),
            Self::AmbiguousLocalTime {
                date,
                time,
                timezone,
            } => {
                write!(
                    f,
                    "Local time {date} {time} is ambiguous or non-existent in {timezone}"
                )
            }
            Self::InvalidDuration(minutes) => {
                write!(f, "Invalid activity duration: {minutes} minutes")
            }
            Self::InvalidAmount(cents) => {
                write!(f, "Invalid amount: {cents} cents (must be non-negative)")
            }
            Self::MissingGuestName => write!(f, "Guest reservations require a guest name"),
            Self::MissingGuestContact => {
                write!(f, "Guest reservations require at least one contact channel")
            }
            Self::InvalidStatus(value) => write!(f, "Unknown status '{value}'"),
            Self::EmptySlotCatalog => write!(f, "Slot catalog must not be empty"),
            Self::TimestampParseError(value) => {
                write!(f, "Failed to parse timestamp '{value}'")
            }
        }
    }
}

impl std::error::Error for DomainError {}
