// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The slot catalog: the fixed universe of bookable local start times.
//!
//! All courts share one catalog per deployment. Slot duration is not
//! part of the catalog; it comes from the activity being booked.

use crate::error::DomainError;
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A validated canonical local start time (`HH:mm`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SlotTime {
    hour: u8,
    minute: u8,
}

impl SlotTime {
    /// Creates a new `SlotTime`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidTimeFormat` if the hour is not in
    /// `[0,23]` or the minute is not in `[0,59]`.
    pub fn new(hour: u8, minute: u8) -> Result<Self, DomainError> {
        if hour > 23 || minute > 59 {
            return Err(DomainError::InvalidTimeFormat(format!(
                "{hour:02}:{minute:02}"
            )));
        }
        Ok(Self { hour, minute })
    }

    /// Returns the hour component.
    #[must_use]
    pub const fn hour(&self) -> u8 {
        self.hour
    }

    /// Returns the minute component.
    #[must_use]
    pub const fn minute(&self) -> u8 {
        self.minute
    }

    /// Returns this slot as a `chrono::NaiveTime`.
    #[must_use]
    pub fn as_naive_time(&self) -> NaiveTime {
        // Components are range-checked at construction.
        NaiveTime::from_hms_opt(u32::from(self.hour), u32::from(self.minute), 0)
            .unwrap_or(NaiveTime::MIN)
    }
}

impl FromStr for SlotTime {
    type Err = DomainError;

    /// Parses exactly `HH:mm`: two digits, a colon, two digits.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        if bytes.len() != 5
            || bytes[2] != b':'
            || !bytes[0].is_ascii_digit()
            || !bytes[1].is_ascii_digit()
            || !bytes[3].is_ascii_digit()
            || !bytes[4].is_ascii_digit()
        {
            return Err(DomainError::InvalidTimeFormat(s.to_string()));
        }
        let hour = (bytes[0] - b'0') * 10 + (bytes[1] - b'0');
        let minute = (bytes[3] - b'0') * 10 + (bytes[4] - b'0');
        Self::new(hour, minute).map_err(|_| DomainError::InvalidTimeFormat(s.to_string()))
    }
}

impl std::fmt::Display for SlotTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl TryFrom<String> for SlotTime {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<SlotTime> for String {
    fn from(slot: SlotTime) -> Self {
        slot.to_string()
    }
}

/// An ordered catalog of canonical local start times.
///
/// Configurable per deployment, never per request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotCatalog {
    slots: Vec<SlotTime>,
}

impl SlotCatalog {
    /// Creates a catalog from a list of slots.
    ///
    /// Slots are sorted and de-duplicated so iteration order is always
    /// chronological.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::EmptySlotCatalog` if `slots` is empty.
    pub fn new(mut slots: Vec<SlotTime>) -> Result<Self, DomainError> {
        if slots.is_empty() {
            return Err(DomainError::EmptySlotCatalog);
        }
        slots.sort_unstable();
        slots.dedup();
        Ok(Self { slots })
    }

    /// The standard club catalog: ten starts at 90-minute spacing.
    #[must_use]
    pub fn standard() -> Self {
        let slots = [
            (8, 0),
            (9, 30),
            (11, 0),
            (12, 30),
            (14, 0),
            (15, 30),
            (17, 0),
            (18, 30),
            (20, 0),
            (21, 30),
        ]
        .iter()
        .filter_map(|&(hour, minute)| SlotTime::new(hour, minute).ok())
        .collect();
        // The literal table above is always valid.
        Self { slots }
    }

    /// Parses a catalog from `HH:mm` strings.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidTimeFormat` for any malformed entry,
    /// or `DomainError::EmptySlotCatalog` for an empty list.
    pub fn parse(values: &[String]) -> Result<Self, DomainError> {
        let slots = values
            .iter()
            .map(|value| value.parse())
            .collect::<Result<Vec<SlotTime>, DomainError>>()?;
        Self::new(slots)
    }

    /// Iterates the slots in chronological order.
    pub fn iter(&self) -> std::slice::Iter<'_, SlotTime> {
        self.slots.iter()
    }

    /// Returns the number of slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns whether the catalog is empty (never true after construction).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl<'a> IntoIterator for &'a SlotCatalog {
    type Item = &'a SlotTime;
    type IntoIter = std::slice::Iter<'a, SlotTime>;

    fn into_iter(self) -> Self::IntoIter {
        self.slots.iter()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_slot_time() {
        let slot: SlotTime = "08:00".parse().unwrap();
        assert_eq!(slot.hour(), 8);
        assert_eq!(slot.minute(), 0);
        assert_eq!(slot.to_string(), "08:00");
    }

    #[test]
    fn test_parse_rejects_malformed_strings() {
        for bad in ["8:00", "08:0", "0800", "08-00", "ab:cd", "", "08:00 ", "24:00", "10:60"] {
            assert!(bad.parse::<SlotTime>().is_err(), "accepted {bad:?}");
        }
    }

    #[test]
    fn test_catalog_sorted_and_deduped() {
        let catalog = SlotCatalog::new(vec![
            SlotTime::new(14, 0).unwrap(),
            SlotTime::new(8, 0).unwrap(),
            SlotTime::new(14, 0).unwrap(),
        ])
        .unwrap();
        let rendered: Vec<String> = catalog.iter().map(ToString::to_string).collect();
        assert_eq!(rendered, ["08:00", "14:00"]);
    }

    #[test]
    fn test_catalog_rejects_empty() {
        assert_eq!(
            SlotCatalog::new(Vec::new()).unwrap_err(),
            DomainError::EmptySlotCatalog
        );
    }

    #[test]
    fn test_standard_catalog_has_ten_ordered_slots() {
        let catalog = SlotCatalog::standard();
        assert_eq!(catalog.len(), 10);
        let times: Vec<SlotTime> = catalog.iter().copied().collect();
        let mut sorted = times.clone();
        sorted.sort_unstable();
        assert_eq!(times, sorted);
        assert_eq!(times[0].to_string(), "08:00");
        assert_eq!(times[9].to_string(), "21:30");
    }
}
