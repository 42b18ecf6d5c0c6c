// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Diesel row structs and conversions to and from domain types.
//!
//! Statuses, methods, and weekdays are stored as their canonical string
//! forms; timestamps as UTC RFC 3339 `Z` strings. Parse failures surface
//! as `PersistenceError::CorruptRow` rather than panicking.

use diesel::prelude::*;

use courtside_domain::{
    Activity, Club, Court, FixedSeries, GuestDetails, Holder, LedgerMovement, Reservation,
    parse_instant,
};

use crate::diesel_schema::{
    activities, clubs, courts, fixed_series, ledger_movements, reservations,
};
use crate::error::PersistenceError;

fn corrupt(table: &'static str, detail: impl std::fmt::Display) -> PersistenceError {
    PersistenceError::CorruptRow {
        table,
        detail: detail.to_string(),
    }
}

// ============================================================================
// Clubs / courts / activities
// ============================================================================

#[derive(Queryable, Selectable)]
#[diesel(table_name = clubs)]
pub struct ClubRow {
    pub club_id: i64,
    pub name: String,
}

impl From<ClubRow> for Club {
    fn from(row: ClubRow) -> Self {
        Self {
            club_id: Some(row.club_id),
            name: row.name,
        }
    }
}

#[derive(Insertable)]
#[diesel(table_name = clubs)]
pub struct NewClubRow<'a> {
    pub name: &'a str,
}

#[derive(Queryable, Selectable)]
#[diesel(table_name = courts)]
pub struct CourtRow {
    pub court_id: i64,
    pub club_id: i64,
    pub name: String,
    pub maintenance: i32,
    pub timezone: Option<String>,
}

impl From<CourtRow> for Court {
    fn from(row: CourtRow) -> Self {
        Self {
            court_id: Some(row.court_id),
            club_id: row.club_id,
            name: row.name,
            maintenance: row.maintenance != 0,
            timezone: row.timezone,
        }
    }
}

#[derive(Insertable)]
#[diesel(table_name = courts)]
pub struct NewCourtRow<'a> {
    pub club_id: i64,
    pub name: &'a str,
    pub maintenance: i32,
    pub timezone: Option<&'a str>,
}

#[derive(Queryable, Selectable)]
#[diesel(table_name = activities)]
pub struct ActivityRow {
    pub activity_id: i64,
    pub name: String,
    pub duration_minutes: i32,
}

impl TryFrom<ActivityRow> for Activity {
    type Error = PersistenceError;

    fn try_from(row: ActivityRow) -> Result<Self, Self::Error> {
        let duration = u32::try_from(row.duration_minutes)
            .map_err(|_| corrupt("activities", format!("duration {}", row.duration_minutes)))?;
        Self::with_id(row.activity_id, row.name, duration)
            .map_err(|err| corrupt("activities", err))
    }
}

#[derive(Insertable)]
#[diesel(table_name = activities)]
pub struct NewActivityRow<'a> {
    pub name: &'a str,
    pub duration_minutes: i32,
}

// ============================================================================
// Holder columns (shared by reservations and fixed series)
// ============================================================================

pub struct HolderColumns {
    pub member_id: Option<i64>,
    pub guest_name: Option<String>,
    pub guest_email: Option<String>,
    pub guest_phone: Option<String>,
    pub guest_document: Option<String>,
}

pub fn holder_to_columns(holder: &Holder) -> HolderColumns {
    match holder {
        Holder::Member(member_id) => HolderColumns {
            member_id: Some(*member_id),
            guest_name: None,
            guest_email: None,
            guest_phone: None,
            guest_document: None,
        },
        Holder::Guest(guest) => HolderColumns {
            member_id: None,
            guest_name: Some(guest.name.clone()),
            guest_email: guest.email.clone(),
            guest_phone: guest.phone.clone(),
            guest_document: guest.document.clone(),
        },
    }
}

pub fn holder_from_columns(
    table: &'static str,
    member_id: Option<i64>,
    guest_name: Option<String>,
    guest_email: Option<String>,
    guest_phone: Option<String>,
    guest_document: Option<String>,
) -> Result<Holder, PersistenceError> {
    match (member_id, guest_name) {
        (Some(member_id), None) => Ok(Holder::Member(member_id)),
        (None, Some(name)) => Ok(Holder::Guest(GuestDetails {
            name,
            email: guest_email,
            phone: guest_phone,
            document: guest_document,
        })),
        (Some(_), Some(_)) => Err(corrupt(table, "both member and guest holder set")),
        (None, None) => Err(corrupt(table, "no holder set")),
    }
}

// ============================================================================
// Reservations
// ============================================================================

#[derive(Queryable, Selectable)]
#[diesel(table_name = reservations)]
pub struct ReservationRow {
    pub reservation_id: i64,
    pub court_id: i64,
    pub activity_id: i64,
    pub starts_at: String,
    pub ends_at: String,
    pub price_cents: i64,
    pub extras_cents: i64,
    pub status: String,
    pub payment_status: String,
    pub member_id: Option<i64>,
    pub guest_name: Option<String>,
    pub guest_email: Option<String>,
    pub guest_phone: Option<String>,
    pub guest_document: Option<String>,
    pub series_id: Option<i64>,
    pub created_at: String,
    pub cancelled_by: Option<String>,
    pub cancelled_at: Option<String>,
}

impl TryFrom<ReservationRow> for Reservation {
    type Error = PersistenceError;

    fn try_from(row: ReservationRow) -> Result<Self, Self::Error> {
        let holder = holder_from_columns(
            "reservations",
            row.member_id,
            row.guest_name,
            row.guest_email,
            row.guest_phone,
            row.guest_document,
        )?;
        let starts_at =
            parse_instant(&row.starts_at).map_err(|err| corrupt("reservations", err))?;
        let ends_at = parse_instant(&row.ends_at).map_err(|err| corrupt("reservations", err))?;
        let created_at =
            parse_instant(&row.created_at).map_err(|err| corrupt("reservations", err))?;
        let cancelled_at = row
            .cancelled_at
            .as_deref()
            .map(parse_instant)
            .transpose()
            .map_err(|err| corrupt("reservations", err))?;
        let status = row
            .status
            .parse()
            .map_err(|err| corrupt("reservations", err))?;
        let payment_status = row
            .payment_status
            .parse()
            .map_err(|err| corrupt("reservations", err))?;

        Ok(Self::from_stored(
            row.reservation_id,
            row.court_id,
            row.activity_id,
            starts_at,
            ends_at,
            row.price_cents,
            row.extras_cents,
            status,
            payment_status,
            holder,
            row.series_id,
            created_at,
            row.cancelled_by,
            cancelled_at,
        ))
    }
}

#[derive(Insertable)]
#[diesel(table_name = reservations)]
pub struct NewReservationRow {
    pub court_id: i64,
    pub activity_id: i64,
    pub starts_at: String,
    pub ends_at: String,
    pub price_cents: i64,
    pub extras_cents: i64,
    pub status: String,
    pub payment_status: String,
    pub member_id: Option<i64>,
    pub guest_name: Option<String>,
    pub guest_email: Option<String>,
    pub guest_phone: Option<String>,
    pub guest_document: Option<String>,
    pub series_id: Option<i64>,
    pub created_at: String,
}

impl NewReservationRow {
    pub fn from_domain(reservation: &Reservation) -> Self {
        let holder = holder_to_columns(&reservation.holder);
        Self {
            court_id: reservation.court_id,
            activity_id: reservation.activity_id,
            starts_at: courtside_domain::format_instant(reservation.starts_at),
            ends_at: courtside_domain::format_instant(reservation.ends_at()),
            price_cents: reservation.price_cents,
            extras_cents: reservation.extras_cents,
            status: reservation.status.as_str().to_string(),
            payment_status: reservation.payment_status.as_str().to_string(),
            member_id: holder.member_id,
            guest_name: holder.guest_name,
            guest_email: holder.guest_email,
            guest_phone: holder.guest_phone,
            guest_document: holder.guest_document,
            series_id: reservation.series_id,
            created_at: courtside_domain::format_instant(reservation.created_at),
        }
    }
}

// ============================================================================
// Fixed series
// ============================================================================

#[derive(Queryable, Selectable)]
#[diesel(table_name = fixed_series)]
pub struct SeriesRow {
    pub series_id: i64,
    pub court_id: i64,
    pub activity_id: i64,
    pub starts_on: String,
    pub weekday: String,
    pub start_time: String,
    pub end_time: String,
    pub status: String,
    pub member_id: Option<i64>,
    pub guest_name: Option<String>,
    pub guest_email: Option<String>,
    pub guest_phone: Option<String>,
    pub guest_document: Option<String>,
}

impl TryFrom<SeriesRow> for FixedSeries {
    type Error = PersistenceError;

    fn try_from(row: SeriesRow) -> Result<Self, Self::Error> {
        let holder = holder_from_columns(
            "fixed_series",
            row.member_id,
            row.guest_name,
            row.guest_email,
            row.guest_phone,
            row.guest_document,
        )?;
        let starts_on: chrono::NaiveDate = row
            .starts_on
            .parse()
            .map_err(|_| corrupt("fixed_series", format!("starts_on {}", row.starts_on)))?;
        let weekday: chrono::Weekday = row
            .weekday
            .parse()
            .map_err(|_| corrupt("fixed_series", format!("weekday {}", row.weekday)))?;
        let start_time: chrono::NaiveTime = row
            .start_time
            .parse()
            .map_err(|_| corrupt("fixed_series", format!("start_time {}", row.start_time)))?;
        let end_time: chrono::NaiveTime = row
            .end_time
            .parse()
            .map_err(|_| corrupt("fixed_series", format!("end_time {}", row.end_time)))?;
        let status = row
            .status
            .parse()
            .map_err(|err| corrupt("fixed_series", err))?;

        Ok(Self {
            series_id: Some(row.series_id),
            court_id: row.court_id,
            activity_id: row.activity_id,
            starts_on,
            weekday,
            start_time,
            end_time,
            status,
            holder,
        })
    }
}

#[derive(Insertable)]
#[diesel(table_name = fixed_series)]
pub struct NewSeriesRow {
    pub court_id: i64,
    pub activity_id: i64,
    pub starts_on: String,
    pub weekday: String,
    pub start_time: String,
    pub end_time: String,
    pub status: String,
    pub member_id: Option<i64>,
    pub guest_name: Option<String>,
    pub guest_email: Option<String>,
    pub guest_phone: Option<String>,
    pub guest_document: Option<String>,
}

impl NewSeriesRow {
    pub fn from_domain(series: &FixedSeries) -> Self {
        let holder = holder_to_columns(&series.holder);
        Self {
            court_id: series.court_id,
            activity_id: series.activity_id,
            starts_on: series.starts_on.to_string(),
            weekday: series.weekday.to_string(),
            start_time: series.start_time.format("%H:%M:%S").to_string(),
            end_time: series.end_time.format("%H:%M:%S").to_string(),
            status: series.status.as_str().to_string(),
            member_id: holder.member_id,
            guest_name: holder.guest_name,
            guest_email: holder.guest_email,
            guest_phone: holder.guest_phone,
            guest_document: holder.guest_document,
        }
    }
}

// ============================================================================
// Ledger movements
// ============================================================================

#[derive(Queryable, Selectable)]
#[diesel(table_name = ledger_movements)]
pub struct MovementRow {
    pub movement_id: i64,
    pub occurred_at: String,
    pub direction: String,
    pub amount_cents: i64,
    pub method: String,
    pub description: String,
    pub reservation_id: Option<i64>,
}

impl TryFrom<MovementRow> for LedgerMovement {
    type Error = PersistenceError;

    fn try_from(row: MovementRow) -> Result<Self, Self::Error> {
        let occurred_at =
            parse_instant(&row.occurred_at).map_err(|err| corrupt("ledger_movements", err))?;
        let direction = row
            .direction
            .parse()
            .map_err(|err| corrupt("ledger_movements", err))?;
        let method = row
            .method
            .parse()
            .map_err(|err| corrupt("ledger_movements", err))?;

        Ok(Self::from_stored(
            row.movement_id,
            occurred_at,
            direction,
            row.amount_cents,
            method,
            row.description,
            row.reservation_id,
        ))
    }
}

#[derive(Insertable)]
#[diesel(table_name = ledger_movements)]
pub struct NewMovementRow {
    pub occurred_at: String,
    pub direction: String,
    pub amount_cents: i64,
    pub method: String,
    pub description: String,
    pub reservation_id: Option<i64>,
}

impl NewMovementRow {
    pub fn from_domain(movement: &LedgerMovement) -> Self {
        Self {
            occurred_at: courtside_domain::format_instant(movement.occurred_at),
            direction: movement.direction.as_str().to_string(),
            amount_cents: movement.amount_cents(),
            method: movement.method.as_str().to_string(),
            description: movement.description.clone(),
            reservation_id: movement.reservation_id,
        }
    }
}
