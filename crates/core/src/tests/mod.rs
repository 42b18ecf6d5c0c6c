// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Engine behavior tests over in-memory snapshots.

#![allow(clippy::unwrap_used)]


use chrono::{DateTime, TimeZone, Utc};
use chrono_tz::Tz;
use courtside_domain::{Activity, Holder, Reservation, ReservationStatus};

pub fn padel() -> Activity {
    Activity::with_id(7, String::from("Padel"), 90).unwrap()
}

pub fn madrid() -> Tz {
    "Europe/Madrid".parse().unwrap()
}

pub fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, mo, d, h, mi, 0).unwrap()
}

/// A persisted-looking reservation occupying `[starts_at, starts_at + 90m)`.
pub fn stored_reservation(
    id: i64,
    court_id: i64,
    starts_at: DateTime<Utc>,
    status: ReservationStatus,
) -> Reservation {
    let mut reservation = Reservation::new(
        court_id,
        &padel(),
        starts_at,
        1500,
        status,
        Holder::Member(42),
        starts_at,
    )
    .unwrap();
    reservation.reservation_id = Some(id);
    reservation
}
