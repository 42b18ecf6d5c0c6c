// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Handler orchestration and error mapping tests.

#![allow(clippy::unwrap_used)]

mod handler_tests;

use chrono::{DateTime, TimeZone, Utc};
use courtside::BookingPolicy;
use courtside_domain::SlotCatalog;
use courtside_persistence::Persistence;

use crate::handlers::ApiConfig;
use crate::{AuthenticatedActor, Role};

pub struct Fixture {
    pub store: Persistence,
    pub club_id: i64,
    pub court_id: i64,
    pub activity_id: i64,
}

pub fn fixture() -> Fixture {
    let mut store = Persistence::new_in_memory().unwrap();
    let club_id = store.create_club("Riverside Racquet Club").unwrap();
    let court_id = store.create_court(club_id, "Court 1", None).unwrap();
    let activity_id = store.create_activity("Padel", 90).unwrap();
    Fixture {
        store,
        club_id,
        court_id,
        activity_id,
    }
}

pub fn config() -> ApiConfig {
    ApiConfig {
        default_timezone: String::from("UTC"),
        policy: BookingPolicy {
            max_advance_days: 31,
            default_price_cents: 1500,
        },
        catalog: SlotCatalog::standard(),
    }
}

pub fn admin() -> AuthenticatedActor {
    AuthenticatedActor::new(String::from("front-desk"), Role::Admin)
}

pub fn member_actor() -> AuthenticatedActor {
    AuthenticatedActor::new(String::from("member-42"), Role::Member)
}

pub fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0).unwrap()
}
