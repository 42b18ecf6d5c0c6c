// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

diesel::table! {
    clubs (club_id) {
        club_id -> BigInt,
        name -> Text,
    }
}

diesel::table! {
    courts (court_id) {
        court_id -> BigInt,
        club_id -> BigInt,
        name -> Text,
        maintenance -> Integer,
        timezone -> Nullable<Text>,
    }
}

diesel::table! {
    activities (activity_id) {
        activity_id -> BigInt,
        name -> Text,
        duration_minutes -> Integer,
    }
}

diesel::table! {
    fixed_series (series_id) {
        series_id -> BigInt,
        court_id -> BigInt,
        activity_id -> BigInt,
        starts_on -> Text,
        weekday -> Text,
        start_time -> Text,
        end_time -> Text,
        status -> Text,
        member_id -> Nullable<BigInt>,
        guest_name -> Nullable<Text>,
        guest_email -> Nullable<Text>,
        guest_phone -> Nullable<Text>,
        guest_document -> Nullable<Text>,
    }
}

diesel::table! {
    reservations (reservation_id) {
        reservation_id -> BigInt,
        court_id -> BigInt,
        activity_id -> BigInt,
        starts_at -> Text,
        ends_at -> Text,
        price_cents -> BigInt,
        extras_cents -> BigInt,
        status -> Text,
        payment_status -> Text,
        member_id -> Nullable<BigInt>,
        guest_name -> Nullable<Text>,
        guest_email -> Nullable<Text>,
        guest_phone -> Nullable<Text>,
        guest_document -> Nullable<Text>,
        series_id -> Nullable<BigInt>,
        created_at -> Text,
        cancelled_by -> Nullable<Text>,
        cancelled_at -> Nullable<Text>,
    }
}

diesel::table! {
    ledger_movements (movement_id) {
        movement_id -> BigInt,
        occurred_at -> Text,
        direction -> Text,
        amount_cents -> BigInt,
        method -> Text,
        description -> Text,
        reservation_id -> Nullable<BigInt>,
    }
}

diesel::joinable!(courts -> clubs (club_id));
diesel::joinable!(reservations -> courts (court_id));
diesel::joinable!(reservations -> activities (activity_id));
diesel::joinable!(fixed_series -> courts (court_id));
diesel::joinable!(fixed_series -> activities (activity_id));
diesel::joinable!(ledger_movements -> reservations (reservation_id));

diesel::allow_tables_to_appear_in_same_query!(
    clubs,
    courts,
    activities,
    fixed_series,
    reservations,
    ledger_movements,
);
