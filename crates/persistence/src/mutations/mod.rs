// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Write operations, organized by table group.
//!
//! These functions perform single inserts or updates. Multi-step
//! invariants (overlap re-checks, status recomputation) are composed by
//! the `Persistence` adapter inside Diesel transactions.

pub mod catalog;
pub mod ledger;
pub mod reservations;
pub mod series;
