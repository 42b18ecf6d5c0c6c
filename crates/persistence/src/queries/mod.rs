// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Read-only query operations, organized by table group.

pub mod catalog;
pub mod ledger;
pub mod reservations;
pub mod series;
