// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Opportunity finders.
//!
//! Each finder scans a classified calendar and returns candidate periods in
//! discovery order. Finders never allocate; ranking and budget checks belong
//! to the allocator.

mod bridges;
mod mini_breaks;
mod weekends;

pub use bridges::{MAX_BRIDGE_GAP, find_holiday_bridges};
pub use mini_breaks::{MINI_BREAK_LENGTH, find_mini_breaks};
pub use weekends::find_weekend_extensions;

use time::Date;

/// Which way a scan walks from its starting date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Backward,
    Forward,
}

impl Direction {
    /// Returns the neighbouring date in this direction.
    fn step(self, date: Date) -> Option<Date> {
        match self {
            Self::Backward => date.previous_day(),
            Self::Forward => date.next_day(),
        }
    }

    /// Orders two dates as `(start, end)` for a span walked in this direction.
    const fn span(self, origin: Date, reach: Date) -> (Date, Date) {
        match self {
            Self::Backward => (reach, origin),
            Self::Forward => (origin, reach),
        }
    }
}
