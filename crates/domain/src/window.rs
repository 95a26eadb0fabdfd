// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The inclusive date range a plan is computed over.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use time::Date;

/// An inclusive planning window.
///
/// The window always satisfies `start <= end`; a single-day window is valid.
/// Windows are immutable once constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlanningWindow {
    /// The first date of the window (inclusive).
    start: Date,
    /// The last date of the window (inclusive).
    end: Date,
}

impl PlanningWindow {
    /// Creates a new `PlanningWindow`.
    ///
    /// # Arguments
    ///
    /// * `start` - The first date (inclusive)
    /// * `end` - The last date (inclusive)
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidRange` if `start` is after `end`.
    pub fn new(start: Date, end: Date) -> Result<Self, DomainError> {
        if start > end {
            return Err(DomainError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Returns the first date of the window.
    #[must_use]
    pub const fn start(&self) -> Date {
        self.start
    }

    /// Returns the last date of the window.
    #[must_use]
    pub const fn end(&self) -> Date {
        self.end
    }

    /// Returns the number of days in the window, both ends included.
    #[must_use]
    #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
    pub fn day_count(&self) -> u32 {
        // Non-negative by construction; fits u32 for any representable range.
        ((self.end - self.start).whole_days() + 1) as u32
    }

    /// Returns whether `date` falls inside the window.
    #[must_use]
    pub fn contains(&self, date: Date) -> bool {
        self.start <= date && date <= self.end
    }

    /// Returns the zero-based position of `date` within the window.
    #[must_use]
    #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
    pub fn offset_of(&self, date: Date) -> Option<usize> {
        if self.contains(date) {
            Some((date - self.start).whole_days() as usize)
        } else {
            None
        }
    }
}
