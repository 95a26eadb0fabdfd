// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::Weekday;

/// The vacation style preference that selects an optimization strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum VacationStyle {
    /// Long weekends first, mini breaks with the rest of the budget.
    #[default]
    BalancedMix,
    /// Bridge holidays to weekends, then extend plain weekends.
    LongWeekends,
    /// Short two-day breaks spread across the window.
    MiniBreaks,
}

impl FromStr for VacationStyle {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "balanced_mix" => Ok(Self::BalancedMix),
            "long_weekends" => Ok(Self::LongWeekends),
            "mini_breaks" => Ok(Self::MiniBreaks),
            _ => Err(DomainError::UnknownStyle(s.to_string())),
        }
    }
}

impl std::fmt::Display for VacationStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl VacationStyle {
    /// All recognized styles, in display order.
    pub const ALL: [Self; 3] = [Self::BalancedMix, Self::LongWeekends, Self::MiniBreaks];

    /// Converts this style to its wire identifier.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::BalancedMix => "balanced_mix",
            Self::LongWeekends => "long_weekends",
            Self::MiniBreaks => "mini_breaks",
        }
    }
}

/// The set of days of the week treated as weekend.
///
/// Indices follow the Sunday-first convention: 0 = Sunday … 6 = Saturday.
/// The set is stored as a 7-bit mask, bit `i` set meaning day `i` is a
/// weekend day. A set always holds at least one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WeekendDays(u8);

impl Default for WeekendDays {
    /// Saturday and Sunday.
    fn default() -> Self {
        Self(0b100_0001)
    }
}

impl WeekendDays {
    /// Builds a weekend set from day-of-week indices.
    ///
    /// Duplicate indices are ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Any index is greater than 6
    /// - No index is given
    pub fn from_indices(indices: &[u8]) -> Result<Self, DomainError> {
        let mut mask: u8 = 0;
        for &index in indices {
            if index > 6 {
                return Err(DomainError::InvalidWeekendDay { index });
            }
            mask |= 1 << index;
        }
        if mask == 0 {
            return Err(DomainError::EmptyWeekend);
        }
        Ok(Self(mask))
    }

    /// Returns whether the given weekday is part of the weekend.
    #[must_use]
    pub const fn contains(&self, weekday: Weekday) -> bool {
        (self.0 >> weekday.number_days_from_sunday()) & 1 != 0
    }

    /// Returns the weekend day indices in ascending order.
    #[must_use]
    pub fn indices(&self) -> Vec<u8> {
        (0..7).filter(|i| (self.0 >> i) & 1 != 0).collect()
    }

    /// Returns the number of weekend days per week.
    #[must_use]
    pub const fn len(&self) -> u32 {
        self.0.count_ones()
    }

    /// Returns whether no day of the week is a weekend day.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }
}

/// Classification of a single calendar date.
///
/// When several apply, the precedence is Holiday, then Weekend, then Workday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DayKind {
    /// A holiday or company off-day.
    Holiday,
    /// A weekend day that is not an off-day.
    Weekend,
    /// A regular working day; taking it off costs one leave day.
    Workday,
}
