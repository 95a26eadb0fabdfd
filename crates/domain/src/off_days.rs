// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Holidays and company off-days merged into one lookup set.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use time::Date;

/// The dates on which no leave is needed to be off work.
///
/// National holidays and company off-days are kept as two sets so that
/// reports can tell them apart, while scheduling treats their union
/// uniformly. Dates are calendar days, so a holiday listed twice (or as
/// both a holiday and a company off-day) counts once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OffDaySet {
    /// National or public holidays.
    holidays: BTreeSet<Date>,
    /// Company-mandated closures.
    company_off_days: BTreeSet<Date>,
}

impl OffDaySet {
    /// Creates an off-day set from holiday and company off-day lists.
    ///
    /// Input order and duplicates do not matter.
    #[must_use]
    pub fn new<H, C>(holidays: H, company_off_days: C) -> Self
    where
        H: IntoIterator<Item = Date>,
        C: IntoIterator<Item = Date>,
    {
        Self {
            holidays: holidays.into_iter().collect(),
            company_off_days: company_off_days.into_iter().collect(),
        }
    }

    /// Returns whether `date` is a holiday or a company off-day.
    #[must_use]
    pub fn contains(&self, date: Date) -> bool {
        self.holidays.contains(&date) || self.company_off_days.contains(&date)
    }

    /// Returns whether `date` is a national holiday.
    #[must_use]
    pub fn is_holiday(&self, date: Date) -> bool {
        self.holidays.contains(&date)
    }

    /// Returns whether `date` is a company off-day.
    #[must_use]
    pub fn is_company_off_day(&self, date: Date) -> bool {
        self.company_off_days.contains(&date)
    }

    /// Returns the national holidays in ascending order.
    #[must_use]
    pub const fn holidays(&self) -> &BTreeSet<Date> {
        &self.holidays
    }

    /// Returns the company off-days in ascending order.
    #[must_use]
    pub const fn company_off_days(&self) -> &BTreeSet<Date> {
        &self.company_off_days
    }

    /// Returns the deduplicated union in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = Date> + '_ {
        self.holidays.union(&self.company_off_days).copied()
    }

    /// Returns the number of distinct off-days.
    #[must_use]
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Returns whether there are no off-days at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.holidays.is_empty() && self.company_off_days.is_empty()
    }
}
