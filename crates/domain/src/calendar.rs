// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Calendar enumeration and day classification.
//!
//! This module turns a planning window into the ordered list of its dates,
//! each tagged as weekend and/or off-day.
//!
//! ## Invariants
//!
//! - Every date from `start` to `end` appears exactly once, in order
//! - Weekend membership comes from the configured `WeekendDays`
//! - Off-day membership is calendar-day equality against the `OffDaySet`
//! - Enumeration is pure; no state survives between builds

use crate::off_days::OffDaySet;
use crate::types::{DayKind, WeekendDays};
use crate::window::PlanningWindow;
use serde::{Deserialize, Serialize};
use time::Date;

/// Iterates over every date in the window, both ends included.
pub fn dates(window: PlanningWindow) -> impl Iterator<Item = Date> {
    let end: Date = window.end();
    std::iter::successors(Some(window.start()), move |current| {
        current.next_day().filter(|next| *next <= end)
    })
}

/// A single classified date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarDay {
    /// The calendar date.
    pub date: Date,
    /// Whether the date's weekday is a configured weekend day.
    pub is_weekend: bool,
    /// Whether the date is a holiday or company off-day.
    pub is_off_day: bool,
}

impl CalendarDay {
    /// Resolves the day kind (holiday before weekend before workday).
    #[must_use]
    pub const fn kind(&self) -> DayKind {
        if self.is_off_day {
            DayKind::Holiday
        } else if self.is_weekend {
            DayKind::Weekend
        } else {
            DayKind::Workday
        }
    }

    /// Returns whether taking this day off costs a leave day.
    #[must_use]
    pub const fn is_workday(&self) -> bool {
        !self.is_off_day && !self.is_weekend
    }
}

/// The classified calendar of a planning window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Calendar {
    window: PlanningWindow,
    weekend: WeekendDays,
    off_days: OffDaySet,
    days: Vec<CalendarDay>,
}

impl Calendar {
    /// Enumerates and classifies every date of `window`.
    ///
    /// # Arguments
    ///
    /// * `window` - The planning window
    /// * `off_days` - Holidays and company off-days
    /// * `weekend` - The weekend day set
    #[must_use]
    pub fn build(window: PlanningWindow, off_days: &OffDaySet, weekend: WeekendDays) -> Self {
        let days: Vec<CalendarDay> = dates(window)
            .map(|date| CalendarDay {
                date,
                is_weekend: weekend.contains(date.weekday()),
                is_off_day: off_days.contains(date),
            })
            .collect();

        Self {
            window,
            weekend,
            off_days: off_days.clone(),
            days,
        }
    }

    /// Returns the planning window.
    #[must_use]
    pub const fn window(&self) -> PlanningWindow {
        self.window
    }

    /// Returns the off-day set the calendar was classified with.
    #[must_use]
    pub const fn off_days(&self) -> &OffDaySet {
        &self.off_days
    }

    /// Returns all classified days in date order.
    #[must_use]
    pub fn days(&self) -> &[CalendarDay] {
        &self.days
    }

    /// Looks up the classified day for `date`, if it is inside the window.
    #[must_use]
    pub fn day(&self, date: Date) -> Option<&CalendarDay> {
        self.window
            .offset_of(date)
            .and_then(|offset| self.days.get(offset))
    }

    /// Returns the classified days from `start` to `end` inclusive.
    ///
    /// Bounds are clamped to the window; an inverted or disjoint range
    /// yields an empty slice.
    #[must_use]
    pub fn span(&self, start: Date, end: Date) -> &[CalendarDay] {
        let start: Date = start.max(self.window.start());
        let end: Date = end.min(self.window.end());
        match (self.window.offset_of(start), self.window.offset_of(end)) {
            (Some(from), Some(to)) if from <= to => &self.days[from..=to],
            _ => &[],
        }
    }

    /// Returns whether `date` falls on a weekend day.
    ///
    /// Works for dates outside the window too, since it only looks at the
    /// day of the week.
    #[must_use]
    pub fn is_weekend(&self, date: Date) -> bool {
        self.weekend.contains(date.weekday())
    }

    /// Returns the number of days in the window.
    #[must_use]
    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// Returns whether the calendar has no days.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Returns the number of weekend days in the window.
    #[must_use]
    pub fn weekend_day_count(&self) -> usize {
        self.days.iter().filter(|day| day.is_weekend).count()
    }

    /// Returns the number of distinct off-days inside the window.
    #[must_use]
    pub fn off_day_count(&self) -> usize {
        self.days.iter().filter(|day| day.is_off_day).count()
    }

    /// Returns the number of national holidays inside the window.
    #[must_use]
    pub fn holiday_count(&self) -> usize {
        self.off_days
            .holidays()
            .iter()
            .filter(|date| self.window.contains(**date))
            .count()
    }

    /// Returns the number of company off-days inside the window.
    #[must_use]
    pub fn company_off_day_count(&self) -> usize {
        self.off_days
            .company_off_days()
            .iter()
            .filter(|date| self.window.contains(**date))
            .count()
    }
}
