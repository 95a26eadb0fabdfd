// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Result assembly: vacation periods and the final schedule.

use crate::opportunity::{Opportunity, OpportunityKind};
use leave_planner_domain::{Calendar, DayKind, PlanningWindow, VacationStyle};
use serde::{Deserialize, Serialize};
use time::Date;

/// One recommended stretch of consecutive days off.
///
/// Every date of the span is counted exactly once, as a holiday, a weekend
/// day or a leave day (in that order of precedence), so
/// `total_days == leave_days_used + weekend_days + holiday_days`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VacationPeriod {
    /// First day off (inclusive).
    pub start: Date,
    /// Last day off (inclusive).
    pub end: Date,
    /// Days in the span.
    pub total_days: u32,
    /// Workdays in the span, each costing one leave day.
    pub leave_days_used: u32,
    /// Weekend days in the span that are not off-days.
    pub weekend_days: u32,
    /// Holidays and company off-days in the span.
    pub holiday_days: u32,
    /// Days off per leave day (total days when no leave is used).
    pub efficiency: f64,
    /// Why the period was recommended.
    pub kind: OpportunityKind,
}

impl VacationPeriod {
    /// Builds a period by classifying every date from `start` to `end`.
    #[must_use]
    pub fn from_span(calendar: &Calendar, start: Date, end: Date, kind: OpportunityKind) -> Self {
        let mut leave_days_used: u32 = 0;
        let mut weekend_days: u32 = 0;
        let mut holiday_days: u32 = 0;

        for day in calendar.span(start, end) {
            match day.kind() {
                DayKind::Holiday => holiday_days += 1,
                DayKind::Weekend => weekend_days += 1,
                DayKind::Workday => leave_days_used += 1,
            }
        }

        let total_days: u32 = leave_days_used + weekend_days + holiday_days;
        let efficiency: f64 = if leave_days_used == 0 {
            f64::from(total_days)
        } else {
            f64::from(total_days) / f64::from(leave_days_used)
        };

        Self {
            start,
            end,
            total_days,
            leave_days_used,
            weekend_days,
            holiday_days,
            efficiency,
            kind,
        }
    }

    /// Returns whether `date` falls inside the period.
    #[must_use]
    pub fn contains(&self, date: Date) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Window-wide counts, independent of what was scheduled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleMetadata {
    /// Days in the planning window.
    pub total_days_in_range: u32,
    /// Weekend days in the planning window.
    pub weekend_day_count: u32,
    /// Distinct off-days (holidays and company off-days) in the window.
    pub holiday_day_count: u32,
    /// National holidays in the window.
    pub national_holiday_count: u32,
    /// Company off-days in the window.
    pub company_off_day_count: u32,
}

impl ScheduleMetadata {
    /// Collects window-wide counts from the calendar.
    #[must_use]
    pub fn from_calendar(calendar: &Calendar) -> Self {
        Self {
            total_days_in_range: saturating_u32(calendar.len()),
            weekend_day_count: saturating_u32(calendar.weekend_day_count()),
            holiday_day_count: saturating_u32(calendar.off_day_count()),
            national_holiday_count: saturating_u32(calendar.holiday_count()),
            company_off_day_count: saturating_u32(calendar.company_off_day_count()),
        }
    }
}

/// The result of one optimization run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    /// The style the schedule was built for.
    pub style: VacationStyle,
    /// The planning window.
    pub window: PlanningWindow,
    /// The leave-day budget the run started with.
    pub total_leave_budget: u32,
    /// Leave days spent across all periods.
    pub leave_days_used: u32,
    /// Recommended periods, sorted by start date, non-overlapping.
    pub periods: Vec<VacationPeriod>,
    /// Window-wide counts.
    pub metadata: ScheduleMetadata,
}

impl Schedule {
    /// Assembles the schedule from accepted opportunities.
    ///
    /// # Arguments
    ///
    /// * `calendar` - The classified calendar of the run
    /// * `style` - The requested style
    /// * `budget` - The starting leave budget
    /// * `accepted` - Accepted opportunities, in any order
    #[must_use]
    pub fn assemble(
        calendar: &Calendar,
        style: VacationStyle,
        budget: u32,
        accepted: Vec<Opportunity>,
    ) -> Self {
        let mut periods: Vec<VacationPeriod> = accepted
            .into_iter()
            .map(|opportunity| {
                VacationPeriod::from_span(
                    calendar,
                    opportunity.start,
                    opportunity.end,
                    opportunity.kind,
                )
            })
            .collect();
        periods.sort_by_key(|period| period.start);

        let leave_days_used: u32 = periods.iter().map(|period| period.leave_days_used).sum();

        Self {
            style,
            window: calendar.window(),
            total_leave_budget: budget,
            leave_days_used,
            periods,
            metadata: ScheduleMetadata::from_calendar(calendar),
        }
    }

    /// Returns the leave days left unspent.
    #[must_use]
    pub const fn unused_leave_days(&self) -> u32 {
        self.total_leave_budget.saturating_sub(self.leave_days_used)
    }

    /// Returns the days off across all periods.
    #[must_use]
    pub fn total_days_off(&self) -> u32 {
        self.periods.iter().map(|period| period.total_days).sum()
    }

    /// Returns days off per leave day across the whole schedule.
    ///
    /// Zero when no leave was spent.
    #[must_use]
    pub fn overall_efficiency(&self) -> f64 {
        if self.leave_days_used == 0 {
            0.0
        } else {
            f64::from(self.total_days_off()) / f64::from(self.leave_days_used)
        }
    }

    /// Returns whether no period was recommended.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.periods.is_empty()
    }
}

fn saturating_u32(value: usize) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}
