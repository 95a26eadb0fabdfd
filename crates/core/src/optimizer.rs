// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Optimization entry points.
//!
//! `optimize` validates a request, classifies its calendar and hands off to
//! `plan`. `plan` dispatches on the vacation style, threading a single
//! `Allocation` through every phase of the run.

use crate::allocator::{Allocation, allocate};
use crate::error::CoreError;
use crate::finder::{find_holiday_bridges, find_mini_breaks, find_weekend_extensions};
use crate::opportunity::Opportunity;
use crate::schedule::Schedule;
use leave_planner_domain::{
    Calendar, OffDaySet, PlanningWindow, VacationStyle, WeekendDays, validate_budget,
    validate_window,
};
use time::Date;
use tracing::{debug, info};

/// Share of the budget a balanced mix spends on long weekends, in percent.
///
/// Rounded up; the rest (plus anything the long-weekend phases leave
/// unspent) goes to mini breaks.
pub const LONG_WEEKEND_SHARE_PERCENT: u32 = 60;

/// The engine's input.
///
/// Fields hold raw values; nothing is validated until `optimize` runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptimizationRequest {
    /// Leave days to spend. Must be positive.
    pub leave_days_budget: i64,
    /// First day of the planning window.
    pub window_start: Date,
    /// Last day of the planning window. Must be after `window_start`.
    pub window_end: Date,
    /// National holidays.
    pub holidays: Vec<Date>,
    /// Company-wide off-days.
    pub company_off_days: Vec<Date>,
    /// The requested vacation style.
    pub style: VacationStyle,
    /// Days of the week that are not worked.
    pub weekend_days: WeekendDays,
}

impl OptimizationRequest {
    /// Creates a request with no off-days and the default weekend.
    ///
    /// # Arguments
    ///
    /// * `leave_days_budget` - Leave days to spend
    /// * `window_start` - First day of the planning window
    /// * `window_end` - Last day of the planning window
    /// * `style` - The requested vacation style
    #[must_use]
    pub fn new(
        leave_days_budget: i64,
        window_start: Date,
        window_end: Date,
        style: VacationStyle,
    ) -> Self {
        Self {
            leave_days_budget,
            window_start,
            window_end,
            holidays: Vec::new(),
            company_off_days: Vec::new(),
            style,
            weekend_days: WeekendDays::default(),
        }
    }

    /// Sets the national holidays.
    #[must_use]
    pub fn with_holidays<I>(mut self, holidays: I) -> Self
    where
        I: IntoIterator<Item = Date>,
    {
        self.holidays = holidays.into_iter().collect();
        self
    }

    /// Sets the company off-days.
    #[must_use]
    pub fn with_company_off_days<I>(mut self, company_off_days: I) -> Self
    where
        I: IntoIterator<Item = Date>,
    {
        self.company_off_days = company_off_days.into_iter().collect();
        self
    }

    /// Sets the weekend day set.
    #[must_use]
    pub const fn with_weekend_days(mut self, weekend_days: WeekendDays) -> Self {
        self.weekend_days = weekend_days;
        self
    }
}

/// Validates a request and computes its schedule.
///
/// # Arguments
///
/// * `request` - The optimization request
///
/// # Returns
///
/// * `Ok(Schedule)` with the recommended periods (possibly none)
/// * `Err(CoreError)` if the request is invalid
///
/// # Errors
///
/// Returns an error if:
/// - The budget is zero or negative
/// - The window start is not strictly before the window end
pub fn optimize(request: &OptimizationRequest) -> Result<Schedule, CoreError> {
    let budget: u32 = validate_budget(request.leave_days_budget)?;
    let window: PlanningWindow = validate_window(request.window_start, request.window_end)?;

    let off_days: OffDaySet = OffDaySet::new(
        request.holidays.iter().copied(),
        request.company_off_days.iter().copied(),
    );
    let calendar: Calendar = Calendar::build(window, &off_days, request.weekend_days);

    info!(
        budget,
        style = %request.style,
        start = %window.start(),
        end = %window.end(),
        off_days = calendar.off_day_count(),
        "Optimizing leave schedule"
    );

    let schedule: Schedule = plan(&calendar, budget, request.style);

    info!(
        periods = schedule.periods.len(),
        leave_days_used = schedule.leave_days_used,
        unused = schedule.unused_leave_days(),
        "Leave schedule ready"
    );

    Ok(schedule)
}

/// Computes the schedule for an already-classified calendar.
///
/// Never fails: an empty schedule is a valid outcome.
///
/// # Arguments
///
/// * `calendar` - The classified calendar
/// * `budget` - Leave days to spend
/// * `style` - The requested vacation style
#[must_use]
pub fn plan(calendar: &Calendar, budget: u32, style: VacationStyle) -> Schedule {
    let allocation: Allocation = match style {
        VacationStyle::LongWeekends => {
            let mut allocation: Allocation = Allocation::new(budget);
            long_weekends(&mut allocation, calendar);
            allocation
        }
        VacationStyle::MiniBreaks => {
            let mut allocation: Allocation = Allocation::new(budget);
            mini_breaks(&mut allocation, calendar);
            allocation
        }
        VacationStyle::BalancedMix => balanced(calendar, budget),
    };

    Schedule::assemble(calendar, style, budget, allocation.into_accepted())
}

/// Returns the part of `budget` a balanced mix spends on long weekends.
#[must_use]
pub fn long_weekend_share(budget: u32) -> u32 {
    let share: u64 =
        (u64::from(budget) * u64::from(LONG_WEEKEND_SHARE_PERCENT)).div_ceil(100);
    u32::try_from(share).unwrap_or(budget).min(budget)
}

fn long_weekends(allocation: &mut Allocation, calendar: &Calendar) {
    let bridges: Vec<Opportunity> = find_holiday_bridges(calendar);
    let found: usize = bridges.len();
    let accepted: usize = allocate(allocation, bridges, calendar);
    debug!(found, accepted, remaining = allocation.remaining(), "Holiday bridges allocated");

    if allocation.remaining() == 0 {
        return;
    }

    let extensions: Vec<Opportunity> = find_weekend_extensions(calendar, allocation.consumed());
    let found: usize = extensions.len();
    let accepted: usize = allocate(allocation, extensions, calendar);
    debug!(found, accepted, remaining = allocation.remaining(), "Weekend extensions allocated");
}

fn mini_breaks(allocation: &mut Allocation, calendar: &Calendar) {
    let breaks: Vec<Opportunity> =
        find_mini_breaks(calendar, allocation.remaining(), allocation.consumed());
    let found: usize = breaks.len();
    let accepted: usize = allocate(allocation, breaks, calendar);
    debug!(found, accepted, remaining = allocation.remaining(), "Mini breaks allocated");
}

fn balanced(calendar: &Calendar, budget: u32) -> Allocation {
    let share: u32 = long_weekend_share(budget);
    let mut allocation: Allocation = Allocation::new(share);
    long_weekends(&mut allocation, calendar);

    allocation.grant(budget - share);
    mini_breaks(&mut allocation, calendar);
    allocation
}
