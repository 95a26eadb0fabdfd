// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::Schedule;
use leave_planner_domain::{Calendar, OffDaySet, PlanningWindow, WeekendDays};
use time::Date;

pub fn create_test_calendar(start: Date, end: Date, holidays: &[Date]) -> Calendar {
    create_test_calendar_with_weekend(start, end, holidays, WeekendDays::default())
}

pub fn create_test_calendar_with_weekend(
    start: Date,
    end: Date,
    holidays: &[Date],
    weekend: WeekendDays,
) -> Calendar {
    let window: PlanningWindow = PlanningWindow::new(start, end).unwrap();
    let off_days: OffDaySet = OffDaySet::new(holidays.iter().copied(), Vec::new());
    Calendar::build(window, &off_days, weekend)
}

/// Checks every structural invariant a schedule must satisfy.
pub fn assert_schedule_invariants(schedule: &Schedule, budget: u32) {
    assert!(schedule.leave_days_used <= budget);
    assert_eq!(
        schedule.leave_days_used,
        schedule
            .periods
            .iter()
            .map(|period| period.leave_days_used)
            .sum::<u32>()
    );

    for pair in schedule.periods.windows(2) {
        assert!(pair[0].start <= pair[1].start, "periods must be sorted");
        assert!(pair[0].end < pair[1].start, "periods must not overlap");
    }

    for period in &schedule.periods {
        let spanned: i64 = (period.end - period.start).whole_days() + 1;
        assert_eq!(i64::from(period.total_days), spanned);
        assert_eq!(
            period.total_days,
            period.leave_days_used + period.weekend_days + period.holiday_days
        );
        if period.leave_days_used > 0 {
            let expected: f64 = f64::from(period.total_days) / f64::from(period.leave_days_used);
            assert!((period.efficiency - expected).abs() < f64::EPSILON);
        }
        assert!(schedule.window.contains(period.start));
        assert!(schedule.window.contains(period.end));
    }
}
