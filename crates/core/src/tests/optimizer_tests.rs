// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{assert_schedule_invariants, create_test_calendar};
use crate::{
    CoreError, OpportunityKind, OptimizationRequest, Schedule, VacationPeriod,
    long_weekend_share, optimize, plan,
};
use leave_planner_domain::{Calendar, DomainError, VacationStyle, WeekendDays};
use time::Date;
use time::macros::date;

fn january_request(budget: i64, style: VacationStyle) -> OptimizationRequest {
    OptimizationRequest::new(budget, date!(2024 - 01 - 01), date!(2024 - 01 - 31), style)
}

fn period_spans(schedule: &Schedule) -> Vec<(Date, Date)> {
    schedule
        .periods
        .iter()
        .map(|period| (period.start, period.end))
        .collect()
}

#[test]
fn test_monday_holiday_with_one_leave_day_makes_a_four_day_weekend() {
    let request: OptimizationRequest = january_request(1, VacationStyle::LongWeekends)
        .with_holidays(vec![date!(2024 - 01 - 15)]);

    let schedule: Schedule = optimize(&request).unwrap();

    assert_eq!(schedule.periods.len(), 1);
    let period: &VacationPeriod = &schedule.periods[0];
    assert_eq!(period.start, date!(2024 - 01 - 12));
    assert_eq!(period.end, date!(2024 - 01 - 15));
    assert_eq!(period.leave_days_used, 1);
    assert_eq!(period.weekend_days, 2);
    assert_eq!(period.holiday_days, 1);
    assert_eq!(period.total_days, 4);
    assert_eq!(period.kind, OpportunityKind::HolidayBridge);
    assert_eq!(schedule.leave_days_used, 1);
    assert_schedule_invariants(&schedule, 1);
}

#[test]
fn test_mini_breaks_in_march_use_pure_workday_pairs() {
    let request: OptimizationRequest = OptimizationRequest::new(
        4,
        date!(2024 - 03 - 01),
        date!(2024 - 03 - 31),
        VacationStyle::MiniBreaks,
    );

    let schedule: Schedule = optimize(&request).unwrap();

    assert!(schedule.periods.len() <= 2);
    assert!(schedule.leave_days_used <= 4);
    for period in &schedule.periods {
        assert_eq!(period.total_days, 2);
        assert_eq!(period.leave_days_used, 2);
        assert_eq!(period.weekend_days, 0);
        assert_eq!(period.kind, OpportunityKind::MiniBreak);
    }
    assert_eq!(
        period_spans(&schedule),
        vec![
            (date!(2024 - 03 - 04), date!(2024 - 03 - 05)),
            (date!(2024 - 03 - 18), date!(2024 - 03 - 19)),
        ]
    );
    assert_schedule_invariants(&schedule, 4);
}

#[test]
fn test_zero_budget_is_rejected() {
    let request: OptimizationRequest = january_request(0, VacationStyle::BalancedMix);

    let result: Result<Schedule, CoreError> = optimize(&request);

    assert_eq!(
        result,
        Err(CoreError::InvalidRequest(DomainError::InvalidBudget {
            budget: 0
        }))
    );
}

#[test]
fn test_negative_budget_is_rejected() {
    let request: OptimizationRequest = january_request(-3, VacationStyle::LongWeekends);

    assert!(matches!(
        optimize(&request),
        Err(CoreError::InvalidRequest(DomainError::InvalidBudget { budget: -3 }))
    ));
}

#[test]
fn test_start_after_end_is_rejected() {
    let request: OptimizationRequest = OptimizationRequest::new(
        5,
        date!(2024 - 02 - 01),
        date!(2024 - 01 - 01),
        VacationStyle::BalancedMix,
    );

    assert!(matches!(
        optimize(&request),
        Err(CoreError::InvalidRequest(DomainError::InvalidRange { .. }))
    ));
}

#[test]
fn test_equal_start_and_end_is_rejected() {
    let request: OptimizationRequest = OptimizationRequest::new(
        5,
        date!(2024 - 01 - 10),
        date!(2024 - 01 - 10),
        VacationStyle::BalancedMix,
    );

    assert!(matches!(
        optimize(&request),
        Err(CoreError::InvalidRequest(DomainError::InvalidRange { .. }))
    ));
}

#[test]
fn test_long_weekends_fall_back_to_weekend_extensions() {
    let request: OptimizationRequest = january_request(3, VacationStyle::LongWeekends);

    let schedule: Schedule = optimize(&request).unwrap();

    assert_eq!(
        period_spans(&schedule),
        vec![
            (date!(2024 - 01 - 05), date!(2024 - 01 - 07)),
            (date!(2024 - 01 - 12), date!(2024 - 01 - 14)),
            (date!(2024 - 01 - 19), date!(2024 - 01 - 21)),
        ]
    );
    assert!(
        schedule
            .periods
            .iter()
            .all(|period| period.kind == OpportunityKind::WeekendExtension)
    );
    assert_schedule_invariants(&schedule, 3);
}

#[test]
fn test_long_weekends_cap_a_bridge_to_the_remaining_budget() {
    // Wednesday holiday: either bridge costs two leave days.
    let request: OptimizationRequest = january_request(1, VacationStyle::LongWeekends)
        .with_holidays(vec![date!(2024 - 01 - 10)]);

    let schedule: Schedule = optimize(&request).unwrap();

    assert_eq!(
        period_spans(&schedule),
        vec![(date!(2024 - 01 - 09), date!(2024 - 01 - 10))]
    );
    assert_eq!(schedule.leave_days_used, 1);
    assert_eq!(schedule.periods[0].holiday_days, 1);
}

#[test]
fn test_long_weekends_prefer_whole_bridge_over_capped_longer_one() {
    // Wed 10 to Mon 15 would need Thu 11 and Fri 12; Fri 12 alone joins Mon 15 to the weekend.
    let request: OptimizationRequest = january_request(1, VacationStyle::LongWeekends)
        .with_holidays(vec![date!(2024 - 01 - 10), date!(2024 - 01 - 15)]);

    let schedule: Schedule = optimize(&request).unwrap();

    assert_eq!(
        period_spans(&schedule),
        vec![(date!(2024 - 01 - 12), date!(2024 - 01 - 15))]
    );
    let period: &VacationPeriod = &schedule.periods[0];
    assert_eq!(period.total_days, 4);
    assert_eq!(period.leave_days_used, 1);
    assert_eq!(period.weekend_days, 2);
    assert_eq!(period.holiday_days, 1);
    assert_schedule_invariants(&schedule, 1);
}

#[test]
fn test_balanced_mix_splits_budget_between_strategies() {
    let request: OptimizationRequest = january_request(5, VacationStyle::BalancedMix)
        .with_holidays(vec![date!(2024 - 01 - 15)]);

    let schedule: Schedule = optimize(&request).unwrap();

    let kinds: Vec<OpportunityKind> = schedule.periods.iter().map(|period| period.kind).collect();
    assert_eq!(
        period_spans(&schedule),
        vec![
            (date!(2024 - 01 - 01), date!(2024 - 01 - 02)),
            (date!(2024 - 01 - 05), date!(2024 - 01 - 07)),
            (date!(2024 - 01 - 12), date!(2024 - 01 - 15)),
            (date!(2024 - 01 - 19), date!(2024 - 01 - 21)),
        ]
    );
    assert_eq!(
        kinds,
        vec![
            OpportunityKind::MiniBreak,
            OpportunityKind::WeekendExtension,
            OpportunityKind::HolidayBridge,
            OpportunityKind::WeekendExtension,
        ]
    );
    assert_eq!(schedule.leave_days_used, 5);
    assert_schedule_invariants(&schedule, 5);
}

#[test]
fn test_long_weekend_share_rounds_up() {
    assert_eq!(long_weekend_share(1), 1);
    assert_eq!(long_weekend_share(2), 2);
    assert_eq!(long_weekend_share(5), 3);
    assert_eq!(long_weekend_share(10), 6);
    assert_eq!(long_weekend_share(u32::MAX), u32::MAX - u32::MAX / 5 * 2);
}

#[test]
fn test_custom_weekend_shifts_extensions() {
    let request: OptimizationRequest = january_request(1, VacationStyle::LongWeekends)
        .with_weekend_days(WeekendDays::from_indices(&[5, 6]).unwrap());

    let schedule: Schedule = optimize(&request).unwrap();

    assert_eq!(
        period_spans(&schedule),
        vec![(date!(2024 - 01 - 04), date!(2024 - 01 - 06))]
    );
    assert_eq!(schedule.periods[0].weekend_days, 2);
    assert_eq!(schedule.metadata.weekend_day_count, 8);
}

#[test]
fn test_company_off_days_count_as_off_days() {
    let request: OptimizationRequest = january_request(1, VacationStyle::LongWeekends)
        .with_company_off_days(vec![date!(2024 - 01 - 15)]);

    let schedule: Schedule = optimize(&request).unwrap();

    assert_eq!(
        period_spans(&schedule),
        vec![(date!(2024 - 01 - 12), date!(2024 - 01 - 15))]
    );
    assert_eq!(schedule.metadata.company_off_day_count, 1);
    assert_eq!(schedule.metadata.national_holiday_count, 0);
}

#[test]
fn test_unused_budget_is_reported_not_an_error() {
    // A short window with one weekend can only absorb a single extension.
    let request: OptimizationRequest = OptimizationRequest::new(
        10,
        date!(2024 - 01 - 05),
        date!(2024 - 01 - 07),
        VacationStyle::LongWeekends,
    );

    let schedule: Schedule = optimize(&request).unwrap();

    assert_eq!(schedule.leave_days_used, 1);
    assert_eq!(schedule.unused_leave_days(), 9);
    assert_eq!(schedule.total_leave_budget, 10);
}

#[test]
fn test_optimize_is_idempotent() {
    for style in VacationStyle::ALL {
        let request: OptimizationRequest = OptimizationRequest::new(
            12,
            date!(2024 - 01 - 01),
            date!(2024 - 12 - 31),
            style,
        )
        .with_holidays(vec![
            date!(2024 - 01 - 01),
            date!(2024 - 05 - 27),
            date!(2024 - 07 - 04),
            date!(2024 - 09 - 02),
            date!(2024 - 11 - 28),
            date!(2024 - 12 - 25),
        ]);

        let first: Schedule = optimize(&request).unwrap();
        let second: Schedule = optimize(&request).unwrap();

        assert_eq!(first, second);
    }
}

#[test]
fn test_invariants_hold_across_styles_and_budgets() {
    let holidays: Vec<Date> = vec![
        date!(2024 - 01 - 01),
        date!(2024 - 01 - 15),
        date!(2024 - 02 - 19),
        date!(2024 - 05 - 27),
        date!(2024 - 06 - 19),
        date!(2024 - 07 - 04),
        date!(2024 - 09 - 02),
        date!(2024 - 11 - 28),
        date!(2024 - 11 - 29),
        date!(2024 - 12 - 25),
    ];

    for style in VacationStyle::ALL {
        for budget in [1_u32, 2, 3, 7, 15, 25, 60] {
            let request: OptimizationRequest = OptimizationRequest::new(
                i64::from(budget),
                date!(2024 - 01 - 01),
                date!(2024 - 12 - 31),
                style,
            )
            .with_holidays(holidays.clone());

            let schedule: Schedule = optimize(&request).unwrap();

            assert_eq!(schedule.style, style);
            assert_eq!(schedule.total_leave_budget, budget);
            assert_eq!(schedule.metadata.total_days_in_range, 366);
            assert_schedule_invariants(&schedule, budget);
        }
    }
}

#[test]
fn test_single_day_window_never_yields_multi_day_period() {
    for (day, holidays) in [
        (date!(2024 - 01 - 10), vec![]),
        (date!(2024 - 01 - 13), vec![]),
        (date!(2024 - 01 - 15), vec![date!(2024 - 01 - 15)]),
    ] {
        let calendar: Calendar = create_test_calendar(day, day, &holidays);
        for style in VacationStyle::ALL {
            let schedule: Schedule = plan(&calendar, 5, style);

            assert!(schedule.periods.iter().all(|period| period.total_days <= 1));
            assert_schedule_invariants(&schedule, 5);
        }
    }
}
