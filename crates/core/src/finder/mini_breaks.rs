// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Mini breaks: short runs of workdays spread evenly over the window.
//!
//! The window is cut into one segment per affordable break. In each segment
//! every run of `MINI_BREAK_LENGTH` consecutive non-weekend days is scored
//! and the best one (earliest on ties) becomes the segment's candidate.
//!
//! ## Scoring
//!
//! - 1 for every candidate
//! - +2 when the day before is a weekend day
//! - +2 when the day after is a weekend day
//! - +3 for every off-day inside the run

use crate::opportunity::{Opportunity, OpportunityKind};
use leave_planner_domain::{Calendar, CalendarDay};
use std::collections::BTreeSet;
use time::Date;

/// The number of consecutive days in a mini break.
pub const MINI_BREAK_LENGTH: usize = 2;

const BASE_SCORE: u32 = 1;
const WEEKEND_NEIGHBOUR_BONUS: u32 = 2;
const OFF_DAY_BONUS: u32 = 3;

/// Finds the best mini break in each segment of the window.
///
/// # Arguments
///
/// * `calendar` - The classified calendar
/// * `budget` - Leave days available; sets the number of segments
/// * `consumed` - Dates no candidate may touch
#[must_use]
pub fn find_mini_breaks(
    calendar: &Calendar,
    budget: u32,
    consumed: &BTreeSet<Date>,
) -> Vec<Opportunity> {
    let days: &[CalendarDay] = calendar.days();
    let total: usize = days.len();

    // One segment per affordable break, but never shorter than a break.
    let affordable: usize = usize::try_from(budget).unwrap_or(usize::MAX) / MINI_BREAK_LENGTH;
    let segments: usize = affordable.min(total / MINI_BREAK_LENGTH);
    if segments == 0 {
        return Vec::new();
    }

    (0..segments)
        .filter_map(|index| {
            let from: usize = index * total / segments;
            let to: usize = (index + 1) * total / segments;
            best_in_segment(calendar, &days[from..to], consumed)
        })
        .collect()
}

fn best_in_segment(
    calendar: &Calendar,
    segment: &[CalendarDay],
    consumed: &BTreeSet<Date>,
) -> Option<Opportunity> {
    let mut best: Option<(u32, Opportunity)> = None;

    for run in segment.windows(MINI_BREAK_LENGTH) {
        let Some(candidate) = score_run(calendar, run, consumed) else {
            continue;
        };
        if best.as_ref().is_none_or(|(score, _)| candidate.0 > *score) {
            best = Some(candidate);
        }
    }

    best.map(|(_, opportunity)| opportunity)
}

fn score_run(
    calendar: &Calendar,
    run: &[CalendarDay],
    consumed: &BTreeSet<Date>,
) -> Option<(u32, Opportunity)> {
    let (first, last) = (run.first()?, run.last()?);

    if run
        .iter()
        .any(|day| day.is_weekend || consumed.contains(&day.date))
    {
        return None;
    }

    let leave_days: u32 = count(run.iter().filter(|day| day.is_workday()));
    if leave_days == 0 {
        return None;
    }
    let off_days: u32 = count(run.iter().filter(|day| day.is_off_day));

    let mut score: u32 = BASE_SCORE + OFF_DAY_BONUS * off_days;
    if first
        .date
        .previous_day()
        .is_some_and(|date| calendar.is_weekend(date))
    {
        score += WEEKEND_NEIGHBOUR_BONUS;
    }
    if last
        .date
        .next_day()
        .is_some_and(|date| calendar.is_weekend(date))
    {
        score += WEEKEND_NEIGHBOUR_BONUS;
    }

    let opportunity: Opportunity = Opportunity::new(
        first.date,
        last.date,
        leave_days,
        f64::from(score),
        OpportunityKind::MiniBreak,
    );
    Some((score, opportunity))
}

fn count<'a>(days: impl Iterator<Item = &'a CalendarDay>) -> u32 {
    u32::try_from(days.count()).unwrap_or(u32::MAX)
}
