// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Weekend extensions: one leave day before or after a plain weekend.

use super::Direction;
use crate::opportunity::{Opportunity, OpportunityKind};
use leave_planner_domain::Calendar;
use std::collections::BTreeSet;
use time::Date;

/// Finds leading and trailing extensions for every untouched weekend.
///
/// A weekend is a maximal run of weekend days. Runs cut short by the window
/// edge are skipped, as are runs with any date in `consumed` and extension
/// days that are not in-window workdays or are already consumed. Each
/// extension costs one leave day and is valued at the number of days it spans.
#[must_use]
pub fn find_weekend_extensions(calendar: &Calendar, consumed: &BTreeSet<Date>) -> Vec<Opportunity> {
    let mut opportunities: Vec<Opportunity> = Vec::new();

    for run in calendar
        .days()
        .chunk_by(|a, b| a.is_weekend == b.is_weekend)
        .filter(|run| run.first().is_some_and(|day| day.is_weekend))
    {
        let (Some(first), Some(last)) = (run.first(), run.last()) else {
            continue;
        };
        if truncated(calendar, first.date, last.date)
            || consumed.range(first.date..=last.date).next().is_some()
        {
            continue;
        }

        if let Some(leading) = extension_day(calendar, consumed, first.date, Direction::Backward) {
            opportunities.push(extension(leading, last.date));
        }
        if let Some(trailing) = extension_day(calendar, consumed, last.date, Direction::Forward) {
            opportunities.push(extension(first.date, trailing));
        }
    }

    opportunities
}

/// Returns whether the run continues past the window edge.
fn truncated(calendar: &Calendar, first: Date, last: Date) -> bool {
    let outside_weekend = |date: Date| calendar.day(date).is_none() && calendar.is_weekend(date);
    first.previous_day().is_some_and(outside_weekend)
        || last.next_day().is_some_and(outside_weekend)
}

fn extension_day(
    calendar: &Calendar,
    consumed: &BTreeSet<Date>,
    edge: Date,
    direction: Direction,
) -> Option<Date> {
    direction
        .step(edge)
        .and_then(|date| calendar.day(date))
        .filter(|day| day.is_workday() && !consumed.contains(&day.date))
        .map(|day| day.date)
}

fn extension(start: Date, end: Date) -> Opportunity {
    let mut opportunity: Opportunity =
        Opportunity::new(start, end, 1, 0.0, OpportunityKind::WeekendExtension);
    opportunity.value = f64::from(opportunity.total_days());
    opportunity
}
