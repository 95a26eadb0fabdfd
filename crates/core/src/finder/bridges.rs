// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Holiday bridges: leave days that join an off-day to a nearby weekend.
//!
//! For every off-day on a working weekday, each side is scanned for the
//! nearest weekend day no more than `MAX_BRIDGE_GAP` days away. The bridge
//! covers the off-day, the workdays in between and the whole weekend block.
//!
//! When the weekend already touches the off-day the bridge is free, so a
//! second candidate is proposed that also takes the workday beyond the
//! weekend (a Friday before a Monday holiday, a Monday after a Friday one).

use super::Direction;
use crate::opportunity::{Opportunity, OpportunityKind};
use leave_planner_domain::{Calendar, CalendarDay};
use time::Date;

/// The farthest a weekend may be from an off-day and still be bridged.
pub const MAX_BRIDGE_GAP: u32 = 3;

/// Finds bridge opportunities around every off-day in the window.
///
/// Off-days that fall on a weekend day are skipped. Candidates are returned
/// in date order, backward side before forward side.
#[must_use]
pub fn find_holiday_bridges(calendar: &Calendar) -> Vec<Opportunity> {
    let mut opportunities: Vec<Opportunity> = Vec::new();

    for day in calendar.days() {
        if !day.is_off_day || day.is_weekend {
            continue;
        }
        for direction in [Direction::Backward, Direction::Forward] {
            bridge_toward(calendar, day.date, direction, &mut opportunities);
        }
    }

    opportunities
}

/// Builds the bridges from `anchor` to the nearest weekend in `direction`.
fn bridge_toward(
    calendar: &Calendar,
    anchor: Date,
    direction: Direction,
    out: &mut Vec<Opportunity>,
) {
    let Some((weekend, leave_days)) = nearest_weekend(calendar, anchor, direction) else {
        return;
    };
    let far: Date = block_edge(calendar, weekend, direction);

    let (start, end) = direction.span(anchor, far);
    let base: Opportunity = spanning(start, end, leave_days, anchor);
    out.push(base);

    if leave_days == 0 {
        let beyond: Option<&CalendarDay> = direction
            .step(far)
            .and_then(|date| calendar.day(date))
            .filter(|day| day.is_workday());
        if let Some(day) = beyond {
            let (start, end) = direction.span(anchor, day.date);
            out.push(spanning(start, end, 1, anchor));
        }
    }
}

/// Finds the closest weekend day within `MAX_BRIDGE_GAP` of `anchor`.
///
/// Returns the weekend date and the number of workdays strictly between it
/// and the anchor.
fn nearest_weekend(calendar: &Calendar, anchor: Date, direction: Direction) -> Option<(Date, u32)> {
    let mut cursor: Date = anchor;
    let mut leave_days: u32 = 0;

    for _ in 0..MAX_BRIDGE_GAP {
        cursor = direction.step(cursor)?;
        let day: &CalendarDay = calendar.day(cursor)?;
        if day.is_weekend {
            return Some((cursor, leave_days));
        }
        if day.is_workday() {
            leave_days += 1;
        }
    }

    None
}

/// Walks from `weekend` away from the anchor across non-working days.
fn block_edge(calendar: &Calendar, weekend: Date, direction: Direction) -> Date {
    let mut edge: Date = weekend;
    while let Some(day) = direction
        .step(edge)
        .and_then(|date| calendar.day(date))
        .filter(|day| !day.is_workday())
    {
        edge = day.date;
    }
    edge
}

fn spanning(start: Date, end: Date, leave_days: u32, anchor: Date) -> Opportunity {
    let mut opportunity: Opportunity =
        Opportunity::new(start, end, leave_days, 0.0, OpportunityKind::HolidayBridge)
            .with_anchor(anchor);
    opportunity.value = f64::from(opportunity.total_days());
    opportunity
}
