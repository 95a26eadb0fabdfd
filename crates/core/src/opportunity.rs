// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Candidate vacation periods and their ranking.

use leave_planner_domain::{Calendar, CalendarDay};
use serde::{Deserialize, Serialize};
use time::Date;

/// How a candidate vacation period was discovered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OpportunityKind {
    /// Leave days connecting an off-day to a neighbouring weekend.
    HolidayBridge,
    /// A plain weekend stretched by one leave day.
    WeekendExtension,
    /// A short run of workdays taken off on its own.
    MiniBreak,
}

impl std::fmt::Display for OpportunityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl OpportunityKind {
    /// Converts this kind to its wire identifier.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::HolidayBridge => "holiday_bridge",
            Self::WeekendExtension => "weekend_extension",
            Self::MiniBreak => "mini_break",
        }
    }

    /// Returns the human-readable label shown next to a period.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::HolidayBridge | Self::WeekendExtension => "Long Weekend",
            Self::MiniBreak => "Mini Break",
        }
    }
}

/// A candidate vacation period.
///
/// `value` is a heuristic attractiveness score; larger is better. Scores are
/// only comparable within one ranking pass, not across finders in general.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Opportunity {
    /// First day off (inclusive).
    pub start: Date,
    /// Last day off (inclusive).
    pub end: Date,
    /// Leave days required to take the whole span off.
    pub leave_days_needed: u32,
    /// Attractiveness score.
    pub value: f64,
    /// How the opportunity was found.
    pub kind: OpportunityKind,
    /// The off-day a capped opportunity shrinks toward.
    ///
    /// `Some` marks the opportunity as cappable: when the budget cannot cover
    /// it, the allocator keeps the anchor and as many leave days next to it as
    /// remain, instead of dropping it.
    pub anchor: Option<Date>,
}

impl Opportunity {
    /// Creates a non-cappable opportunity.
    ///
    /// # Arguments
    ///
    /// * `start` - First day off (inclusive)
    /// * `end` - Last day off (inclusive)
    /// * `leave_days_needed` - Leave days the span costs
    /// * `value` - Attractiveness score
    /// * `kind` - How the opportunity was found
    #[must_use]
    pub const fn new(
        start: Date,
        end: Date,
        leave_days_needed: u32,
        value: f64,
        kind: OpportunityKind,
    ) -> Self {
        Self {
            start,
            end,
            leave_days_needed,
            value,
            kind,
            anchor: None,
        }
    }

    /// Marks this opportunity as cappable toward `anchor`.
    ///
    /// `anchor` must be either `start` or `end`.
    #[must_use]
    pub const fn with_anchor(mut self, anchor: Date) -> Self {
        self.anchor = Some(anchor);
        self
    }

    /// Returns whether the allocator may shrink this opportunity.
    #[must_use]
    pub const fn is_cappable(&self) -> bool {
        self.anchor.is_some()
    }

    /// Returns the number of days spanned, both ends included.
    #[must_use]
    #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
    pub fn total_days(&self) -> u32 {
        ((self.end - self.start).whole_days() + 1) as u32
    }

    /// Returns days off gained per leave day spent.
    ///
    /// A span that costs nothing reports its length.
    #[must_use]
    pub fn efficiency(&self) -> f64 {
        let total: f64 = f64::from(self.total_days());
        if self.leave_days_needed == 0 {
            total
        } else {
            total / f64::from(self.leave_days_needed)
        }
    }

    /// Iterates over every date of the span.
    pub fn dates(&self) -> impl Iterator<Item = Date> {
        let end: Date = self.end;
        std::iter::successors(Some(self.start), move |current| {
            current.next_day().filter(|next| *next <= end)
        })
    }

    /// Returns whether the span shares at least one date with `other`.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    /// Shrinks a cappable opportunity to fit `budget` leave days.
    ///
    /// The span is rebuilt from the anchor outward, adding days until the
    /// next workday would exceed the budget. Returns `None` for opportunities
    /// without an anchor or when not even one leave day fits.
    #[must_use]
    pub fn capped(&self, calendar: &Calendar, budget: u32) -> Option<Self> {
        let anchor: Date = self.anchor?;
        if budget == 0 {
            return None;
        }

        let toward_start: bool = anchor == self.end;
        let walk: Vec<&CalendarDay> = if toward_start {
            calendar.span(self.start, anchor).iter().rev().collect()
        } else {
            calendar.span(anchor, self.end).iter().collect()
        };

        let mut used: u32 = 0;
        let mut reach: Date = anchor;
        for day in walk {
            if day.is_workday() {
                if used == budget {
                    break;
                }
                used += 1;
            }
            reach = day.date;
        }

        if used == 0 {
            return None;
        }

        let (start, end) = if toward_start {
            (reach, anchor)
        } else {
            (anchor, reach)
        };
        let mut capped: Self = Self::new(start, end, used, 0.0, self.kind).with_anchor(anchor);
        capped.value = f64::from(capped.total_days());
        Some(capped)
    }
}

/// Orders opportunities by descending value.
///
/// The sort is stable, so equal values keep their discovery order.
pub fn rank(opportunities: &mut [Opportunity]) {
    opportunities.sort_by(|a, b| b.value.total_cmp(&a.value));
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use leave_planner_domain::{OffDaySet, PlanningWindow, WeekendDays};
    use time::macros::date;

    fn calendar_with_holiday(holiday: Date) -> Calendar {
        let window: PlanningWindow =
            PlanningWindow::new(date!(2024 - 01 - 01), date!(2024 - 01 - 31)).unwrap();
        Calendar::build(
            window,
            &OffDaySet::new(vec![holiday], vec![]),
            WeekendDays::default(),
        )
    }

    #[test]
    fn test_efficiency_falls_back_to_length_when_free() {
        let free: Opportunity = Opportunity::new(
            date!(2024 - 01 - 13),
            date!(2024 - 01 - 15),
            0,
            3.0,
            OpportunityKind::HolidayBridge,
        );
        let paid: Opportunity = Opportunity::new(
            date!(2024 - 01 - 12),
            date!(2024 - 01 - 15),
            1,
            4.0,
            OpportunityKind::HolidayBridge,
        );

        assert!((free.efficiency() - 3.0).abs() < f64::EPSILON);
        assert!((paid.efficiency() - 4.0).abs() < f64::EPSILON);
        assert!(free.overlaps(&paid));
    }

    #[test]
    fn test_capped_walks_forward_from_anchor() {
        let calendar: Calendar = calendar_with_holiday(date!(2024 - 01 - 10));
        let bridge: Opportunity = Opportunity::new(
            date!(2024 - 01 - 10),
            date!(2024 - 01 - 14),
            2,
            5.0,
            OpportunityKind::HolidayBridge,
        )
        .with_anchor(date!(2024 - 01 - 10));

        let capped: Opportunity = bridge.capped(&calendar, 1).unwrap();

        assert_eq!(capped.start, date!(2024 - 01 - 10));
        assert_eq!(capped.end, date!(2024 - 01 - 11));
        assert_eq!(capped.leave_days_needed, 1);
        assert!((capped.value - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_capped_requires_anchor_and_budget() {
        let calendar: Calendar = calendar_with_holiday(date!(2024 - 01 - 10));
        let plain: Opportunity = Opportunity::new(
            date!(2024 - 01 - 08),
            date!(2024 - 01 - 09),
            2,
            1.0,
            OpportunityKind::MiniBreak,
        );

        assert!(plain.capped(&calendar, 1).is_none());
        assert!(
            plain
                .with_anchor(date!(2024 - 01 - 09))
                .capped(&calendar, 0)
                .is_none()
        );
    }

    #[test]
    fn test_rank_is_stable_and_descending() {
        let mut opportunities: Vec<Opportunity> = [2.0, 4.0, 2.0, 3.0]
            .into_iter()
            .zip(1_u8..)
            .map(|(value, day)| {
                let date: Date = Date::from_calendar_date(2024, time::Month::March, day).unwrap();
                Opportunity::new(date, date, 1, value, OpportunityKind::MiniBreak)
            })
            .collect();

        rank(&mut opportunities);

        let days: Vec<u8> = opportunities.iter().map(|o| o.start.day()).collect();
        assert_eq!(days, vec![2, 4, 1, 3]);
    }
}
