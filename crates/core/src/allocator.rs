// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Greedy allocation of leave days over ranked opportunities.
//!
//! ## Invariants
//!
//! - The remaining budget never goes below zero
//! - No calendar date belongs to more than one accepted opportunity
//! - Non-cappable opportunities are accepted whole or not at all
//! - A capped opportunity competes at the value of its reduced span
//! - Allocation stops as soon as the remaining budget reaches zero

use crate::opportunity::{Opportunity, rank};
use leave_planner_domain::Calendar;
use std::collections::{BTreeSet, VecDeque};
use time::Date;
use tracing::trace;

/// The running state of one allocation.
///
/// An `Allocation` is created per optimization run and threaded through every
/// allocation phase, so later phases see what earlier phases consumed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Allocation {
    /// Leave days still available.
    remaining: u32,
    /// Dates already covered by an accepted opportunity.
    consumed: BTreeSet<Date>,
    /// Accepted opportunities in acceptance order.
    accepted: Vec<Opportunity>,
}

impl Allocation {
    /// Starts an allocation with `budget` leave days.
    #[must_use]
    pub const fn new(budget: u32) -> Self {
        Self {
            remaining: budget,
            consumed: BTreeSet::new(),
            accepted: Vec::new(),
        }
    }

    /// Returns the leave days still available.
    #[must_use]
    pub const fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Adds `extra` leave days to the remaining budget.
    pub const fn grant(&mut self, extra: u32) {
        self.remaining = self.remaining.saturating_add(extra);
    }

    /// Returns the dates covered so far.
    #[must_use]
    pub const fn consumed(&self) -> &BTreeSet<Date> {
        &self.consumed
    }

    /// Returns whether any date of `opportunity` is already covered.
    #[must_use]
    pub fn overlaps(&self, opportunity: &Opportunity) -> bool {
        self.consumed
            .range(opportunity.start..=opportunity.end)
            .next()
            .is_some()
    }

    /// Returns the accepted opportunities in acceptance order.
    #[must_use]
    pub fn accepted(&self) -> &[Opportunity] {
        &self.accepted
    }

    /// Consumes the allocation, returning the accepted opportunities.
    #[must_use]
    pub fn into_accepted(self) -> Vec<Opportunity> {
        self.accepted
    }

    fn accept(&mut self, opportunity: Opportunity) {
        self.remaining -= opportunity.leave_days_needed;
        self.consumed.extend(opportunity.dates());
        self.accepted.push(opportunity);
    }
}

/// Allocates leave days to `opportunities` in descending value order.
///
/// A cappable opportunity that does not fit is shrunk to the remaining
/// budget and re-queued at the rank of its reduced value, so whole
/// candidates worth more are still considered first.
///
/// # Arguments
///
/// * `allocation` - The running allocation (budget, consumed dates)
/// * `opportunities` - Candidates from one finder pass, in discovery order
/// * `calendar` - The classified calendar, used to shrink cappable candidates
///
/// # Returns
///
/// The number of opportunities accepted in this pass.
pub fn allocate(
    allocation: &mut Allocation,
    mut opportunities: Vec<Opportunity>,
    calendar: &Calendar,
) -> usize {
    rank(&mut opportunities);
    let mut pending: VecDeque<Opportunity> = VecDeque::from(opportunities);

    let mut accepted: usize = 0;
    while let Some(opportunity) = pending.pop_front() {
        if allocation.remaining == 0 {
            break;
        }

        if opportunity.leave_days_needed > allocation.remaining {
            let Some(capped) = opportunity.capped(calendar, allocation.remaining) else {
                trace!(
                    start = %opportunity.start,
                    needed = opportunity.leave_days_needed,
                    remaining = allocation.remaining,
                    "Skipping opportunity over budget"
                );
                continue;
            };
            trace!(
                start = %capped.start,
                end = %capped.end,
                value = capped.value,
                "Re-queueing capped opportunity"
            );
            requeue(&mut pending, capped);
            continue;
        }

        if allocation.overlaps(&opportunity) {
            trace!(start = %opportunity.start, end = %opportunity.end, "Skipping overlapping opportunity");
            continue;
        }

        allocation.accept(opportunity);
        accepted += 1;
    }

    accepted
}

/// Inserts `opportunity` after every pending candidate of equal or higher value.
fn requeue(pending: &mut VecDeque<Opportunity>, opportunity: Opportunity) {
    let position: usize = pending.partition_point(|queued| queued.value >= opportunity.value);
    pending.insert(position, opportunity);
}
