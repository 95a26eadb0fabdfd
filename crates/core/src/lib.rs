// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Leave-day optimization engine.
//!
//! Given a planning window, its off-days, a leave budget and a vacation
//! style, the engine finds candidate periods, allocates the budget to them
//! greedily and assembles the resulting schedule. Every run is a pure
//! function of its inputs.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod allocator;
mod error;
mod finder;
mod opportunity;
mod optimizer;
mod schedule;

#[cfg(test)]
mod tests;

pub use allocator::{Allocation, allocate};
pub use error::CoreError;
pub use finder::{
    MAX_BRIDGE_GAP, MINI_BREAK_LENGTH, find_holiday_bridges, find_mini_breaks,
    find_weekend_extensions,
};
pub use opportunity::{Opportunity, OpportunityKind, rank};
pub use optimizer::{
    LONG_WEEKEND_SHARE_PERCENT, OptimizationRequest, long_weekend_share, optimize, plan,
};
pub use schedule::{Schedule, ScheduleMetadata, VacationPeriod};
