// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

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

mod calendar;
mod error;
mod off_days;
mod types;
mod validation;
mod window;

#[cfg(test)]
mod tests;

pub use calendar::{Calendar, CalendarDay, dates};
pub use error::DomainError;
pub use off_days::OffDaySet;
pub use types::{DayKind, VacationStyle, WeekendDays};
pub use validation::{validate_budget, validate_window};
pub use window::PlanningWindow;
