// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::window::PlanningWindow;
use time::Date;

/// Validates a requested leave-day budget.
///
/// # Arguments
///
/// * `budget` - The requested number of leave days
///
/// # Returns
///
/// * `Ok(u32)` with the budget if it is positive
/// * `Err(DomainError::InvalidBudget)` otherwise
///
/// # Errors
///
/// Returns an error if the budget is zero, negative, or does not fit a `u32`.
pub fn validate_budget(budget: i64) -> Result<u32, DomainError> {
    if budget <= 0 {
        return Err(DomainError::InvalidBudget { budget });
    }
    u32::try_from(budget).map_err(|_| DomainError::InvalidBudget { budget })
}

/// Validates a requested planning window.
///
/// A request must span at least two days: the start date has to be strictly
/// before the end date. (`PlanningWindow` itself accepts single-day windows
/// for callers that build one directly.)
///
/// # Arguments
///
/// * `start` - The first requested date
/// * `end` - The last requested date
///
/// # Errors
///
/// Returns `DomainError::InvalidRange` if `start >= end`.
pub fn validate_window(start: Date, end: Date) -> Result<PlanningWindow, DomainError> {
    if start >= end {
        return Err(DomainError::InvalidRange { start, end });
    }
    PlanningWindow::new(start, end)
}
