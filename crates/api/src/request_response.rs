// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.
//!
//! Dates are `YYYY-MM-DD` strings on the way out. Requests are raw until
//! `handlers::to_optimization_request` validates them.

use leave_planner_domain::{VacationStyle, WeekendDays};

/// API request to compute a leave schedule.
///
/// This DTO is distinct from domain types and represents the API contract.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct OptimizeRequest {
    /// Leave days to spend. Must be positive.
    pub leave_days_budget: i64,
    /// First day of the planning window (`YYYY-MM-DD` or RFC 3339).
    pub start_date: String,
    /// Last day of the planning window (`YYYY-MM-DD` or RFC 3339).
    pub end_date: String,
    /// National holidays.
    #[serde(default)]
    pub holidays: Vec<String>,
    /// Company-wide off-days.
    #[serde(default)]
    pub company_off_days: Vec<String>,
    /// The vacation style identifier.
    #[serde(default = "default_style")]
    pub style: String,
    /// Weekend day-of-week indices (0 = Sunday ... 6 = Saturday).
    #[serde(default = "default_weekend_days")]
    pub weekend_days: Vec<u8>,
}

fn default_style() -> String {
    VacationStyle::default().as_str().to_string()
}

fn default_weekend_days() -> Vec<u8> {
    WeekendDays::default().indices()
}

/// One recommended vacation period.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PeriodResponse {
    /// First day off.
    pub start_date: String,
    /// Last day off.
    pub end_date: String,
    /// Days in the period.
    pub total_days: u32,
    /// Leave days the period costs.
    pub leave_days_used: u32,
    /// Weekend days in the period.
    pub weekend_days: u32,
    /// Holidays and company off-days in the period.
    pub holiday_days: u32,
    /// Days off per leave day.
    pub efficiency: f64,
    /// Why the period was recommended (`holiday_bridge`, `weekend_extension`, `mini_break`).
    pub kind: String,
    /// Human-readable label for the period.
    pub label: String,
}

/// Window-wide counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct MetadataResponse {
    /// Days in the planning window.
    pub total_days_in_range: u32,
    /// Weekend days in the planning window.
    pub weekend_day_count: u32,
    /// Distinct off-days in the planning window.
    pub holiday_day_count: u32,
    /// National holidays in the planning window.
    pub national_holiday_count: u32,
    /// Company off-days in the planning window.
    pub company_off_day_count: u32,
}

/// API response for a computed leave schedule.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct OptimizeResponse {
    /// The style the schedule was built for.
    pub style: String,
    /// First day of the planning window.
    pub start_date: String,
    /// Last day of the planning window.
    pub end_date: String,
    /// The leave budget the run started with.
    pub total_leave_budget: u32,
    /// Leave days spent across all periods.
    pub leave_days_used: u32,
    /// Leave days left unspent.
    pub unused_leave_days: u32,
    /// Days off across all periods.
    pub total_days_off: u32,
    /// Days off per leave day across all periods (0 when no leave is used).
    pub overall_efficiency: f64,
    /// Recommended periods, sorted by start date.
    pub periods: Vec<PeriodResponse>,
    /// Window-wide counts.
    pub metadata: MetadataResponse,
}

/// Describes one selectable vacation style.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct StyleInfo {
    /// The wire identifier.
    pub id: String,
    /// Whether this style is used when a request names none.
    pub is_default: bool,
}

/// API response listing the vacation styles.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ListStylesResponse {
    /// All styles, in display order.
    pub styles: Vec<StyleInfo>,
}
