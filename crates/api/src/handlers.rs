// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API handler functions.

use leave_planner::{OptimizationRequest, Schedule, VacationPeriod};
use leave_planner_domain::{VacationStyle, WeekendDays};
use std::str::FromStr;
use time::Date;
use tracing::info;

use crate::dates::{format_date, parse_date, parse_dates};
use crate::error::{ApiError, translate_core_error, translate_domain_error};
use crate::request_response::{
    ListStylesResponse, MetadataResponse, OptimizeRequest, OptimizeResponse, PeriodResponse,
    StyleInfo,
};

/// Converts an API request into an engine request.
///
/// Dates, style, and weekend indices are parsed here; budget and window
/// rules are left to the engine.
///
/// # Arguments
///
/// * `request` - The API request
///
/// # Errors
///
/// Returns an error if:
/// - A date is malformed
/// - The style is not recognized
/// - A weekend index is outside 0-6
pub fn to_optimization_request(
    request: &OptimizeRequest,
) -> Result<OptimizationRequest, ApiError> {
    let start: Date = parse_date("start_date", &request.start_date)?;
    let end: Date = parse_date("end_date", &request.end_date)?;
    let holidays: Vec<Date> = parse_dates("holidays", &request.holidays)?;
    let company_off_days: Vec<Date> = parse_dates("company_off_days", &request.company_off_days)?;
    let style: VacationStyle =
        VacationStyle::from_str(&request.style).map_err(translate_domain_error)?;
    let weekend: WeekendDays =
        WeekendDays::from_indices(&request.weekend_days).map_err(translate_domain_error)?;

    Ok(
        OptimizationRequest::new(request.leave_days_budget, start, end, style)
            .with_holidays(holidays)
            .with_company_off_days(company_off_days)
            .with_weekend_days(weekend),
    )
}

/// Computes a leave schedule.
///
/// # Arguments
///
/// * `request` - The API request
///
/// # Returns
///
/// * `Ok(OptimizeResponse)` with the recommended periods (possibly none)
/// * `Err(ApiError)` if the request is invalid
///
/// # Errors
///
/// Returns an error if the request fails parsing or validation. Unused
/// budget and empty schedules are not errors.
pub fn optimize(request: &OptimizeRequest) -> Result<OptimizeResponse, ApiError> {
    let engine_request: OptimizationRequest = to_optimization_request(request)?;
    let schedule: Schedule =
        leave_planner::optimize(&engine_request).map_err(translate_core_error)?;

    info!(
        style = %schedule.style,
        periods = schedule.periods.len(),
        leave_days_used = schedule.leave_days_used,
        "Computed leave schedule"
    );

    build_optimize_response(&schedule)
}

/// Lists the selectable vacation styles.
#[must_use]
pub fn list_styles() -> ListStylesResponse {
    let default_style: VacationStyle = VacationStyle::default();
    ListStylesResponse {
        styles: VacationStyle::ALL
            .iter()
            .map(|style| StyleInfo {
                id: style.as_str().to_string(),
                is_default: *style == default_style,
            })
            .collect(),
    }
}

/// Converts an engine schedule into its API representation.
///
/// # Errors
///
/// Returns `ApiError::Internal` if a date cannot be formatted.
pub fn build_optimize_response(schedule: &Schedule) -> Result<OptimizeResponse, ApiError> {
    let periods: Vec<PeriodResponse> = schedule
        .periods
        .iter()
        .map(build_period_response)
        .collect::<Result<_, _>>()?;

    Ok(OptimizeResponse {
        style: schedule.style.as_str().to_string(),
        start_date: format_date(schedule.window.start())?,
        end_date: format_date(schedule.window.end())?,
        total_leave_budget: schedule.total_leave_budget,
        leave_days_used: schedule.leave_days_used,
        unused_leave_days: schedule.unused_leave_days(),
        total_days_off: schedule.total_days_off(),
        overall_efficiency: schedule.overall_efficiency(),
        periods,
        metadata: MetadataResponse {
            total_days_in_range: schedule.metadata.total_days_in_range,
            weekend_day_count: schedule.metadata.weekend_day_count,
            holiday_day_count: schedule.metadata.holiday_day_count,
            national_holiday_count: schedule.metadata.national_holiday_count,
            company_off_day_count: schedule.metadata.company_off_day_count,
        },
    })
}

fn build_period_response(period: &VacationPeriod) -> Result<PeriodResponse, ApiError> {
    Ok(PeriodResponse {
        start_date: format_date(period.start)?,
        end_date: format_date(period.end)?,
        total_days: period.total_days,
        leave_days_used: period.leave_days_used,
        weekend_days: period.weekend_days,
        holiday_days: period.holiday_days,
        efficiency: period.efficiency,
        kind: period.kind.as_str().to_string(),
        label: period.kind.label().to_string(),
    })
}
