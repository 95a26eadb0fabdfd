// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Date parsing and formatting at the API boundary.
//!
//! Dates travel as `YYYY-MM-DD` strings. RFC 3339 timestamps are accepted on
//! input and truncated to their calendar day, as written (no time zone
//! conversion).

use crate::error::ApiError;
use leave_planner_domain::DomainError;
use time::format_description::BorrowedFormatItem;
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, OffsetDateTime};

const DATE_FORMAT: &[BorrowedFormatItem<'_>] = format_description!("[year]-[month]-[day]");

/// Parses a request date.
///
/// # Arguments
///
/// * `field` - The request field the value came from, for error reporting
/// * `value` - A `YYYY-MM-DD` date or an RFC 3339 timestamp
///
/// # Errors
///
/// Returns `ApiError::InvalidInput` naming `field` if the value is neither.
pub fn parse_date(field: &str, value: &str) -> Result<Date, ApiError> {
    let trimmed: &str = value.trim();

    Date::parse(trimmed, DATE_FORMAT)
        .or_else(|date_err| {
            OffsetDateTime::parse(trimmed, &Rfc3339)
                .map(OffsetDateTime::date)
                .map_err(|_| date_err)
        })
        .map_err(|err| ApiError::InvalidInput {
            field: field.to_string(),
            message: DomainError::DateParseError {
                date_string: value.to_string(),
                error: err.to_string(),
            }
            .to_string(),
        })
}

/// Parses every date in `values`, stopping at the first failure.
///
/// # Errors
///
/// Returns `ApiError::InvalidInput` naming `field` for the first bad value.
pub fn parse_dates(field: &str, values: &[String]) -> Result<Vec<Date>, ApiError> {
    values.iter().map(|value| parse_date(field, value)).collect()
}

/// Formats a date as `YYYY-MM-DD`.
///
/// # Errors
///
/// Returns `ApiError::Internal` if the date cannot be formatted.
pub fn format_date(date: Date) -> Result<String, ApiError> {
    date.format(DATE_FORMAT).map_err(|err| ApiError::Internal {
        message: format!("Failed to format date {date}: {err}"),
    })
}
