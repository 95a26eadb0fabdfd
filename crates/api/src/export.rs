// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Schedule export and import.
//!
//! A JSON export embeds the request that produced the schedule so it can be
//! imported and recomputed later. The CSV export is a flat table with one
//! row per period.

use leave_planner::OptimizationRequest;
use leave_planner_domain::{validate_budget, validate_window};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use tracing::info;

use crate::error::{ApiError, translate_domain_error};
use crate::handlers::to_optimization_request;
use crate::request_response::{OptimizeRequest, OptimizeResponse, PeriodResponse};

/// Column headers of the CSV export, in order.
pub const CSV_HEADERS: [&str; 5] = ["StartDate", "EndDate", "Days", "Type", "Reason"];

/// The value of the `Type` column for every exported row.
const LEAVE_TYPE: &str = "pto";

/// Export serialization errors.
#[derive(Debug, Error)]
pub enum ExportError {
    /// JSON serialization failed.
    #[error("Failed to serialize JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A CSV record could not be written.
    #[error("Failed to write CSV: {0}")]
    Csv(#[from] csv::Error),

    /// The CSV writer could not be flushed into its buffer.
    #[error("Failed to flush CSV output: {0}")]
    Flush(String),

    /// The CSV buffer was not valid UTF-8.
    #[error("CSV output is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    /// The export timestamp could not be formatted.
    #[error("Failed to format export timestamp: {0}")]
    Timestamp(#[from] time::error::Format),
}

impl From<ExportError> for ApiError {
    fn from(err: ExportError) -> Self {
        Self::Internal {
            message: err.to_string(),
        }
    }
}

/// A saved plan: the request, its schedule, and when it was exported.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportDocument {
    /// The request that produced the schedule.
    pub plan: OptimizeRequest,
    /// The computed schedule.
    pub schedule: OptimizeResponse,
    /// RFC 3339 export timestamp.
    pub exported_at: String,
}

#[derive(Debug, Serialize)]
struct CsvRow<'a> {
    start_date: &'a str,
    end_date: &'a str,
    days: u32,
    leave_type: &'static str,
    reason: &'a str,
}

impl<'a> From<&'a PeriodResponse> for CsvRow<'a> {
    fn from(period: &'a PeriodResponse) -> Self {
        Self {
            start_date: &period.start_date,
            end_date: &period.end_date,
            days: period.leave_days_used,
            leave_type: LEAVE_TYPE,
            reason: &period.kind,
        }
    }
}

/// Serializes a schedule and its request as a pretty-printed JSON document.
///
/// # Arguments
///
/// * `request` - The request that produced the schedule
/// * `response` - The computed schedule
/// * `exported_at` - The export timestamp
///
/// # Errors
///
/// Returns `ApiError::Internal` if serialization fails.
pub fn export_json(
    request: &OptimizeRequest,
    response: &OptimizeResponse,
    exported_at: OffsetDateTime,
) -> Result<String, ApiError> {
    let document: ExportDocument = ExportDocument {
        plan: request.clone(),
        schedule: response.clone(),
        exported_at: exported_at.format(&Rfc3339).map_err(ExportError::from)?,
    };

    let json: String = serde_json::to_string_pretty(&document).map_err(ExportError::from)?;
    info!(periods = response.periods.len(), "Exported schedule as JSON");
    Ok(json)
}

/// Serializes a schedule as CSV, one row per period.
///
/// The header row is always written, even for an empty schedule.
///
/// # Errors
///
/// Returns `ApiError::Internal` if writing fails.
pub fn export_csv(response: &OptimizeResponse) -> Result<String, ApiError> {
    write_csv(&response.periods).map_err(ApiError::from)
}

fn write_csv(periods: &[PeriodResponse]) -> Result<String, ExportError> {
    let mut writer: csv::Writer<Vec<u8>> = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());

    writer.write_record(CSV_HEADERS)?;
    for period in periods {
        writer.serialize(CsvRow::from(period))?;
    }

    let bytes: Vec<u8> = writer
        .into_inner()
        .map_err(|err| ExportError::Flush(err.to_string()))?;
    let csv: String = String::from_utf8(bytes)?;
    info!(rows = periods.len(), "Exported schedule as CSV");
    Ok(csv)
}

/// Parses a JSON export document and re-validates its embedded request.
///
/// # Arguments
///
/// * `json` - A document produced by `export_json`
///
/// # Errors
///
/// Returns an error if:
/// - The text is not a valid export document
/// - The embedded request fails parsing or validation
pub fn import_json(json: &str) -> Result<ExportDocument, ApiError> {
    let document: ExportDocument =
        serde_json::from_str(json).map_err(|err| ApiError::InvalidInput {
            field: String::from("document"),
            message: format!("Invalid export document: {err}"),
        })?;

    let request: OptimizationRequest = to_optimization_request(&document.plan)?;
    validate_budget(request.leave_days_budget).map_err(translate_domain_error)?;
    validate_window(request.window_start, request.window_end).map_err(translate_domain_error)?;

    info!(exported_at = %document.exported_at, "Imported saved plan");
    Ok(document)
}
