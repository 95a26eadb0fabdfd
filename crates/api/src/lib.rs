// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API boundary for the leave planner.
//!
//! Translates string-typed requests into engine requests, engine schedules
//! into response DTOs, and schedules into their JSON and CSV export forms.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod dates;
mod error;
mod export;
mod handlers;
mod request_response;

#[cfg(test)]
mod tests;

pub use dates::{format_date, parse_date, parse_dates};
pub use error::{ApiError, translate_core_error, translate_domain_error};
pub use export::{CSV_HEADERS, ExportDocument, ExportError, export_csv, export_json, import_json};
pub use handlers::{build_optimize_response, list_styles, optimize, to_optimization_request};
pub use request_response::{
    ListStylesResponse, MetadataResponse, OptimizeRequest, OptimizeResponse, PeriodResponse,
    StyleInfo,
};
