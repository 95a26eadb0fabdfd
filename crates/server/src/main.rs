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
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use axum::{
    Json, Router,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use clap::Parser;
use leave_planner_api::{
    ApiError, ExportDocument, ListStylesResponse, OptimizeRequest, OptimizeResponse, export_csv,
    export_json, import_json, list_styles, optimize,
};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use tracing::{error, info};

/// Leave Planner Server - HTTP server for the leave planner
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Address to bind the server to
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,
}

/// Error response type.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
    /// Error message.
    message: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::DomainRuleViolation { .. } => Self {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                message: err.to_string(),
            },
            ApiError::InvalidInput { .. } => Self {
                status: StatusCode::BAD_REQUEST,
                message: err.to_string(),
            },
            ApiError::Internal { .. } => {
                error!(error = %err, "Internal error");
                Self {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    message: err.to_string(),
                }
            }
        }
    }
}

const JSON_DISPOSITION: &str = "attachment; filename=\"leave-plan.json\"";
const CSV_DISPOSITION: &str = "attachment; filename=\"leave-plan.csv\"";

/// Wraps an export body with its content type and download file name.
fn attachment(content_type: &'static str, disposition: &'static str, body: String) -> Response {
    (
        [
            (header::CONTENT_TYPE, content_type),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        body,
    )
        .into_response()
}

/// Runs engine work on the blocking pool so it never stalls the executor.
async fn run_blocking<T, F>(work: F) -> Result<T, HttpError>
where
    F: FnOnce() -> Result<T, ApiError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(work)
        .await
        .map_err(|err| {
            error!(error = %err, "Engine task failed");
            HttpError {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                message: format!("Engine task failed: {err}"),
            }
        })?
        .map_err(HttpError::from)
}

/// Handler for GET `/styles` endpoint.
///
/// Lists the selectable vacation styles.
#[allow(clippy::unused_async)]
async fn handle_list_styles() -> Json<ListStylesResponse> {
    info!("Handling list_styles request");
    Json(list_styles())
}

/// Handler for POST `/optimize` endpoint.
///
/// Computes a leave schedule for the request.
async fn handle_optimize(
    Json(req): Json<OptimizeRequest>,
) -> Result<Json<OptimizeResponse>, HttpError> {
    info!(
        budget = req.leave_days_budget,
        style = %req.style,
        start_date = %req.start_date,
        end_date = %req.end_date,
        "Handling optimize request"
    );

    let response: OptimizeResponse = run_blocking(move || optimize(&req)).await?;
    Ok(Json(response))
}

/// Handler for POST `/export/json` endpoint.
///
/// Computes the schedule and returns it with its request as a JSON document.
async fn handle_export_json(Json(req): Json<OptimizeRequest>) -> Result<Response, HttpError> {
    info!(style = %req.style, "Handling export_json request");

    let document: String = run_blocking(move || {
        let response: OptimizeResponse = optimize(&req)?;
        export_json(&req, &response, OffsetDateTime::now_utc())
    })
    .await?;
    Ok(attachment("application/json", JSON_DISPOSITION, document))
}

/// Handler for POST `/export/csv` endpoint.
///
/// Computes the schedule and returns it as CSV, one row per period.
async fn handle_export_csv(Json(req): Json<OptimizeRequest>) -> Result<Response, HttpError> {
    info!(style = %req.style, "Handling export_csv request");

    let csv: String = run_blocking(move || export_csv(&optimize(&req)?)).await?;
    Ok(attachment("text/csv; charset=utf-8", CSV_DISPOSITION, csv))
}

/// Handler for POST `/import` endpoint.
///
/// Accepts a saved export document and recomputes its schedule from the
/// embedded request.
async fn handle_import(body: String) -> Result<Json<OptimizeResponse>, HttpError> {
    info!(bytes = body.len(), "Handling import request");

    let response: OptimizeResponse = run_blocking(move || {
        let document: ExportDocument = import_json(&body)?;
        optimize(&document.plan)
    })
    .await?;
    Ok(Json(response))
}

/// Builds the application router.
fn build_router() -> Router {
    Router::new()
        .route("/styles", get(handle_list_styles))
        .route("/optimize", post(handle_optimize))
        .route("/export/json", post(handle_export_json))
        .route("/export/csv", post(handle_export_csv))
        .route("/import", post(handle_import))
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Leave Planner Server");

    let app: Router = build_router();

    // Bind to address
    let addr: std::net::SocketAddr = format!("{}:{}", args.host, args.port).parse()?;
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
