// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use leave_planner::CoreError;
use leave_planner_domain::DomainError;

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// A domain rule was violated.
    DomainRuleViolation {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainRuleViolation { rule, message } => {
                write!(f, "Domain rule violation ({rule}): {message}")
            }
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::InvalidBudget { budget } => ApiError::DomainRuleViolation {
            rule: String::from("positive_budget"),
            message: format!("Invalid leave budget: {budget}. Must be greater than 0"),
        },
        DomainError::InvalidRange { start, end } => ApiError::DomainRuleViolation {
            rule: String::from("window_order"),
            message: format!("Start date {start} must be before end date {end}"),
        },
        DomainError::UnknownStyle(style) => ApiError::InvalidInput {
            field: String::from("style"),
            message: format!("Unknown vacation style: '{style}'"),
        },
        DomainError::InvalidWeekendDay { index } => ApiError::InvalidInput {
            field: String::from("weekend_days"),
            message: format!(
                "Invalid weekend day index: {index}. Must be between 0 (Sunday) and 6 (Saturday)"
            ),
        },
        DomainError::EmptyWeekend => ApiError::InvalidInput {
            field: String::from("weekend_days"),
            message: String::from("Weekend must include at least one day"),
        },
        DomainError::DateParseError { date_string, error } => ApiError::InvalidInput {
            field: String::from("date"),
            message: format!("Failed to parse date '{date_string}': {error}"),
        },
    }
}

/// Translates a core error into an API error.
///
/// This translation is explicit and ensures core errors are not leaked directly.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::InvalidRequest(domain_err) => translate_domain_error(domain_err),
    }
}
