// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use leave_planner_domain::DomainError;

/// Errors that can occur before an optimization run starts.
///
/// Every variant is a validation failure; once a request is accepted the
/// engine itself cannot fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// The request broke a domain rule (budget, window, style, weekend).
    InvalidRequest(DomainError),
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidRequest(err) => write!(f, "Invalid optimization request: {err}"),
        }
    }
}

impl std::error::Error for CoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidRequest(err) => Some(err),
        }
    }
}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::InvalidRequest(err)
    }
}
