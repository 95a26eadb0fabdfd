// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use crate::OptimizeRequest;

/// January 2024 with Martin Luther King Jr. Day, one leave day, long weekends.
pub fn create_test_request() -> OptimizeRequest {
    OptimizeRequest {
        leave_days_budget: 1,
        start_date: String::from("2024-01-01"),
        end_date: String::from("2024-01-31"),
        holidays: vec![String::from("2024-01-15")],
        company_off_days: Vec::new(),
        style: String::from("long_weekends"),
        weekend_days: vec![0, 6],
    }
}

/// Parses an `OptimizeRequest` from JSON, relying on field defaults.
pub fn request_from_json(json: &str) -> OptimizeRequest {
    serde_json::from_str(json).unwrap()
}
