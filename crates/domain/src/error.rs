// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use time::Date;

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The leave-day budget is zero or negative.
    InvalidBudget {
        /// The rejected budget value.
        budget: i64,
    },
    /// The planning window is empty or inverted.
    InvalidRange {
        /// The requested window start.
        start: Date,
        /// The requested window end.
        end: Date,
    },
    /// The vacation style is not one of the recognized styles.
    UnknownStyle(String),
    /// A weekend day-of-week index is outside 0-6.
    InvalidWeekendDay {
        /// The rejected index.
        index: u8,
    },
    /// The weekend set has no days.
    EmptyWeekend,
    /// Failed to parse date from string.
    DateParseError {
        /// The invalid date string.
        date_string: String,
        /// The parsing error message.
        error: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidBudget { budget } => {
                write!(
                    f,
                    "Invalid leave budget: {budget}. Must be greater than 0"
                )
            }
            Self::InvalidRange { start, end } => {
                write!(
                    f,
                    "Invalid planning window: start date {start} must be before end date {end}"
                )
            }
            Self::UnknownStyle(style) => write!(f, "Unknown vacation style: '{style}'"),
            Self::InvalidWeekendDay { index } => {
                write!(
                    f,
                    "Invalid weekend day index: {index}. Must be between 0 (Sunday) and 6 (Saturday)"
                )
            }
            Self::EmptyWeekend => write!(f, "Weekend must include at least one day"),
            Self::DateParseError { date_string, error } => {
                write!(f, "Failed to parse date '{date_string}': {error}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
