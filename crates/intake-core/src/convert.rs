//! Conversions from validated text to typed values.

use chrono::{Datelike, NaiveDate};

use crate::config::Config;
use crate::error::{IntakeError, Result};
use crate::record::MaritalStatus;

/// Date format accepted everywhere a date is typed, and used to echo parsed
/// dates back to the display.
pub const DATE_FORMAT: &str = "%m/%d/%Y";

/// Strictly parse an `MM/DD/YYYY` date.
///
/// chrono accepts unpadded month and day fields, so the separator positions
/// are checked first to keep the zero-padded ten-character form mandatory.
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    let bytes = input.as_bytes();
    if bytes.len() != 10 || bytes[2] != b'/' || bytes[5] != b'/' {
        return Err(invalid_date(input));
    }
    NaiveDate::parse_from_str(input, DATE_FORMAT).map_err(|_| invalid_date(input))
}

fn invalid_date(input: &str) -> IntakeError {
    IntakeError::Validation(format!("\"{}\" is not a date in MM/DD/YYYY format.", input))
}

/// Render a date in the same `MM/DD/YYYY` form the user types.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Whole years elapsed between `birth` and `today`, one less before the
/// anniversary has passed.
pub fn age_on(birth: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - birth.year();
    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        age -= 1;
    }
    age
}

/// Resolve a 1-based menu index against the configured status list.
pub fn marital_from_index(input: &str, config: &Config) -> Result<MaritalStatus> {
    let index: usize = input.trim().parse().map_err(|_| {
        IntakeError::Validation(format!("\"{}\" cannot be parsed as a number.", input))
    })?;
    index
        .checked_sub(1)
        .and_then(|position| config.statuses.get(position))
        .copied()
        .ok_or_else(|| {
            IntakeError::Validation(format!("{} does not correspond to a marital status.", index))
        })
}

/// `"y"`/`"Y"` mean yes; any other validated answer means no.
pub fn yes_no(input: &str) -> bool {
    matches!(input, "y" | "Y")
}
