//! Per-field input validation.
//!
//! Validators are pure: configuration and the current date come in as
//! arguments, and failures come back as `IntakeError::Validation` values
//! for the caller to re-prompt with.
//!
//! The navigation sentinels `"b"` and `"r"` pass every validator verbatim
//! except the yes/no one; the processor intercepts them downstream. Only
//! the lower-case forms are sentinels.

use chrono::NaiveDate;

use crate::config::Config;
use crate::convert;
use crate::error::{IntakeError, Result};

/// Navigation sentinel: move one step back.
pub const BACK_TOKEN: &str = "b";
/// Navigation sentinel: restart the session.
pub const RESTART_TOKEN: &str = "r";

fn is_navigation(input: &str) -> bool {
    input == BACK_TOKEN || input == RESTART_TOKEN
}

fn require_non_blank(input: &str) -> Result<()> {
    if input.trim().is_empty() {
        return Err(IntakeError::Validation("Input cannot be empty.".to_string()));
    }
    Ok(())
}

/// Validate a name field: letters only, length within the configured bounds.
pub fn validate_name(input: &str, config: &Config) -> Result<String> {
    require_non_blank(input)?;
    if is_navigation(input) {
        return Ok(input.to_string());
    }

    if !input.chars().all(char::is_alphabetic) {
        return Err(IntakeError::Validation(
            "Name must only contain letters.".to_string(),
        ));
    }

    let length = input.chars().count();
    if length < config.name_min_length || length > config.name_max_length {
        return Err(IntakeError::Validation(format!(
            "Name must be at least {} characters in length and no more than {} characters in length.",
            config.name_min_length, config.name_max_length
        )));
    }

    Ok(input.to_string())
}

/// Validate a birth date: strict `MM/DD/YYYY`, not in the future, age within
/// the configured maximum.
pub fn validate_date(input: &str, config: &Config, today: NaiveDate) -> Result<String> {
    require_non_blank(input)?;
    if is_navigation(input) {
        return Ok(input.to_string());
    }

    let date = convert::parse_date(input)
        .map_err(|_| IntakeError::Validation("Invalid date. Check formatting and try again.".to_string()))?;

    if date > today {
        return Err(IntakeError::Validation(
            "Date of birth cannot be in the future.".to_string(),
        ));
    }

    if convert::age_on(date, today) > config.age_max {
        return Err(IntakeError::Validation(format!(
            "Age cannot be greater than {}.",
            config.age_max
        )));
    }

    Ok(input.to_string())
}

/// Validate a marital status choice: an integer within the 1-based bounds of
/// the configured status list.
pub fn validate_marital_index(input: &str, config: &Config) -> Result<String> {
    require_non_blank(input)?;
    if is_navigation(input) {
        return Ok(input.to_string());
    }

    let index: i64 = input.trim().parse().map_err(|_| {
        IntakeError::Validation(
            "Input must be a number. Consult the list above to determine which number to enter."
                .to_string(),
        )
    })?;

    if index < 1 || index > config.statuses.len() as i64 {
        return Err(IntakeError::Validation(
            "Input must correspond with a marital status. Consult the list above to determine which number to enter."
                .to_string(),
        ));
    }

    Ok(input.to_string())
}

/// Validate a yes/no answer. Navigation is disabled on yes/no prompts, so
/// `"b"` and `"r"` fail here like any other stray input.
pub fn validate_yes_no(input: &str) -> Result<String> {
    if matches!(input, "Y" | "y" | "N" | "n") {
        Ok(input.to_string())
    } else {
        Err(IntakeError::Validation(
            "Please type either y for yes or n for no.".to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 4).unwrap()
    }

    #[test]
    fn test_blank_input_fails_everywhere() {
        let config = Config::default();
        for input in ["", " ", "\t"] {
            assert!(validate_name(input, &config).is_err());
            assert!(validate_date(input, &config, today()).is_err());
            assert!(validate_marital_index(input, &config).is_err());
            assert!(validate_yes_no(input).is_err());
        }
    }

    #[test]
    fn test_navigation_tokens_pass_all_but_yes_no() {
        let config = Config::default();
        for token in [BACK_TOKEN, RESTART_TOKEN] {
            assert_eq!(validate_name(token, &config).unwrap(), token);
            assert_eq!(validate_date(token, &config, today()).unwrap(), token);
            assert_eq!(validate_marital_index(token, &config).unwrap(), token);
            assert!(validate_yes_no(token).is_err());
        }
    }

    #[test]
    fn test_upper_case_tokens_are_not_sentinels() {
        let config = Config::default();
        // "B" and "R" are ordinary input; as one-letter names they fail the
        // minimum length instead of passing through.
        assert!(validate_name("B", &config).is_err());
        assert!(validate_date("R", &config, today()).is_err());
    }

    #[test]
    fn test_name_length_bounds_are_inclusive() {
        let config = Config::default();
        let at_max = "a".repeat(config.name_max_length);
        let over_max = "a".repeat(config.name_max_length + 1);
        let at_min = "a".repeat(config.name_min_length);
        let under_min = "a".repeat(config.name_min_length - 1);

        assert_eq!(validate_name(&at_max, &config).unwrap(), at_max);
        assert!(validate_name(&over_max, &config).is_err());
        assert_eq!(validate_name(&at_min, &config).unwrap(), at_min);
        assert!(validate_name(&under_min, &config).is_err());
    }

    #[test]
    fn test_name_rejects_non_letters() {
        let config = Config::default();
        assert!(validate_name("andrew1", &config).is_err());
        assert!(validate_name("and rew", &config).is_err());
        assert!(validate_name("and@rew", &config).is_err());
    }

    #[test]
    fn test_date_format_is_strict() {
        let config = Config::default();
        assert_eq!(
            validate_date("07/21/1993", &config, today()).unwrap(),
            "07/21/1993"
        );
        for wrong in ["2003-04-21", "21/04/2005", "09-21-2001"] {
            assert!(validate_date(wrong, &config, today()).is_err());
        }
    }

    #[test]
    fn test_date_today_passes_tomorrow_fails() {
        let config = Config::default();
        let now = today();
        let tomorrow = now.succ_opt().unwrap();

        assert!(validate_date(&convert::format_date(now), &config, now).is_ok());
        assert!(validate_date(&convert::format_date(tomorrow), &config, now).is_err());
    }

    #[test]
    fn test_date_age_max_boundary() {
        let config = Config::default();
        let now = today();
        let at_max = now.with_year(now.year() - config.age_max).unwrap();
        let over_max = now.with_year(now.year() - config.age_max - 1).unwrap();

        assert!(validate_date(&convert::format_date(at_max), &config, now).is_ok());
        assert!(validate_date(&convert::format_date(over_max), &config, now).is_err());
    }

    #[test]
    fn test_marital_index_bounds() {
        let config = Config::default();
        let count = config.statuses.len();

        assert!(validate_marital_index("0", &config).is_err());
        assert!(validate_marital_index(&(count + 1).to_string(), &config).is_err());
        for index in 1..=count {
            assert!(validate_marital_index(&index.to_string(), &config).is_ok());
        }
        assert!(validate_marital_index("andrew", &config).is_err());
        assert!(validate_marital_index("@", &config).is_err());
    }

    #[test]
    fn test_yes_no_accepts_only_four_answers() {
        for accepted in ["Y", "y", "N", "n"] {
            assert_eq!(validate_yes_no(accepted).unwrap(), accepted);
        }
        for rejected in ["yes", "no", "Q", "0"] {
            assert!(validate_yes_no(rejected).is_err());
        }
    }
}
