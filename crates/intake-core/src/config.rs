//! Wizard configuration.
//!
//! An explicit value object constructed once at process start and passed by
//! reference into the validators and the input processor. Loading is
//! best-effort: a missing file, unknown keys, and unparsable values all fall
//! back to the defaults, so startup never fails on configuration.

use std::fmt::Write as _;
use std::path::Path;

use crate::record::MaritalStatus;

mod defaults {
    pub const NAME_MIN_LENGTH: usize = 2;
    pub const NAME_MAX_LENGTH: usize = 25;
    pub const AGE_MAX: i32 = 150;
    pub const AGE_DENY_THRESHOLD: i32 = 16;
    pub const AGE_AUTH_THRESHOLD: i32 = 18;
}

/// Validation limits and the marital status list.
#[derive(Debug, Clone)]
pub struct Config {
    /// Inclusive lower bound on name length
    pub name_min_length: usize,
    /// Inclusive upper bound on name length
    pub name_max_length: usize,
    /// Oldest accepted age in whole years
    pub age_max: i32,
    /// Ages below this are denied registration
    pub age_deny_threshold: i32,
    /// Ages below this (but at or above the deny threshold) need guardian
    /// authorization
    pub age_auth_threshold: i32,
    /// Statuses offered on the marital prompt, menu order
    pub statuses: Vec<MaritalStatus>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            name_min_length: defaults::NAME_MIN_LENGTH,
            name_max_length: defaults::NAME_MAX_LENGTH,
            age_max: defaults::AGE_MAX,
            age_deny_threshold: defaults::AGE_DENY_THRESHOLD,
            age_auth_threshold: defaults::AGE_AUTH_THRESHOLD,
            statuses: MaritalStatus::ALL.to_vec(),
        }
    }
}

impl Config {
    /// Read configuration from a key=value file.
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(contents) => Self::parse(&contents),
            Err(_) => Self::default(),
        }
    }

    /// Parse key=value lines, one setting per line.
    ///
    /// Lines that don't split on `=`, keys that aren't recognized, and
    /// values that don't parse are skipped, leaving that setting at its
    /// default.
    pub fn parse(contents: &str) -> Self {
        let mut config = Self::default();

        for line in contents.lines() {
            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            let value = value.trim();

            match key.trim() {
                "Name_MinLength" => {
                    if let Ok(parsed) = value.parse() {
                        config.name_min_length = parsed;
                    }
                }
                "Name_MaxLength" => {
                    if let Ok(parsed) = value.parse() {
                        config.name_max_length = parsed;
                    }
                }
                "Age_Max" => {
                    if let Ok(parsed) = value.parse() {
                        config.age_max = parsed;
                    }
                }
                "Age_DenyThreshold" => {
                    if let Ok(parsed) = value.parse() {
                        config.age_deny_threshold = parsed;
                    }
                }
                "Age_AuthThreshold" => {
                    if let Ok(parsed) = value.parse() {
                        config.age_auth_threshold = parsed;
                    }
                }
                "MaritalStatuses" => {
                    let statuses: Option<Vec<MaritalStatus>> = value
                        .split(',')
                        .map(|name| MaritalStatus::parse_name(name.trim()))
                        .collect();
                    match statuses {
                        Some(statuses) if !statuses.is_empty() => config.statuses = statuses,
                        _ => {}
                    }
                }
                _ => {}
            }
        }

        config
    }

    /// Render the configured statuses as a numbered menu, one per line.
    /// Indices are 1-based to match what the marital prompt asks for.
    pub fn status_menu(&self) -> String {
        let mut out = String::new();
        for (index, status) in self.statuses.iter().enumerate() {
            let _ = writeln!(out, "{}. {}", index + 1, status);
        }
        out
    }

    /// Effective settings, one per line, for startup diagnostics.
    pub fn summary(&self) -> String {
        let statuses: Vec<&str> = self.statuses.iter().map(|status| status.name()).collect();
        format!(
            "Name_MinLength = {}\nName_MaxLength = {}\nAge_Max = {}\nAge_DenyThreshold = {}\nAge_AuthThreshold = {}\nMaritalStatuses = {}",
            self.name_min_length,
            self.name_max_length,
            self.age_max,
            self.age_deny_threshold,
            self.age_auth_threshold,
            statuses.join(",")
        )
    }
}
