//! The person record built up across a session, and its spouse sub-record.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Marital status values offered by the wizard.
///
/// The configured status list defaults to all variants in declaration
/// order; the user picks one by its 1-based position in that list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MaritalStatus {
    Single,
    Married,
    Separated,
    Divorced,
    Widowed,
    Partnered,
}

impl MaritalStatus {
    /// All variants, in declaration order.
    pub const ALL: [MaritalStatus; 6] = [
        MaritalStatus::Single,
        MaritalStatus::Married,
        MaritalStatus::Separated,
        MaritalStatus::Divorced,
        MaritalStatus::Widowed,
        MaritalStatus::Partnered,
    ];

    /// Whether this status puts the wizard into the spouse sub-flow.
    pub fn requires_spouse(self) -> bool {
        !matches!(
            self,
            MaritalStatus::Single | MaritalStatus::Divorced | MaritalStatus::Widowed
        )
    }

    /// The variant name as displayed and as accepted in configuration.
    pub fn name(self) -> &'static str {
        match self {
            MaritalStatus::Single => "Single",
            MaritalStatus::Married => "Married",
            MaritalStatus::Separated => "Separated",
            MaritalStatus::Divorced => "Divorced",
            MaritalStatus::Widowed => "Widowed",
            MaritalStatus::Partnered => "Partnered",
        }
    }

    /// Parse a status from its variant name.
    pub fn parse_name(name: &str) -> Option<MaritalStatus> {
        MaritalStatus::ALL
            .into_iter()
            .find(|status| status.name() == name)
    }
}

impl fmt::Display for MaritalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The record under construction for the current session, and the shape it
/// keeps once committed.
///
/// Unfilled fields stay `None` until their state is passed. The spouse
/// sub-record's presence IS spouse mode: it is allocated when a
/// spouse-requiring status is chosen and cleared when the user backs out of
/// the spouse branch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonRecord {
    pub id: usize,
    pub first_name: String,
    pub surname: String,
    pub birth_date: Option<NaiveDate>,
    pub marital_status: Option<MaritalStatus>,
    pub spouse: Option<SpouseRecord>,
}

impl PersonRecord {
    /// An empty record with the given sequential identifier.
    pub fn new(id: usize) -> Self {
        Self {
            id,
            first_name: String::new(),
            surname: String::new(),
            birth_date: None,
            marital_status: None,
            spouse: None,
        }
    }
}

/// Spouse details, linked to the owning record by `person_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpouseRecord {
    pub person_id: usize,
    pub first_name: String,
    pub surname: String,
    pub birth_date: Option<NaiveDate>,
}

impl SpouseRecord {
    /// An empty sub-record tagged with the owning record's identifier.
    pub fn new(person_id: usize) -> Self {
        Self {
            person_id,
            first_name: String::new(),
            surname: String::new(),
            birth_date: None,
        }
    }
}
