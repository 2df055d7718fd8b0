//! The input-processing pipeline.
//!
//! One call to [`InputProcessor::process_input`] handles one submitted
//! answer:
//!
//! 1. validate the raw text against the current state's field kind
//! 2. intercept the back/restart navigation sentinels
//! 3. otherwise derive the domain command for the state machine
//! 4. write the converted value into the in-progress record
//! 5. forward the command to the state machine
//!
//! Validation failures leave the record and the machine untouched; the
//! caller re-prompts the same field. Navigation commands skip steps 3 and 4
//! and echo nothing.

use chrono::{Local, NaiveDate};
use tracing::debug;

use crate::config::Config;
use crate::convert;
use crate::error::{IntakeError, Result};
use crate::machine::{Command, State, StateMachine};
use crate::record::{PersonRecord, SpouseRecord};
use crate::storage::RecordStore;
use crate::validate::{self, BACK_TOKEN, RESTART_TOKEN};

enum FieldKind {
    Name,
    Date,
    MaritalIndex,
    YesNo,
}

/// The field kind validated in a state, if the state takes field input at
/// all. Terminal states take none: feeding them input is caller misuse and
/// surfaces as an invalid transition.
fn field_kind(state: State) -> Option<FieldKind> {
    match state {
        State::FirstName | State::Surname | State::SpouseFirstName | State::SpouseSurname => {
            Some(FieldKind::Name)
        }
        State::BirthDate | State::SpouseBirthDate => Some(FieldKind::Date),
        State::Marital => Some(FieldKind::MaritalIndex),
        State::Authorize | State::Save | State::ConfirmRestart => Some(FieldKind::YesNo),
        State::Confirmed | State::Denied | State::Restart => None,
    }
}

/// Owns the session: the state machine, the record being built, and the
/// collection of previously committed records.
pub struct InputProcessor<S: RecordStore> {
    config: Config,
    machine: StateMachine,
    store: S,
    committed: Vec<PersonRecord>,
    record: PersonRecord,
}

impl<S: RecordStore> InputProcessor<S> {
    /// Load the committed collection from the store and open a session for
    /// the next record.
    pub fn new(config: Config, store: S) -> Result<Self> {
        let committed = store.load_all()?;
        let record = PersonRecord::new(committed.len());
        debug!(committed = committed.len(), id = record.id, "session opened");
        Ok(Self {
            config,
            machine: StateMachine::new(),
            store,
            committed,
            record,
        })
    }

    pub fn current_state(&self) -> State {
        self.machine.current()
    }

    /// Prompt and detail text for the current state, newline-joined.
    pub fn state_text(&self) -> Result<String> {
        let prompt = self.machine.prompt_for(self.machine.current())?;
        Ok(format!("{}\n{}", prompt.prompt, prompt.detail))
    }

    /// Whether the spouse sub-flow is active. Equivalent to the spouse
    /// sub-record being present.
    pub fn spouse_mode(&self) -> bool {
        self.record.spouse.is_some()
    }

    /// The record under construction.
    pub fn record(&self) -> &PersonRecord {
        &self.record
    }

    /// Previously committed records, oldest first.
    pub fn committed(&self) -> &[PersonRecord] {
        &self.committed
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The backing store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Run the pipeline on one submitted answer against today's date.
    /// Returns the text to echo into the field display.
    pub fn process_input(&mut self, raw: &str) -> Result<String> {
        self.process_input_on(raw, Local::now().date_naive())
    }

    /// Same pipeline with an explicit `today`, so date-sensitive flows stay
    /// deterministic under test.
    pub fn process_input_on(&mut self, raw: &str, today: NaiveDate) -> Result<String> {
        let validated = self.validate(raw, today)?;

        let mut command = self.catch_back_or_restart(&validated);
        let echo = if command == Command::Default {
            command = self.determine_command(&validated, today)?;
            self.write_record(&validated)?
        } else {
            // Navigation writes nothing into the record.
            String::new()
        };

        self.machine.transition(command)?;
        Ok(echo)
    }

    /// Step 1: validate against the current state's field kind.
    fn validate(&self, raw: &str, today: NaiveDate) -> Result<String> {
        match field_kind(self.machine.current()) {
            Some(FieldKind::Name) => validate::validate_name(raw, &self.config),
            Some(FieldKind::Date) => validate::validate_date(raw, &self.config, today),
            Some(FieldKind::MaritalIndex) => validate::validate_marital_index(raw, &self.config),
            Some(FieldKind::YesNo) => validate::validate_yes_no(raw),
            None => Ok(String::new()),
        }
    }

    /// Step 2: intercept the navigation sentinels.
    fn catch_back_or_restart(&mut self, input: &str) -> Command {
        if input == BACK_TOKEN {
            if self.machine.current() == State::SpouseFirstName {
                // Leaving the spouse branch through its first field discards
                // the partial sub-record rather than leaving it stale.
                self.record.spouse = None;
                debug!("spouse mode deactivated");
            }
            Command::Back
        } else if input == RESTART_TOKEN {
            Command::Restart
        } else {
            Command::Default
        }
    }

    /// Step 3: derive the domain command from the validated value.
    fn determine_command(&mut self, input: &str, today: NaiveDate) -> Result<Command> {
        let command = match self.machine.current() {
            State::FirstName
            | State::Surname
            | State::SpouseFirstName
            | State::SpouseSurname
            | State::SpouseBirthDate => Command::Continue,

            State::BirthDate => {
                let birth = convert::parse_date(input)?;
                let age = convert::age_on(birth, today);
                if age < self.config.age_deny_threshold {
                    Command::Deny
                } else if age < self.config.age_auth_threshold {
                    Command::Authorize
                } else {
                    Command::Continue
                }
            }

            State::Authorize => {
                if convert::yes_no(input) {
                    Command::Continue
                } else {
                    Command::Deny
                }
            }

            State::Marital => {
                let status = convert::marital_from_index(input, &self.config)?;
                if status.requires_spouse() {
                    self.record.spouse = Some(SpouseRecord::new(self.record.id));
                    debug!(%status, "spouse mode activated");
                    Command::SpouseMode
                } else {
                    Command::Continue
                }
            }

            State::Save => {
                if convert::yes_no(input) {
                    Command::Continue
                } else if self.record.spouse.is_some() {
                    Command::SpouseBack
                } else {
                    Command::Back
                }
            }

            State::ConfirmRestart => {
                if convert::yes_no(input) {
                    Command::Continue
                } else {
                    Command::Back
                }
            }

            // No domain logic; the transition lookup will reject Default.
            State::Confirmed | State::Denied | State::Restart => Command::Default,
        };
        Ok(command)
    }

    /// Step 4: write the converted value into the record. Returns the echo
    /// text, which for dates and the marital status is the canonical
    /// rendering of the converted value rather than the raw input.
    fn write_record(&mut self, input: &str) -> Result<String> {
        let echo = match self.machine.current() {
            State::FirstName => {
                self.record.first_name = input.to_string();
                input.to_string()
            }
            State::Surname => {
                self.record.surname = input.to_string();
                input.to_string()
            }
            State::BirthDate => {
                let date = convert::parse_date(input)?;
                self.record.birth_date = Some(date);
                convert::format_date(date)
            }
            State::Marital => {
                let status = convert::marital_from_index(input, &self.config)?;
                self.record.marital_status = Some(status);
                status.to_string()
            }
            State::SpouseFirstName => {
                if let Some(spouse) = self.record.spouse.as_mut() {
                    spouse.first_name = input.to_string();
                }
                input.to_string()
            }
            State::SpouseSurname => {
                if let Some(spouse) = self.record.spouse.as_mut() {
                    spouse.surname = input.to_string();
                }
                input.to_string()
            }
            State::SpouseBirthDate => {
                let date = convert::parse_date(input)?;
                if let Some(spouse) = self.record.spouse.as_mut() {
                    spouse.birth_date = Some(date);
                }
                convert::format_date(date)
            }
            _ => input.to_string(),
        };
        Ok(echo)
    }

    /// Step 5 happens in `process_input_on`; this closes the session.
    ///
    /// At `Confirmed` the record is appended to the committed collection and
    /// persisted; at `Denied` or `Restart` it is discarded. Either way the
    /// machine loops back to `FirstName` and a fresh record is allocated
    /// with the next sequential identifier. Outside the terminal states
    /// this is a no-op, so a stray call never drops a session in progress.
    pub fn finalize_or_discard(&mut self) -> Result<()> {
        match self.machine.current() {
            State::Confirmed => {
                self.store.append(&self.record)?;
                self.committed.push(self.record.clone());
                debug!(id = self.record.id, "record committed");
                self.machine.transition(Command::Continue)?;
            }
            State::Denied | State::Restart => {
                debug!(id = self.record.id, "record discarded");
                self.machine.transition(Command::Continue)?;
            }
            _ => return Ok(()),
        }

        self.record = PersonRecord::new(self.committed.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::MaritalStatus;
    use crate::storage::MemoryStore;

    fn processor() -> InputProcessor<MemoryStore> {
        InputProcessor::new(Config::default(), MemoryStore::new()).unwrap()
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 4).unwrap()
    }

    fn feed(processor: &mut InputProcessor<MemoryStore>, inputs: &[&str]) {
        for input in inputs {
            processor.process_input_on(input, today()).unwrap();
        }
    }

    #[test]
    fn test_names_advance_and_echo_verbatim() {
        let mut processor = processor();
        let echo = processor.process_input_on("Ada", today()).unwrap();
        assert_eq!(echo, "Ada");
        assert_eq!(processor.record().first_name, "Ada");
        assert_eq!(processor.current_state(), State::Surname);
    }

    #[test]
    fn test_validation_failure_leaves_state_and_record_untouched() {
        let mut processor = processor();
        let err = processor.process_input_on("Ada1", today()).unwrap_err();
        assert!(err.is_user_error());
        assert_eq!(processor.current_state(), State::FirstName);
        assert!(processor.record().first_name.is_empty());
    }

    #[test]
    fn test_birth_date_echo_is_canonical() {
        let mut processor = processor();
        feed(&mut processor, &["Ada", "Lovelace"]);
        let echo = processor.process_input_on("07/21/1993", today()).unwrap();
        assert_eq!(echo, "07/21/1993");
        assert_eq!(
            processor.record().birth_date,
            NaiveDate::from_ymd_opt(1993, 7, 21)
        );
        assert_eq!(processor.current_state(), State::Marital);
    }

    #[test]
    fn test_marital_echo_is_status_name() {
        let mut processor = processor();
        feed(&mut processor, &["Ada", "Lovelace", "07/21/1993"]);
        let echo = processor.process_input_on("2", today()).unwrap();
        assert_eq!(echo, "Married");
        assert_eq!(
            processor.record().marital_status,
            Some(MaritalStatus::Married)
        );
        assert!(processor.spouse_mode());
        assert_eq!(processor.current_state(), State::SpouseFirstName);
    }

    #[test]
    fn test_back_echoes_nothing() {
        let mut processor = processor();
        feed(&mut processor, &["Ada"]);
        let echo = processor.process_input_on("b", today()).unwrap();
        assert_eq!(echo, "");
        assert_eq!(processor.current_state(), State::FirstName);
        // The previously written value stays; only navigation happened.
        assert_eq!(processor.record().first_name, "Ada");
    }

    #[test]
    fn test_back_from_spouse_first_name_clears_spouse_mode() {
        let mut processor = processor();
        feed(&mut processor, &["Ada", "Lovelace", "07/21/1993", "2"]);
        assert!(processor.spouse_mode());

        processor.process_input_on("b", today()).unwrap();
        assert!(!processor.spouse_mode());
        assert_eq!(processor.current_state(), State::Marital);
    }

    #[test]
    fn test_spouse_record_is_fresh_after_reentry() {
        let mut processor = processor();
        feed(&mut processor, &["Ada", "Lovelace", "07/21/1993", "2", "William"]);
        assert_eq!(
            processor.record().spouse.as_ref().unwrap().first_name,
            "William"
        );

        // Back out of the branch, then re-enter with the same status.
        feed(&mut processor, &["b", "b", "2"]);
        let spouse = processor.record().spouse.as_ref().unwrap();
        assert!(spouse.first_name.is_empty());
        assert_eq!(spouse.person_id, processor.record().id);
    }

    #[test]
    fn test_single_status_skips_spouse_flow() {
        let mut processor = processor();
        feed(&mut processor, &["Ada", "Lovelace", "07/21/1993"]);
        processor.process_input_on("1", today()).unwrap();
        assert!(!processor.spouse_mode());
        assert_eq!(processor.current_state(), State::Save);
    }

    #[test]
    fn test_save_no_returns_to_marital_without_spouse() {
        let mut processor = processor();
        feed(&mut processor, &["Ada", "Lovelace", "07/21/1993", "1"]);
        processor.process_input_on("n", today()).unwrap();
        assert_eq!(processor.current_state(), State::Marital);
    }

    #[test]
    fn test_save_no_returns_to_spouse_birth_date_with_spouse() {
        let mut processor = processor();
        feed(
            &mut processor,
            &["Ada", "Lovelace", "07/21/1993", "2", "William", "King", "02/21/1985"],
        );
        assert_eq!(processor.current_state(), State::Save);
        processor.process_input_on("n", today()).unwrap();
        assert_eq!(processor.current_state(), State::SpouseBirthDate);
    }

    #[test]
    fn test_input_at_terminal_state_is_engine_error() {
        let mut processor = processor();
        feed(&mut processor, &["Ada", "Lovelace", "07/21/1993", "1", "y"]);
        assert_eq!(processor.current_state(), State::Confirmed);

        let err = processor.process_input_on("y", today()).unwrap_err();
        assert!(!err.is_user_error());
        assert!(matches!(err, IntakeError::InvalidTransition { .. }));
    }

    #[test]
    fn test_state_text_joins_prompt_and_detail() {
        let processor = processor();
        let text = processor.state_text().unwrap();
        assert!(text.starts_with("Please enter your FIRST NAME."));
        assert!(text.contains('\n'));
    }
}
