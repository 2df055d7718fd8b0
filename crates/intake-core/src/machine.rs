//! The wizard finite-state machine.
//!
//! The machine does three things: it tracks which question the user is on,
//! it hands out the prompt text for that question, and it decides which
//! commands are legal from it. Legality lives entirely in the fixed
//! transition table; a lookup miss is a defect in the command derivation
//! logic, never a consequence of user input.

use std::collections::HashMap;

use tracing::debug;

use crate::error::{IntakeError, Result};
use crate::prompts::{prompt_table, StatePrompt};

/// Wizard states. Exactly one is current at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum State {
    FirstName,
    Surname,
    BirthDate,
    Authorize,
    Marital,
    SpouseFirstName,
    SpouseSurname,
    SpouseBirthDate,
    Save,
    Confirmed,
    Denied,
    ConfirmRestart,
    Restart,
}

impl State {
    /// Session-terminal states. The machine doesn't stop here: finalizing
    /// the session issues a Continue that loops back to `FirstName`.
    pub fn is_terminal(self) -> bool {
        matches!(self, State::Confirmed | State::Denied | State::Restart)
    }
}

/// Commands that drive the machine. `Default` is the sentinel for "no
/// navigation override; domain logic decides".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Back,
    Continue,
    SpouseMode,
    SpouseBack,
    Authorize,
    Deny,
    Restart,
    Default,
}

/// The full transition table. Any (state, command) pair not listed is
/// illegal.
const TRANSITIONS: [((State, Command), State); 33] = [
    ((State::FirstName, Command::Continue), State::Surname),
    ((State::FirstName, Command::Back), State::FirstName),
    ((State::Surname, Command::Continue), State::BirthDate),
    ((State::Surname, Command::Back), State::FirstName),
    // Age verification
    ((State::BirthDate, Command::Authorize), State::Authorize),
    ((State::Authorize, Command::Continue), State::Marital),
    ((State::Authorize, Command::Deny), State::Denied),
    ((State::BirthDate, Command::Deny), State::Denied),
    ((State::BirthDate, Command::Continue), State::Marital),
    ((State::BirthDate, Command::Back), State::Surname),
    // Spouse sub-flow
    ((State::Marital, Command::SpouseMode), State::SpouseFirstName),
    ((State::SpouseFirstName, Command::Continue), State::SpouseSurname),
    ((State::SpouseFirstName, Command::Back), State::Marital),
    ((State::SpouseSurname, Command::Continue), State::SpouseBirthDate),
    ((State::SpouseSurname, Command::Back), State::SpouseFirstName),
    ((State::SpouseBirthDate, Command::Continue), State::Save),
    ((State::SpouseBirthDate, Command::Back), State::SpouseSurname),
    ((State::Marital, Command::Continue), State::Save),
    ((State::Marital, Command::Back), State::BirthDate),
    ((State::Save, Command::Continue), State::Confirmed),
    ((State::Save, Command::SpouseBack), State::SpouseBirthDate),
    ((State::Save, Command::Back), State::Marital),
    // Restart confirmation
    ((State::FirstName, Command::Restart), State::ConfirmRestart),
    ((State::Surname, Command::Restart), State::ConfirmRestart),
    ((State::BirthDate, Command::Restart), State::ConfirmRestart),
    ((State::Marital, Command::Restart), State::ConfirmRestart),
    ((State::SpouseFirstName, Command::Restart), State::ConfirmRestart),
    ((State::SpouseSurname, Command::Restart), State::ConfirmRestart),
    ((State::SpouseBirthDate, Command::Restart), State::ConfirmRestart),
    ((State::ConfirmRestart, Command::Continue), State::Restart),
    // Post-session resets; no input is taken in these states
    ((State::Confirmed, Command::Continue), State::FirstName),
    ((State::Denied, Command::Continue), State::FirstName),
    ((State::Restart, Command::Continue), State::FirstName),
];

/// Tracks the current question and resolves commands against the fixed
/// transition table.
pub struct StateMachine {
    transitions: HashMap<(State, Command), State>,
    prompts: HashMap<State, StatePrompt>,
    current: State,
    /// Single-slot memory for cancelling a restart. The table only enters
    /// `ConfirmRestart` from non-`ConfirmRestart` states, so one slot is
    /// enough; no stack needed.
    previous: State,
}

impl StateMachine {
    pub fn new() -> Self {
        Self {
            transitions: HashMap::from(TRANSITIONS),
            prompts: prompt_table().into_iter().collect(),
            current: State::FirstName,
            previous: State::FirstName,
        }
    }

    /// The state the wizard is currently in.
    pub fn current(&self) -> State {
        self.current
    }

    /// The prompt text pair registered for a state.
    pub fn prompt_for(&self, state: State) -> Result<StatePrompt> {
        self.prompts
            .get(&state)
            .copied()
            .ok_or(IntakeError::MissingPrompt(state))
    }

    /// Resolve a command against the current state and advance.
    ///
    /// Backing out of `ConfirmRestart` returns to the remembered previous
    /// state instead of consulting the table, so a cancelled restart resumes
    /// exactly where the user left off.
    pub fn transition(&mut self, command: Command) -> Result<State> {
        if self.current == State::ConfirmRestart && command == Command::Back {
            self.current = self.previous;
            debug!(state = ?self.current, "restart cancelled");
            return Ok(self.current);
        }

        let next = *self
            .transitions
            .get(&(self.current, command))
            .ok_or(IntakeError::InvalidTransition {
                state: self.current,
                command,
            })?;
        self.previous = self.current;
        self.current = next;
        debug!(?command, state = ?next, "transition");
        Ok(next)
    }
}

impl Default for StateMachine {
    fn default() -> Self {
        Self::new()
    }
}
