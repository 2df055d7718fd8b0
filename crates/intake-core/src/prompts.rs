//! Fixed prompt text for the user-facing states.
//!
//! Every state the user answers from has a (prompt, detail) pair. The
//! terminal `Restart` state has none: the session resets before anything
//! would be shown for it.

use crate::machine::State;

/// Prompt text pair shown for a user-facing state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatePrompt {
    pub prompt: &'static str,
    pub detail: &'static str,
}

const LETTERS_ONLY: &str = "Note that only English characters are supported at this time.";
const DATE_FORMAT_HINT: &str = "The format should be mm/dd/yyyy. Example: 07/21/1993";

/// The prompt registered for each user-facing state.
pub fn prompt_table() -> [(State, StatePrompt); 12] {
    [
        (
            State::FirstName,
            StatePrompt {
                prompt: "Please enter your FIRST NAME.",
                detail: LETTERS_ONLY,
            },
        ),
        (
            State::Surname,
            StatePrompt {
                prompt: "Please enter your LAST NAME.",
                detail: LETTERS_ONLY,
            },
        ),
        (
            State::BirthDate,
            StatePrompt {
                prompt: "Please enter your DATE OF BIRTH.",
                detail: DATE_FORMAT_HINT,
            },
        ),
        (
            State::Authorize,
            StatePrompt {
                prompt: "You need your parent or guardian's permission to register.",
                detail: "Have you gotten permission from them to register for this service? (y/n)",
            },
        ),
        (
            State::Marital,
            StatePrompt {
                prompt: "Please enter your MARITAL STATUS based on the choices below.",
                detail: "Enter the number that corresponds with your status.",
            },
        ),
        (
            State::SpouseFirstName,
            StatePrompt {
                prompt: "Please enter your SPOUSE'S FIRST NAME.",
                detail: LETTERS_ONLY,
            },
        ),
        (
            State::SpouseSurname,
            StatePrompt {
                prompt: "Please enter your SPOUSE'S LAST NAME.",
                detail: LETTERS_ONLY,
            },
        ),
        (
            State::SpouseBirthDate,
            StatePrompt {
                prompt: "Please enter your SPOUSE'S DATE OF BIRTH.",
                detail: DATE_FORMAT_HINT,
            },
        ),
        (
            State::Save,
            StatePrompt {
                prompt: "Please review your entries above.",
                detail: "Do you wish to submit and finalize your details? (y/n)",
            },
        ),
        (
            State::Confirmed,
            StatePrompt {
                prompt: "Thank you! Your information has been saved.",
                detail: "Please make space for the next person in line. This message will time out in:",
            },
        ),
        (
            State::Denied,
            StatePrompt {
                prompt: "You are too young to register for this service.",
                detail: "Please come back with a parent or guardian. This message will time out in:",
            },
        ),
        (
            State::ConfirmRestart,
            StatePrompt {
                prompt: "Are you sure you'd like to undo all changes and restart?",
                detail: "Enter y to confirm and n to cancel.",
            },
        ),
    ]
}
