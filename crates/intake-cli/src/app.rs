//! The interactive session loop.
//!
//! One outer iteration per record session: render the banner and the blank
//! form, then feed lines through the input processor until the wizard lands
//! on a terminal state, then finalize (persist or discard) and loop. Ends
//! cleanly on EOF; everything else that stops the loop is a genuine error.

use intake_core::{InputProcessor, RecordStore, State};

use crate::constants::RESET_COUNTDOWN_SECS;
use crate::ui;

pub fn run<S: RecordStore>(mut processor: InputProcessor<S>) -> anyhow::Result<()> {
    let mut error_message = String::new();

    loop {
        ui::banner();
        ui::form(processor.record());

        while !processor.current_state().is_terminal() {
            let state = processor.current_state();
            ui::error(&error_message);
            let menu = (state == State::Marital).then(|| processor.config());
            ui::prompt(&processor.state_text()?, menu);

            let Some(line) = ui::read_line()? else {
                // EOF: external shutdown, not an error.
                return Ok(());
            };

            match processor.process_input(&line) {
                Ok(_) => {
                    error_message.clear();
                    ui::form(processor.record());
                }
                Err(err) if err.is_user_error() => {
                    error_message = err.to_string();
                }
                Err(err) => return Err(err.into()),
            }
        }

        // Confirmed and Denied linger with a countdown; a confirmed restart
        // resets immediately.
        if processor.current_state() != State::Restart {
            ui::closing(&processor.state_text()?, RESET_COUNTDOWN_SECS);
        }
        processor.finalize_or_discard()?;
        error_message.clear();
    }
}
