//! Plain sequential rendering for the wizard.
//!
//! Everything prints top to bottom; there is no cursor addressing. Each
//! accepted answer triggers a fresh form snapshot so the user always sees
//! the record as entered so far.

use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use owo_colors::OwoColorize;

use intake_core::{convert, Config, PersonRecord};

/// Session header: welcome line plus the navigation instructions.
pub fn banner() {
    println!(
        "{}",
        "Welcome to the Escher Customer Records Intake Application".bold()
    );
    println!("At any point in the process, hold ctrl and press c to quit.");
    println!("Enter \"b\" to move backwards in operation and re-enter info.");
    println!("Enter \"r\" to restart.");
    println!();
}

/// Snapshot of the record as entered so far. The spouse column appears only
/// while spouse mode is active.
pub fn form(record: &PersonRecord) {
    println!("{}", "--------------------------------------------".dimmed());
    field("First Name", &record.first_name);
    field("Surname", &record.surname);
    field(
        "Date of Birth",
        &record
            .birth_date
            .map(convert::format_date)
            .unwrap_or_default(),
    );
    field(
        "Marital Status",
        record.marital_status.map(|status| status.name()).unwrap_or(""),
    );

    if let Some(spouse) = &record.spouse {
        println!();
        field("Spouse's First Name", &spouse.first_name);
        field("Spouse's Surname", &spouse.surname);
        field(
            "Spouse's Date of Birth",
            &spouse
                .birth_date
                .map(convert::format_date)
                .unwrap_or_default(),
        );
    }
    println!("{}", "--------------------------------------------".dimmed());
    println!();
}

fn field(label: &str, value: &str) {
    // Pad before styling: ANSI escapes would otherwise count toward the
    // column width.
    let padded = format!("{:<24}", format!("{}:", label));
    println!("{}{}", padded.dimmed(), value);
}

/// The current question: prompt line, detail line, and for the marital
/// prompt the numbered status menu.
pub fn prompt(text: &str, menu: Option<&Config>) {
    println!("{}", text);
    if let Some(config) = menu {
        println!();
        print!("{}", config.status_menu());
    }
    println!();
}

/// A recoverable validation message, shown above the re-prompt.
pub fn error(message: &str) {
    if !message.is_empty() {
        println!("{}", message.red());
    }
}

/// Read one line from stdin, `None` on EOF.
pub fn read_line() -> io::Result<Option<String>> {
    print!("> ");
    io::stdout().flush()?;

    let mut line = String::new();
    let bytes = io::stdin().read_line(&mut line)?;
    if bytes == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

/// Session-end message with a visible countdown before the form resets.
pub fn closing(text: &str, seconds: u64) {
    println!("{}", text.bold());
    for remaining in (1..=seconds).rev() {
        println!("...{}", remaining);
        thread::sleep(Duration::from_secs(1));
    }
    println!();
}
