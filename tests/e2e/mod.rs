//! End-to-end test utilities.
//!
//! Drives a whole session from an in-memory script and splits the output
//! back into one reply per command.

use chrono::NaiveDate;
use contact_assistant::{run_session, AddressBook, Assistant, BirthdayWindow, FixedClock};

pub mod fixtures;

/// Prompt used by every scripted session.
pub const PROMPT: &str = "> ";

/// Run `script` (one command per line) with "today" pinned to `today`.
///
/// Returns the raw transcript written by the session.
pub async fn run_script(script: &str, today: NaiveDate) -> String {
    let mut assistant = Assistant::new(
        AddressBook::new(),
        Box::new(FixedClock(today)),
        BirthdayWindow::default(),
    );
    let mut output = Vec::new();
    run_session(&mut assistant, PROMPT, script.as_bytes(), &mut output)
        .await
        .expect("in-memory session should not fail");
    String::from_utf8(output).expect("session output should be UTF-8")
}

/// Split a transcript into the text printed after each prompt.
///
/// The greeting before the first prompt is dropped.
pub fn replies(transcript: &str) -> Vec<String> {
    transcript
        .split(PROMPT)
        .skip(1)
        .map(|chunk| chunk.strip_suffix('\n').unwrap_or(chunk).to_string())
        .collect()
}
