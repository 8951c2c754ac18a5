//! The interactive read loop.
//!
//! Reads one command per line, prints the reply, and stops on `close`/`exit`
//! or end of input. The loop is generic over its reader and writer so a
//! whole conversation can be driven from memory.

use crate::commands::{Assistant, Reply};
use anyhow::Result;
use std::borrow::Cow;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{info, warn};

/// Printed once when the session starts.
pub const GREETING: &str = "Welcome to the assistant bot!";

/// Reply to `close`/`exit`, also printed when input ends.
pub const FAREWELL: &str = "Good bye!";

/// Run a session until the user leaves or input ends.
///
/// # Arguments
/// * `assistant` - The assistant holding the address book
/// * `prompt` - Text printed before each line is read
/// * `reader` - Source of command lines
/// * `writer` - Destination for the greeting, prompts and replies
///
/// # Returns
/// An error only if reading or writing fails
pub async fn run_session<R, W>(
    assistant: &mut Assistant,
    prompt: &str,
    mut reader: R,
    mut writer: W,
) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    writer.write_all(format!("{}\n", GREETING).as_bytes()).await?;

    let mut buf = Vec::new();
    loop {
        writer.write_all(prompt.as_bytes()).await?;
        writer.flush().await?;

        buf.clear();
        if reader.read_until(b'\n', &mut buf).await? == 0 {
            info!("Input closed");
            writer.write_all(format!("\n{}\n", FAREWELL).as_bytes()).await?;
            break;
        }
        let line = decode_line(&buf);

        match assistant.handle_line(&line) {
            Reply::Message(message) => {
                writer.write_all(format!("{}\n", message).as_bytes()).await?;
            }
            Reply::Nothing => {}
            Reply::Exit(message) => {
                writer.write_all(format!("{}\n", message).as_bytes()).await?;
                break;
            }
        }
    }

    writer.flush().await?;
    info!(
        contacts = assistant.book().len(),
        summary = %assistant.metrics().summary(),
        "Session finished"
    );
    Ok(())
}

/// Strip the line ending and decode, replacing invalid UTF-8 so a bad line
/// is handled like any other input.
fn decode_line(raw: &[u8]) -> Cow<'_, str> {
    let raw = raw.strip_suffix(b"\n").unwrap_or(raw);
    let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
    let line = String::from_utf8_lossy(raw);
    if let Cow::Owned(_) = line {
        warn!("Input line is not valid UTF-8");
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::models::{AddressBook, BirthdayWindow};
    use chrono::NaiveDate;

    fn assistant() -> Assistant {
        Assistant::new(
            AddressBook::new(),
            Box::new(FixedClock(NaiveDate::from_ymd_opt(2024, 6, 10).unwrap())),
            BirthdayWindow::default(),
        )
    }

    #[tokio::test]
    async fn test_session_stops_on_exit() {
        let mut assistant = assistant();
        let mut output = Vec::new();
        run_session(&mut assistant, "> ", &b"hello\nexit\nhello\n"[..], &mut output)
            .await
            .unwrap();

        assert_eq!(
            String::from_utf8(output).unwrap(),
            "Welcome to the assistant bot!\n> How can I help you?\n> Good bye!\n"
        );
    }

    #[tokio::test]
    async fn test_session_survives_invalid_utf8() {
        let mut assistant = assistant();
        let mut output = Vec::new();
        let input = b"add John 1234567890\nadd J\xffn 1234567890\n\xff\nphone John\nexit\n";
        run_session(&mut assistant, "> ", &input[..], &mut output)
            .await
            .unwrap();

        assert_eq!(
            String::from_utf8(output).unwrap(),
            "Welcome to the assistant bot!\n> Contact added.\n> Contact added.\n\
             > Invalid command.\n> 1234567890\n> Good bye!\n"
        );
        assert_eq!(assistant.book().len(), 2);
    }

    #[test]
    fn test_decode_line() {
        assert_eq!(decode_line(b"hello\r\n"), "hello");
        assert_eq!(decode_line(b"hello\n"), "hello");
        assert_eq!(decode_line(b"hello"), "hello");
        assert_eq!(decode_line(b"J\xffn"), "J\u{FFFD}n");
    }

    #[tokio::test]
    async fn test_session_ends_at_eof() {
        let mut assistant = assistant();
        let mut output = Vec::new();
        run_session(&mut assistant, "> ", &b"\n"[..], &mut output)
            .await
            .unwrap();

        assert_eq!(
            String::from_utf8(output).unwrap(),
            "Welcome to the assistant bot!\n> > \nGood bye!\n"
        );
    }
}
