//! Command layer of the assistant.
//!
//! [`execute`] takes one line of user input and always produces a reply:
//! parsing, dispatch to a handler, and the conversion of every
//! [`AddressBookError`](crate::error::AddressBookError) into an
//! `Error: ...` line all happen here, so nothing fails past this boundary.

pub mod context;
pub mod handlers;
pub mod parser;

pub use context::CommandContext;
pub use parser::{parse_input, Command, Input};

use crate::error::AddressBookError;
use tracing::debug;

/// Printed before the first prompt.
pub const GREETING: &str = "Welcome to the assistant bot!";

/// Printed before every line of input.
pub const PROMPT: &str = "Enter a command: ";

/// Printed when the session ends.
pub const FAREWELL: &str = "Good bye!";

/// Reply to a line with no command on it.
pub const BLANK_INPUT_REPLY: &str = "Command not entered. Please enter a command.";

/// Reply to an unrecognized command.
pub const UNKNOWN_COMMAND_REPLY: &str = "Invalid command.";

/// Result of executing one line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Print the text and read the next line
    Reply(String),
    /// Print the text, save and stop
    Exit(String),
}

impl Outcome {
    pub fn text(&self) -> &str {
        match self {
            Outcome::Reply(text) | Outcome::Exit(text) => text,
        }
    }
}

/// Render an error the way the user sees it.
pub fn error_reply(error: &AddressBookError) -> String {
    format!("Error: {}", error)
}

/// Parse and run one line of input against the context.
pub fn execute(ctx: &mut CommandContext, line: &str) -> Outcome {
    let command = match parse_input(line) {
        Ok(Input::Blank) => return Outcome::Reply(BLANK_INPUT_REPLY.to_string()),
        Ok(Input::Unknown(word)) => {
            debug!(command = %word, "Unknown command");
            return Outcome::Reply(UNKNOWN_COMMAND_REPLY.to_string());
        }
        Ok(Input::Command(Command::Exit)) => return Outcome::Exit(FAREWELL.to_string()),
        Ok(Input::Command(command)) => command,
        Err(e) => return Outcome::Reply(error_reply(&e)),
    };

    match handlers::handle(ctx, command) {
        Ok(reply) => Outcome::Reply(reply),
        Err(e) => {
            debug!(error = %e, "Command failed");
            Outcome::Reply(error_reply(&e))
        }
    }
}
