//! Interactive session: prompt, read a line, run it, print the reply.
//!
//! The loop ends on `close`/`exit`, at end of input, or when the shutdown
//! future resolves (Ctrl-C in the binary). Shutdown is only observed while
//! waiting for input, never in the middle of a command. [`run`] saves the
//! address book after the loop however it ended.

use crate::commands::{self, CommandContext, Outcome, FAREWELL, GREETING, PROMPT};
use crate::repositories::{load_or_empty, AddressBookRepository};
use anyhow::{Context, Result};
use std::future::Future;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{error, info};

/// Why a session stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The user typed `close` or `exit`
    ExitCommand,
    /// Input was closed
    EndOfInput,
    /// The shutdown future resolved
    Interrupted,
}

/// Run the read-eval-print loop until it ends, without touching storage.
pub async fn run_session<R, W, F>(
    ctx: &mut CommandContext,
    input: R,
    mut output: W,
    shutdown: F,
) -> std::io::Result<SessionEnd>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
    F: Future,
{
    tokio::pin!(shutdown);
    let mut lines = input.lines();

    write_line(&mut output, GREETING).await?;

    loop {
        output.write_all(PROMPT.as_bytes()).await?;
        output.flush().await?;

        let line = tokio::select! {
            line = lines.next_line() => line?,
            _ = &mut shutdown => {
                info!("Interrupted, ending session");
                write_line(&mut output, &format!("\n{}", FAREWELL)).await?;
                return Ok(SessionEnd::Interrupted);
            }
        };

        let Some(line) = line else {
            info!("End of input, ending session");
            write_line(&mut output, &format!("\n{}", FAREWELL)).await?;
            return Ok(SessionEnd::EndOfInput);
        };

        match commands::execute(ctx, &line) {
            Outcome::Reply(reply) => write_line(&mut output, &reply).await?,
            Outcome::Exit(reply) => {
                write_line(&mut output, &reply).await?;
                return Ok(SessionEnd::ExitCommand);
            }
        }
    }
}

/// Load the book, run a session over it, and save it afterwards.
///
/// The save happens even when the session fails with an I/O error; a save
/// failure takes precedence in the returned error.
pub async fn run<R, W, F>(
    repository: &dyn AddressBookRepository,
    birthday_window_days: u64,
    input: R,
    output: W,
    shutdown: F,
) -> Result<SessionEnd>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
    F: Future,
{
    let book = load_or_empty(repository).await;
    let mut ctx = CommandContext::new(book, birthday_window_days);

    let session = run_session(&mut ctx, input, output, shutdown).await;

    if let Err(e) = repository.save(ctx.address_book()).await {
        error!("Failed to save address book: {}", e);
        return Err(e).context("Failed to save address book");
    }

    session.context("Failed to read input or write output")
}

async fn write_line<W>(output: &mut W, text: &str) -> std::io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    output.write_all(text.as_bytes()).await?;
    output.write_all(b"\n").await?;
    output.flush().await
}
