use futures::stream::{self, Stream};
use products_directory::{CardHandle, UiEvent};
use thiserror::Error;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::terminal;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Event(UiEvent),
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("unknown command '{0}' (type 'help' for usage)")]
    Unknown(String),
    #[error("'open' needs a card handle, e.g. open employee-card-1234")]
    MissingHandle,
    #[error("'{0}' is not a card handle")]
    BadHandle(String),
}

/// Parse one input line. Blank lines yield `None`.
pub fn parse_line(line: &str) -> Result<Option<Command>, InputError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    if let Some(query) = line.strip_prefix('/') {
        return Ok(Some(search(query)));
    }

    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match word.to_ascii_lowercase().as_str() {
        "search" | "s" => search(rest),
        "open" | "o" => {
            if rest.is_empty() {
                return Err(InputError::MissingHandle);
            }
            let handle =
                CardHandle::parse(rest).ok_or_else(|| InputError::BadHandle(rest.to_string()))?;
            Command::Event(UiEvent::CardSelected(handle))
        }
        "next" | "n" => Command::Event(UiEvent::ModalNext),
        "prev" | "previous" | "p" => Command::Event(UiEvent::ModalPrevious),
        "close" | "c" | "x" => Command::Event(UiEvent::ModalClose),
        "help" | "?" => Command::Help,
        "quit" | "q" | "exit" => Command::Quit,
        _ => return Err(InputError::Unknown(word.to_string())),
    };
    Ok(Some(command))
}

fn search(query: &str) -> Command {
    Command::Event(UiEvent::SearchInput(query.trim().to_string()))
}

/// UI events typed on stdin. Ends on `quit` or end of input.
pub fn stdin_events() -> impl Stream<Item = UiEvent> {
    let lines = BufReader::new(tokio::io::stdin()).lines();
    stream::unfold(lines, |mut lines| async move {
        loop {
            let line = match lines.next_line().await {
                Ok(Some(line)) => line,
                Ok(None) => return None,
                Err(err) => {
                    tracing::error!(error = %err, "failed to read input");
                    return None;
                }
            };
            match parse_line(&line) {
                Ok(Some(Command::Event(event))) => return Some((event, lines)),
                Ok(Some(Command::Help)) => println!("{}", terminal::HELP),
                Ok(Some(Command::Quit)) => return None,
                Ok(None) => {}
                Err(err) => println!("! {err}"),
            }
        }
    })
}
