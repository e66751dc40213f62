//! Lines exchanged with a sender. Every line the controller writes ends with `\n`.
use alloc::string::{String, ToString};
use core::fmt;

use crate::ErrorRecord;

const MSG_PREFIX: &str = "[MSG:";
const MSG_SUFFIX: &str = "]";
const EXIT: &str = "Exit";

/// The answer to one received line.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Response {
    Ok,
    Error(ErrorRecord),
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Response::Ok => f.write_str("ok\n"),
            Response::Error(record) => writeln!(f, "{}", record),
        }
    }
}

/// An out of band `[MSG:<text>]` line.
///
/// The `Exit` payload is reserved: it tells the receiver that its peer is closing the session.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Notification(String);

impl Notification {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn exit() -> Self {
        Self::new(EXIT)
    }

    pub fn text(&self) -> &str {
        &self.0
    }

    pub fn is_exit(&self) -> bool {
        self.0 == EXIT
    }

    /// Recognises a notification line, surrounding whitespace and terminator included.
    pub fn parse(line: &str) -> Option<Self> {
        line.trim()
            .strip_prefix(MSG_PREFIX)?
            .strip_suffix(MSG_SUFFIX)
            .map(Self::new)
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}{}{}", MSG_PREFIX, self.0, MSG_SUFFIX)
    }
}

/// A line received from a controller, as seen by a client.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum ServerLine {
    Ok,
    Error { code: u8, text: String },
    Notification(Notification),
    /// The controller is closing the session; do not retry.
    Exit,
    Other(String),
}

impl ServerLine {
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        if line == "ok" {
            return ServerLine::Ok;
        }
        if let Some(notification) = Notification::parse(line) {
            return if notification.is_exit() {
                ServerLine::Exit
            } else {
                ServerLine::Notification(notification)
            };
        }
        match parse_error(line) {
            Some((code, text)) => ServerLine::Error {
                code,
                text: text.into(),
            },
            None => ServerLine::Other(line.to_string()),
        }
    }

    /// The catalog entry for an error line, if its code is one this crate emits.
    pub fn record(&self) -> Option<ErrorRecord> {
        match self {
            ServerLine::Error { code, .. } => ErrorRecord::from_code(*code),
            _ => None,
        }
    }
}

fn parse_error(line: &str) -> Option<(u8, &str)> {
    let rest = line.strip_prefix("error:")?;
    let (code, text) = match rest.split_once(' ') {
        Some((code, text)) => (code, text.strip_prefix('(')?.strip_suffix(')')?),
        None => (rest, ""),
    };
    Some((code.parse().ok()?, text))
}
