//! A line is a list of space separated tokens:
//! ```ebnf
//! line      ::= token ( ' '+ token )*
//! token     ::= command | parameter
//! command   ::= ( 'G' | 'M' ) [0-9.]+         /* must be one of the supported codes */
//! parameter ::= [ABCXYZFSPL] real_number      /* at most 5 characters after the letter */
//! ```
//! Lines are case insensitive. A line of the form `[MSG:<text>]` is an out of band
//! [`Notification`] rather than a list of codes.
mod values;

use alloc::{string::String, vec::Vec};
use core::marker::Unpin;
use futures::stream::{self, StreamExt};

use crate::{
    stream::{pushback::PushBack, MyStreamExt},
    types::{Code, Command, Parameter},
    utils::skip_line_feed,
    Error, Notification,
};

use values::parse_value;

/// Default for the longest line a [`Parser`] buffers.
pub const DEFAULT_MAX_LINE_LENGTH: usize = 1024;

fn parse_token(token: &str) -> Result<Code, Error> {
    // G and M codes are standalone commands, everything else is a parameter.
    if token.starts_with('G') || token.starts_with('M') {
        return token.parse::<Command>().map(Code::Command);
    }

    let mut chars = token.chars();
    let letter = match chars.next() {
        Some(letter) => letter,
        None => return Err(Error::MissingValue(token.into())),
    };
    let value = parse_value(token, chars.as_str())?;

    let param = match Parameter::from_letter(letter) {
        Some(param) => param,
        None => return Err(Error::UnsupportedCommand(token.into())),
    };
    match value {
        Some(value) => Ok(Code::Parameter(param, value)),
        None => Err(Error::MissingValue(token.into())),
    }
}

/// Splits a line into codes, in input order.
///
/// The line is trimmed and upper-cased first. The first invalid token fails the whole line.
pub fn parse_line(line: &str) -> Result<Vec<Code>, Error> {
    let line = line.trim().to_ascii_uppercase();
    line.split(' ')
        .filter(|token| !token.is_empty())
        .map(parse_token)
        .collect()
}

/// What a complete line turned out to be.
#[derive(Debug, PartialEq, Clone)]
pub enum Line {
    Codes(Vec<Code>),
    Message(Notification),
}

impl Line {
    pub fn parse(line: &str) -> Result<Self, Error> {
        match Notification::parse(line) {
            Some(notification) => Ok(Line::Message(notification)),
            None => parse_line(line).map(Line::Codes),
        }
    }
}

#[derive(PartialEq, Debug, Clone, Copy)]
enum AsyncParserState {
    Line,
    CarriageReturn,
    Overflow,
    Done,
}

fn end_of_line(state: AsyncParserState, buf: &[u8]) -> Result<Line, Error> {
    let text = String::from_utf8_lossy(buf);
    match state {
        AsyncParserState::Overflow => Err(Error::UnsupportedCommand(text.into_owned())),
        _ => Line::parse(&text),
    }
}

/// Reads lines from a byte stream and parses each of them.
///
/// Lines end with `\n`, `\r` or `\r\n`. A blank line yields an empty list of codes, and a
/// last line without a terminator is still parsed when the stream ends. A line longer than the
/// configured maximum is dropped up to its terminator and reported as a single error.
pub struct Parser<S>
where
    S: stream::Stream<Item = u8> + Unpin,
{
    input: PushBack<S>,
    state: AsyncParserState,
    max_line_length: usize,
}

impl<S> Parser<S>
where
    S: stream::Stream<Item = u8> + Unpin,
{
    pub fn new(input: S) -> Self {
        Self::with_max_line_length(input, DEFAULT_MAX_LINE_LENGTH)
    }

    pub fn with_max_line_length(input: S, max_line_length: usize) -> Self {
        Self {
            input: input.push_backable(),
            state: AsyncParserState::Line,
            max_line_length,
        }
    }

    pub async fn next(self) -> Option<(Result<Line, Error>, Self)> {
        let Parser {
            mut input,
            mut state,
            max_line_length,
        } = self;

        match state {
            AsyncParserState::Done => return None,
            AsyncParserState::CarriageReturn => {
                skip_line_feed(&mut input).await?;
                state = AsyncParserState::Line;
            }
            AsyncParserState::Line | AsyncParserState::Overflow => {}
        }

        let mut buf = Vec::new();
        let res = loop {
            let b = match input.next().await {
                Some(b) => b,
                // nothing left after the last terminator
                None if state == AsyncParserState::Line && buf.is_empty() => return None,
                None => {
                    let res = end_of_line(state, &buf);
                    state = AsyncParserState::Done;
                    break res;
                }
            };
            match state {
                _ if b == b'\r' || b == b'\n' => {
                    let res = end_of_line(state, &buf);
                    state = if b == b'\r' {
                        AsyncParserState::CarriageReturn
                    } else {
                        AsyncParserState::Line
                    };
                    break res;
                }
                AsyncParserState::Line if buf.len() < max_line_length => buf.push(b),
                AsyncParserState::Line => {
                    tracing::debug!(max_line_length, "line too long, discarding the rest of it");
                    state = AsyncParserState::Overflow;
                }
                AsyncParserState::CarriageReturn
                | AsyncParserState::Overflow
                | AsyncParserState::Done => {}
            }
        };

        Some((
            res,
            Self {
                input,
                state,
                max_line_length,
            },
        ))
    }
}
