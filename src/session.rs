use alloc::{
    format,
    string::{String, ToString},
    vec::Vec,
};
use futures::{Sink, SinkExt, Stream};
use tracing::{debug, info, warn};

use crate::{
    config::SessionConfig, parse_line, Code, CodeGroup, Controller, Error, Line, Parser, Response,
};

/// One sender's view of the controller: its own machine state, fed one line at a time.
///
/// A rejected line is answered with an error and leaves the state as it was; the session goes
/// on with the next line.
#[derive(Debug, Clone, Default)]
pub struct Session {
    controller: Controller,
    config: SessionConfig,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: SessionConfig) -> Self {
        Self {
            controller: Controller::new(),
            config,
        }
    }

    pub fn controller(&self) -> &Controller {
        &self.controller
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// The greeting sent when the session starts.
    pub fn banner(&self) -> String {
        format!("Connected: {} {}\n", self.config.name, self.config.version)
    }

    /// Parses, groups and executes one line of codes.
    ///
    /// The line is read as codes only: a `[MSG:..]` notification is not recognised here and
    /// fails the grammar. Use [`Line::parse`] first to tell the two apart, as [`Session::run`]
    /// does.
    pub fn handle_line(&mut self, line: &str) -> Response {
        match parse_line(line) {
            Ok(codes) => self.handle_codes(codes),
            Err(e) => reject(&e),
        }
    }

    /// Groups and executes the codes of one line.
    pub fn handle_codes(&mut self, codes: Vec<Code>) -> Response {
        for code in &codes {
            debug!(%code);
        }
        match CodeGroup::from_codes(codes) {
            Ok(group) => {
                self.controller.execute(&group);
                info!(%group, "line accepted");
                Response::Ok
            }
            Err(e) => reject(&e),
        }
    }

    /// Answers every line read from `input` on `output` until the input ends or the peer sends
    /// an `Exit` notification.
    ///
    /// Each response is flushed before the next line is read.
    pub async fn run<S, W>(&mut self, input: S, output: &mut W) -> Result<(), W::Error>
    where
        S: Stream<Item = u8> + Unpin,
        W: Sink<String> + Unpin,
    {
        info!(name = %self.config.name, "session started");
        output.send(self.banner()).await?;

        let mut parser = Parser::with_max_line_length(input, self.config.max_line_length);
        while let Some((line, next)) = parser.next().await {
            parser = next;
            let response = match line {
                Ok(Line::Message(notification)) if notification.is_exit() => {
                    info!("peer closed the session");
                    break;
                }
                Ok(Line::Message(notification)) => {
                    warn!(text = notification.text(), "ignoring notification from peer");
                    continue;
                }
                Ok(Line::Codes(codes)) => self.handle_codes(codes),
                Err(e) => reject(&e),
            };
            output.send(response.to_string()).await?;
        }

        info!("session ended");
        Ok(())
    }
}

fn reject(error: &Error) -> Response {
    warn!(token = error.token(), %error, "line rejected");
    Response::Error(error.record())
}

#[cfg(test)]
mod test {
    use super::Session;
    use crate::{config::SessionConfig, ErrorRecord, Line, Notification, Response, Units};
    use futures::{channel::mpsc, stream, StreamExt};

    fn run(session: &mut Session, input: &'static [u8]) -> Vec<String> {
        let (mut tx, rx) = mpsc::unbounded();
        futures_executor::block_on(session.run(stream::iter(input.iter().copied()), &mut tx))
            .expect("receiver is alive");
        drop(tx);
        futures_executor::block_on(rx.collect())
    }

    #[test]
    fn one_response_per_line() {
        let mut session = Session::new();
        assert_eq!(session.handle_line("g20"), Response::Ok);
        assert_eq!(session.controller().units(), Units::Inches);
        assert_eq!(
            session.handle_line("G90 G91"),
            Response::Error(ErrorRecord::MODAL_GROUP_VIOLATION)
        );
        assert_eq!(
            session.handle_line("G9999"),
            Response::Error(ErrorRecord::UNSUPPORTED_COMMAND)
        );
        assert_eq!(
            session.handle_line("LX"),
            Response::Error(ErrorRecord::BAD_NUMBER_FORMAT)
        );
        assert_eq!(
            session.handle_line("L"),
            Response::Error(ErrorRecord::EXPECTED_COMMAND_LETTER)
        );
        assert_eq!(session.handle_line("   "), Response::Ok);
    }

    #[test]
    fn a_rejected_line_changes_nothing() {
        let mut session = Session::new();
        let before = session.controller().clone();
        assert!(matches!(
            session.handle_line("G20 G55"),
            Response::Error(_)
        ));
        assert_eq!(session.controller(), &before);
    }

    #[test]
    fn banner_uses_the_configured_identity() {
        let session = Session::with_config(SessionConfig {
            name: "Bench".into(),
            version: "2.1".into(),
            ..SessionConfig::default()
        });
        assert_eq!(session.banner(), "Connected: Bench 2.1\n");
        assert_eq!(Session::new().banner(), "Connected: Inu-NC 1.0\n");
    }

    #[test]
    fn run_answers_in_order() {
        let mut session = Session::new();
        let out = run(&mut session, b"G20\r\nG90 G91\n\nG55\n");
        assert_eq!(
            out,
            [
                "Connected: Inu-NC 1.0\n",
                "ok\n",
                "error:21 (Modal group violation)\n",
                "ok\n",
                "ok\n",
            ]
        );
        assert_eq!(session.controller().units(), Units::Inches);
        assert_eq!(session.controller().coordinate_system().index(), 2);
    }

    #[test]
    fn run_answers_blank_lines_like_handle_line() {
        let mut session = Session::new();
        let out = run(&mut session, b"G20\n\n   \r\nG21\n");
        assert_eq!(
            out,
            ["Connected: Inu-NC 1.0\n", "ok\n", "ok\n", "ok\n", "ok\n"]
        );
        assert_eq!(out[2], session.handle_line("").to_string());
        assert_eq!(session.controller().units(), Units::Millimeters);
    }

    #[test]
    fn notifications_are_only_recognised_by_run() {
        let mut session = Session::new();
        assert_eq!(
            session.handle_line("[MSG:Exit]"),
            Response::Error(ErrorRecord::BAD_NUMBER_FORMAT)
        );
        assert_eq!(
            Line::parse("[MSG:Exit]"),
            Ok(Line::Message(Notification::exit()))
        );
        let out = run(&mut session, b"[MSG:Exit]\nG20\n");
        assert_eq!(out, ["Connected: Inu-NC 1.0\n"]);
        assert_eq!(session.controller().units(), Units::Millimeters);
    }

    #[test]
    fn run_stops_on_exit() {
        let mut session = Session::new();
        let out = run(&mut session, b"G20\n[MSG:Hello]\n[MSG:Exit]\nG21\n");
        assert_eq!(out, ["Connected: Inu-NC 1.0\n", "ok\n"]);
        assert_eq!(session.controller().units(), Units::Inches);
    }

    #[test]
    fn run_reports_overlong_lines_once() {
        let mut session = Session::with_config(SessionConfig {
            max_line_length: 8,
            ..SessionConfig::default()
        });
        let out = run(&mut session, b"G0 X1 Y1 Z1 F100\nG20\n");
        assert_eq!(
            out,
            [
                "Connected: Inu-NC 1.0\n",
                "error:20 (Unsupported command)\n",
                "ok\n",
            ]
        );
    }
}
