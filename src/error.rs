//! Error catalog, following grblHAL's numbering:
//! <https://github.com/terjeio/grblHAL/blob/master/doc/csv/error_codes_en_US.csv>
use alloc::string::String;
use core::fmt;

/// A numeric error code and its description, as sent back for a rejected line.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct ErrorRecord {
    pub code: u8,
    pub text: &'static str,
}

impl ErrorRecord {
    pub const EXPECTED_COMMAND_LETTER: Self = Self {
        code: 1,
        text: "Expected command letter",
    };
    pub const BAD_NUMBER_FORMAT: Self = Self {
        code: 2,
        text: "Bad number format",
    };
    pub const UNSUPPORTED_COMMAND: Self = Self {
        code: 20,
        text: "Unsupported command",
    };
    pub const MODAL_GROUP_VIOLATION: Self = Self {
        code: 21,
        text: "Modal group violation",
    };

    pub const ALL: [Self; 4] = [
        Self::EXPECTED_COMMAND_LETTER,
        Self::BAD_NUMBER_FORMAT,
        Self::UNSUPPORTED_COMMAND,
        Self::MODAL_GROUP_VIOLATION,
    ];

    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|record| record.code == code)
    }
}

/// Renders the wire form, without the line terminator: `error:<code> (<text>)`.
impl fmt::Display for ErrorRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "error:{} ({})", self.code, self.text)
    }
}

/// Why a line was rejected.
///
/// Every variant carries the offending token. The token is meant for logs only: what goes back
/// on the wire is the [`ErrorRecord`] returned by [`Error::record`].
#[derive(Debug, PartialEq, Eq, Clone, thiserror::Error)]
pub enum Error {
    /// A parameter letter without its number, e.g. `L` instead of `L20`.
    #[error("Missing value for command: {0}")]
    MissingValue(String),
    /// A value that is too long or not a number, e.g. `LX`.
    #[error("Value is not a number: {0}")]
    BadNumberFormat(String),
    /// A command or parameter letter outside the supported set, e.g. `G9999`.
    #[error("Unsupported command: {0}")]
    UnsupportedCommand(String),
    /// Two commands, or the same parameter twice, in one line, e.g. `G90 G91`.
    #[error("Conflicting modal commands in same block: {0}")]
    ModalGroupViolation(String),
}

impl Error {
    pub fn record(&self) -> ErrorRecord {
        match self {
            Error::MissingValue(_) => ErrorRecord::EXPECTED_COMMAND_LETTER,
            Error::BadNumberFormat(_) => ErrorRecord::BAD_NUMBER_FORMAT,
            Error::UnsupportedCommand(_) => ErrorRecord::UNSUPPORTED_COMMAND,
            Error::ModalGroupViolation(_) => ErrorRecord::MODAL_GROUP_VIOLATION,
        }
    }

    pub fn token(&self) -> &str {
        match self {
            Error::MissingValue(token)
            | Error::BadNumberFormat(token)
            | Error::UnsupportedCommand(token)
            | Error::ModalGroupViolation(token) => token,
        }
    }
}

#[cfg(test)]
mod test {
    use super::{Error, ErrorRecord};

    #[test]
    fn records_render_in_grbl_format() {
        assert_eq!(
            ErrorRecord::EXPECTED_COMMAND_LETTER.to_string(),
            "error:1 (Expected command letter)"
        );
        assert_eq!(
            ErrorRecord::BAD_NUMBER_FORMAT.to_string(),
            "error:2 (Bad number format)"
        );
        assert_eq!(
            ErrorRecord::UNSUPPORTED_COMMAND.to_string(),
            "error:20 (Unsupported command)"
        );
        assert_eq!(
            ErrorRecord::MODAL_GROUP_VIOLATION.to_string(),
            "error:21 (Modal group violation)"
        );
    }

    #[test]
    fn each_error_maps_to_its_record() {
        let cases = [
            (Error::MissingValue("L".into()), 1),
            (Error::BadNumberFormat("LX".into()), 2),
            (Error::UnsupportedCommand("G9999".into()), 20),
            (Error::ModalGroupViolation("G91".into()), 21),
        ];
        for (error, code) in cases {
            assert_eq!(error.record().code, code);
        }
    }

    #[test]
    fn token_stays_out_of_the_wire_form() {
        let error = Error::UnsupportedCommand("G9999".into());
        assert_eq!(error.token(), "G9999");
        assert_eq!(error.to_string(), "Unsupported command: G9999");
        assert!(!error.record().to_string().contains("G9999"));
    }

    #[test]
    fn lookup_by_code() {
        assert_eq!(
            ErrorRecord::from_code(21),
            Some(ErrorRecord::MODAL_GROUP_VIOLATION)
        );
        assert_eq!(ErrorRecord::from_code(3), None);
    }
}
