use alloc::string::String;
use core::{fmt, str::FromStr};

use crate::Error;

/// One of the nine work coordinate systems, `P1` (`G54`) to `P9` (`G59.3`).
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
pub struct CoordinateSystem(u8);

impl CoordinateSystem {
    pub const COUNT: usize = 9;

    pub fn new(index: u8) -> Option<Self> {
        (1..=Self::COUNT as u8).contains(&index).then_some(Self(index))
    }

    /// The 1-based `P` index.
    pub fn index(self) -> u8 {
        self.0
    }

    pub fn all() -> impl Iterator<Item = Self> {
        (1..=Self::COUNT as u8).map(Self)
    }

    pub(crate) fn slot(self) -> usize {
        usize::from(self.0 - 1)
    }
}

impl Default for CoordinateSystem {
    fn default() -> Self {
        Self(1)
    }
}

/// A standalone `G` or `M` code from the supported set.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum Command {
    RapidMove,
    LinearMove,
    Dwell,
    SetCoordinateData,
    Inches,
    Millimeters,
    Home,
    SetHome,
    SelectCoordinateSystem(CoordinateSystem),
    AbsolutePositioning,
    RelativePositioning,
    Stop,
    OptionalStop,
    ProgramEnd,
    SpindleForward,
    SpindleReverse,
    SpindleStop,
    ProgramEndRewind,
}

// See grblHAL supported G-codes: https://github.com/grblHAL/core#supported-g-codes
const COMMANDS: [(&str, Command); 26] = [
    ("G0", Command::RapidMove),
    ("G1", Command::LinearMove),
    ("G4", Command::Dwell),
    ("G10", Command::SetCoordinateData),
    ("G20", Command::Inches),
    ("G21", Command::Millimeters),
    ("G28", Command::Home),
    ("G28.1", Command::SetHome),
    ("G54", Command::SelectCoordinateSystem(CoordinateSystem(1))),
    ("G55", Command::SelectCoordinateSystem(CoordinateSystem(2))),
    ("G56", Command::SelectCoordinateSystem(CoordinateSystem(3))),
    ("G57", Command::SelectCoordinateSystem(CoordinateSystem(4))),
    ("G58", Command::SelectCoordinateSystem(CoordinateSystem(5))),
    ("G59", Command::SelectCoordinateSystem(CoordinateSystem(6))),
    ("G59.1", Command::SelectCoordinateSystem(CoordinateSystem(7))),
    ("G59.2", Command::SelectCoordinateSystem(CoordinateSystem(8))),
    ("G59.3", Command::SelectCoordinateSystem(CoordinateSystem(9))),
    ("G90", Command::AbsolutePositioning),
    ("G91", Command::RelativePositioning),
    ("M0", Command::Stop),
    ("M1", Command::OptionalStop),
    ("M2", Command::ProgramEnd),
    ("M3", Command::SpindleForward),
    ("M4", Command::SpindleReverse),
    ("M5", Command::SpindleStop),
    ("M30", Command::ProgramEndRewind),
];

impl Command {
    /// Every supported code, in table order.
    pub fn all() -> impl Iterator<Item = Command> {
        COMMANDS.iter().map(|(_, cmd)| *cmd)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Command::RapidMove => "G0",
            Command::LinearMove => "G1",
            Command::Dwell => "G4",
            Command::SetCoordinateData => "G10",
            Command::Inches => "G20",
            Command::Millimeters => "G21",
            Command::Home => "G28",
            Command::SetHome => "G28.1",
            Command::SelectCoordinateSystem(cs) => match cs.index() {
                1 => "G54",
                2 => "G55",
                3 => "G56",
                4 => "G57",
                5 => "G58",
                6 => "G59",
                7 => "G59.1",
                8 => "G59.2",
                _ => "G59.3",
            },
            Command::AbsolutePositioning => "G90",
            Command::RelativePositioning => "G91",
            Command::Stop => "M0",
            Command::OptionalStop => "M1",
            Command::ProgramEnd => "M2",
            Command::SpindleForward => "M3",
            Command::SpindleReverse => "M4",
            Command::SpindleStop => "M5",
            Command::ProgramEndRewind => "M30",
        }
    }
}

impl FromStr for Command {
    type Err = Error;

    /// Exact, case sensitive match against the supported set: `G00` or `g0` are rejected.
    fn from_str(s: &str) -> Result<Self, Error> {
        COMMANDS
            .iter()
            .find(|(code, _)| *code == s)
            .map(|(_, cmd)| *cmd)
            .ok_or_else(|| Error::UnsupportedCommand(s.into()))
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A machine axis.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
pub enum Axis {
    A,
    B,
    C,
    X,
    Y,
    Z,
}

impl Axis {
    pub const COUNT: usize = 6;
    pub const ALL: [Axis; Self::COUNT] = [Axis::A, Axis::B, Axis::C, Axis::X, Axis::Y, Axis::Z];

    pub(crate) fn slot(self) -> usize {
        self as usize
    }
}

/// A supported parameter letter.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
pub enum Parameter {
    Axis(Axis),
    /// `F`: feed rate.
    Feed,
    /// `S`: spindle speed or laser intensity.
    Speed,
    /// `P`: dwell time or coordinate system index.
    P,
    /// `L`: `G10` sub command.
    L,
}

impl Parameter {
    pub fn from_letter(letter: char) -> Option<Self> {
        Some(match letter {
            'A' => Parameter::Axis(Axis::A),
            'B' => Parameter::Axis(Axis::B),
            'C' => Parameter::Axis(Axis::C),
            'X' => Parameter::Axis(Axis::X),
            'Y' => Parameter::Axis(Axis::Y),
            'Z' => Parameter::Axis(Axis::Z),
            'F' => Parameter::Feed,
            'S' => Parameter::Speed,
            'P' => Parameter::P,
            'L' => Parameter::L,
            _ => return None,
        })
    }

    pub fn letter(&self) -> char {
        match self {
            Parameter::Axis(Axis::A) => 'A',
            Parameter::Axis(Axis::B) => 'B',
            Parameter::Axis(Axis::C) => 'C',
            Parameter::Axis(Axis::X) => 'X',
            Parameter::Axis(Axis::Y) => 'Y',
            Parameter::Axis(Axis::Z) => 'Z',
            Parameter::Feed => 'F',
            Parameter::Speed => 'S',
            Parameter::P => 'P',
            Parameter::L => 'L',
        }
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// A parameter's value: its text as received plus the number it parses to.
///
/// Equality is on the text so that rendering a value reproduces the received token.
#[derive(Debug, Clone)]
pub struct Value {
    text: String,
    number: f64,
}

impl Value {
    pub(crate) fn new(text: String, number: f64) -> Self {
        Self { text, number }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn as_f64(&self) -> f64 {
        self.number
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

impl Eq for Value {}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// A single token of a line: a standalone command or a valued parameter.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Code {
    Command(Command),
    Parameter(Parameter, Value),
}

impl Code {
    pub fn is_parameter(&self) -> bool {
        matches!(self, Code::Parameter(..))
    }

    /// The command text (`G59.1`, `M3`) or the parameter letter (`X`).
    pub fn command(&self) -> String {
        match self {
            Code::Command(cmd) => cmd.as_str().into(),
            Code::Parameter(param, _) => param.letter().into(),
        }
    }

    pub fn value(&self) -> Option<&Value> {
        match self {
            Code::Command(_) => None,
            Code::Parameter(_, value) => Some(value),
        }
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Code::Command(cmd) => write!(f, "{}", cmd),
            Code::Parameter(param, value) => write!(f, "{}{}", param, value),
        }
    }
}
