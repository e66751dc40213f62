use alloc::{format, vec::Vec};
use core::{fmt, str::FromStr};

use crate::{
    parser::parse_line,
    types::{Code, Command, Parameter, Value},
    Error,
};

/// The content of one line: at most one command and at most one value per parameter letter.
#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub struct CodeGroup {
    command: Option<Command>,
    parameters: Vec<(Parameter, Value)>,
}

impl CodeGroup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds codes in order, stopping at the first modal group violation.
    pub fn from_codes<I>(codes: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = Code>,
    {
        codes.into_iter().try_fold(Self::new(), |mut group, code| {
            group.add_code(code)?;
            Ok(group)
        })
    }

    /// Adds a code, refusing a second command or a parameter that is already set.
    ///
    /// On error the group is left as it was.
    pub fn add_code(&mut self, code: Code) -> Result<(), Error> {
        match code {
            Code::Parameter(param, value) => {
                if let Some(set) = self.parameter(param) {
                    return Err(Error::ModalGroupViolation(format!(
                        "{}{} (already set to {})",
                        param, value, set
                    )));
                }
                self.parameters.push((param, value));
            }
            Code::Command(cmd) => {
                if let Some(set) = self.command {
                    return Err(Error::ModalGroupViolation(format!(
                        "{} (already set to {})",
                        cmd, set
                    )));
                }
                self.command = Some(cmd);
            }
        }
        Ok(())
    }

    pub fn command(&self) -> Option<Command> {
        self.command
    }

    pub fn parameter(&self, param: Parameter) -> Option<&Value> {
        self.parameters
            .iter()
            .find(|(p, _)| *p == param)
            .map(|(_, value)| value)
    }

    /// Parameters in the order they were given.
    pub fn parameters(&self) -> impl Iterator<Item = (Parameter, &Value)> {
        self.parameters.iter().map(|(param, value)| (*param, value))
    }

    pub fn is_empty(&self) -> bool {
        self.command.is_none() && self.parameters.is_empty()
    }
}

/// Parses and groups a whole line.
impl FromStr for CodeGroup {
    type Err = Error;

    fn from_str(line: &str) -> Result<Self, Error> {
        Self::from_codes(parse_line(line)?)
    }
}

impl fmt::Display for CodeGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut sep = "";
        if let Some(cmd) = self.command {
            write!(f, "{}", cmd)?;
            sep = " ";
        }
        for (param, value) in &self.parameters {
            write!(f, "{}{}{}", sep, param, value)?;
            sep = " ";
        }
        Ok(())
    }
}
