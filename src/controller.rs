use core::ops::Index;

use crate::{
    types::{Axis, Code, Command, CoordinateSystem},
    CodeGroup,
};

/// Units of measurement.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum Units {
    Inches,
    #[default]
    Millimeters,
}

/// One position per axis.
#[derive(Debug, PartialEq, Clone, Copy, Default)]
pub struct Positions([f64; Axis::COUNT]);

impl Positions {
    pub fn iter(&self) -> impl Iterator<Item = (Axis, f64)> + '_ {
        Axis::ALL.iter().map(move |axis| (*axis, self[*axis]))
    }
}

impl Index<Axis> for Positions {
    type Output = f64;
    fn index(&self, axis: Axis) -> &f64 {
        &self.0[axis.slot()]
    }
}

/// The machine state of one session.
///
/// Only unit and coordinate system selection change the state for now. Motion, dwell, homing,
/// spindle and stop codes are accepted and have no effect.
#[derive(Debug, PartialEq, Clone, Default)]
pub struct Controller {
    /// Absolute position of each axis.
    axis: Positions,
    /// Origin of each coordinate system, relative to the absolute position.
    home_positions: [Positions; CoordinateSystem::COUNT],
    coordinate_system: CoordinateSystem,
    units: Units,
}

impl Controller {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn units(&self) -> Units {
        self.units
    }

    pub fn coordinate_system(&self) -> CoordinateSystem {
        self.coordinate_system
    }

    pub fn axis(&self, axis: Axis) -> f64 {
        self.axis[axis]
    }

    pub fn positions(&self) -> &Positions {
        &self.axis
    }

    pub fn home_position(&self, system: CoordinateSystem, axis: Axis) -> f64 {
        self.home_positions[system.slot()][axis]
    }

    /// Applies a grouped line: its command, if any. Parameters carry no state of their own.
    ///
    /// A group only ever holds supported commands, so execution cannot fail.
    pub fn execute(&mut self, group: &CodeGroup) {
        if let Some(cmd) = group.command() {
            self.apply(cmd);
        }
    }

    /// Applies standalone codes one at a time, in order. Parameter codes are skipped.
    pub fn execute_codes<'a, I>(&mut self, codes: I)
    where
        I: IntoIterator<Item = &'a Code>,
    {
        for code in codes {
            if let Code::Command(cmd) = code {
                self.apply(*cmd);
            }
        }
    }

    fn apply(&mut self, cmd: Command) {
        match cmd {
            Command::Millimeters => self.units = Units::Millimeters,
            Command::Inches => self.units = Units::Inches,
            Command::SelectCoordinateSystem(system) => self.coordinate_system = system,
            Command::RapidMove
            | Command::LinearMove
            | Command::Dwell
            | Command::SetCoordinateData
            | Command::Home
            | Command::SetHome
            | Command::AbsolutePositioning
            | Command::RelativePositioning
            | Command::Stop
            | Command::OptionalStop
            | Command::ProgramEnd
            | Command::SpindleForward
            | Command::SpindleReverse
            | Command::SpindleStop
            | Command::ProgramEndRewind => {
                tracing::trace!(%cmd, "no state change");
            }
        }
    }
}
