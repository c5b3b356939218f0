//! This module defines the `LineProcessor`, the stateful line-by-line interpreter of the rover
//! protocol. It tracks which kind of line is allowed next, lands rovers, and drives the most
//! recently landed rover with instruction lines.

use crate::parser::{parse_line, ParsedLine};
use crate::rover::Rover;
use crate::types::{Instruction, LineKind, Plateau, Position, RoverError};

/// Which line kind is accepted after the last accepted line (`None` = nothing read yet).
///
/// The accepted input is therefore one plateau line followed by one or more
/// (position, instructions) pairs.
const NEXT_LINE: [(Option<LineKind>, LineKind); 4] = [
    (None, LineKind::Plateau),
    (Some(LineKind::Plateau), LineKind::Position),
    (Some(LineKind::Position), LineKind::Instructions),
    (Some(LineKind::Instructions), LineKind::Position),
];

/// Interprets protocol lines one at a time.
///
/// A processor starts out expecting the plateau line. State only moves forward; a new
/// processor is needed to start over.
#[derive(Debug, Default)]
pub struct LineProcessor {
    plateau: Option<Plateau>,
    rovers: Vec<Rover>,
    /// Index into `rovers` of the rover instruction lines apply to.
    active: Option<usize>,
    last_line: Option<LineKind>,
}

impl LineProcessor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consumes one input line and advances the processor.
    ///
    /// On error the grammar state is left untouched. An `OutOfBounds` error raised part way
    /// through an instruction line stops the remaining instructions, but the turns and
    /// moves already made by the rover are kept.
    ///
    /// # Returns
    ///
    /// * `Ok(LineKind)` naming the kind of line that was accepted.
    /// * `Err(RoverError::InvalidLine)` if the line does not have the expected shape.
    /// * `Err(RoverError::OutOfBounds)` if a rover would land or move off the plateau.
    pub fn process_line(&mut self, line: &str) -> Result<LineKind, RoverError> {
        let expected = self.expected();

        let parsed = parse_line(line, expected)?;
        match parsed {
            ParsedLine::Plateau(plateau) => self.define_plateau(plateau),
            ParsedLine::Position(position) => self.land_rover(line, position)?,
            ParsedLine::Instructions(instructions) => self.drive_rover(line, &instructions)?,
        }

        log::debug!("Accepted {expected} line: {line:?}");
        self.last_line = Some(expected);
        Ok(expected)
    }

    /// Returns one `"<x> <y> <N|E|S|W>"` line per rover, in landing order.
    pub fn output_lines(&self) -> Vec<String> {
        self.rovers
            .iter()
            .map(|rover| rover.position().to_string())
            .collect()
    }

    /// Returns the current position of every rover, in landing order.
    pub fn positions(&self) -> Vec<Position> {
        self.rovers.iter().map(Rover::position).collect()
    }

    /// Returns a slice of all rovers landed so far.
    pub fn rovers(&self) -> &[Rover] {
        &self.rovers
    }

    /// Returns the rover that the next instruction line will drive, if any.
    pub fn active_rover(&self) -> Option<&Rover> {
        self.active.and_then(|index| self.rovers.get(index))
    }

    /// Returns the plateau bounds, once the plateau line has been read.
    pub fn plateau(&self) -> Option<Plateau> {
        self.plateau
    }

    /// Returns the kind of line the processor will accept next.
    pub fn expected(&self) -> LineKind {
        NEXT_LINE
            .iter()
            .find(|(last, _)| *last == self.last_line)
            .map(|(_, next)| *next)
            .unwrap_or(LineKind::Plateau)
    }

    fn define_plateau(&mut self, plateau: Plateau) {
        log::debug!("Plateau defined as {plateau}");
        self.plateau = Some(plateau);
    }

    fn land_rover(&mut self, line: &str, position: Position) -> Result<(), RoverError> {
        let plateau = self
            .plateau
            .ok_or_else(|| RoverError::invalid_line(line, Some(LineKind::Plateau)))?;

        let rover = Rover::new(plateau, position.x, position.y, position.direction)?;
        self.rovers.push(rover);
        self.active = Some(self.rovers.len() - 1);

        log::debug!("Rover {} landed at {position}", self.rovers.len());
        Ok(())
    }

    fn drive_rover(&mut self, line: &str, instructions: &[Instruction]) -> Result<(), RoverError> {
        // Unreachable under the line grammar: an instruction line always follows a position line.
        let index = self
            .active
            .ok_or_else(|| RoverError::invalid_line(line, Some(LineKind::Position)))?;
        let rover = self
            .rovers
            .get_mut(index)
            .ok_or_else(|| RoverError::invalid_line(line, Some(LineKind::Position)))?;

        for &instruction in instructions {
            rover.apply(instruction)?;
            log::trace!("Rover {} -> {}", index + 1, rover.position());
        }
        Ok(())
    }
}
