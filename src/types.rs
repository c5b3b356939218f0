//! This module defines the core data structures and types used throughout the rover
//! simulator, including headings, plateau bounds, positions, instructions, and error types.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Compass headings in clockwise order. Turning right walks this table forward,
/// turning left walks it backward.
const CLOCKWISE: [Direction; 4] = [
    Direction::North,
    Direction::East,
    Direction::South,
    Direction::West,
];

/// Bidirectional lookup between headings and their protocol letters.
const DIRECTION_LETTERS: [(Direction, char); 4] = [
    (Direction::North, 'N'),
    (Direction::East, 'E'),
    (Direction::South, 'S'),
    (Direction::West, 'W'),
];

/// Represents the heading a rover is facing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// Returns the heading after a quarter turn clockwise.
    pub fn right(self) -> Self {
        CLOCKWISE[(self.index() + 1) % CLOCKWISE.len()]
    }

    /// Returns the heading after a quarter turn counter-clockwise.
    pub fn left(self) -> Self {
        CLOCKWISE[(self.index() + CLOCKWISE.len() - 1) % CLOCKWISE.len()]
    }

    /// Returns the single-letter protocol form of this heading (`N`, `E`, `S` or `W`).
    pub fn letter(self) -> char {
        DIRECTION_LETTERS
            .iter()
            .find(|(direction, _)| *direction == self)
            .map(|(_, letter)| *letter)
            .unwrap_or('?')
    }

    /// Looks up the heading for a protocol letter.
    pub fn from_letter(letter: char) -> Option<Self> {
        DIRECTION_LETTERS
            .iter()
            .find(|(_, l)| *l == letter)
            .map(|(direction, _)| *direction)
    }

    /// Unit step `(dx, dy)` taken when moving forward with this heading.
    pub fn step(self) -> (i64, i64) {
        match self {
            Direction::North => (0, 1),
            Direction::East => (1, 0),
            Direction::South => (0, -1),
            Direction::West => (-1, 0),
        }
    }

    fn index(self) -> usize {
        match self {
            Direction::North => 0,
            Direction::East => 1,
            Direction::South => 2,
            Direction::West => 3,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// The rectangular plateau a rover must stay on.
///
/// The lower-left corner is always `(0, 0)`; `max_x` and `max_y` are the inclusive
/// upper-right corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plateau {
    pub max_x: u32,
    pub max_y: u32,
}

impl Plateau {
    pub fn new(max_x: u32, max_y: u32) -> Self {
        Self { max_x, max_y }
    }

    /// Checks whether a (possibly negative) coordinate lies on the plateau.
    pub fn contains(&self, x: i64, y: i64) -> bool {
        (0..=i64::from(self.max_x)).contains(&x) && (0..=i64::from(self.max_y)).contains(&y)
    }
}

impl fmt::Display for Plateau {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(0,0)-({},{})", self.max_x, self.max_y)
    }
}

/// A rover's location and heading. Its `Display` form is the protocol output line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub x: u32,
    pub y: u32,
    pub direction: Direction,
}

impl Position {
    pub fn new(x: u32, y: u32, direction: Direction) -> Self {
        Self { x, y, direction }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.x, self.y, self.direction.letter())
    }
}

/// A single character of an instruction line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    /// `L`: turn 90 degrees left.
    Left,
    /// `R`: turn 90 degrees right.
    Right,
    /// `M`: move one grid point forward.
    Move,
}

impl Instruction {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'L' => Some(Instruction::Left),
            'R' => Some(Instruction::Right),
            'M' => Some(Instruction::Move),
            _ => None,
        }
    }
}

/// The three shapes of line the protocol accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineKind {
    /// `<x> <y>`: the plateau's upper-right corner.
    Plateau,
    /// `<x> <y> <N|E|S|W>`: a new rover's landing position.
    Position,
    /// `[LMR]+`: moves for the most recently landed rover.
    Instructions,
}

impl fmt::Display for LineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LineKind::Plateau => "plateau",
            LineKind::Position => "position",
            LineKind::Instructions => "instructions",
        };
        f.write_str(name)
    }
}

/// Represents the errors that can occur while processing rover input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoverError {
    /// The line does not have the shape expected at this point of the input.
    #[error("Invalid line or unexpected line type: \"{line}\"")]
    InvalidLine {
        line: String,
        expected: Option<LineKind>,
    },
    /// A rover would leave the plateau.
    #[error("Cannot move to ({x},{y}): outside plateau {plateau}")]
    OutOfBounds { x: i64, y: i64, plateau: Plateau },
    /// Indicates an error reading mission input from the file system.
    #[error("File error: {0}")]
    FileError(String),
    /// Wraps an error with the input line number it was raised on.
    #[error("Line {line_number}: {source}")]
    AtLine {
        line_number: usize,
        source: Box<RoverError>,
    },
}

impl RoverError {
    pub(crate) fn invalid_line(line: &str, expected: Option<LineKind>) -> Self {
        RoverError::InvalidLine {
            line: line.to_string(),
            expected,
        }
    }

    /// Tags this error with the 1-based input line it came from.
    pub fn at_line(self, line_number: usize) -> Self {
        RoverError::AtLine {
            line_number,
            source: Box::new(self),
        }
    }
}
