//! This module defines the `Rover` struct, which tracks a single rover's position and heading
//! and moves it across a plateau without ever leaving it.

use crate::types::{Direction, Instruction, Plateau, Position, RoverError};

/// A rover standing on a plateau.
///
/// The plateau bounds are copied in at landing time and never change. Every operation
/// keeps the rover within `(0, 0)..=(plateau.max_x, plateau.max_y)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rover {
    plateau: Plateau,
    x: u32,
    y: u32,
    direction: Direction,
}

impl Rover {
    /// Lands a new rover on the plateau.
    ///
    /// # Returns
    ///
    /// * `Ok(Rover)` if `(x, y)` lies on the plateau.
    /// * `Err(RoverError::OutOfBounds)` otherwise.
    pub fn new(plateau: Plateau, x: u32, y: u32, direction: Direction) -> Result<Self, RoverError> {
        if !plateau.contains(i64::from(x), i64::from(y)) {
            return Err(RoverError::OutOfBounds {
                x: i64::from(x),
                y: i64::from(y),
                plateau,
            });
        }

        Ok(Self {
            plateau,
            x,
            y,
            direction,
        })
    }

    /// Turns the rover 90 degrees counter-clockwise.
    pub fn rotate_left(&mut self) {
        self.direction = self.direction.left();
    }

    /// Turns the rover 90 degrees clockwise.
    pub fn rotate_right(&mut self) {
        self.direction = self.direction.right();
    }

    /// Moves the rover one grid point in the direction it is facing.
    ///
    /// The move is atomic: if the target lies off the plateau, an `OutOfBounds` error is
    /// returned and the rover stays where it was.
    pub fn move_forward(&mut self) -> Result<(), RoverError> {
        let (dx, dy) = self.direction.step();
        let x = i64::from(self.x) + dx;
        let y = i64::from(self.y) + dy;

        let out_of_bounds = || RoverError::OutOfBounds {
            x,
            y,
            plateau: self.plateau,
        };

        if !self.plateau.contains(x, y) {
            return Err(out_of_bounds());
        }

        // Both conversions succeed once the plateau contains the target.
        let new_x = u32::try_from(x).map_err(|_| out_of_bounds())?;
        let new_y = u32::try_from(y).map_err(|_| out_of_bounds())?;

        self.x = new_x;
        self.y = new_y;
        Ok(())
    }

    /// Applies one instruction: `Left` and `Right` rotate, `Move` moves forward.
    pub fn apply(&mut self, instruction: Instruction) -> Result<(), RoverError> {
        match instruction {
            Instruction::Left => self.rotate_left(),
            Instruction::Right => self.rotate_right(),
            Instruction::Move => self.move_forward()?,
        }
        Ok(())
    }

    /// Returns the current position and heading.
    pub fn position(&self) -> Position {
        Position::new(self.x, self.y, self.direction)
    }

    /// Returns the plateau this rover was landed on.
    pub fn plateau(&self) -> Plateau {
        self.plateau
    }
}
