//! Rover state and the operations that move it around the plateau.

use crate::error::MoveError;
use crate::geometry::{Coordinates, Heading, Plateau, Position};
use serde::{Deserialize, Serialize};

/// Operations a rover understands, one per command character.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoverOp {
    /// Rotate 90° counter-clockwise in place (`L`).
    TurnLeft,
    /// Rotate 90° clockwise in place (`R`).
    TurnRight,
    /// Advance one cell along the current heading (`M`).
    Move,
}

impl RoverOp {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'L' => Some(Self::TurnLeft),
            'R' => Some(Self::TurnRight),
            'M' => Some(Self::Move),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Self::TurnLeft => 'L',
            Self::TurnRight => 'R',
            Self::Move => 'M',
        }
    }
}

/// A single rover: where it is, the plateau it was dropped on, and the commands
/// it has been given.
///
/// The plateau is a copy, so rovers never share mutable state with each other.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarsRover {
    position: Position,
    plateau: Plateau,
    commands: String,
}

impl MarsRover {
    pub fn new(plateau: Plateau, position: Position, commands: impl Into<String>) -> Self {
        Self {
            position,
            plateau,
            commands: commands.into(),
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn set_position(&mut self, x: u8, y: u8, heading: Heading) {
        self.position = Position::new(x, y, heading);
    }

    pub fn heading(&self) -> Heading {
        self.position.heading
    }

    pub fn set_heading(&mut self, heading: Heading) {
        self.position.heading = heading;
    }

    pub fn plateau(&self) -> &Plateau {
        &self.plateau
    }

    pub fn set_plateau(&mut self, plateau: Plateau) {
        self.plateau = plateau;
    }

    /// The raw command string, exactly as it appeared in the input.
    pub fn commands(&self) -> &str {
        &self.commands
    }

    /// Iterates over the command string as operations.
    ///
    /// Characters outside `L`/`R`/`M` are skipped; the parser never produces them.
    pub fn ops(&self) -> impl Iterator<Item = RoverOp> + '_ {
        self.commands.chars().filter_map(RoverOp::from_char)
    }

    /// Turns the rover according to a command character. `'L'` and `'R'` rotate,
    /// anything else leaves the heading untouched.
    pub fn turn(&mut self, direction: char) {
        match RoverOp::from_char(direction) {
            Some(RoverOp::TurnLeft) => self.position.heading = self.position.heading.left(),
            Some(RoverOp::TurnRight) => self.position.heading = self.position.heading.right(),
            Some(RoverOp::Move) | None => {}
        }
    }

    /// Moves one cell along the current heading if the target cell is on `plateau`.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OutOfBounds`] if the move would leave the plateau,
    /// including stepping below zero. The position is not changed in that case.
    pub fn advance(&mut self, plateau: &Plateau) -> Result<(), MoveError> {
        let next = self.position.coordinates.as_ivec2() + self.position.heading.step();

        let coordinates = plateau
            .contains(next)
            .then(|| Coordinates::from_ivec2(next))
            .flatten()
            .ok_or(MoveError::OutOfBounds {
                position: self.position,
                plateau: *plateau,
            })?;

        self.position.coordinates = coordinates;
        Ok(())
    }

    /// Applies a single operation, advancing against the rover's own plateau.
    ///
    /// # Errors
    ///
    /// Propagates [`MoveError`] from [`advance`](Self::advance).
    pub fn apply(&mut self, op: RoverOp) -> Result<(), MoveError> {
        match op {
            RoverOp::TurnLeft => {
                self.position.heading = self.position.heading.left();
                Ok(())
            }
            RoverOp::TurnRight => {
                self.position.heading = self.position.heading.right();
                Ok(())
            }
            RoverOp::Move => {
                let plateau = self.plateau;
                self.advance(&plateau)
            }
        }
    }
}
