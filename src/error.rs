//! Error types for line parsing, input assembly and rover movement.

use crate::geometry::{Plateau, Position};
use serde::Serialize;
use thiserror::Error;

/// Broad class of a [`ParseError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// The line had the wrong number of tokens.
    Format,
    /// A token was present but its value is not accepted.
    Range,
}

/// Failure to convert a single line into a typed record.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("invalid plateau format: expected `WIDTH HEIGHT`, got {0:?}")]
    InvalidPlateauFormat(String),
    #[error("invalid width {0:?}: must be an integer between 3 and 255")]
    InvalidWidth(String),
    #[error("invalid height {0:?}: must be an integer between 3 and 255")]
    InvalidHeight(String),
    #[error("invalid position format: expected `X Y HEADING`, got {0:?}")]
    InvalidPositionFormat(String),
    #[error("invalid X coordinate {0:?}")]
    InvalidXCoordinate(String),
    #[error("invalid Y coordinate {0:?}")]
    InvalidYCoordinate(String),
    #[error("invalid heading {0:?}: expected one of N, E, S, W")]
    InvalidHeading(String),
    #[error("invalid command {0:?}: expected one of L, R, M")]
    InvalidCommand(char),
}

impl ParseError {
    pub fn kind(&self) -> ParseErrorKind {
        match self {
            Self::InvalidPlateauFormat(_) | Self::InvalidPositionFormat(_) => ParseErrorKind::Format,
            Self::InvalidWidth(_)
            | Self::InvalidHeight(_)
            | Self::InvalidXCoordinate(_)
            | Self::InvalidYCoordinate(_)
            | Self::InvalidHeading(_)
            | Self::InvalidCommand(_) => ParseErrorKind::Range,
        }
    }
}

/// Stream-level failure of [`parse_input`](crate::parser::parse_input).
#[derive(Debug, Error)]
pub enum InputError {
    #[error("input contains no plateau dimensions")]
    NoPlateauDimensions,
    #[error("input contains no valid rover movement data")]
    NoValidRoverData,
    #[error("error reading input")]
    InputReadError(#[from] std::io::Error),
}

/// A rejected rover move. The rover keeps its previous position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error, Serialize)]
pub enum MoveError {
    #[error("rover at {position} cannot move beyond the plateau boundaries ({}, {})", .plateau.width, .plateau.height)]
    OutOfBounds { position: Position, plateau: Plateau },
}
