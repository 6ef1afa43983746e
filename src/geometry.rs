//! Value types describing the plateau grid and where a rover stands on it.

use glam::IVec2;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A cell on the plateau grid.
///
/// Both axes are unsigned 8-bit values; whether a coordinate is actually on the
/// plateau is only checked when a rover advances onto it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coordinates {
    pub x: u8,
    pub y: u8,
}

impl Coordinates {
    pub fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }

    /// Widens the coordinate into signed space so stepping off the grid edge
    /// (including below zero) can be detected instead of wrapping.
    pub fn as_ivec2(self) -> IVec2 {
        IVec2::new(i32::from(self.x), i32::from(self.y))
    }

    /// Narrows a signed grid vector back into a coordinate.
    ///
    /// Returns `None` if either component is negative or exceeds `u8::MAX`.
    pub fn from_ivec2(v: IVec2) -> Option<Self> {
        let x = u8::try_from(v.x).ok()?;
        let y = u8::try_from(v.y).ok()?;
        Some(Self { x, y })
    }
}

/// One of the four compass directions a rover can face.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Heading {
    #[serde(rename = "N")]
    North,
    #[serde(rename = "E")]
    East,
    #[serde(rename = "S")]
    South,
    #[serde(rename = "W")]
    West,
}

impl Heading {
    /// All headings in clockwise order starting at North.
    pub const ALL: [Heading; 4] = [Heading::North, Heading::East, Heading::South, Heading::West];

    /// Parses the single uppercase compass letter used in command files.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'N' => Some(Self::North),
            'E' => Some(Self::East),
            'S' => Some(Self::South),
            'W' => Some(Self::West),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Self::North => 'N',
            Self::East => 'E',
            Self::South => 'S',
            Self::West => 'W',
        }
    }

    /// The heading after a 90° counter-clockwise turn (N → W → S → E → N).
    pub fn left(self) -> Self {
        match self {
            Self::North => Self::West,
            Self::West => Self::South,
            Self::South => Self::East,
            Self::East => Self::North,
        }
    }

    /// The heading after a 90° clockwise turn (N → E → S → W → N).
    pub fn right(self) -> Self {
        match self {
            Self::North => Self::East,
            Self::East => Self::South,
            Self::South => Self::West,
            Self::West => Self::North,
        }
    }

    /// Unit grid step for one advance in this direction. North is `+Y`, East is `+X`.
    pub fn step(self) -> IVec2 {
        match self {
            Self::North => IVec2::Y,
            Self::East => IVec2::X,
            Self::South => IVec2::NEG_Y,
            Self::West => IVec2::NEG_X,
        }
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// The rectangular area rovers are allowed to move on.
///
/// `width` and `height` are the indices of the far corner, so the legal cells run
/// from `(0, 0)` to `(width, height)` inclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Plateau {
    pub width: u8,
    pub height: u8,
}

impl Plateau {
    /// Smallest accepted value for either dimension.
    pub const MIN_DIMENSION: u8 = 3;

    pub fn new(width: u8, height: u8) -> Self {
        Self { width, height }
    }

    /// Returns `true` if `cell` lies on the plateau, far edges included.
    pub fn contains(&self, cell: IVec2) -> bool {
        let far = IVec2::new(i32::from(self.width), i32::from(self.height));
        cell.cmpge(IVec2::ZERO).all() && cell.cmple(far).all()
    }
}

/// A coordinate plus the direction the rover is facing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub coordinates: Coordinates,
    pub heading: Heading,
}

impl Position {
    pub fn new(x: u8, y: u8, heading: Heading) -> Self {
        Self {
            coordinates: Coordinates::new(x, y),
            heading,
        }
    }

    pub fn x(&self) -> u8 {
        self.coordinates.x
    }

    pub fn y(&self) -> u8 {
        self.coordinates.y
    }
}

/// Renders as `"X Y H"`, the same shape position lines take in the input.
impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.x(), self.y(), self.heading)
    }
}
