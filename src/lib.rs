//! # mars-rover
//!
//! Simulates rovers driving across a rectangular plateau.
//!
//! A command file names the plateau's far corner, then describes each rover as a
//! start position and a string of `L`/`R`/`M` commands. Records may be interleaved
//! with blank lines and free text, and a rover's position and commands may arrive
//! in either order. [`parse_input`] turns such a file into a list of [`MarsRover`]s
//! and [`RoverInterpreter`] executes their commands, refusing any move that would
//! take a rover off the plateau.

pub mod error;
pub mod geometry;
pub mod interpreter;
pub mod parser;
pub mod rover;

pub use error::*;
pub use geometry::*;
pub use interpreter::*;
pub use parser::*;
pub use rover::*;
