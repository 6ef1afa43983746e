//! Executes a rover's command string and reports where it ended up.
//!
//! The entry point is [`RoverInterpreter`]. Configure it with an
//! [`InterpreterConfig`], then call [`RoverInterpreter::run`] for a single rover or
//! [`RoverInterpreter::run_all`] for everything returned by
//! [`parse_input`](crate::parser::parse_input).

use crate::error::MoveError;
use crate::geometry::Position;
use crate::rover::{MarsRover, RoverOp};
use serde::Serialize;
use tracing::{debug, info, warn};

/// Configuration for command execution.
#[derive(Clone, Debug, Default)]
pub struct InterpreterConfig {
    /// Stop executing a rover's remaining commands after its first rejected move.
    /// Default: `false`, the rover skips the move and carries on.
    pub halt_on_rejection: bool,
}

/// A move that was refused because it would have left the plateau.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct RejectedMove {
    /// Zero-based index of the command within the rover's command string.
    pub step: usize,
    pub op: RoverOp,
    pub error: MoveError,
}

/// Outcome of running one rover's commands.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Traverse {
    /// Zero-based index of the rover in input order.
    pub rover: usize,
    pub start: Position,
    pub end: Position,
    pub rejected: Vec<RejectedMove>,
    /// `true` if execution stopped early because of `halt_on_rejection`.
    pub halted: bool,
}

/// Drives rovers through their command strings.
#[derive(Clone, Debug, Default)]
pub struct RoverInterpreter {
    config: InterpreterConfig,
}

impl RoverInterpreter {
    pub fn new(config: InterpreterConfig) -> Self {
        Self { config }
    }

    /// Executes every command of `rover` in order, mutating it in place.
    ///
    /// Turns always succeed. A move that would leave the rover's plateau is recorded
    /// in [`Traverse::rejected`] and the rover stays where it is; unless
    /// `halt_on_rejection` is set, execution continues with the next command.
    pub fn run(&self, index: usize, rover: &mut MarsRover) -> Traverse {
        let start = rover.position();
        let mut rejected = Vec::new();
        let mut halted = false;

        let ops: Vec<RoverOp> = rover.ops().collect();
        for (step, op) in ops.into_iter().enumerate() {
            if let Err(error) = rover.apply(op) {
                warn!(rover = index, step, %error, "move rejected");
                rejected.push(RejectedMove { step, op, error });
                if self.config.halt_on_rejection {
                    halted = true;
                    break;
                }
            }
        }

        let end = rover.position();
        debug!(rover = index, %start, %end, rejected = rejected.len(), "rover finished");

        Traverse {
            rover: index,
            start,
            end,
            rejected,
            halted,
        }
    }

    /// Runs each rover in turn. Rovers are independent, so one rover's rejected
    /// moves never affect another.
    pub fn run_all(&self, rovers: &mut [MarsRover]) -> Vec<Traverse> {
        info!(count = rovers.len(), "processing rovers");
        rovers
            .iter_mut()
            .enumerate()
            .map(|(index, rover)| self.run(index, rover))
            .collect()
    }
}
