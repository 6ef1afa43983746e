//! Line-oriented parsing of rover command files.
//!
//! A command file interleaves three kinds of records, one per line:
//!
//! | Shape        | Example      | Meaning                                  |
//! |--------------|--------------|------------------------------------------|
//! | `W H`        | `5 5`        | plateau far corner, first one wins       |
//! | `X Y H`      | `1 2 N`      | start position of the rover being built  |
//! | `[LRM]*`     | `LMLMLMLMM`  | commands of the rover being built        |
//!
//! Every other line is ignored. The entry point is [`parse_input`]; the individual
//! line parsers ([`parse_plateau`], [`parse_position`], [`parse_commands`]) are
//! exposed for callers that already have a single line in hand.

use crate::error::{InputError, ParseError};
use crate::geometry::{Heading, Plateau, Position};
use crate::rover::{MarsRover, RoverOp};
use regex::Regex;
use std::io::{BufRead, Cursor};
use std::sync::LazyLock;
use tracing::{debug, trace};

static PLATEAU_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\s+\d+$").expect("Invalid plateau regex"));

static POSITION_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\s+\d+\s+[NSEW]$").expect("Invalid position regex"));

static COMMANDS_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[LRM]*$").expect("Invalid commands regex"));

/// Parses a `WIDTH HEIGHT` line into a [`Plateau`].
///
/// # Errors
///
/// - [`ParseError::InvalidPlateauFormat`] if the line does not have exactly two tokens.
/// - [`ParseError::InvalidWidth`] / [`ParseError::InvalidHeight`] if a token is not an
///   8-bit integer or is below [`Plateau::MIN_DIMENSION`].
pub fn parse_plateau(line: &str) -> Result<Plateau, ParseError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let [width, height] = tokens[..] else {
        return Err(ParseError::InvalidPlateauFormat(line.to_owned()));
    };

    let dimension = |token: &str| {
        token
            .parse::<u8>()
            .ok()
            .filter(|&v| v >= Plateau::MIN_DIMENSION)
    };

    let width_value = dimension(width).ok_or_else(|| ParseError::InvalidWidth(width.to_owned()))?;
    let height_value =
        dimension(height).ok_or_else(|| ParseError::InvalidHeight(height.to_owned()))?;

    Ok(Plateau::new(width_value, height_value))
}

/// Parses an `X Y HEADING` line into a [`Position`].
///
/// # Errors
///
/// - [`ParseError::InvalidPositionFormat`] if the line does not have exactly three tokens.
/// - [`ParseError::InvalidXCoordinate`] / [`ParseError::InvalidYCoordinate`] if a
///   coordinate is not an 8-bit integer.
/// - [`ParseError::InvalidHeading`] if the heading is not a single `N`, `E`, `S` or `W`.
pub fn parse_position(line: &str) -> Result<Position, ParseError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let [x, y, heading] = tokens[..] else {
        return Err(ParseError::InvalidPositionFormat(line.to_owned()));
    };

    let x_value = x
        .parse::<u8>()
        .map_err(|_| ParseError::InvalidXCoordinate(x.to_owned()))?;
    let y_value = y
        .parse::<u8>()
        .map_err(|_| ParseError::InvalidYCoordinate(y.to_owned()))?;

    let mut chars = heading.chars();
    let heading_value = match (chars.next(), chars.next()) {
        (Some(c), None) => Heading::from_char(c),
        _ => None,
    }
    .ok_or_else(|| ParseError::InvalidHeading(heading.to_owned()))?;

    Ok(Position::new(x_value, y_value, heading_value))
}

/// Validates a command line. The empty line is a valid, empty command sequence.
///
/// # Errors
///
/// [`ParseError::InvalidCommand`] carrying the first character that is not `L`, `R` or `M`.
pub fn parse_commands(line: &str) -> Result<String, ParseError> {
    match line.chars().find(|&c| RoverOp::from_char(c).is_none()) {
        Some(c) => Err(ParseError::InvalidCommand(c)),
        None => Ok(line.to_owned()),
    }
}

/// What a single classifier made of a line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LineRecord {
    NoMatch,
    Plateau(Plateau),
    Position(Position),
    Commands(String),
}

type Classifier = fn(&str) -> LineRecord;

/// Every classifier is run against every line, in this order.
const CLASSIFIERS: [Classifier; 3] = [classify_plateau, classify_position, classify_commands];

fn classify_plateau(line: &str) -> LineRecord {
    if !PLATEAU_LINE.is_match(line) {
        return LineRecord::NoMatch;
    }
    parse_plateau(line).map_or(LineRecord::NoMatch, LineRecord::Plateau)
}

fn classify_position(line: &str) -> LineRecord {
    if !POSITION_LINE.is_match(line) {
        return LineRecord::NoMatch;
    }
    parse_position(line).map_or(LineRecord::NoMatch, LineRecord::Position)
}

fn classify_commands(line: &str) -> LineRecord {
    if !COMMANDS_LINE.is_match(line) {
        return LineRecord::NoMatch;
    }
    parse_commands(line).map_or(LineRecord::NoMatch, LineRecord::Commands)
}

/// Runs all three classifiers against an already trimmed line.
///
/// Parse failures are folded into [`LineRecord::NoMatch`]; a line that looks like a
/// plateau but has a dimension below the minimum is simply not a plateau.
pub fn classify(line: &str) -> [LineRecord; 3] {
    CLASSIFIERS.map(|classifier| classifier(line))
}

/// The fields of the rover currently being assembled.
#[derive(Clone, Debug, Default)]
struct RoverDraft {
    position: Option<Position>,
    commands: Option<String>,
}

impl RoverDraft {
    fn freeze(&self, plateau: Option<Plateau>) -> Option<MarsRover> {
        let plateau = plateau?;
        let position = self.position?;
        let commands = self.commands.as_deref().filter(|c| !c.is_empty())?;
        Some(MarsRover::new(plateau, position, commands))
    }
}

/// Accumulates rovers from a sequence of lines.
///
/// [`parse_input`] drives one of these over a reader; it is public so callers can
/// feed lines from any source and inspect progress between lines.
#[derive(Clone, Debug, Default)]
pub struct Assembler {
    plateau: Option<Plateau>,
    draft: Option<RoverDraft>,
    rovers: Vec<MarsRover>,
}

impl Assembler {
    pub fn new() -> Self {
        Self::default()
    }

    /// The shared plateau, once one has been accepted.
    pub fn plateau(&self) -> Option<Plateau> {
        self.plateau
    }

    /// Rovers completed so far, in input order.
    pub fn rovers(&self) -> &[MarsRover] {
        &self.rovers
    }

    /// Feeds one raw line. Surrounding whitespace is trimmed; blank lines are skipped.
    pub fn feed_line(&mut self, raw: &str) {
        let line = raw.trim();
        if line.is_empty() {
            return;
        }

        let mut matched = false;
        for record in classify(line) {
            match record {
                LineRecord::NoMatch => continue,
                LineRecord::Plateau(plateau) => {
                    if self.plateau.is_none() {
                        debug!(width = plateau.width, height = plateau.height, "plateau set");
                        self.plateau = Some(plateau);
                    } else {
                        trace!(line, "ignoring additional plateau line");
                    }
                }
                LineRecord::Position(position) => {
                    debug!(%position, "rover position");
                    self.draft.get_or_insert_default().position = Some(position);
                }
                LineRecord::Commands(commands) => {
                    debug!(commands = commands.as_str(), "rover commands");
                    self.draft.get_or_insert_default().commands = Some(commands);
                }
            }
            matched = true;
        }

        if !matched {
            trace!(line, "ignoring unrecognised line");
            return;
        }

        if let Some(draft) = &self.draft
            && let Some(rover) = draft.freeze(self.plateau)
        {
            debug!(
                index = self.rovers.len(),
                position = %rover.position(),
                commands = rover.commands(),
                "rover assembled"
            );
            self.rovers.push(rover);
            self.draft = None;
        }
    }

    /// Ends the scan and returns the assembled rovers.
    ///
    /// # Errors
    ///
    /// - [`InputError::NoPlateauDimensions`] if no valid plateau line was seen. This
    ///   takes precedence over everything else.
    /// - [`InputError::NoValidRoverData`] if no rover was completed.
    pub fn finish(self) -> Result<Vec<MarsRover>, InputError> {
        if self.plateau.is_none() {
            return Err(InputError::NoPlateauDimensions);
        }
        if self.rovers.is_empty() {
            return Err(InputError::NoValidRoverData);
        }
        Ok(self.rovers)
    }
}

/// Scans `input` line by line and assembles every complete rover it describes.
///
/// Lines may arrive in any order: the first valid plateau line is shared by all
/// rovers, and each rover is complete once both a position and a non-empty command
/// line have been seen (in either order) after the previous rover was completed.
/// A repeated position or command line before completion replaces the earlier one.
///
/// # Errors
///
/// - [`InputError::InputReadError`] if reading from `input` fails.
/// - [`InputError::NoPlateauDimensions`] / [`InputError::NoValidRoverData`], see
///   [`Assembler::finish`].
pub fn parse_input<R: BufRead>(input: R) -> Result<Vec<MarsRover>, InputError> {
    let mut assembler = Assembler::new();
    for line in input.lines() {
        assembler.feed_line(&line?);
    }
    assembler.finish()
}

/// Convenience wrapper around [`parse_input`] for in-memory text.
///
/// # Errors
///
/// See [`parse_input`].
pub fn parse_str(input: &str) -> Result<Vec<MarsRover>, InputError> {
    parse_input(Cursor::new(input))
}
