//! Rover state and the movement state machine.
//!
//! A [`Rover`] is parsed from a single line of text holding its starting
//! pose and its whole movement program, validated against a [`Grid`], and
//! then driven to completion with [`Rover::execute_all`]. The program is
//! kept as an immutable sequence with a cursor; commands are never executed
//! twice and a lost rover never executes another one.

use crate::error::Error;
use crate::grid::Grid;
use glam::IVec2;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;
use tracing::debug;

// Pose in parentheses, then at least one command letter. Whitespace is
// tolerated inside and around the parentheses and around the commas, but
// never inside or between the command letters.
static ROVER_SPEC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\(\s*([0-9]+)\s*,\s*([0-9]+)\s*,\s*([NSEW])\s*\)\s*([FRL]+)$")
        .expect("rover spec pattern")
});

/// One of the four cardinal compass directions a rover can face.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Heading {
    North,
    South,
    East,
    West,
}

impl Heading {
    /// Parses a heading letter, case-insensitively.
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'N' => Some(Self::North),
            'S' => Some(Self::South),
            'E' => Some(Self::East),
            'W' => Some(Self::West),
            _ => None,
        }
    }

    /// The unit step a `Forward` command takes along this heading.
    pub fn delta(self) -> IVec2 {
        match self {
            Self::North => IVec2::Y,
            Self::South => IVec2::NEG_Y,
            Self::East => IVec2::X,
            Self::West => IVec2::NEG_X,
        }
    }

    /// Rotates clockwise through the cycle N -> E -> S -> W -> N.
    pub fn turn_right(self) -> Self {
        match self {
            Self::North => Self::East,
            Self::East => Self::South,
            Self::South => Self::West,
            Self::West => Self::North,
        }
    }

    /// Rotates counter-clockwise: the inverse of [`turn_right`](Self::turn_right).
    pub fn turn_left(self) -> Self {
        match self {
            Self::North => Self::West,
            Self::West => Self::South,
            Self::South => Self::East,
            Self::East => Self::North,
        }
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self {
            Self::North => 'N',
            Self::South => 'S',
            Self::East => 'E',
            Self::West => 'W',
        };
        write!(f, "{letter}")
    }
}

/// A single instruction of a rover's movement program.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// Move one unit along the current heading (`F`).
    Forward,
    /// Rotate the heading clockwise (`R`).
    TurnRight,
    /// Rotate the heading counter-clockwise (`L`).
    TurnLeft,
}

impl Command {
    /// Parses a command letter, case-insensitively.
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'F' => Some(Self::Forward),
            'R' => Some(Self::TurnRight),
            'L' => Some(Self::TurnLeft),
            _ => None,
        }
    }
}

/// A rover's final state after its program terminated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub x: i32,
    pub y: i32,
    pub heading: Heading,
    /// True if a `Forward` step would have left the grid.
    pub lost: bool,
}

impl fmt::Display for Report {
    /// Renders `(x, y, H)`, with `" LOST"` appended iff the rover is lost.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.heading)?;
        if self.lost {
            write!(f, " LOST")?;
        }
        Ok(())
    }
}

/// The movement state machine: a pose plus an unexecuted command program.
///
/// Tracks position, heading, and the terminal `lost` flag. Commands are held
/// in an immutable sequence and consumed through a cursor, so the program is
/// never mutated in place and the unexecuted tail stays inspectable after a
/// loss.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rover {
    /// Current grid position. While not lost, always within the bounds the
    /// rover was constructed against.
    pub position: IVec2,

    /// Current heading; always one of the four cardinal values.
    pub heading: Heading,

    /// Terminal flag: set when a `Forward` step would leave the grid, and
    /// never reset. A lost rover ignores every further command.
    pub lost: bool,

    commands: Vec<Command>,
    cursor: usize,
}

impl Rover {
    /// Parses a rover specification and validates it against `grid`.
    ///
    /// The accepted shape is `(x, y, H) CCC...`: an integer pair and a
    /// cardinal letter inside parentheses, then one or more command letters
    /// with nothing between them. Heading and command letters are
    /// case-insensitive and canonicalized on parse. Whitespace is tolerated
    /// everywhere except inside the command run.
    ///
    /// Fails with [`Error::InvalidRoverSpec`] when the pattern does not
    /// match (missing parentheses or commas, a stray character or space in
    /// the command run, a negative coordinate, a missing heading, an empty
    /// program), and with [`Error::OutOfBounds`] when the parsed start
    /// position lies outside `grid`. Starting out of bounds is rejected
    /// here rather than flagged as lost; only [`execute_all`](Self::execute_all)
    /// run against *different* bounds can strand a validly-built rover.
    pub fn new(spec: &str, grid: &Grid) -> Result<Self, Error> {
        let caps = ROVER_SPEC
            .captures(spec.trim())
            .ok_or(Error::InvalidRoverSpec)?;

        let x = caps[1].parse().map_err(|_| Error::InvalidRoverSpec)?;
        let y = caps[2].parse().map_err(|_| Error::InvalidRoverSpec)?;
        let position = IVec2::new(x, y);

        // The pattern only admits NSEW and FRL letters, so the per-char
        // parses below cannot fail in practice.
        let heading = caps[3]
            .chars()
            .next()
            .and_then(Heading::from_char)
            .ok_or(Error::InvalidRoverSpec)?;
        let commands = caps[4]
            .chars()
            .map(|c| Command::from_char(c).ok_or(Error::InvalidRoverSpec))
            .collect::<Result<Vec<_>, _>>()?;

        if !grid.contains(position) {
            return Err(Error::OutOfBounds);
        }

        Ok(Self {
            position,
            heading,
            lost: false,
            commands,
            cursor: 0,
        })
    }

    /// Executes one command against `grid`.
    ///
    /// `Forward` computes the candidate cell one unit along the heading; if
    /// the candidate is outside `grid` the rover becomes lost and keeps its
    /// last valid position and heading, otherwise it moves there. The turn
    /// commands rotate the heading in place. A lost rover is frozen: every
    /// call is a no-op.
    pub fn step(&mut self, command: Command, grid: &Grid) {
        if self.lost {
            return;
        }

        match command {
            Command::Forward => {
                let candidate = self.position + self.heading.delta();
                if grid.contains(candidate) {
                    self.position = candidate;
                } else {
                    debug!(x = self.position.x, y = self.position.y, heading = %self.heading, "rover lost");
                    self.lost = true;
                }
            }
            Command::TurnRight => self.heading = self.heading.turn_right(),
            Command::TurnLeft => self.heading = self.heading.turn_left(),
        }
    }

    /// Runs the remaining program to completion against `grid`.
    ///
    /// Commands are consumed front to back until either the program is
    /// exhausted or the rover becomes lost; a loss discards the unexecuted
    /// tail. Callers normally pass the grid the rover was constructed
    /// against, but the bounds are an explicit argument so a program can be
    /// replayed against different ones.
    pub fn execute_all(&mut self, grid: &Grid) {
        while self.cursor < self.commands.len() && !self.lost {
            let command = self.commands[self.cursor];
            self.cursor += 1;
            self.step(command, grid);
        }
    }

    /// The unexecuted tail of the program.
    ///
    /// Empty once the program ran to completion; after a loss it holds the
    /// discarded commands, which no entry point will ever execute.
    pub fn remaining_commands(&self) -> &[Command] {
        &self.commands[self.cursor..]
    }

    /// Snapshot of the rover's current end state.
    pub fn report(&self) -> Report {
        Report {
            x: self.position.x,
            y: self.position.y,
            heading: self.heading,
            lost: self.lost,
        }
    }
}
