// pathcross/svg/src/error.rs
//
// Copyright © 2020 The Pathcross Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Errors.

use std::error::Error;
use std::fmt::{self, Display, Formatter};

/// Errors that can occur when normalizing path data.
///
/// For path text, `position` is the byte offset of the offending character. For command records,
/// it is the index of the offending record.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum ParseError {
    /// A character that is not a path command appeared where a command was expected.
    UnknownCommand {
        command: char,
        position: usize,
    },
    /// A command ended partway through a parameter group, or had no parameters at all.
    MissingParameters {
        command: char,
        /// The number of parameters in one group.
        expected: usize,
        /// The number of parameters in the incomplete group.
        found: usize,
        position: usize,
    },
    /// A numeric literal was malformed.
    InvalidNumber {
        position: usize,
    },
    /// An arc flag was something other than `0` or `1`.
    InvalidFlag {
        position: usize,
    },
    /// A number appeared with no command to belong to, or after a closepath.
    UnexpectedNumber {
        position: usize,
    },
    /// The path did not begin with a move.
    MissingMoveTo {
        command: char,
        position: usize,
    },
    /// A command record carried NaN or an infinite value.
    NonFiniteParameter {
        command: char,
    },
}

impl ParseError {
    /// The location the error was detected at, if it has one.
    pub fn position(&self) -> Option<usize> {
        match *self {
            ParseError::UnknownCommand { position, .. } |
            ParseError::MissingParameters { position, .. } |
            ParseError::InvalidNumber { position } |
            ParseError::InvalidFlag { position } |
            ParseError::UnexpectedNumber { position } |
            ParseError::MissingMoveTo { position, .. } => Some(position),
            ParseError::NonFiniteParameter { .. } => None,
        }
    }
}

impl Display for ParseError {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        match *self {
            ParseError::UnknownCommand { command, position } => {
                write!(formatter, "unknown path command {:?} at {}", command, position)
            }
            ParseError::MissingParameters { command, expected, found, position } => {
                write!(formatter,
                       "command {:?} at {} expects parameters in groups of {}, found {}",
                       command,
                       position,
                       expected,
                       found)
            }
            ParseError::InvalidNumber { position } => {
                write!(formatter, "invalid number at {}", position)
            }
            ParseError::InvalidFlag { position } => {
                write!(formatter, "arc flag at {} must be 0 or 1", position)
            }
            ParseError::UnexpectedNumber { position } => {
                write!(formatter, "number at {} does not belong to any command", position)
            }
            ParseError::MissingMoveTo { command, position } => {
                write!(formatter, "path must start with a move, found {:?} at {}", command, position)
            }
            ParseError::NonFiniteParameter { command } => {
                write!(formatter, "command {:?} has a non-finite parameter", command)
            }
        }
    }
}

impl Error for ParseError {}
