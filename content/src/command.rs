// pathcross/content/src/command.rs
//
// Copyright © 2020 The Pathcross Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Path drawing commands, as written in path data.

use std::fmt::{self, Display, Formatter};

/// A single drawing command: a command letter plus its numeric parameters.
///
/// A command may carry several parameter groups. Extra groups repeat the command implicitly, the
/// same way they do in path text (`L0,0 10,10` draws two lines).
#[derive(Clone, Debug, PartialEq)]
pub struct PathCommand {
    letter: char,
    params: Vec<f64>,
}

impl PathCommand {
    /// Creates a new command record. The letter is not validated here; the parser rejects
    /// unknown letters.
    #[inline]
    pub fn new(letter: char, params: Vec<f64>) -> PathCommand {
        PathCommand { letter, params }
    }

    /// The command letter, e.g. `M` or `c`.
    #[inline]
    pub fn letter(&self) -> char {
        self.letter
    }

    /// The numeric parameters, in the order they were written.
    #[inline]
    pub fn params(&self) -> &[f64] {
        &self.params
    }

    /// Returns the kind of this command, or `None` if the letter is not a path command.
    #[inline]
    pub fn kind(&self) -> Option<CommandKind> {
        CommandKind::from_letter(self.letter)
    }

    /// Returns true if the coordinates of this command are relative to the current point.
    #[inline]
    pub fn is_relative(&self) -> bool {
        self.letter.is_ascii_lowercase()
    }
}

impl Display for PathCommand {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        write!(formatter, "{}", self.letter)?;
        for (index, param) in self.params.iter().enumerate() {
            if index > 0 {
                write!(formatter, ",")?;
            }
            write!(formatter, "{}", param)?;
        }
        Ok(())
    }
}

/// The kinds of path commands, independent of whether they are absolute or relative.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CommandKind {
    /// `M`: starts a new subpath.
    MoveTo,
    /// `L`
    LineTo,
    /// `H`
    HorizontalLineTo,
    /// `V`
    VerticalLineTo,
    /// `C`
    CurveTo,
    /// `S`: a cubic curve whose first control point mirrors the previous curve's last one.
    SmoothCurveTo,
    /// `Q`
    QuadraticCurveTo,
    /// `T`: a quadratic curve whose control point mirrors the previous quadratic's.
    SmoothQuadraticCurveTo,
    /// `A`: an elliptical arc.
    Arc,
    /// `Z`: draws a line back to the start of the subpath.
    ClosePath,
}

impl CommandKind {
    /// Maps a command letter (either case) to a command kind.
    pub fn from_letter(letter: char) -> Option<CommandKind> {
        match letter.to_ascii_uppercase() {
            'M' => Some(CommandKind::MoveTo),
            'L' => Some(CommandKind::LineTo),
            'H' => Some(CommandKind::HorizontalLineTo),
            'V' => Some(CommandKind::VerticalLineTo),
            'C' => Some(CommandKind::CurveTo),
            'S' => Some(CommandKind::SmoothCurveTo),
            'Q' => Some(CommandKind::QuadraticCurveTo),
            'T' => Some(CommandKind::SmoothQuadraticCurveTo),
            'A' => Some(CommandKind::Arc),
            'Z' => Some(CommandKind::ClosePath),
            _ => None,
        }
    }

    /// The number of parameters in one parameter group of this command.
    pub fn arity(self) -> usize {
        match self {
            CommandKind::MoveTo | CommandKind::LineTo => 2,
            CommandKind::HorizontalLineTo | CommandKind::VerticalLineTo => 1,
            CommandKind::CurveTo => 6,
            CommandKind::SmoothCurveTo | CommandKind::QuadraticCurveTo => 4,
            CommandKind::SmoothQuadraticCurveTo => 2,
            CommandKind::Arc => 7,
            CommandKind::ClosePath => 0,
        }
    }

    /// The absolute (uppercase) letter for this command.
    pub fn letter(self) -> char {
        match self {
            CommandKind::MoveTo => 'M',
            CommandKind::LineTo => 'L',
            CommandKind::HorizontalLineTo => 'H',
            CommandKind::VerticalLineTo => 'V',
            CommandKind::CurveTo => 'C',
            CommandKind::SmoothCurveTo => 'S',
            CommandKind::QuadraticCurveTo => 'Q',
            CommandKind::SmoothQuadraticCurveTo => 'T',
            CommandKind::Arc => 'A',
            CommandKind::ClosePath => 'Z',
        }
    }
}

#[cfg(test)]
mod test {
    use super::{CommandKind, PathCommand};

    #[test]
    fn test_letters_round_trip() {
        for &letter in &['M', 'L', 'H', 'V', 'C', 'S', 'Q', 'T', 'A', 'Z'] {
            let kind = CommandKind::from_letter(letter).unwrap();
            assert_eq!(kind.letter(), letter);
            assert_eq!(CommandKind::from_letter(letter.to_ascii_lowercase()), Some(kind));
        }
        assert_eq!(CommandKind::from_letter('X'), None);
        assert_eq!(CommandKind::from_letter('R'), None);
    }

    #[test]
    fn test_arity() {
        assert_eq!(CommandKind::Arc.arity(), 7);
        assert_eq!(CommandKind::SmoothQuadraticCurveTo.arity(), 2);
        assert_eq!(CommandKind::ClosePath.arity(), 0);
    }

    #[test]
    fn test_display() {
        let command = PathCommand::new('l', vec![10.0, -5.5]);
        assert!(command.is_relative());
        assert_eq!(command.kind(), Some(CommandKind::LineTo));
        assert_eq!(command.to_string(), "l10,-5.5");
        assert_eq!(PathCommand::new('Z', vec![]).to_string(), "Z");
    }
}
