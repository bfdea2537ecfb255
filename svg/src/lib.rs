// pathcross/svg/src/lib.rs
//
// Copyright © 2020 The Pathcross Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Parses SVG path data into normalized paths of cubic segments.
//!
//! ```
//! let path = pathcross_svg::parse_str("M0,0 L100,100 Q150,50 200,100 Z").unwrap();
//! assert_eq!(path.segment_count(), 3);
//! ```

#[macro_use]
extern crate log;

use crate::lexer::Lexer;
use crate::parser::Normalizer;
use pathcross_content::command::PathCommand;
use pathcross_content::path::NormalizedPath;
use std::borrow::Cow;

pub use crate::error::ParseError;

mod error;
mod lexer;
mod parser;

/// Any of the accepted path representations.
#[derive(Clone, Copy, Debug)]
pub enum PathSource<'a> {
    /// Path data text, e.g. `M0,0 L10,10`.
    Svg(&'a str),
    /// Command records, one per explicit command letter.
    Commands(&'a [PathCommand]),
    /// A path that is already normalized.
    Normalized(&'a NormalizedPath),
}

impl<'a> From<&'a str> for PathSource<'a> {
    #[inline]
    fn from(source: &'a str) -> PathSource<'a> {
        PathSource::Svg(source)
    }
}

impl<'a> From<&'a String> for PathSource<'a> {
    #[inline]
    fn from(source: &'a String) -> PathSource<'a> {
        PathSource::Svg(source)
    }
}

impl<'a> From<&'a [PathCommand]> for PathSource<'a> {
    #[inline]
    fn from(commands: &'a [PathCommand]) -> PathSource<'a> {
        PathSource::Commands(commands)
    }
}

impl<'a> From<&'a Vec<PathCommand>> for PathSource<'a> {
    #[inline]
    fn from(commands: &'a Vec<PathCommand>) -> PathSource<'a> {
        PathSource::Commands(commands)
    }
}

impl<'a> From<&'a NormalizedPath> for PathSource<'a> {
    #[inline]
    fn from(path: &'a NormalizedPath) -> PathSource<'a> {
        PathSource::Normalized(path)
    }
}

/// Normalizes any accepted representation. Normalized input is returned as is, without copying.
pub fn parse<'a, S>(source: S) -> Result<Cow<'a, NormalizedPath>, ParseError>
                    where S: Into<PathSource<'a>> {
    match source.into() {
        PathSource::Svg(text) => parse_str(text).map(Cow::Owned),
        PathSource::Commands(commands) => parse_commands(commands).map(Cow::Owned),
        PathSource::Normalized(path) => Ok(Cow::Borrowed(path)),
    }
}

/// Parses and normalizes path data text. Error positions are byte offsets into `source`.
pub fn parse_str(source: &str) -> Result<NormalizedPath, ParseError> {
    let tokens = Lexer::new(source).tokens()?;
    Normalizer::new().normalize(tokens.iter().map(|&(ref command, position)| (command, position)))
}

/// Normalizes command records. Error positions are indices into `commands`.
pub fn parse_commands(commands: &[PathCommand]) -> Result<NormalizedPath, ParseError> {
    Normalizer::new().normalize(commands.iter().enumerate().map(|(index, command)| {
        (command, index)
    }))
}

/// Splits path data text into command records, one per explicit command letter, without
/// normalizing them.
pub fn tokenize(source: &str) -> Result<Vec<PathCommand>, ParseError> {
    let tokens = Lexer::new(source).tokens()?;
    Ok(tokens.into_iter().map(|(command, _)| command).collect())
}
