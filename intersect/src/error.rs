// pathcross/intersect/src/error.rs
//
// Copyright © 2020 The Pathcross Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Errors.

use crate::index::PathId;
use pathcross_svg::ParseError;
use std::error::Error;
use std::fmt::{self, Display, Formatter};

/// Errors reported by the shipped spatial index backings.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum IndexError {
    /// A segment was added twice under the same path and curve index.
    DuplicateEntry {
        path_id: PathId,
        curve_index: usize,
    },
}

impl Display for IndexError {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        match *self {
            IndexError::DuplicateEntry { path_id, curve_index } => {
                write!(formatter,
                       "segment {} of path {} is already indexed",
                       curve_index,
                       path_id)
            }
        }
    }
}

impl Error for IndexError {}

/// Errors that can occur when indexing a path.
#[derive(Clone, PartialEq, Debug)]
pub enum SessionError<E> {
    /// The path could not be normalized. Nothing was registered.
    Parse(ParseError),
    /// The index backing refused a segment. The partially registered path was removed.
    Index(E),
}

impl<E> From<ParseError> for SessionError<E> {
    #[inline]
    fn from(error: ParseError) -> SessionError<E> {
        SessionError::Parse(error)
    }
}

impl<E> Display for SessionError<E> where E: Display {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        match *self {
            SessionError::Parse(ref error) => write!(formatter, "failed to parse path: {}", error),
            SessionError::Index(ref error) => write!(formatter, "failed to index path: {}", error),
        }
    }
}

impl<E> Error for SessionError<E> where E: Error + 'static {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match *self {
            SessionError::Parse(ref error) => Some(error),
            SessionError::Index(ref error) => Some(error),
        }
    }
}
