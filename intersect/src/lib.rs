// pathcross/intersect/src/lib.rs
//
// Copyright © 2020 The Pathcross Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Finds the points where SVG paths cross each other.
//!
//! Two paths can be compared directly:
//!
//! ```
//! use pathcross_intersect::{IntersectOptions, find_path_intersections};
//!
//! let options = IntersectOptions::default();
//! let hits = find_path_intersections("M0,0L100,100", "M0,100L100,0", &options).unwrap();
//! assert_eq!((hits[0].x, hits[0].y), (50.0, 50.0));
//! ```
//!
//! Many paths are better registered with an `IndexSession`, whose spatial index skips pairs of
//! segments that are nowhere near each other.

#[macro_use]
extern crate log;

use pathcross_svg::{self, ParseError, PathSource};

pub use crate::error::{IndexError, SessionError};
pub use crate::index::{CandidatePair, GridIndex, IndexEntry, PathId, ScanIndex, SpatialIndex};
pub use crate::intersection::{IndexedIntersection, Intersection};
pub use crate::options::IntersectOptions;
pub use crate::session::IndexSession;

pub mod index;
pub mod solver;

mod error;
mod intersection;
mod options;
mod session;

/// Finds every intersection between two paths.
///
/// Each segment of `path1` is tested against each segment of `path2`, in drawing order.
/// Results from different segment pairs are not merged, so a crossing exactly at a joint
/// between segments can be reported once per segment touching it.
pub fn find_path_intersections<'a, 'b, A, B>(path1: A, path2: B, options: &IntersectOptions)
                                             -> Result<Vec<Intersection>, ParseError>
                                             where A: Into<PathSource<'a>>,
                                                   B: Into<PathSource<'b>> {
    let (path1, path2) = (pathcross_svg::parse(path1)?, pathcross_svg::parse(path2)?);
    let mut results = vec![];
    for (index1, segment1) in path1.segments() {
        for (index2, segment2) in path2.segments() {
            for hit in solver::intersect_segments(segment1, segment2, options) {
                results.push(Intersection::new(&hit, (index1, segment1), (index2, segment2)));
            }
        }
    }
    Ok(results)
}

/// Returns the number of intersections `find_path_intersections` would report.
pub fn count_path_intersections<'a, 'b, A, B>(path1: A, path2: B, options: &IntersectOptions)
                                              -> Result<usize, ParseError>
                                              where A: Into<PathSource<'a>>,
                                                    B: Into<PathSource<'b>> {
    let (path1, path2) = (pathcross_svg::parse(path1)?, pathcross_svg::parse(path2)?);
    let mut count = 0;
    for (_, segment1) in path1.segments() {
        for (_, segment2) in path2.segments() {
            count += solver::count_segment_intersections(segment1, segment2, options);
        }
    }
    Ok(count)
}
