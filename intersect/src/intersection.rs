// pathcross/intersect/src/intersection.rs
//
// Copyright © 2020 The Pathcross Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use crate::index::PathId;
use crate::solver::SegmentIntersection;
use pathcross_content::segment::Segment;

/// A crossing point of two path segments.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Intersection {
    pub x: f64,
    pub y: f64,
    /// The parameter of the crossing along the first segment, from 0 at its start to 1 at its
    /// end.
    pub t1: f64,
    pub t2: f64,
    /// The position of the first segment in its normalized path.
    pub segment1: usize,
    pub segment2: usize,
    /// The first segment as `x0, y0, cx1, cy1, cx2, cy2, x1, y1`.
    pub bez1: [f64; 8],
    pub bez2: [f64; 8],
}

impl Intersection {
    pub(crate) fn new(hit: &SegmentIntersection,
                      (segment1, curve1): (usize, &Segment),
                      (segment2, curve2): (usize, &Segment))
                      -> Intersection {
        Intersection {
            x: hit.point.x(),
            y: hit.point.y(),
            t1: hit.t1,
            t2: hit.t2,
            segment1,
            segment2,
            bez1: curve1.to_coords(),
            bez2: curve2.to_coords(),
        }
    }
}

/// An intersection between two indexed paths.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IndexedIntersection {
    pub path_id1: PathId,
    pub path_id2: PathId,
    pub intersection: Intersection,
}
