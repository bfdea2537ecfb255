// pathcross/content/src/path.rs
//
// Copyright © 2020 The Pathcross Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Normalized paths: sequences of move markers and cubic segments.

use crate::command::PathCommand;
use crate::segment::{Segment, SegmentFlags};
use pathcross_geometry::line_segment::LineSegment2D;
use pathcross_geometry::rect::RectD;
use pathcross_geometry::vector::Vector2D;
use std::slice;

/// One element of a normalized path.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NormalizedCurve {
    /// Sets the current point and starts a new subpath.
    Move(Vector2D),
    /// A drawn cubic segment, in absolute coordinates.
    Cubic(Segment),
}

impl NormalizedCurve {
    /// Returns the segment if this is not a move marker.
    #[inline]
    pub fn as_segment(&self) -> Option<&Segment> {
        match *self {
            NormalizedCurve::Cubic(ref segment) => Some(segment),
            NormalizedCurve::Move(_) => None,
        }
    }

    /// The point the pen rests at after this element.
    #[inline]
    pub fn end_point(&self) -> Vector2D {
        match *self {
            NormalizedCurve::Move(point) => point,
            NormalizedCurve::Cubic(ref segment) => segment.to(),
        }
    }
}

/// A path in canonical form.
///
/// Positions in the sequence are segment numbers: move markers occupy positions too, so the
/// first segment after a single leading move is segment 1.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NormalizedPath {
    curves: Vec<NormalizedCurve>,
}

impl NormalizedPath {
    #[inline]
    pub fn new() -> NormalizedPath {
        NormalizedPath { curves: vec![] }
    }

    #[inline]
    pub fn with_capacity(capacity: usize) -> NormalizedPath {
        NormalizedPath { curves: Vec::with_capacity(capacity) }
    }

    #[inline]
    pub fn curves(&self) -> &[NormalizedCurve] {
        &self.curves
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.curves.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.curves.is_empty()
    }

    /// The end point of the last element, or `None` if the path is empty.
    #[inline]
    pub fn current_point(&self) -> Option<Vector2D> {
        self.curves.last().map(NormalizedCurve::end_point)
    }

    /// Appends a move marker.
    #[inline]
    pub fn push_move(&mut self, to: Vector2D) {
        self.curves.push(NormalizedCurve::Move(to));
    }

    /// Appends a segment and returns its segment number.
    ///
    /// `FIRST_IN_SUBPATH` is set if the segment directly follows a move marker or a closing
    /// segment; any other value of that flag on `segment` is replaced.
    pub fn push_segment(&mut self, mut segment: Segment) -> usize {
        let starts_subpath = match self.curves.last() {
            None | Some(NormalizedCurve::Move(_)) => true,
            Some(NormalizedCurve::Cubic(previous)) => {
                previous.flags.contains(SegmentFlags::CLOSES_SUBPATH)
            }
        };
        segment.flags.set(SegmentFlags::FIRST_IN_SUBPATH, starts_subpath);
        self.curves.push(NormalizedCurve::Cubic(segment));
        self.curves.len() - 1
    }

    /// Appends the degenerate segment that closes the current subpath by returning to `start`.
    pub fn push_close(&mut self, start: Vector2D) -> usize {
        let from = self.current_point().unwrap_or(start);
        let segment = Segment::line(LineSegment2D::new(from, start))
            .with_flags(SegmentFlags::CLOSES_SUBPATH);
        self.push_segment(segment)
    }

    /// Returns the segment with the given number, if that position holds a segment.
    #[inline]
    pub fn segment(&self, index: usize) -> Option<&Segment> {
        self.curves.get(index).and_then(NormalizedCurve::as_segment)
    }

    /// Iterates over `(segment number, segment)` pairs in drawing order, skipping move markers.
    #[inline]
    pub fn segments(&self) -> Segments {
        Segments { iter: self.curves.iter().enumerate() }
    }

    /// The number of drawn segments, not counting move markers.
    pub fn segment_count(&self) -> usize {
        self.segments().count()
    }

    /// The union of the bounding boxes of all segments, or `None` if nothing is drawn.
    pub fn bounds(&self) -> Option<RectD> {
        self.segments().fold(None, |bounds, (_, segment)| {
            Some(match bounds {
                None => segment.bounds(),
                Some(bounds) => bounds.union_rect(segment.bounds()),
            })
        })
    }

    /// Emits the canonical command list for this path: `M` for move markers, `Z` for closing
    /// segments, and `C` for everything else. Parsing the result reproduces this path.
    pub fn to_commands(&self) -> Vec<PathCommand> {
        self.curves.iter().map(|curve| {
            match *curve {
                NormalizedCurve::Move(to) => PathCommand::new('M', vec![to.x(), to.y()]),
                NormalizedCurve::Cubic(ref segment)
                        if segment.flags.contains(SegmentFlags::CLOSES_SUBPATH) => {
                    PathCommand::new('Z', vec![])
                }
                NormalizedCurve::Cubic(ref segment) => {
                    PathCommand::new('C', segment.to_coords()[2..].to_vec())
                }
            }
        }).collect()
    }
}

/// An iterator over the segments of a normalized path, with their segment numbers.
pub struct Segments<'a> {
    iter: std::iter::Enumerate<slice::Iter<'a, NormalizedCurve>>,
}

impl<'a> Iterator for Segments<'a> {
    type Item = (usize, &'a Segment);

    #[inline]
    fn next(&mut self) -> Option<(usize, &'a Segment)> {
        loop {
            let (index, curve) = self.iter.next()?;
            if let NormalizedCurve::Cubic(ref segment) = *curve {
                return Some((index, segment));
            }
        }
    }
}
