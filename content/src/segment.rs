// pathcross/content/src/segment.rs
//
// Copyright © 2020 The Pathcross Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Cubic Bézier curve segments, the single primitive of a normalized path.

use pathcross_geometry::line_segment::LineSegment2D;
use pathcross_geometry::rect::RectD;
use pathcross_geometry::vector::Vector2D;

/// A cubic Bézier curve segment with explicit start and end points.
///
/// Every drawing primitive is stored in this form. Straight lines are degenerate cubics whose
/// first control point equals the start point and whose second control point equals the end
/// point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    /// The start and end points of the curve.
    pub baseline: LineSegment2D,
    /// The two control points. The start of this line is the first control point (nearest to
    /// `baseline.from()`), and its end is the second.
    pub ctrl: LineSegment2D,
    /// Various flags that describe information about this segment in a path.
    pub flags: SegmentFlags,
}

impl Segment {
    /// Returns a segment representing a cubic Bézier curve.
    #[inline]
    pub fn cubic(from: Vector2D, ctrl0: Vector2D, ctrl1: Vector2D, to: Vector2D) -> Segment {
        Segment {
            baseline: LineSegment2D::new(from, to),
            ctrl: LineSegment2D::new(ctrl0, ctrl1),
            flags: SegmentFlags::empty(),
        }
    }

    /// Returns a degenerate cubic segment representing a straight line.
    #[inline]
    pub fn line(line: LineSegment2D) -> Segment {
        Segment { baseline: line, ctrl: line, flags: SegmentFlags::empty() }
    }

    /// Degree-elevates a quadratic Bézier curve to the exactly equivalent cubic.
    #[inline]
    pub fn quadratic(from: Vector2D, ctrl: Vector2D, to: Vector2D) -> Segment {
        let ctrl0 = from + (ctrl - from).scale(2.0 / 3.0);
        let ctrl1 = to + (ctrl - to).scale(2.0 / 3.0);
        Segment::cubic(from, ctrl0, ctrl1, to)
    }

    /// Builds a segment from raw control-point data, `x0,y0,cx1,cy1,cx2,cy2,x1,y1`.
    #[inline]
    pub fn from_coords(coords: [f64; 8]) -> Segment {
        Segment::cubic(Vector2D::new(coords[0], coords[1]),
                       Vector2D::new(coords[2], coords[3]),
                       Vector2D::new(coords[4], coords[5]),
                       Vector2D::new(coords[6], coords[7]))
    }

    /// Returns the raw control-point data `x0,y0,cx1,cy1,cx2,cy2,x1,y1`.
    #[inline]
    pub fn to_coords(&self) -> [f64; 8] {
        let (from, to) = (self.baseline.from(), self.baseline.to());
        let (ctrl0, ctrl1) = (self.ctrl.from(), self.ctrl.to());
        [from.x(), from.y(), ctrl0.x(), ctrl0.y(), ctrl1.x(), ctrl1.y(), to.x(), to.y()]
    }

    /// Returns this segment with the given flags.
    #[inline]
    pub fn with_flags(mut self, flags: SegmentFlags) -> Segment {
        self.flags = flags;
        self
    }

    #[inline]
    pub fn from(&self) -> Vector2D {
        self.baseline.from()
    }

    #[inline]
    pub fn to(&self) -> Vector2D {
        self.baseline.to()
    }

    /// The straight line from the start point to the end point.
    #[inline]
    pub fn chord(&self) -> LineSegment2D {
        self.baseline
    }

    /// The bounding box of the four control points. This always encloses the curve.
    #[inline]
    pub fn bounds(&self) -> RectD {
        self.baseline.bounds().union_rect(self.ctrl.bounds())
    }

    /// Returns true if all four points lie within `tolerance` of each other.
    #[inline]
    pub fn is_point(&self, tolerance: f64) -> bool {
        self.bounds().max_extent() <= tolerance
    }

    /// Returns true if both control points lie within `flatness` of the chord, and between its
    /// endpoints. A curve for which this holds may be treated as its chord.
    ///
    /// A segment whose start and end coincide counts as straight only if it is a point.
    pub fn is_straight(&self, flatness: f64) -> bool {
        let chord = self.baseline;
        let length = chord.length();
        if length <= flatness {
            return self.is_point(flatness);
        }

        let (ctrl0, ctrl1) = (self.ctrl.from(), self.ctrl.to());
        if chord.distance_across(ctrl0) > flatness || chord.distance_across(ctrl1) > flatness {
            return false;
        }
        let (along0, along1) = (chord.distance_along(ctrl0), chord.distance_along(ctrl1));
        along0 >= -flatness && along0 <= length + flatness &&
            along1 >= -flatness && along1 <= length + flatness
    }

    /// Returns this segment with endpoints and control points reversed.
    #[inline]
    pub fn reversed(&self) -> Segment {
        Segment {
            baseline: self.baseline.reversed(),
            ctrl: self.ctrl.reversed(),
            flags: self.flags,
        }
    }

    /// Divides this segment into two at the given parametric t value, which will be clamped to
    /// the range 0.0 to 1.0.
    ///
    /// This uses de Casteljau subdivision.
    pub fn split(&self, t: f64) -> (Segment, Segment) {
        let (p0, p1) = (self.baseline.from(), self.ctrl.from());
        let (p2, p3) = (self.ctrl.to(), self.baseline.to());

        let (before, after);
        if t <= 0.0 {
            before = Segment::cubic(p0, p0, p0, p0);
            after = *self;
        } else if t >= 1.0 {
            before = *self;
            after = Segment::cubic(p3, p3, p3, p3);
        } else {
            let (p01, p12, p23) = (p0.lerp(p1, t), p1.lerp(p2, t), p2.lerp(p3, t));
            let (p012, p123) = (p01.lerp(p12, t), p12.lerp(p23, t));
            let p0123 = p012.lerp(p123, t);
            before = Segment::cubic(p0, p01, p012, p0123);
            after = Segment::cubic(p0123, p123, p23, p3);
        }

        (before.with_flags(self.flags & SegmentFlags::FIRST_IN_SUBPATH),
         after.with_flags(self.flags & SegmentFlags::CLOSES_SUBPATH))
    }

    /// Returns the position of the point on this curve at parametric time `t`.
    #[inline]
    pub fn sample(&self, t: f64) -> Vector2D {
        let (p0, p1) = (self.baseline.from(), self.ctrl.from());
        let (p2, p3) = (self.ctrl.to(), self.baseline.to());
        let u = 1.0 - t;
        p0.scale(u * u * u) + p1.scale(3.0 * u * u * t) + p2.scale(3.0 * u * t * t) +
            p3.scale(t * t * t)
    }
}

bitflags! {
    /// Various flags that specify the relation of this segment to other segments in a path.
    pub struct SegmentFlags: u8 {
        /// This segment is the first one after a move, or after a closed subpath.
        const FIRST_IN_SUBPATH = 0x01;
        /// This segment was produced by a closepath command (i.e. it returns back to the
        /// starting point).
        const CLOSES_SUBPATH = 0x02;
    }
}
