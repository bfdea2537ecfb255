// pathcross/geometry/src/line_segment.rs
//
// Copyright © 2020 The Pathcross Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Line segment types.

use crate::rect::RectD;
use crate::util::EPSILON;
use crate::vector::Vector2D;
use std::ops::{Add, Sub};

/// A straight line segment between two points.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct LineSegment2D {
    from: Vector2D,
    to: Vector2D,
}

impl LineSegment2D {
    #[inline]
    pub fn new(from: Vector2D, to: Vector2D) -> LineSegment2D {
        LineSegment2D { from, to }
    }

    #[inline]
    pub fn from(self) -> Vector2D {
        self.from
    }

    #[inline]
    pub fn to(self) -> Vector2D {
        self.to
    }

    #[allow(clippy::wrong_self_convention)]
    #[inline]
    pub fn from_x(self) -> f64 {
        self.from.x()
    }

    #[allow(clippy::wrong_self_convention)]
    #[inline]
    pub fn from_y(self) -> f64 {
        self.from.y()
    }

    #[inline]
    pub fn to_x(self) -> f64 {
        self.to.x()
    }

    #[inline]
    pub fn to_y(self) -> f64 {
        self.to.y()
    }

    #[inline]
    pub fn vector(self) -> Vector2D {
        self.to - self.from
    }

    #[inline]
    pub fn square_length(self) -> f64 {
        self.vector().square_length()
    }

    #[inline]
    pub fn length(self) -> f64 {
        self.vector().length()
    }

    #[inline]
    pub fn reversed(self) -> LineSegment2D {
        LineSegment2D::new(self.to, self.from)
    }

    #[inline]
    pub fn sample(self, t: f64) -> Vector2D {
        self.from + self.vector().scale(t)
    }

    #[inline]
    pub fn midpoint(self) -> Vector2D {
        self.sample(0.5)
    }

    #[inline]
    pub fn split(self, t: f64) -> (LineSegment2D, LineSegment2D) {
        debug_assert!(t >= 0.0 && t <= 1.0);
        let mid = self.sample(t);
        (LineSegment2D::new(self.from, mid), LineSegment2D::new(mid, self.to))
    }

    #[inline]
    pub fn min_x(self) -> f64 {
        f64::min(self.from_x(), self.to_x())
    }

    #[inline]
    pub fn min_y(self) -> f64 {
        f64::min(self.from_y(), self.to_y())
    }

    #[inline]
    pub fn max_x(self) -> f64 {
        f64::max(self.from_x(), self.to_x())
    }

    #[inline]
    pub fn max_y(self) -> f64 {
        f64::max(self.from_y(), self.to_y())
    }

    #[inline]
    pub fn bounds(self) -> RectD {
        RectD::from_points(self.from, self.to)
    }

    #[inline]
    pub fn solve_t_for_x(self, x: f64) -> f64 {
        (x - self.from_x()) / (self.to_x() - self.from_x())
    }

    /// Signed distance of `point` along this segment's direction, measured from `from`.
    #[inline]
    pub fn distance_along(self, point: Vector2D) -> f64 {
        (point - self.from).dot(self.vector()) / self.length()
    }

    /// Unsigned distance of `point` from the infinite line through this segment.
    #[inline]
    pub fn distance_across(self, point: Vector2D) -> f64 {
        f64::abs((point - self.from).det(self.vector())) / self.length()
    }

    /// Solves for the parameters at which the infinite lines through `self` and `other` cross.
    ///
    /// Returns `(t, u)` such that `self.sample(t) == other.sample(u)`. Returns `None` if either
    /// segment has zero length or the lines are parallel (which includes collinear segments).
    pub fn intersection_t(self, other: LineSegment2D) -> Option<(f64, f64)> {
        let (d0, d1) = (self.vector(), other.vector());
        let (d0_length_sq, d1_length_sq) = (d0.square_length(), d1.square_length());
        if d0_length_sq == 0.0 || d1_length_sq == 0.0 {
            return None;
        }

        // |d0 × d1| = |d0| |d1| sin θ, so this tests the angle between the lines.
        let denom = d0.det(d1);
        if denom * denom <= EPSILON * EPSILON * d0_length_sq * d1_length_sq {
            return None;
        }

        let w = other.from - self.from;
        Some((w.det(d1) / denom, w.det(d0) / denom))
    }
}

impl Add<Vector2D> for LineSegment2D {
    type Output = LineSegment2D;
    #[inline]
    fn add(self, point: Vector2D) -> LineSegment2D {
        LineSegment2D::new(self.from + point, self.to + point)
    }
}

impl Sub<Vector2D> for LineSegment2D {
    type Output = LineSegment2D;
    #[inline]
    fn sub(self, point: Vector2D) -> LineSegment2D {
        LineSegment2D::new(self.from - point, self.to - point)
    }
}

#[cfg(test)]
mod test {
    use super::LineSegment2D;
    use crate::vector::vec2d;

    fn line(x0: f64, y0: f64, x1: f64, y1: f64) -> LineSegment2D {
        LineSegment2D::new(vec2d(x0, y0), vec2d(x1, y1))
    }

    #[test]
    fn test_crossing_diagonals() {
        let (t, u) = line(0.0, 0.0, 100.0, 100.0)
            .intersection_t(line(0.0, 100.0, 100.0, 0.0))
            .unwrap();
        assert_eq!(t, 0.5);
        assert_eq!(u, 0.5);
    }

    #[test]
    fn test_parameters_outside_segments() {
        // The infinite lines cross at (10, 0), beyond the end of the first segment.
        let (t, u) = line(0.0, 0.0, 5.0, 0.0)
            .intersection_t(line(10.0, 5.0, 10.0, -5.0))
            .unwrap();
        assert_eq!(t, 2.0);
        assert_eq!(u, 0.5);
    }

    #[test]
    fn test_parallel_and_collinear_have_no_solution() {
        assert_eq!(line(0.0, 0.0, 10.0, 0.0).intersection_t(line(0.0, 5.0, 10.0, 5.0)), None);
        assert_eq!(line(0.0, 0.0, 10.0, 0.0).intersection_t(line(5.0, 0.0, 15.0, 0.0)), None);
        assert_eq!(line(0.0, 0.0, 10.0, 0.0).intersection_t(line(10.0, 0.0, 20.0, 0.0)), None);
    }

    #[test]
    fn test_zero_length_has_no_solution() {
        assert_eq!(line(3.0, 3.0, 3.0, 3.0).intersection_t(line(0.0, 0.0, 10.0, 10.0)), None);
    }

    #[test]
    fn test_distances() {
        let segment = line(0.0, 0.0, 10.0, 0.0);
        assert_eq!(segment.distance_along(vec2d(4.0, 3.0)), 4.0);
        assert_eq!(segment.distance_across(vec2d(4.0, -3.0)), 3.0);
        assert_eq!(segment.solve_t_for_x(2.5), 0.25);
    }
}
