// pathcross/geometry/src/rect.rs
//
// Copyright © 2020 The Pathcross Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! 2D axis-aligned rectangles.

use crate::vector::Vector2D;

/// An axis-aligned rectangle given by its minimum and maximum corners.
///
/// All comparisons are inclusive: a rectangle contains the points on its edges, and two
/// rectangles that share only an edge or a corner intersect.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct RectD {
    origin: Vector2D,
    lower_right: Vector2D,
}

/// The bounding box of a curve segment.
pub type BBox = RectD;

impl RectD {
    #[inline]
    pub fn new(origin: Vector2D, size: Vector2D) -> RectD {
        RectD { origin, lower_right: origin + size }
    }

    /// Creates a rectangle from its two corners. The corners may be supplied in any order.
    #[inline]
    pub fn from_points(a: Vector2D, b: Vector2D) -> RectD {
        RectD { origin: a.min(b), lower_right: a.max(b) }
    }

    /// A zero-sized rectangle at `point`.
    #[inline]
    pub fn from_point(point: Vector2D) -> RectD {
        RectD { origin: point, lower_right: point }
    }

    #[inline]
    pub fn origin(self) -> Vector2D {
        self.origin
    }

    #[inline]
    pub fn lower_right(self) -> Vector2D {
        self.lower_right
    }

    #[inline]
    pub fn size(self) -> Vector2D {
        self.lower_right - self.origin
    }

    #[inline]
    pub fn min_x(self) -> f64 {
        self.origin.x()
    }

    #[inline]
    pub fn min_y(self) -> f64 {
        self.origin.y()
    }

    #[inline]
    pub fn max_x(self) -> f64 {
        self.lower_right.x()
    }

    #[inline]
    pub fn max_y(self) -> f64 {
        self.lower_right.y()
    }

    #[inline]
    pub fn width(self) -> f64 {
        self.max_x() - self.min_x()
    }

    #[inline]
    pub fn height(self) -> f64 {
        self.max_y() - self.min_y()
    }

    /// The larger of the width and the height.
    #[inline]
    pub fn max_extent(self) -> f64 {
        f64::max(self.width(), self.height())
    }

    #[inline]
    pub fn center(self) -> Vector2D {
        self.origin.lerp(self.lower_right, 0.5)
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.origin.is_finite() && self.lower_right.is_finite()
    }

    #[inline]
    pub fn contains_point(self, point: Vector2D) -> bool {
        self.min_x() <= point.x() && point.x() <= self.max_x() &&
            self.min_y() <= point.y() && point.y() <= self.max_y()
    }

    #[inline]
    pub fn contains_rect(self, other: RectD) -> bool {
        self.contains_point(other.origin) && self.contains_point(other.lower_right)
    }

    #[inline]
    pub fn union_rect(self, other: RectD) -> RectD {
        RectD {
            origin: self.origin.min(other.origin),
            lower_right: self.lower_right.max(other.lower_right),
        }
    }

    #[inline]
    pub fn intersects(self, other: RectD) -> bool {
        // self.origin <= other.lower_right && other.origin <= self.lower_right
        self.min_x() <= other.max_x() && other.min_x() <= self.max_x() &&
            self.min_y() <= other.max_y() && other.min_y() <= self.max_y()
    }

    /// Like `intersects`, but treats rectangles closer than `tolerance` as touching.
    #[inline]
    pub fn intersects_within(self, other: RectD, tolerance: f64) -> bool {
        self.dilate(tolerance).intersects(other)
    }

    #[inline]
    pub fn intersection(self, other: RectD) -> Option<RectD> {
        if !self.intersects(other) {
            None
        } else {
            Some(RectD {
                origin: self.origin.max(other.origin),
                lower_right: self.lower_right.min(other.lower_right),
            })
        }
    }

    #[inline]
    pub fn dilate(self, amount: f64) -> RectD {
        let amount = Vector2D::splat(amount);
        RectD { origin: self.origin - amount, lower_right: self.lower_right + amount }
    }
}
