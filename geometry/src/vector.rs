// pathcross/geometry/src/vector.rs
//
// Copyright © 2020 The Pathcross Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! A two-dimensional vector type with double-precision coordinates.

use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

/// 2D points and vectors with 64-bit floating point coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vector2D {
    x: f64,
    y: f64,
}

/// A convenience constructor for `Vector2D`.
#[inline]
pub fn vec2d(x: f64, y: f64) -> Vector2D {
    Vector2D::new(x, y)
}

impl Vector2D {
    #[inline]
    pub fn new(x: f64, y: f64) -> Vector2D {
        Vector2D { x, y }
    }

    #[inline]
    pub fn splat(value: f64) -> Vector2D {
        Vector2D::new(value, value)
    }

    #[inline]
    pub fn zero() -> Vector2D {
        Vector2D::default()
    }

    #[inline]
    pub fn x(self) -> f64 {
        self.x
    }

    #[inline]
    pub fn y(self) -> f64 {
        self.y
    }

    #[inline]
    pub fn min(self, other: Vector2D) -> Vector2D {
        Vector2D::new(f64::min(self.x, other.x), f64::min(self.y, other.y))
    }

    #[inline]
    pub fn max(self, other: Vector2D) -> Vector2D {
        Vector2D::new(f64::max(self.x, other.x), f64::max(self.y, other.y))
    }

    #[inline]
    pub fn abs(self) -> Vector2D {
        Vector2D::new(self.x.abs(), self.y.abs())
    }

    /// The 2D cross product (the z component of the 3D cross product).
    #[inline]
    pub fn det(self, other: Vector2D) -> f64 {
        self.x * other.y - self.y * other.x
    }

    #[inline]
    pub fn dot(self, other: Vector2D) -> f64 {
        self.x * other.x + self.y * other.y
    }

    #[inline]
    pub fn scale(self, factor: f64) -> Vector2D {
        Vector2D::new(self.x * factor, self.y * factor)
    }

    #[inline]
    pub fn scale_xy(self, factors: Vector2D) -> Vector2D {
        Vector2D::new(self.x * factors.x, self.y * factors.y)
    }

    /// Treats this point as a vector and calculates its squared length.
    #[inline]
    pub fn square_length(self) -> f64 {
        self.dot(self)
    }

    /// Treats this point as a vector and calculates its length.
    #[inline]
    pub fn length(self) -> f64 {
        f64::sqrt(self.square_length())
    }

    #[inline]
    pub fn is_zero(self) -> bool {
        self == Vector2D::zero()
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    #[inline]
    pub fn lerp(self, other: Vector2D, t: f64) -> Vector2D {
        self + (other - self).scale(t)
    }

    /// Reflects `self` through `center`.
    #[inline]
    pub fn reflect_through(self, center: Vector2D) -> Vector2D {
        center + (center - self)
    }

    /// Returns true if both coordinates differ by at most `epsilon`.
    #[inline]
    pub fn approx_eq(self, other: Vector2D, epsilon: f64) -> bool {
        (self.x - other.x).abs() <= epsilon && (self.y - other.y).abs() <= epsilon
    }
}

impl Add<Vector2D> for Vector2D {
    type Output = Vector2D;
    #[inline]
    fn add(self, other: Vector2D) -> Vector2D {
        Vector2D::new(self.x + other.x, self.y + other.y)
    }
}

impl AddAssign<Vector2D> for Vector2D {
    #[inline]
    fn add_assign(&mut self, other: Vector2D) {
        *self = *self + other
    }
}

impl Sub<Vector2D> for Vector2D {
    type Output = Vector2D;
    #[inline]
    fn sub(self, other: Vector2D) -> Vector2D {
        Vector2D::new(self.x - other.x, self.y - other.y)
    }
}

impl SubAssign<Vector2D> for Vector2D {
    #[inline]
    fn sub_assign(&mut self, other: Vector2D) {
        *self = *self - other
    }
}

impl Mul<Vector2D> for Vector2D {
    type Output = Vector2D;
    #[inline]
    fn mul(self, other: Vector2D) -> Vector2D {
        self.scale_xy(other)
    }
}

impl Mul<f64> for Vector2D {
    type Output = Vector2D;
    #[inline]
    fn mul(self, factor: f64) -> Vector2D {
        self.scale(factor)
    }
}

impl Neg for Vector2D {
    type Output = Vector2D;
    #[inline]
    fn neg(self) -> Vector2D {
        Vector2D::new(-self.x, -self.y)
    }
}
