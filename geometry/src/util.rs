// pathcross/geometry/src/util.rs
//
// Copyright © 2020 The Pathcross Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Various utilities.

/// Relative tolerance for parallelism tests.
pub const EPSILON: f64 = 1e-12;

/// Linear interpolation.
#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Clamping.
#[inline]
pub fn clamp(x: f64, min_val: f64, max_val: f64) -> f64 {
    f64::min(max_val, f64::max(min_val, x))
}
