// pathcross/intersect/src/options.rs
//
// Copyright © 2020 The Pathcross Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Options that control how intersections are computed.

/// Tolerances and work bounds for the intersection solver.
///
/// The defaults suit diagram-scale coordinates (hundreds to thousands of user units).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IntersectOptions {
    /// Slack for bounding box overlap tests, the size below which subdivided boxes count as
    /// converged, and the coordinate distance under which two results collapse into one.
    pub tolerance: f64,
    /// The maximum distance of a control point from the chord for a piece to count as straight.
    pub flatness: f64,
    /// Slack on the `[0, 1]` parameter range when solving for crossing lines.
    pub parameter_epsilon: f64,
    /// The parameter distance under which two results collapse into one.
    pub parameter_tolerance: f64,
    /// The maximum number of times each curve is bisected.
    pub max_depth: u32,
    /// The maximum number of sub-curve pairs examined for one pair of segments.
    pub max_pairs: usize,
}

impl Default for IntersectOptions {
    #[inline]
    fn default() -> IntersectOptions {
        IntersectOptions {
            tolerance: 1e-3,
            flatness: 1e-3,
            parameter_epsilon: 1e-9,
            parameter_tolerance: 1e-4,
            max_depth: 32,
            max_pairs: 65536,
        }
    }
}

impl IntersectOptions {
    #[inline]
    pub fn tolerance(mut self, tolerance: f64) -> IntersectOptions {
        self.tolerance = tolerance;
        self
    }

    #[inline]
    pub fn flatness(mut self, flatness: f64) -> IntersectOptions {
        self.flatness = flatness;
        self
    }

    #[inline]
    pub fn parameter_epsilon(mut self, epsilon: f64) -> IntersectOptions {
        self.parameter_epsilon = epsilon;
        self
    }

    #[inline]
    pub fn parameter_tolerance(mut self, tolerance: f64) -> IntersectOptions {
        self.parameter_tolerance = tolerance;
        self
    }

    #[inline]
    pub fn max_depth(mut self, max_depth: u32) -> IntersectOptions {
        self.max_depth = max_depth;
        self
    }

    #[inline]
    pub fn max_pairs(mut self, max_pairs: usize) -> IntersectOptions {
        self.max_pairs = max_pairs;
        self
    }
}
