// pathcross/content/src/arc.rs
//
// Copyright © 2020 The Pathcross Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Conversion of SVG elliptical arcs to cubic Bézier segments.
//!
//! See the SVG 1.1 implementation notes, sections F.6.5 and F.6.6.

use crate::segment::Segment;
use arrayvec::ArrayVec;
use pathcross_geometry::line_segment::LineSegment2D;
use pathcross_geometry::util;
use pathcross_geometry::vector::{Vector2D, vec2d};
use std::f64::consts::PI;

/// The largest sweep a single cubic piece may cover.
const MAX_PIECE_SWEEP: f64 = PI * 2.0 / 3.0;

/// Sweeps within this many radians of a piece boundary do not produce an extra sliver piece.
const SWEEP_EPSILON: f64 = 1e-9;

/// The cubic pieces of one arc. An endpoint-parameterized arc sweeps less than a full turn, so
/// it never needs more than three 120° pieces.
pub type ArcSegments = ArrayVec<[Segment; 4]>;

/// The direction an arc sweeps in.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ArcDirection {
    /// Clockwise in a y-down coordinate system (SVG sweep flag 1, increasing angles).
    CW,
    /// Counterclockwise in a y-down coordinate system (SVG sweep flag 0).
    CCW,
}

impl ArcDirection {
    #[inline]
    pub fn from_sweep_flag(sweep: bool) -> ArcDirection {
        if sweep { ArcDirection::CW } else { ArcDirection::CCW }
    }
}

/// An elliptical arc in SVG endpoint parameterization.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SvgArc {
    pub from: Vector2D,
    pub to: Vector2D,
    /// The radii. Negative radii are treated as their absolute values.
    pub radii: Vector2D,
    /// The rotation of the ellipse's x axis, in degrees.
    pub x_axis_rotation: f64,
    pub large_arc: bool,
    pub direction: ArcDirection,
}

/// The center parameterization of an arc.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ArcParameterization {
    /// The arc degenerates to a straight line between its endpoints.
    LineTo,
    /// The endpoints coincide: the arc draws nothing.
    Omit,
    /// A proper elliptical arc.
    CenterParameters {
        center: Vector2D,
        /// The radii, after any scaling needed to reach the end point.
        radii: Vector2D,
        /// The start angle in radians.
        theta1: f64,
        /// The signed sweep in radians; positive sweeps increase the angle.
        delta_theta: f64,
    },
}

impl SvgArc {
    /// Converts this arc to center parameterization (SVG F.6.5).
    pub fn center_parameterization(&self) -> ArcParameterization {
        // Checked before the radii so that zero-radius arcs between coincident points still
        // produce a segment.
        if self.from == self.to {
            return ArcParameterization::Omit;
        }

        let (mut rx, mut ry) = (self.radii.x().abs(), self.radii.y().abs());
        if rx * rx < std::f64::EPSILON || ry * ry < std::f64::EPSILON {
            return ArcParameterization::LineTo;
        }

        let phi = self.x_axis_rotation.to_radians();
        let (sin_phi, cos_phi) = phi.sin_cos();

        // Move the origin to the midpoint of the chord, then rotate to the ellipse's axes.
        // Transformed coordinates carry a trailing underscore.
        let half_chord = (self.from - self.to).scale(0.5);
        let x1_ = cos_phi * half_chord.x() + sin_phi * half_chord.y();
        let y1_ = -sin_phi * half_chord.x() + cos_phi * half_chord.y();

        let lambda = (x1_ / rx).powi(2) + (y1_ / ry).powi(2);
        if lambda > 1.0 {
            // Too small to reach the end point: scale up uniformly to exactly one solution.
            rx *= lambda.sqrt();
            ry *= lambda.sqrt();
        }

        let d = (rx * y1_).powi(2) + (ry * x1_).powi(2);
        if d == 0.0 {
            return ArcParameterization::Omit;
        }
        let mut k = f64::max(0.0, (rx * ry).powi(2) / d - 1.0).sqrt();
        if self.large_arc == (self.direction == ArcDirection::CW) {
            k = -k;
        }
        let cx_ = k * rx * y1_ / ry;
        let cy_ = -k * ry * x1_ / rx;

        let mid = self.from.lerp(self.to, 0.5);
        let center = vec2d(cos_phi * cx_ - sin_phi * cy_ + mid.x(),
                           sin_phi * cx_ + cos_phi * cy_ + mid.y());

        let u = vec2d((x1_ - cx_) / rx, (y1_ - cy_) / ry);
        let v = vec2d((-x1_ - cx_) / rx, (-y1_ - cy_) / ry);
        let theta1 = vector_angle(vec2d(1.0, 0.0), u);
        let mut delta_theta = vector_angle(u, v);
        match self.direction {
            ArcDirection::CCW if delta_theta > 0.0 => delta_theta -= 2.0 * PI,
            ArcDirection::CW if delta_theta < 0.0 => delta_theta += 2.0 * PI,
            _ => {}
        }

        ArcParameterization::CenterParameters {
            center,
            radii: vec2d(rx, ry),
            theta1,
            delta_theta,
        }
    }

    /// Approximates this arc with cubic segments.
    ///
    /// The sweep is cut greedily into 120° pieces, with the final piece covering whatever
    /// remains. The first piece starts exactly at `from` and the last ends exactly at `to`.
    /// Degenerate arcs yield a single straight segment: a line for zero radii, or a zero-length
    /// segment when the endpoints coincide.
    pub fn to_cubics(&self) -> ArcSegments {
        let mut segments = ArcSegments::new();
        let (center, radii, theta1, delta_theta) = match self.center_parameterization() {
            ArcParameterization::LineTo => {
                segments.push(Segment::line(LineSegment2D::new(self.from, self.to)));
                return segments;
            }
            ArcParameterization::Omit => {
                segments.push(Segment::line(LineSegment2D::new(self.from, self.to)));
                return segments;
            }
            ArcParameterization::CenterParameters { center, radii, theta1, delta_theta } => {
                (center, radii, theta1, delta_theta)
            }
        };

        let (sin_phi, cos_phi) = self.x_axis_rotation.to_radians().sin_cos();
        let to_user_space = |unit: Vector2D| {
            let scaled = unit.scale_xy(radii);
            vec2d(cos_phi * scaled.x() - sin_phi * scaled.y(),
                  sin_phi * scaled.x() + cos_phi * scaled.y()) + center
        };

        let sign = delta_theta.signum();
        let mut remaining = delta_theta.abs();
        let mut start_angle = theta1;
        while remaining > 0.0 && !segments.is_full() {
            let sweep = if remaining > MAX_PIECE_SWEEP + SWEEP_EPSILON {
                MAX_PIECE_SWEEP
            } else {
                remaining
            };
            remaining -= sweep;
            let end_angle = start_angle + sign * sweep;
            let last = remaining <= 0.0 || segments.len() + 1 == segments.capacity();

            let k = 4.0 / 3.0 * f64::tan((end_angle - start_angle) / 4.0);
            let (sin_start, cos_start) = start_angle.sin_cos();
            let (sin_end, cos_end) = end_angle.sin_cos();
            let unit_from = vec2d(cos_start, sin_start);
            let unit_to = vec2d(cos_end, sin_end);
            let unit_ctrl0 = unit_from + vec2d(-sin_start, cos_start).scale(k);
            let unit_ctrl1 = unit_to - vec2d(-sin_end, cos_end).scale(k);

            let mut from = to_user_space(unit_from);
            let mut ctrl0 = to_user_space(unit_ctrl0);
            let mut ctrl1 = to_user_space(unit_ctrl1);
            let mut to = to_user_space(unit_to);

            // Snap the outer ends to the exact endpoints, carrying the control arms along.
            if segments.is_empty() {
                ctrl0 += self.from - from;
                from = self.from;
            } else {
                from = segments[segments.len() - 1].to();
            }
            if last {
                ctrl1 += self.to - to;
                to = self.to;
                remaining = 0.0;
            }

            segments.push(Segment::cubic(from, ctrl0, ctrl1, to));
            start_angle = end_angle;
        }

        debug!("arc {:?} -> {:?} sweeping {} rad: {} cubic pieces",
               self.from,
               self.to,
               delta_theta,
               segments.len());
        segments
    }
}

/// The signed angle from `u` to `v`, in `(-π, π]`.
fn vector_angle(u: Vector2D, v: Vector2D) -> f64 {
    let cos = util::clamp(u.dot(v) / (u.length() * v.length()), -1.0, 1.0);
    let angle = cos.acos();
    if u.det(v) < 0.0 { -angle } else { angle }
}

#[cfg(test)]
mod test {
    use super::{ArcDirection, ArcParameterization, SvgArc};
    use pathcross_geometry::vector::vec2d;
    use std::f64::consts::PI;

    fn arc(from: (f64, f64), to: (f64, f64), r: f64, large_arc: bool, sweep: bool) -> SvgArc {
        SvgArc {
            from: vec2d(from.0, from.1),
            to: vec2d(to.0, to.1),
            radii: vec2d(r, r),
            x_axis_rotation: 0.0,
            large_arc,
            direction: ArcDirection::from_sweep_flag(sweep),
        }
    }

    #[test]
    fn test_half_circle_center() {
        match arc((150.0, 132.0), (150.0, 168.0), 18.0, true, true).center_parameterization() {
            ArcParameterization::CenterParameters { center, radii, theta1, delta_theta } => {
                assert!(center.approx_eq(vec2d(150.0, 150.0), 1e-9));
                assert!(radii.approx_eq(vec2d(18.0, 18.0), 1e-9));
                assert!((theta1 + PI / 2.0).abs() < 1e-9);
                assert!((delta_theta - PI).abs() < 1e-9);
            }
            other => panic!("unexpected parameterization: {:?}", other),
        }
    }

    #[test]
    fn test_half_circle_splits_120_then_60() {
        let pieces = arc((150.0, 132.0), (150.0, 168.0), 18.0, true, true).to_cubics();
        assert_eq!(pieces.len(), 2);
        assert_eq!(pieces[0].from(), vec2d(150.0, 132.0));
        assert_eq!(pieces[1].to(), vec2d(150.0, 168.0));
        assert_eq!(pieces[0].to(), pieces[1].from());
        // The first piece ends 120° after the top of the circle, i.e. at 30°.
        let boundary = vec2d(150.0 + 18.0 * (PI / 6.0).cos(), 150.0 + 18.0 * (PI / 6.0).sin());
        assert!(pieces[0].to().approx_eq(boundary, 1e-9));
        // The right-most point of the circle lies on the first piece.
        assert!((0..=1000).any(|step| {
            pieces[0].sample(step as f64 / 1000.0).approx_eq(vec2d(168.0, 150.0), 0.05)
        }));
    }

    #[test]
    fn test_pieces_follow_circle() {
        let pieces = arc((100.0, 0.0), (0.0, 100.0), 100.0, true, false).to_cubics();
        assert_eq!(pieces.len(), 3);
        for piece in &pieces {
            for step in 0..=10 {
                let distance = piece.sample(step as f64 / 10.0).length();
                assert!((distance - 100.0).abs() < 0.2, "distance {} off circle", distance);
            }
        }
    }

    #[test]
    fn test_small_radius_scales_up() {
        // A radius of 1 cannot span 20 units, so it becomes a half circle of radius 10.
        let pieces = arc((0.0, 0.0), (20.0, 0.0), 1.0, false, true).to_cubics();
        assert_eq!(pieces.len(), 2);
        assert_eq!(pieces[1].to(), vec2d(20.0, 0.0));
        let lowest = (0..=100).map(|step| pieces[0].sample(step as f64 / 100.0).y())
                              .fold(0.0, f64::min);
        assert!((lowest + 10.0).abs() < 0.05);
    }

    #[test]
    fn test_degenerate_arcs() {
        let zero_radius = arc((0.0, 0.0), (10.0, 10.0), 0.0, false, true).to_cubics();
        assert_eq!(zero_radius.len(), 1);
        assert!(zero_radius[0].is_straight(1e-9));
        assert_eq!(zero_radius[0].to(), vec2d(10.0, 10.0));

        let coincident = arc((5.0, 5.0), (5.0, 5.0), 10.0, true, true).to_cubics();
        assert_eq!(coincident.len(), 1);
        assert!(coincident[0].is_point(1e-9));
    }
}
