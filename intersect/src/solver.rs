// pathcross/intersect/src/solver.rs
//
// Copyright © 2020 The Pathcross Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Finds the crossing points of two cubic segments.
//!
//! Straight segments are solved directly as a 2x2 linear system. Curves are bisected, discarding
//! sub-curve pairs whose bounding boxes do not overlap, until the surviving pieces are straight
//! enough to solve as lines or small enough to count as converged.

use crate::options::IntersectOptions;
use pathcross_content::segment::Segment;
use pathcross_geometry::line_segment::LineSegment2D;
use pathcross_geometry::rect::RectD;
use pathcross_geometry::util;
use pathcross_geometry::vector::Vector2D;
use smallvec::SmallVec;
use std::cmp::Ordering;

/// One crossing point of two segments.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SegmentIntersection {
    pub point: Vector2D,
    /// The parameter of the crossing on the first segment.
    pub t1: f64,
    /// The parameter of the crossing on the second segment.
    pub t2: f64,
}

type Hits = SmallVec<[SegmentIntersection; 4]>;

const PARALLEL_SLACK: f64 = 8.0;

/// Returns the crossing points of `a` and `b`, ordered by increasing `t1`, then `t2`.
///
/// Overlapping collinear segments, and curves sharing a stretch, report nothing for the shared
/// part: only discrete crossing points are found.
pub fn intersect_segments(a: &Segment, b: &Segment, options: &IntersectOptions)
                          -> Vec<SegmentIntersection> {
    solve(a, b, options).into_vec()
}

/// Returns the number of results `intersect_segments` would report, without collecting them.
pub fn count_segment_intersections(a: &Segment, b: &Segment, options: &IntersectOptions)
                                   -> usize {
    solve(a, b, options).len()
}

fn solve(a: &Segment, b: &Segment, options: &IntersectOptions) -> Hits {
    let mut hits = Hits::new();
    if a.is_point(options.tolerance) || b.is_point(options.tolerance) {
        return hits;
    }
    if !a.bounds().intersects_within(b.bounds(), options.tolerance) {
        return hits;
    }
    // Identical curves overlap everywhere, and there is no discrete point to report.
    if a.to_coords() == b.to_coords() || a.to_coords() == b.reversed().to_coords() {
        return hits;
    }

    let (piece_a, piece_b) = (Piece::root(a, options), Piece::root(b, options));
    if piece_a.straight && piece_b.straight {
        if let Some(hit) = solve_chords(&piece_a, &piece_b, options) {
            hits.push(hit);
        }
        return hits;
    }

    subdivide(piece_a, piece_b, options, &mut hits);
    dedup(&mut hits, options);
    hits
}

/// A sub-curve of one of the input segments, covering the parameters `t_min..t_max`.
#[derive(Clone, Copy, Debug)]
struct Piece {
    segment: Segment,
    bounds: RectD,
    t_min: f64,
    t_max: f64,
    depth: u32,
    straight: bool,
}

impl Piece {
    fn root(segment: &Segment, options: &IntersectOptions) -> Piece {
        Piece::new(*segment, 0.0, 1.0, 0, options)
    }

    fn new(segment: Segment, t_min: f64, t_max: f64, depth: u32, options: &IntersectOptions)
           -> Piece {
        Piece {
            segment,
            bounds: segment.bounds(),
            t_min,
            t_max,
            depth,
            straight: segment.is_straight(options.flatness),
        }
    }

    fn can_split(&self, options: &IntersectOptions) -> bool {
        !self.straight && self.depth < options.max_depth
    }

    fn split(&self, options: &IntersectOptions) -> (Piece, Piece) {
        let (before, after) = self.segment.split(0.5);
        let t_mid = 0.5 * (self.t_min + self.t_max);
        let depth = self.depth + 1;
        (Piece::new(before, self.t_min, t_mid, depth, options),
         Piece::new(after, t_mid, self.t_max, depth, options))
    }

    #[inline]
    fn t_mid(&self) -> f64 {
        0.5 * (self.t_min + self.t_max)
    }

    #[inline]
    fn is_converged(&self, options: &IntersectOptions) -> bool {
        self.bounds.max_extent() <= options.tolerance
    }
}

fn subdivide(a: Piece, b: Piece, options: &IntersectOptions, hits: &mut Hits) {
    let mut stack: SmallVec<[(Piece, Piece); 32]> = SmallVec::new();
    stack.push((a, b));

    let mut visited = 0;
    while let Some((a, b)) = stack.pop() {
        visited += 1;
        if visited > options.max_pairs {
            warn!("intersection search gave up after {} sub-curve pairs ({} pending)",
                  options.max_pairs,
                  stack.len() + 1);
            break;
        }

        if !a.bounds.intersects_within(b.bounds, options.tolerance) {
            continue;
        }

        if a.straight && b.straight {
            // Chords lying along each other are an overlap, not a crossing.
            if !chords_overlap(a.segment.chord(), b.segment.chord(), options.flatness) {
                if let Some(hit) = solve_chords(&a, &b, options) {
                    hits.push(hit);
                }
            }
            continue;
        }

        if a.is_converged(options) && b.is_converged(options) {
            hits.push(midpoint_hit(&a, &b));
            continue;
        }

        match (a.can_split(options), b.can_split(options)) {
            (true, true) => {
                let (a0, a1) = a.split(options);
                let (b0, b1) = b.split(options);
                stack.push((a1, b1));
                stack.push((a1, b0));
                stack.push((a0, b1));
                stack.push((a0, b0));
            }
            (true, false) => {
                let (a0, a1) = a.split(options);
                stack.push((a1, b));
                stack.push((a0, b));
            }
            (false, true) => {
                let (b0, b1) = b.split(options);
                stack.push((a, b1));
                stack.push((a, b0));
            }
            (false, false) => {
                trace!("depth bound reached at t1={} t2={}", a.t_mid(), b.t_mid());
                hits.push(midpoint_hit(&a, &b));
            }
        }
    }
}

/// Solves the crossing of the chords of two straight pieces, mapping the chord parameters back
/// into the pieces' parameter ranges.
fn solve_chords(a: &Piece, b: &Piece, options: &IntersectOptions) -> Option<SegmentIntersection> {
    let (chord_a, chord_b) = (a.segment.chord(), b.segment.chord());
    let (s, u) = chord_a.intersection_t(chord_b)?;
    let (min, max) = (-options.parameter_epsilon, 1.0 + options.parameter_epsilon);
    if s < min || s > max || u < min || u > max {
        return None;
    }

    let (s, u) = (util::clamp(s, 0.0, 1.0), util::clamp(u, 0.0, 1.0));
    Some(SegmentIntersection {
        point: chord_a.sample(s),
        t1: util::lerp(a.t_min, a.t_max, s),
        t2: util::lerp(b.t_min, b.t_max, u),
    })
}

/// Returns true if two chords lie along each other: they are nearly parallel, and every endpoint
/// of one that projects onto the other lies within `2 * flatness` of its line.
///
/// Straight pieces taken from the same stretch of a curve bend by at most `flatness`, so their
/// chords may diverge by an angle that grows as the pieces get shorter. The parallel slack is
/// scaled accordingly.
fn chords_overlap(a: LineSegment2D, b: LineSegment2D, flatness: f64) -> bool {
    let (length_a, length_b) = (a.length(), b.length());
    if length_a == 0.0 || length_b == 0.0 {
        return false;
    }
    let slack = PARALLEL_SLACK * flatness * (length_a + length_b);
    if a.vector().det(b.vector()).abs() > slack {
        return false;
    }

    let lies_along = |line: LineSegment2D, length: f64, point: Vector2D| {
        let along = line.distance_along(point);
        along < 0.0 || along > length || line.distance_across(point) <= 2.0 * flatness
    };
    lies_along(a, length_a, b.from()) && lies_along(a, length_a, b.to()) &&
        lies_along(b, length_b, a.from()) && lies_along(b, length_b, a.to())
}

fn midpoint_hit(a: &Piece, b: &Piece) -> SegmentIntersection {
    SegmentIntersection {
        point: a.segment.sample(0.5).lerp(b.segment.sample(0.5), 0.5),
        t1: a.t_mid(),
        t2: b.t_mid(),
    }
}

/// Sorts by `(t1, t2)` and collapses results that are close in both position and parameters.
/// The earliest result of each cluster survives.
fn dedup(hits: &mut Hits, options: &IntersectOptions) {
    hits.sort_by(|a, b| {
        a.t1.partial_cmp(&b.t1)
            .unwrap_or(Ordering::Equal)
            .then(a.t2.partial_cmp(&b.t2).unwrap_or(Ordering::Equal))
    });

    let mut kept = Hits::new();
    for hit in hits.drain(..) {
        let duplicate = kept.iter().any(|other| {
            hit.point.approx_eq(other.point, options.tolerance) &&
                (hit.t1 - other.t1).abs() <= options.parameter_tolerance &&
                (hit.t2 - other.t2).abs() <= options.parameter_tolerance
        });
        if !duplicate {
            kept.push(hit);
        }
    }
    *hits = kept;
}
