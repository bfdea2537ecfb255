// pathcross/intersect/tests/reference.rs
//
// Copyright © 2020 The Pathcross Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use pathcross_content::command::PathCommand;
use pathcross_intersect::{IntersectOptions, count_path_intersections, find_path_intersections};

const ROUNDED_RECT: &str = "M100,100l80,0a10,10,0,0,1,10,10l0,60a10,10,0,0,1,-10,10l-80,0\
                            a10,10,0,0,1,-10,-10l0,-60a10,10,0,0,1,10,-10z";
const CIRCLE: &str = "M150,150m0,-18a18,18,0,1,1,0,36a18,18,0,1,1,0,-36z";
const DIAMOND: &str = "M413,172l25,25l-25,25l-25,-25z";

/// Rounded coordinates and segment numbers of every intersection, checking along the way that
/// counting agrees and that swapping the paths swaps the results.
fn check(p0: &str, p1: &str) -> Vec<(i64, i64, usize, usize)> {
    let options = IntersectOptions::default();
    let hits = find_path_intersections(p0, p1, &options).unwrap();
    assert_eq!(count_path_intersections(p0, p1, &options).unwrap(), hits.len());
    for hit in &hits {
        assert!(hit.t1 >= 0.0 && hit.t1 <= 1.0 && hit.t2 >= 0.0 && hit.t2 <= 1.0);
    }

    let summary: Vec<_> = hits.iter().map(|hit| {
        (hit.x.round() as i64, hit.y.round() as i64, hit.segment1, hit.segment2)
    }).collect();

    let mut forward = summary.clone();
    let mut backward: Vec<_> = find_path_intersections(p1, p0, &options)
        .unwrap()
        .iter()
        .map(|hit| (hit.x.round() as i64, hit.y.round() as i64, hit.segment2, hit.segment1))
        .collect();
    forward.sort();
    backward.sort();
    assert_eq!(forward, backward, "swapping {} and {} changed the results", p0, p1);

    summary
}

#[test]
fn test_crossing_lines() {
    let options = IntersectOptions::default();
    let commands = vec![PathCommand::new('M', vec![0.0, 0.0]),
                        PathCommand::new('L', vec![100.0, 100.0])];
    let hits = find_path_intersections(&commands, "M0,100L100,0", &options).unwrap();
    assert_eq!(hits.len(), 1);

    let hit = &hits[0];
    assert_eq!((hit.x, hit.y), (50.0, 50.0));
    assert_eq!((hit.segment1, hit.segment2), (1, 1));
    assert_eq!((hit.t1, hit.t2), (0.5, 0.5));
    assert_eq!(hit.bez1, [0.0, 0.0, 0.0, 0.0, 100.0, 100.0, 100.0, 100.0]);
    assert_eq!(hit.bez2, [0.0, 100.0, 0.0, 100.0, 100.0, 0.0, 100.0, 0.0]);
}

#[test]
fn test_normalized_paths_are_accepted() {
    let options = IntersectOptions::default();
    let rect = pathcross_svg::parse_str(ROUNDED_RECT).unwrap();
    let from_text = find_path_intersections("M80,140L100,140", ROUNDED_RECT, &options).unwrap();
    let from_path = find_path_intersections("M80,140L100,140", &rect, &options).unwrap();
    assert_eq!(from_text, from_path);
}

#[test]
fn test_line_through_rounded_rect() {
    assert_eq!(check("M80,140L100,140", ROUNDED_RECT), vec![(90, 140, 1, 7)]);
}

#[test]
fn test_rounded_rect_corners() {
    assert_eq!(check("M80,105L100,105", ROUNDED_RECT), vec![(91, 105, 1, 8)]);
    assert_eq!(check("M70,50L100,120", ROUNDED_RECT), vec![(93, 103, 1, 8)]);
    assert_eq!(check("M123,50L243,150", ROUNDED_RECT), vec![(184, 101, 1, 2), (188, 104, 1, 2)]);
}

#[test]
fn test_circle() {
    assert_eq!(check(CIRCLE, "M100,100L150,150"), vec![(137, 137, 5, 1)]);
    assert_eq!(check(CIRCLE, "M150,100L150,150"), vec![(150, 132, 2, 1), (150, 132, 5, 1)]);
    assert_eq!(check(CIRCLE, "M150,150L150,200"), vec![(150, 168, 3, 1), (150, 168, 4, 1)]);
    assert_eq!(check(CIRCLE, "M100,150L150,150"), vec![(132, 150, 4, 1)]);
    assert_eq!(check(CIRCLE, "M150,150L200,150"), vec![(168, 150, 2, 1)]);
}

#[test]
fn test_diamond_vertices() {
    assert_eq!(check(DIAMOND, "M413,197L413,274L555,274"),
               vec![(413, 222, 2, 1), (413, 222, 3, 1)]);
    assert_eq!(check(DIAMOND, "M413,97L413,274"),
               vec![(413, 172, 1, 1), (413, 222, 2, 1), (413, 222, 3, 1), (413, 172, 4, 1)]);
}

#[test]
fn test_line_ending_on_line() {
    let rect = "M170,150l80,0a10,10,0,0,1,10,10l0,60a10,10,0,0,1,-10,10l-80,0a10,10,0,0,1,-10,-10\
                l0,-60a10,10,0,0,1,10,-10z";
    assert_eq!(check(rect, "M140,190L160,190"), vec![(160, 190, 7, 1)]);
}

#[test]
fn test_close_proximity() {
    assert_eq!(check("M10,10 h8 v-5 h-5 v3", "M15,14 v-7 h6"),
               vec![(15, 10, 1, 1), (18, 7, 2, 2)]);
}

#[test]
fn test_shared_origin() {
    assert_eq!(check("M0,0 h8 v-5 h-5 v3", "M0,0 v-7 h6"), vec![(0, 0, 1, 1)]);
}

#[test]
fn test_no_intervals() {
    // Collinear overlap, end-to-end contact, and parallel lines.
    assert!(check("M0,0L10,0", "M5,0L15,0").is_empty());
    assert!(check("M0,0L10,0", "M10,0L20,0").is_empty());
    assert!(check("M0,0L10,0", "M0,5L10,5").is_empty());
    // Against itself, a path only meets where its own segments join.
    assert_eq!(check("M0,0 h10 v10", "M0,0 h10 v10"), vec![(10, 0, 1, 2), (10, 0, 2, 1)]);
}

#[test]
fn test_overlapping_curves() {
    // The second path retraces the second half of the first one.
    assert!(check("M0,0 Q50,50 100,0", "M50,25 Q75,25 100,0").is_empty());
    // The second path retraces the first half of the first one.
    assert!(check("M0,0 C0,50 100,50 100,0", "M0,0 C0,25 25,37.5 50,37.5").is_empty());
}

#[test]
fn test_curves() {
    let cubic = "M10 80 C 40 10, 65 10, 95 80 S 150 150, 180 80";
    let quadratic = "M10 80 Q 95 10 180 80";
    assert_eq!(check(cubic, quadratic), vec![(10, 80, 1, 1), (78, 46, 1, 1), (180, 80, 2, 1)]);
}

#[test]
fn test_parse_errors_propagate() {
    let options = IntersectOptions::default();
    assert!(find_path_intersections("M0,0 L", "M0,0L1,1", &options).is_err());
    assert!(count_path_intersections("M0,0L1,1", "L1,1", &options).is_err());
}
