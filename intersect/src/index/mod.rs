// pathcross/intersect/src/index/mod.rs
//
// Copyright © 2020 The Pathcross Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Broad-phase spatial indexes over the bounding boxes of path segments.
//!
//! An index only proposes candidate pairs. It may propose pairs that do not intersect, but it
//! must never miss a pair whose bounding boxes overlap.

use hashbrown::HashMap;
use pathcross_content::segment::Segment;
use pathcross_geometry::rect::BBox;
use std::fmt::{self, Display, Formatter};

pub use self::grid::GridIndex;
pub use self::scan::ScanIndex;

mod grid;
mod scan;

/// Identifies a path registered with an `IndexSession`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct PathId(u64);

impl PathId {
    #[inline]
    pub(crate) fn new(value: u64) -> PathId {
        PathId(value)
    }

    #[inline]
    pub fn value(self) -> u64 {
        self.0
    }
}

impl Display for PathId {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

/// One registered segment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IndexEntry {
    pub path_id: PathId,
    /// The position of the segment in its normalized path.
    pub curve_index: usize,
    pub curve: Segment,
    pub bbox: BBox,
}

impl IndexEntry {
    #[inline]
    pub fn new(path_id: PathId, curve_index: usize, curve: Segment) -> IndexEntry {
        IndexEntry { path_id, curve_index, curve, bbox: curve.bounds() }
    }

    #[inline]
    pub(crate) fn key(&self) -> EntryKey {
        (self.path_id, self.curve_index)
    }
}

/// Two segments from different paths whose bounding boxes overlap.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CandidatePair {
    /// The entry whose path comes first in the query.
    pub first: IndexEntry,
    pub second: IndexEntry,
}

/// The capabilities an index backing must provide.
pub trait SpatialIndex {
    type Error;

    /// Registers one segment under its path.
    fn add(&mut self, entry: IndexEntry) -> Result<(), Self::Error>;

    /// Evicts every segment registered under `path_id`. Unknown paths are ignored.
    fn remove(&mut self, path_id: PathId) -> Result<(), Self::Error>;

    /// Returns every pair of segments from different paths among `path_ids` whose bounding
    /// boxes overlap, including boxes that only touch.
    ///
    /// Repeated ids are ignored. Each pair is oriented so that `first` belongs to the path that
    /// appears earlier in `path_ids`. Pairs are ordered by the positions of their paths in
    /// `path_ids`, then by the curve indices of `first` and `second`.
    fn intersect(&self, path_ids: &[PathId]) -> Result<Vec<CandidatePair>, Self::Error>;
}

pub(crate) type EntryKey = (PathId, usize);

/// Maps each requested path to the position of its first occurrence in the request.
pub(crate) fn request_positions(path_ids: &[PathId]) -> HashMap<PathId, usize> {
    let mut positions = HashMap::with_capacity(path_ids.len());
    for (position, &path_id) in path_ids.iter().enumerate() {
        positions.entry(path_id).or_insert(position);
    }
    positions
}

/// Orients a pair of entries from different requested paths, or returns `None` if either path
/// was not requested or both belong to the same path.
pub(crate) fn orient(positions: &HashMap<PathId, usize>, a: &IndexEntry, b: &IndexEntry)
                     -> Option<CandidatePair> {
    let (position_a, position_b) = (*positions.get(&a.path_id)?, *positions.get(&b.path_id)?);
    if position_a < position_b {
        Some(CandidatePair { first: *a, second: *b })
    } else if position_b < position_a {
        Some(CandidatePair { first: *b, second: *a })
    } else {
        None
    }
}

pub(crate) fn sort_pairs(positions: &HashMap<PathId, usize>, pairs: &mut [CandidatePair]) {
    pairs.sort_by_key(|pair| {
        (positions[&pair.first.path_id],
         positions[&pair.second.path_id],
         pair.first.curve_index,
         pair.second.curve_index)
    });
}

#[cfg(test)]
mod test {
    use super::{GridIndex, IndexEntry, PathId, ScanIndex, SpatialIndex};
    use crate::error::IndexError;
    use pathcross_content::segment::Segment;
    use pathcross_geometry::line_segment::LineSegment2D;
    use pathcross_geometry::vector::vec2d;
    use quickcheck;

    fn entry(path: u64, curve_index: usize, x0: f64, y0: f64, x1: f64, y1: f64) -> IndexEntry {
        let line = LineSegment2D::new(vec2d(x0, y0), vec2d(x1, y1));
        IndexEntry::new(PathId::new(path), curve_index, Segment::line(line))
    }

    fn summarize<I>(index: &I, path_ids: &[u64]) -> Vec<(u64, usize, u64, usize)>
                    where I: SpatialIndex<Error = IndexError> {
        let path_ids: Vec<PathId> = path_ids.iter().cloned().map(PathId::new).collect();
        index.intersect(&path_ids).unwrap().iter().map(|pair| {
            (pair.first.path_id.value(),
             pair.first.curve_index,
             pair.second.path_id.value(),
             pair.second.curve_index)
        }).collect()
    }

    fn populate<I>(index: &mut I) where I: SpatialIndex<Error = IndexError> {
        index.add(entry(0, 1, 0.0, 0.0, 10.0, 10.0)).unwrap();
        index.add(entry(0, 2, 10.0, 10.0, 20.0, 0.0)).unwrap();
        index.add(entry(1, 1, 0.0, 10.0, 10.0, 0.0)).unwrap();
        index.add(entry(1, 2, 50.0, 50.0, 60.0, 60.0)).unwrap();
        // Touches the second segment of path 0 at a single corner.
        index.add(entry(2, 1, 20.0, 10.0, 30.0, 20.0)).unwrap();
    }

    fn check_contract<I>(mut index: I) where I: SpatialIndex<Error = IndexError> {
        populate(&mut index);
        assert_eq!(summarize(&index, &[0, 1]), vec![(0, 1, 1, 1), (0, 2, 1, 1)]);
        assert_eq!(summarize(&index, &[1, 0]), vec![(1, 1, 0, 1), (1, 1, 0, 2)]);
        assert_eq!(summarize(&index, &[0, 1, 0, 1]), summarize(&index, &[0, 1]));
        assert_eq!(summarize(&index, &[2, 0, 1]), vec![(2, 1, 0, 2)]
                   .into_iter()
                   .chain(vec![(0, 1, 1, 1), (0, 2, 1, 1)])
                   .collect::<Vec<_>>());
        assert!(summarize(&index, &[0]).is_empty());
        assert!(summarize(&index, &[0, 7]).is_empty());

        assert_eq!(index.add(entry(1, 2, 0.0, 0.0, 1.0, 1.0)),
                   Err(IndexError::DuplicateEntry { path_id: PathId::new(1), curve_index: 2 }));

        index.remove(PathId::new(1)).unwrap();
        index.remove(PathId::new(9)).unwrap();
        assert!(summarize(&index, &[0, 1]).is_empty());
        index.add(entry(1, 2, 0.0, 0.0, 1.0, 1.0)).unwrap();
        assert_eq!(summarize(&index, &[0, 1]), vec![(0, 1, 1, 2)]);
    }

    #[test]
    fn test_scan_index_contract() {
        check_contract(ScanIndex::new());
    }

    #[test]
    fn test_grid_index_contract() {
        check_contract(GridIndex::new(8.0));
        check_contract(GridIndex::with_overflow_limit(3.0, 2));
        check_contract(GridIndex::new(1000.0));
    }

    #[test]
    fn test_grid_index_degenerate_cells() {
        check_contract(GridIndex::new(0.0));
        check_contract(GridIndex::new(-4.0));
        check_contract(GridIndex::new(std::f64::NAN));
    }

    #[test]
    fn test_grid_index_non_finite_boxes() {
        let mut index = GridIndex::new(4.0);
        index.add(entry(0, 1, 0.0, 0.0, std::f64::INFINITY, 10.0)).unwrap();
        index.add(entry(1, 1, 500.0, 5.0, 600.0, 5.0)).unwrap();
        assert_eq!(summarize(&index, &[0, 1]), vec![(0, 1, 1, 1)]);
    }

    type Boxes = Vec<(u8, i8, i8, u8, u8)>;

    fn fill<I>(index: &mut I, boxes: &Boxes) where I: SpatialIndex<Error = IndexError> {
        for (curve_index, &(path, x, y, width, height)) in boxes.iter().enumerate() {
            let (x, y) = (x as f64, y as f64);
            let entry = entry(path as u64 % 4,
                              curve_index,
                              x,
                              y,
                              x + (width % 40) as f64,
                              y + (height % 40) as f64);
            index.add(entry).unwrap();
        }
    }

    #[test]
    fn test_grid_matches_scan() {
        fn prop(boxes: Boxes, cell_size: u8, max_cells: u8) -> bool {
            let mut scan = ScanIndex::new();
            let mut grid = GridIndex::with_overflow_limit(cell_size as f64 / 4.0 + 0.5,
                                                          max_cells as usize);
            fill(&mut scan, &boxes);
            fill(&mut grid, &boxes);
            summarize(&scan, &[3, 0, 2, 1]) == summarize(&grid, &[3, 0, 2, 1]) &&
                summarize(&scan, &[1, 2]) == summarize(&grid, &[1, 2])
        }
        quickcheck::quickcheck(prop as fn(Boxes, u8, u8) -> bool);
    }
}
