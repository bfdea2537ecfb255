// pathcross/intersect/src/index/grid.rs
//
// Copyright © 2020 The Pathcross Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! A uniform grid over segment bounding boxes.
//!
//! Each segment is binned into every cell its bounding box touches, so two segments can only
//! be a candidate pair if they share a cell. Segments whose boxes cover too many cells, or
//! are not finite, go into an overflow list that is compared against everything.

use crate::error::IndexError;
use crate::index::{self, CandidatePair, EntryKey, IndexEntry, PathId, SpatialIndex};
use hashbrown::{HashMap, HashSet};
use pathcross_geometry::rect::BBox;

const DEFAULT_MAX_CELLS: usize = 256;

type CellKey = (i64, i64);

/// The inclusive range of cells a bounding box covers.
#[derive(Clone, Copy, Debug)]
struct CellRange {
    min_x: i64,
    min_y: i64,
    max_x: i64,
    max_y: i64,
}

impl CellRange {
    fn cells(self) -> impl Iterator<Item = CellKey> {
        let (min_x, max_x) = (self.min_x, self.max_x);
        (self.min_y..=self.max_y).flat_map(move |y| (min_x..=max_x).map(move |x| (x, y)))
    }
}

#[derive(Clone, Debug)]
pub struct GridIndex {
    cell_size: f64,
    max_cells: usize,
    entries: HashMap<EntryKey, IndexEntry>,
    cells: HashMap<CellKey, Vec<EntryKey>>,
    overflow: Vec<EntryKey>,
    paths: HashMap<PathId, Vec<usize>>,
}

impl GridIndex {
    /// Creates a grid with square cells `cell_size` units wide.
    ///
    /// A cell size that is not a positive finite number puts every segment in the overflow
    /// list, which makes the grid behave like a `ScanIndex`.
    pub fn new(cell_size: f64) -> GridIndex {
        GridIndex::with_overflow_limit(cell_size, DEFAULT_MAX_CELLS)
    }

    /// Creates a grid whose segments go to the overflow list once their bounding boxes cover
    /// more than `max_cells` cells.
    pub fn with_overflow_limit(cell_size: f64, max_cells: usize) -> GridIndex {
        if !(cell_size.is_finite() && cell_size > 0.0) {
            warn!("grid cell size {} is not positive; every segment will overflow", cell_size);
        }
        GridIndex {
            cell_size,
            max_cells,
            entries: HashMap::new(),
            cells: HashMap::new(),
            overflow: vec![],
            paths: HashMap::new(),
        }
    }

    #[inline]
    pub fn cell_size(&self) -> f64 {
        self.cell_size
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the cells `bbox` covers, or `None` if the segment belongs in the overflow list.
    fn cell_range(&self, bbox: BBox) -> Option<CellRange> {
        if !(self.cell_size.is_finite() && self.cell_size > 0.0) || !bbox.is_finite() {
            return None;
        }

        let scale = 1.0 / self.cell_size;
        let (min_x, min_y) = (f64::floor(bbox.min_x() * scale), f64::floor(bbox.min_y() * scale));
        let (max_x, max_y) = (f64::floor(bbox.max_x() * scale), f64::floor(bbox.max_y() * scale));
        let cell_count = (max_x - min_x + 1.0) * (max_y - min_y + 1.0);
        if !(cell_count <= self.max_cells as f64) {
            return None;
        }

        Some(CellRange {
            min_x: min_x as i64,
            min_y: min_y as i64,
            max_x: max_x as i64,
            max_y: max_y as i64,
        })
    }

    /// Calls `f` with the key of every entry that shares a cell with `entry`, or with every
    /// entry at all if `entry` overflowed. May report the same key more than once.
    fn neighbors<F>(&self, entry: &IndexEntry, mut f: F) where F: FnMut(&EntryKey) {
        for key in &self.overflow {
            f(key);
        }
        match self.cell_range(entry.bbox) {
            None => {
                for key in self.entries.keys() {
                    f(key);
                }
            }
            Some(range) => {
                for cell in range.cells() {
                    if let Some(keys) = self.cells.get(&cell) {
                        for key in keys {
                            f(key);
                        }
                    }
                }
            }
        }
    }
}

impl SpatialIndex for GridIndex {
    type Error = IndexError;

    fn add(&mut self, entry: IndexEntry) -> Result<(), IndexError> {
        let key = entry.key();
        if self.entries.contains_key(&key) {
            return Err(IndexError::DuplicateEntry {
                path_id: entry.path_id,
                curve_index: entry.curve_index,
            });
        }

        match self.cell_range(entry.bbox) {
            None => self.overflow.push(key),
            Some(range) => {
                for cell in range.cells() {
                    self.cells.entry(cell).or_insert_with(Vec::new).push(key);
                }
            }
        }
        self.paths.entry(entry.path_id).or_insert_with(Vec::new).push(entry.curve_index);
        self.entries.insert(key, entry);
        Ok(())
    }

    fn remove(&mut self, path_id: PathId) -> Result<(), IndexError> {
        let curve_indices = match self.paths.remove(&path_id) {
            None => return Ok(()),
            Some(curve_indices) => curve_indices,
        };

        for curve_index in curve_indices {
            let entry = match self.entries.remove(&(path_id, curve_index)) {
                None => continue,
                Some(entry) => entry,
            };
            match self.cell_range(entry.bbox) {
                None => self.overflow.retain(|&key| key != (path_id, curve_index)),
                Some(range) => {
                    for cell in range.cells() {
                        let now_empty = match self.cells.get_mut(&cell) {
                            None => continue,
                            Some(keys) => {
                                keys.retain(|&(key_path_id, _)| key_path_id != path_id);
                                keys.is_empty()
                            }
                        };
                        if now_empty {
                            self.cells.remove(&cell);
                        }
                    }
                }
            }
        }
        Ok(())
    }

    fn intersect(&self, path_ids: &[PathId]) -> Result<Vec<CandidatePair>, IndexError> {
        let positions = index::request_positions(path_ids);
        let mut seen = HashSet::new();
        let mut pairs = vec![];

        for (&path_id, _) in &positions {
            let curve_indices = match self.paths.get(&path_id) {
                None => continue,
                Some(curve_indices) => curve_indices,
            };
            for &curve_index in curve_indices {
                let a = match self.entries.get(&(path_id, curve_index)) {
                    None => continue,
                    Some(entry) => entry,
                };
                self.neighbors(a, |key| {
                    let b = match self.entries.get(key) {
                        None => return,
                        Some(entry) => entry,
                    };
                    if !a.bbox.intersects(b.bbox) {
                        return;
                    }
                    if let Some(pair) = index::orient(&positions, a, b) {
                        if seen.insert((pair.first.key(), pair.second.key())) {
                            pairs.push(pair);
                        }
                    }
                });
            }
        }

        index::sort_pairs(&positions, &mut pairs);
        Ok(pairs)
    }
}
