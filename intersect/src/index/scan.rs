// pathcross/intersect/src/index/scan.rs
//
// Copyright © 2020 The Pathcross Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! An index that compares every pair of requested segments.

use crate::error::IndexError;
use crate::index::{self, CandidatePair, EntryKey, IndexEntry, PathId, SpatialIndex};
use hashbrown::HashSet;

#[derive(Clone, Debug, Default)]
pub struct ScanIndex {
    entries: Vec<IndexEntry>,
    keys: HashSet<EntryKey>,
}

impl ScanIndex {
    #[inline]
    pub fn new() -> ScanIndex {
        ScanIndex::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl SpatialIndex for ScanIndex {
    type Error = IndexError;

    fn add(&mut self, entry: IndexEntry) -> Result<(), IndexError> {
        if !self.keys.insert(entry.key()) {
            return Err(IndexError::DuplicateEntry {
                path_id: entry.path_id,
                curve_index: entry.curve_index,
            });
        }
        self.entries.push(entry);
        Ok(())
    }

    fn remove(&mut self, path_id: PathId) -> Result<(), IndexError> {
        self.entries.retain(|entry| entry.path_id != path_id);
        self.keys.retain(|&(key_path_id, _)| key_path_id != path_id);
        Ok(())
    }

    fn intersect(&self, path_ids: &[PathId]) -> Result<Vec<CandidatePair>, IndexError> {
        let positions = index::request_positions(path_ids);
        let requested: Vec<&IndexEntry> = self.entries
                                              .iter()
                                              .filter(|entry| {
                                                  positions.contains_key(&entry.path_id)
                                              })
                                              .collect();

        let mut pairs = vec![];
        for (entry_index, a) in requested.iter().enumerate() {
            for b in &requested[(entry_index + 1)..] {
                if !a.bbox.intersects(b.bbox) {
                    continue;
                }
                if let Some(pair) = index::orient(&positions, a, b) {
                    pairs.push(pair);
                }
            }
        }

        index::sort_pairs(&positions, &mut pairs);
        Ok(pairs)
    }
}
