// pathcross/intersect/src/session.rs
//
// Copyright © 2020 The Pathcross Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Intersection queries over a set of paths registered with a spatial index.

use crate::error::SessionError;
use crate::index::{CandidatePair, IndexEntry, PathId, SpatialIndex};
use crate::intersection::{IndexedIntersection, Intersection};
use crate::options::IntersectOptions;
use crate::solver;
use pathcross_svg::{self, PathSource};

/// Owns a spatial index and mints the ids of the paths registered with it.
///
/// Ids start at 0 and increase by one for every successfully indexed path. They are never
/// reused, even after the path is removed.
#[derive(Clone, Debug)]
pub struct IndexSession<I> {
    index: I,
    next_id: u64,
}

impl<I> IndexSession<I> where I: SpatialIndex {
    pub fn new(index: I) -> IndexSession<I> {
        IndexSession { index, next_id: 0 }
    }

    #[inline]
    pub fn index(&self) -> &I {
        &self.index
    }

    #[inline]
    pub fn index_mut(&mut self) -> &mut I {
        &mut self.index
    }

    #[inline]
    pub fn into_index(self) -> I {
        self.index
    }

    /// Normalizes `path` and registers each of its segments.
    ///
    /// If the index refuses a segment, whatever was already registered for the path is removed
    /// before the error is returned.
    pub fn index_path<'a, S>(&mut self, path: S) -> Result<PathId, SessionError<I::Error>>
                             where S: Into<PathSource<'a>> {
        let path = pathcross_svg::parse(path)?;

        let path_id = PathId::new(self.next_id);
        self.next_id += 1;

        for (curve_index, segment) in path.segments() {
            let entry = IndexEntry::new(path_id, curve_index, *segment);
            if let Err(error) = self.index.add(entry) {
                if self.index.remove(path_id).is_err() {
                    warn!("failed to roll back partially indexed path {}", path_id);
                }
                return Err(SessionError::Index(error));
            }
        }

        debug!("indexed path {} with {} segments", path_id, path.segment_count());
        Ok(path_id)
    }

    pub fn remove_path(&mut self, path_id: PathId) -> Result<(), I::Error> {
        self.index.remove(path_id)
    }

    /// Finds the intersections among the given paths.
    ///
    /// Results are grouped by candidate pair, in the order the index returns them, and ordered
    /// by `t1` within each pair.
    pub fn find_intersections(&self, path_ids: &[PathId], options: &IntersectOptions)
                              -> Result<Vec<IndexedIntersection>, I::Error> {
        let pairs = self.candidate_pairs(path_ids)?;
        let mut results = vec![];
        for pair in &pairs {
            let (first, second) = (&pair.first, &pair.second);
            for hit in solver::intersect_segments(&first.curve, &second.curve, options) {
                results.push(IndexedIntersection {
                    path_id1: first.path_id,
                    path_id2: second.path_id,
                    intersection: Intersection::new(&hit,
                                                    (first.curve_index, &first.curve),
                                                    (second.curve_index, &second.curve)),
                });
            }
        }
        Ok(results)
    }

    pub fn count_intersections(&self, path_ids: &[PathId], options: &IntersectOptions)
                               -> Result<usize, I::Error> {
        let pairs = self.candidate_pairs(path_ids)?;
        Ok(pairs.iter().map(|pair| {
            solver::count_segment_intersections(&pair.first.curve, &pair.second.curve, options)
        }).sum())
    }

    fn candidate_pairs(&self, path_ids: &[PathId]) -> Result<Vec<CandidatePair>, I::Error> {
        let pairs = self.index.intersect(path_ids)?;
        debug!("index proposed {} candidate pairs for {} paths", pairs.len(), path_ids.len());
        Ok(pairs)
    }
}
