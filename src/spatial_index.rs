//! Spatial Index Module
//!
//! R-tree index over data points, used to turn a committed selection into
//! the indices of the points it contains. Candidates are narrowed by the
//! region's bounds in O(log n + k), then the exact predicate is applied.

use crate::geometry::{Bounds, Point};
use crate::selection::Region;
use rstar::{AABB, RTree, RTreeObject};
use std::collections::HashMap;

/// A data point with its index in the caller's arrays.
#[derive(Debug, Clone, Copy)]
pub struct IndexedPoint {
    pub index: usize,
    pub pos: Point,
}

impl RTreeObject for IndexedPoint {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_point([self.pos.x, self.pos.y])
    }
}

impl PartialEq for IndexedPoint {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index
    }
}

pub struct PointIndex {
    tree: RTree<IndexedPoint>,
    entries: HashMap<usize, IndexedPoint>,
}

impl PointIndex {
    pub fn new() -> Self {
        Self {
            tree: RTree::new(),
            entries: HashMap::new(),
        }
    }

    /// Bulk-load points; each point's index is its position in the iterator.
    pub fn from_points<I, P>(points: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<Point>,
    {
        let entries: Vec<IndexedPoint> = points
            .into_iter()
            .enumerate()
            .map(|(index, p)| IndexedPoint {
                index,
                pos: p.into(),
            })
            .collect();

        let entries_map = entries.iter().map(|e| (e.index, *e)).collect();

        Self {
            tree: RTree::bulk_load(entries),
            entries: entries_map,
        }
    }

    /// Insert or move the point stored under `index`.
    pub fn insert(&mut self, index: usize, pos: impl Into<Point>) {
        if let Some(old_entry) = self.entries.remove(&index) {
            self.tree.remove(&old_entry);
        }

        let entry = IndexedPoint {
            index,
            pos: pos.into(),
        };
        self.tree.insert(entry);
        self.entries.insert(index, entry);
    }

    pub fn remove(&mut self, index: usize) -> bool {
        if let Some(entry) = self.entries.remove(&index) {
            self.tree.remove(&entry);
            true
        } else {
            false
        }
    }

    pub fn get(&self, index: usize) -> Option<Point> {
        self.entries.get(&index).map(|e| e.pos)
    }

    /// Indices of all points inside `bounds` (inclusive), sorted.
    pub fn query_rect(&self, bounds: Bounds) -> Vec<usize> {
        let envelope = AABB::from_corners(
            [bounds.min.x, bounds.min.y],
            [bounds.max.x, bounds.max.y],
        );
        let mut found: Vec<usize> = self
            .tree
            .locate_in_envelope(&envelope)
            .map(|entry| entry.index)
            .collect();
        found.sort_unstable();
        found
    }

    /// Indices of all points contained in `region`, sorted.
    pub fn select<R: Region + ?Sized>(&self, region: &R) -> Vec<usize> {
        let Some(bounds) = region.bounds() else {
            return Vec::new();
        };
        let envelope = AABB::from_corners(
            [bounds.min.x, bounds.min.y],
            [bounds.max.x, bounds.max.y],
        );
        let mut found: Vec<usize> = self
            .tree
            .locate_in_envelope(&envelope)
            .filter(|entry| region.contains(entry.pos))
            .map(|entry| entry.index)
            .collect();
        found.sort_unstable();
        found
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.tree = RTree::new();
        self.entries.clear();
    }
}

impl Default for PointIndex {
    fn default() -> Self {
        Self::new()
    }
}
