//! Edge stitching.
//!
//! Host paths arrive as a bag of directed edges. [`ChainBuilder`] stitches them into one ordered
//! point list by inserting each edge's end point right after its begin point. The result depends
//! on edge order: an edge whose begin point is not yet known starts a new run at the tail of the
//! list, so adversarial orderings can leave the chain fragmented.

use crate::foundation::core::Point2D;

/// Incremental edge stitcher.
#[derive(Clone, Debug, Default)]
pub struct ChainBuilder {
    points: Vec<Point2D>,
}

impl ChainBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stitch one directed edge into the chain.
    ///
    /// If `begin` is already in the chain, `end` is inserted directly after it unless `end` is
    /// itself already present (the edge closes a loop). Otherwise both points are appended.
    pub fn push_edge(&mut self, begin: Point2D, end: Point2D) {
        match self.points.iter().position(|p| *p == begin) {
            Some(i) => {
                if !self.points.contains(&end) {
                    self.points.insert(i + 1, end);
                }
            }
            None => {
                self.points.push(begin);
                self.points.push(end);
            }
        }
    }

    /// Stitch a polyline as consecutive edges `(p0, p1), (p1, p2), ...`.
    pub fn push_polyline(&mut self, points: &[Point2D]) {
        for pair in points.windows(2) {
            self.push_edge(pair[0], pair[1]);
        }
    }

    /// Number of points stitched so far.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Return `true` when no edge has been pushed.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Finish and return the ordered point list.
    pub fn finish(self) -> Vec<Point2D> {
        self.points
    }
}

/// Stitch a sequence of directed edges into one point chain.
pub fn reconstruct_chain(edges: impl IntoIterator<Item = (Point2D, Point2D)>) -> Vec<Point2D> {
    let mut builder = ChainBuilder::new();
    for (begin, end) in edges {
        builder.push_edge(begin, end);
    }
    builder.finish()
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/chain.rs"]
mod tests;
