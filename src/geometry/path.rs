use serde::Serialize;

use crate::foundation::core::{Bound, Matrix2D, Point2D};
use crate::geometry::chain::ChainBuilder;
use crate::geometry::curve::{CurveMode, flatten_cubic, flatten_quad};
use crate::geometry::segment::Segment;

/// Ordered point loop built once from host segments.
///
/// Equality is size plus pointwise equality; the curve flag is classification input only.
#[derive(Clone, Debug, Default, Serialize)]
pub struct Path {
    points: Vec<Point2D>,
    curved: bool,
}

impl PartialEq for Path {
    fn eq(&self, other: &Self) -> bool {
        self.points == other.points
    }
}

impl Path {
    /// Build a line-only path from already ordered points.
    pub fn from_points(points: Vec<Point2D>) -> Self {
        Self {
            points,
            curved: false,
        }
    }

    /// Stitch segments into a path.
    ///
    /// In [`CurveMode::Optimized`] curves contribute only their anchors and the path stays
    /// line-only.
    pub fn from_segments<'a>(
        segments: impl IntoIterator<Item = &'a Segment>,
        mode: CurveMode,
    ) -> Self {
        let mut chain = ChainBuilder::new();
        let mut curved = false;
        for seg in segments {
            match (*seg, mode) {
                (Segment::Line { begin, end }, _) => chain.push_edge(begin, end),
                (seg, CurveMode::Optimized) => {
                    let (begin, end) = seg.anchors();
                    chain.push_edge(begin, end);
                }
                (
                    Segment::Quad {
                        anchor1,
                        control,
                        anchor2,
                    },
                    CurveMode::Full,
                ) => {
                    curved = true;
                    chain.push_polyline(&flatten_quad(anchor1, control, anchor2));
                }
                (
                    Segment::Cubic {
                        anchor1,
                        control1,
                        control2,
                        anchor2,
                    },
                    CurveMode::Full,
                ) => {
                    curved = true;
                    chain.push_polyline(&flatten_cubic(anchor1, control1, control2, anchor2));
                }
            }
        }
        Self {
            points: chain.finish(),
            curved,
        }
    }

    /// Flattened points in order.
    pub fn points(&self) -> &[Point2D] {
        &self.points
    }

    /// Number of vertices.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Return `true` for a path without points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Return `true` if any source segment was a kept curve.
    pub fn has_curves(&self) -> bool {
        self.curved
    }

    /// Tight bound of the points.
    pub fn bound(&self) -> Option<Bound> {
        Bound::from_points(&self.points)
    }

    /// Copy of this path with every point mapped through `m`.
    pub fn transformed(&self, m: &Matrix2D) -> Self {
        Self {
            points: self.points.iter().map(|p| m.transform_point(*p)).collect(),
            curved: self.curved,
        }
    }

    /// Same curve flag, new points.
    pub(crate) fn with_points(&self, points: Vec<Point2D>) -> Self {
        Self {
            points,
            curved: self.curved,
        }
    }

    /// Absolute polygon area (shoelace), treating the path as closed.
    pub fn area(&self) -> f64 {
        polygon_area(&self.points).abs()
    }
}

/// Signed shoelace area of a closed polygon.
pub fn polygon_area(points: &[Point2D]) -> f64 {
    if points.len() < 3 {
        return 0.0;
    }
    let mut acc = 0.0;
    for (i, p) in points.iter().enumerate() {
        let q = points[(i + 1) % points.len()];
        acc += p.x * q.y - q.x * p.y;
    }
    acc * 0.5
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/path.rs"]
mod tests;
