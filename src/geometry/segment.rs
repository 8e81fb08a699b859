use serde::{Deserialize, Serialize};

use crate::foundation::core::Point2D;

/// One edge segment of a host path.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Segment {
    /// Straight line between two points.
    Line {
        /// Start point.
        begin: Point2D,
        /// End point.
        end: Point2D,
    },
    /// Quadratic Bezier.
    Quad {
        /// Start anchor.
        anchor1: Point2D,
        /// Control point.
        control: Point2D,
        /// End anchor.
        anchor2: Point2D,
    },
    /// Cubic Bezier.
    Cubic {
        /// Start anchor.
        anchor1: Point2D,
        /// First control point.
        control1: Point2D,
        /// Second control point.
        control2: Point2D,
        /// End anchor.
        anchor2: Point2D,
    },
}

impl Segment {
    /// Return `true` for straight segments.
    pub fn is_line(&self) -> bool {
        matches!(self, Self::Line { .. })
    }

    /// Start and end anchor.
    pub fn anchors(&self) -> (Point2D, Point2D) {
        match *self {
            Self::Line { begin, end } => (begin, end),
            Self::Quad {
                anchor1, anchor2, ..
            }
            | Self::Cubic {
                anchor1, anchor2, ..
            } => (anchor1, anchor2),
        }
    }
}
