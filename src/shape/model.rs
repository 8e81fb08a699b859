use serde::Serialize;

use crate::foundation::core::{Bound, Matrix2D, Rgba8};
use crate::geometry::path::Path;

/// Fill style of a region. Only solid colors can be encoded.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FillStyle {
    /// Solid straight-alpha color.
    Solid {
        /// Fill color.
        color: Rgba8,
    },
}

impl FillStyle {
    /// The solid color of this style.
    pub fn solid_color(&self) -> Rgba8 {
        match *self {
            Self::Solid { color } => color,
        }
    }
}

/// Contour plus holes of one fill or stroke, with its fill style.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Region {
    /// Outer boundary.
    pub contour: Path,
    /// Hole boundaries, each an independent loop.
    pub holes: Vec<Path>,
    /// Fill style.
    pub fill: FillStyle,
}

impl Region {
    /// Build a region with a solid fill.
    pub fn solid(contour: Path, holes: Vec<Path>, color: Rgba8) -> Self {
        Self {
            contour,
            holes,
            fill: FillStyle::Solid { color },
        }
    }

    /// Return `true` if the contour or any hole kept a curved segment.
    pub fn is_complex(&self) -> bool {
        self.contour.has_curves() || self.holes.iter().any(Path::has_curves)
    }

    /// Bound of the contour.
    pub fn bound(&self) -> Option<Bound> {
        self.contour.bound()
    }

    /// Copy with every path mapped through `m`.
    pub fn transformed(&self, m: &Matrix2D) -> Self {
        Self {
            contour: self.contour.transformed(m),
            holes: self.holes.iter().map(|h| h.transformed(m)).collect(),
            fill: self.fill,
        }
    }
}

/// Fill and stroke regions of one shape element.
///
/// Stroke regions are stroke outlines already converted to fill geometry by the host.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct FilledShape {
    /// Fill regions in host order.
    pub fill: Vec<Region>,
    /// Stroke regions in host order.
    pub stroke: Vec<Region>,
}

impl FilledShape {
    /// Fill regions followed by stroke regions.
    pub fn regions(&self) -> impl Iterator<Item = &Region> {
        self.fill.iter().chain(self.stroke.iter())
    }

    /// Return `true` when there is no region at all.
    pub fn is_empty(&self) -> bool {
        self.fill.is_empty() && self.stroke.is_empty()
    }

    /// Union of all region bounds.
    pub fn bound(&self) -> Option<Bound> {
        self.regions()
            .filter_map(Region::bound)
            .reduce(|acc, b| acc.union(&b))
    }

    /// Copy with every region mapped through `m`.
    pub fn transformed(&self, m: &Matrix2D) -> Self {
        Self {
            fill: self.fill.iter().map(|r| r.transformed(m)).collect(),
            stroke: self.stroke.iter().map(|r| r.transformed(m)).collect(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/shape/model.rs"]
mod tests;
