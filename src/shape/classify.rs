use serde::Serialize;

use crate::shape::model::{FillStyle, Region};

/// Maximum contour vertex count emitted as a plain polygon.
pub const MAX_CONTOUR_VERTICES: usize = 4;

/// Encoding chosen for one region.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RegionStrategy {
    /// Invisible or unsupported fill; the region is dropped.
    Invalid,
    /// Curved geometry; rendered to a bitmap.
    Rasterize,
    /// Line-only polygon with more than four vertices; emitted as a triangle mesh.
    Triangulate,
    /// Line-only polygon with at most four vertices and no holes; emitted as-is.
    Contour,
    /// Small polygon with holes. Nothing is emitted for it.
    Unhandled,
}

impl RegionStrategy {
    /// Return `true` if the strategy produces any drawable.
    pub fn emits(self) -> bool {
        matches!(self, Self::Rasterize | Self::Triangulate | Self::Contour)
    }
}

/// Return `false` for regions that must be dropped without emitting geometry.
pub fn is_valid_region(region: &Region) -> bool {
    match region.fill {
        FillStyle::Solid { color } => color.a > 0,
    }
}

/// Pick the encoding for a region. The first matching rule wins.
pub fn classify_region(region: &Region) -> RegionStrategy {
    if !is_valid_region(region) {
        return RegionStrategy::Invalid;
    }
    if region.is_complex() {
        return RegionStrategy::Rasterize;
    }
    if region.contour.len() > MAX_CONTOUR_VERTICES {
        return RegionStrategy::Triangulate;
    }
    if region.holes.is_empty() {
        return RegionStrategy::Contour;
    }
    RegionStrategy::Unhandled
}

#[cfg(test)]
#[path = "../../tests/unit/shape/classify.rs"]
mod tests;
