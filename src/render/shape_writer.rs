//! Per-resource collector turning regions into drawables.

use crate::foundation::error::{ShapecastError, ShapecastResult};
use crate::render::item::{GraphicItem, ShapeGraphic};
use crate::render::raster::Rasterizer;
use crate::render::slice::SliceGuides;
use crate::render::triangulate::triangulate_region;
use crate::shape::classify::{RegionStrategy, classify_region, is_valid_region};
use crate::shape::model::{FilledShape, Region};

/// Collects the drawables of one shape resource.
#[derive(Debug)]
pub struct ShapeWriter {
    rasterizer: Rasterizer,
    graphic: ShapeGraphic,
}

impl ShapeWriter {
    /// Create an empty writer.
    pub fn new(rasterizer: Rasterizer) -> Self {
        Self {
            rasterizer,
            graphic: ShapeGraphic::default(),
        }
    }

    /// Add every fill region, then every stroke region.
    pub fn add_filled_shape(&mut self, shape: &FilledShape) -> ShapecastResult<()> {
        for region in shape.regions() {
            self.add_region(region)?;
        }
        Ok(())
    }

    /// Classify `region` and emit the matching drawable. Returns the chosen strategy.
    pub fn add_region(&mut self, region: &Region) -> ShapecastResult<RegionStrategy> {
        let strategy = classify_region(region);
        let color = region.fill.solid_color();
        match strategy {
            RegionStrategy::Invalid => {
                tracing::trace!("dropping invisible region");
            }
            RegionStrategy::Rasterize => match self.rasterizer.rasterize_region(region) {
                Ok(Some(bitmap)) => self.graphic.items.push(GraphicItem::Bitmap(bitmap)),
                Ok(None) => tracing::trace!("rasterized region has no pixels"),
                Err(ShapecastError::Raster(msg)) => {
                    tracing::warn!(%msg, "region cannot be rasterized, dropped");
                }
                Err(e) => return Err(e),
            },
            RegionStrategy::Triangulate => {
                let triangles = triangulate_region(region)?;
                self.graphic
                    .items
                    .push(GraphicItem::Triangles { triangles, color });
            }
            RegionStrategy::Contour => {
                self.graphic.items.push(GraphicItem::Contour {
                    points: region.contour.points().to_vec(),
                    color,
                });
            }
            RegionStrategy::Unhandled => {
                tracing::trace!(
                    vertices = region.contour.len(),
                    holes = region.holes.len(),
                    "small contour with holes emits nothing"
                );
            }
        }
        Ok(strategy)
    }

    /// Composite `shapes` into one 9-slice bitmap covering the union of their bounds.
    ///
    /// A canvas the rasterizer cannot allocate drops the item with a warning.
    pub fn add_sliced(
        &mut self,
        shapes: &[FilledShape],
        guides: SliceGuides,
    ) -> ShapecastResult<()> {
        let Some(bound) = shapes
            .iter()
            .filter_map(FilledShape::bound)
            .reduce(|acc, b| acc.union(&b))
        else {
            tracing::trace!("sliced item without geometry");
            return Ok(());
        };

        let regions = shapes
            .iter()
            .flat_map(FilledShape::regions)
            .filter(|r| is_valid_region(r));
        match self.rasterizer.rasterize_regions(regions, &bound) {
            Ok(bitmap) => {
                self.graphic
                    .items
                    .push(GraphicItem::Sliced { bitmap, guides });
                Ok(())
            }
            Err(ShapecastError::Raster(msg)) => {
                tracing::warn!(%msg, "sliced item cannot be rasterized, dropped");
                Ok(())
            }
            Err(e) => Err(e),
        }
    }

    /// Finish and return the collected drawables.
    pub fn finish(self) -> ShapeGraphic {
        self.graphic
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/shape_writer.rs"]
mod tests;
