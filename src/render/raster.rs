//! Bitmap fallback for regions that cannot be vectorized.
//!
//! Coverage is rendered with `vello_cpu` into a scratch pixmap whose alpha channel becomes the
//! mask. Holes are rendered the same way and subtracted. The solid fill is then composited onto
//! a straight-alpha canvas, so several regions can accumulate on one canvas in submission order.

use image::RgbaImage;

use crate::foundation::core::{Bound, Matrix2D};
use crate::foundation::error::{ShapecastError, ShapecastResult};
use crate::foundation::math::quantize_subpixel;
use crate::geometry::path::Path;
use crate::render::composite::{blend_solid_in_place, subtract_coverage};
use crate::shape::model::Region;

/// Default sub-pixel precision (fractional bits) for mask coordinates.
pub const DEFAULT_SUBPIXEL_SHIFT: u32 = 8;
/// Default maximum bitmap side length in pixels.
pub const DEFAULT_MAX_BITMAP_SIDE: u32 = 4096;

/// RGBA bitmap plus the transform placing it in shape space.
#[derive(Clone, Debug, PartialEq)]
pub struct Bitmap {
    /// Straight-alpha RGBA8 pixels.
    pub image: RgbaImage,
    /// Placement transform (translation by the pixel offset).
    pub transform: Matrix2D,
}

/// Integer pixel rectangle covering a shape-space bound.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PixelBounds {
    /// Left edge in shape space pixels.
    pub x: i32,
    /// Top edge in shape space pixels.
    pub y: i32,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl PixelBounds {
    /// Correct the bound's corner inversion, then snap: offset = floor(min), size = ceil(max - offset).
    pub fn from_bound(bound: &Bound) -> Self {
        let r = bound.normalized();
        let x = r.x0.floor();
        let y = r.y0.floor();
        let width = (r.x1 - x).ceil().max(0.0);
        let height = (r.y1 - y).ceil().max(0.0);
        Self {
            x: x as i32,
            y: y as i32,
            width: width as u32,
            height: height as u32,
        }
    }

    /// Return `true` when the rectangle has no pixels.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Accumulating canvas with a fixed pixel offset.
#[derive(Clone, Debug)]
pub struct RasterCanvas {
    image: RgbaImage,
    bounds: PixelBounds,
}

impl RasterCanvas {
    /// Pixel rectangle covered by the canvas.
    pub fn bounds(&self) -> PixelBounds {
        self.bounds
    }

    /// Borrow the pixels.
    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Finish into a bitmap placed at the canvas offset.
    pub fn into_bitmap(self) -> Bitmap {
        Bitmap {
            transform: Matrix2D::translate(f64::from(self.bounds.x), f64::from(self.bounds.y)),
            image: self.image,
        }
    }
}

/// Region rasterizer.
#[derive(Clone, Copy, Debug)]
pub struct Rasterizer {
    subpixel_shift: u32,
    max_side: u32,
}

impl Default for Rasterizer {
    fn default() -> Self {
        Self::new(DEFAULT_SUBPIXEL_SHIFT, DEFAULT_MAX_BITMAP_SIDE)
    }
}

impl Rasterizer {
    /// Create a rasterizer. `max_side` is capped to what the coverage renderer supports.
    pub fn new(subpixel_shift: u32, max_side: u32) -> Self {
        Self {
            subpixel_shift,
            max_side: max_side.min(u32::from(u16::MAX)),
        }
    }

    /// Allocate a transparent canvas covering `bound`.
    pub fn canvas_for(&self, bound: &Bound) -> ShapecastResult<RasterCanvas> {
        let bounds = PixelBounds::from_bound(bound);
        if bounds.width > self.max_side || bounds.height > self.max_side {
            return Err(ShapecastError::raster(format!(
                "bitmap {}x{} exceeds max side {}",
                bounds.width, bounds.height, self.max_side
            )));
        }
        Ok(RasterCanvas {
            image: RgbaImage::new(bounds.width, bounds.height),
            bounds,
        })
    }

    /// Rasterize one region into its own bitmap. Returns `None` for a zero-area bound.
    pub fn rasterize_region(&self, region: &Region) -> ShapecastResult<Option<Bitmap>> {
        let Some(bound) = region.bound() else {
            return Ok(None);
        };
        let mut canvas = self.canvas_for(&bound)?;
        if canvas.bounds.is_empty() {
            tracing::debug!("skipping zero-area raster region");
            return Ok(None);
        }
        self.composite_region(&mut canvas, region)?;
        Ok(Some(canvas.into_bitmap()))
    }

    /// Rasterize several regions onto one canvas covering `bound`, in order.
    pub fn rasterize_regions<'a>(
        &self,
        regions: impl IntoIterator<Item = &'a Region>,
        bound: &Bound,
    ) -> ShapecastResult<Bitmap> {
        let mut canvas = self.canvas_for(bound)?;
        for region in regions {
            self.composite_region(&mut canvas, region)?;
        }
        Ok(canvas.into_bitmap())
    }

    /// Render the region's mask and composite its solid fill onto `canvas`.
    pub fn composite_region(
        &self,
        canvas: &mut RasterCanvas,
        region: &Region,
    ) -> ShapecastResult<()> {
        if canvas.bounds.is_empty() {
            return Ok(());
        }
        let mut mask = self.coverage_mask(&region.contour, canvas.bounds)?;
        for hole in &region.holes {
            let hole_mask = self.coverage_mask(hole, canvas.bounds)?;
            subtract_coverage(&mut mask, &hole_mask)?;
        }
        let fill = region.fill.solid_color().to_array();
        blend_solid_in_place(canvas.image.as_mut(), &mask, fill)
    }

    fn coverage_mask(&self, path: &Path, bounds: PixelBounds) -> ShapecastResult<Vec<u8>> {
        let len = (bounds.width as usize) * (bounds.height as usize);
        let points = path.points();
        if points.len() < 3 {
            return Ok(vec![0; len]);
        }

        let w: u16 = bounds
            .width
            .try_into()
            .map_err(|_| ShapecastError::raster("mask width exceeds u16"))?;
        let h: u16 = bounds
            .height
            .try_into()
            .map_err(|_| ShapecastError::raster("mask height exceeds u16"))?;

        let shift = self.subpixel_shift;
        let ox = f64::from(bounds.x);
        let oy = f64::from(bounds.y);
        let local = |x: f64, y: f64| {
            vello_cpu::kurbo::Point::new(
                quantize_subpixel(x - ox, shift),
                quantize_subpixel(y - oy, shift),
            )
        };

        let mut bez = vello_cpu::kurbo::BezPath::new();
        bez.move_to(local(points[0].x, points[0].y));
        for p in &points[1..] {
            bez.line_to(local(p.x, p.y));
        }
        bez.close_path();

        let mut ctx = vello_cpu::RenderContext::new(w, h);
        ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(255, 255, 255, 255));
        ctx.fill_path(&bez);
        ctx.flush();

        let mut pixmap = vello_cpu::Pixmap::new(w, h);
        ctx.render_to_pixmap(&mut pixmap);

        Ok(pixmap
            .data_as_u8_slice()
            .chunks_exact(4)
            .map(|px| px[3])
            .collect())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/raster.rs"]
mod tests;
