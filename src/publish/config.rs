use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::foundation::error::{ShapecastError, ShapecastResult};
use crate::geometry::curve::CurveMode;
use crate::render::raster::{DEFAULT_MAX_BITMAP_SIDE, DEFAULT_SUBPIXEL_SHIFT, Rasterizer};

/// Largest supported sub-pixel shift.
pub const MAX_SUBPIXEL_SHIFT: u32 = 16;

/// Options controlling a publish session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PublishConfig {
    /// Reduce curves to their anchors instead of flattening them.
    pub filled_shape_optimization: bool,
    /// Apply each aggregated shape's own matrix to its geometry before combining a run.
    pub compose_run_transforms: bool,
    /// Fractional bits used for raster mask coordinates.
    pub subpixel_shift: u32,
    /// Largest bitmap side, in pixels, a rasterized region may have.
    pub max_bitmap_side: u32,
}

impl Default for PublishConfig {
    fn default() -> Self {
        Self {
            filled_shape_optimization: false,
            compose_run_transforms: false,
            subpixel_shift: DEFAULT_SUBPIXEL_SHIFT,
            max_bitmap_side: DEFAULT_MAX_BITMAP_SIDE,
        }
    }
}

impl PublishConfig {
    /// Parse a config from JSON.
    pub fn from_reader<R: std::io::Read>(r: R) -> ShapecastResult<Self> {
        let cfg: Self = serde_json::from_reader(r)
            .map_err(|e| ShapecastError::serde(format!("parse publish config JSON: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Parse a config from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> ShapecastResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            ShapecastError::validation(format!("open publish config '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Check value ranges.
    pub fn validate(&self) -> ShapecastResult<()> {
        if self.subpixel_shift > MAX_SUBPIXEL_SHIFT {
            return Err(ShapecastError::validation(format!(
                "subpixel_shift must be <= {MAX_SUBPIXEL_SHIFT}, got {}",
                self.subpixel_shift
            )));
        }
        if self.max_bitmap_side == 0 || self.max_bitmap_side > u32::from(u16::MAX) {
            return Err(ShapecastError::validation(format!(
                "max_bitmap_side must be in 1..={}, got {}",
                u16::MAX,
                self.max_bitmap_side
            )));
        }
        Ok(())
    }

    /// Curve handling selected by `filled_shape_optimization`.
    pub fn curve_mode(&self) -> CurveMode {
        if self.filled_shape_optimization {
            CurveMode::Optimized
        } else {
            CurveMode::Full
        }
    }

    /// Rasterizer configured from these options.
    pub fn rasterizer(&self) -> Rasterizer {
        Rasterizer::new(self.subpixel_shift, self.max_bitmap_side)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/publish/config.rs"]
mod tests;
