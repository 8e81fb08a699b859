use crate::foundation::error::{ShapecastError, ShapecastResult};
use crate::foundation::math::mul_div255_u8;

/// Straight-alpha RGBA8 pixel.
pub type Rgba8Px = [u8; 4];

/// Composite a solid fill over `origin` through a coverage value.
///
/// The effective alpha is `min(fill alpha, coverage)`. Color channels blend with source-over;
/// the destination alpha accumulates additively and saturates at 255.
pub fn blend_solid(origin: Rgba8Px, fill: Rgba8Px, coverage: u8) -> Rgba8Px {
    if fill[3] == 0 {
        return origin;
    }
    let alpha = u16::from(fill[3].min(coverage));
    let inv = 255 - alpha;

    let mut out = origin;
    for i in 0..3 {
        let acc = u32::from(origin[i]) * u32::from(inv) + u32::from(fill[i]) * u32::from(alpha);
        out[i] = (acc / 255) as u8;
    }
    out[3] = origin[3].saturating_add(alpha as u8);
    out
}

/// Composite a solid fill over a whole RGBA8 buffer using a per-pixel coverage mask.
pub fn blend_solid_in_place(dst: &mut [u8], mask: &[u8], fill: Rgba8Px) -> ShapecastResult<()> {
    if dst.len() != mask.len() * 4 {
        return Err(ShapecastError::raster(
            "blend_solid_in_place expects one mask byte per rgba8 pixel",
        ));
    }
    if fill[3] == 0 {
        return Ok(());
    }
    for (px, &coverage) in dst.chunks_exact_mut(4).zip(mask) {
        let out = blend_solid([px[0], px[1], px[2], px[3]], fill, coverage);
        px.copy_from_slice(&out);
    }
    Ok(())
}

/// Punch a hole coverage mask out of a contour mask: `mask * (255 - hole) / 255`.
pub fn subtract_coverage(mask: &mut [u8], hole: &[u8]) -> ShapecastResult<()> {
    if mask.len() != hole.len() {
        return Err(ShapecastError::raster(
            "subtract_coverage expects equal-length masks",
        ));
    }
    for (m, &h) in mask.iter_mut().zip(hole) {
        *m = mul_div255_u8(u16::from(*m), 255 - u16::from(h));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/render/composite.rs"]
mod tests;
