/// `x * y / 255` for 8-bit channel values widened to `u16`.
pub(crate) fn mul_div255_u8(x: u16, y: u16) -> u8 {
    ((u32::from(x) * u32::from(y)) / 255) as u8
}

/// Snap a coordinate to a fixed-point grid with `shift` fractional bits.
pub(crate) fn quantize_subpixel(v: f64, shift: u32) -> f64 {
    let scale = f64::from(1u32 << shift.min(16));
    (v * scale).round() / scale
}

/// Write-friendly form of an `f64` for hashing: `-0.0` and `0.0` share one bit pattern.
pub(crate) fn canonical_bits(v: f64) -> u64 {
    if v == 0.0 { 0 } else { v.to_bits() }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
