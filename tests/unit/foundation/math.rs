use super::*;

#[test]
fn mul_div255_endpoints() {
    assert_eq!(mul_div255_u8(255, 255), 255);
    assert_eq!(mul_div255_u8(0, 255), 0);
    assert_eq!(mul_div255_u8(255, 0), 0);
    assert_eq!(mul_div255_u8(128, 255), 128);
}

#[test]
fn quantize_subpixel_snaps_to_256ths() {
    assert_eq!(quantize_subpixel(1.0, 8), 1.0);
    assert_eq!(quantize_subpixel(0.5 + 1.0 / 1024.0, 8), 0.5);
    assert_eq!(quantize_subpixel(0.5 + 3.0 / 1024.0, 8), 0.5 + 1.0 / 256.0);
}

#[test]
fn canonical_bits_folds_negative_zero() {
    assert_eq!(canonical_bits(0.0), canonical_bits(-0.0));
    assert_ne!(canonical_bits(1.0), canonical_bits(-1.0));
}
