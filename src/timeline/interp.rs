use crate::foundation::core::{ColorMatrix, Matrix2D};

/// Apply the tween delta `t` on top of the static transform `base`.
///
/// Equivalent to the affine product `t * base`.
pub fn compose_tween_matrix(base: &Matrix2D, t: &Matrix2D) -> Matrix2D {
    Matrix2D {
        a: t.a * base.a + t.c * base.b,
        b: base.a * t.b + base.b * t.d,
        c: base.c * t.a + base.d * t.c,
        d: t.d * base.d + t.b * base.c,
        tx: t.a * base.tx + t.c * base.ty + t.tx,
        ty: t.b * base.tx + t.d * base.ty + t.ty,
    }
}

/// Effective placement matrix of an entry.
pub fn resolve_matrix(base: Option<&Matrix2D>, delta: Option<&Matrix2D>) -> Option<Matrix2D> {
    match (base, delta) {
        (Some(b), Some(t)) => Some(compose_tween_matrix(b, t)),
        (Some(b), None) => Some(*b),
        (None, Some(t)) => Some(*t),
        (None, None) => None,
    }
}

/// A color tween overrides the static color.
pub fn resolve_color(
    static_color: Option<&ColorMatrix>,
    tween: Option<ColorMatrix>,
) -> Option<ColorMatrix> {
    tween.or_else(|| static_color.copied())
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/interp.rs"]
mod tests;
