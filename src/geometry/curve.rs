use kurbo::{CubicBez, ParamCurve, QuadBez};
use serde::{Deserialize, Serialize};

use crate::foundation::core::Point2D;

/// How curved segments are turned into path points.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CurveMode {
    /// Sample the Bezier with an adaptive parametric step.
    #[default]
    Full,
    /// Keep only the anchors; the curve is stitched as if it were a line.
    Optimized,
}

/// Parametric step for a curve between two anchors: `5/|dx| + 5/|dy|`.
///
/// An axis with zero extent contributes nothing, so coincident anchors yield `0.0`.
pub fn flatten_step(anchor1: Point2D, anchor2: Point2D) -> f64 {
    fn axis(d: f64) -> f64 {
        let d = d.abs();
        if d > 0.0 { 5.0 / d } else { 0.0 }
    }
    axis(anchor2.x - anchor1.x) + axis(anchor2.y - anchor1.y)
}

/// Sample a quadratic Bezier into polyline points, ending on `anchor2`.
pub fn flatten_quad(anchor1: Point2D, control: Point2D, anchor2: Point2D) -> Vec<Point2D> {
    let curve = QuadBez::new(anchor1, control, anchor2);
    sample(&curve, flatten_step(anchor1, anchor2), anchor1, anchor2)
}

/// Sample a cubic Bezier into polyline points, ending on `anchor2`.
pub fn flatten_cubic(
    anchor1: Point2D,
    control1: Point2D,
    control2: Point2D,
    anchor2: Point2D,
) -> Vec<Point2D> {
    let curve = CubicBez::new(anchor1, control1, control2, anchor2);
    sample(&curve, flatten_step(anchor1, anchor2), anchor1, anchor2)
}

fn sample(curve: &impl ParamCurve, step: f64, anchor1: Point2D, anchor2: Point2D) -> Vec<Point2D> {
    if !(step > 0.0 && step < 1.0) {
        return vec![anchor1, anchor2];
    }

    let mut out = Vec::with_capacity((1.0 / step).ceil() as usize + 1);
    let mut i = 0u32;
    loop {
        let t = f64::from(i) * step;
        if t >= 1.0 {
            break;
        }
        out.push(if i == 0 { anchor1 } else { curve.eval(t) });
        i += 1;
    }
    out.push(anchor2);
    out
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/curve.rs"]
mod tests;
