//! Keyframed tweeners resolved by GUID.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::foundation::core::{ColorMatrix, Matrix2D, Point2D};
use crate::foundation::error::{ShapecastError, ShapecastResult};
use crate::geometry::curve::CurveMode;
use crate::geometry::path::Path;
use crate::host::model::{Guid, HostShape, TweenDescriptor};
use crate::shape::model::{FilledShape, Region};

/// Easing curve applied toward the next keyframe.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ease {
    /// Constant speed.
    #[default]
    Linear,
    /// Starts slow, quadratic.
    InQuad,
    /// Ends slow, quadratic.
    OutQuad,
    /// Slow at both ends, quadratic.
    InOutQuad,
    /// Starts slow, cubic.
    InCubic,
    /// Ends slow, cubic.
    OutCubic,
    /// Slow at both ends, cubic.
    InOutCubic,
}

#[derive(Clone, Copy)]
enum EaseSide {
    In,
    Out,
    InOut,
}

impl Ease {
    fn curve(self) -> Option<(EaseSide, i32)> {
        match self {
            Self::Linear => None,
            Self::InQuad => Some((EaseSide::In, 2)),
            Self::OutQuad => Some((EaseSide::Out, 2)),
            Self::InOutQuad => Some((EaseSide::InOut, 2)),
            Self::InCubic => Some((EaseSide::In, 3)),
            Self::OutCubic => Some((EaseSide::Out, 3)),
            Self::InOutCubic => Some((EaseSide::InOut, 3)),
        }
    }

    /// Map normalized time `t` through the curve. `t` is clamped to `[0, 1]`.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        let Some((side, n)) = self.curve() else {
            return t;
        };
        match side {
            EaseSide::In => t.powi(n),
            EaseSide::Out => 1.0 - (1.0 - t).powi(n),
            // Both halves meet at (0.5, 0.5).
            EaseSide::InOut if t < 0.5 => 2f64.powi(n - 1) * t.powi(n),
            EaseSide::InOut => 1.0 - (2.0 - 2.0 * t).powi(n) / 2.0,
        }
    }
}

/// Linear interpolation between two values.
pub trait Lerp: Sized {
    /// Value at `t` between `a` (0) and `b` (1).
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a + (b - a) * t
    }
}

impl Lerp for Point2D {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a.lerp(*b, t)
    }
}

impl Lerp for Matrix2D {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        let f = |x: f64, y: f64| <f64 as Lerp>::lerp(&x, &y, t);
        Self {
            a: f(a.a, b.a),
            b: f(a.b, b.b),
            c: f(a.c, b.c),
            d: f(a.d, b.d),
            tx: f(a.tx, b.tx),
            ty: f(a.ty, b.ty),
        }
    }
}

impl Lerp for ColorMatrix {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        let mut out = *a;
        for i in 0..4 {
            out.mul[i] = <f64 as Lerp>::lerp(&a.mul[i], &b.mul[i], t);
            out.add[i] = <f64 as Lerp>::lerp(&a.add[i], &b.add[i], t);
        }
        out
    }
}

/// Pointwise when both paths have the same vertex count, otherwise holds `a`.
impl Lerp for Path {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        if a.len() != b.len() {
            return a.clone();
        }
        a.with_points(
            a.points()
                .iter()
                .zip(b.points())
                .map(|(p, q)| <Point2D as Lerp>::lerp(p, q, t))
                .collect(),
        )
    }
}

impl Lerp for Region {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        if a.holes.len() != b.holes.len() {
            return a.clone();
        }
        Self {
            contour: Path::lerp(&a.contour, &b.contour, t),
            holes: a
                .holes
                .iter()
                .zip(&b.holes)
                .map(|(h, k)| Path::lerp(h, k, t))
                .collect(),
            fill: a.fill,
        }
    }
}

impl Lerp for FilledShape {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        if a.fill.len() != b.fill.len() || a.stroke.len() != b.stroke.len() {
            return a.clone();
        }
        let regions = |x: &[Region], y: &[Region]| {
            x.iter()
                .zip(y)
                .map(|(r, s)| Region::lerp(r, s, t))
                .collect()
        };
        Self {
            fill: regions(&a.fill, &b.fill),
            stroke: regions(&a.stroke, &b.stroke),
        }
    }
}

/// One keyframe. Frames are positions within the owning timeline keyframe.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Keyframe<T> {
    /// Position within the keyframe span.
    pub frame: u32,
    /// Value reached at `frame`.
    pub value: T,
    /// Ease applied toward the next key.
    #[serde(default)]
    pub ease: Ease,
}

/// Interpolation between keys.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterpMode {
    /// Keep each key's value until the next key.
    Hold,
    /// Interpolate through [`Lerp`].
    #[default]
    Linear,
}

/// Sorted keyframe track.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Keyframes<T> {
    /// Keys sorted by frame.
    pub keys: Vec<Keyframe<T>>,
    /// Interpolation between keys.
    #[serde(default)]
    pub mode: InterpMode,
}

impl<T> Keyframes<T> {
    /// Require at least one key and keys sorted by frame.
    pub fn validate(&self) -> ShapecastResult<()> {
        if self.keys.is_empty() {
            return Err(ShapecastError::validation(
                "keyframes must have at least one key",
            ));
        }
        if !self.keys.windows(2).all(|w| w[0].frame <= w[1].frame) {
            return Err(ShapecastError::validation(
                "keyframes keys must be sorted by frame",
            ));
        }
        Ok(())
    }

    fn try_map<U>(&self, f: impl Fn(&T) -> ShapecastResult<U>) -> ShapecastResult<Keyframes<U>> {
        Ok(Keyframes {
            keys: self
                .keys
                .iter()
                .map(|k| {
                    Ok(Keyframe {
                        frame: k.frame,
                        value: f(&k.value)?,
                        ease: k.ease,
                    })
                })
                .collect::<ShapecastResult<Vec<_>>>()?,
            mode: self.mode,
        })
    }
}

impl<T> Keyframes<T>
where
    T: Lerp + Clone,
{
    /// Sample the track at `position`, clamping outside the key range.
    pub fn sample(&self, position: u32) -> ShapecastResult<T> {
        let (Some(first), Some(last)) = (self.keys.first(), self.keys.last()) else {
            return Err(ShapecastError::validation("keyframes has no keys"));
        };

        let idx = self.keys.partition_point(|k| k.frame <= position);
        if idx == 0 {
            return Ok(first.value.clone());
        }
        if idx >= self.keys.len() {
            return Ok(last.value.clone());
        }

        let a = &self.keys[idx - 1];
        let b = &self.keys[idx];
        let denom = b.frame.saturating_sub(a.frame);
        if denom == 0 {
            return Ok(a.value.clone());
        }

        let t = f64::from(position - a.frame) / f64::from(denom);
        let te = a.ease.apply(t);
        match self.mode {
            InterpMode::Hold => Ok(a.value.clone()),
            InterpMode::Linear => Ok(T::lerp(&a.value, &b.value, te)),
        }
    }
}

/// Tweener as stored in a document, keyed by GUID.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TweenerDef {
    /// Geometric delta transform.
    Matrix { keyframes: Keyframes<Matrix2D> },
    /// Color transform.
    Color { keyframes: Keyframes<ColorMatrix> },
    /// Shape geometry.
    Shape { keyframes: Keyframes<HostShape> },
}

/// All known tweeners, ready to be sampled.
#[derive(Clone, Debug, Default)]
pub struct TweenRegistry {
    matrix: HashMap<Guid, Keyframes<Matrix2D>>,
    color: HashMap<Guid, Keyframes<ColorMatrix>>,
    shape: HashMap<Guid, Keyframes<FilledShape>>,
}

impl TweenRegistry {
    /// Validate every tweener and convert shape keys with `mode`.
    pub fn from_defs(defs: &BTreeMap<Guid, TweenerDef>, mode: CurveMode) -> ShapecastResult<Self> {
        let mut registry = Self::default();
        for (guid, def) in defs {
            match def {
                TweenerDef::Matrix { keyframes } => {
                    keyframes.validate()?;
                    registry.matrix.insert(guid.clone(), keyframes.clone());
                }
                TweenerDef::Color { keyframes } => {
                    keyframes.validate()?;
                    registry.color.insert(guid.clone(), keyframes.clone());
                }
                TweenerDef::Shape { keyframes } => {
                    keyframes.validate()?;
                    let shapes = keyframes.try_map(|s| s.to_filled_shape(mode))?;
                    registry.shape.insert(guid.clone(), shapes);
                }
            }
        }
        Ok(registry)
    }

    /// Register a matrix tweener.
    pub fn insert_matrix(&mut self, guid: impl Into<Guid>, keyframes: Keyframes<Matrix2D>) {
        self.matrix.insert(guid.into(), keyframes);
    }

    /// Register a color tweener.
    pub fn insert_color(&mut self, guid: impl Into<Guid>, keyframes: Keyframes<ColorMatrix>) {
        self.color.insert(guid.into(), keyframes);
    }

    /// Register a shape tweener.
    pub fn insert_shape(&mut self, guid: impl Into<Guid>, keyframes: Keyframes<FilledShape>) {
        self.shape.insert(guid.into(), keyframes);
    }

    /// Look up the tweeners a keyframe refers to. Unknown GUIDs are ignored with a warning.
    pub fn resolve(&self, desc: &TweenDescriptor) -> ActiveTween<'_> {
        fn find<'a, T>(
            table: &'a HashMap<Guid, Keyframes<T>>,
            guid: Option<&Guid>,
            kind: &str,
        ) -> Option<&'a Keyframes<T>> {
            let guid = guid?;
            let found = table.get(guid);
            if found.is_none() {
                tracing::warn!(%guid, kind, "unknown tweener, tween ignored");
            }
            found
        }

        ActiveTween {
            matrix: find(&self.matrix, desc.matrix.as_ref(), "matrix"),
            color: find(&self.color, desc.color.as_ref(), "color"),
            shape: find(&self.shape, desc.shape.as_ref(), "shape"),
        }
    }
}

/// Tweeners active on one timeline keyframe.
#[derive(Clone, Copy, Debug, Default)]
pub struct ActiveTween<'a> {
    /// Delta transform track.
    pub matrix: Option<&'a Keyframes<Matrix2D>>,
    /// Color transform track.
    pub color: Option<&'a Keyframes<ColorMatrix>>,
    /// Shape geometry track.
    pub shape: Option<&'a Keyframes<FilledShape>>,
}

impl ActiveTween<'_> {
    /// Return `true` when no tweener is attached.
    pub fn is_empty(&self) -> bool {
        self.matrix.is_none() && self.color.is_none() && self.shape.is_none()
    }

    /// Delta transform at `position`.
    pub fn matrix_at(&self, position: u32) -> ShapecastResult<Option<Matrix2D>> {
        self.matrix.map(|k| k.sample(position)).transpose()
    }

    /// Color transform at `position`.
    pub fn color_at(&self, position: u32) -> ShapecastResult<Option<ColorMatrix>> {
        self.color.map(|k| k.sample(position)).transpose()
    }

    /// Interpolated shape at `position`.
    pub fn shape_at(&self, position: u32) -> ShapecastResult<Option<FilledShape>> {
        self.shape.map(|k| k.sample(position)).transpose()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/tween.rs"]
mod tests;
