use serde::{Deserialize, Serialize};

pub use kurbo::{Affine, Point, Rect, Vec2};

/// Point in shape space. Equality is exact componentwise equality.
pub type Point2D = Point;

/// 2D affine transform `(a, b, c, d, tx, ty)`.
///
/// The layout matches [`Affine::as_coeffs`]: a point maps to
/// `(a*x + c*y + tx, b*x + d*y + ty)`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Matrix2D {
    /// X scale / rotation component.
    pub a: f64,
    /// Y skew / rotation component.
    pub b: f64,
    /// X skew / rotation component.
    pub c: f64,
    /// Y scale / rotation component.
    pub d: f64,
    /// X translation.
    pub tx: f64,
    /// Y translation.
    pub ty: f64,
}

impl Matrix2D {
    /// The identity transform.
    pub const IDENTITY: Self = Self {
        a: 1.0,
        b: 0.0,
        c: 0.0,
        d: 1.0,
        tx: 0.0,
        ty: 0.0,
    };

    /// Build a matrix from its six components.
    pub const fn new(a: f64, b: f64, c: f64, d: f64, tx: f64, ty: f64) -> Self {
        Self { a, b, c, d, tx, ty }
    }

    /// Pure translation.
    pub const fn translate(tx: f64, ty: f64) -> Self {
        Self::new(1.0, 0.0, 0.0, 1.0, tx, ty)
    }

    /// Convert to a `kurbo` affine.
    pub fn to_affine(self) -> Affine {
        Affine::new([self.a, self.b, self.c, self.d, self.tx, self.ty])
    }

    /// Convert from a `kurbo` affine.
    pub fn from_affine(affine: Affine) -> Self {
        let [a, b, c, d, tx, ty] = affine.as_coeffs();
        Self { a, b, c, d, tx, ty }
    }

    /// Map a point through this transform.
    pub fn transform_point(&self, p: Point2D) -> Point2D {
        Point2D::new(
            self.a * p.x + self.c * p.y + self.tx,
            self.b * p.x + self.d * p.y + self.ty,
        )
    }

    /// Return `true` when this is exactly the identity transform.
    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }
}

impl Default for Matrix2D {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Straight (non-premultiplied) RGBA8 color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Rgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Rgba8 {
    /// Build a color from its channels.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Fully opaque color.
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Channels in RGBA order.
    pub fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// Multiplicative + additive color transform applied per RGBA channel.
///
/// A channel maps to `clamp(c * mul + add, 0, 255)`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ColorMatrix {
    /// Per-channel multipliers in RGBA order.
    pub mul: [f64; 4],
    /// Per-channel offsets in RGBA order, in 0..255 units.
    pub add: [f64; 4],
}

impl ColorMatrix {
    /// The identity color transform.
    pub const IDENTITY: Self = Self {
        mul: [1.0; 4],
        add: [0.0; 4],
    };

    /// Apply the transform to a straight RGBA color.
    pub fn apply(&self, color: Rgba8) -> Rgba8 {
        let src = color.to_array();
        let mut out = [0u8; 4];
        for i in 0..4 {
            let v = f64::from(src[i]) * self.mul[i] + self.add[i];
            out[i] = v.round().clamp(0.0, 255.0) as u8;
        }
        Rgba8::new(out[0], out[1], out[2], out[3])
    }
}

impl Default for ColorMatrix {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Rectangle as reported by the authoring tool.
///
/// `top_left` and `bottom_right` are *not* guaranteed to hold the minimum and maximum corner;
/// the tool frequently reports them swapped. Use [`Bound::normalized`] before treating the value
/// as an axis-aligned min/max box.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bound {
    /// Corner named "top left" by the host.
    pub top_left: Point2D,
    /// Corner named "bottom right" by the host.
    pub bottom_right: Point2D,
}

impl Bound {
    /// Build a bound from the two host corners.
    pub const fn new(top_left: Point2D, bottom_right: Point2D) -> Self {
        Self {
            top_left,
            bottom_right,
        }
    }

    /// Tight bound of a point set, with `top_left` as the minimum corner.
    pub fn from_points<'a>(points: impl IntoIterator<Item = &'a Point2D>) -> Option<Self> {
        let mut iter = points.into_iter();
        let first = *iter.next()?;
        let (mut min, mut max) = (first, first);
        for p in iter {
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
        }
        Some(Self::new(min, max))
    }

    /// Return `true` when either axis has its corners inverted.
    pub fn is_inverted(&self) -> bool {
        self.top_left.x > self.bottom_right.x || self.top_left.y > self.bottom_right.y
    }

    /// Min/max rectangle with per-axis inversion corrected.
    pub fn normalized(&self) -> Rect {
        let (x0, x1) = if self.top_left.x > self.bottom_right.x {
            (self.bottom_right.x, self.top_left.x)
        } else {
            (self.top_left.x, self.bottom_right.x)
        };
        let (y0, y1) = if self.top_left.y > self.bottom_right.y {
            (self.bottom_right.y, self.top_left.y)
        } else {
            (self.top_left.y, self.bottom_right.y)
        };
        Rect::new(x0, y0, x1, y1)
    }

    /// Union of two bounds, normalized.
    pub fn union(&self, other: &Self) -> Self {
        let r = self.normalized().union(other.normalized());
        Self::new(Point2D::new(r.x0, r.y0), Point2D::new(r.x1, r.y1))
    }
}

/// Blend mode of a placed instance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlendMode {
    /// Normal source-over.
    #[default]
    Normal,
    /// Isolated layer.
    Layer,
    /// Multiply.
    Multiply,
    /// Screen.
    Screen,
    /// Lighten.
    Lighten,
    /// Darken.
    Darken,
    /// Difference.
    Difference,
    /// Additive.
    Add,
    /// Subtractive.
    Subtract,
    /// Invert.
    Invert,
    /// Alpha.
    Alpha,
    /// Erase.
    Erase,
    /// Overlay.
    Overlay,
    /// Hard light.
    HardLight,
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
