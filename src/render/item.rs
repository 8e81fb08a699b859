use crate::foundation::core::{Point2D, Rgba8};
use crate::render::raster::Bitmap;
use crate::render::slice::SliceGuides;
use crate::render::triangulate::TriangleFan;

/// One drawable produced for a shape resource.
#[derive(Clone, Debug, PartialEq)]
pub enum GraphicItem {
    /// Plain polygon with a solid color.
    Contour {
        /// Polygon points in order.
        points: Vec<Point2D>,
        /// Fill color.
        color: Rgba8,
    },
    /// Triangle fans sharing one solid color.
    Triangles {
        /// Triangles, each `(p0, p1, p2, p2)`.
        triangles: Vec<TriangleFan>,
        /// Fill color.
        color: Rgba8,
    },
    /// Straight-alpha bitmap placed by a translation.
    Bitmap(Bitmap),
    /// 9-slice scalable bitmap.
    Sliced {
        /// Composited bitmap.
        bitmap: Bitmap,
        /// Slice guides in pixels.
        guides: SliceGuides,
    },
}

impl GraphicItem {
    /// Short lowercase name of the item kind, for logs and manifests.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Contour { .. } => "contour",
            Self::Triangles { .. } => "triangles",
            Self::Bitmap(_) => "bitmap",
            Self::Sliced { .. } => "sliced",
        }
    }
}

/// Ordered drawables making up one shape resource.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ShapeGraphic {
    /// Items in draw order.
    pub items: Vec<GraphicItem>,
}

impl ShapeGraphic {
    /// Return `true` when nothing drawable was produced.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
