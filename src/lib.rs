//! Shapecast converts authoring-tool vector shapes into runtime drawables.
//!
//! Each filled region is classified and emitted as a plain contour, a triangle mesh, or an
//! anti-aliased bitmap. Timeline frames are resolved into placement entries that reference
//! content-addressed resources:
//!
//! - Load and validate a [`Document`]
//! - Publish it into a [`PublishWriter`] with [`publish_document`], or drive a
//!   [`PublishSession`] directly
//! - Inspect the recorded output through [`InMemoryWriter`]
#![forbid(unsafe_code)]

mod foundation;

/// Host edges, curve flattening and point loops.
pub mod geometry;
/// Host document model and JSON loading.
pub mod host;
/// Session-oriented publishing API.
pub mod publish;
/// Region drawables: contours, triangle meshes, bitmaps.
pub mod render;
/// Content-addressed resource ids.
pub mod resources;
/// Regions, filled shapes and their encoding strategy.
pub mod shape;
/// Keyframes, tweens and per-frame placement entries.
pub mod timeline;

pub use crate::foundation::core::{
    Affine, BlendMode, Bound, ColorMatrix, Matrix2D, Point, Point2D, Rect, Rgba8, Vec2,
};
pub use crate::foundation::error::{ShapecastError, ShapecastResult};

pub use crate::geometry::curve::CurveMode;
pub use crate::geometry::path::Path;
pub use crate::geometry::segment::Segment;
pub use crate::host::document::Document;
pub use crate::publish::config::PublishConfig;
pub use crate::publish::publish_document;
pub use crate::publish::session::{PublishSession, PublishStats};
pub use crate::publish::writer::{FrameRecord, InMemoryWriter, PublishWriter, SymbolRecord};
pub use crate::render::item::{GraphicItem, ShapeGraphic};
pub use crate::render::shape_writer::ShapeWriter;
pub use crate::resources::cache::ResourceId;
pub use crate::shape::classify::{RegionStrategy, classify_region};
pub use crate::shape::model::{FillStyle, FilledShape, Region};
pub use crate::timeline::frame::FrameElementEntry;
