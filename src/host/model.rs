//! Serde data model of what the authoring tool hands over.
//!
//! A host adapter (or a JSON [`Document`](crate::host::document::Document)) fills these types
//! in; conversion into the geometry model happens through [`HostShape::to_filled_shape`].

use serde::{Deserialize, Serialize};

use crate::foundation::core::{BlendMode, Bound, ColorMatrix, Matrix2D, Rgba8};
use crate::foundation::error::{ShapecastError, ShapecastResult};
use crate::geometry::curve::CurveMode;
use crate::geometry::path::Path;
use crate::geometry::segment::Segment;
use crate::shape::model::{FilledShape, Region};

/// Tweener identifier.
pub type Guid = String;

/// One edge of a host path. The host can fail to report a segment.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HostEdge {
    #[serde(default)]
    pub segment: Option<Segment>,
}

impl From<Segment> for HostEdge {
    fn from(segment: Segment) -> Self {
        Self {
            segment: Some(segment),
        }
    }
}

/// Unordered edge list of one loop.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct HostPath {
    pub edges: Vec<HostEdge>,
}

impl HostPath {
    /// Stitch the edges into a [`Path`]. An edge without a segment is fatal.
    pub fn to_path(&self, mode: CurveMode) -> ShapecastResult<Path> {
        let segments = self
            .edges
            .iter()
            .enumerate()
            .map(|(i, e)| {
                e.segment
                    .ok_or_else(|| ShapecastError::geometry(format!("path edge {i} has no segment")))
            })
            .collect::<ShapecastResult<Vec<_>>>()?;
        Ok(Path::from_segments(&segments, mode))
    }
}

/// Fill style as reported by the host.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum HostFillStyle {
    Solid { color: Rgba8 },
    LinearGradient,
    RadialGradient,
    Bitmap,
}

impl HostFillStyle {
    fn name(&self) -> &'static str {
        match self {
            Self::Solid { .. } => "solid",
            Self::LinearGradient => "linear_gradient",
            Self::RadialGradient => "radial_gradient",
            Self::Bitmap => "bitmap",
        }
    }
}

/// Contour, holes and fill of one host region.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HostRegion {
    pub contour: HostPath,
    #[serde(default)]
    pub holes: Vec<HostPath>,
    pub fill: HostFillStyle,
}

impl HostRegion {
    /// Build the geometry region. Only solid fills are accepted.
    pub fn to_region(&self, mode: CurveMode) -> ShapecastResult<Region> {
        let HostFillStyle::Solid { color } = self.fill else {
            return Err(ShapecastError::unsupported_fill(self.fill.name()));
        };
        let contour = self.contour.to_path(mode)?;
        let holes = self
            .holes
            .iter()
            .map(|h| h.to_path(mode))
            .collect::<ShapecastResult<Vec<_>>>()?;
        Ok(Region::solid(contour, holes, color))
    }
}

/// Fill and stroke regions of a host shape.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct HostShape {
    #[serde(default)]
    pub fill: Vec<HostRegion>,
    #[serde(default)]
    pub stroke: Vec<HostRegion>,
}

impl HostShape {
    /// Convert every region; the first failure aborts the whole shape.
    pub fn to_filled_shape(&self, mode: CurveMode) -> ShapecastResult<FilledShape> {
        let convert = |regions: &[HostRegion]| {
            regions
                .iter()
                .map(|r| r.to_region(mode))
                .collect::<ShapecastResult<Vec<_>>>()
        };
        Ok(FilledShape {
            fill: convert(&self.fill)?,
            stroke: convert(&self.stroke)?,
        })
    }
}

/// Shape placed on a frame.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct HostShapeElement {
    #[serde(default)]
    pub matrix: Matrix2D,
    #[serde(flatten)]
    pub shape: HostShape,
}

/// Movie clip instance properties.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MovieClipProps {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub blend_mode: BlendMode,
}

/// Library symbol placed on a frame.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HostSymbolInstance {
    /// Library item name. An empty name cannot be resolved.
    pub library_item: String,
    #[serde(default)]
    pub matrix: Matrix2D,
    #[serde(default)]
    pub color: Option<ColorMatrix>,
    /// Present for movie clip instances only.
    #[serde(default)]
    pub movie_clip: Option<MovieClipProps>,
}

/// Line mode of a text field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineMode {
    #[default]
    Single,
    Multiline,
    MultilineNoWrap,
    Password,
}

/// Paragraph alignment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParagraphAlignment {
    #[default]
    Left,
    Center,
    Right,
    Justify,
}

/// Styled run of text.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HostTextRun {
    pub font_name: String,
    #[serde(default)]
    pub font_style: String,
    pub font_size: f64,
    pub font_color: Rgba8,
    #[serde(default)]
    pub auto_kern: bool,
}

impl Default for HostTextRun {
    fn default() -> Self {
        Self {
            font_name: String::new(),
            font_style: String::new(),
            font_size: 12.0,
            font_color: Rgba8::opaque(0, 0, 0),
            auto_kern: false,
        }
    }
}

/// Paragraph with its runs.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct HostParagraph {
    #[serde(default)]
    pub alignment: ParagraphAlignment,
    #[serde(default)]
    pub runs: Vec<HostTextRun>,
}

/// Graphic filter attached to a text field.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum HostFilter {
    Glow {
        color: Rgba8,
    },
    #[serde(other)]
    Other,
}

/// Classic text field.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HostTextField {
    #[serde(default)]
    pub matrix: Matrix2D,
    pub bound: Bound,
    #[serde(default)]
    pub text: String,
    /// Instance name, set for editable text fields.
    #[serde(default)]
    pub instance_name: String,
    #[serde(default)]
    pub line_mode: LineMode,
    #[serde(default)]
    pub anti_alias: String,
    #[serde(default)]
    pub paragraphs: Vec<HostParagraph>,
    #[serde(default)]
    pub filters: Vec<HostFilter>,
}

/// Content key of a text field resource. No layout is performed on it.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TextFieldStyle {
    pub text: String,
    pub font_name: String,
    pub font_style: String,
    pub font_size: f64,
    pub font_color: Rgba8,
    pub auto_kern: bool,
    pub line_mode: LineMode,
    pub alignment: ParagraphAlignment,
    pub anti_alias: String,
    pub bound: Bound,
    /// Glow filter color, rendered as an outline.
    pub outline: Option<Rgba8>,
}

impl HostTextField {
    /// Style of the first paragraph and its first run.
    pub fn style(&self) -> TextFieldStyle {
        if self.paragraphs.len() > 1 {
            tracing::warn!(
                paragraphs = self.paragraphs.len(),
                "text field has multiple paragraphs, using the first"
            );
        }
        let paragraph = self.paragraphs.first().cloned().unwrap_or_default();
        if paragraph.runs.len() > 1 {
            tracing::warn!(
                runs = paragraph.runs.len(),
                "text field has multiple text runs, using the first"
            );
        }
        let run = paragraph.runs.first().cloned().unwrap_or_default();
        let outline = self
            .filters
            .iter()
            .filter_map(|f| match f {
                HostFilter::Glow { color } => Some(*color),
                HostFilter::Other => None,
            })
            .last();

        TextFieldStyle {
            text: self.text.clone(),
            font_name: run.font_name,
            font_style: run.font_style,
            font_size: run.font_size,
            font_color: run.font_color,
            auto_kern: run.auto_kern,
            line_mode: self.line_mode,
            alignment: paragraph.alignment,
            anti_alias: self.anti_alias.clone(),
            bound: self.bound,
            outline,
        }
    }
}

/// Group of elements flattened in place.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct HostGroup {
    /// Reported by the host; members carry their own placement.
    #[serde(default)]
    pub matrix: Matrix2D,
    #[serde(default)]
    pub members: Vec<HostElement>,
}

/// Frame element.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum HostElement {
    Symbol(HostSymbolInstance),
    TextField(HostTextField),
    Shape(HostShapeElement),
    Group(HostGroup),
    #[serde(other)]
    Unsupported,
}

impl HostElement {
    /// Short lowercase name of the element kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Symbol(_) => "symbol",
            Self::TextField(_) => "text_field",
            Self::Shape(_) => "shape",
            Self::Group(_) => "group",
            Self::Unsupported => "unsupported",
        }
    }
}

/// Tweener GUIDs attached to a keyframe.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TweenDescriptor {
    #[serde(default)]
    pub matrix: Option<Guid>,
    #[serde(default)]
    pub color: Option<Guid>,
    #[serde(default)]
    pub shape: Option<Guid>,
}

/// Keyframe spanning `duration` timeline positions.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HostFrame {
    #[serde(default = "one")]
    pub duration: u32,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub tween: Option<TweenDescriptor>,
    #[serde(default)]
    pub elements: Vec<HostElement>,
}

impl Default for HostFrame {
    fn default() -> Self {
        Self {
            duration: 1,
            label: None,
            tween: None,
            elements: Vec::new(),
        }
    }
}

fn one() -> u32 {
    1
}

/// Library symbol with its timeline.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct HostSymbol {
    pub name: String,
    #[serde(default)]
    pub frames: Vec<HostFrame>,
    /// Scale-9 guide rectangle. When set, each filled-shape run of the symbol is exported as
    /// one sliced bitmap.
    #[serde(default)]
    pub scale9_grid: Option<Bound>,
}

#[cfg(test)]
#[path = "../../tests/unit/host/model.rs"]
mod tests;
