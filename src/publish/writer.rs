use serde::Serialize;

use crate::foundation::error::{ShapecastError, ShapecastResult};
use crate::host::model::TextFieldStyle;
use crate::render::item::ShapeGraphic;
use crate::resources::cache::ResourceId;
use crate::timeline::frame::FrameElementEntry;

/// One timeline frame as handed to a writer.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct FrameRecord {
    /// Label, set on the first frame of a labelled keyframe.
    pub label: Option<String>,
    /// Placed instances in emission order (reverse of processing order).
    pub entries: Vec<FrameElementEntry>,
}

/// Writer contract for consuming published resources and timelines.
///
/// Ordering contract: every resource is written before the first frame that references it, and
/// frames of a symbol arrive between `begin_symbol` and `end_symbol`.
pub trait PublishWriter {
    /// A new shape resource.
    fn write_shape(&mut self, id: ResourceId, graphic: ShapeGraphic) -> ShapecastResult<()>;
    /// A new text field resource.
    fn write_text_field(&mut self, id: ResourceId, style: &TextFieldStyle) -> ShapecastResult<()>;
    /// First reference to a library item.
    fn write_library_item(&mut self, id: ResourceId, name: &str) -> ShapecastResult<()>;
    /// Start of a symbol timeline.
    fn begin_symbol(&mut self, id: ResourceId, name: &str) -> ShapecastResult<()>;
    /// One timeline frame of the current symbol.
    fn write_frame(&mut self, frame: FrameRecord) -> ShapecastResult<()>;
    /// End of the current symbol timeline.
    fn end_symbol(&mut self) -> ShapecastResult<()>;
}

/// Published symbol timeline.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SymbolRecord {
    /// Library item id of the symbol.
    pub id: ResourceId,
    /// Symbol name.
    pub name: String,
    /// Frames in timeline order.
    pub frames: Vec<FrameRecord>,
}

/// In-memory writer for tests and debugging.
#[derive(Debug, Default)]
pub struct InMemoryWriter {
    /// Shape resources in write order.
    pub shapes: Vec<(ResourceId, ShapeGraphic)>,
    /// Text field resources in write order.
    pub text_fields: Vec<(ResourceId, TextFieldStyle)>,
    /// Library items in first-reference order.
    pub library_items: Vec<(ResourceId, String)>,
    /// Completed symbol timelines.
    pub symbols: Vec<SymbolRecord>,
    current: Option<SymbolRecord>,
}

impl InMemoryWriter {
    /// Create an empty writer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Shape graphic written under `id`.
    pub fn shape(&self, id: ResourceId) -> Option<&ShapeGraphic> {
        self.shapes.iter().find(|(i, _)| *i == id).map(|(_, g)| g)
    }

    /// Completed symbol named `name`.
    pub fn symbol(&self, name: &str) -> Option<&SymbolRecord> {
        self.symbols.iter().find(|s| s.name == name)
    }
}

impl PublishWriter for InMemoryWriter {
    fn write_shape(&mut self, id: ResourceId, graphic: ShapeGraphic) -> ShapecastResult<()> {
        self.shapes.push((id, graphic));
        Ok(())
    }

    fn write_text_field(&mut self, id: ResourceId, style: &TextFieldStyle) -> ShapecastResult<()> {
        self.text_fields.push((id, style.clone()));
        Ok(())
    }

    fn write_library_item(&mut self, id: ResourceId, name: &str) -> ShapecastResult<()> {
        self.library_items.push((id, name.to_owned()));
        Ok(())
    }

    fn begin_symbol(&mut self, id: ResourceId, name: &str) -> ShapecastResult<()> {
        self.current = Some(SymbolRecord {
            id,
            name: name.to_owned(),
            frames: Vec::new(),
        });
        Ok(())
    }

    fn write_frame(&mut self, frame: FrameRecord) -> ShapecastResult<()> {
        match self.current.as_mut() {
            Some(sym) => {
                sym.frames.push(frame);
                Ok(())
            }
            None => Err(ShapecastError::validation(
                "write_frame called outside of a symbol",
            )),
        }
    }

    fn end_symbol(&mut self) -> ShapecastResult<()> {
        if let Some(sym) = self.current.take() {
            self.symbols.push(sym);
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/publish/writer.rs"]
mod tests;
