use crate::foundation::error::{ShapecastError, ShapecastResult};
use crate::host::model::{HostSymbol, TextFieldStyle};
use crate::publish::config::PublishConfig;
use crate::publish::writer::{FrameRecord, PublishWriter};
use crate::render::item::ShapeGraphic;
use crate::render::shape_writer::ShapeWriter;
use crate::render::slice::SliceGuides;
use crate::resources::cache::{ResourceCache, ResourceId, ResourceKey};
use crate::shape::model::FilledShape;
use crate::timeline::symbol::build_timeline;
use crate::timeline::tween::TweenRegistry;

/// Publish statistics.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PublishStats {
    /// Shape resources written.
    pub shapes: u64,
    /// Text field resources written.
    pub text_fields: u64,
    /// Library items announced.
    pub library_items: u64,
    /// Symbol timelines written.
    pub symbols: u64,
    /// Timeline frames written.
    pub frames: u64,
    /// Frame elements skipped (unsupported or unresolvable).
    pub skipped_elements: u64,
}

/// Publishing state shared by every component for one export.
///
/// Owns the content-addressed resource cache; every resource is written exactly once, the first
/// time its content is seen.
pub struct PublishSession<'w> {
    config: PublishConfig,
    cache: ResourceCache,
    writer: &'w mut dyn PublishWriter,
    stats: PublishStats,
}

impl<'w> PublishSession<'w> {
    /// Start a session writing into `writer`.
    pub fn new(config: PublishConfig, writer: &'w mut dyn PublishWriter) -> ShapecastResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            cache: ResourceCache::new(),
            writer,
            stats: PublishStats::default(),
        })
    }

    /// Session options.
    pub fn config(&self) -> &PublishConfig {
        &self.config
    }

    /// Statistics so far.
    pub fn stats(&self) -> PublishStats {
        self.stats
    }

    /// Id of a combined shape run, rendering and writing it on first sight.
    pub fn resolve_shapes(&mut self, shapes: Vec<FilledShape>) -> ShapecastResult<ResourceId> {
        self.resolve_graphic(ResourceKey::Shapes(shapes))
    }

    /// Id of a shape run exported as one 9-slice bitmap, writing it on first sight.
    pub fn resolve_sliced_shapes(
        &mut self,
        shapes: Vec<FilledShape>,
        guides: SliceGuides,
    ) -> ShapecastResult<ResourceId> {
        self.resolve_graphic(ResourceKey::Sliced { shapes, guides })
    }

    /// Write shapes under a fresh id that is never deduplicated.
    ///
    /// With `guides` the shapes become one sliced bitmap.
    pub fn publish_unique_shapes(
        &mut self,
        shapes: &[FilledShape],
        guides: Option<SliceGuides>,
    ) -> ShapecastResult<ResourceId> {
        let graphic = self.render_shapes(shapes, guides)?;
        let id = self.cache.insert_unique()?;
        self.write_shape(id, graphic)?;
        Ok(id)
    }

    /// Id of a text field style, writing it on first sight.
    pub fn resolve_text_field(&mut self, style: &TextFieldStyle) -> ShapecastResult<ResourceId> {
        let (id, fresh) = self
            .cache
            .get_or_insert(ResourceKey::TextField(style.clone()))?;
        if fresh {
            self.writer.write_text_field(id, style)?;
            self.stats.text_fields += 1;
        }
        Ok(id)
    }

    /// Id of a library item, announcing it on first reference. An empty name has no id.
    pub fn resolve_library_item(&mut self, name: &str) -> ShapecastResult<Option<ResourceId>> {
        if name.is_empty() {
            return Ok(None);
        }
        let (id, fresh) = self
            .cache
            .get_or_insert(ResourceKey::LibraryItem(name.to_owned()))?;
        if fresh {
            self.writer.write_library_item(id, name)?;
            self.stats.library_items += 1;
        }
        Ok(Some(id))
    }

    /// Publish a symbol timeline under its library item id.
    #[tracing::instrument(skip_all, fields(symbol = %symbol.name))]
    pub fn publish_symbol(
        &mut self,
        symbol: &HostSymbol,
        tweens: &TweenRegistry,
    ) -> ShapecastResult<ResourceId> {
        let id = self.resolve_library_item(&symbol.name)?.ok_or_else(|| {
            ShapecastError::validation("symbol name must not be empty")
        })?;
        self.writer.begin_symbol(id, &symbol.name)?;
        build_timeline(self, symbol, tweens)?;
        self.writer.end_symbol()?;
        self.stats.symbols += 1;
        tracing::debug!(id = id.0, frames = symbol.frames.len(), "published symbol");
        Ok(id)
    }

    /// Hand one timeline frame to the writer.
    pub fn write_frame(&mut self, frame: FrameRecord) -> ShapecastResult<()> {
        self.writer.write_frame(frame)?;
        self.stats.frames += 1;
        Ok(())
    }

    pub(crate) fn note_skipped_element(&mut self) {
        self.stats.skipped_elements += 1;
    }

    /// Consume the session.
    pub fn finish(self) -> PublishStats {
        tracing::debug!(resources = self.cache.len(), "publish session finished");
        self.stats
    }

    fn resolve_graphic(&mut self, key: ResourceKey) -> ShapecastResult<ResourceId> {
        if let Some(id) = self.cache.lookup(&key) {
            return Ok(id);
        }
        let guides = match &key {
            ResourceKey::Sliced { guides, .. } => Some(*guides),
            _ => None,
        };
        let graphic = self.render_shapes(key.shapes(), guides)?;
        let (id, _) = self.cache.get_or_insert(key)?;
        self.write_shape(id, graphic)?;
        Ok(id)
    }

    fn render_shapes(
        &self,
        shapes: &[FilledShape],
        guides: Option<SliceGuides>,
    ) -> ShapecastResult<ShapeGraphic> {
        let mut w = ShapeWriter::new(self.config.rasterizer());
        match guides {
            Some(guides) => w.add_sliced(shapes, guides)?,
            None => {
                for shape in shapes {
                    w.add_filled_shape(shape)?;
                }
            }
        }
        Ok(w.finish())
    }

    fn write_shape(&mut self, id: ResourceId, graphic: ShapeGraphic) -> ShapecastResult<()> {
        tracing::trace!(id = id.0, items = graphic.items.len(), "writing shape");
        self.writer.write_shape(id, graphic)?;
        self.stats.shapes += 1;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/publish/session.rs"]
mod tests;
