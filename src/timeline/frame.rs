//! Per-keyframe element processing.
//!
//! A [`FrameBuilder`] walks a keyframe's elements once, resolving resource ids and batching
//! filled shapes into runs, then releases placement entries for every timeline position the
//! keyframe spans, sampling any attached tweens.

use serde::Serialize;

use crate::foundation::core::{BlendMode, ColorMatrix, Matrix2D};
use crate::foundation::error::{ShapecastError, ShapecastResult};
use crate::geometry::curve::CurveMode;
use crate::host::model::{HostElement, HostFrame};
use crate::publish::config::PublishConfig;
use crate::publish::session::PublishSession;
use crate::render::slice::SliceGuides;
use crate::resources::cache::ResourceId;
use crate::timeline::aggregate::FilledRun;
use crate::timeline::interp::{resolve_color, resolve_matrix};
use crate::timeline::tween::{ActiveTween, TweenRegistry};

/// One placed instance on a timeline frame.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FrameElementEntry {
    /// Resource placed.
    pub id: ResourceId,
    /// Blend mode of the instance.
    pub blend_mode: BlendMode,
    /// Instance name; empty when unnamed.
    pub instance_name: String,
    /// Placement transform.
    pub matrix: Option<Matrix2D>,
    /// Color transform.
    pub color: Option<ColorMatrix>,
}

/// Element resolved on a keyframe, before tween sampling.
#[derive(Clone, Debug)]
struct ElementSlot {
    entry: FrameElementEntry,
    /// Placeholder standing for a combined filled-shape run.
    filled_run: bool,
}

/// Resolves the elements of one keyframe at a time.
#[derive(Debug)]
pub struct FrameBuilder<'t> {
    mode: CurveMode,
    compose_run_transforms: bool,
    slice_guides: Option<SliceGuides>,
    duration: u32,
    label: Option<String>,
    tween: ActiveTween<'t>,
    slots: Vec<ElementSlot>,
    run: FilledRun,
}

impl<'t> FrameBuilder<'t> {
    /// Create a builder using the session options in `config`.
    pub fn new(config: &PublishConfig) -> Self {
        Self {
            mode: config.curve_mode(),
            compose_run_transforms: config.compose_run_transforms,
            slice_guides: None,
            duration: 0,
            label: None,
            tween: ActiveTween::default(),
            slots: Vec::new(),
            run: FilledRun::default(),
        }
    }

    /// Export filled-shape runs as sliced bitmaps carrying `guides`.
    pub fn with_slice_guides(mut self, guides: Option<SliceGuides>) -> Self {
        self.slice_guides = guides;
        self
    }

    /// Timeline positions spanned by the current keyframe.
    pub fn duration(&self) -> u32 {
        self.duration
    }

    /// Label of the current keyframe.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Number of placed instances per frame.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Return `true` when the keyframe places nothing.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Load `frame`, resolving every element against the session.
    pub fn update(
        &mut self,
        session: &mut PublishSession<'_>,
        frame: &HostFrame,
        tweens: &'t TweenRegistry,
    ) -> ShapecastResult<()> {
        self.duration = frame.duration;
        self.label = frame.label.clone();
        self.slots.clear();
        self.run.clear();
        self.tween = frame
            .tween
            .as_ref()
            .map(|t| tweens.resolve(t))
            .unwrap_or_default();

        self.add_elements(session, &frame.elements)?;
        self.flush_run(session)
    }

    fn add_elements(
        &mut self,
        session: &mut PublishSession<'_>,
        elements: &[HostElement],
    ) -> ShapecastResult<()> {
        for element in elements {
            let resolved = match element {
                HostElement::Shape(shape) => {
                    let filled = shape.shape.to_filled_shape(self.mode)?;
                    self.run.push(filled, shape.matrix);
                    continue;
                }
                HostElement::Group(group) => {
                    self.add_elements(session, &group.members)?;
                    continue;
                }
                HostElement::Unsupported => {
                    tracing::trace!("unsupported frame element skipped");
                    session.note_skipped_element();
                    continue;
                }
                HostElement::Symbol(instance) => {
                    let (instance_name, blend_mode) = instance
                        .movie_clip
                        .as_ref()
                        .map(|mc| (mc.name.clone(), mc.blend_mode))
                        .unwrap_or_default();
                    session
                        .resolve_library_item(&instance.library_item)
                        .map(|id| {
                            id.map(|id| FrameElementEntry {
                                id,
                                blend_mode,
                                instance_name,
                                matrix: Some(instance.matrix),
                                color: instance.color,
                            })
                        })
                }
                HostElement::TextField(text) => {
                    let style = text.style();
                    session.resolve_text_field(&style).map(|id| {
                        Some(FrameElementEntry {
                            id,
                            blend_mode: BlendMode::Normal,
                            instance_name: text.instance_name.clone(),
                            matrix: Some(text.matrix),
                            color: None,
                        })
                    })
                }
            };

            self.flush_run(session)?;

            match resolved {
                Ok(Some(entry)) => self.slots.push(ElementSlot {
                    entry,
                    filled_run: false,
                }),
                Ok(None) => {
                    tracing::trace!(kind = element.kind(), "element has no resource id, skipped");
                    session.note_skipped_element();
                }
                Err(ShapecastError::Resource(msg)) => {
                    tracing::trace!(kind = element.kind(), %msg, "element id unavailable, skipped");
                    session.note_skipped_element();
                }
                Err(e) => return Err(e),
            }
        }
        Ok(())
    }

    fn flush_run(&mut self, session: &mut PublishSession<'_>) -> ShapecastResult<()> {
        if self.run.is_empty() {
            return Ok(());
        }
        let shapes = self.run.take(self.compose_run_transforms);
        // A shape tween replaces the run on every frame, so the run itself is never placed.
        let resolved = if self.tween.shape.is_some() {
            Ok(ResourceId::INVALID)
        } else {
            match self.slice_guides {
                Some(guides) => session.resolve_sliced_shapes(shapes, guides),
                None => session.resolve_shapes(shapes),
            }
        };
        match resolved {
            Ok(id) => {
                self.slots.push(ElementSlot {
                    entry: FrameElementEntry {
                        id,
                        blend_mode: BlendMode::Normal,
                        instance_name: String::new(),
                        matrix: None,
                        color: None,
                    },
                    filled_run: true,
                });
                Ok(())
            }
            Err(ShapecastError::Resource(msg)) => {
                tracing::trace!(%msg, "filled run id unavailable, skipped");
                session.note_skipped_element();
                Ok(())
            }
            Err(e) => Err(e),
        }
    }

    /// Entries at `position` within the keyframe, last processed element first.
    pub fn entries_at(
        &self,
        session: &mut PublishSession<'_>,
        position: u32,
    ) -> ShapecastResult<Vec<FrameElementEntry>> {
        let delta = self.tween.matrix_at(position)?;
        let tween_color = self.tween.color_at(position)?;
        let tween_shape = self.tween.shape_at(position)?;

        let mut entries = Vec::with_capacity(self.slots.len());
        for slot in self.slots.iter().rev() {
            let mut entry = slot.entry.clone();
            if let (true, Some(shape)) = (slot.filled_run, &tween_shape) {
                entry.id = session
                    .publish_unique_shapes(std::slice::from_ref(shape), self.slice_guides)?;
            }
            entry.matrix = resolve_matrix(entry.matrix.as_ref(), delta.as_ref());
            entry.color = resolve_color(entry.color.as_ref(), tween_color);
            entries.push(entry);
        }
        Ok(entries)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/frame.rs"]
mod tests;
