//! Session-scoped, content-addressed resource ids.

use std::collections::HashMap;

use serde::Serialize;
use smallvec::SmallVec;

use crate::foundation::error::{ShapecastError, ShapecastResult};
use crate::host::model::TextFieldStyle;
use crate::render::slice::SliceGuides;
use crate::resources::fingerprint::fingerprint_key;
use crate::shape::model::FilledShape;

/// Identifier of an emitted resource. `u16::MAX` is reserved as invalid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ResourceId(pub u16);

impl ResourceId {
    /// Reserved invalid id.
    pub const INVALID: Self = Self(u16::MAX);

    /// Return `true` unless this is [`ResourceId::INVALID`].
    pub fn is_valid(self) -> bool {
        self != Self::INVALID
    }
}

/// Content a resource id is keyed on.
#[derive(Clone, Debug, PartialEq)]
pub enum ResourceKey {
    /// Combined run of filled shapes.
    Shapes(Vec<FilledShape>),
    /// Combined run exported as one 9-slice bitmap.
    Sliced {
        /// Shapes composited onto the bitmap.
        shapes: Vec<FilledShape>,
        /// Slice guides attached to the bitmap.
        guides: SliceGuides,
    },
    /// Text field style.
    TextField(TextFieldStyle),
    /// Library item by name.
    LibraryItem(String),
}

impl ResourceKey {
    /// Shapes of a shape or sliced key; empty for other kinds.
    pub fn shapes(&self) -> &[FilledShape] {
        match self {
            Self::Shapes(shapes) | Self::Sliced { shapes, .. } => shapes,
            Self::TextField(_) | Self::LibraryItem(_) => &[],
        }
    }
}

/// First insertion wins; structurally equal content maps to the same id. Never evicts.
#[derive(Debug, Default)]
pub struct ResourceCache {
    entries: Vec<(ResourceKey, ResourceId)>,
    index: HashMap<u64, SmallVec<[usize; 2]>>,
    next_id: u16,
}

impl ResourceCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Id of content equal to `key`, if any.
    pub fn lookup(&self, key: &ResourceKey) -> Option<ResourceId> {
        let slots = self.index.get(&fingerprint_key(key))?;
        slots
            .iter()
            .map(|&i| &self.entries[i])
            .find(|(k, _)| k == key)
            .map(|(_, id)| *id)
    }

    /// Return the id for `key`, inserting it if new. The flag is `true` for a fresh insertion.
    pub fn get_or_insert(&mut self, key: ResourceKey) -> ShapecastResult<(ResourceId, bool)> {
        if let Some(id) = self.lookup(&key) {
            return Ok((id, false));
        }

        let id = self.allocate()?;
        let fp = fingerprint_key(&key);
        self.index.entry(fp).or_default().push(self.entries.len());
        self.entries.push((key, id));
        Ok((id, true))
    }

    /// Allocate an id that is never shared with other content.
    pub fn insert_unique(&mut self) -> ShapecastResult<ResourceId> {
        self.allocate()
    }

    /// Number of allocated ids.
    pub fn len(&self) -> usize {
        usize::from(self.next_id)
    }

    /// Return `true` when no id was allocated yet.
    pub fn is_empty(&self) -> bool {
        self.next_id == 0
    }

    fn allocate(&mut self) -> ShapecastResult<ResourceId> {
        let id = ResourceId(self.next_id);
        if !id.is_valid() {
            return Err(ShapecastError::resource("resource id space exhausted"));
        }
        self.next_id += 1;
        Ok(id)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/resources/cache.rs"]
mod tests;
