use crate::foundation::core::Matrix2D;
use crate::shape::model::FilledShape;

/// Shape waiting in a run, with the transform it was placed with.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct PendingShape {
    pub(crate) shape: FilledShape,
    pub(crate) transform: Matrix2D,
}

/// Consecutive fill/stroke shapes batched into one resource.
#[derive(Clone, Debug, Default)]
pub(crate) struct FilledRun {
    pending: Vec<PendingShape>,
}

impl FilledRun {
    pub(crate) fn push(&mut self, shape: FilledShape, transform: Matrix2D) {
        self.pending.push(PendingShape { shape, transform });
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub(crate) fn clear(&mut self) {
        self.pending.clear();
    }

    /// Drain the run into the combined resource content.
    ///
    /// Element transforms are dropped unless `compose_transforms` is set, in which case each
    /// shape is mapped through its own transform first.
    pub(crate) fn take(&mut self, compose_transforms: bool) -> Vec<FilledShape> {
        self.pending
            .drain(..)
            .map(|p| {
                if compose_transforms && !p.transform.is_identity() {
                    p.shape.transformed(&p.transform)
                } else {
                    p.shape
                }
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/aggregate.rs"]
mod tests;
