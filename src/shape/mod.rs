/// Per-region encoding decisions.
pub mod classify;
/// Regions and filled shapes.
pub mod model;
