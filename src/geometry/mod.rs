/// Edge stitching into ordered point chains.
pub mod chain;
/// Bezier flattening.
pub mod curve;
/// Immutable point loops.
pub mod path;
/// Host edge segments.
pub mod segment;
