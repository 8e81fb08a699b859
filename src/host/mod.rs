mod color;
pub mod document;
pub mod model;
