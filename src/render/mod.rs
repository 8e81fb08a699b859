pub mod composite;
pub mod item;
pub mod raster;
pub mod shape_writer;
pub mod slice;
pub mod triangulate;
