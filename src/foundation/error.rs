/// Convenience result type used across shapecast.
pub type ShapecastResult<T> = Result<T, ShapecastError>;

/// Top-level error taxonomy used by the publishing pipeline.
#[derive(thiserror::Error, Debug)]
pub enum ShapecastError {
    /// Invalid host-provided data or configuration.
    #[error("validation error: {0}")]
    Validation(String),

    /// Geometry that cannot be turned into a path or mesh.
    #[error("geometry error: {0}")]
    Geometry(String),

    /// A region uses a fill style the pipeline cannot encode.
    #[error("unsupported fill style: {0}")]
    UnsupportedFill(String),

    /// Failures while producing a bitmap for a region.
    #[error("raster error: {0}")]
    Raster(String),

    /// Resource cache failures (for example an exhausted id space).
    #[error("resource error: {0}")]
    Resource(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ShapecastError {
    /// Build a [`ShapecastError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ShapecastError::Geometry`] value.
    pub fn geometry(msg: impl Into<String>) -> Self {
        Self::Geometry(msg.into())
    }

    /// Build a [`ShapecastError::UnsupportedFill`] value.
    pub fn unsupported_fill(msg: impl Into<String>) -> Self {
        Self::UnsupportedFill(msg.into())
    }

    /// Build a [`ShapecastError::Raster`] value.
    pub fn raster(msg: impl Into<String>) -> Self {
        Self::Raster(msg.into())
    }

    /// Build a [`ShapecastError::Resource`] value.
    pub fn resource(msg: impl Into<String>) -> Self {
        Self::Resource(msg.into())
    }

    /// Build a [`ShapecastError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Return `true` for errors that abort the conversion of a whole shape.
    pub fn is_shape_fatal(&self) -> bool {
        matches!(self, Self::Geometry(_) | Self::UnsupportedFill(_))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
