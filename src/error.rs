use thiserror::Error;

/// Top-level error type for the roofplan kernel.
#[derive(Debug, Error)]
pub enum RoofplanError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Skeleton(#[from] SkeletonError),

    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Errors related to geometric computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("polygon needs at least 3 vertices, got {count}")]
    TooFewVertices { count: usize },

    #[error("polygon is self-intersecting")]
    SelfIntersecting,

    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("no geometry to bound")]
    EmptyBounds,

    #[error("parameter {parameter} = {value} is out of range [{min}, {max})")]
    ParameterOutOfRange {
        parameter: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
}

/// Errors related to the skeleton graph.
#[derive(Debug, Error)]
pub enum SkeletonError {
    #[error("skeleton construction failed: {0}")]
    ConstructionFailed(String),

    #[error("entity not found: {0}")]
    EntityNotFound(&'static str),

    #[error("invalid face: {0}")]
    InvalidFace(String),
}

/// Errors related to diagram output.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to write diagram: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for results using [`RoofplanError`].
pub type Result<T> = std::result::Result<T, RoofplanError>;
