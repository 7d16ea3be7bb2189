pub mod markers;
pub mod ridge;
pub mod svg;
pub mod transform;
pub mod unfolded;

pub use markers::MarkerSet;
pub use ridge::RidgeView;
pub use transform::CanvasTransform;
pub use unfolded::UnfoldedView;

/// Canvas background color.
pub(crate) const BACKGROUND_FILL: &str = "#f8f8f8";

/// Fill for faces classified as marked.
pub(crate) const MARKED_FILL: &str = "#9e9e9e";

/// Fill for ordinary faces.
pub(crate) const DEFAULT_FILL: &str = "#e3f2fd";

/// Stroke for the footprint outline, contour vertices, and unfolded edge
/// loops.
pub(crate) const OUTLINE_STROKE: &str = "#1976d2";

/// Stroke for ridge lines and fill for interior skeleton vertices.
pub(crate) const RIDGE_STROKE: &str = "#d32f2f";

/// Stroke around each unfolded face polygon.
pub(crate) const FACE_EDGE_STROKE: &str = "#666";
