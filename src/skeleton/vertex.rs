use crate::math::Point2;

slotmap::new_key_type! {
    /// Unique identifier for a vertex in the skeleton graph.
    pub struct SkeletonVertexId;
}

/// Data associated with a skeleton graph vertex.
#[derive(Debug, Clone)]
pub struct SkeletonVertexData {
    /// World-space position of the vertex.
    pub point: Point2,
    /// `true` for interior skeleton nodes, `false` for contour vertices.
    pub is_skeleton: bool,
    /// Inward offset distance at which the node was generated.
    ///
    /// Zero for contour vertices.
    pub time: f64,
}

impl SkeletonVertexData {
    /// Creates a vertex on the original boundary (time zero).
    #[must_use]
    pub fn contour(point: Point2) -> Self {
        Self {
            point,
            is_skeleton: false,
            time: 0.0,
        }
    }

    /// Creates an interior skeleton vertex generated at offset `time`.
    #[must_use]
    pub fn skeleton(point: Point2, time: f64) -> Self {
        Self {
            point,
            is_skeleton: true,
            time,
        }
    }
}
