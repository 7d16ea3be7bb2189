use super::vertex::SkeletonVertexId;

slotmap::new_key_type! {
    /// Unique identifier for a face in the skeleton graph.
    pub struct SkeletonFaceId;
}

/// Data associated with a skeleton face.
///
/// The vertex list is the face boundary in cyclic traversal order; the last
/// vertex connects back to the first.
#[derive(Debug, Clone)]
pub struct SkeletonFaceData {
    /// Boundary vertices in cyclic order.
    pub vertices: Vec<SkeletonVertexId>,
}
