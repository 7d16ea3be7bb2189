pub mod face;
pub mod vertex;

pub use face::{SkeletonFaceData, SkeletonFaceId};
pub use vertex::{SkeletonVertexData, SkeletonVertexId};

use std::collections::HashSet;

use slotmap::SlotMap;

use crate::error::SkeletonError;
use crate::geometry::Footprint;
use crate::math::Point2;

/// Planar subdivision produced by an interior straight-skeleton construction.
///
/// Vertices and faces live in append-only arenas addressed by typed keys
/// (generational indices); faces store ordered vertex id lists. Entities are
/// never removed, so arena iteration order matches insertion order and the
/// graph is read-only for the rest of the pipeline once built.
#[derive(Debug, Default)]
pub struct SkeletonGraph {
    vertices: SlotMap<SkeletonVertexId, SkeletonVertexData>,
    faces: SlotMap<SkeletonFaceId, SkeletonFaceData>,
}

impl SkeletonGraph {
    /// Creates a new, empty skeleton graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a contour vertex and returns its id.
    pub fn add_contour_vertex(&mut self, point: Point2) -> SkeletonVertexId {
        self.vertices.insert(SkeletonVertexData::contour(point))
    }

    /// Inserts an interior skeleton vertex and returns its id.
    pub fn add_skeleton_vertex(&mut self, point: Point2, time: f64) -> SkeletonVertexId {
        self.vertices.insert(SkeletonVertexData::skeleton(point, time))
    }

    /// Inserts a face with the given cyclic boundary.
    ///
    /// # Errors
    ///
    /// Returns `SkeletonError::InvalidFace` if the boundary has fewer than 3
    /// vertices or references an unknown vertex id.
    pub fn add_face(
        &mut self,
        boundary: &[SkeletonVertexId],
    ) -> Result<SkeletonFaceId, SkeletonError> {
        if boundary.len() < 3 {
            return Err(SkeletonError::InvalidFace(format!(
                "face boundary needs at least 3 vertices, got {}",
                boundary.len()
            )));
        }
        if boundary.iter().any(|id| !self.vertices.contains_key(*id)) {
            return Err(SkeletonError::InvalidFace(
                "face references unknown vertex".to_owned(),
            ));
        }
        Ok(self.faces.insert(SkeletonFaceData {
            vertices: boundary.to_vec(),
        }))
    }

    /// Returns a reference to the vertex data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the vertex is not in the graph.
    pub fn vertex(&self, id: SkeletonVertexId) -> Result<&SkeletonVertexData, SkeletonError> {
        self.vertices
            .get(id)
            .ok_or(SkeletonError::EntityNotFound("vertex"))
    }

    /// Iterates all vertices in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = (SkeletonVertexId, &SkeletonVertexData)> {
        self.vertices.iter()
    }

    /// Iterates all faces in insertion order.
    pub fn faces(&self) -> impl Iterator<Item = (SkeletonFaceId, &SkeletonFaceData)> {
        self.faces.iter()
    }

    /// Number of vertices in the graph.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of faces in the graph.
    #[must_use]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Returns `true` if the graph has no faces.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    /// Collects the face boundary positions in cyclic order.
    ///
    /// # Errors
    ///
    /// Returns an error if the face or one of its vertices is not in the
    /// graph.
    pub fn face_points(&self, id: SkeletonFaceId) -> Result<Vec<Point2>, SkeletonError> {
        let face = self
            .faces
            .get(id)
            .ok_or(SkeletonError::EntityNotFound("face"))?;
        face.vertices
            .iter()
            .map(|&v| self.vertex(v).map(|data| data.point))
            .collect()
    }

    /// Returns every undirected face-boundary edge exactly once, in
    /// first-encounter order over the face arena.
    ///
    /// # Errors
    ///
    /// Returns an error if a face references a vertex missing from the graph.
    pub fn unique_edges(&self) -> Result<Vec<(Point2, Point2)>, SkeletonError> {
        let mut seen = HashSet::new();
        let mut edges = Vec::new();
        for (_, face) in &self.faces {
            let n = face.vertices.len();
            for i in 0..n {
                let a = face.vertices[i];
                let b = face.vertices[(i + 1) % n];
                let key = if a < b { (a, b) } else { (b, a) };
                if seen.insert(key) {
                    edges.push((self.vertex(a)?.point, self.vertex(b)?.point));
                }
            }
        }
        Ok(edges)
    }
}

/// External straight-skeleton construction service.
///
/// The kernel only consumes skeleton graphs; it never computes them.
/// Implementors take a validated footprint and either produce a complete
/// graph or fail; a partially built graph is never returned.
pub trait SkeletonBuilder {
    /// Builds the interior skeleton of the footprint.
    ///
    /// # Errors
    ///
    /// Returns `SkeletonError::ConstructionFailed` if no graph can be
    /// produced for this footprint.
    fn build(&self, footprint: &Footprint) -> Result<SkeletonGraph, SkeletonError>;
}

impl<F> SkeletonBuilder for F
where
    F: Fn(&Footprint) -> Result<SkeletonGraph, SkeletonError>,
{
    fn build(&self, footprint: &Footprint) -> Result<SkeletonGraph, SkeletonError> {
        self(footprint)
    }
}
