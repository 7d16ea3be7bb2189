use tracing::debug;

use crate::error::{GeometryError, Result};
use crate::math::polygon_2d::{is_simple, signed_area_2d, vertex_centroid};
use crate::math::{Point2, TOLERANCE};

/// A validated building outline in the world plane.
///
/// Construction normalizes the vertex ring to counter-clockwise orientation
/// and rejects degenerate or self-intersecting input. The ring is immutable
/// afterward.
#[derive(Debug, Clone)]
pub struct Footprint {
    points: Vec<Point2>,
}

impl Footprint {
    /// Creates a footprint from an ordered vertex ring.
    ///
    /// Clockwise input is reversed to counter-clockwise; counter-clockwise
    /// input is kept as supplied.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::TooFewVertices` for fewer than 3 vertices,
    /// `GeometryError::Degenerate` for a near-zero-area ring, and
    /// `GeometryError::SelfIntersecting` if any two non-adjacent edges cross.
    pub fn new(mut points: Vec<Point2>) -> Result<Self> {
        if points.len() < 3 {
            return Err(GeometryError::TooFewVertices {
                count: points.len(),
            }
            .into());
        }

        let area = signed_area_2d(&points);
        if area.abs() < TOLERANCE {
            return Err(GeometryError::Degenerate("zero-area footprint".to_owned()).into());
        }
        if area < 0.0 {
            points.reverse();
            debug!("footprint reversed to counter-clockwise");
        }

        if !is_simple(&points) {
            return Err(GeometryError::SelfIntersecting.into());
        }

        Ok(Self { points })
    }

    /// The vertex ring in counter-clockwise order.
    #[must_use]
    pub fn points(&self) -> &[Point2] {
        &self.points
    }

    /// Number of vertices in the ring.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if the ring has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Arithmetic mean of the ring's vertices.
    #[must_use]
    pub fn vertex_centroid(&self) -> Point2 {
        vertex_centroid(&self.points)
    }
}
