use tracing::debug;

use crate::error::{GeometryError, Result};
use crate::math::Point2;
use crate::render::markers::MarkerSet;
use crate::render::transform::CanvasTransform;
use crate::skeleton::SkeletonGraph;

/// Per-axis tolerance for recognizing the unfold center among face vertices.
const CENTER_EPSILON: f64 = 0.01;

/// Radial distances below this are treated as coincident with the center.
const MIN_RADIAL_DISTANCE: f64 = 0.001;

/// Explosion is skipped when the face centroid sits closer than this to the
/// center.
const MIN_EXPLODE_DISTANCE: f64 = 0.01;

/// A skeleton face after unfolding.
///
/// `original` and `unfolded` hold the same vertices in the same cyclic order.
#[derive(Debug, Clone)]
pub struct UnfoldedFace {
    /// Face boundary as read from the skeleton graph.
    pub original: Vec<Point2>,
    /// Face boundary after radial unfolding and explosion.
    pub unfolded: Vec<Point2>,
    /// Classification against the caller's marker set.
    pub marked: bool,
}

/// Radially flattens the sloped roof faces around a fixed center point.
///
/// A face seen from directly above is foreshortened toward the ridge by
/// `cos(pitch)`; scaling every radial displacement by `1 / cos(pitch)`
/// restores true dimensions. A per-face explosion offset then separates the
/// faces visually while keeping them hinged at the center.
#[derive(Debug)]
pub struct RoofUnfold<'a> {
    graph: &'a SkeletonGraph,
    center: Point2,
    unfold_factor: f64,
    explosion_factor: f64,
}

impl<'a> RoofUnfold<'a> {
    /// Creates a new unfold operation.
    ///
    /// `explosion_factor` is the fraction of its centroid distance by which
    /// each face is pushed away from the center; zero disables separation.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::ParameterOutOfRange` unless
    /// `0 <= pitch_degrees < 90`.
    pub fn new(
        graph: &'a SkeletonGraph,
        center: Point2,
        pitch_degrees: f64,
        explosion_factor: f64,
    ) -> Result<Self> {
        if !(0.0..90.0).contains(&pitch_degrees) {
            return Err(GeometryError::ParameterOutOfRange {
                parameter: "pitch_degrees",
                value: pitch_degrees,
                min: 0.0,
                max: 90.0,
            }
            .into());
        }
        let unfold_factor = 1.0 / pitch_degrees.to_radians().cos();
        Ok(Self {
            graph,
            center,
            unfold_factor,
            explosion_factor,
        })
    }

    /// Unfolds and explodes every face of the graph.
    ///
    /// Classification runs on the original, pre-unfold vertices projected
    /// through the ridge-view transform, so a face keeps the same marking in
    /// both diagrams even though its position differs between them.
    ///
    /// # Errors
    ///
    /// Returns an error if a face references a vertex missing from the graph.
    pub fn execute(
        &self,
        ridge_transform: &CanvasTransform,
        markers: &MarkerSet,
    ) -> Result<Vec<UnfoldedFace>> {
        let mut faces = Vec::with_capacity(self.graph.face_count());
        for (id, _) in self.graph.faces() {
            let original = self.graph.face_points(id)?;

            let mut unfolded: Vec<Point2> =
                original.iter().map(|&v| self.unfold_vertex(v)).collect();
            self.explode_face(&original, &mut unfolded);

            let canvas_verts: Vec<Point2> = original
                .iter()
                .map(|&v| ridge_transform.to_canvas(v))
                .collect();
            let marked = markers.is_marked(&canvas_verts);

            faces.push(UnfoldedFace {
                original,
                unfolded,
                marked,
            });
        }
        debug!(faces = faces.len(), "unfolded skeleton faces");
        Ok(faces)
    }

    fn is_near_center(&self, p: Point2) -> bool {
        (p.x - self.center.x).abs() < CENTER_EPSILON
            && (p.y - self.center.y).abs() < CENTER_EPSILON
    }

    /// Unfolds a single vertex radially away from the center.
    ///
    /// The center itself and near-coincident points come back unchanged.
    fn unfold_vertex(&self, p: Point2) -> Point2 {
        if self.is_near_center(p) {
            return p;
        }

        let dx = p.x - self.center.x;
        let dy = p.y - self.center.y;
        let dist = (dx * dx + dy * dy).sqrt();
        let unfolded_dist = dist * self.unfold_factor;

        if dist > MIN_RADIAL_DISTANCE {
            Point2::new(
                self.center.x + (dx / dist) * unfolded_dist,
                self.center.y + (dy / dist) * unfolded_dist,
            )
        } else {
            p
        }
    }

    /// Pushes a face away from the center by a fraction of its centroid
    /// distance. Vertices whose original position coincides with the center
    /// stay pinned, so faces remain hinged at the ridge point.
    fn explode_face(&self, original: &[Point2], unfolded: &mut [Point2]) {
        let mut cx = 0.0;
        let mut cy = 0.0;
        for v in unfolded.iter() {
            cx += v.x;
            cy += v.y;
        }
        cx /= unfolded.len() as f64;
        cy /= unfolded.len() as f64;

        let dx = cx - self.center.x;
        let dy = cy - self.center.y;
        let dist = (dx * dx + dy * dy).sqrt();
        if dist <= MIN_EXPLODE_DISTANCE {
            return;
        }
        let offset_x = (dx / dist) * self.explosion_factor * dist;
        let offset_y = (dy / dist) * self.explosion_factor * dist;

        for (v, orig) in unfolded.iter_mut().zip(original) {
            if !self.is_near_center(*orig) {
                v.x += offset_x;
                v.y += offset_y;
            }
        }
    }
}
