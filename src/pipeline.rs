use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{RenderError, Result, SkeletonError};
use crate::geometry::Footprint;
use crate::math::Point2;
use crate::operations::{find_center_vertex, Aabb2, RoofUnfold};
use crate::render::{CanvasTransform, MarkerSet, RidgeView, UnfoldedView};
use crate::skeleton::SkeletonBuilder;

/// Configuration for a full diagram run.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Roof pitch angle in degrees, `0 <= pitch < 90`.
    pub pitch_degrees: f64,
    /// Fraction of its centroid distance by which each face is pushed apart.
    pub explosion_factor: f64,
    /// Canvas width of the ridge plan view.
    pub ridge_canvas_width: u32,
    /// Canvas width of the unfolded view.
    pub unfolded_canvas_width: u32,
    /// Bounding-box margin around the footprint, in world units.
    pub ridge_margin: f64,
    /// Bounding-box margin around the unfolded faces, in world units.
    pub unfolded_margin: f64,
    /// Marker points in ridge-view canvas coordinates.
    pub markers: Vec<Point2>,
    /// Unfold center used when the skeleton has no interior vertex.
    ///
    /// Falls back to the footprint's vertex centroid when unset.
    pub fallback_center: Option<Point2>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            pitch_degrees: 30.0,
            explosion_factor: 0.15,
            ridge_canvas_width: 800,
            unfolded_canvas_width: 1000,
            ridge_margin: 2.0,
            unfolded_margin: 4.0,
            markers: Vec::new(),
            fallback_center: None,
        }
    }
}

/// The two finished diagrams of a run.
#[derive(Debug, Clone)]
pub struct RoofDiagrams {
    /// Top-down ridge plan SVG document.
    pub ridge_svg: String,
    /// Unfolded roof faces SVG document.
    pub unfolded_svg: String,
}

impl RoofDiagrams {
    /// Writes both documents to disk.
    ///
    /// # Errors
    ///
    /// Returns `RenderError::Io` if either file cannot be written.
    pub fn write(&self, ridge_path: &Path, unfolded_path: &Path) -> Result<()> {
        fs::write(ridge_path, &self.ridge_svg).map_err(RenderError::Io)?;
        fs::write(unfolded_path, &self.unfolded_svg).map_err(RenderError::Io)?;
        Ok(())
    }
}

/// Runs the full footprint-to-diagrams pipeline in a fixed stage order:
/// skeleton construction, ridge view, center selection, unfolding, unfolded
/// view.
///
/// Both documents are assembled in memory; a failing stage aborts the run
/// before anything reaches the filesystem.
#[derive(Debug)]
pub struct RoofPipeline<'a> {
    footprint: &'a Footprint,
    config: &'a PipelineConfig,
}

impl<'a> RoofPipeline<'a> {
    /// Creates a new pipeline over a validated footprint.
    #[must_use]
    pub fn new(footprint: &'a Footprint, config: &'a PipelineConfig) -> Self {
        Self { footprint, config }
    }

    /// Executes every stage and returns the finished diagrams.
    ///
    /// # Errors
    ///
    /// Returns an error if skeleton construction fails or yields an empty
    /// graph, the pitch angle is out of range, or a face references a
    /// missing vertex.
    pub fn execute<B: SkeletonBuilder>(&self, builder: &B) -> Result<RoofDiagrams> {
        let graph = builder.build(self.footprint)?;
        if graph.is_empty() {
            return Err(SkeletonError::ConstructionFailed(
                "skeleton graph has no faces".to_owned(),
            )
            .into());
        }
        info!(
            vertices = graph.vertex_count(),
            faces = graph.face_count(),
            "skeleton graph built"
        );

        let ridge_bounds = Aabb2::of_points(self.footprint.points(), self.config.ridge_margin)?;
        let ridge_transform = CanvasTransform::new(&ridge_bounds, self.config.ridge_canvas_width)?;
        let markers = MarkerSet::new(self.config.markers.clone());

        let ridge_svg =
            RidgeView::new(self.footprint, &graph, &ridge_transform, &markers).execute()?;

        let center = match find_center_vertex(&graph) {
            Some(center) => {
                info!(
                    x = center.point.x,
                    y = center.point.y,
                    time = center.time,
                    "unfold center selected"
                );
                center.point
            }
            None => {
                let fallback = self
                    .config
                    .fallback_center
                    .unwrap_or_else(|| self.footprint.vertex_centroid());
                info!(
                    x = fallback.x,
                    y = fallback.y,
                    "no interior skeleton vertex, using fallback center"
                );
                fallback
            }
        };

        let faces = RoofUnfold::new(
            &graph,
            center,
            self.config.pitch_degrees,
            self.config.explosion_factor,
        )?
        .execute(&ridge_transform, &markers)?;

        let unfolded_bounds = Aabb2::of_faces(
            faces.iter().map(|face| face.unfolded.as_slice()),
            self.config.unfolded_margin,
        )?;
        let unfolded_transform =
            CanvasTransform::new(&unfolded_bounds, self.config.unfolded_canvas_width)?;
        let unfolded_svg =
            UnfoldedView::new(&faces, &unfolded_transform, self.config.pitch_degrees).execute();

        Ok(RoofDiagrams {
            ridge_svg,
            unfolded_svg,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::skeleton::SkeletonGraph;
    // The builder fixtures need the two-parameter form, not the crate alias.
    use std::result::Result;

    fn l_shape_points() -> Vec<Point2> {
        vec![
            Point2::new(0.0, 0.0),
            Point2::new(0.0, -10.0),
            Point2::new(15.0, -10.0),
            Point2::new(15.0, 5.0),
            Point2::new(-5.0, 5.0),
            Point2::new(-5.0, 0.0),
        ]
    }

    /// Interior straight skeleton of the L-shaped footprint, built by hand:
    /// the left wing closes onto a short ridge, the square right part
    /// collapses into a single apex.
    fn l_shape_skeleton(footprint: &Footprint) -> Result<SkeletonGraph, SkeletonError> {
        let mut graph = SkeletonGraph::new();
        let contour: Vec<_> = footprint
            .points()
            .iter()
            .map(|&p| graph.add_contour_vertex(p))
            .collect();
        let a = graph.add_skeleton_vertex(Point2::new(-2.5, 2.5), 2.5);
        let b = graph.add_skeleton_vertex(Point2::new(2.5, 2.5), 2.5);
        let c = graph.add_skeleton_vertex(Point2::new(7.5, -2.5), 7.5);
        // One face per contour edge.
        graph.add_face(&[contour[0], contour[1], c, b])?;
        graph.add_face(&[contour[1], contour[2], c])?;
        graph.add_face(&[contour[2], contour[3], c])?;
        graph.add_face(&[contour[3], contour[4], a, b, c])?;
        graph.add_face(&[contour[4], contour[5], a])?;
        graph.add_face(&[contour[5], contour[0], b, a])?;
        Ok(graph)
    }

    fn demo_config() -> PipelineConfig {
        PipelineConfig {
            markers: vec![
                Point2::new(150.0, 149.667),
                Point2::new(316.667, 149.667),
                Point2::new(483.333, 316.333),
                Point2::new(733.333, 66.3333),
                Point2::new(66.6667, 66.3333),
            ],
            ..PipelineConfig::default()
        }
    }

    #[test]
    fn end_to_end_produces_both_diagrams() {
        let footprint = Footprint::new(l_shape_points()).unwrap();
        let config = demo_config();
        let diagrams = RoofPipeline::new(&footprint, &config)
            .execute(&l_shape_skeleton)
            .unwrap();

        assert!(!diagrams.ridge_svg.is_empty());
        assert!(!diagrams.unfolded_svg.is_empty());
        // 6 faces plus the footprint outline in the ridge view, 6 in the
        // unfolded view.
        assert_eq!(diagrams.ridge_svg.matches("<polygon").count(), 7);
        assert_eq!(diagrams.unfolded_svg.matches("<polygon").count(), 6);
    }

    #[test]
    fn end_to_end_marks_the_top_face_only() {
        let footprint = Footprint::new(l_shape_points()).unwrap();
        let config = demo_config();
        let diagrams = RoofPipeline::new(&footprint, &config)
            .execute(&l_shape_skeleton)
            .unwrap();

        // The five markers cover exactly the top face's vertices; the
        // adjacent faces share only two of them and stay unmarked.
        assert_eq!(diagrams.ridge_svg.matches("#9e9e9e").count(), 1);
        assert_eq!(diagrams.unfolded_svg.matches("#9e9e9e").count(), 1);
    }

    #[test]
    fn face_vertex_counts_preserved_through_unfolding() {
        let footprint = Footprint::new(l_shape_points()).unwrap();
        let graph = l_shape_skeleton(&footprint).unwrap();
        let ridge_bounds = Aabb2::of_points(footprint.points(), 2.0).unwrap();
        let ridge_transform = CanvasTransform::new(&ridge_bounds, 800).unwrap();
        let center = find_center_vertex(&graph).unwrap();

        let faces = RoofUnfold::new(&graph, center.point, 30.0, 0.15)
            .unwrap()
            .execute(&ridge_transform, &MarkerSet::default())
            .unwrap();

        assert_eq!(faces.len(), 6);
        for face in &faces {
            assert_eq!(face.original.len(), face.unfolded.len());
        }
    }

    #[test]
    fn clockwise_footprint_gives_same_diagrams() {
        let footprint = Footprint::new(l_shape_points()).unwrap();
        let mut reversed = l_shape_points();
        reversed.reverse();
        let footprint_cw = Footprint::new(reversed).unwrap();

        let config = demo_config();
        let ccw = RoofPipeline::new(&footprint, &config)
            .execute(&l_shape_skeleton)
            .unwrap();
        let cw = RoofPipeline::new(&footprint_cw, &config)
            .execute(&l_shape_skeleton)
            .unwrap();

        assert_eq!(ccw.ridge_svg, cw.ridge_svg);
        assert_eq!(ccw.unfolded_svg, cw.unfolded_svg);
    }

    #[test]
    fn empty_skeleton_aborts_the_run() {
        let footprint = Footprint::new(l_shape_points()).unwrap();
        let config = PipelineConfig::default();
        let builder =
            |_: &Footprint| -> Result<SkeletonGraph, SkeletonError> { Ok(SkeletonGraph::new()) };
        assert!(RoofPipeline::new(&footprint, &config)
            .execute(&builder)
            .is_err());
    }

    #[test]
    fn failing_builder_aborts_the_run() {
        let footprint = Footprint::new(l_shape_points()).unwrap();
        let config = PipelineConfig::default();
        let builder = |_: &Footprint| -> Result<SkeletonGraph, SkeletonError> {
            Err(SkeletonError::ConstructionFailed(
                "unsupported footprint".to_owned(),
            ))
        };
        assert!(RoofPipeline::new(&footprint, &config)
            .execute(&builder)
            .is_err());
    }

    #[test]
    fn fallback_center_is_used_without_interior_vertices() {
        let footprint = Footprint::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(10.0, 0.0),
            Point2::new(10.0, 10.0),
            Point2::new(0.0, 10.0),
        ])
        .unwrap();
        // A single contour-only face: no interior vertex to pick.
        let builder = |fp: &Footprint| -> Result<SkeletonGraph, SkeletonError> {
            let mut graph = SkeletonGraph::new();
            let ids: Vec<_> = fp
                .points()
                .iter()
                .map(|&p| graph.add_contour_vertex(p))
                .collect();
            graph.add_face(&ids)?;
            Ok(graph)
        };

        let config = PipelineConfig {
            fallback_center: Some(Point2::new(5.0, 5.0)),
            ..PipelineConfig::default()
        };
        let diagrams = RoofPipeline::new(&footprint, &config)
            .execute(&builder)
            .unwrap();
        assert!(!diagrams.unfolded_svg.is_empty());

        // Works without an explicit fallback as well (vertex centroid).
        let config = PipelineConfig::default();
        let diagrams = RoofPipeline::new(&footprint, &config)
            .execute(&builder)
            .unwrap();
        assert!(!diagrams.unfolded_svg.is_empty());
    }
}
