//! Roofplan demo: an L-shaped hipped roof.
//!
//! Validates the sample footprint, feeds a precomputed straight skeleton to
//! the pipeline, and writes `roof_ridges.svg` and `roof_unfolded.svg` into
//! the current directory.
//!
//! Usage:
//! ```text
//! cargo run --example hipped_roof
//! ```

use std::path::Path;

use roofplan::error::SkeletonError;
use roofplan::geometry::Footprint;
use roofplan::math::Point2;
use roofplan::pipeline::{PipelineConfig, RoofPipeline};
use roofplan::skeleton::SkeletonGraph;
use roofplan::RoofplanError;

fn main() -> Result<(), RoofplanError> {
    // Default: WARN for everything, INFO for roofplan.
    // Override with RUST_LOG env var (e.g. RUST_LOG=roofplan=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("roofplan=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let footprint = Footprint::new(vec![
        Point2::new(0.0, 0.0),
        Point2::new(0.0, -10.0),
        Point2::new(15.0, -10.0),
        Point2::new(15.0, 5.0),
        Point2::new(-5.0, 5.0),
        Point2::new(-5.0, 0.0),
    ])?;

    let config = PipelineConfig {
        // Canvas-space positions of the top face's vertices; that face is
        // drawn with the marked fill in both diagrams.
        markers: vec![
            Point2::new(150.0, 149.667),
            Point2::new(316.667, 149.667),
            Point2::new(483.333, 316.333),
            Point2::new(733.333, 66.3333),
            Point2::new(66.6667, 66.3333),
        ],
        ..PipelineConfig::default()
    };

    let diagrams = RoofPipeline::new(&footprint, &config).execute(&l_shape_skeleton)?;
    diagrams.write(Path::new("roof_ridges.svg"), Path::new("roof_unfolded.svg"))?;
    tracing::info!("wrote roof_ridges.svg and roof_unfolded.svg");
    Ok(())
}

/// Precomputed interior straight skeleton of the demo footprint, standing in
/// for an external skeleton service.
///
/// The left wing closes onto the short ridge between (-2.5, 2.5) and
/// (2.5, 2.5); the square right part collapses into a single apex at
/// (7.5, -2.5), which is also the deepest node and thus the unfold center.
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
