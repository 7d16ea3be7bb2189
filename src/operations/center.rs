use crate::math::Point2;
use crate::skeleton::SkeletonGraph;

/// The unfolding pivot candidate: an interior skeleton vertex and the offset
/// time at which it was generated.
#[derive(Debug, Clone, Copy)]
pub struct CenterVertex {
    /// Vertex position.
    pub point: Point2,
    /// Inward offset distance at which the vertex was generated.
    pub time: f64,
}

/// Finds the innermost skeleton vertex: the interior vertex with the maximum
/// time value.
///
/// The strict `>` comparison keeps the first vertex encountered in arena
/// order on ties, so the result is deterministic for a fixed graph. Returns
/// `None` when the graph has no interior vertex; callers choose a fallback
/// center in that case.
#[must_use]
pub fn find_center_vertex(graph: &SkeletonGraph) -> Option<CenterVertex> {
    let mut best: Option<CenterVertex> = None;
    for (_, vertex) in graph.vertices() {
        if vertex.is_skeleton && best.map_or(true, |b| vertex.time > b.time) {
            best = Some(CenterVertex {
                point: vertex.point,
                time: vertex.time,
            });
        }
    }
    best
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-12;

    #[test]
    fn picks_maximum_time_interior_vertex() {
        let mut graph = SkeletonGraph::new();
        graph.add_contour_vertex(Point2::new(0.0, 0.0));
        graph.add_skeleton_vertex(Point2::new(1.0, 1.0), 2.0);
        graph.add_skeleton_vertex(Point2::new(3.0, 3.0), 7.5);
        graph.add_skeleton_vertex(Point2::new(2.0, 2.0), 4.0);

        let center = find_center_vertex(&graph).unwrap();
        assert!((center.point.x - 3.0).abs() < TOL);
        assert!((center.time - 7.5).abs() < TOL);
    }

    #[test]
    fn ties_keep_first_encountered() {
        let mut graph = SkeletonGraph::new();
        graph.add_skeleton_vertex(Point2::new(1.0, 0.0), 5.0);
        graph.add_skeleton_vertex(Point2::new(2.0, 0.0), 5.0);

        let center = find_center_vertex(&graph).unwrap();
        assert!((center.point.x - 1.0).abs() < TOL);
    }

    #[test]
    fn contour_vertices_are_ignored() {
        let mut graph = SkeletonGraph::new();
        graph.add_contour_vertex(Point2::new(9.0, 9.0));
        graph.add_skeleton_vertex(Point2::new(1.0, 1.0), 0.5);

        let center = find_center_vertex(&graph).unwrap();
        assert!((center.point.x - 1.0).abs() < TOL);
    }

    #[test]
    fn none_without_interior_vertices() {
        let mut graph = SkeletonGraph::new();
        graph.add_contour_vertex(Point2::new(0.0, 0.0));
        graph.add_contour_vertex(Point2::new(1.0, 0.0));
        assert!(find_center_vertex(&graph).is_none());
    }
}
