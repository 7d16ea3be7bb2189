use crate::error::Result;
use crate::geometry::Footprint;
use crate::math::Point2;
use crate::skeleton::SkeletonGraph;

use super::svg::SvgDocument;
use super::{
    CanvasTransform, MarkerSet, BACKGROUND_FILL, DEFAULT_FILL, MARKED_FILL, OUTLINE_STROKE,
    RIDGE_STROKE,
};

/// Renders the top-down ridge diagram.
///
/// Shows the skeleton faces (marked faces in the distinguishing fill), the
/// footprint outline, each undirected skeleton edge exactly once, and the
/// graph vertices, with interior skeleton nodes drawn larger than contour
/// nodes.
#[derive(Debug)]
pub struct RidgeView<'a> {
    footprint: &'a Footprint,
    graph: &'a SkeletonGraph,
    transform: &'a CanvasTransform,
    markers: &'a MarkerSet,
}

impl<'a> RidgeView<'a> {
    /// Creates a new ridge view renderer.
    #[must_use]
    pub fn new(
        footprint: &'a Footprint,
        graph: &'a SkeletonGraph,
        transform: &'a CanvasTransform,
        markers: &'a MarkerSet,
    ) -> Self {
        Self {
            footprint,
            graph,
            transform,
            markers,
        }
    }

    /// Renders the diagram to an SVG string.
    ///
    /// # Errors
    ///
    /// Returns an error if a skeleton face references a missing vertex.
    pub fn execute(&self) -> Result<String> {
        let mut doc = SvgDocument::new(self.transform.width(), self.transform.height());
        doc.metadata(
            "Roof ridge plan",
            "Straight-skeleton decomposition of the roof footprint",
        );
        doc.background(BACKGROUND_FILL);

        doc.open_group(r#"id="faces" opacity="0.8""#);
        for (id, _) in self.graph.faces() {
            let canvas: Vec<Point2> = self
                .graph
                .face_points(id)?
                .iter()
                .map(|&p| self.transform.to_canvas(p))
                .collect();
            let fill = if self.markers.is_marked(&canvas) {
                MARKED_FILL
            } else {
                DEFAULT_FILL
            };
            doc.filled_polygon(&canvas, fill);
        }
        doc.close_group();

        let outline: Vec<Point2> = self
            .footprint
            .points()
            .iter()
            .map(|&p| self.transform.to_canvas(p))
            .collect();
        doc.stroked_polygon(&outline, "none", OUTLINE_STROKE, 2.0);

        doc.open_group(&format!(
            r#"id="ridge-lines" stroke="{RIDGE_STROKE}" stroke-width="2.5" stroke-linecap="round""#
        ));
        for (a, b) in self.graph.unique_edges()? {
            doc.line(self.transform.to_canvas(a), self.transform.to_canvas(b));
        }
        doc.close_group();

        doc.open_group(r#"id="vertices""#);
        for (_, vertex) in self.graph.vertices() {
            let p = self.transform.to_canvas(vertex.point);
            if vertex.is_skeleton {
                doc.circle(p, 4.0, RIDGE_STROKE, "white");
            } else {
                doc.circle(p, 3.0, OUTLINE_STROKE, "white");
            }
        }
        doc.close_group();

        Ok(doc.finish())
    }
}
