use crate::math::Point2;
use crate::operations::UnfoldedFace;

use super::svg::SvgDocument;
use super::{
    CanvasTransform, BACKGROUND_FILL, DEFAULT_FILL, FACE_EDGE_STROKE, MARKED_FILL, OUTLINE_STROKE,
};

/// Renders the unfolded roof diagram.
///
/// Each face appears in its flattened, exploded position with its own edge
/// loop; the face fill keeps the classification computed in the plan view.
#[derive(Debug)]
pub struct UnfoldedView<'a> {
    faces: &'a [UnfoldedFace],
    transform: &'a CanvasTransform,
    pitch_degrees: f64,
}

impl<'a> UnfoldedView<'a> {
    /// Creates a new unfolded view renderer.
    #[must_use]
    pub fn new(
        faces: &'a [UnfoldedFace],
        transform: &'a CanvasTransform,
        pitch_degrees: f64,
    ) -> Self {
        Self {
            faces,
            transform,
            pitch_degrees,
        }
    }

    /// Renders the diagram to an SVG string.
    #[must_use]
    pub fn execute(&self) -> String {
        let mut doc = SvgDocument::new(self.transform.width(), self.transform.height());
        doc.metadata(
            "Unfolded roof faces",
            &format!(
                "Roof faces flattened at a {} degree pitch",
                self.pitch_degrees
            ),
        );
        doc.background(BACKGROUND_FILL);

        doc.open_group(r#"id="unfolded-faces" opacity="0.85""#);
        for face in self.faces {
            let canvas: Vec<Point2> = face
                .unfolded
                .iter()
                .map(|&p| self.transform.to_canvas(p))
                .collect();
            let fill = if face.marked { MARKED_FILL } else { DEFAULT_FILL };
            doc.stroked_polygon(&canvas, fill, FACE_EDGE_STROKE, 1.5);
        }
        doc.close_group();

        doc.open_group(&format!(
            r#"id="edge-lines" stroke="{OUTLINE_STROKE}" stroke-width="2" opacity="0.7""#
        ));
        for face in self.faces {
            let n = face.unfolded.len();
            for i in 0..n {
                let a = face.unfolded[i];
                let b = face.unfolded[(i + 1) % n];
                doc.line(self.transform.to_canvas(a), self.transform.to_canvas(b));
            }
        }
        doc.close_group();

        doc.finish()
    }
}
