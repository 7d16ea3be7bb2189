use crate::math::Point2;

/// Per-axis tolerance for matching a face vertex against a marker point.
const MATCH_EPSILON: f64 = 0.5;

/// Minimum number of matched vertices for a face to count as marked.
const MIN_MATCHES: usize = 3;

/// Caller-supplied marker points in canvas coordinates.
///
/// Faces whose canvas-space vertices hit at least three markers are rendered
/// with the marked fill. Matching is per face vertex, first marker within
/// tolerance wins; a single marker may satisfy several face vertices.
#[derive(Debug, Clone, Default)]
pub struct MarkerSet {
    markers: Vec<Point2>,
}

impl MarkerSet {
    /// Creates a marker set from canvas-space points.
    #[must_use]
    pub fn new(markers: Vec<Point2>) -> Self {
        Self { markers }
    }

    /// Counts the face vertices lying within tolerance of some marker.
    #[must_use]
    pub fn match_count(&self, face: &[Point2]) -> usize {
        face.iter()
            .filter(|v| {
                self.markers.iter().any(|m| {
                    (v.x - m.x).abs() < MATCH_EPSILON && (v.y - m.y).abs() < MATCH_EPSILON
                })
            })
            .count()
    }

    /// Returns `true` if at least three face vertices match a marker.
    #[must_use]
    pub fn is_marked(&self, face: &[Point2]) -> bool {
        self.match_count(face) >= MIN_MATCHES
    }
}
