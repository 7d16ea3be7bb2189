use super::intersect_2d::{collinear_overlap_2d, segment_segment_intersect_2d};
use super::Point2;

/// Computes the signed area of a polygon (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise.
#[must_use]
pub fn signed_area_2d(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}

/// Arithmetic mean of the polygon's vertices.
///
/// Not the area-weighted centroid.
#[must_use]
pub fn vertex_centroid(points: &[Point2]) -> Point2 {
    if points.is_empty() {
        return Point2::origin();
    }
    let mut cx = 0.0;
    let mut cy = 0.0;
    for p in points {
        cx += p.x;
        cy += p.y;
    }
    let n = points.len() as f64;
    Point2::new(cx / n, cy / n)
}

/// Returns `true` if the closed polygon is simple: no two non-adjacent edges
/// intersect, and no two edges overlap along a common line.
///
/// Adjacent edges share exactly one endpoint and are skipped.
#[must_use]
pub fn is_simple(points: &[Point2]) -> bool {
    let n = points.len();
    if n < 3 {
        return false;
    }
    for i in 0..n {
        let a0 = points[i];
        let a1 = points[(i + 1) % n];
        for j in (i + 1)..n {
            if j == i + 1 || (i == 0 && j == n - 1) {
                continue;
            }
            let b0 = points[j];
            let b1 = points[(j + 1) % n];
            if segment_segment_intersect_2d(&a0, &a1, &b0, &b1).is_some()
                || collinear_overlap_2d(&a0, &a1, &b0, &b1)
            {
                return false;
            }
        }
    }
    true
}
