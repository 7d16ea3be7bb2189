use super::{Point2, TOLERANCE};

/// Bounded segment-segment intersection in 2D.
///
/// Returns `(intersection_point, t, u)` where `t` and `u` are in `[0, 1]`.
#[must_use]
pub fn segment_segment_intersect_2d(
    a0: &Point2,
    a1: &Point2,
    b0: &Point2,
    b1: &Point2,
) -> Option<(Point2, f64, f64)> {
    let da = a1 - a0;
    let db = b1 - b0;

    let cross = da.x * db.y - da.y * db.x;
    if cross.abs() < TOLERANCE {
        return None;
    }

    let dx = b0.x - a0.x;
    let dy = b0.y - a0.y;
    let t = (dx * db.y - dy * db.x) / cross;
    let u = (dx * da.y - dy * da.x) / cross;

    // Use a small epsilon to include endpoints.
    let eps = TOLERANCE;
    if t >= -eps && t <= 1.0 + eps && u >= -eps && u <= 1.0 + eps {
        let t_clamped = t.clamp(0.0, 1.0);
        let pt = Point2::new(a0.x + da.x * t_clamped, a0.y + da.y * t_clamped);
        Some((pt, t_clamped, u.clamp(0.0, 1.0)))
    } else {
        None
    }
}

/// Checks whether two parallel segments are collinear and share more than a
/// single point.
///
/// The cross-product test above reports `None` for parallel segments, so
/// overlap along a common carrier line needs this separate check.
#[must_use]
pub fn collinear_overlap_2d(a0: &Point2, a1: &Point2, b0: &Point2, b1: &Point2) -> bool {
    let da = a1 - a0;
    let len_sq = da.norm_squared();
    if len_sq < TOLERANCE * TOLERANCE {
        return false;
    }

    // Both endpoints of `b` must lie on the carrier line of `a`.
    let c0 = da.x * (b0.y - a0.y) - da.y * (b0.x - a0.x);
    let c1 = da.x * (b1.y - a0.y) - da.y * (b1.x - a0.x);
    if c0.abs() > TOLERANCE || c1.abs() > TOLERANCE {
        return false;
    }

    // Project `b` onto `a` and test for interval overlap beyond a point.
    let t0 = ((b0 - a0).dot(&da)) / len_sq;
    let t1 = ((b1 - a0).dot(&da)) / len_sq;
    let (lo, hi) = if t0 < t1 { (t0, t1) } else { (t1, t0) };
    hi > TOLERANCE && lo < 1.0 - TOLERANCE
}
