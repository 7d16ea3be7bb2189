use crate::error::{GeometryError, Result};
use crate::math::Point2;

/// An axis-aligned bounding box in the world plane.
#[derive(Debug, Clone, Copy)]
pub struct Aabb2 {
    /// Minimum corner of the bounding box.
    pub min: Point2,
    /// Maximum corner of the bounding box.
    pub max: Point2,
}

impl Aabb2 {
    /// Computes the bounding box of a point set, expanded by `margin` in all
    /// four directions.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::EmptyBounds` if `points` is empty.
    pub fn of_points(points: &[Point2], margin: f64) -> Result<Self> {
        Self::of_all(points.iter().copied(), margin)
    }

    /// Computes the bounding box over every vertex of every face, expanded by
    /// `margin` in all four directions.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::EmptyBounds` if no face contributes a vertex.
    pub fn of_faces<'a, I>(faces: I, margin: f64) -> Result<Self>
    where
        I: IntoIterator<Item = &'a [Point2]>,
    {
        Self::of_all(faces.into_iter().flatten().copied(), margin)
    }

    fn of_all(points: impl Iterator<Item = Point2>, margin: f64) -> Result<Self> {
        let mut bounds: Option<(Point2, Point2)> = None;
        for p in points {
            match &mut bounds {
                None => bounds = Some((p, p)),
                Some((min, max)) => {
                    min.x = min.x.min(p.x);
                    min.y = min.y.min(p.y);
                    max.x = max.x.max(p.x);
                    max.y = max.y.max(p.y);
                }
            }
        }
        let (min, max) = bounds.ok_or(GeometryError::EmptyBounds)?;
        Ok(Self {
            min: Point2::new(min.x - margin, min.y - margin),
            max: Point2::new(max.x + margin, max.y + margin),
        })
    }

    /// Horizontal extent of the box.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    /// Vertical extent of the box.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-12;

    #[test]
    fn margin_expands_all_sides() {
        let points = vec![Point2::new(0.0, 0.0), Point2::new(15.0, 5.0)];
        let aabb = Aabb2::of_points(&points, 2.0).unwrap();
        assert!((aabb.min.x + 2.0).abs() < TOL, "min_x={}", aabb.min.x);
        assert!((aabb.max.x - 17.0).abs() < TOL, "max_x={}", aabb.max.x);
        assert!((aabb.min.y + 2.0).abs() < TOL, "min_y={}", aabb.min.y);
        assert!((aabb.max.y - 7.0).abs() < TOL, "max_y={}", aabb.max.y);
    }

    #[test]
    fn zero_margin_is_tight() {
        let points = vec![
            Point2::new(-1.0, 4.0),
            Point2::new(3.0, -2.0),
            Point2::new(2.0, 6.0),
        ];
        let aabb = Aabb2::of_points(&points, 0.0).unwrap();
        assert!((aabb.min.x + 1.0).abs() < TOL);
        assert!((aabb.min.y + 2.0).abs() < TOL);
        assert!((aabb.max.x - 3.0).abs() < TOL);
        assert!((aabb.max.y - 6.0).abs() < TOL);
    }

    #[test]
    fn faces_flatten_into_one_box() {
        let face_a = vec![Point2::new(0.0, 0.0), Point2::new(1.0, 1.0)];
        let face_b = vec![Point2::new(5.0, -3.0), Point2::new(2.0, 2.0)];
        let faces: Vec<&[Point2]> = vec![&face_a, &face_b];
        let aabb = Aabb2::of_faces(faces, 1.0).unwrap();
        assert!((aabb.min.x + 1.0).abs() < TOL);
        assert!((aabb.min.y + 4.0).abs() < TOL);
        assert!((aabb.max.x - 6.0).abs() < TOL);
        assert!((aabb.max.y - 3.0).abs() < TOL);
    }

    #[test]
    fn empty_input_is_an_error() {
        assert!(Aabb2::of_points(&[], 2.0).is_err());
        let no_faces: Vec<&[Point2]> = Vec::new();
        assert!(Aabb2::of_faces(no_faces, 2.0).is_err());
    }

    #[test]
    fn extents() {
        let points = vec![Point2::new(0.0, 0.0), Point2::new(15.0, 5.0)];
        let aabb = Aabb2::of_points(&points, 2.0).unwrap();
        assert!((aabb.width() - 19.0).abs() < TOL);
        assert!((aabb.height() - 9.0).abs() < TOL);
    }
}
