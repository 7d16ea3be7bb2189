use crate::error::{GeometryError, Result};
use crate::math::{Point2, TOLERANCE};
use crate::operations::Aabb2;

/// Affine mapping from world coordinates onto a fixed-width canvas.
///
/// The scale preserves the world aspect ratio, and the Y axis is inverted so
/// increasing world Y moves up the rendered image while the output format's
/// Y axis grows downward.
#[derive(Debug, Clone, Copy)]
pub struct CanvasTransform {
    min_x: f64,
    min_y: f64,
    scale: f64,
    width: u32,
    height: u32,
}

impl CanvasTransform {
    /// Creates a transform mapping `bounds` onto a canvas of the given width.
    ///
    /// The canvas height is derived from the world aspect ratio and rounded
    /// down to a whole unit.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::Degenerate` if the box has no horizontal
    /// extent.
    pub fn new(bounds: &Aabb2, canvas_width: u32) -> Result<Self> {
        let world_width = bounds.width();
        if world_width < TOLERANCE {
            return Err(GeometryError::Degenerate(
                "bounding box has no horizontal extent".to_owned(),
            )
            .into());
        }
        let world_height = bounds.height();
        let width_f = f64::from(canvas_width);
        let height = (width_f * world_height / world_width).floor() as u32;
        let scale = width_f / world_width;
        Ok(Self {
            min_x: bounds.min.x,
            min_y: bounds.min.y,
            scale,
            width: canvas_width,
            height,
        })
    }

    /// Maps a world X coordinate to canvas space.
    #[must_use]
    pub fn to_canvas_x(&self, x: f64) -> f64 {
        (x - self.min_x) * self.scale
    }

    /// Maps a world Y coordinate to canvas space (Y axis flipped).
    #[must_use]
    pub fn to_canvas_y(&self, y: f64) -> f64 {
        f64::from(self.height) - (y - self.min_y) * self.scale
    }

    /// Maps a world point to canvas space.
    #[must_use]
    pub fn to_canvas(&self, p: Point2) -> Point2 {
        Point2::new(self.to_canvas_x(p.x), self.to_canvas_y(p.y))
    }

    /// Canvas width in rendering units.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Canvas height in rendering units.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// World-to-canvas scale factor.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-12;

    fn bounds(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Aabb2 {
        Aabb2 {
            min: Point2::new(min_x, min_y),
            max: Point2::new(max_x, max_y),
        }
    }

    #[test]
    fn aspect_ratio_preserved() {
        // World box 20 x 15 onto an 800-wide canvas.
        let transform = CanvasTransform::new(&bounds(0.0, 0.0, 20.0, 15.0), 800).unwrap();
        assert_eq!(transform.height(), 600);
        assert!((transform.scale() - 40.0).abs() < TOL);
    }

    #[test]
    fn fractional_height_rounds_down() {
        // 24 x 19 world box: 800 * 19 / 24 = 633.33.
        let transform = CanvasTransform::new(&bounds(-7.0, -12.0, 17.0, 7.0), 800).unwrap();
        assert_eq!(transform.height(), 633);
    }

    #[test]
    fn x_maps_left_to_zero() {
        let transform = CanvasTransform::new(&bounds(-2.0, 0.0, 18.0, 10.0), 800).unwrap();
        assert!(transform.to_canvas_x(-2.0).abs() < TOL);
        assert!((transform.to_canvas_x(18.0) - 800.0).abs() < TOL);
    }

    #[test]
    fn y_axis_is_flipped() {
        let transform = CanvasTransform::new(&bounds(0.0, 0.0, 20.0, 15.0), 800).unwrap();
        // World bottom lands at the canvas bottom edge (largest canvas y).
        assert!((transform.to_canvas_y(0.0) - 600.0).abs() < TOL);
        assert!(transform.to_canvas_y(15.0).abs() < TOL);
    }

    #[test]
    fn point_mapping_combines_both_axes() {
        let transform = CanvasTransform::new(&bounds(0.0, 0.0, 20.0, 15.0), 800).unwrap();
        let p = transform.to_canvas(Point2::new(10.0, 7.5));
        assert!((p.x - 400.0).abs() < TOL);
        assert!((p.y - 300.0).abs() < TOL);
    }

    #[test]
    fn degenerate_width_rejected() {
        assert!(CanvasTransform::new(&bounds(5.0, 0.0, 5.0, 10.0), 800).is_err());
    }
}
