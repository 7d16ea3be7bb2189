mod bounding_box;
mod center;
mod unfold;

pub use bounding_box::Aabb2;
pub use center::{find_center_vertex, CenterVertex};
pub use unfold::{RoofUnfold, UnfoldedFace};
