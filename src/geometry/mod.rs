pub mod footprint;

pub use footprint::Footprint;
