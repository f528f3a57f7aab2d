#![doc = env!("CARGO_PKG_DESCRIPTION")]

#[doc(inline)]
pub use moons_image as image;

#[doc(inline)]
pub use moons_geometry as geometry;

#[doc(inline)]
pub use moons_feature as feature;

#[doc(inline)]
pub use moons_viz as viz;
