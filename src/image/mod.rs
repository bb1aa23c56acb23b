//! Core image value types: [`Pixel`] and [`Image`].

pub mod pixel;
pub mod raster;

pub use pixel::Pixel;
pub use raster::Image;
