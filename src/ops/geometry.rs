// src/ops/geometry.rs

//! Geometric transforms implemented by index remapping.
//!
//! Both flips are involutions and preserve dimensions.

use crate::image::Image;

impl Image {
    /// Mirrors the image across its vertical axis:
    /// `out(x, y) = in(W - 1 - x, y)`.
    pub fn horizontal_flip(&self) -> Image {
        let (width, height) = self.dimensions();
        Image::from_fn(width, height, |x, y| self.get_pixel(width - 1 - x, y))
    }

    /// Mirrors the image across its horizontal axis:
    /// `out(x, y) = in(x, H - 1 - y)`.
    pub fn vertical_flip(&self) -> Image {
        let (width, height) = self.dimensions();
        Image::from_fn(width, height, |x, y| self.get_pixel(x, height - 1 - y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::Pixel;

    fn ramp() -> Image {
        Image::from_fn(4, 3, |x, y| Pixel::new(x as i32 * 10, y as i32 * 10, 0))
    }

    #[test]
    fn horizontal_flip_mirrors_columns() {
        let img = ramp();
        let out = img.horizontal_flip();
        assert_eq!(out.get_pixel(0, 1), img.get_pixel(3, 1));
        assert_eq!(out.get_pixel(3, 2), img.get_pixel(0, 2));
    }

    #[test]
    fn vertical_flip_mirrors_rows() {
        let img = ramp();
        let out = img.vertical_flip();
        assert_eq!(out.get_pixel(2, 0), img.get_pixel(2, 2));
    }

    #[test]
    fn flips_are_involutions() {
        let img = ramp();
        assert_eq!(img.horizontal_flip().horizontal_flip(), img);
        assert_eq!(img.vertical_flip().vertical_flip(), img);
    }
}
