// src/ops/channels.rs

//! Splitting an image into channel planes and recombining them.

use crate::image::{Image, Pixel};
use crate::utils::error::{RasterError, Result};

impl Image {
    /// Splits the image into three single-channel images, in (red, green,
    /// blue) order. In each output the other two channels are zero.
    pub fn rgb_split(&self) -> (Image, Image, Image) {
        (
            self.red_component(),
            self.green_component(),
            self.blue_component(),
        )
    }

    /// Builds an image whose red channel comes from `red`, green from
    /// `green` and blue from `blue`.
    ///
    /// Fails with [`RasterError::DimensionMismatch`] if the three inputs do
    /// not share the same dimensions; the red plane sets the expectation.
    pub fn rgb_combine(red: &Image, green: &Image, blue: &Image) -> Result<Image> {
        let expected = red.dimensions();
        for plane in [green, blue] {
            if plane.dimensions() != expected {
                return Err(RasterError::DimensionMismatch {
                    expected,
                    actual: plane.dimensions(),
                });
            }
        }

        let (width, height) = expected;
        Ok(Image::from_fn(width, height, |x, y| {
            Pixel::new(
                red.get_pixel(x, y).r as i32,
                green.get_pixel(x, y).g as i32,
                blue.get_pixel(x, y).b as i32,
            )
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn combine_of_split_restores_the_image() {
        let img = Image::from_fn(3, 3, |x, y| {
            Pixel::new(x as i32 * 40, y as i32 * 40, (x + y) as i32 * 20)
        });
        let (r, g, b) = img.rgb_split();
        let rebuilt = Image::rgb_combine(&r, &g, &b).unwrap();
        assert_eq!(rebuilt, img);
    }

    #[test]
    fn combine_rejects_mismatched_planes() {
        let a = Image::new(3, 3);
        let b = Image::new(3, 2);
        let err = Image::rgb_combine(&a, &b, &a).unwrap_err();
        match err {
            RasterError::DimensionMismatch { expected, actual } => {
                assert_eq!(expected, (3, 3));
                assert_eq!(actual, (3, 2));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn combine_ignores_foreign_channels() {
        // only the named channel of each input matters
        let red = Image::from_pixel(2, 2, Pixel::new(9, 100, 100));
        let green = Image::from_pixel(2, 2, Pixel::new(100, 8, 100));
        let blue = Image::from_pixel(2, 2, Pixel::new(100, 100, 7));
        let out = Image::rgb_combine(&red, &green, &blue).unwrap();
        assert_eq!(out.get_pixel(1, 1), Pixel::new(9, 8, 7));
    }
}
