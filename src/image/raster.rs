// src/image/raster.rs

//! The immutable 2-D pixel grid.
//!
//! [`Image`] is the value every transform in this crate consumes and
//! produces. The grid is rectangular and non-empty; pixels are stored in
//! row-major order and addressed as `(x, y)` with `x` the column. Transforms
//! never mutate their input: each one allocates and returns a fresh `Image`.

use crate::image::pixel::Pixel;

/// A fixed-size rectangular grid of [`Pixel`]s.
///
/// Stores pixels in row-major order. Cloning is a deep copy of the grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Image {
    width: u32,
    height: u32,
    data: Vec<Pixel>,
}

impl Image {
    /// Creates a new image with the given dimensions, initialized to black.
    ///
    /// Both dimensions must be at least 1.
    pub fn new(width: u32, height: u32) -> Self {
        assert!(width >= 1 && height >= 1, "image must be non-empty");
        Image {
            width,
            height,
            data: vec![Pixel::black(); (width * height) as usize],
        }
    }

    /// Creates an image from a raw vector of pixels in row-major order.
    pub fn from_vec(width: u32, height: u32, data: Vec<Pixel>) -> Self {
        assert!(width >= 1 && height >= 1, "image must be non-empty");
        assert_eq!(data.len(), (width * height) as usize);
        Image {
            width,
            height,
            data,
        }
    }

    /// Creates an image filled with a single pixel value.
    pub fn from_pixel(width: u32, height: u32, pixel: Pixel) -> Self {
        assert!(width >= 1 && height >= 1, "image must be non-empty");
        Image {
            width,
            height,
            data: vec![pixel; (width * height) as usize],
        }
    }

    /// Creates an image by calling a function for each `(x, y)` position.
    pub fn from_fn<F>(width: u32, height: u32, mut f: F) -> Self
    where
        F: FnMut(u32, u32) -> Pixel,
    {
        assert!(width >= 1 && height >= 1, "image must be non-empty");
        let mut data = Vec::with_capacity((width * height) as usize);
        for y in 0..height {
            for x in 0..width {
                data.push(f(x, y));
            }
        }
        Image {
            width,
            height,
            data,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns the dimensions as a tuple (width, height).
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn get_pixel(&self, x: u32, y: u32) -> Pixel {
        assert!(x < self.width && y < self.height);
        self.data[(y * self.width + x) as usize]
    }

    pub fn pixels(&self) -> &[Pixel] {
        &self.data
    }

    /// Returns raw pixel data as a byte slice (row-major RGB triples).
    pub fn as_raw(&self) -> &[u8] {
        bytemuck::cast_slice(&self.data)
    }

    /// Applies a pure per-pixel function over the grid, returning a new image
    /// of the same dimensions.
    pub fn map<F>(&self, mut f: F) -> Image
    where
        F: FnMut(Pixel) -> Pixel,
    {
        Image {
            width: self.width,
            height: self.height,
            data: self.data.iter().map(|&p| f(p)).collect(),
        }
    }
}
