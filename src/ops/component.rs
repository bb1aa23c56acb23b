// src/ops/component.rs

//! Per-pixel color transforms.
//!
//! Each operation here is a pure function `Pixel -> Pixel` lifted over the
//! grid; output dimensions always equal input dimensions and there are no
//! failure paths.
//!
//! Luma deliberately rounds each weighted channel *before* summation. The
//! more common formulation rounds once after the sum; the two differ by at
//! most one gray level but the pre-rounding variant is what this engine's
//! test vectors are built against.

use crate::image::{Image, Pixel};
use crate::ops::round_half_up;

impl Image {
    /// Keeps only the red channel: `(r, g, b) -> (r, 0, 0)`.
    pub fn red_component(&self) -> Image {
        self.map(|p| Pixel::new(p.r as i32, 0, 0))
    }

    /// Keeps only the green channel: `(r, g, b) -> (0, g, 0)`.
    pub fn green_component(&self) -> Image {
        self.map(|p| Pixel::new(0, p.g as i32, 0))
    }

    /// Keeps only the blue channel: `(r, g, b) -> (0, 0, b)`.
    pub fn blue_component(&self) -> Image {
        self.map(|p| Pixel::new(0, 0, p.b as i32))
    }

    /// Grayscale by channel maximum.
    pub fn value_component(&self) -> Image {
        self.map(|p| {
            let v = p.r.max(p.g).max(p.b) as i32;
            Pixel::gray(v)
        })
    }

    /// Grayscale by truncating channel mean: `(r + g + b) / 3`.
    pub fn intensity_component(&self) -> Image {
        self.map(|p| {
            let v = (p.r as i32 + p.g as i32 + p.b as i32) / 3;
            Pixel::gray(v)
        })
    }

    /// Grayscale by Rec. 709 luma, each weighted channel rounded half-up
    /// before the channels are summed.
    pub fn luma_component(&self) -> Image {
        self.map(|p| {
            let r = round_half_up(0.2126 * p.r as f64);
            let g = round_half_up(0.7152 * p.g as f64);
            let b = round_half_up(0.0722 * p.b as f64);
            Pixel::gray(r + g + b)
        })
    }

    /// Sepia tone. Weighted sums are truncated to integers, then clamped.
    pub fn sepia(&self) -> Image {
        self.map(|p| {
            let (r, g, b) = (p.r as f64, p.g as f64, p.b as f64);
            let new_r = (0.393 * r + 0.769 * g + 0.189 * b) as i32;
            let new_g = (0.349 * r + 0.686 * g + 0.168 * b) as i32;
            let new_b = (0.272 * r + 0.534 * g + 0.131 * b) as i32;
            Pixel::new(new_r, new_g, new_b)
        })
    }

    /// Adds a signed increment to every channel, clamping the result.
    /// Negative increments darken.
    pub fn brighten(&self, increment: i32) -> Image {
        self.map(|p| {
            Pixel::new(
                p.r as i32 + increment,
                p.g as i32 + increment,
                p.b as i32 + increment,
            )
        })
    }
}
