// src/ops/kernel.rs

//! Generic 2-D convolution and the fixed blur/sharpen kernels.
//!
//! Kernel positions that fall outside the image contribute zero to the sum
//! (zero-padding boundary). Channel sums are accumulated in `f64`, rounded
//! half-up, then clamped by pixel construction.

use crate::image::{Image, Pixel};
use crate::ops::round_half_up;

/// A rectangular convolution kernel with odd side lengths.
///
/// Coefficients are addressed as `(kx, ky)` where `kx` moves along the image
/// x axis; the kernel is centred on the output pixel with offsets
/// `width / 2` and `height / 2`.
#[derive(Clone, Debug)]
pub struct Kernel {
    width: usize,
    height: usize,
    coeffs: Vec<f64>,
}

impl Kernel {
    /// Creates a kernel from coefficients in `(kx, ky)` order
    /// (`coeffs[kx * height + ky]`). Both sides must be odd.
    pub fn new(width: usize, height: usize, coeffs: Vec<f64>) -> Self {
        assert!(width % 2 == 1 && height % 2 == 1, "kernel sides must be odd");
        assert_eq!(coeffs.len(), width * height);
        Kernel {
            width,
            height,
            coeffs,
        }
    }

    /// Creates a square kernel from a coefficient matrix.
    pub fn square<const N: usize>(rows: [[f64; N]; N]) -> Self {
        let mut coeffs = Vec::with_capacity(N * N);
        for row in rows.iter() {
            coeffs.extend_from_slice(row);
        }
        Kernel::new(N, N, coeffs)
    }

    fn coeff(&self, kx: usize, ky: usize) -> f64 {
        self.coeffs[kx * self.height + ky]
    }

    /// The 3x3 Gaussian-like blur kernel.
    pub fn blur() -> Self {
        Kernel::square([
            [1.0 / 16.0, 1.0 / 8.0, 1.0 / 16.0],
            [1.0 / 8.0, 1.0 / 4.0, 1.0 / 8.0],
            [1.0 / 16.0, 1.0 / 8.0, 1.0 / 16.0],
        ])
    }

    /// The 5x5 sharpen kernel. The matrix is kept exactly as the engine has
    /// always shipped it, fourth row included.
    pub fn sharpen() -> Self {
        const E: f64 = -1.0 / 8.0;
        const Q: f64 = 1.0 / 4.0;
        Kernel::square([
            [E, E, E, E, E],
            [E, Q, Q, Q, E],
            [E, Q, 1.0, Q, E],
            [E, E, E, E, E],
            [E, Q, Q, Q, E],
        ])
    }
}

impl Image {
    /// Convolves the image with `kernel`, treating out-of-bounds samples as
    /// zero. Each channel sum is rounded half-up and clamped.
    pub fn convolve(&self, kernel: &Kernel) -> Image {
        let (width, height) = self.dimensions();
        let ox = (kernel.width / 2) as i64;
        let oy = (kernel.height / 2) as i64;

        Image::from_fn(width, height, |x, y| {
            let mut red_sum = 0.0;
            let mut green_sum = 0.0;
            let mut blue_sum = 0.0;

            for kx in 0..kernel.width {
                for ky in 0..kernel.height {
                    let px = x as i64 + kx as i64 - ox;
                    let py = y as i64 + ky as i64 - oy;

                    if px >= 0 && px < width as i64 && py >= 0 && py < height as i64 {
                        let p = self.get_pixel(px as u32, py as u32);
                        let c = kernel.coeff(kx, ky);
                        red_sum += p.r as f64 * c;
                        green_sum += p.g as f64 * c;
                        blue_sum += p.b as f64 * c;
                    }
                }
            }

            Pixel::new(
                round_half_up(red_sum),
                round_half_up(green_sum),
                round_half_up(blue_sum),
            )
        })
    }

    /// Applies the fixed 3x3 blur kernel.
    pub fn blur(&self) -> Image {
        self.convolve(&Kernel::blur())
    }

    /// Applies the fixed 5x5 sharpen kernel.
    pub fn sharpen(&self) -> Image {
        self.convolve(&Kernel::sharpen())
    }
}
