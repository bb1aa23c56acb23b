// src/ops/levels.rs

//! Piecewise levels adjustment.
//!
//! The control points `(b, 0)`, `(m, 128)`, `(w, 255)` define a quadratic
//! tone curve evaluated per channel. Inputs at or below `b` map to 0, at or
//! above `w` map to 255. The mid segment `b < c <= m` uses the historical
//! linear ramp `1.7 * (c - b)` rather than the quadratic; the engine's test
//! vectors are built against that ramp, so it stays.

use crate::image::{Image, Pixel};
use crate::utils::error::{RasterError, Result};

/// Validated shadow/mid/highlight control points with `0 <= b < m < w <= 255`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LevelsSpec {
    b: i32,
    m: i32,
    w: i32,
}

impl LevelsSpec {
    /// Builds a spec, enforcing strict ordering and channel bounds.
    pub fn new(b: i32, m: i32, w: i32) -> Result<Self> {
        if !(b >= 0 && b < m && m < w && w <= 255) {
            return Err(RasterError::InvalidArgument(format!(
                "levels require 0 <= b < m < w <= 255, got b={b} m={m} w={w}"
            )));
        }
        Ok(LevelsSpec { b, m, w })
    }

    pub fn shadow(&self) -> i32 {
        self.b
    }

    pub fn mid(&self) -> i32 {
        self.m
    }

    pub fn highlight(&self) -> i32 {
        self.w
    }

    /// Maps one channel value through the tone curve. Output is truncated to
    /// an integer; callers clamp via pixel construction.
    fn adjust(&self, value: i32) -> i32 {
        if value <= self.b {
            0
        } else if value >= self.w {
            255
        } else if value <= self.m {
            (1.7 * (value - self.b) as f64) as i32
        } else {
            let a = self.quadratic_coefficient();
            let b = self.linear_coefficient();
            let c = self.constant_coefficient();
            let v = value as f64;
            (a * v * v + b * v + c) as i32
        }
    }

    // The three coefficients of the quadratic through (b,0), (m,128), (w,255),
    // written as ratios of the same determinant.

    fn denominator(&self) -> f64 {
        let (b, m, w) = (self.b as f64, self.m as f64, self.w as f64);
        b * b * (m - w) - b * (m * m - w * w) + m * m * w - m * w * w
    }

    fn quadratic_coefficient(&self) -> f64 {
        let (b, m, w) = (self.b as f64, self.m as f64, self.w as f64);
        let numerator = -b * (128.0 - 255.0) + 128.0 * w - 255.0 * m;
        numerator / self.denominator()
    }

    fn linear_coefficient(&self) -> f64 {
        let (b, m, w) = (self.b as f64, self.m as f64, self.w as f64);
        let numerator = b * b * (128.0 - 255.0) + 255.0 * m * m - 128.0 * w * w;
        numerator / self.denominator()
    }

    fn constant_coefficient(&self) -> f64 {
        let (b, m, w) = (self.b as f64, self.m as f64, self.w as f64);
        let numerator =
            b * b * (255.0 * m - 128.0 * w) - b * (255.0 * m * m - 128.0 * w * w);
        numerator / self.denominator()
    }
}

impl Image {
    /// Applies the levels tone curve to every channel of every pixel.
    pub fn levels_adjust(&self, spec: LevelsSpec) -> Image {
        self.map(|p| {
            Pixel::new(
                spec.adjust(p.r as i32),
                spec.adjust(p.g as i32),
                spec.adjust(p.b as i32),
            )
        })
    }
}
