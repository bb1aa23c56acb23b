// src/ops/haar.rs

//! Lossy compression via the 2-D Haar wavelet transform.
//!
//! The pipeline per channel is: zero-pad to a power-of-two square, forward
//! transform, zero every coefficient whose magnitude falls below a threshold
//! chosen from the requested percentage, inverse transform, crop back,
//! quantize to 8-bit.
//!
//! Two properties of the arithmetic are contract, not accident, because the
//! engine's reference outputs depend on them:
//!
//! * every average `(a + b) / sqrt(2)` and difference `(a - b) / sqrt(2)` is
//!   rounded half-up to two decimal places the moment it is produced;
//! * each 1-D pass inside a 2-D round is the *full* cascade over the working
//!   prefix (the averages are themselves re-transformed down to length 1),
//!   and the 2-D round then halves the working square and runs again. The
//!   inverse mirrors this exactly, columns before rows.
//!
//! The threshold ranks the *distinct* absolute coefficient magnitudes across
//! all three channel planes; duplicates collapse to one rank.

use log::debug;

use crate::image::{Image, Pixel};
use crate::utils::error::{RasterError, Result};

/// Rounds to two decimal places, half-up: `floor(v * 100 + 0.5) / 100`.
fn round2(v: f64) -> f64 {
    (v * 100.0 + 0.5).floor() / 100.0
}

/// Smallest power of two greater than or equal to `n`.
fn next_power_of_two(n: usize) -> usize {
    let mut power = 1;
    while power < n {
        power <<= 1;
    }
    power
}

/// One average/difference step over a segment: the first half of the output
/// holds pairwise averages, the second half pairwise differences. A missing
/// pair element (odd length) counts as zero.
fn avg_diff(segment: &[f64]) -> Vec<f64> {
    let sqrt_two = 2.0_f64.sqrt();
    let pairs = segment.len().div_ceil(2);
    let mut avg = Vec::with_capacity(pairs * 2);
    let mut diff = Vec::with_capacity(pairs);

    let mut i = 0;
    while i < segment.len() {
        let a = segment[i];
        let b = if i + 1 < segment.len() { segment[i + 1] } else { 0.0 };
        avg.push(round2((a + b) / sqrt_two));
        diff.push(round2((a - b) / sqrt_two));
        i += 2;
    }

    avg.extend_from_slice(&diff);
    avg
}

/// Inverse of one average/difference step: reads the first half as averages,
/// the second half as differences, and reconstructs the interleaved values.
fn avg_diff_inverse(segment: &[f64]) -> Vec<f64> {
    let sqrt_two = 2.0_f64.sqrt();
    let half = segment.len() / 2;
    let mut original = Vec::with_capacity(half * 2);

    for i in 0..half {
        let a = segment[i];
        let b = segment[i + half];
        original.push(round2((a + b) / sqrt_two));
        original.push(round2((a - b) / sqrt_two));
    }

    original
}

/// Full forward cascade over `segment`: repeats the average/difference step
/// on a prefix that halves from the segment's length down to 2.
fn transform_1d(segment: &mut [f64]) {
    let mut m = segment.len();
    while m > 1 {
        let step = avg_diff(&segment[..m]);
        segment[..m].copy_from_slice(&step[..m]);
        m /= 2;
    }
}

/// Full inverse cascade over `segment`: inverts prefixes that double from 2
/// up to the segment's length.
fn invert_1d(segment: &mut [f64]) {
    let mut m = 2;
    while m <= segment.len() {
        let step = avg_diff_inverse(&segment[..m]);
        segment[..m].copy_from_slice(&step[..m]);
        m *= 2;
    }
}

/// A square scratch plane of real-valued coefficients for one channel.
///
/// Addressed as `(i, j)` where `i` mirrors the image x axis; "rows" in the
/// transforms below vary `j` within one `i`.
pub(crate) struct HaarPlane {
    side: usize,
    data: Vec<f64>,
}

impl HaarPlane {
    /// Zero-pads one channel of `image` into a square plane whose side is
    /// the smallest power of two >= max(W, H).
    fn pad<F>(image: &Image, channel: F) -> Self
    where
        F: Fn(Pixel) -> f64,
    {
        let (width, height) = image.dimensions();
        let side = next_power_of_two(width.max(height) as usize);
        let mut data = vec![0.0; side * side];

        for x in 0..width {
            for y in 0..height {
                data[x as usize * side + y as usize] = channel(image.get_pixel(x, y));
            }
        }

        HaarPlane { side, data }
    }

    fn row_mut(&mut self, i: usize, len: usize) -> &mut [f64] {
        let start = i * self.side;
        &mut self.data[start..start + len]
    }

    /// Forward 2-D transform: rows then columns over a working square that
    /// halves each round.
    fn forward(&mut self) {
        let mut c = self.side;
        while c > 1 {
            for i in 0..c {
                transform_1d(self.row_mut(i, c));
            }
            for j in 0..c {
                let mut column: Vec<f64> = (0..c).map(|i| self.data[i * self.side + j]).collect();
                transform_1d(&mut column);
                for (i, v) in column.into_iter().enumerate() {
                    self.data[i * self.side + j] = v;
                }
            }
            c /= 2;
        }
    }

    /// Inverse 2-D transform: columns then rows over a working square that
    /// doubles each round.
    fn inverse(&mut self) {
        let mut c = 2;
        while c <= self.side {
            for j in 0..c {
                let mut column: Vec<f64> = (0..c).map(|i| self.data[i * self.side + j]).collect();
                invert_1d(&mut column);
                for (i, v) in column.into_iter().enumerate() {
                    self.data[i * self.side + j] = v;
                }
            }
            for i in 0..c {
                invert_1d(self.row_mut(i, c));
            }
            c *= 2;
        }
    }

    /// Zeroes every coefficient with magnitude strictly below `threshold`.
    fn zero_below(&mut self, threshold: f64) {
        for v in self.data.iter_mut() {
            if v.abs() < threshold {
                *v = 0.0;
            }
        }
    }

    /// Reads the unpadded value at image position `(x, y)`.
    fn get(&self, x: u32, y: u32) -> f64 {
        self.data[x as usize * self.side + y as usize]
    }
}

/// Ranks the distinct absolute coefficient magnitudes across all planes and
/// returns the value at index `floor((n - 1) * p / 100)` of the ascending
/// order. A percentage of 100 yields +infinity, which zeroes every
/// coefficient.
fn threshold(planes: &[HaarPlane; 3], percentage: f64) -> f64 {
    if percentage == 100.0 {
        return f64::INFINITY;
    }

    let mut magnitudes: Vec<f64> = planes
        .iter()
        .flat_map(|plane| plane.data.iter().map(|v| v.abs()))
        .collect();
    magnitudes.sort_by(f64::total_cmp);
    magnitudes.dedup();

    let index = ((magnitudes.len() - 1) as f64 * (percentage / 100.0)) as usize;
    magnitudes[index]
}

impl Image {
    /// Compresses the image by zeroing the smallest `percentage` percent of
    /// distinct Haar coefficient magnitudes, then reconstructing.
    ///
    /// Fails with [`RasterError::InvalidArgument`] when `percentage` is
    /// outside `[0, 100]`. At 100 every coefficient is dropped and the
    /// result is all black.
    pub fn compress(&self, percentage: f64) -> Result<Image> {
        if !(0.0..=100.0).contains(&percentage) {
            return Err(RasterError::InvalidArgument(format!(
                "compression percentage must be in [0, 100], got {percentage}"
            )));
        }

        let mut planes = [
            HaarPlane::pad(self, |p| p.r as f64),
            HaarPlane::pad(self, |p| p.g as f64),
            HaarPlane::pad(self, |p| p.b as f64),
        ];

        for plane in planes.iter_mut() {
            plane.forward();
        }

        let tau = threshold(&planes, percentage);
        debug!(
            "compress p={percentage} side={} threshold={tau}",
            planes[0].side
        );

        for plane in planes.iter_mut() {
            plane.zero_below(tau);
            plane.inverse();
        }

        let (width, height) = self.dimensions();
        Ok(Image::from_fn(width, height, |x, y| {
            // truncate toward zero, then clamp
            Pixel::new(
                planes[0].get(x, y) as i32,
                planes[1].get(x, y) as i32,
                planes[2].get(x, y) as i32,
            )
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round2_is_half_up() {
        // 0.125 * 100 = 12.5 exactly; half rounds up
        assert_eq!(round2(0.125), 0.13);
        assert_eq!(round2(1.004), 1.0);
        // half-up means toward +infinity, not away from zero
        assert_eq!(round2(-0.125), -0.12);
    }

    #[test]
    fn power_of_two_padding_sizes() {
        assert_eq!(next_power_of_two(1), 1);
        assert_eq!(next_power_of_two(2), 2);
        assert_eq!(next_power_of_two(3), 4);
        assert_eq!(next_power_of_two(5), 8);
        assert_eq!(next_power_of_two(8), 8);
        assert_eq!(next_power_of_two(9), 16);
    }

    #[test]
    fn avg_diff_lays_out_averages_then_differences() {
        let out = avg_diff(&[4.0, 2.0, 8.0, 6.0]);
        // (4+2)/sqrt2 = 4.24, (8+6)/sqrt2 = 9.9, diffs 1.41, 1.41
        assert_eq!(out, vec![4.24, 9.9, 1.41, 1.41]);
    }

    #[test]
    fn avg_diff_inverse_undoes_one_step_within_rounding() {
        let original = [4.0, 2.0, 8.0, 6.0];
        let forward = avg_diff(&original);
        let back = avg_diff_inverse(&forward);
        for (a, b) in original.iter().zip(back.iter()) {
            assert!((a - b).abs() < 0.05, "{a} vs {b}");
        }
    }

    #[test]
    fn cascade_round_trips_within_rounding() {
        let mut seq = vec![10.0, 20.0, 30.0, 40.0, 50.0, 60.0, 70.0, 80.0];
        let original = seq.clone();
        transform_1d(&mut seq);
        invert_1d(&mut seq);
        for (a, b) in original.iter().zip(seq.iter()) {
            assert!((a - b).abs() < 0.2, "{a} vs {b}");
        }
    }

    #[test]
    fn threshold_ranks_distinct_magnitudes_only() {
        let mut planes = [
            HaarPlane { side: 2, data: vec![1.0, -1.0, 2.0, 2.0] },
            HaarPlane { side: 2, data: vec![3.0, 3.0, 3.0, 3.0] },
            HaarPlane { side: 2, data: vec![4.0, 0.0, 0.0, 0.0] },
        ];
        // distinct magnitudes: 0, 1, 2, 3, 4
        assert_eq!(threshold(&planes, 0.0), 0.0);
        assert_eq!(threshold(&planes, 50.0), 2.0);
        assert_eq!(threshold(&planes, 75.0), 3.0);
        assert!(threshold(&planes, 100.0).is_infinite());
        // duplicating a magnitude must not move any rank
        planes[0].data[0] = 2.0;
        assert_eq!(threshold(&planes, 50.0), 2.0);
    }

    #[test]
    fn full_compression_yields_black() {
        let img = Image::from_pixel(3, 3, Pixel::new(200, 100, 50));
        let out = img.compress(100.0).unwrap();
        assert!(out.pixels().iter().all(|p| *p == Pixel::black()));
    }

    #[test]
    fn zero_compression_is_near_identity() {
        let img = Image::from_fn(3, 3, |x, y| {
            Pixel::new((x * 80) as i32, (y * 80) as i32, ((x + y) * 40) as i32)
        });
        let out = img.compress(0.0).unwrap();
        assert_eq!(out.dimensions(), img.dimensions());
        for (a, b) in img.pixels().iter().zip(out.pixels().iter()) {
            assert!((a.r as i32 - b.r as i32).abs() <= 2);
            assert!((a.g as i32 - b.g as i32).abs() <= 2);
            assert!((a.b as i32 - b.b as i32).abs() <= 2);
        }
    }

    #[test]
    fn non_square_images_pad_and_crop_cleanly() {
        let img = Image::from_fn(5, 3, |x, y| Pixel::new((x * 40) as i32, (y * 70) as i32, 128));
        let out = img.compress(20.0).unwrap();
        assert_eq!(out.dimensions(), (5, 3));
    }

    #[test]
    fn out_of_range_percentage_is_rejected() {
        let img = Image::new(2, 2);
        assert!(matches!(
            img.compress(-0.5),
            Err(RasterError::InvalidArgument(_))
        ));
        assert!(matches!(
            img.compress(100.5),
            Err(RasterError::InvalidArgument(_))
        ));
    }
}
