// src/ops/histogram.rs

//! Channel histograms, peak detection and peak-based color correction.

use log::debug;

use crate::image::Image;

/// Per-channel frequency counts: three 256-bin arrays computed in one pass.
///
/// For a `W x H` image, each channel's bins sum to `W * H`.
#[derive(Clone, Debug)]
pub struct Histogram {
    red: [u32; 256],
    green: [u32; 256],
    blue: [u32; 256],
}

impl Histogram {
    /// Counts channel frequencies over the whole image.
    pub fn of(image: &Image) -> Self {
        let mut red = [0u32; 256];
        let mut green = [0u32; 256];
        let mut blue = [0u32; 256];

        for p in image.pixels() {
            red[p.r as usize] += 1;
            green[p.g as usize] += 1;
            blue[p.b as usize] += 1;
        }

        Histogram { red, green, blue }
    }

    pub fn red(&self) -> &[u32; 256] {
        &self.red
    }

    pub fn green(&self) -> &[u32; 256] {
        &self.green
    }

    pub fn blue(&self) -> &[u32; 256] {
        &self.blue
    }

    /// The largest bin count across all three channels.
    pub fn max_frequency(&self) -> u32 {
        let mut max = 0;
        for bins in [&self.red, &self.green, &self.blue] {
            for &v in bins.iter() {
                if v > max {
                    max = v;
                }
            }
        }
        max
    }
}

/// Finds the meaningful peak of one channel: the bin in `11..245` with the
/// strictly largest frequency, lowest index winning ties. Returns -1 when
/// every bin in the range is empty.
///
/// The range excludes near-black and near-white bins so that clipped
/// shadows/highlights cannot dominate the peak.
pub(crate) fn meaningful_peak(bins: &[u32; 256]) -> i32 {
    let mut peak_value = -1;
    let mut peak_frequency = 0u32;

    for i in 11..245 {
        if bins[i] > peak_frequency {
            peak_frequency = bins[i];
            peak_value = i as i32;
        }
    }

    peak_value
}

impl Image {
    /// Computes the per-channel histogram of this image.
    pub fn histogram(&self) -> Histogram {
        Histogram::of(self)
    }

    /// Aligns the meaningful peaks of the three channels to their average:
    /// every channel value is shifted by `avg_peak - channel_peak` and
    /// clamped.
    pub fn color_correct(&self) -> Image {
        let hist = self.histogram();

        let red_peak = meaningful_peak(hist.red());
        let green_peak = meaningful_peak(hist.green());
        let blue_peak = meaningful_peak(hist.blue());
        let average_peak = (red_peak + green_peak + blue_peak) / 3;

        debug!(
            "color-correct peaks r={red_peak} g={green_peak} b={blue_peak} avg={average_peak}"
        );

        let dr = average_peak - red_peak;
        let dg = average_peak - green_peak;
        let db = average_peak - blue_peak;

        self.map(|p| {
            crate::image::Pixel::new(p.r as i32 + dr, p.g as i32 + dg, p.b as i32 + db)
        })
    }
}
