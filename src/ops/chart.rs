// src/ops/chart.rs

//! Rendering a histogram as a 256x256 line chart.
//!
//! White background, a light-gray grid every 16 pixels, and one polyline per
//! channel (drawn red, then green, then blue, so later channels overdraw
//! earlier ones). Bin heights are scaled to the largest bin count across all
//! three channels.

use crate::image::{Image, Pixel};
use crate::ops::histogram::Histogram;

const CHART_SIDE: u32 = 256;
const GRID_STEP: i32 = 16;

const LIGHT_GRAY: Pixel = Pixel {
    r: 192,
    g: 192,
    b: 192,
};
const RED: Pixel = Pixel { r: 255, g: 0, b: 0 };
const GREEN: Pixel = Pixel { r: 0, g: 255, b: 0 };
const BLUE: Pixel = Pixel { r: 0, g: 0, b: 255 };

/// A mutable 256x256 drawing surface. Purely an implementation detail of
/// chart rendering; the finished surface becomes an [`Image`].
struct Canvas {
    data: Vec<Pixel>,
}

impl Canvas {
    fn white() -> Self {
        Canvas {
            data: vec![Pixel::white(); (CHART_SIDE * CHART_SIDE) as usize],
        }
    }

    fn put(&mut self, x: i32, y: i32, color: Pixel) {
        if (0..CHART_SIDE as i32).contains(&x) && (0..CHART_SIDE as i32).contains(&y) {
            self.data[(y as u32 * CHART_SIDE + x as u32) as usize] = color;
        }
    }

    /// Bresenham line from `(x0, y0)` to `(x1, y1)`, endpoints included.
    fn line(&mut self, mut x0: i32, mut y0: i32, x1: i32, y1: i32, color: Pixel) {
        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            self.put(x0, y0, color);
            if x0 == x1 && y0 == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x0 += sx;
            }
            if e2 <= dx {
                err += dx;
                y0 += sy;
            }
        }
    }

    fn into_image(self) -> Image {
        Image::from_vec(CHART_SIDE, CHART_SIDE, self.data)
    }
}

/// Plots one channel's bins as a connected polyline, anchored at the bottom
/// left corner.
fn draw_polyline(canvas: &mut Canvas, bins: &[u32; 256], max_frequency: u32, color: Pixel) {
    let mut prev_x = 0;
    let mut prev_y = 255;

    for (i, &count) in bins.iter().enumerate() {
        let scaled = if max_frequency == 0 {
            0
        } else {
            ((count as f64 / max_frequency as f64) * 255.0) as i32
        };
        let x = i as i32;
        let y = 255 - scaled;

        canvas.line(prev_x, prev_y, x, y, color);
        prev_x = x;
        prev_y = y;
    }
}

/// Renders a [`Histogram`] as a 256x256 RGB chart image.
pub fn histogram_chart(hist: &Histogram) -> Image {
    let mut canvas = Canvas::white();

    for i in (0..CHART_SIDE as i32).step_by(GRID_STEP as usize) {
        canvas.line(i, 0, i, 255, LIGHT_GRAY);
        canvas.line(0, i, 255, i, LIGHT_GRAY);
    }

    let max_frequency = hist.max_frequency();
    draw_polyline(&mut canvas, hist.red(), max_frequency, RED);
    draw_polyline(&mut canvas, hist.green(), max_frequency, GREEN);
    draw_polyline(&mut canvas, hist.blue(), max_frequency, BLUE);

    canvas.into_image()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chart_is_always_256_square() {
        let img = Image::from_pixel(3, 3, Pixel::new(10, 200, 90));
        let chart = histogram_chart(&img.histogram());
        assert_eq!(chart.dimensions(), (256, 256));
    }

    #[test]
    fn background_is_white_and_grid_is_gray() {
        let img = Image::from_pixel(2, 2, Pixel::new(100, 100, 100));
        let chart = histogram_chart(&img.histogram());
        // off-grid, off-polyline position
        assert_eq!(chart.get_pixel(7, 7), Pixel::white());
        // a vertical grid line away from any polyline
        assert_eq!(chart.get_pixel(16, 7), LIGHT_GRAY);
    }

    #[test]
    fn dominant_bin_reaches_the_top() {
        // every pixel has the same channel values, so each channel has one
        // bin at max frequency, scaled to the full chart height
        let img = Image::from_pixel(4, 4, Pixel::new(100, 100, 100));
        let chart = histogram_chart(&img.histogram());
        // blue drew last, and bin 100 peaks at y = 0
        assert_eq!(chart.get_pixel(100, 0), BLUE);
    }

    #[test]
    fn baseline_is_drawn_along_the_bottom() {
        let img = Image::from_pixel(4, 4, Pixel::new(100, 100, 100));
        let chart = histogram_chart(&img.histogram());
        // bins far from 100 are empty, so the polylines hug y = 255
        assert_eq!(chart.get_pixel(200, 255), BLUE);
    }
}
