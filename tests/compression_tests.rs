// tests/compression_tests.rs

//! Behavioral tests for Haar-wavelet compression: monotone degradation,
//! padding behavior, and the distinct-magnitude threshold edge cases.

use rasterlab::{Image, Pixel, RasterError};

fn checkerboard(width: u32, height: u32) -> Image {
    Image::from_fn(width, height, |x, y| {
        if (x + y) % 2 == 0 {
            Pixel::new(220, 40, 180)
        } else {
            Pixel::new(40, 220, 60)
        }
    })
}

fn mean_abs_diff(a: &Image, b: &Image) -> f64 {
    let mut total = 0i64;
    for (p, q) in a.pixels().iter().zip(b.pixels().iter()) {
        total += (p.r as i64 - q.r as i64).abs()
            + (p.g as i64 - q.g as i64).abs()
            + (p.b as i64 - q.b as i64).abs();
    }
    total as f64 / (a.pixels().len() * 3) as f64
}

#[test]
fn dimensions_survive_any_percentage() {
    let img = checkerboard(6, 5);
    for p in [0.0, 10.0, 33.3, 50.0, 90.0, 100.0] {
        assert_eq!(img.compress(p).unwrap().dimensions(), (6, 5), "p={p}");
    }
}

#[test]
fn heavier_compression_never_reconstructs_better() {
    let img = Image::from_fn(8, 8, |x, y| {
        Pixel::new(
            (x * 30) as i32,
            (y * 30) as i32,
            ((x * y) % 17) as i32 * 15,
        )
    });
    let light = mean_abs_diff(&img, &img.compress(5.0).unwrap());
    let heavy = mean_abs_diff(&img, &img.compress(95.0).unwrap());
    assert!(
        light <= heavy,
        "light={light:.3} should not exceed heavy={heavy:.3}"
    );
}

#[test]
fn solid_color_survives_moderate_compression() {
    // a solid image has exactly one nonzero coefficient per channel, so the
    // energy either survives intact or (at p=100) vanishes entirely
    let img = Image::from_pixel(4, 4, Pixel::new(130, 130, 130));
    let out = img.compress(50.0).unwrap();
    for p in out.pixels() {
        assert!((p.r as i32 - 130).abs() <= 1, "{p:?}");
    }
}

#[test]
fn full_percentage_blacks_out_every_shape() {
    for (w, h) in [(1, 1), (3, 3), (5, 2), (8, 8)] {
        let out = checkerboard(w, h).compress(100.0).unwrap();
        assert!(
            out.pixels().iter().all(|p| *p == Pixel::black()),
            "{w}x{h}"
        );
    }
}

#[test]
fn single_pixel_image_compresses() {
    let img = Image::from_pixel(1, 1, Pixel::new(77, 88, 99));
    let out = img.compress(0.0).unwrap();
    let p = out.get_pixel(0, 0);
    assert!((p.r as i32 - 77).abs() <= 1);
    assert!((p.g as i32 - 88).abs() <= 1);
    assert!((p.b as i32 - 99).abs() <= 1);
}

#[test]
fn wide_and_tall_images_pad_to_the_larger_side() {
    // 9x2 pads to 16x16 and must crop back cleanly
    let wide = checkerboard(9, 2);
    assert_eq!(wide.compress(25.0).unwrap().dimensions(), (9, 2));
    let tall = checkerboard(2, 9);
    assert_eq!(tall.compress(25.0).unwrap().dimensions(), (2, 9));
}

#[test]
fn invalid_percentages_leave_a_structured_error() {
    let img = checkerboard(3, 3);
    for p in [-10.0, -0.01, 100.01, 400.0] {
        match img.compress(p) {
            Err(RasterError::InvalidArgument(msg)) => {
                assert!(msg.contains("percentage"), "{msg}")
            }
            other => panic!("p={p}: expected InvalidArgument, got {other:?}"),
        }
    }
}

#[test]
fn compression_is_deterministic() {
    let img = checkerboard(7, 4);
    assert_eq!(img.compress(40.0).unwrap(), img.compress(40.0).unwrap());
}
