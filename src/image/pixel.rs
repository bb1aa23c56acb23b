// src/image/pixel.rs

//! The 8-bit RGB pixel type.

use bytemuck::{Pod, Zeroable};

/// A single RGB pixel with 8-bit components.
///
/// Construction through [`Pixel::new`] clamps each channel into `[0, 255]`,
/// so a `Pixel` can never hold an out-of-range value. The struct is `Copy`
/// and `#[repr(C)]` so pixel buffers can be viewed as raw bytes.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Pod, Zeroable)]
pub struct Pixel {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Pixel {
    /// Creates a pixel, clamping each channel into `[0, 255]`.
    pub fn new(r: i32, g: i32, b: i32) -> Self {
        Pixel {
            r: clamp(r),
            g: clamp(g),
            b: clamp(b),
        }
    }

    pub fn black() -> Self {
        Pixel { r: 0, g: 0, b: 0 }
    }

    pub fn white() -> Self {
        Pixel {
            r: 255,
            g: 255,
            b: 255,
        }
    }

    /// Creates a gray pixel with all three channels set to `v` (clamped).
    pub fn gray(v: i32) -> Self {
        let v = clamp(v);
        Pixel { r: v, g: v, b: v }
    }
}

impl From<[u8; 3]> for Pixel {
    fn from(arr: [u8; 3]) -> Self {
        Pixel {
            r: arr[0],
            g: arr[1],
            b: arr[2],
        }
    }
}

impl From<Pixel> for [u8; 3] {
    fn from(p: Pixel) -> Self {
        [p.r, p.g, p.b]
    }
}

fn clamp(value: i32) -> u8 {
    if value < 0 {
        0
    } else if value > 255 {
        255
    } else {
        value as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construction_clamps_to_channel_range() {
        let p = Pixel::new(-20, 300, 128);
        assert_eq!(p, Pixel { r: 0, g: 255, b: 128 });
    }

    #[test]
    fn boundary_values_survive() {
        let p = Pixel::new(0, 255, 1);
        assert_eq!((p.r, p.g, p.b), (0, 255, 1));
    }

    #[test]
    fn gray_sets_all_channels() {
        assert_eq!(Pixel::gray(77), Pixel::new(77, 77, 77));
        assert_eq!(Pixel::gray(999), Pixel::white());
    }

    #[test]
    fn byte_array_round_trip() {
        let p = Pixel::from([10, 20, 30]);
        let arr: [u8; 3] = p.into();
        assert_eq!(arr, [10, 20, 30]);
    }
}
