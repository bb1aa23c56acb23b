//! A raster-image editor library with a fixed catalog of pixel-level
//! transformations.
//!
//! The heart of the crate is a pure transformation engine over 24-bit RGB
//! images: channel extraction, tone mapping, convolution filters, geometric
//! flips, histogram analysis and color correction, piecewise levels
//! adjustment, and lossy compression through a 2-D Haar wavelet transform.
//! Around it sit thin boundary layers: PPM/PNG/JPEG adapters, a named-image
//! registry, and a one-verb-per-line command dispatcher.
//!
//! # Quick Start
//!
//! ```
//! use rasterlab::{Filter, Image, Pixel, split_preview};
//!
//! let img = Image::from_fn(64, 64, |x, y| {
//!     Pixel::new((x * 4) as i32, (y * 4) as i32, 128)
//! });
//!
//! // Apply a filter directly...
//! let blurred = Filter::Blur.apply(&img).unwrap();
//! assert_eq!(blurred.dimensions(), img.dimensions());
//!
//! // ...or preview it on the left 40% of the image.
//! let preview = split_preview(&Filter::Blur, &img, 40.0).unwrap();
//! assert_eq!(preview.get_pixel(60, 0), img.get_pixel(60, 0));
//! ```
//!
//! # Commands
//!
//! The same operations are reachable through the script/interactive surface:
//!
//! ```text
//! load photos/koala.ppm koala
//! blur koala koala-soft split 50
//! levels-adjust 20 100 255 koala koala-graded
//! save out/koala-graded.png koala-graded
//! ```

// Core modules
pub mod command;
pub mod image;
pub mod io;
pub mod ops;
pub mod registry;
pub mod utils;

// Image types
pub use self::image::{Image, Pixel};

// Engine surface
pub use ops::{Filter, Histogram, Kernel, LevelsSpec, histogram_chart, split_preview};

// Boundary types
pub use command::Command;
pub use registry::Registry;

// Error types
pub use utils::error::{RasterError, Result};

// Constants
pub const RASTERLAB_VERSION: &str = "0.4.0";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert_eq!(RASTERLAB_VERSION, "0.4.0");
    }

    #[test]
    fn test_public_api_round_trip() {
        let img = Image::from_pixel(2, 2, Pixel::new(12, 34, 56));
        let mut reg = Registry::new();
        reg.put("a", img.clone());

        let cmd = Command::parse("vertical-flip a b").unwrap();
        cmd.execute(&mut reg).unwrap();
        assert_eq!(*reg.get("b").unwrap(), img.vertical_flip());
    }
}
