//! The image transformation engine.
//!
//! Every operation here is pure: it consumes an [`crate::image::Image`] by
//! reference and returns a freshly allocated one. Nothing in this module
//! knows about files, formats or image names.

pub mod channels;
pub mod chart;
pub mod component;
pub mod filter;
pub mod geometry;
pub mod haar;
pub mod histogram;
pub mod kernel;
pub mod levels;

pub use chart::histogram_chart;
pub use filter::{Filter, split_preview};
pub use histogram::Histogram;
pub use kernel::Kernel;
pub use levels::LevelsSpec;

/// Round-to-nearest with halves going up, as convolution and luma require.
pub(crate) fn round_half_up(value: f64) -> i32 {
    (value + 0.5).floor() as i32
}
