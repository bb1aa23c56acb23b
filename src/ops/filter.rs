// src/ops/filter.rs

//! The uniform filter capability and the split-preview composer.
//!
//! Every transform the editor exposes is a value of [`Filter`], applied
//! through one entry point. [`split_preview`] composes any filter with a
//! vertical split so interactive callers can show "filtered on the left,
//! original on the right" without the filters knowing about previews.

use crate::image::Image;
use crate::ops::levels::LevelsSpec;
use crate::utils::error::{RasterError, Result};

/// A transform from image to image, as a plain value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Filter {
    Red,
    Green,
    Blue,
    Value,
    Intensity,
    Luma,
    Sepia,
    Blur,
    Sharpen,
    Brighten(i32),
    HorizontalFlip,
    VerticalFlip,
    Levels(LevelsSpec),
    ColorCorrect,
    Compress(f64),
}

impl Filter {
    /// Applies the filter, producing a fresh image of the same dimensions.
    ///
    /// Only [`Filter::Compress`] can fail (percentage out of range); every
    /// other variant is total.
    pub fn apply(&self, image: &Image) -> Result<Image> {
        Ok(match *self {
            Filter::Red => image.red_component(),
            Filter::Green => image.green_component(),
            Filter::Blue => image.blue_component(),
            Filter::Value => image.value_component(),
            Filter::Intensity => image.intensity_component(),
            Filter::Luma => image.luma_component(),
            Filter::Sepia => image.sepia(),
            Filter::Blur => image.blur(),
            Filter::Sharpen => image.sharpen(),
            Filter::Brighten(delta) => image.brighten(delta),
            Filter::HorizontalFlip => image.horizontal_flip(),
            Filter::VerticalFlip => image.vertical_flip(),
            Filter::Levels(spec) => image.levels_adjust(spec),
            Filter::ColorCorrect => image.color_correct(),
            Filter::Compress(pct) => image.compress(pct)?,
        })
    }
}

/// Applies `filter` and overlays the result onto the original along a
/// vertical boundary at column `floor(W * percentage / 100)`: filtered
/// pixels strictly left of the boundary, original pixels from it onward.
///
/// Fails with [`RasterError::InvalidArgument`] when `percentage` is outside
/// `[0, 100]`.
pub fn split_preview(filter: &Filter, image: &Image, percentage: f64) -> Result<Image> {
    if !(0.0..=100.0).contains(&percentage) {
        return Err(RasterError::InvalidArgument(format!(
            "split percentage must be in [0, 100], got {percentage}"
        )));
    }

    let filtered = filter.apply(image)?;
    let (width, height) = image.dimensions();
    let split_col = (width as f64 * (percentage / 100.0)) as u32;

    Ok(Image::from_fn(width, height, |x, y| {
        if x < split_col {
            filtered.get_pixel(x, y)
        } else {
            image.get_pixel(x, y)
        }
    }))
}
