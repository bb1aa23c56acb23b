//! File-format boundary: decoding and encoding images on disk.
//!
//! The adapter is chosen by file extension. Plain PPM is implemented
//! natively in [`ppm`]; PNG and JPEG delegate to the `image` crate. Whatever
//! the container, the in-memory result is always the same 24-bit
//! [`Image`] value.

pub mod ppm;

use std::path::Path;

use log::info;

use crate::image::{Image, Pixel};
use crate::utils::error::{RasterError, Result};

/// Formats the editor can read and write.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Format {
    Ppm,
    Png,
    Jpeg,
}

fn format_for(path: &Path) -> Result<Format> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "ppm" => Ok(Format::Ppm),
        "png" => Ok(Format::Png),
        "jpg" | "jpeg" => Ok(Format::Jpeg),
        _ => Err(RasterError::InvalidFormat(format!(
            "unsupported file extension for {path:?} (expected ppm, png, jpg or jpeg)"
        ))),
    }
}

/// Decodes an image, selecting the adapter by file extension.
pub fn decode(path: &Path) -> Result<Image> {
    let image = match format_for(path)? {
        Format::Ppm => ppm::load(path)?,
        Format::Png | Format::Jpeg => {
            let rgb = image::open(path)?.to_rgb8();
            let (width, height) = rgb.dimensions();
            if width < 1 || height < 1 {
                return Err(RasterError::InvalidFormat(format!("{path:?} is empty")));
            }
            Image::from_fn(width, height, |x, y| {
                let image::Rgb([r, g, b]) = *rgb.get_pixel(x, y);
                Pixel::from([r, g, b])
            })
        }
    };
    info!("decoded {:?} ({}x{})", path, image.width(), image.height());
    Ok(image)
}

/// Encodes an image, selecting the adapter by file extension.
pub fn encode(path: &Path, img: &Image) -> Result<()> {
    match format_for(path)? {
        Format::Ppm => ppm::save(path, img)?,
        Format::Png | Format::Jpeg => {
            let (width, height) = img.dimensions();
            let buffer =
                image::RgbImage::from_raw(width, height, img.as_raw().to_vec()).ok_or_else(
                    || RasterError::InvalidFormat("pixel buffer does not match dimensions".into()),
                )?;
            buffer.save(path)?;
        }
    }
    info!("encoded {:?} ({}x{})", path, img.width(), img.height());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn extension_selection_is_case_insensitive() {
        assert_eq!(format_for(Path::new("a.PPM")).unwrap(), Format::Ppm);
        assert_eq!(format_for(Path::new("a.Png")).unwrap(), Format::Png);
        assert_eq!(format_for(Path::new("a.JPEG")).unwrap(), Format::Jpeg);
        assert_eq!(format_for(Path::new("a.jpg")).unwrap(), Format::Jpeg);
    }

    #[test]
    fn unknown_extensions_are_rejected() {
        for name in ["a.gif", "a.bmp", "noext", "a."] {
            assert!(
                matches!(
                    format_for(&PathBuf::from(name)),
                    Err(RasterError::InvalidFormat(_))
                ),
                "{name}"
            );
        }
    }
}
