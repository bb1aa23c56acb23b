// src/io/ppm.rs

//! Plain-text PPM ("P3") codec.
//!
//! This is the one container the editor implements itself. The format is an
//! ASCII header `P3`, width, height, max channel value (at most 255), then
//! `W * H` pixel triples as whitespace-separated decimals in row-major
//! order. Lines starting with `#` are comments and are stripped before any
//! parsing.

use std::fs;
use std::io::Write;
use std::path::Path;

use log::debug;

use crate::image::{Image, Pixel};
use crate::utils::error::{RasterError, Result};

const MAGIC: &str = "P3";

// Caps the pixel count a header may declare, so a hostile header cannot
// drive a huge allocation before the body runs dry.
const MAX_PIXELS: u64 = 1 << 26;

fn invalid(msg: impl Into<String>) -> RasterError {
    RasterError::InvalidFormat(msg.into())
}

/// Parses a plain PPM document from text.
pub fn parse(text: &str) -> Result<Image> {
    let body: String = text
        .lines()
        .filter(|line| !line.starts_with('#'))
        .collect::<Vec<_>>()
        .join("\n");

    let mut tokens = body.split_whitespace();

    match tokens.next() {
        Some(MAGIC) => {}
        _ => return Err(invalid("plain PPM must begin with P3")),
    }

    let width = next_int(&mut tokens, "width")?;
    let height = next_int(&mut tokens, "height")?;
    let max_value = next_int(&mut tokens, "max value")?;

    if width < 1 || height < 1 {
        return Err(invalid(format!("bad dimensions {width}x{height}")));
    }
    let pixel_count = width as u64 * height as u64;
    if pixel_count > MAX_PIXELS {
        return Err(invalid(format!(
            "refusing {width}x{height}: more than {MAX_PIXELS} pixels"
        )));
    }
    if max_value > 255 {
        return Err(invalid(format!(
            "unsupported color depth {max_value}, maximum is 255"
        )));
    }

    let mut data = Vec::with_capacity(pixel_count as usize);
    for _ in 0..pixel_count {
        let r = next_int(&mut tokens, "red sample")?;
        let g = next_int(&mut tokens, "green sample")?;
        let b = next_int(&mut tokens, "blue sample")?;
        data.push(Pixel::new(r, g, b));
    }

    Ok(Image::from_vec(width as u32, height as u32, data))
}

fn next_int<'a, I>(tokens: &mut I, what: &str) -> Result<i32>
where
    I: Iterator<Item = &'a str>,
{
    let token = tokens
        .next()
        .ok_or_else(|| invalid(format!("unexpected end of file, expected {what}")))?;
    token
        .parse::<i32>()
        .map_err(|_| invalid(format!("expected {what}, got '{token}'")))
}

/// Serializes an image as a plain PPM document.
pub fn write(image: &Image) -> String {
    let (width, height) = image.dimensions();
    let mut out = String::new();
    out.push_str(MAGIC);
    out.push('\n');
    out.push_str(&format!("{width} {height}\n255\n"));

    for y in 0..height {
        for x in 0..width {
            let p = image.get_pixel(x, y);
            out.push_str(&format!("{} {} {} ", p.r, p.g, p.b));
        }
        out.push('\n');
    }
    out
}

/// Loads a plain PPM image from disk.
pub fn load(path: &Path) -> Result<Image> {
    let text = fs::read_to_string(path)?;
    let image = parse(&text)?;
    debug!("loaded ppm {:?} {}x{}", path, image.width(), image.height());
    Ok(image)
}

/// Saves an image to disk as plain PPM.
pub fn save(path: &Path, image: &Image) -> Result<()> {
    let mut file = fs::File::create(path)?;
    file.write_all(write(image).as_bytes())?;
    debug!("saved ppm {:?} {}x{}", path, image.width(), image.height());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_reads_row_major_triples() {
        let doc = "P3\n2 2\n255\n1 2 3  4 5 6\n7 8 9  10 11 12\n";
        let img = parse(doc).unwrap();
        assert_eq!(img.dimensions(), (2, 2));
        assert_eq!(img.get_pixel(0, 0), Pixel::new(1, 2, 3));
        assert_eq!(img.get_pixel(1, 0), Pixel::new(4, 5, 6));
        assert_eq!(img.get_pixel(0, 1), Pixel::new(7, 8, 9));
        assert_eq!(img.get_pixel(1, 1), Pixel::new(10, 11, 12));
    }

    #[test]
    fn comment_lines_are_stripped_anywhere() {
        let doc = "# made by hand\nP3\n# size\n1 1\n255\n# pixel\n9 8 7\n";
        let img = parse(doc).unwrap();
        assert_eq!(img.get_pixel(0, 0), Pixel::new(9, 8, 7));
    }

    #[test]
    fn bad_magic_is_rejected() {
        assert!(matches!(
            parse("P6\n1 1\n255\n0 0 0"),
            Err(RasterError::InvalidFormat(_))
        ));
    }

    #[test]
    fn deep_color_is_rejected() {
        assert!(matches!(
            parse("P3\n1 1\n65535\n0 0 0"),
            Err(RasterError::InvalidFormat(_))
        ));
    }

    #[test]
    fn truncated_body_is_rejected() {
        assert!(matches!(
            parse("P3\n2 1\n255\n1 2 3"),
            Err(RasterError::InvalidFormat(_))
        ));
    }

    #[test]
    fn oversized_headers_are_rejected_before_allocating() {
        // 100000 * 100000 would overflow i32 and demand a 10-billion-pixel
        // buffer; the parser must refuse the header outright
        let err = parse("P3\n100000 100000\n255\n0 0 0").unwrap_err();
        assert!(matches!(err, RasterError::InvalidFormat(_)));
        assert!(err.to_string().contains("100000x100000"), "{err}");
    }

    #[test]
    fn garbage_tokens_are_rejected() {
        assert!(matches!(
            parse("P3\n1 one\n255\n0 0 0"),
            Err(RasterError::InvalidFormat(_))
        ));
    }

    #[test]
    fn write_then_parse_round_trips() {
        let img = Image::from_fn(3, 2, |x, y| {
            Pixel::new((x * 90) as i32, (y * 120) as i32, 255 - (x * 80) as i32)
        });
        let doc = write(&img);
        assert!(doc.starts_with("P3\n3 2\n255\n"));
        assert_eq!(parse(&doc).unwrap(), img);
    }
}
