//! Generic placeholder logo.
//!
//! Draws a filled circle with "LOGO" across it on a transparent square canvas.

mod glyphs;

use std::fs;
use std::path::{Path, PathBuf};

use ab_glyph::{FontVec, PxScale};
use image::{ColorType, ImageFormat, ImageReader, Rgba, RgbaImage};
use imageproc::drawing::{draw_filled_circle_mut, draw_text_mut, text_size};

use crate::config::default_font_candidates;
use crate::error::{HygieneError, Result};

const MARGIN: i32 = 20;
const CIRCLE_COLOR: Rgba<u8> = Rgba([100, 100, 150, 255]);
const TEXT_COLOR: Rgba<u8> = Rgba([255, 255, 255, 255]);
const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);
const LOGO_TEXT: &str = "LOGO";
const MAX_TEXT_HEIGHT: u32 = 40;

/// Generates the logo with the default font fallback chain and saves it as PNG.
pub fn generate(path: &Path, size: u32) -> Result<()> {
    generate_with_fonts(path, size, &default_font_candidates())
}

/// Generates the logo trying `font_candidates` in order, then the built-in glyphs.
pub fn generate_with_fonts(path: &Path, size: u32, font_candidates: &[PathBuf]) -> Result<()> {
    let font = load_font(font_candidates);
    let image = render(size, font.as_ref())?;
    image.save_with_format(path, ImageFormat::Png)?;
    log::debug!("wrote {}x{} logo to {}", size, size, path.display());
    Ok(())
}

/// First candidate that can be read and parsed as a font.
pub fn load_font(candidates: &[PathBuf]) -> Option<FontVec> {
    candidates.iter().find_map(|path| {
        let data = fs::read(path).ok()?;
        match FontVec::try_from_vec(data) {
            Ok(font) => {
                log::debug!("using font {}", path.display());
                Some(font)
            }
            Err(e) => {
                log::debug!("ignoring font {}: {}", path.display(), e);
                None
            }
        }
    })
}

/// Draws the logo in memory.
///
/// Without a font the text is drawn with the built-in bitmap glyphs.
pub fn render(size: u32, font: Option<&FontVec>) -> Result<RgbaImage> {
    if size == 0 {
        return Err(HygieneError::InvalidLogoSize(size));
    }

    let mut image = RgbaImage::from_pixel(size, size, TRANSPARENT);
    let center = (size / 2) as i32;

    let radius = (size as i32 - 2 * MARGIN) / 2;
    if radius > 0 {
        draw_filled_circle_mut(&mut image, (center, center), radius, CIRCLE_COLOR);
    }

    let text_height = MAX_TEXT_HEIGHT.min(size / 5);
    if text_height == 0 {
        return Ok(image);
    }

    match font {
        Some(font) => {
            let scale = PxScale::from(text_height as f32);
            let (width, height) = text_size(scale, font, LOGO_TEXT);
            let x = (size as i32 - width as i32) / 2;
            let y = (size as i32 - height as i32) / 2;
            draw_text_mut(&mut image, TEXT_COLOR, x, y, scale, font, LOGO_TEXT);
        }
        None => {
            let (width, height) = glyphs::measure(LOGO_TEXT, text_height);
            let x = (size as i32 - width as i32) / 2;
            let y = (size as i32 - height as i32) / 2;
            glyphs::draw(&mut image, LOGO_TEXT, x, y, text_height, TEXT_COLOR);
        }
    }

    Ok(image)
}

/// Properties of a logo file on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogoSummary {
    pub width: u32,
    pub height: u32,
    pub png: bool,
    pub rgba: bool,
    /// Pixels with a non-zero alpha channel.
    pub opaque_pixels: usize,
    pub file_size: u64,
}

impl LogoSummary {
    /// Short format name, e.g. `PNG`.
    pub fn format_name(&self) -> &'static str {
        if self.png {
            "PNG"
        } else {
            "other"
        }
    }

    /// Short color mode name, e.g. `RGBA`.
    pub fn mode_name(&self) -> &'static str {
        if self.rgba {
            "RGBA"
        } else {
            "other"
        }
    }
}

/// Decodes an image file and summarizes it.
pub fn inspect_logo(path: &Path) -> Result<LogoSummary> {
    let file_size = fs::metadata(path)
        .map_err(|_| HygieneError::file_not_found(path))?
        .len();

    let reader = ImageReader::open(path)?.with_guessed_format()?;
    let png = reader.format() == Some(ImageFormat::Png);
    let decoded = reader.decode()?;
    let rgba = decoded.color() == ColorType::Rgba8;
    let opaque_pixels = decoded
        .to_rgba8()
        .pixels()
        .filter(|pixel| pixel[3] > 0)
        .count();

    Ok(LogoSummary {
        width: decoded.width(),
        height: decoded.height(),
        png,
        rgba,
        opaque_pixels,
        file_size,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_size_is_rejected() {
        assert!(matches!(
            render(0, None),
            Err(HygieneError::InvalidLogoSize(0))
        ));
    }

    #[test]
    fn test_render_layout() {
        let image = render(200, None).unwrap();
        assert_eq!(image.dimensions(), (200, 200));
        assert_eq!(*image.get_pixel(0, 0), TRANSPARENT);
        assert_eq!(*image.get_pixel(100, 30), CIRCLE_COLOR);
        assert!(image.pixels().any(|p| *p == TEXT_COLOR));
    }

    #[test]
    fn test_small_canvas_skips_circle() {
        let image = render(30, None).unwrap();
        assert!(!image.pixels().any(|p| *p == CIRCLE_COLOR));
        assert!(image.pixels().any(|p| *p == TEXT_COLOR));
    }

    #[test]
    fn test_tiny_canvas_is_blank() {
        let image = render(4, None).unwrap();
        assert!(image.pixels().all(|p| *p == TRANSPARENT));
    }

    #[test]
    fn test_missing_fonts_fall_back() {
        assert!(load_font(&[PathBuf::from("/nonexistent/font.ttf")]).is_none());
    }

    #[test]
    fn test_generate_and_inspect() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("logo.png");
        generate_with_fonts(&path, 120, &[]).unwrap();

        let summary = inspect_logo(&path).unwrap();
        assert_eq!((summary.width, summary.height), (120, 120));
        assert!(summary.png);
        assert!(summary.rgba);
        assert!(summary.opaque_pixels > 0);
        assert!(summary.file_size > 0);
        assert_eq!(summary.format_name(), "PNG");
        assert_eq!(summary.mode_name(), "RGBA");
    }

    #[test]
    fn test_inspect_missing_file() {
        let dir = tempfile::TempDir::new().unwrap();
        assert!(matches!(
            inspect_logo(&dir.path().join("nope.png")),
            Err(HygieneError::FileNotFound(_))
        ));
    }
}
