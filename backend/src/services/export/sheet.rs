//! A grayscale A4 drawing surface addressed in millimetres.
//!
//! Lines are drawn as solid black bands at least one pixel wide. Text is laid out
//! with ab_glyph on a single line, shrunk to fit its box when it is too wide, and
//! blended onto the page using the glyph coverage as anti-aliasing.

use ab_glyph::{point, Font, FontArc, PxScale, ScaleFont};
use image::{GrayImage, Luma};
use std::path::Path;

use crate::error::{Result, ServiceError};

pub const PAGE_WIDTH_MM: f32 = 210.0;
pub const PAGE_HEIGHT_MM: f32 = 297.0;

const MM_PER_INCH: f32 = 25.4;
const WHITE: Luma<u8> = Luma([255]);

/// Loads a TrueType/OpenType font file.
pub fn load_font(path: &Path) -> Result<FontArc> {
    let bytes = std::fs::read(path)?;
    FontArc::try_from_vec(bytes)
        .map_err(|e| ServiceError::Font(format!("{}: {}", path.display(), e)))
}

/// Axis-aligned box in millimetres.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Shrinks the box by `padding` on every side.
    pub fn inset(&self, padding: f32) -> Self {
        Self::new(
            self.x + padding,
            self.y + padding,
            (self.width - 2.0 * padding).max(0.0),
            (self.height - 2.0 * padding).max(0.0),
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
    Right,
}

pub struct Sheet<'f> {
    image: GrayImage,
    px_per_mm: f32,
    font: Option<&'f FontArc>,
}

impl<'f> Sheet<'f> {
    /// A blank white A4 portrait page at `dpi`.
    pub fn a4(dpi: u32, font: Option<&'f FontArc>) -> Self {
        let px_per_mm = dpi as f32 / MM_PER_INCH;
        let width = (PAGE_WIDTH_MM * px_per_mm).round() as u32;
        let height = (PAGE_HEIGHT_MM * px_per_mm).round() as u32;
        Self {
            image: GrayImage::from_pixel(width, height, WHITE),
            px_per_mm,
            font,
        }
    }

    pub fn into_image(self) -> GrayImage {
        self.image
    }

    fn px(&self, mm: f32) -> i64 {
        (mm * self.px_per_mm).round() as i64
    }

    fn stroke_px(&self, thickness_mm: f32) -> i64 {
        self.px(thickness_mm).max(1)
    }

    /// Darkens a pixel by `coverage` (0 = untouched, 1 = black).
    fn blend(&mut self, x: i64, y: i64, coverage: f32) {
        if x < 0 || y < 0 || x >= self.image.width() as i64 || y >= self.image.height() as i64 {
            return;
        }
        let pixel = self.image.get_pixel_mut(x as u32, y as u32);
        let coverage = coverage.clamp(0.0, 1.0);
        pixel.0[0] = (pixel.0[0] as f32 * (1.0 - coverage)).round() as u8;
    }

    fn fill_px(&mut self, x0: i64, y0: i64, x1: i64, y1: i64) {
        for y in y0..y1 {
            for x in x0..x1 {
                self.blend(x, y, 1.0);
            }
        }
    }

    pub fn hline(&mut self, x0: f32, x1: f32, y: f32, thickness: f32) {
        let t = self.stroke_px(thickness);
        let y = self.px(y) - t / 2;
        self.fill_px(self.px(x0), y, self.px(x1), y + t);
    }

    pub fn vline(&mut self, x: f32, y0: f32, y1: f32, thickness: f32) {
        let t = self.stroke_px(thickness);
        let x = self.px(x) - t / 2;
        self.fill_px(x, self.px(y0), x + t, self.px(y1));
    }

    pub fn dashed_hline(&mut self, x0: f32, x1: f32, y: f32, dash: f32, thickness: f32) {
        let mut x = x0;
        while x < x1 {
            self.hline(x, (x + dash).min(x1), y, thickness);
            x += dash * 2.0;
        }
    }

    pub fn rect(&mut self, rect: Rect, thickness: f32) {
        self.hline(rect.x, rect.right(), rect.y, thickness);
        self.hline(rect.x, rect.right(), rect.bottom(), thickness);
        self.vline(rect.x, rect.y, rect.bottom(), thickness);
        self.vline(rect.right(), rect.y, rect.bottom(), thickness);
    }

    /// Draws `text` on one line, vertically centred in `area`.
    ///
    /// `size` is the nominal glyph height in millimetres; it shrinks so the text
    /// never overflows the width of `area`. Without a font nothing is drawn.
    pub fn text(&mut self, text: &str, area: Rect, size: f32, align: Align) {
        let Some(font) = self.font else {
            return;
        };
        if text.is_empty() {
            return;
        }

        let max_width = area.width * self.px_per_mm;
        let mut scale = PxScale::from(size * self.px_per_mm);
        let mut width = advance_width(font, scale, text);
        if width > max_width && width > 0.0 {
            let shrink = max_width / width;
            scale = PxScale::from(scale.y * shrink);
            width *= shrink;
        }

        let scaled = font.as_scaled(scale);
        let left = area.x * self.px_per_mm;
        let origin_x = match align {
            Align::Left => left,
            Align::Center => left + (max_width - width) / 2.0,
            Align::Right => left + max_width - width,
        };
        let center_y = (area.y + area.height / 2.0) * self.px_per_mm;
        let baseline = center_y + (scaled.ascent() + scaled.descent()) / 2.0;

        let mut caret = origin_x;
        for ch in text.chars() {
            let id = font.glyph_id(ch);
            let glyph = id.with_scale_and_position(scale, point(caret, baseline));
            caret += scaled.h_advance(id);

            if let Some(outlined) = font.outline_glyph(glyph) {
                let bounds = outlined.px_bounds();
                let (min_x, min_y) = (bounds.min.x as i64, bounds.min.y as i64);
                let mut coverage = Vec::new();
                outlined.draw(|gx, gy, c| coverage.push((gx as i64, gy as i64, c)));
                for (gx, gy, c) in coverage {
                    self.blend(min_x + gx, min_y + gy, c);
                }
            }
        }
    }
}

fn advance_width(font: &FontArc, scale: PxScale, text: &str) -> f32 {
    let scaled = font.as_scaled(scale);
    text.chars().map(|ch| scaled.h_advance(font.glyph_id(ch))).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn a4_dimensions_follow_dpi() {
        let sheet = Sheet::a4(72, None);
        let image = sheet.into_image();
        assert_eq!((image.width(), image.height()), (595, 842));

        let image = Sheet::a4(300, None).into_image();
        assert_eq!((image.width(), image.height()), (2480, 3508));
    }

    #[test]
    fn lines_are_at_least_one_pixel() {
        let mut sheet = Sheet::a4(36, None);
        sheet.hline(10.0, 50.0, 20.0, 0.01);
        let image = sheet.into_image();
        let y = (20.0 * 36.0 / MM_PER_INCH).round() as u32;
        let x = (30.0 * 36.0 / MM_PER_INCH).round() as u32;
        assert_eq!(image.get_pixel(x, y).0[0], 0);
    }

    #[test]
    fn drawing_outside_the_page_is_clipped() {
        let mut sheet = Sheet::a4(36, None);
        sheet.rect(Rect::new(-10.0, -10.0, 400.0, 400.0), 1.0);
        sheet.text("忽略", Rect::new(0.0, 0.0, 10.0, 10.0), 5.0, Align::Left);
    }

    #[test]
    fn inset_never_goes_negative() {
        let rect = Rect::new(0.0, 0.0, 2.0, 2.0).inset(5.0);
        assert_eq!((rect.width, rect.height), (0.0, 0.0));
    }

    #[test]
    fn missing_font_file_is_an_error() {
        assert!(load_font(Path::new("/nonexistent/font.ttf")).is_err());
    }

    /// A system font for exercising glyph drawing, if the machine has one.
    fn system_font() -> Option<FontArc> {
        let candidates = [
            std::env::var("PAYREQ_FONT").unwrap_or_default(),
            "../fonts/NotoSansSC-Regular.ttf".to_string(),
            "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf".to_string(),
            "/usr/share/fonts/dejavu/DejaVuSans.ttf".to_string(),
            "/usr/share/fonts/TTF/DejaVuSans.ttf".to_string(),
            "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf".to_string(),
            "/System/Library/Fonts/Supplemental/Arial.ttf".to_string(),
            "C:\\Windows\\Fonts\\arial.ttf".to_string(),
        ];
        candidates
            .iter()
            .filter(|path| !path.is_empty())
            .find_map(|path| load_font(Path::new(path)).ok())
    }

    fn darkness_in(image: &GrayImage, x0: u32, y0: u32, x1: u32, y1: u32) -> u64 {
        let mut sum = 0;
        for y in y0..y1.min(image.height()) {
            for x in x0..x1.min(image.width()) {
                sum += 255 - image.get_pixel(x, y).0[0] as u64;
            }
        }
        sum
    }

    #[test]
    fn advance_width_scales_with_size() {
        let Some(font) = system_font() else {
            eprintln!("no system font found, skipping");
            return;
        };
        let small = advance_width(&font, PxScale::from(20.0), "Amount 123");
        let large = advance_width(&font, PxScale::from(40.0), "Amount 123");
        assert!(small > 0.0);
        assert!((large - 2.0 * small).abs() < 1.0);
        assert_eq!(advance_width(&font, PxScale::from(20.0), ""), 0.0);
    }

    #[test]
    fn text_is_drawn_inside_its_box() {
        let Some(font) = system_font() else {
            eprintln!("no system font found, skipping");
            return;
        };
        let mut sheet = Sheet::a4(72, Some(&font));
        let area = Rect::new(20.0, 20.0, 60.0, 10.0);
        sheet.text("ABC 123", area, 5.0, Align::Left);
        let image = sheet.into_image();

        let px = |mm: f32| (mm * 72.0 / MM_PER_INCH).round() as u32;
        assert!(darkness_in(&image, px(20.0), px(20.0), px(80.0), px(30.0)) > 0);
        assert_eq!(darkness_in(&image, px(90.0), 0, image.width(), image.height()), 0);
    }

    #[test]
    fn long_text_shrinks_to_the_box_width() {
        let Some(font) = system_font() else {
            eprintln!("no system font found, skipping");
            return;
        };
        let mut sheet = Sheet::a4(72, Some(&font));
        let area = Rect::new(20.0, 50.0, 30.0, 10.0);
        let text = "A very long payee name that would never fit the cell";
        let nominal = PxScale::from(5.0 * 72.0 / MM_PER_INCH);
        assert!(advance_width(&font, nominal, text) > 30.0 * 72.0 / MM_PER_INCH);
        sheet.text(text, area, 5.0, Align::Left);
        let image = sheet.into_image();

        let px = |mm: f32| (mm * 72.0 / MM_PER_INCH).round() as u32;
        assert!(darkness_in(&image, px(20.0), px(50.0), px(50.0), px(60.0)) > 0);
        // one pixel of slack for glyph bounds rounding
        assert_eq!(darkness_in(&image, px(50.0) + 2, 0, image.width(), image.height()), 0);
    }
}
