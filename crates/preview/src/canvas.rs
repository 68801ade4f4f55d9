//! RGBA drawing surface: coverage blending, rounded rectangles and text.

use ab_glyph::{Font, GlyphId, PxScale, ScaleFont, point};
use image::{
    GrayImage, Luma, Rgba, RgbaImage,
    imageops::{self, FilterType},
};
use imageproc::{
    drawing::{draw_filled_circle_mut, draw_filled_rect_mut},
    pixelops::interpolate,
    rect::Rect as PixelRect,
};
use kurbo::Rect;

use crate::{
    Error, Result,
    face::{FontFace, TextExtent},
    theme::Color,
};

/// Supersampling factor for shape edges.
const SHAPE_SAMPLES: u32 = 4;

const COVERED: Luma<u8> = Luma([255]);

pub struct Canvas {
    image: RgbaImage,
}

impl Canvas {
    pub fn new(width: u32, height: u32, background: Color) -> Self {
        Self { image: RgbaImage::from_pixel(width, height, background) }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    /// Blends `color` over one pixel; `coverage` scales the color's own alpha.
    pub fn blend(&mut self, x: i64, y: i64, color: Color, coverage: f32) {
        if x < 0 || y < 0 || x >= i64::from(self.width()) || y >= i64::from(self.height()) {
            return;
        }
        let weight = f32::from(color[3]) / 255.0 * coverage.clamp(0.0, 1.0);
        if weight <= 0.0 {
            return;
        }

        let [r, g, b, _] = color.0;
        let pixel = self.image.get_pixel_mut(x as u32, y as u32);
        *pixel = interpolate(Rgba([r, g, b, 255]), *pixel, weight);
    }

    /// Blends `color` through a coverage mask whose top-left corner sits at `(x, y)`.
    pub fn fill_coverage(&mut self, mask: &GrayImage, x: i64, y: i64, color: Color) {
        for (mx, my, Luma([value])) in mask.enumerate_pixels() {
            if *value > 0 {
                let coverage = f32::from(*value) / 255.0;
                self.blend(x + i64::from(mx), y + i64::from(my), color, coverage);
            }
        }
    }

    /// Fills `rect` with corners rounded to `radius`, anti-aliased.
    pub fn fill_rounded_rect(&mut self, rect: Rect, radius: f64, color: Color) {
        let width = rect.width().round().max(0.0) as u32;
        let height = rect.height().round().max(0.0) as u32;
        if width == 0 || height == 0 {
            return;
        }
        let mask = rounded_rect_coverage(width, height, radius);
        self.fill_coverage(&mask, rect.x0.round() as i64, rect.y0.round() as i64, color);
    }

    /// Draws `text` with its line box's top-left corner at `(x, y)`.
    ///
    /// Fails with [`Error::Overflow`] if the line box would leave the canvas.
    pub fn text(
        &mut self,
        face: &FontFace,
        size: f32,
        x: f32,
        y: f32,
        text: &str,
        color: Color,
    ) -> Result<TextExtent> {
        let extent = face.measure(size, text);
        if x < 0.0
            || y < 0.0
            || x + extent.width > self.width() as f32
            || y + extent.height > self.height() as f32
        {
            return Err(Error::Overflow {
                text: text.to_string(),
                width: self.width(),
                height: self.height(),
            });
        }

        let font = face.font();
        let scale = PxScale::from(size);
        let scaled = font.as_scaled(scale);
        let baseline = y + extent.ascent;
        let mut caret = x;
        let mut previous: Option<GlyphId> = None;

        for c in text.chars() {
            let id = font.glyph_id(c);
            if let Some(prev) = previous {
                caret += scaled.kern(prev, id);
            }
            let glyph = id.with_scale_and_position(scale, point(caret, baseline));
            caret += scaled.h_advance(id);
            previous = Some(id);

            if let Some(outlined) = font.outline_glyph(glyph) {
                let bounds = outlined.px_bounds();
                let (left, top) = (bounds.min.x as i64, bounds.min.y as i64);
                outlined.draw(|gx, gy, coverage| {
                    self.blend(left + i64::from(gx), top + i64::from(gy), color, coverage);
                });
            }
        }
        Ok(extent)
    }

    /// Like [`Canvas::text`], but `right` is where the text ends.
    pub fn text_right(
        &mut self,
        face: &FontFace,
        size: f32,
        right: f32,
        y: f32,
        text: &str,
        color: Color,
    ) -> Result<TextExtent> {
        let width = face.measure(size, text).width;
        self.text(face, size, right - width, y, text, color)
    }

    /// Like [`Canvas::text`], but centered horizontally on `center`.
    pub fn text_centered(
        &mut self,
        face: &FontFace,
        size: f32,
        center: f32,
        y: f32,
        text: &str,
        color: Color,
    ) -> Result<TextExtent> {
        let width = face.measure(size, text).width;
        self.text(face, size, (center - width / 2.0).round(), y, text, color)
    }

    /// Copies `image` onto the canvas with its top-left corner at `(x, y)`.
    pub fn paste(&mut self, image: &RgbaImage, x: i64, y: i64) {
        imageops::replace(&mut self.image, image, x, y);
    }

    /// Alpha-composites `image` onto the canvas with its top-left corner at `(x, y)`.
    pub fn overlay(&mut self, image: &RgbaImage, x: i64, y: i64) {
        imageops::overlay(&mut self.image, image, x, y);
    }
}

/// Coverage of a `width` × `height` rounded rectangle, drawn at
/// [`SHAPE_SAMPLES`]× and filtered back down.
fn rounded_rect_coverage(width: u32, height: u32, radius: f64) -> GrayImage {
    let (w, h) = (width * SHAPE_SAMPLES, height * SHAPE_SAMPLES);
    let r = ((radius.max(0.0) * f64::from(SHAPE_SAMPLES)).round() as u32).min(w / 2).min(h / 2);
    let mut mask = GrayImage::new(w, h);

    if r == 0 {
        draw_filled_rect_mut(&mut mask, PixelRect::at(0, 0).of_size(w, h), COVERED);
    } else {
        if h > 2 * r {
            draw_filled_rect_mut(&mut mask, PixelRect::at(0, r as i32).of_size(w, h - 2 * r), COVERED);
        }
        if w > 2 * r {
            draw_filled_rect_mut(&mut mask, PixelRect::at(r as i32, 0).of_size(w - 2 * r, h), COVERED);
        }
        let (near, radius) = (r as i32, r as i32);
        let (far_x, far_y) = (w as i32 - 1 - near, h as i32 - 1 - near);
        for center in [(near, near), (far_x, near), (near, far_y), (far_x, far_y)] {
            draw_filled_circle_mut(&mut mask, center, radius, COVERED);
        }
    }

    if SHAPE_SAMPLES == 1 {
        return mask;
    }
    imageops::resize(&mask, width, height, FilterType::Triangle)
}
