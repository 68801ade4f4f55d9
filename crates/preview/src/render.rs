//! Single pair preview rendering.

use image::{
    RgbaImage,
    imageops::{self, FilterType},
};
use kurbo::{Rect, Vec2};
use log::debug;
use pair_list::FontPair;

use crate::{
    Error, Result,
    canvas::Canvas,
    face::FontFace,
    layout::{CardContent, Layout},
    pattern,
    qr::qr_image,
    theme::{CardStyle, Palette, Theme, rgba},
};

/// The two loaded faces of a [`FontPair`].
#[derive(Debug, Clone)]
pub struct PairFaces {
    pub headline: FontFace,
    pub body: FontFace,
}

/// A finished preview image together with what it shows.
#[derive(Debug, Clone)]
pub struct RenderedPreview {
    pub image: RgbaImage,
    pub theme: Theme,
    pub pair: FontPair,
}

/// Renders the fixed preview layout for one pair in one theme.
///
/// Does no I/O; identical inputs give identical pixels.
pub fn render_preview(
    pair: &FontPair,
    faces: &PairFaces,
    theme: Theme,
    layout: &Layout,
) -> Result<RenderedPreview> {
    let palette = theme.palette();
    let mut canvas = Canvas::new(layout.width, layout.height, palette.background);

    draw_pattern(&mut canvas, palette, layout);
    draw_header(&mut canvas, pair, faces, palette, layout)?;
    draw_cards(&mut canvas, faces, palette, layout)?;
    draw_footer(&mut canvas, pair, faces, palette, layout)?;

    debug!("rendered {} ({theme})", pair.label());
    Ok(RenderedPreview { image: canvas.into_image(), theme, pair: pair.clone() })
}

fn draw_pattern(canvas: &mut Canvas, palette: &Palette, layout: &Layout) {
    let mask = pattern::mask(canvas.width(), canvas.height(), &layout.pattern);
    let alpha = (255.0 * layout.pattern.opacity) as u8;
    let [r, g, b, _] = palette.pattern.0;
    canvas.fill_coverage(&mask, 0, 0, rgba(r, g, b, alpha));
}

fn draw_header(
    canvas: &mut Canvas,
    pair: &FontPair,
    faces: &PairFaces,
    palette: &Palette,
    layout: &Layout,
) -> Result<()> {
    let header = &layout.header;
    let subtitle = format!("A Visual Study of {}", pair.label());
    let title_height = faces.headline.measure(layout.sizes.h1, &header.title).height;
    let subtitle_height = faces.body.measure(layout.sizes.body_xlarge, &subtitle).height;

    let mut text_x = layout.margin;
    if let Some(logo) = &layout.logo {
        let block_height = title_height + header.spacing + subtitle_height;
        let scaled = scale_to_height(logo, block_height.round() as u32);
        let logo_y = header.top + header.logo_offset;
        canvas.overlay(&scaled, layout.margin as i64, logo_y as i64);
        text_x += scaled.width() as f32 + header.logo_gap;
    }

    canvas.text(
        &faces.headline,
        layout.sizes.h1,
        text_x,
        header.top,
        &header.title,
        palette.headline,
    )?;
    canvas.text(
        &faces.body,
        layout.sizes.body_xlarge,
        text_x,
        header.top + title_height + header.spacing,
        &subtitle,
        palette.body,
    )?;
    Ok(())
}

/// Resizes `image` to `height` pixels, keeping its aspect ratio.
fn scale_to_height(image: &RgbaImage, height: u32) -> RgbaImage {
    let (w, h) = image.dimensions();
    if h == 0 || height == 0 {
        return image.clone();
    }
    let width = ((f64::from(w) * f64::from(height) / f64::from(h)).round() as u32).max(1);
    imageops::resize(image, width, height, FilterType::Lanczos3)
}

fn draw_cards(
    canvas: &mut Canvas,
    faces: &PairFaces,
    palette: &Palette,
    layout: &Layout,
) -> Result<()> {
    let cards = &layout.cards;
    let columns = cards.columns.max(1);
    let column_width =
        (layout.width as f32 - (columns + 1) as f32 * layout.margin) / columns as f32;

    for (index, content) in layout.content.iter().enumerate() {
        let (row, col) = (index as u32 / columns, index as u32 % columns);
        let x = layout.margin + col as f32 * (column_width + layout.margin);
        let y = cards.top + row as f32 * cards.row_spacing;
        let style = if col % 2 == 1 { &palette.inverted } else { &palette.card };
        draw_card(canvas, content, faces, style, layout, (x, y, column_width))?;
    }
    Ok(())
}

fn draw_card(
    canvas: &mut Canvas,
    content: &CardContent,
    faces: &PairFaces,
    style: &CardStyle,
    layout: &Layout,
    (x, y, width): (f32, f32, f32),
) -> Result<()> {
    let cards = &layout.cards;
    let sizes = &layout.sizes;
    let height = cards.height;

    let outer = Rect::new(x as f64, y as f64, (x + width) as f64, (y + height) as f64);
    canvas.fill_rounded_rect(outer, cards.radius, style.border);
    let inner = outer.inset(-cards.border);
    let inner_radius = (cards.radius - cards.border).max(0.0);
    canvas.fill_rounded_rect(inner, inner_radius, style.fill);

    let left = x + cards.padding;
    let top = y + cards.padding;
    canvas.text(&faces.body, sizes.body_small, left, top, &content.eyebrow, style.accent)?;
    canvas.text(
        &faces.headline,
        sizes.h2,
        left,
        top + cards.title_offset,
        &content.title,
        style.title,
    )?;
    canvas.text(
        &faces.headline,
        sizes.h5,
        left,
        top + cards.subtitle_offset,
        &content.subtitle,
        style.accent,
    )?;

    for (i, line) in content.body_large.iter().enumerate() {
        let line_y = top + cards.body_large_offset + i as f32 * cards.body_large_line;
        canvas.text(&faces.body, sizes.body_large, left, line_y, line.trim(), style.body)?;
    }
    for (i, line) in content.body_regular.iter().enumerate() {
        let line_y = top + cards.body_regular_offset + i as f32 * cards.body_regular_line;
        canvas.text(&faces.body, sizes.body_regular, left, line_y, line.trim(), style.body)?;
    }

    let max_button_width = width - 2.0 * cards.padding;
    let button_y = y + height - layout.button.margin_bottom;
    draw_button(canvas, &faces.body, &content.button, style, layout, (left, button_y), max_button_width)?;

    canvas.text(
        &faces.body,
        sizes.caption,
        left,
        y + height - cards.caption_margin_bottom,
        &content.caption,
        style.body,
    )?;
    Ok(())
}

fn draw_button(
    canvas: &mut Canvas,
    face: &FontFace,
    label: &str,
    style: &CardStyle,
    layout: &Layout,
    (x, y): (f32, f32),
    max_width: f32,
) -> Result<()> {
    let button = &layout.button;
    let size = layout.sizes.body_regular;
    let extent = face.measure(size, label);
    let width = (extent.width + 2.0 * button.padding).min(max_width).round();

    let body = Rect::new(x as f64, y as f64, (x + width) as f64, (y + button.height) as f64);
    let shadow = body + Vec2::new(button.shadow_offset, button.shadow_offset);
    canvas.fill_rounded_rect(shadow, button.radius, button.shadow);
    canvas.fill_rounded_rect(body, button.radius, style.button);

    let text_x = (x + (width - extent.width) / 2.0).round();
    let text_y = (y + (button.height - extent.height) / 2.0).round() - 1.0;
    canvas.text(face, size, text_x + 1.0, text_y + 1.0, label, button.text_shadow)?;
    canvas.text(face, size, text_x, text_y, label, style.button_text)?;
    Ok(())
}

fn draw_footer(
    canvas: &mut Canvas,
    pair: &FontPair,
    faces: &PairFaces,
    palette: &Palette,
    layout: &Layout,
) -> Result<()> {
    let footer = &layout.footer;
    let sizes = &layout.sizes;

    let qr = qr_image(&footer.qr_url, footer.qr_size)?;
    let qr_x = layout.margin;
    let qr_y = layout.height as f32 - footer.offset_from_bottom;
    canvas.paste(&qr, qr_x as i64, qr_y as i64);

    let qr_bottom = qr_y + footer.qr_size as f32;
    let text_x = qr_x + footer.qr_size as f32 + footer.text_gap;
    let lines = [
        (&footer.channel_name, sizes.body_regular, 3.0),
        (&footer.qr_url, sizes.body_large, 2.0),
        (&footer.channel_description, sizes.body_regular, 1.0),
    ];
    let mut channel_right = text_x;
    let mut widest = "";
    for (text, size, steps) in lines {
        let line_y = qr_bottom - footer.line_spacing * steps;
        let extent = canvas.text(&faces.body, size, text_x, line_y, text, palette.headline)?;
        if text_x + extent.width > channel_right {
            channel_right = text_x + extent.width;
            widest = text.as_str();
        }
    }

    let font_info =
        format!("{} for Headlines • {} for Body Text", pair.headline.name, pair.body.name);
    let info_width = faces.body.measure(sizes.body_regular, &font_info).width;
    let info_right = layout.width as f32 - layout.margin;
    if info_right - info_width < channel_right + footer.text_gap {
        return Err(Error::Overlap { text: font_info, other: widest.to_string() });
    }
    canvas.text_right(
        &faces.body,
        sizes.body_regular,
        info_right,
        qr_bottom - footer.font_info_offset,
        &font_info,
        palette.body,
    )?;
    Ok(())
}
