//! Comparison sheet: every preview on one grid.

use image::{RgbaImage, imageops, imageops::FilterType};

use crate::{
    Error, Result,
    canvas::Canvas,
    face::FontFace,
    layout::GridLayout,
    qr::qr_image,
    render::RenderedPreview,
};

/// Grid geometry for `count` items of `item_width` × `item_height`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridGeometry {
    pub columns: u32,
    pub rows: u32,
    pub thumb_width: u32,
    pub thumb_height: u32,
    pub width: u32,
    pub height: u32,
}

impl GridGeometry {
    pub fn new(count: u32, item_width: u32, item_height: u32, grid: &GridLayout) -> Self {
        let columns = count.min(grid.columns.max(1)).max(1);
        let rows = count.div_ceil(columns).max(1);
        let thumb_width = grid.thumb_width;
        let thumb_height = ((u64::from(item_height) * u64::from(thumb_width)
            + u64::from(item_width.max(1)) / 2)
            / u64::from(item_width.max(1))) as u32;

        let width = columns * thumb_width + (columns + 1) * grid.padding;
        let height = rows * (thumb_height + grid.caption_height)
            + (rows + 1) * grid.padding
            + grid.footer_height;
        Self { columns, rows, thumb_width, thumb_height, width, height }
    }

    /// Top-left corner of the `index`-th thumbnail.
    pub fn cell_origin(&self, index: u32, grid: &GridLayout) -> (u32, u32) {
        let (row, col) = (index / self.columns, index % self.columns);
        let x = grid.padding + col * (self.thumb_width + grid.padding);
        let y = grid.padding + row * (self.thumb_height + grid.caption_height + grid.padding);
        (x, y)
    }
}

/// Output `(width, height)` of [`compose`] for `count` items of the given size.
pub fn grid_size(count: u32, item_width: u32, item_height: u32, grid: &GridLayout) -> (u32, u32) {
    let geometry = GridGeometry::new(count, item_width, item_height, grid);
    (geometry.width, geometry.height)
}

/// Lays `previews` out left-to-right, top-to-bottom with a `{pair} ({theme})`
/// caption under each.
///
/// All cells use the first preview's dimensions. `stamp`, when given, is
/// printed under the QR code in the footer.
pub fn compose(
    previews: &[RenderedPreview],
    label_face: &FontFace,
    grid: &GridLayout,
    stamp: Option<&str>,
) -> Result<RgbaImage> {
    let first = previews.first().ok_or(Error::EmptyComposite)?;
    let (item_width, item_height) = first.image.dimensions();
    let geometry = GridGeometry::new(previews.len() as u32, item_width, item_height, grid);
    let mut canvas = Canvas::new(geometry.width, geometry.height, grid.background);

    for (index, preview) in previews.iter().enumerate() {
        let (x, y) = geometry.cell_origin(index as u32, grid);
        let thumb = imageops::resize(
            &preview.image,
            geometry.thumb_width,
            geometry.thumb_height,
            FilterType::Triangle,
        );
        canvas.paste(&thumb, i64::from(x), i64::from(y));

        let center = (x + geometry.thumb_width / 2) as f32;
        let caption_y = (y + geometry.thumb_height + grid.caption_gap) as f32;
        let caption = format!("{} ({})", preview.pair.label(), preview.theme);
        canvas.text_centered(label_face, grid.caption_size, center, caption_y, &caption, grid.text)?;
    }

    let footer_top = geometry.height - grid.footer_height;
    let qr = qr_image(&grid.qr_url, grid.qr_size)?;
    let qr_x = geometry.width.saturating_sub(grid.qr_size) / 2;
    let qr_y = footer_top + 20;
    canvas.paste(&qr, i64::from(qr_x), i64::from(qr_y));

    if let Some(stamp) = stamp {
        let stamp = format!("Generated on {stamp}");
        let center = geometry.width as f32 / 2.0;
        let stamp_y = (qr_y + grid.qr_size + 20) as f32;
        canvas.text_centered(label_face, grid.stamp_size, center, stamp_y, &stamp, grid.muted)?;
    }

    Ok(canvas.into_image())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_size_single_row() {
        let grid = GridLayout::default();
        let (w, h) = grid_size(2, 1400, 1400, &grid);
        assert_eq!(w, 2 * 700 + 3 * 60);
        assert_eq!(h, 700 + 70 + 2 * 60 + 200);
    }

    #[test]
    fn test_grid_size_wraps() {
        let grid = GridLayout { columns: 3, ..GridLayout::default() };
        let geometry = GridGeometry::new(7, 1400, 700, &grid);
        assert_eq!((geometry.columns, geometry.rows), (3, 3));
        assert_eq!(geometry.thumb_height, 350);
        assert_eq!(geometry.width, 3 * 700 + 4 * 60);
        assert_eq!(geometry.height, 3 * (350 + 70) + 4 * 60 + 200);
    }

    #[test]
    fn test_cell_origin_order() {
        let grid = GridLayout { columns: 2, ..GridLayout::default() };
        let geometry = GridGeometry::new(3, 1400, 1400, &grid);
        assert_eq!(geometry.cell_origin(0, &grid), (60, 60));
        assert_eq!(geometry.cell_origin(1, &grid), (60 + 700 + 60, 60));
        assert_eq!(geometry.cell_origin(2, &grid), (60, 60 + 700 + 70 + 60));
    }
}
