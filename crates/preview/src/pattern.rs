//! Subtle Penrose-like background tiling.

use image::{GrayImage, Luma};
use imageproc::{drawing::draw_polygon_mut, point::Point as PixelPoint};
use kurbo::{Point, Vec2};

use crate::layout::PatternLayout;

type Rhombus = [Point; 4];

fn rhombus(origin: Point, size: f64, acute: Vec2, obtuse: Vec2) -> Rhombus {
    [origin, origin + acute * size, origin + (acute + obtuse) * size, origin + obtuse * size]
}

/// Rhombi of the tiling, in drawing order.
pub fn rhombi(width: u32, height: u32, layout: &PatternLayout) -> Vec<Rhombus> {
    let size = layout.rhombus_size;
    let pitch = size * layout.spacing;
    let acute = Vec2::from_angle(layout.acute_angle.to_radians());
    let obtuse = Vec2::from_angle(layout.obtuse_angle.to_radians());
    let shift = size / 3.0;

    let rows = (f64::from(height) / size) as i64 + 5;
    let cols = (f64::from(width) / size) as i64 + 5;
    let mut shapes = Vec::new();
    for row in -4..rows {
        for col in -4..cols {
            let origin = Point::new(col as f64 * pitch, row as f64 * pitch);
            if (row + col).rem_euclid(3) == 0 {
                shapes.push(rhombus(origin, size, acute, obtuse));
            }
            shapes.push(rhombus(origin + Vec2::new(2.0 * shift, shift), size, acute, obtuse));
        }
    }
    shapes
}

/// Coverage mask of the whole tiling.
///
/// Overlaps do not accumulate, so the pattern blends at a single opacity.
pub fn mask(width: u32, height: u32, layout: &PatternLayout) -> GrayImage {
    let mut mask = GrayImage::new(width, height);
    for shape in rhombi(width, height, layout) {
        let polygon = shape.map(|p| PixelPoint::new(p.x.round() as i32, p.y.round() as i32));
        if polygon[0] != polygon[3] {
            draw_polygon_mut(&mut mask, &polygon, Luma([255]));
        }
    }
    mask
}
