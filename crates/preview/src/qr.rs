//! QR code rasterization.

use image::{Rgba, RgbaImage, imageops};
use qrcode::{EcLevel, QrCode};

use crate::{
    Result,
    theme::{BLACK, WHITE},
};

/// Renders `url` as a black-on-white QR code exactly `size` pixels square.
///
/// The code keeps its quiet zone and whole-pixel modules; it is centered on a
/// white square when it comes out smaller than `size`.
pub fn qr_image(url: &str, size: u32) -> Result<RgbaImage> {
    let code = QrCode::with_error_correction_level(url.as_bytes(), EcLevel::L)?;
    let rendered = code
        .render::<Rgba<u8>>()
        .dark_color(BLACK)
        .light_color(WHITE)
        .quiet_zone(true)
        .max_dimensions(size, size)
        .build();

    let mut image = RgbaImage::from_pixel(size, size, WHITE);
    let x = (i64::from(size) - i64::from(rendered.width())) / 2;
    let y = (i64::from(size) - i64::from(rendered.height())) / 2;
    imageops::replace(&mut image, &rendered, x, y);
    Ok(image)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_qr_size_and_quiet_zone() {
        let image = qr_image("https://fonts.google.com", 120).unwrap();
        assert_eq!(image.dimensions(), (120, 120));
        assert_eq!(*image.get_pixel(0, 0), WHITE);
        assert!(image.pixels().any(|p| *p == BLACK));
    }

    #[test]
    fn test_qr_is_deterministic() {
        assert_eq!(
            qr_image("https://example.com", 97).unwrap(),
            qr_image("https://example.com", 97).unwrap()
        );
    }
}
