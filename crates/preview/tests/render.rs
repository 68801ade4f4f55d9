//! Rendering tests against a real TrueType font.
//!
//! DejaVuSans.ttf is distributed under the Bitstream Vera / DejaVu license.

use font_preview::{
    DARK, Error, FontFace, FooterLayout, GridLayout, HeaderLayout, LIGHT, Layout, PairFaces,
    RenderedPreview, Theme, compose, grid_size, render_preview,
};
use image::{Rgba, RgbaImage};
use pair_list::{FontPair, FontSpec};

const DEJAVU: &[u8] = include_bytes!("fixtures/DejaVuSans.ttf");

fn face(name: &str) -> FontFace {
    FontFace::from_bytes(name, DEJAVU.to_vec()).unwrap()
}

fn pair(headline: &str, body: &str) -> FontPair {
    let spec = |name: &str| FontSpec {
        name: name.to_string(),
        source_url: format!("http://example/{name}"),
    };
    FontPair { headline: spec(headline), body: spec(body) }
}

fn close(a: Rgba<u8>, b: Rgba<u8>) -> bool {
    a.0.iter().zip(b.0).all(|(x, y)| x.abs_diff(y) <= 2)
}

fn faces() -> PairFaces {
    PairFaces { headline: face("Headline"), body: face("Body") }
}

#[test]
fn test_render_is_deterministic() {
    let layout = Layout::default();
    let pair = pair("Headline", "Body");
    let first = render_preview(&pair, &faces(), Theme::Light, &layout).unwrap();
    let second = render_preview(&pair, &faces(), Theme::Light, &layout).unwrap();

    assert_eq!(first.image.dimensions(), (layout.width, layout.height));
    assert!(first.image == second.image);
    assert_eq!(first.theme, Theme::Light);
    assert_eq!(first.pair, pair);
}

#[test]
fn test_themes_use_their_palettes() {
    let layout = Layout::default();
    let pair = pair("Headline", "Body");
    let light = render_preview(&pair, &faces(), Theme::Light, &layout).unwrap();
    let dark = render_preview(&pair, &faces(), Theme::Dark, &layout).unwrap();

    // Empty area inside the first card, right of the button.
    assert!(close(*light.image.get_pixel(640, 560), LIGHT.card.fill));
    assert!(close(*dark.image.get_pixel(640, 560), DARK.card.fill));
    assert!(light.image != dark.image);
}

#[test]
fn test_text_is_drawn() {
    let layout = Layout::default();
    let preview = render_preview(&pair("Headline", "Body"), &faces(), Theme::Light, &layout).unwrap();

    // The header title is set in the headline color.
    let header = (60..140).flat_map(|y| (70..400).map(move |x| (x, y)));
    assert!(header.map(|(x, y)| *preview.image.get_pixel(x, y)).any(|p| close(p, LIGHT.headline)));
}

#[test]
fn test_overflow_is_an_error() {
    let layout = Layout {
        header: HeaderLayout { title: "W".repeat(200), ..Layout::default().header },
        ..Layout::default()
    };
    let err = render_preview(&pair("A", "B"), &faces(), Theme::Dark, &layout).unwrap_err();
    match err {
        Error::Overflow { text, width, .. } => {
            assert_eq!(text, "W".repeat(200));
            assert_eq!(width, layout.width);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_logo_pushes_header_text_right() {
    let red = Rgba([200, 30, 30, 255]);
    let layout = Layout { logo: Some(RgbaImage::from_pixel(50, 50, red)), ..Layout::default() };
    let with_logo =
        render_preview(&pair("Headline", "Body"), &faces(), Theme::Light, &layout).unwrap();
    let without =
        render_preview(&pair("Headline", "Body"), &faces(), Theme::Light, &Layout::default())
            .unwrap();

    assert!(close(*with_logo.image.get_pixel(100, 100), red));
    assert!(!close(*without.image.get_pixel(100, 100), red));

    // Title now starts right of the logo and its gap.
    let logo_right = (70..400).rev().find(|&x| close(*with_logo.image.get_pixel(x, 100), red));
    let logo_right = logo_right.unwrap();
    let text_start = logo_right + 1 + 40;
    let left_of_text = (60..140).flat_map(|y| (logo_right + 2..text_start - 2).map(move |x| (x, y)));
    assert!(
        !left_of_text
            .map(|(x, y)| *with_logo.image.get_pixel(x, y))
            .any(|p| close(p, LIGHT.headline))
    );
    let title = (60..140).flat_map(|y| (text_start..text_start + 300).map(move |x| (x, y)));
    assert!(title.map(|(x, y)| *with_logo.image.get_pixel(x, y)).any(|p| close(p, LIGHT.headline)));
}

#[test]
fn test_font_info_must_not_overlap_footer_text() {
    let layout = Layout {
        footer: FooterLayout { channel_description: "x".repeat(100), ..Layout::default().footer },
        ..Layout::default()
    };
    let err = render_preview(&pair("A", "B"), &faces(), Theme::Light, &layout).unwrap_err();
    match err {
        Error::Overlap { text, other } => {
            assert_eq!(text, "A for Headlines • B for Body Text");
            assert_eq!(other, "x".repeat(100));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_invalid_font_is_fatal() {
    let err = FontFace::from_bytes("Broken", b"not a font".to_vec()).unwrap_err();
    assert!(matches!(err, Error::FontLoad { ref name, .. } if name == "Broken"));
    assert!(err.to_string().contains("Broken"));
}

#[test]
fn test_missing_font_file() {
    let err = FontFace::load("Gone", std::path::Path::new("/nonexistent/gone.ttf")).unwrap_err();
    assert!(matches!(err, Error::FontRead { .. }));
}

#[test]
fn test_measure_and_probe() {
    let face = face("DejaVu");
    let short = face.measure(16.0, "Test");
    let long = face.measure(16.0, "Test String");
    assert!(short.width > 0.0);
    assert!(long.width > short.width);
    assert!(face.measure(32.0, "Test").width > short.width);
    assert_eq!(face.missing_glyphs(font_preview::PROBE_TEXT), 0);
}

fn solid(color: Rgba<u8>, theme: Theme, pair: FontPair) -> RenderedPreview {
    RenderedPreview { image: RgbaImage::from_pixel(100, 100, color), theme, pair }
}

#[test]
fn test_compose_preserves_order() {
    let red = Rgba([255, 0, 0, 255]);
    let blue = Rgba([0, 0, 255, 255]);
    let green = Rgba([0, 255, 0, 255]);
    let previews = [
        solid(red, Theme::Light, pair("A", "B")),
        solid(blue, Theme::Dark, pair("A", "B")),
        solid(green, Theme::Light, pair("C", "D")),
    ];
    let grid = GridLayout { columns: 2, thumb_width: 200, ..GridLayout::default() };

    let sheet = compose(&previews, &face("Label"), &grid, Some("2026-01-01 00:00:00")).unwrap();
    assert_eq!(sheet.dimensions(), grid_size(3, 100, 100, &grid));

    // Centers of cells (0, 0), (0, 1), (1, 0).
    assert!(close(*sheet.get_pixel(60 + 100, 60 + 100), red));
    assert!(close(*sheet.get_pixel(60 + 200 + 60 + 100, 60 + 100), blue));
    assert!(close(*sheet.get_pixel(60 + 100, 60 + 200 + 70 + 60 + 100), green));
}

#[test]
fn test_compose_is_deterministic_without_stamp() {
    let previews = [solid(Rgba([10, 20, 30, 255]), Theme::Light, pair("A", "B"))];
    let grid = GridLayout { thumb_width: 300, ..GridLayout::default() };
    let a = compose(&previews, &face("Label"), &grid, None).unwrap();
    let b = compose(&previews, &face("Label"), &grid, None).unwrap();
    assert!(a == b);
}

#[test]
fn test_compose_nothing() {
    let err = compose(&[], &face("Label"), &GridLayout::default(), None).unwrap_err();
    assert!(matches!(err, Error::EmptyComposite));
}

#[test]
fn test_compose_with_qr_wider_than_sheet() {
    let previews = [solid(Rgba([10, 20, 30, 255]), Theme::Dark, pair("A", "B"))];
    let grid = GridLayout { thumb_width: 100, qr_size: 1000, ..GridLayout::default() };
    let sheet = compose(&previews, &face("Label"), &grid, None).unwrap();
    assert_eq!(sheet.dimensions(), grid_size(1, 100, 100, &grid));
}
