//! End-to-end runs against an in-memory transport.

use std::{cell::Cell, collections::HashMap, fs};

use font_fetch::{Error as FetchError, Transport};
use font_preview::grid_size;
use fontpair_core::{GridLayout, PipelineContext, Theme, run};
use tempfile::TempDir;

const DEJAVU: &[u8] = include_bytes!("../../preview/tests/fixtures/DejaVuSans.ttf");

struct FakeGoogleFonts {
    responses: HashMap<String, Vec<u8>>,
    requests: Cell<usize>,
}

impl FakeGoogleFonts {
    fn new(families: &[&str]) -> Self {
        let mut responses = HashMap::new();
        for family in families {
            let css = format!(
                "@font-face {{ font-family: '{family}'; src: url(http://fonts.test/{family}.ttf) format('truetype'); }}"
            );
            responses.insert(format!("http://css.test/{family}"), css.into_bytes());
            responses.insert(format!("http://fonts.test/{family}.ttf"), DEJAVU.to_vec());
        }
        Self { responses, requests: Cell::new(0) }
    }
}

impl Transport for FakeGoogleFonts {
    fn get(&self, url: &str, _accept: &str) -> font_fetch::Result<Vec<u8>> {
        self.requests.set(self.requests.get() + 1);
        self.responses
            .get(url)
            .cloned()
            .ok_or_else(|| FetchError::Status { url: url.to_string(), status: 404 })
    }
}

fn context(dir: &TempDir, pairs: &str) -> PipelineContext {
    let pairs_file = dir.path().join("fonts.txt");
    fs::write(&pairs_file, pairs).unwrap();
    PipelineContext {
        pairs_file,
        fonts_dir: dir.path().join("fonts"),
        output_dir: dir.path().join("previews"),
        timestamp: false,
        ..PipelineContext::default()
    }
}

const SAMPLE: &str = "\
# comment

Headline + Body
Headline|http://css.test/Headline
Body|http://css.test/Body
";

#[test]
fn test_full_run_then_cached_run() {
    let dir = TempDir::new().unwrap();
    let ctx = context(&dir, SAMPLE);
    let transport = FakeGoogleFonts::new(&["Headline", "Body"]);

    let summary = run(&ctx, &transport).unwrap();
    assert_eq!(summary.pairs, 1);
    assert_eq!(summary.downloaded, 2);
    assert_eq!(summary.cached, 0);
    assert_eq!(transport.requests.get(), 4);

    assert_eq!(
        summary.previews,
        [
            ctx.output_dir.join("headline_body_light.png"),
            ctx.output_dir.join("headline_body_dark.png"),
        ]
    );
    for path in &summary.previews {
        assert_eq!(image::image_dimensions(path).unwrap(), (1400, 1400));
    }
    assert!(ctx.fonts_dir.join("headline.ttf").is_file());
    assert!(ctx.fonts_dir.join("body.ttf").is_file());

    assert_eq!(summary.comparison, ctx.output_dir.join("font_comparison.png"));
    let grid = GridLayout::default();
    assert_eq!(
        image::image_dimensions(&summary.comparison).unwrap(),
        grid_size(2, 1400, 1400, &grid)
    );

    let again = run(&ctx, &transport).unwrap();
    assert_eq!(again.downloaded, 0);
    assert_eq!(again.cached, 2);
    assert_eq!(transport.requests.get(), 4);
    assert_eq!(fs::read_dir(&ctx.output_dir).unwrap().count(), 3);
}

#[test]
fn test_undeclared_font_touches_nothing() {
    let dir = TempDir::new().unwrap();
    let ctx = context(&dir, "A + B\nA|http://css.test/A\n");
    let transport = FakeGoogleFonts::new(&["A"]);

    let err = run(&ctx, &transport).unwrap_err();
    assert!(format!("{err:#}").contains("'B'"));
    assert_eq!(transport.requests.get(), 0);
    assert!(!ctx.fonts_dir.exists());
    assert!(!ctx.output_dir.exists());
}

#[test]
fn test_fetch_failure_names_the_font() {
    let dir = TempDir::new().unwrap();
    let ctx = context(
        &dir,
        "A + Missing\nA|http://css.test/A\nMissing|http://css.test/Missing\n",
    );
    let transport = FakeGoogleFonts::new(&["A"]);

    let err = run(&ctx, &transport).unwrap_err();
    let message = format!("{err:#}");
    assert!(message.contains("'Missing'"), "{message}");
    assert!(message.contains("404"), "{message}");
    assert!(!ctx.output_dir.exists());
}

#[test]
fn test_single_theme_and_duplicate_pairs() {
    let dir = TempDir::new().unwrap();
    let mut ctx = context(
        &dir,
        "A + B\nA + B\nA|http://css.test/A\nB|http://css.test/B\n",
    );
    ctx.themes = vec![Theme::Dark];
    let transport = FakeGoogleFonts::new(&["A", "B"]);

    let summary = run(&ctx, &transport).unwrap();
    assert_eq!(
        summary.previews,
        [ctx.output_dir.join("a_b_dark.png"), ctx.output_dir.join("a_b_dark_2.png")]
    );
}

#[test]
fn test_empty_pair_list() {
    let dir = TempDir::new().unwrap();
    let ctx = context(&dir, "# nothing yet\nA|http://css.test/A\n");
    let transport = FakeGoogleFonts::new(&["A"]);

    assert!(run(&ctx, &transport).is_err());
    assert_eq!(transport.requests.get(), 0);
}

#[test]
fn test_names_sharing_a_cache_file_fail_before_fetching() {
    let dir = TempDir::new().unwrap();
    let ctx = context(&dir, "Inter + INTER\nInter|http://css.test/Inter\nINTER|http://css.test/INTER\n");
    let transport = FakeGoogleFonts::new(&["Inter", "INTER"]);

    let message = format!("{:#}", run(&ctx, &transport).unwrap_err());
    assert!(message.contains("'Inter'") && message.contains("'INTER'"), "{message}");
    assert_eq!(transport.requests.get(), 0);
    assert!(!ctx.output_dir.exists());
}

#[test]
fn test_logo_is_drawn_on_every_preview() {
    let dir = TempDir::new().unwrap();
    let logo_path = dir.path().join("logo.png");
    let red = image::Rgba([200, 30, 30, 255]);
    image::RgbaImage::from_pixel(40, 40, red).save(&logo_path).unwrap();
    let ctx = PipelineContext { logo: Some(logo_path), ..context(&dir, SAMPLE) };
    let transport = FakeGoogleFonts::new(&["Headline", "Body"]);

    let summary = run(&ctx, &transport).unwrap();
    for path in &summary.previews {
        let preview = image::open(path).unwrap().to_rgba8();
        let pixel = preview.get_pixel(100, 100);
        assert!(pixel.0.iter().zip(red.0).all(|(a, b)| a.abs_diff(b) <= 2), "{pixel:?}");
    }
}

#[test]
fn test_unreadable_logo_fails_before_fetching() {
    let dir = TempDir::new().unwrap();
    let ctx = PipelineContext { logo: Some(dir.path().join("missing.png")), ..context(&dir, SAMPLE) };
    let transport = FakeGoogleFonts::new(&["Headline", "Body"]);

    let message = format!("{:#}", run(&ctx, &transport).unwrap_err());
    assert!(message.contains("Failed to load logo"), "{message}");
    assert_eq!(transport.requests.get(), 0);
}
