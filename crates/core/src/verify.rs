//! Checks that cached fonts can actually be used for rendering.

use std::{fs::read, path::Path};

use anyhow::Result;
use font_preview::{FontFace, PROBE_TEXT};
use read_fonts::{FontRef, TableProvider};

use crate::pipeline::PipelineContext;

const FAMILY_NAME_ID: u16 = 1;
const TYPOGRAPHIC_FAMILY_NAME_ID: u16 = 16;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FontStatus {
    Valid { family: Option<String> },
    Invalid { reason: String },
    Missing,
}

fn family_name(font: &FontRef) -> Option<String> {
    let name = font.name().ok()?;
    let lookup = |id: u16| {
        name.name_record()
            .iter()
            .filter(|record| record.name_id().to_u16() == id)
            .find_map(|record| record.string(name.string_data()).ok().map(|s| s.to_string()))
    };
    lookup(TYPOGRAPHIC_FAMILY_NAME_ID).or_else(|| lookup(FAMILY_NAME_ID))
}

/// Parses the font and rasterizes a probe string with it.
pub fn check_font(name: &str, path: &Path) -> FontStatus {
    if !path.is_file() {
        return FontStatus::Missing;
    }
    let data = match read(path) {
        Ok(data) => data,
        Err(e) => return FontStatus::Invalid { reason: e.to_string() },
    };

    let family = match FontRef::new(&data) {
        Ok(font) => family_name(&font),
        Err(e) => return FontStatus::Invalid { reason: format!("failed to parse font: {e}") },
    };

    let face = match FontFace::from_bytes(name, data) {
        Ok(face) => face,
        Err(e) => return FontStatus::Invalid { reason: e.to_string() },
    };
    let missing = face.missing_glyphs(PROBE_TEXT);
    if missing > 0 || face.measure(24.0, PROBE_TEXT).width <= 0.0 {
        return FontStatus::Invalid { reason: format!("{missing} glyphs missing for {PROBE_TEXT:?}") };
    }

    FontStatus::Valid { family }
}

/// Checks every declared font in the cache and prints one line per font.
///
/// Returns the per-font results; fails only if the pair list cannot be loaded.
pub fn verify_fonts(ctx: &PipelineContext) -> Result<Vec<(String, FontStatus)>> {
    let pairs = ctx.load_pairs()?;
    let cache = ctx.cache();
    println!("Verifying fonts in {}", cache.dir().display());

    let results: Vec<_> = pairs
        .declared_fonts()
        .map(|spec| {
            let status = check_font(&spec.name, &cache.path_for(&spec.name));
            match &status {
                FontStatus::Valid { family: Some(family) } => {
                    println!("  ✓ {} is valid ({family})", spec.name)
                }
                FontStatus::Valid { family: None } => println!("  ✓ {} is valid", spec.name),
                FontStatus::Invalid { reason } => println!("  ✗ {} is invalid: {reason}", spec.name),
                FontStatus::Missing => println!("  - {} does not exist", spec.name),
            }
            (spec.name.clone(), status)
        })
        .collect();

    Ok(results)
}

#[cfg(test)]
mod tests {
    use std::fs::write;

    use super::*;

    const DEJAVU: &[u8] = include_bytes!("../../preview/tests/fixtures/DejaVuSans.ttf");

    #[test]
    fn test_check_valid_font() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("dejavusans.ttf");
        write(&path, DEJAVU).unwrap();
        assert_eq!(
            check_font("DejaVu Sans", &path),
            FontStatus::Valid { family: Some("DejaVu Sans".to_string()) }
        );
    }

    #[test]
    fn test_check_garbage_font() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("broken.ttf");
        write(&path, b"<html>not a font</html>").unwrap();
        assert!(matches!(check_font("Broken", &path), FontStatus::Invalid { .. }));
    }

    #[test]
    fn test_check_missing_font() {
        let dir = tempfile::TempDir::new().unwrap();
        assert_eq!(check_font("Gone", &dir.path().join("gone.ttf")), FontStatus::Missing);
    }
}
