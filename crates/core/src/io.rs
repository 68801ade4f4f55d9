//! Output file helpers.

use std::{
    fs::create_dir_all,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use font_fetch::file_stem;
use font_preview::Theme;
use glob::glob;
use image::{ImageFormat, RgbaImage};
use pair_list::FontPair;

use crate::config::{LOGO_FILENAMES, PREVIEW_EXTENSION};

/// `{headline}_{body}_{theme}.png`, using the cache's file stem rule for names.
pub fn preview_file_name(pair: &FontPair, theme: Theme) -> String {
    format!(
        "{}_{}_{theme}.{PREVIEW_EXTENSION}",
        file_stem(&pair.headline.name),
        file_stem(&pair.body.name)
    )
}

pub fn ensure_dir(dir: &Path) -> Result<()> {
    create_dir_all(dir).with_context(|| format!("Failed to create directory: {}", dir.display()))
}

pub fn write_png(path: &Path, image: &RgbaImage) -> Result<()> {
    image
        .save_with_format(path, ImageFormat::Png)
        .with_context(|| format!("Failed to write image: {}", path.display()))
}

/// First of [`LOGO_FILENAMES`] present in `dir`.
pub fn find_logo(dir: &Path) -> Option<PathBuf> {
    LOGO_FILENAMES.iter().map(|name| dir.join(name)).find(|path| path.is_file())
}

pub fn load_logo(path: &Path) -> Result<RgbaImage> {
    let logo =
        image::open(path).with_context(|| format!("Failed to load logo: {}", path.display()))?;
    Ok(logo.to_rgba8())
}

/// Generated images currently in `dir`.
pub fn glob_images(dir: &Path) -> Result<Vec<PathBuf>> {
    let pattern = dir.join(format!("*.{PREVIEW_EXTENSION}"));
    let pattern_str = pattern.to_str().context("Invalid pattern path")?;
    Ok(glob(pattern_str)
        .with_context(|| format!("Failed to glob pattern: {pattern_str}"))?
        .filter_map(Result::ok)
        .collect())
}

#[cfg(test)]
mod tests {
    use pair_list::FontSpec;

    use super::*;

    fn spec(name: &str) -> FontSpec {
        FontSpec { name: name.to_string(), source_url: String::new() }
    }

    #[test]
    fn test_preview_file_name() {
        let pair = FontPair { headline: spec("SpaceGrotesk"), body: spec("DMSans") };
        assert_eq!(preview_file_name(&pair, Theme::Light), "spacegrotesk_dmsans_light.png");
        assert_eq!(preview_file_name(&pair, Theme::Dark), "spacegrotesk_dmsans_dark.png");
    }

    #[test]
    fn test_preview_file_name_uses_cache_stems() {
        let spaced = FontPair { headline: spec("Space Grotesk"), body: spec("DMSans") };
        let joined = FontPair { headline: spec("SpaceGrotesk"), body: spec("DMSans") };
        let name = preview_file_name(&spaced, Theme::Light);
        assert!(name.starts_with(&format!("{}_", file_stem("Space Grotesk"))), "{name}");
        assert_ne!(name, preview_file_name(&joined, Theme::Light));
    }

    #[test]
    fn test_glob_images() {
        let dir = tempfile::TempDir::new().unwrap();
        std::fs::write(dir.path().join("a.png"), b"").unwrap();
        std::fs::write(dir.path().join("notes.txt"), b"").unwrap();
        let found = glob_images(dir.path()).unwrap();
        assert_eq!(found, [dir.path().join("a.png")]);
    }

    #[test]
    fn test_find_logo_prefers_jpg() {
        let dir = tempfile::TempDir::new().unwrap();
        assert_eq!(find_logo(dir.path()), None);

        let logo = RgbaImage::from_pixel(4, 2, image::Rgba([200, 30, 30, 255]));
        write_png(&dir.path().join("logo.png"), &logo).unwrap();
        assert_eq!(find_logo(dir.path()), Some(dir.path().join("logo.png")));
        assert_eq!(load_logo(&dir.path().join("logo.png")).unwrap(), logo);

        std::fs::write(dir.path().join("logo.jpg"), b"not a jpeg").unwrap();
        assert_eq!(find_logo(dir.path()), Some(dir.path().join("logo.jpg")));
        assert!(load_logo(&dir.path().join("logo.jpg")).is_err());
    }
}
