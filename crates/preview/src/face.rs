//! Loaded fonts and text measurement.

use std::{fmt, fs::read, path::Path};

use ab_glyph::{Font, FontArc, GlyphId, PxScale, ScaleFont};

use crate::{Error, Result};

/// A parsed font ready for measuring and rasterizing text.
#[derive(Clone)]
pub struct FontFace {
    name: String,
    font: FontArc,
}

/// Advance width and line box of a run of text at one size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextExtent {
    pub width: f32,
    pub height: f32,
    pub ascent: f32,
}

impl FontFace {
    pub fn from_bytes(name: impl Into<String>, data: Vec<u8>) -> Result<Self> {
        let name = name.into();
        let font = FontArc::try_from_vec(data)
            .map_err(|source| Error::FontLoad { name: name.clone(), source })?;
        Ok(Self { name, font })
    }

    pub fn load(name: impl Into<String>, path: &Path) -> Result<Self> {
        let name = name.into();
        let data = read(path).map_err(|source| Error::FontRead {
            name: name.clone(),
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_bytes(name, data)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn font(&self) -> &FontArc {
        &self.font
    }

    /// Number of characters in `text` the font has no glyph for.
    pub fn missing_glyphs(&self, text: &str) -> usize {
        text.chars()
            .filter(|c| !c.is_whitespace())
            .filter(|&c| self.font.glyph_id(c) == GlyphId(0))
            .count()
    }

    pub fn measure(&self, size: f32, text: &str) -> TextExtent {
        let scaled = self.font.as_scaled(PxScale::from(size));
        let mut width = 0.0;
        let mut previous: Option<GlyphId> = None;
        for c in text.chars() {
            let id = self.font.glyph_id(c);
            if let Some(prev) = previous {
                width += scaled.kern(prev, id);
            }
            width += scaled.h_advance(id);
            previous = Some(id);
        }
        TextExtent { width, height: scaled.ascent() - scaled.descent(), ascent: scaled.ascent() }
    }
}

impl fmt::Debug for FontFace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FontFace").field("name", &self.name).finish_non_exhaustive()
    }
}
