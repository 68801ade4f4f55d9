use std::{collections::HashMap, path::PathBuf};

use anyhow::{Context, Result};
use font_preview::{FontFace, Layout, PairFaces, RenderedPreview, compose, render_preview};
use log::debug;
use pair_list::{FontPair, FontSpec, PairList};

use super::{FetchedFonts, PipelineContext};
use crate::{
    config::PREVIEW_EXTENSION,
    io::{ensure_dir, preview_file_name, write_png},
};

/// Parsed faces, loaded once per font name.
#[derive(Default)]
struct FaceCache {
    faces: HashMap<String, FontFace>,
}

impl FaceCache {
    fn get(&mut self, spec: &FontSpec, fonts: &FetchedFonts) -> Result<FontFace> {
        if let Some(face) = self.faces.get(&spec.name) {
            return Ok(face.clone());
        }
        let path = fonts.path(spec)?;
        let face = FontFace::load(spec.name.clone(), path)?;
        debug!("loaded {} from {}", spec.name, path.display());
        self.faces.insert(spec.name.clone(), face.clone());
        Ok(face)
    }

    fn pair(&mut self, pair: &FontPair, fonts: &FetchedFonts) -> Result<PairFaces> {
        Ok(PairFaces { headline: self.get(&pair.headline, fonts)?, body: self.get(&pair.body, fonts)? })
    }
}

/// Appends `_2`, `_3`, ... when the same pair appears more than once.
fn unique_name(used: &mut HashMap<String, usize>, name: String) -> String {
    let count = used.entry(name.clone()).or_insert(0);
    *count += 1;
    if *count == 1 {
        return name;
    }
    let suffix = format!(".{PREVIEW_EXTENSION}");
    let stem = name.strip_suffix(&suffix).unwrap_or(&name);
    format!("{stem}_{count}{suffix}")
}

/// Renders every pair in every theme and writes each preview as it is produced.
pub fn render_all(
    ctx: &PipelineContext,
    layout: &Layout,
    pairs: &PairList,
    fonts: &FetchedFonts,
) -> Result<(Vec<RenderedPreview>, Vec<PathBuf>)> {
    ensure_dir(&ctx.output_dir)?;

    let mut faces = FaceCache::default();
    let mut used = HashMap::new();
    let mut previews = Vec::new();
    let mut paths = Vec::new();

    for pair in pairs.pairs() {
        let label = pair.label();
        let pair_faces = faces
            .pair(pair, fonts)
            .with_context(|| format!("Failed to load fonts for {label}"))?;

        for &theme in &ctx.themes {
            let preview = render_preview(pair, &pair_faces, theme, layout)
                .with_context(|| format!("Failed to render {label} ({theme})"))?;

            let path = ctx.output_dir.join(unique_name(&mut used, preview_file_name(pair, theme)));
            write_png(&path, &preview.image)?;
            println!("  {label} ({theme}) → {}", path.display());

            previews.push(preview);
            paths.push(path);
        }
    }

    Ok((previews, paths))
}

/// Composes all previews into the comparison sheet, captioned in the first pair's body font.
pub fn write_comparison(
    ctx: &PipelineContext,
    previews: &[RenderedPreview],
    fonts: &FetchedFonts,
    stamp: Option<String>,
) -> Result<PathBuf> {
    let first = previews.first().context("No previews to compose")?;
    let body = &first.pair.body;
    let label_face = FontFace::load(body.name.clone(), fonts.path(body)?)?;

    let sheet = compose(previews, &label_face, &ctx.grid, stamp.as_deref())
        .context("Failed to compose comparison sheet")?;

    let path = ctx.comparison_output();
    write_png(&path, &sheet)?;
    println!("  {} ({}x{})", path.display(), sheet.width(), sheet.height());
    Ok(path)
}
