//! Preview pipeline: load pairs, fetch fonts, render, compose.

mod clean;
mod fetch;
mod render;

pub use clean::clean;
pub use fetch::{FetchedFonts, fetch_fonts, fetch_referenced};
pub use render::{render_all, write_comparison};

use std::{path::PathBuf, time::Instant};

use anyhow::{Context, Result, bail};
use chrono::Local;
use font_fetch::{FontCache, Transport};
use font_preview::{GridLayout, Layout, Theme};
use log::info;
use pair_list::PairList;

use crate::{
    config::{
        COMPARISON_FILENAME, DEFAULT_FONTS_DIR, DEFAULT_OUTPUT_DIR, DEFAULT_PAIRS_FILE,
        TIMESTAMP_FORMAT,
    },
    io::load_logo,
};

const STEP_COUNT: usize = 5;

/// Everything a run needs; passed explicitly to every step.
#[derive(Debug, Clone)]
pub struct PipelineContext {
    pub pairs_file: PathBuf,
    pub fonts_dir: PathBuf,
    pub output_dir: PathBuf,
    pub themes: Vec<Theme>,
    pub layout: Layout,
    pub grid: GridLayout,
    /// Image drawn left of the preview header.
    pub logo: Option<PathBuf>,
    /// Print a "Generated on" line in the comparison footer.
    pub timestamp: bool,
}

impl Default for PipelineContext {
    fn default() -> Self {
        Self {
            pairs_file: PathBuf::from(DEFAULT_PAIRS_FILE),
            fonts_dir: PathBuf::from(DEFAULT_FONTS_DIR),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            themes: Theme::ALL.to_vec(),
            layout: Layout::default(),
            grid: GridLayout::default(),
            logo: None,
            timestamp: true,
        }
    }
}

impl PipelineContext {
    pub fn cache(&self) -> FontCache {
        FontCache::new(&self.fonts_dir)
    }

    pub fn comparison_output(&self) -> PathBuf {
        self.output_dir.join(COMPARISON_FILENAME)
    }

    pub fn load_pairs(&self) -> Result<PairList> {
        pair_list::load(&self.pairs_file)
            .with_context(|| format!("Failed to load pair list {}", self.pairs_file.display()))
    }

    /// [`PipelineContext::layout`] with the logo, if any, loaded into it.
    pub fn preview_layout(&self) -> Result<Layout> {
        let mut layout = self.layout.clone();
        if let Some(path) = &self.logo {
            let logo = load_logo(path)?;
            info!("logo {} ({}x{})", path.display(), logo.width(), logo.height());
            layout.logo = Some(logo);
        }
        Ok(layout)
    }

    fn stamp(&self) -> Option<String> {
        self.timestamp.then(|| Local::now().format(TIMESTAMP_FORMAT).to_string())
    }
}

/// What a full run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub pairs: usize,
    pub downloaded: usize,
    pub cached: usize,
    pub previews: Vec<PathBuf>,
    pub comparison: PathBuf,
}

pub fn run_step<T>(
    name: &str,
    step_num: usize,
    total: usize,
    f: impl FnOnce() -> Result<T>,
) -> Result<T> {
    println!("\n[{step_num}/{total}] {name}");
    let start = Instant::now();
    let value = f()?;
    println!("  ✓ {name} ({:.2}s)", start.elapsed().as_secs_f64());
    Ok(value)
}

/// Runs the whole pipeline. The first failure aborts the run.
///
/// The pair list is parsed before anything touches the network or the disk,
/// so a bad list leaves no trace.
pub fn run<T: Transport>(ctx: &PipelineContext, transport: T) -> Result<RunSummary> {
    let start = Instant::now();
    if ctx.themes.is_empty() {
        bail!("No themes selected");
    }

    println!("═══════════════════════════════════════════════════════════════════════════════");
    println!("Font Pairing Previews");
    println!("═══════════════════════════════════════════════════════════════════════════════");

    let pairs = run_step("load-pairs", 1, STEP_COUNT, || ctx.load_pairs())?;
    if pairs.is_empty() {
        bail!("No font pairs in {}", ctx.pairs_file.display());
    }
    println!("  {} pairs, {} fonts", pairs.pairs().len(), pairs.referenced_fonts().len());
    let layout = ctx.preview_layout()?;

    let fonts = run_step("fetch", 2, STEP_COUNT, || fetch_referenced(ctx, &pairs, transport))?;
    run_step("clean", 3, STEP_COUNT, || clean(&ctx.output_dir))?;
    let (previews, paths) = run_step("render", 4, STEP_COUNT, || render_all(ctx, &layout, &pairs, &fonts))?;
    let comparison =
        run_step("compose", 5, STEP_COUNT, || write_comparison(ctx, &previews, &fonts, ctx.stamp()))?;

    println!("\n═══════════════════════════════════════════════════════════════════════════════");
    println!("✨ Done in {:.2}s", start.elapsed().as_secs_f64());
    println!("   Output: {}", ctx.output_dir.display());
    println!("   Previews: {}, comparison: {}", paths.len(), comparison.display());
    println!("═══════════════════════════════════════════════════════════════════════════════");

    Ok(RunSummary {
        pairs: pairs.pairs().len(),
        downloaded: fonts.downloaded,
        cached: fonts.cached,
        previews: paths,
        comparison,
    })
}
