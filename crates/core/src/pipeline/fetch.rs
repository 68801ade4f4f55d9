use std::{collections::HashMap, path::PathBuf};

use anyhow::{Context, Result, anyhow};
use font_fetch::{Fetcher, Origin, Transport};
use pair_list::{FontSpec, PairList};

use super::PipelineContext;

/// Local paths of every font a run needs, keyed by font name.
#[derive(Debug, Clone, Default)]
pub struct FetchedFonts {
    paths: HashMap<String, PathBuf>,
    pub downloaded: usize,
    pub cached: usize,
}

impl FetchedFonts {
    pub fn path(&self, spec: &FontSpec) -> Result<&PathBuf> {
        self.paths
            .get(&spec.name)
            .ok_or_else(|| anyhow!("Font '{}' was not fetched", spec.name))
    }
}

/// Makes sure every font used by a pairing is in the cache, in first-use order.
pub fn fetch_referenced<T: Transport>(
    ctx: &PipelineContext,
    pairs: &PairList,
    transport: T,
) -> Result<FetchedFonts> {
    let referenced = pairs.referenced_fonts();
    let cache = ctx.cache();
    cache.check_distinct(referenced.iter().copied())?;

    let fetcher = Fetcher::new(cache, transport);
    let mut fonts = FetchedFonts::default();

    for spec in referenced {
        let fetched = fetcher
            .ensure(spec)
            .with_context(|| format!("Failed to fetch font '{}' from {}", spec.name, spec.source_url))?;

        match fetched.origin {
            Origin::Cached => {
                println!("  {} (cached)", spec.name);
                fonts.cached += 1;
            }
            Origin::Downloaded { bytes } => {
                let size_mb = bytes as f64 / 1024.0 / 1024.0;
                println!("  {} downloaded ({size_mb:.2} MB)", spec.name);
                fonts.downloaded += 1;
            }
        }
        fonts.paths.insert(spec.name.clone(), fetched.path);
    }

    Ok(fonts)
}

/// Loads the pair list and fetches its fonts without rendering anything.
pub fn fetch_fonts<T: Transport>(ctx: &PipelineContext, transport: T) -> Result<FetchedFonts> {
    let pairs = ctx.load_pairs()?;
    println!("Fetching fonts into {}", ctx.fonts_dir.display());
    let fonts = fetch_referenced(ctx, &pairs, transport)?;
    println!("\nFetch Summary");
    println!("  Downloaded: {}", fonts.downloaded);
    println!("  Cached:     {}", fonts.cached);
    Ok(fonts)
}
