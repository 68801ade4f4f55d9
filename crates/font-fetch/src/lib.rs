//! Google Fonts downloader with a flat local cache.
//!
//! Google Fonts `css2` endpoints return a stylesheet, not the font itself.
//! [`Fetcher::ensure`] follows that one level of indirection: it fetches the
//! stylesheet, pulls the first `url(...)` out of it and downloads the font
//! binary into the cache. Fonts already in the cache are returned without any
//! network activity.

mod cache;
mod css;
mod error;
mod transport;

use std::{
    fs::{create_dir_all, remove_file, rename, write},
    path::{Path, PathBuf},
};

use log::{debug, info};
use pair_list::FontSpec;

pub use cache::{FontCache, file_stem};
pub use css::extract_font_url;
pub use error::{Error, Result};
pub use transport::{ACCEPT_ANY, ACCEPT_CSS, DEFAULT_USER_AGENT, HttpTransport, Transport};

/// How [`Fetcher::ensure`] satisfied a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    Cached,
    Downloaded { bytes: usize },
}

/// A font file present in the cache.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fetched {
    pub path: PathBuf,
    pub origin: Origin,
}

/// Fills a [`FontCache`] through a [`Transport`].
#[derive(Debug)]
pub struct Fetcher<T> {
    cache: FontCache,
    transport: T,
}

impl<T: Transport> Fetcher<T> {
    pub fn new(cache: FontCache, transport: T) -> Self {
        Self { cache, transport }
    }

    pub fn cache(&self) -> &FontCache {
        &self.cache
    }

    /// Makes sure `spec` is in the cache and returns its path.
    pub fn ensure(&self, spec: &FontSpec) -> Result<Fetched> {
        if let Some(path) = self.cache.lookup(spec) {
            debug!("{}: cached at {}", spec.name, path.display());
            return Ok(Fetched { path, origin: Origin::Cached });
        }

        info!("Downloading {}", spec.name);
        let asset_url = self.resolve_asset_url(spec)?;
        let data = self.transport.get(&asset_url, ACCEPT_ANY)?;

        let path = self.cache.path_for(&spec.name);
        persist(&path, &data)?;

        let size_kb = data.len() as f64 / 1024.0;
        info!("{}: downloaded {size_kb:.1} KB to {}", spec.name, path.display());
        Ok(Fetched { path, origin: Origin::Downloaded { bytes: data.len() } })
    }

    fn resolve_asset_url(&self, spec: &FontSpec) -> Result<String> {
        let body = self.transport.get(&spec.source_url, ACCEPT_CSS)?;
        let css = String::from_utf8_lossy(&body);
        let url = extract_font_url(&css)
            .ok_or_else(|| Error::NoAssetUrl { font: spec.name.clone() })?;
        debug!("{}: asset {url}", spec.name);
        Ok(url.to_string())
    }
}

/// Writes to a `.part` sibling and renames it into place.
fn persist(path: &Path, data: &[u8]) -> Result<()> {
    let io_err = |path: &Path| {
        let path = path.to_path_buf();
        move |source| Error::Io { path, source }
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        create_dir_all(parent).map_err(io_err(parent))?;
    }

    let partial = path.with_extension("part");
    write(&partial, data).map_err(io_err(&partial))?;
    if let Err(source) = rename(&partial, path) {
        let _ = remove_file(&partial);
        return Err(Error::Io { path: path.to_path_buf(), source });
    }
    Ok(())
}
