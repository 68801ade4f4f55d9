//! Flat on-disk font cache.

use std::{
    collections::HashMap,
    path::{Path, PathBuf},
};

use pair_list::FontSpec;
use sha2::{Digest, Sha256};

use crate::{Error, Result};

const FONT_EXTENSION: &str = "ttf";

/// Hex digits of the name digest appended to stems of non-alphanumeric names.
const DIGEST_LEN: usize = 8;

/// Directory of downloaded fonts, one file per font name.
#[derive(Debug, Clone)]
pub struct FontCache {
    dir: PathBuf,
}

impl FontCache {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Where the font called `name` lives in the cache, whether or not it exists yet.
    pub fn path_for(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{}.{FONT_EXTENSION}", file_stem(name)))
    }

    /// Cached file for `spec`, if one has already been downloaded.
    pub fn lookup(&self, spec: &FontSpec) -> Option<PathBuf> {
        let path = self.path_for(&spec.name);
        path.is_file().then_some(path)
    }

    /// Fails if two of `specs` would share a cache file.
    pub fn check_distinct<'a>(&self, specs: impl IntoIterator<Item = &'a FontSpec>) -> Result<()> {
        let mut owners: HashMap<PathBuf, &str> = HashMap::new();
        for spec in specs {
            let path = self.path_for(&spec.name);
            match owners.get(&path) {
                Some(first) if *first != spec.name => {
                    return Err(Error::CacheCollision {
                        first: first.to_string(),
                        second: spec.name.clone(),
                        path,
                    });
                }
                Some(_) => {}
                None => {
                    owners.insert(path, &spec.name);
                }
            }
        }
        Ok(())
    }
}

/// File stem for a font name.
///
/// Names made only of ASCII letters and digits are simply lowercased. Anything
/// else keeps its lowercased ASCII alphanumerics and gets a short SHA-256 digest
/// of the full name, so `Foo-Bar` and `FooBar` never share a file.
pub fn file_stem(name: &str) -> String {
    let stem: String = name
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect();
    if !stem.is_empty() && stem.len() == name.len() {
        return stem;
    }

    let mut hasher = Sha256::new();
    hasher.update(name.as_bytes());
    let digest = format!("{:x}", hasher.finalize());
    let digest = &digest[..DIGEST_LEN];
    if stem.is_empty() { digest.to_string() } else { format!("{stem}-{digest}") }
}
