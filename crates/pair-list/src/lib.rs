//! Font pairing lists.
//!
//! A pair list is a line-oriented UTF-8 text file with two kinds of records:
//!
//! ```text
//! # headline + body
//! Space Grotesk + Inter
//!
//! # name|css url
//! Space Grotesk|https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@500&display=swap
//! Inter|https://fonts.googleapis.com/css2?family=Inter&display=swap
//! ```
//!
//! Declarations may come before or after the pairings that use them. Pairings
//! are resolved once the whole file has been read.
//!
//! # Example
//!
//! ```
//! let list = pair_list::parse("A + B\nA|http://a/css\nB|http://b/css\n").unwrap();
//! assert_eq!(list.pairs()[0].headline.name, "A");
//! assert_eq!(list.pairs()[0].body.source_url, "http://b/css");
//! ```

mod error;

use std::{fs::read_to_string, path::Path};

use indexmap::IndexMap;

pub use error::{Error, Result};

const COMMENT: char = '#';
const PAIR_SEPARATOR: char = '+';
const SOURCE_SEPARATOR: char = '|';

/// A named font and the stylesheet URL it is downloaded from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FontSpec {
    pub name: String,
    pub source_url: String,
}

/// A headline/body combination to preview.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FontPair {
    pub headline: FontSpec,
    pub body: FontSpec,
}

impl FontPair {
    /// `"Headline + Body"`, as written in the pair list.
    pub fn label(&self) -> String {
        format!("{} {PAIR_SEPARATOR} {}", self.headline.name, self.body.name)
    }
}

/// Parsed pair list: pairings in file order plus every declared font.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PairList {
    pairs: Vec<FontPair>,
    fonts: IndexMap<String, FontSpec>,
}

impl PairList {
    pub fn pairs(&self) -> &[FontPair] {
        &self.pairs
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Every declared font in declaration order, used or not.
    pub fn declared_fonts(&self) -> impl Iterator<Item = &FontSpec> {
        self.fonts.values()
    }

    pub fn font(&self, name: &str) -> Option<&FontSpec> {
        self.fonts.get(name)
    }

    /// Distinct fonts referenced by at least one pairing, in first-use order.
    pub fn referenced_fonts(&self) -> Vec<&FontSpec> {
        let mut seen: IndexMap<&str, &FontSpec> = IndexMap::new();
        for pair in &self.pairs {
            for spec in [&pair.headline, &pair.body] {
                seen.entry(spec.name.as_str()).or_insert(spec);
            }
        }
        seen.into_values().collect()
    }
}

enum Record<'a> {
    Pairing { headline: &'a str, body: &'a str },
    Declaration { name: &'a str, url: &'a str },
}

fn parse_line(line: usize, text: &str) -> Result<Option<Record<'_>>> {
    let trimmed = text.trim();
    if trimmed.is_empty() || trimmed.starts_with(COMMENT) {
        return Ok(None);
    }

    // Stylesheet URLs routinely contain `+`, so a `|` always wins.
    if let Some((name, url)) = trimmed.split_once(SOURCE_SEPARATOR) {
        let (name, url) = (name.trim(), url.trim());
        if name.is_empty() {
            return Err(Error::EmptyName { line });
        }
        if url.is_empty() {
            return Err(Error::EmptyUrl { line });
        }
        return Ok(Some(Record::Declaration { name, url }));
    }

    let Some((headline, body)) = trimmed.split_once(PAIR_SEPARATOR) else {
        return Err(Error::Syntax { line, content: trimmed.to_string() });
    };
    if body.contains(PAIR_SEPARATOR) {
        return Err(Error::Syntax { line, content: trimmed.to_string() });
    }
    let (headline, body) = (headline.trim(), body.trim());
    if headline.is_empty() || body.is_empty() {
        return Err(Error::EmptyName { line });
    }
    Ok(Some(Record::Pairing { headline, body }))
}

/// Parses a pair list from text.
///
/// Fails on the first malformed line, on a font declared twice with different
/// URLs, and on any pairing naming a font that is never declared.
pub fn parse(text: &str) -> Result<PairList> {
    let mut fonts: IndexMap<String, FontSpec> = IndexMap::new();
    let mut pairings = Vec::new();

    for (index, raw) in text.lines().enumerate() {
        let line = index + 1;
        match parse_line(line, raw)? {
            None => {}
            Some(Record::Pairing { headline, body }) => pairings.push((line, headline, body)),
            Some(Record::Declaration { name, url }) => match fonts.get(name) {
                Some(existing) if existing.source_url != url => {
                    return Err(Error::ConflictingDeclaration { name: name.to_string(), line });
                }
                Some(_) => {}
                None => {
                    fonts.insert(
                        name.to_string(),
                        FontSpec { name: name.to_string(), source_url: url.to_string() },
                    );
                }
            },
        }
    }

    let resolve = |line: usize, name: &str| {
        fonts
            .get(name)
            .cloned()
            .ok_or_else(|| Error::UndeclaredFont { name: name.to_string(), line })
    };

    let pairs = pairings
        .into_iter()
        .map(|(line, headline, body)| {
            Ok(FontPair { headline: resolve(line, headline)?, body: resolve(line, body)? })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(PairList { pairs, fonts })
}

/// Reads and parses a pair list file.
pub fn load(path: &Path) -> Result<PairList> {
    let text =
        read_to_string(path).map_err(|source| Error::Io { path: path.to_path_buf(), source })?;
    parse(&text)
}
