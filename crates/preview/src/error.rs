//! Error types for preview rendering.

use std::{io, path::PathBuf, result};

use ab_glyph::InvalidFont;
use qrcode::types::QrError;

/// Errors that can occur while rendering previews.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read font '{name}' from {}: {source}", path.display())]
    FontRead {
        name: String,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("font '{name}' is not a usable TrueType/OpenType font: {source}")]
    FontLoad {
        name: String,
        #[source]
        source: InvalidFont,
    },

    #[error("text {text:?} does not fit the {width}x{height} canvas")]
    Overflow { text: String, width: u32, height: u32 },

    #[error("text {text:?} would overlap {other:?}")]
    Overlap { text: String, other: String },

    #[error("failed to encode QR code: {0}")]
    Qr(#[from] QrError),

    #[error("nothing to compose")]
    EmptyComposite,
}

pub type Result<T> = result::Result<T, Error>;
