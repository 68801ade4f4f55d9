//! Font pairing previews.
//!
//! [`render_preview`] draws one headline/body pair onto a fixed layout
//! (header, four content cards with button mockups, QR code footer) in a light
//! or dark [`Theme`]. [`compose`] lays a list of previews out on a single
//! comparison sheet.
//!
//! Rendering is pure: the only inputs are the pair, its loaded [`FontFace`]s,
//! the theme and a [`Layout`], so the same inputs always produce the same
//! pixels.

mod canvas;
mod compose;
mod error;
mod face;
mod layout;
mod pattern;
mod qr;
mod render;
mod theme;

pub use canvas::Canvas;
pub use compose::{GridGeometry, compose, grid_size};
pub use error::{Error, Result};
pub use face::{FontFace, TextExtent};
pub use layout::{
    ButtonLayout, CardContent, CardLayout, FooterLayout, GridLayout, HeaderLayout, Layout,
    PatternLayout, TypeScale,
};
pub use qr::qr_image;
pub use render::{PairFaces, RenderedPreview, render_preview};
pub use theme::{CardStyle, Color, DARK, LIGHT, Palette, Theme};

/// Text used to check that a font can actually rasterize glyphs.
pub const PROBE_TEXT: &str = "Test String";
