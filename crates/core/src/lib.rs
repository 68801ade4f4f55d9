//! fontpair core: the load → fetch → render → compose pipeline.

pub mod config;
pub mod io;
pub mod pipeline;
pub mod verify;

pub use font_fetch::{FontCache, Fetcher, HttpTransport, Transport};
pub use font_preview::{GridLayout, Layout, Theme};
pub use pair_list::{FontPair, FontSpec, PairList};
pub use pipeline::{PipelineContext, RunSummary, clean, fetch_fonts, run};
pub use verify::{FontStatus, verify_fonts};
