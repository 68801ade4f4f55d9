//! fontpair CLI library.

pub mod cli;
