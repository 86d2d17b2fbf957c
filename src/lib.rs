//! Core entry point for the lab_manual crate.
//!
//! The manual is assembled in two stages.  [`assembler::build_manual`] lays the
//! lesson records out as a renderer-independent [`model::ManualDocument`];
//! [`pdf::PdfBuilder`] then turns that model into PDF bytes with `genpdf`.
//! [`assembler::create_lab_manual`] runs both and saves the result.

pub mod assembler;
pub mod blocks;
pub mod composer;
pub mod content;
pub mod elements;
pub mod error;
pub mod fonts;
pub mod model;
pub mod pdf;
pub mod persist;
pub mod richtext;
pub mod styles;

#[cfg(feature = "bookmarks")]
pub mod bookmarks;

pub use assembler::{build_manual, create_lab_manual, DEFAULT_OUTPUT_PATH};
pub use error::ManualError;
