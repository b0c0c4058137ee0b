//! Error types for Pica
//!
//! The taxonomy separates configuration errors (a glyph that cannot
//! fit an empty atlas page, a bad markup tag) from rasterizer
//! failures. Both are fatal to the operation that raised them; layout
//! either fully succeeds or fails without leaving a cache entry
//! behind. Atlas-page-full is not here at all: it is handled
//! internally by allocating a fresh page and retrying once.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, PicaError>;

/// Main error type for Pica
#[derive(Debug, Error)]
pub enum PicaError {
    /// The glyph does not fit even on a brand-new page, which means
    /// the configured atlas size is wrong for this font.
    #[error("glyph '{0}' cannot be packed into an empty atlas page")]
    GlyphTooLarge(char),

    #[error("markup error: {0}")]
    Markup(#[from] MarkupError),

    #[error("rasterizer error: {0}")]
    Raster(#[from] RasterError),
}

/// Inline color-tag parse errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MarkupError {
    #[error("markup tag [{0}] has no key/value pair")]
    MalformedTag(String),

    #[error("unknown markup key: {0}")]
    UnknownKey(String),

    #[error("unknown color name: {0}")]
    UnknownColor(String),
}

/// Failures reported by a rasterizer backend
#[derive(Debug, Error)]
pub enum RasterError {
    #[error("font data could not be parsed: {0}")]
    InvalidFontData(String),

    #[error("rasterization failed for '{0}': {1}")]
    RasterFailed(char, String),

    #[error("rasterizer backend error: {0}")]
    Backend(String),
}
