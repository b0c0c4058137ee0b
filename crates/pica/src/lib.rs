// this_file: crates/pica/src/lib.rs
//! # pica
//!
//! A glyph-atlas text engine for real-time renderers. Pica rasterizes
//! characters on demand through a pluggable [`Rasterizer`], packs
//! their coverage onto shared texture pages, lays strings out with
//! kerning, line breaks, and inline color markup, and hands your
//! sprite batcher ready-to-draw quads.
//!
//! The shape of an application:
//!
//! 1. Implement [`GraphicsBackend`] / [`AtlasTexture`] / [`SpriteSink`]
//!    over your renderer (or use an existing binding).
//! 2. Create one [`FontRegistry`] with a rasterizer backend such as
//!    `pica-raster-fontdue`.
//! 3. Ask it for a [`Font`] by typeface name, bytes, and pixel size.
//! 4. Lay out with [`Font::make_text`] and draw the resulting
//!    [`Text`] every frame, or draw strings immediately with
//!    [`Font::draw_wrapped`].
//!
//! Layouts, glyphs, kerning pairs, and draw transforms are all cached
//! per font or per text, each behind its own bounded FIFO, so steady-
//! state frames do no rasterization at all.

mod atlas;
pub mod backend;
mod font;
mod glyph;
pub mod raster;
mod registry;
mod settings;
mod text;
mod typeface;

pub use backend::{
    AtlasTexture, Flip, GraphicsBackend, SpriteParams, SpriteSink, TextureProfile,
};
pub use font::Font;
pub use glyph::{Glyph, PageId};
pub use pica_core::{
    BoundedCache, Color, MarkupError, PicaError, Point, RasterError, Rect, Result, Size,
};
pub use raster::{FaceMetrics, RasterContext, RasterFace, Rasterizer, RasterizedGlyph};
pub use registry::FontRegistry;
pub use settings::{Settings, DEFAULT_CHARACTERS};
pub use text::{DrawTransform, PositionedGlyph, Text};
pub use typeface::Typeface;
