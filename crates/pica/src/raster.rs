//! The rasterizer boundary
//!
//! Pica never touches font outlines itself. A [`Rasterizer`] backend
//! hands out [`RasterContext`]s (the pooled handle to whatever native
//! library state the backend keeps), contexts load sized
//! [`RasterFace`]s, and faces turn characters into 8-bit coverage
//! bitmaps plus the metrics the atlas and layout engine need.
//!
//! Implement these three traits and the whole engine runs on your
//! rasterizer; `pica-raster-fontdue` is the stock implementation.

use pica_core::Result;

/// Face-wide metrics, in integer pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaceMetrics {
    /// Line height: the vertical distance between baselines.
    pub glyph_height: i32,
    /// Nominal glyph width (the em width at this size).
    pub nominal_width: i32,
    /// Nominal glyph height (the em height at this size).
    pub nominal_height: i32,
    /// Descender below the baseline; negative for most faces.
    pub descender: i32,
}

/// One rasterized character: metrics plus an 8-bit coverage bitmap.
///
/// `coverage` holds `width * height` bytes, row-major, 0 = transparent
/// and 255 = fully covered. A whitespace character typically comes
/// back with a zero-sized bitmap and a positive advance.
#[derive(Debug, Clone)]
pub struct RasterizedGlyph {
    /// Horizontal advance, rounded up to whole pixels.
    pub advance_x: i32,
    /// Left side bearing.
    pub bearing_x: i32,
    /// Bitmap width in pixels.
    pub width: i32,
    /// Bitmap height in pixels.
    pub height: i32,
    /// Left edge of the control box relative to the pen.
    pub cbox_left: i32,
    /// Top edge of the control box above the baseline.
    pub cbox_top: i32,
    /// 8bpp coverage, `width * height` bytes.
    pub coverage: Vec<u8>,
}

impl RasterizedGlyph {
    /// True when there is nothing to upload (spaces, control chars).
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// A rasterizer backend. Entry point for everything below.
pub trait Rasterizer: Send + Sync {
    /// Backend name, used for debugging and logging.
    fn name(&self) -> &'static str;

    /// Create one context. The registry pools these and serializes
    /// access, so a context does not need to be `Sync`.
    fn new_context(&self) -> Result<Box<dyn RasterContext>>;
}

/// The pooled handle to the backend's native library state.
pub trait RasterContext: Send {
    /// Parse font bytes and fix them at a pixel size.
    fn load_face(&self, data: &[u8], size: u32) -> Result<Box<dyn RasterFace>>;
}

/// A parsed font face at one fixed pixel size.
pub trait RasterFace: Send {
    fn metrics(&self) -> FaceMetrics;

    /// The face's family name, when the backend can read it.
    fn family_name(&self) -> Option<String> {
        None
    }

    /// The face-internal glyph index for a character. Used for
    /// kerning queries; 0 is the conventional missing-glyph index.
    fn glyph_index(&self, ch: char) -> u32;

    /// Rasterize one character at the face's size.
    fn rasterize(&self, ch: char) -> Result<RasterizedGlyph>;

    /// Horizontal kerning between two glyph indices, in pixels.
    /// Unmapped pairs return 0.
    fn kerning(&self, left: u32, right: u32) -> i32;
}
