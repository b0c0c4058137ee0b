//! Atlas pages: rectangle packing for glyph bitmaps
//!
//! A page is one fixed-size square texture and a packing cursor.
//! Glyphs go in left-to-right along the current row; when a glyph
//! would run off the right edge the cursor wraps to a new row, and
//! when a new row would run off the bottom the page declares itself
//! full. Fullness is detected *before* committing any cursor movement
//! so a failed pack leaves the page exactly as it was; the font then
//! allocates a fresh page and retries once.
//!
//! Uploaded pixels are Bgra4444: the rasterizer's 8-bit coverage is
//! quantized to 4 bits and replicated into all four channels.

use std::sync::Arc;

use pica_core::{Rect, Result};

use crate::backend::{AtlasTexture, GraphicsBackend};
use crate::glyph::{Glyph, PageId};
use crate::raster::RasterFace;
use crate::settings::Settings;

/// One texture page and its packing state.
pub(crate) struct AtlasPage {
    id: PageId,
    texture: Arc<dyn AtlasTexture>,
    side: i32,
    current_x: i32,
    current_y: i32,
    full: bool,
    glyph_count: usize,
}

impl AtlasPage {
    pub(crate) fn new(backend: &dyn GraphicsBackend, side: u32, id: PageId) -> Result<Self> {
        log::debug!("allocating {side}x{side} atlas page {}", id.index());
        let texture = backend.create_texture(side, side)?;
        Ok(Self {
            id,
            texture,
            side: side as i32,
            current_x: 0,
            current_y: 0,
            full: false,
            glyph_count: 0,
        })
    }

    pub(crate) fn is_full(&self) -> bool {
        self.full
    }

    pub(crate) fn texture(&self) -> &Arc<dyn AtlasTexture> {
        &self.texture
    }

    /// Pack one character onto this page.
    ///
    /// Returns `Ok(None)` when the page is out of room, in which case
    /// it is marked full and otherwise untouched. Rasterizer failures
    /// propagate.
    pub(crate) fn try_pack(
        &mut self,
        ch: char,
        face: &dyn RasterFace,
        settings: &Settings,
        glyph_height: i32,
    ) -> Result<Option<Glyph>> {
        let raster = face.rasterize(ch)?;
        let metrics = face.metrics();
        let row_height = glyph_height + metrics.nominal_height;

        // Wrap speculatively; commit only if the glyph fits.
        let (x, y) = if self.current_x + raster.advance_x >= self.side {
            (0, self.current_y + row_height)
        } else {
            (self.current_x, self.current_y)
        };

        if y >= self.side - glyph_height {
            self.full = true;
            return Ok(None);
        }
        self.current_x = x;
        self.current_y = y;

        if !raster.is_empty() && ch != '\t' {
            let mut rect = Rect::new(
                x + raster.cbox_left,
                y + (metrics.nominal_height - raster.cbox_top),
                raster.width,
                raster.height,
            );

            // Historical baseline correction: everything in the basic
            // Latin range sits one pixel high, except underscore.
            if (ch as u32) < 255 && ch != '_' {
                rect.y += 1;
            }

            // Packing can push the rect past the page's left or top
            // edge (large negative bearings); pull it back in.
            if rect.x < 0 {
                rect.offset(-rect.x, 0);
            }
            if rect.y < 0 {
                rect.offset(0, -rect.y);
            }

            // Center a glyph narrower than its advance.
            if raster.advance_x != rect.width {
                rect.offset((rect.width - raster.advance_x).abs() / 2, 0);
            }

            self.texture.upload(rect, &expand_to_bgra4444(&raster.coverage));
        }

        let advance = if ch == '\t' {
            (metrics.nominal_width * settings.spaces_per_tab).abs()
        } else {
            raster.advance_x
        };

        let glyph = Glyph {
            character: ch,
            advance_x: raster.advance_x,
            advance_y: metrics.nominal_height,
            bearing_x: raster.bearing_x,
            descender: metrics.descender,
            bounds: Rect::new(x, y, advance, row_height),
            index: face.glyph_index(ch),
            slot: self.glyph_count,
            page: self.id,
        };

        self.glyph_count += 1;
        self.current_x = x + advance + metrics.nominal_width;
        Ok(Some(glyph))
    }
}

/// Quantize 8-bit coverage to Bgra4444, the value replicated into all
/// four channels.
fn expand_to_bgra4444(coverage: &[u8]) -> Vec<u16> {
    coverage
        .iter()
        .map(|&v| {
            let c = (v >> 4) as u16;
            c | (c << 4) | (c << 8) | (c << 12)
        })
        .collect()
}
