//! The glyph record
//!
//! One rasterized character under one font instance: its metrics and
//! where its pixels ended up on an atlas page. Immutable once the
//! atlas hands it out, and cheap to clone into layouts.

use std::fmt;

use pica_core::Rect;

/// Non-owning reference to an atlas page: an index into the owning
/// font's page list. Page lifetime belongs to the font alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageId(pub(crate) usize);

impl PageId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Metrics and atlas location for one rasterized character.
#[derive(Debug, Clone)]
pub struct Glyph {
    /// The source character.
    pub character: char,
    /// Horizontal advance as the rasterizer reported it. Tab override
    /// lands in `bounds.width`, not here, so the kerning sanity clamp
    /// keeps using the true advance.
    pub advance_x: i32,
    /// Vertical advance: one line height step for `\n`.
    pub advance_y: i32,
    /// Left side bearing; negative values pull the glyph left.
    pub bearing_x: i32,
    /// Face descender below the baseline.
    pub descender: i32,
    /// The glyph's cell on its page texture. `width` is the advance
    /// the pen moves by (including the tab override).
    pub bounds: Rect,
    /// The rasterizer's glyph index, used for kerning queries.
    pub index: u32,
    /// Position of this glyph within its page, in insertion order.
    pub slot: usize,
    /// The page holding the pixels.
    pub page: PageId,
}

impl Glyph {
    /// Bearing plus cell width: how far right of the pen the glyph
    /// reaches.
    pub fn bearing_with_width(&self) -> i32 {
        self.bearing_x + self.bounds.width
    }
}

impl fmt::Display for Glyph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "char: {:?}; x: {}; y: {}; width: {}, height: {}",
            self.character, self.bounds.x, self.bounds.y, self.bounds.width, self.bounds.height
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_cell() {
        let glyph = Glyph {
            character: 'g',
            advance_x: 10,
            advance_y: 16,
            bearing_x: -1,
            descender: -4,
            bounds: Rect::new(20, 0, 10, 20),
            index: 71,
            slot: 2,
            page: PageId(0),
        };
        assert_eq!(
            glyph.to_string(),
            "char: 'g'; x: 20; y: 0; width: 10, height: 20"
        );
        assert_eq!(glyph.bearing_with_width(), 9);
    }
}
