// this_file: crates/pica/src/font.rs
//! A typeface at one pixel size
//!
//! [`Font`] is where everything meets: it owns the rasterized face,
//! the atlas pages its glyphs live on, the per-character glyph table,
//! a kerning table filled one pair at a time, and a bounded cache of
//! finished layouts. All state is per-font; two fonts never share
//! pages or caches.
//!
//! The layout walk itself lives in [`Font::layout`] and is shared by
//! [`Font::make_text`] (which materializes positions) and
//! [`Font::measure`] (which only tracks the pen). The immediate-mode
//! draw paths re-run the same pen rules against a sink directly,
//! wrapping inside a bounding rectangle instead of at `\n` alone.

use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use pica_core::{markup, BoundedCache, Color, PicaError, Point, Rect, Result, Size};

use crate::atlas::AtlasPage;
use crate::backend::{AtlasTexture, GraphicsBackend, SpriteParams, SpriteSink};
use crate::glyph::{Glyph, PageId};
use crate::raster::RasterFace;
use crate::settings::Settings;
use crate::text::{compute_transform, DrawTransform, PositionedGlyph, Text};

/// Layout cache key: the same string laid out with and without markup
/// produces different glyph runs, so the flag is part of the key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct LayoutKey {
    text: String,
    markup: bool,
}

/// One typeface at one pixel size, with its atlas and caches.
pub struct Font {
    typeface: String,
    family: String,
    size: u32,
    face: Box<dyn RasterFace>,
    glyph_height: i32,
    pages: Vec<AtlasPage>,
    glyphs: HashMap<char, Glyph>,
    kerning: HashMap<(char, char), i32>,
    layouts: BoundedCache<LayoutKey, Text>,
    settings: Settings,
    backend: Arc<dyn GraphicsBackend>,
}

impl Font {
    pub(crate) fn new(
        typeface: &str,
        size: u32,
        face: Box<dyn RasterFace>,
        backend: Arc<dyn GraphicsBackend>,
        settings: Settings,
    ) -> Self {
        let family = face
            .family_name()
            .unwrap_or_else(|| typeface.to_string());
        let glyph_height = face.metrics().glyph_height;
        log::debug!("font ready: family {family:?}, size {size}, line height {glyph_height}");
        Self {
            typeface: typeface.to_string(),
            family,
            size,
            face,
            glyph_height,
            pages: Vec::new(),
            glyphs: HashMap::new(),
            kerning: HashMap::new(),
            layouts: BoundedCache::new(settings.layout_cache_capacity),
            settings,
            backend,
        }
    }

    /// The typeface name this font was created under.
    pub fn typeface(&self) -> &str {
        &self.typeface
    }

    /// The family name the rasterizer reported, falling back to the
    /// typeface name.
    pub fn family(&self) -> &str {
        &self.family
    }

    /// Pixel size.
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Line height: the vertical distance between baselines.
    pub fn glyph_height(&self) -> i32 {
        self.glyph_height
    }

    /// Number of atlas pages allocated so far.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub(crate) fn page_texture(&self, page: PageId) -> &Arc<dyn AtlasTexture> {
        self.pages[page.index()].texture()
    }

    /// Look up a glyph, rasterizing and packing it on first use.
    ///
    /// Packing prefers the first page with room; when no page fits, a
    /// fresh page is allocated and packing retried once. A character
    /// that cannot fit on an empty page is an error.
    pub fn glyph(&mut self, ch: char) -> Result<Glyph> {
        if let Some(glyph) = self.glyphs.get(&ch) {
            return Ok(glyph.clone());
        }
        let glyph = self.generate_glyph(ch)?;
        self.glyphs.insert(ch, glyph.clone());
        Ok(glyph)
    }

    fn generate_glyph(&mut self, ch: char) -> Result<Glyph> {
        let index = match self.pages.iter().position(|page| !page.is_full()) {
            Some(index) => index,
            None => self.new_page()?,
        };
        if let Some(glyph) =
            self.pages[index].try_pack(ch, self.face.as_ref(), &self.settings, self.glyph_height)?
        {
            return Ok(glyph);
        }

        let index = self.new_page()?;
        match self.pages[index].try_pack(ch, self.face.as_ref(), &self.settings, self.glyph_height)?
        {
            Some(glyph) => Ok(glyph),
            None => Err(PicaError::GlyphTooLarge(ch)),
        }
    }

    fn new_page(&mut self) -> Result<usize> {
        let id = PageId(self.pages.len());
        let side = self.settings.texture_profile.page_size();
        self.pages
            .push(AtlasPage::new(self.backend.as_ref(), side, id)?);
        Ok(id.index())
    }

    /// Kerning between two glyphs, computed once per character pair.
    fn pair_kerning(&mut self, left: &Glyph, right: &Glyph) -> i32 {
        let key = (left.character, right.character);
        if let Some(&kern) = self.kerning.get(&key) {
            return kern;
        }
        let kern = self.face.kerning(left.index, right.index);
        self.kerning.insert(key, kern);
        kern
    }

    /// Kerning clamped by the sanity multiplier: pairs the rasterizer
    /// reports as wider than `advance * multiplier` are discarded.
    fn sane_kerning(&mut self, left: &Glyph, right: &Glyph) -> i32 {
        let kern = self.pair_kerning(left, right);
        let limit = left.advance_x * self.settings.kerning_sanity_multiplier;
        if kern >= -limit && kern <= limit {
            kern
        } else {
            log::trace!(
                "discarding kerning {kern} for pair {:?}{:?} (limit {limit})",
                left.character,
                right.character
            );
            0
        }
    }

    /// Lay out a string into a reusable [`Text`].
    ///
    /// Layouts are cached per (string, markup flag); a hit hands back
    /// a fresh copy with its own transform cache. Nothing is cached
    /// when layout fails.
    pub fn make_text(&mut self, text: &str, apply_markup: bool) -> Result<Text> {
        let key = LayoutKey {
            text: text.to_string(),
            markup: apply_markup,
        };
        if let Some(cached) = self.layouts.get(&key) {
            return Ok(cached.clone());
        }

        let (glyphs, size) = self.layout(text, apply_markup, true)?;
        let laid = Text::new(
            text,
            self.glyph_height,
            glyphs,
            size,
            self.settings.transform_cache_capacity,
        );
        let copy = laid.clone();
        self.layouts.insert(key, laid);
        Ok(copy)
    }

    /// Measure a string without materializing glyph positions. Markup
    /// tags are always consumed, never measured.
    pub fn measure(&mut self, text: &str) -> Result<Size> {
        let (_, size) = self.layout(text, true, false)?;
        Ok(size)
    }

    /// The layout walk. With `collect` false only the pen and size
    /// are tracked.
    fn layout(
        &mut self,
        text: &str,
        apply_markup: bool,
        collect: bool,
    ) -> Result<(Vec<PositionedGlyph>, Size)> {
        let chars: Vec<char> = text.chars().collect();
        let last = chars.len().saturating_sub(1);

        let mut glyphs = Vec::new();
        let mut pen_x: i32 = 0;
        let mut pen_y: i32 = 0;
        let mut underrun: i32 = 0;
        let mut width: f32 = 0.0;
        let mut height: f32 = 0.0;
        let mut current: Option<Color> = None;

        let mut i = 0;
        while i < chars.len() {
            let ch = chars[i];
            let glyph = self.glyph(ch)?;

            // The first glyph seeds the height with its own cell.
            if i == 0 {
                height += glyph.bounds.height as f32;
            }

            if ch == '\n' {
                if pen_x as f32 > width {
                    width = pen_x as f32;
                }
                pen_x = 0;
                underrun = 0;
                pen_y += glyph.advance_y;
                // A trailing newline adds no empty line below.
                if i != last {
                    height += glyph.advance_y as f32;
                }
            }
            if ch == '\r' || ch == '\n' {
                i += 1;
                continue;
            }

            if apply_markup && ch == '[' {
                let span = markup::parse_tag(&chars, i)?;
                current = span.color;
                i = span.end + 1;
                continue;
            }

            // Glyphs with a negative left bearing pull the start of a
            // line right so nothing renders left of the pen origin.
            underrun += -glyph.bearing_x;
            if pen_x == 0 {
                pen_x += underrun;
            }
            if underrun <= 0 {
                underrun = 0;
            }

            if collect {
                glyphs.push(PositionedGlyph {
                    position: Point::new(pen_x as f32, pen_y as f32),
                    color: current,
                    glyph: glyph.clone(),
                });
            }

            pen_x += glyph.bounds.width;
            if i != last {
                let next = self.glyph(chars[i + 1])?;
                pen_x += self.sane_kerning(&glyph, &next);
            } else if pen_x as f32 > width {
                width = pen_x as f32;
            }
            i += 1;
        }

        Ok((glyphs, Size::new(width, height)))
    }

    /// Draw a string at a position, unbounded.
    pub fn draw(
        &mut self,
        sink: &mut dyn SpriteSink,
        text: &str,
        color: Color,
        position: Point,
        apply_markup: bool,
    ) -> Result<()> {
        let bounds = Rect::new(
            pica_core::round_to_int(position.x),
            pica_core::round_to_int(position.y),
            0,
            0,
        );
        self.draw_wrapped(sink, text, color, bounds, apply_markup)
    }

    /// Draw a string inside a bounding rectangle, without building a
    /// [`Text`].
    ///
    /// The pen wraps to the next line when a glyph would cross the
    /// bounds width, and drawing stops once the pen passes the bounds
    /// height. A zero (or negative) width disables wrapping; a zero
    /// height disables the cutoff.
    pub fn draw_wrapped(
        &mut self,
        sink: &mut dyn SpriteSink,
        text: &str,
        color: Color,
        bounds: Rect,
        apply_markup: bool,
    ) -> Result<()> {
        let params = SpriteParams::default();
        self.draw_walk(sink, text, color, bounds, &params, None, apply_markup)
    }

    /// Draw a string inside a bounding rectangle with rotation, origin,
    /// scale and mirroring, without building a [`Text`]. Unlike
    /// [`Text::draw_transformed`] nothing is cached.
    pub fn draw_transformed(
        &mut self,
        sink: &mut dyn SpriteSink,
        text: &str,
        color: Color,
        bounds: Rect,
        params: &SpriteParams,
        apply_markup: bool,
    ) -> Result<()> {
        // Mirroring needs the measured extent to keep the footprint.
        let size = if params.flip.any() {
            let (_, size) = self.layout(text, apply_markup, false)?;
            size
        } else {
            Size::default()
        };
        let transform = DrawTransform {
            position: Point::new(bounds.x as f32, bounds.y as f32),
            rotation: params.rotation,
            origin: params.origin,
            scale: params.scale,
            flip: params.flip,
            depth: params.depth,
        };
        let affine = compute_transform(&transform, self.glyph_height, size);
        // Pen positions are pre-transformed, so the origin shift is
        // already applied; the sink draws each glyph in place.
        let glyph_params = SpriteParams {
            origin: Point::ZERO,
            ..*params
        };
        self.draw_walk(
            sink,
            text,
            color,
            Rect::new(0, 0, bounds.width, bounds.height),
            &glyph_params,
            Some(&affine),
            apply_markup,
        )
    }

    /// The immediate-mode pen walk shared by the draw entry points.
    fn draw_walk(
        &mut self,
        sink: &mut dyn SpriteSink,
        text: &str,
        color: Color,
        bounds: Rect,
        params: &SpriteParams,
        affine: Option<&crate::text::Affine2>,
        apply_markup: bool,
    ) -> Result<()> {
        let chars: Vec<char> = text.chars().collect();
        let wrap_width = if bounds.width > 0 {
            bounds.width
        } else {
            i32::MAX
        };
        let height_limit = if bounds.height > 0 {
            bounds.height
        } else {
            i32::MAX
        };

        let mut offset_x: i32 = 0;
        let mut offset_y: i32 = 0;
        let mut underrun: i32 = 0;
        let mut current = color;

        let mut i = 0;
        while i < chars.len() {
            let ch = chars[i];
            let glyph = self.glyph(ch)?;

            if ch == '\n' || (bounds.width > 0 && offset_x + glyph.bounds.width > wrap_width) {
                offset_x = 0;
                underrun = 0;
                offset_y += glyph.advance_y;
            }
            if ch == '\r' || ch == '\n' {
                i += 1;
                continue;
            }
            if offset_y > height_limit {
                return Ok(());
            }

            if apply_markup && ch == '[' {
                let span = markup::parse_tag(&chars, i)?;
                current = span.color.unwrap_or(color);
                i = span.end + 1;
                continue;
            }

            underrun += -glyph.bearing_x;
            if offset_x == 0 {
                offset_x += underrun;
            }
            if underrun <= 0 {
                underrun = 0;
            }

            let pen = Point::new(offset_x as f32, offset_y as f32);
            let position = match affine {
                Some(affine) => affine.apply(pen),
                None => Point::new((bounds.x + offset_x) as f32, (bounds.y + offset_y) as f32),
            };
            sink.draw(
                self.page_texture(glyph.page),
                glyph.bounds,
                position,
                current,
                params,
            );

            offset_x += glyph.bounds.width;
            if i + 1 < chars.len() {
                let next = self.glyph(chars[i + 1])?;
                offset_x += self.sane_kerning(&glyph, &next);
            }
            i += 1;
        }
        Ok(())
    }

    /// Rasterize and pack every character in `characters` up front.
    pub fn pregenerate(&mut self, characters: &str) -> Result<()> {
        for ch in characters.chars() {
            self.glyph(ch)?;
        }
        log::debug!(
            "pregenerated {} glyphs for {self} across {} pages",
            self.glyphs.len(),
            self.pages.len()
        );
        Ok(())
    }

    /// Resize the layout cache (0 disables it). Shrinking evicts the
    /// oldest layouts first.
    pub fn resize_layout_cache(&mut self, capacity: usize) {
        self.layouts.resize(capacity);
    }

    /// Number of cached layouts.
    pub fn layout_cache_len(&self) -> usize {
        self.layouts.len()
    }
}

impl PartialEq for Font {
    fn eq(&self, other: &Self) -> bool {
        self.family == other.family && self.size == other.size
    }
}

impl Eq for Font {}

impl Hash for Font {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.family.hash(state);
        self.size.hash(state);
    }
}

impl fmt::Display for Font {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "font: [{}], size: [{}]", self.family, self.size)
    }
}

impl fmt::Debug for Font {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Font")
            .field("typeface", &self.typeface)
            .field("family", &self.family)
            .field("size", &self.size)
            .field("pages", &self.pages.len())
            .field("glyphs", &self.glyphs.len())
            .finish()
    }
}
