//! The finished layout
//!
//! [`Text`] is what the layout engine produces: the source string, an
//! ordered list of positioned glyphs, and the overall size. Copies
//! handed out by the font share glyph data but own their position
//! list and their transform cache, so one caller's cached transforms
//! never leak into another's.
//!
//! Drawing with a non-trivial transform builds a single 2x3 affine
//! (flip mirroring folded into origin and scale, rotation skipped
//! entirely when it is within float tolerance of zero or a full turn)
//! and memoizes the per-glyph screen positions in a small FIFO cache
//! keyed by the exact bits of the transform parameters.

use pica_core::{nearly_equal, BoundedCache, Color, Point, Size, TWO_PI};

use crate::backend::{Flip, SpriteParams, SpriteSink};
use crate::font::Font;
use crate::glyph::Glyph;

/// One glyph at its pen position, with an optional markup color.
#[derive(Debug, Clone)]
pub struct PositionedGlyph {
    pub glyph: Glyph,
    pub position: Point,
    /// Set while a markup color span is active; `None` means the draw
    /// call's color applies.
    pub color: Option<Color>,
}

/// Position, rotation, origin, scale, mirroring, and depth for one
/// draw call. Identity by default.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawTransform {
    pub position: Point,
    pub rotation: f32,
    pub origin: Point,
    pub scale: Point,
    pub flip: Flip,
    pub depth: f32,
}

impl Default for DrawTransform {
    fn default() -> Self {
        Self {
            position: Point::ZERO,
            rotation: 0.0,
            origin: Point::ZERO,
            scale: Point::new(1.0, 1.0),
            flip: Flip::NONE,
            depth: 0.0,
        }
    }
}

impl DrawTransform {
    /// True when the rotation is, within tolerance, zero or a whole
    /// turn; such rotations take the trig-free path.
    fn rotation_is_trivial(&self) -> bool {
        nearly_equal(self.rotation, 0.0) || nearly_equal(self.rotation / TWO_PI, 1.0)
    }

    /// The fast path: nothing to do but translate.
    fn is_plain_translation(&self) -> bool {
        self.rotation_is_trivial()
            && !self.flip.any()
            && self.scale == Point::new(1.0, 1.0)
            && self.origin == Point::ZERO
    }

    /// Per-glyph sprite parameters. Positions are pre-transformed,
    /// so the origin shift is already applied and the sink gets a
    /// zero origin.
    fn sprite_params(&self) -> SpriteParams {
        SpriteParams {
            rotation: self.rotation,
            origin: Point::ZERO,
            scale: self.scale,
            flip: self.flip,
            depth: self.depth,
        }
    }

    fn key(&self) -> TransformKey {
        TransformKey {
            position: (self.position.x.to_bits(), self.position.y.to_bits()),
            rotation: self.rotation.to_bits(),
            origin: (self.origin.x.to_bits(), self.origin.y.to_bits()),
            scale: (self.scale.x.to_bits(), self.scale.y.to_bits()),
            flip: self.flip,
        }
    }
}

/// Cache key for transformed positions. Floats are compared by exact
/// bit pattern: keys are caller-supplied, never recomputed, so bit
/// equality is the only comparison that keeps FIFO eviction
/// deterministic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct TransformKey {
    position: (u32, u32),
    rotation: u32,
    origin: (u32, u32),
    scale: (u32, u32),
    flip: Flip,
}

/// A 2x3 affine in the row-vector convention.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Affine2 {
    m11: f32,
    m12: f32,
    m21: f32,
    m22: f32,
    m41: f32,
    m42: f32,
}

impl Affine2 {
    pub(crate) fn apply(&self, p: Point) -> Point {
        Point::new(
            p.x * self.m11 + p.y * self.m21 + self.m41,
            p.x * self.m12 + p.y * self.m22 + self.m42,
        )
    }
}

/// Build the combined flip/rotation/scale/translation transform for a
/// block of text with the given glyph height and measured size.
pub(crate) fn compute_transform(
    transform: &DrawTransform,
    glyph_height: i32,
    size: Size,
) -> Affine2 {
    let mut origin = transform.origin;
    let mut adjust = Point::ZERO;

    // Mirrored text keeps its footprint: negate the origin on the
    // mirrored axis and shift by the text's extent.
    if transform.flip.horizontal {
        origin.x *= -1.0;
        adjust.x -= size.width;
    }
    if transform.flip.vertical {
        origin.y *= -1.0;
        adjust.y = glyph_height as f32 - size.height;
    }

    let x_scale = if transform.flip.horizontal {
        -transform.scale.x
    } else {
        transform.scale.x
    };
    let y_scale = if transform.flip.vertical {
        -transform.scale.y
    } else {
        transform.scale.y
    };
    let x_origin = adjust.x - origin.x;
    let y_origin = adjust.y - origin.y;

    if transform.rotation_is_trivial() {
        Affine2 {
            m11: x_scale,
            m12: 0.0,
            m21: 0.0,
            m22: y_scale,
            m41: x_origin * x_scale + transform.position.x,
            m42: y_origin * y_scale + transform.position.y,
        }
    } else {
        let cos = transform.rotation.cos();
        let sin = transform.rotation.sin();
        let m11 = x_scale * cos;
        let m12 = x_scale * sin;
        let m21 = y_scale * -sin;
        let m22 = y_scale * cos;
        Affine2 {
            m11,
            m12,
            m21,
            m22,
            m41: (x_origin * m11 + y_origin * m21) + transform.position.x,
            m42: (x_origin * m12 + y_origin * m22) + transform.position.y,
        }
    }
}

/// A laid-out string, ready to draw.
#[derive(Debug)]
pub struct Text {
    string: String,
    glyph_height: i32,
    glyphs: Vec<PositionedGlyph>,
    size: Size,
    transforms: BoundedCache<TransformKey, Vec<Point>>,
}

impl Text {
    pub(crate) fn new(
        string: &str,
        glyph_height: i32,
        glyphs: Vec<PositionedGlyph>,
        size: Size,
        transform_cache_capacity: usize,
    ) -> Self {
        Self {
            string: string.to_string(),
            glyph_height,
            glyphs,
            size,
            transforms: BoundedCache::new(transform_cache_capacity),
        }
    }

    /// The string this layout renders.
    pub fn string(&self) -> &str {
        &self.string
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn width(&self) -> f32 {
        self.size.width
    }

    pub fn height(&self) -> f32 {
        self.size.height
    }

    pub fn width_int(&self) -> i32 {
        self.size.width_int()
    }

    pub fn height_int(&self) -> i32 {
        self.size.height_int()
    }

    /// The positioned glyphs, in layout order.
    pub fn glyphs(&self) -> &[PositionedGlyph] {
        &self.glyphs
    }

    /// Resize this text's transform cache (0 disables it).
    pub fn set_transform_cache_capacity(&mut self, capacity: usize) {
        self.transforms.resize(capacity);
    }

    pub fn transform_cache_len(&self) -> usize {
        self.transforms.len()
    }

    /// Draw at a position, untransformed. Markup colors override
    /// `color` where present.
    pub fn draw(&self, sink: &mut dyn SpriteSink, font: &Font, position: Point, color: Color) {
        let params = SpriteParams::default();
        for pg in &self.glyphs {
            sink.draw(
                font.page_texture(pg.glyph.page),
                pg.glyph.bounds,
                position + pg.position,
                pg.color.unwrap_or(color),
                &params,
            );
        }
    }

    /// Draw with rotation, origin, scale and mirroring. Per-glyph
    /// screen positions are memoized per distinct transform.
    pub fn draw_transformed(
        &mut self,
        sink: &mut dyn SpriteSink,
        font: &Font,
        color: Color,
        transform: &DrawTransform,
    ) {
        let params = transform.sprite_params();

        // Plain translations are cheaper to recompute than to cache.
        if transform.is_plain_translation() {
            for pg in &self.glyphs {
                sink.draw(
                    font.page_texture(pg.glyph.page),
                    pg.glyph.bounds,
                    transform.position + pg.position,
                    pg.color.unwrap_or(color),
                    &params,
                );
            }
            return;
        }

        let key = transform.key();
        if !self.transforms.contains(&key) {
            let affine = compute_transform(transform, self.glyph_height, self.size);
            let positions: Vec<Point> = self
                .glyphs
                .iter()
                .map(|pg| affine.apply(pg.position))
                .collect();
            self.transforms.insert(key, positions);
        }

        let positions = match self.transforms.get(&key) {
            Some(positions) => positions,
            // Capacity 0: the insert above was a no-op.
            None => {
                let affine = compute_transform(transform, self.glyph_height, self.size);
                for pg in &self.glyphs {
                    sink.draw(
                        font.page_texture(pg.glyph.page),
                        pg.glyph.bounds,
                        affine.apply(pg.position),
                        pg.color.unwrap_or(color),
                        &params,
                    );
                }
                return;
            }
        };

        for (pg, position) in self.glyphs.iter().zip(positions) {
            sink.draw(
                font.page_texture(pg.glyph.page),
                pg.glyph.bounds,
                *position,
                pg.color.unwrap_or(color),
                &params,
            );
        }
    }
}

impl Clone for Text {
    /// Copies share glyph data but start with an empty transform
    /// cache of the same capacity, so cached transforms never cross
    /// between copies.
    fn clone(&self) -> Self {
        Self {
            string: self.string.clone(),
            glyph_height: self.glyph_height,
            glyphs: self.glyphs.clone(),
            size: self.size,
            transforms: BoundedCache::new(self.transforms.capacity()),
        }
    }
}
