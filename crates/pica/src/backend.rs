//! The texture and drawing boundary
//!
//! Atlas pages need textures to live on and sprites need something to
//! draw them; both come from the embedding application. The engine
//! only ever uploads rectangular regions of Bgra4444 pixels and emits
//! draw calls through [`SpriteSink`]; there is no GPU code here.

use std::sync::Arc;

use pica_core::{Color, Point, Rect, Result};

/// Which fixed atlas page size the platform can afford.
///
/// Squares of 2048 or 4096 texels; constrained targets (older GPUs,
/// GLES-class limits) take the smaller one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextureProfile {
    Constrained,
    #[default]
    Full,
}

impl TextureProfile {
    /// Side length of one atlas page in texels.
    pub const fn page_size(self) -> u32 {
        match self {
            TextureProfile::Constrained => 2048,
            TextureProfile::Full => 4096,
        }
    }
}

/// Horizontal / vertical mirroring applied at draw time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Flip {
    pub horizontal: bool,
    pub vertical: bool,
}

impl Flip {
    pub const NONE: Flip = Flip {
        horizontal: false,
        vertical: false,
    };

    pub fn any(&self) -> bool {
        self.horizontal || self.vertical
    }
}

/// Per-sprite draw parameters beyond position and color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpriteParams {
    pub rotation: f32,
    pub origin: Point,
    pub scale: Point,
    pub flip: Flip,
    pub depth: f32,
}

impl Default for SpriteParams {
    fn default() -> Self {
        Self {
            rotation: 0.0,
            origin: Point::ZERO,
            scale: Point::new(1.0, 1.0),
            flip: Flip::NONE,
            depth: 0.0,
        }
    }
}

/// Creates atlas page textures.
pub trait GraphicsBackend: Send + Sync {
    /// Allocate a texture that accepts Bgra4444 region uploads.
    fn create_texture(&self, width: u32, height: u32) -> Result<Arc<dyn AtlasTexture>>;
}

/// One texture owned by an atlas page.
pub trait AtlasTexture: Send + Sync {
    fn width(&self) -> u32;

    fn height(&self) -> u32;

    /// Upload a region of Bgra4444 pixels (one `u16` per texel,
    /// `rect.width * rect.height` entries, row-major).
    fn upload(&self, rect: Rect, pixels: &[u16]);
}

/// Receives the draw calls a string expands into.
///
/// The sprite-batch analogue: one call per visible glyph, in layout
/// order. `source` is the glyph's rectangle on `texture`.
pub trait SpriteSink {
    fn draw(
        &mut self,
        texture: &Arc<dyn AtlasTexture>,
        source: Rect,
        position: Point,
        color: Color,
        params: &SpriteParams,
    );
}
