//! Shared test doubles: a scriptable rasterizer, a recording graphics
//! backend, and a recording sprite sink.

// Each test binary uses a different subset of these helpers.
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use pica::raster::{FaceMetrics, RasterContext, RasterFace, Rasterizer, RasterizedGlyph};
use pica::{
    AtlasTexture, Color, FontRegistry, GraphicsBackend, Point, Rect, Result, Settings,
    SpriteParams, SpriteSink,
};

/// Everything the fake face needs to answer metric and raster
/// queries. Glyph indices are the character's code point, so kerning
/// pairs are scripted by character.
#[derive(Clone)]
pub struct FaceSpec {
    pub metrics: FaceMetrics,
    pub family: Option<String>,
    /// Advance for every glyph.
    pub advance: i32,
    /// Bitmap size for every visible glyph.
    pub bitmap_width: i32,
    pub bitmap_height: i32,
    /// Per-character left side bearing; zero when absent.
    pub bearings: HashMap<char, i32>,
    pub kerning: HashMap<(char, char), i32>,
    /// Counts every kerning query the engine makes, shared across the
    /// contexts and faces cloned from this spec.
    pub kerning_queries: Arc<AtomicUsize>,
}

impl Default for FaceSpec {
    fn default() -> Self {
        Self {
            metrics: FaceMetrics {
                glyph_height: 16,
                nominal_width: 10,
                nominal_height: 12,
                descender: -4,
            },
            family: Some("Fake Sans".to_string()),
            advance: 8,
            bitmap_width: 6,
            bitmap_height: 8,
            bearings: HashMap::new(),
            kerning: HashMap::new(),
            kerning_queries: Arc::new(AtomicUsize::new(0)),
        }
    }
}

pub struct FakeRasterizer {
    pub spec: FaceSpec,
}

impl Rasterizer for FakeRasterizer {
    fn name(&self) -> &'static str {
        "fake"
    }

    fn new_context(&self) -> Result<Box<dyn RasterContext>> {
        Ok(Box::new(FakeContext {
            spec: self.spec.clone(),
        }))
    }
}

struct FakeContext {
    spec: FaceSpec,
}

impl RasterContext for FakeContext {
    fn load_face(&self, _data: &[u8], _size: u32) -> Result<Box<dyn RasterFace>> {
        Ok(Box::new(FakeFace {
            spec: self.spec.clone(),
        }))
    }
}

struct FakeFace {
    spec: FaceSpec,
}

impl RasterFace for FakeFace {
    fn metrics(&self) -> FaceMetrics {
        self.spec.metrics
    }

    fn family_name(&self) -> Option<String> {
        self.spec.family.clone()
    }

    fn glyph_index(&self, ch: char) -> u32 {
        ch as u32
    }

    fn rasterize(&self, ch: char) -> Result<RasterizedGlyph> {
        let bearing = self.spec.bearings.get(&ch).copied().unwrap_or(0);
        if ch.is_whitespace() || ch.is_control() {
            return Ok(RasterizedGlyph {
                advance_x: self.spec.advance,
                bearing_x: 0,
                width: 0,
                height: 0,
                cbox_left: 0,
                cbox_top: 0,
                coverage: Vec::new(),
            });
        }
        let width = self.spec.bitmap_width;
        let height = self.spec.bitmap_height;
        Ok(RasterizedGlyph {
            advance_x: self.spec.advance,
            bearing_x: bearing,
            width,
            height,
            cbox_left: bearing,
            cbox_top: height,
            coverage: vec![0xFF; (width * height) as usize],
        })
    }

    fn kerning(&self, left: u32, right: u32) -> i32 {
        self.spec.kerning_queries.fetch_add(1, Ordering::Relaxed);
        match (char::from_u32(left), char::from_u32(right)) {
            (Some(l), Some(r)) => self.spec.kerning.get(&(l, r)).copied().unwrap_or(0),
            _ => 0,
        }
    }
}

/// Records every upload so tests can check where pixels went.
pub struct FakeTexture {
    width: u32,
    height: u32,
    pub uploads: Mutex<Vec<Rect>>,
}

impl AtlasTexture for FakeTexture {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn upload(&self, rect: Rect, pixels: &[u16]) {
        assert_eq!(
            pixels.len(),
            (rect.width * rect.height) as usize,
            "upload buffer must match its rectangle"
        );
        self.uploads.lock().unwrap().push(rect);
    }
}

/// Hands out [`FakeTexture`]s and keeps them for inspection.
#[derive(Default)]
pub struct FakeBackend {
    pub textures: Mutex<Vec<Arc<FakeTexture>>>,
}

impl GraphicsBackend for FakeBackend {
    fn create_texture(&self, width: u32, height: u32) -> Result<Arc<dyn AtlasTexture>> {
        let texture = Arc::new(FakeTexture {
            width,
            height,
            uploads: Mutex::new(Vec::new()),
        });
        self.textures.lock().unwrap().push(Arc::clone(&texture));
        Ok(texture)
    }
}

/// One recorded draw call.
pub struct DrawCall {
    pub source: Rect,
    pub position: Point,
    pub color: Color,
    pub params: SpriteParams,
}

#[derive(Default)]
pub struct RecordingSink {
    pub calls: Vec<DrawCall>,
}

impl RecordingSink {
    pub fn positions(&self) -> Vec<Point> {
        self.calls.iter().map(|call| call.position).collect()
    }
}

impl SpriteSink for RecordingSink {
    fn draw(
        &mut self,
        _texture: &Arc<dyn AtlasTexture>,
        source: Rect,
        position: Point,
        color: Color,
        params: &SpriteParams,
    ) {
        self.calls.push(DrawCall {
            source,
            position,
            color,
            params: *params,
        });
    }
}

/// A registry over the fakes, plus the backend handle for inspecting
/// textures.
pub fn registry(spec: FaceSpec, settings: Settings) -> (FontRegistry, Arc<FakeBackend>) {
    let _ = env_logger::builder().is_test(true).try_init();
    let backend = Arc::new(FakeBackend::default());
    let rasterizer = FakeRasterizer { spec };
    let registry = FontRegistry::new(
        &rasterizer,
        Arc::clone(&backend) as Arc<dyn GraphicsBackend>,
        settings,
    )
    .unwrap();
    (registry, backend)
}

pub const FONT_BYTES: &[u8] = b"fake font bytes";
