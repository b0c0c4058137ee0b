// this_file: backends/pica-raster-fontdue/src/lib.rs
//! # pica-raster-fontdue
//!
//! The stock rasterizer backend for pica, built on [`fontdue`]. Pure
//! Rust, no native libraries, so contexts carry no shared state and
//! the default pool capacity of one is purely a formality here.
//!
//! Metrics mapping: fontdue reports per-glyph metrics with `xmin` /
//! `ymin` relative to the baseline and the bitmap growing upward, so
//! the control-box top handed to pica is `ymin + height`. Advances
//! are rounded up to whole pixels, matching how the atlas spaces
//! cells.

use fontdue::{FontSettings, Metrics};
use pica::raster::{FaceMetrics, RasterContext, RasterFace, Rasterizer, RasterizedGlyph};
use pica_core::{RasterError, Result};

/// The fontdue backend. Stateless; every context is equivalent.
#[derive(Debug, Default)]
pub struct FontdueRasterizer;

impl FontdueRasterizer {
    pub fn new() -> Self {
        Self
    }
}

impl Rasterizer for FontdueRasterizer {
    fn name(&self) -> &'static str {
        "fontdue"
    }

    fn new_context(&self) -> Result<Box<dyn RasterContext>> {
        Ok(Box::new(FontdueContext))
    }
}

struct FontdueContext;

impl RasterContext for FontdueContext {
    fn load_face(&self, data: &[u8], size: u32) -> Result<Box<dyn RasterFace>> {
        let settings = FontSettings {
            scale: size as f32,
            ..FontSettings::default()
        };
        let font = fontdue::Font::from_bytes(data, settings)
            .map_err(|message| RasterError::InvalidFontData(message.to_string()))?;
        let px = size as f32;

        // Not every face carries horizontal line metrics; fall back
        // to the pixel size as the line height.
        let (glyph_height, descender) = match font.horizontal_line_metrics(px) {
            Some(line) => (
                line.new_line_size.ceil() as i32,
                line.descent.floor() as i32,
            ),
            None => {
                log::debug!("face has no horizontal line metrics, using pixel size {size}");
                (size as i32, 0)
            }
        };
        let metrics = FaceMetrics {
            glyph_height,
            nominal_width: size as i32,
            nominal_height: size as i32,
            descender,
        };
        Ok(Box::new(FontdueFace { font, px, metrics }))
    }
}

struct FontdueFace {
    font: fontdue::Font,
    px: f32,
    metrics: FaceMetrics,
}

impl RasterFace for FontdueFace {
    fn metrics(&self) -> FaceMetrics {
        self.metrics
    }

    fn glyph_index(&self, ch: char) -> u32 {
        u32::from(self.font.lookup_glyph_index(ch))
    }

    fn rasterize(&self, ch: char) -> Result<RasterizedGlyph> {
        let (metrics, coverage) = self.font.rasterize(ch, self.px);
        Ok(convert(&metrics, coverage))
    }

    fn kerning(&self, left: u32, right: u32) -> i32 {
        self.font
            .horizontal_kern_indexed(left as u16, right as u16, self.px)
            .map(|kern| kern.round() as i32)
            .unwrap_or(0)
    }
}

fn convert(metrics: &Metrics, coverage: Vec<u8>) -> RasterizedGlyph {
    let height = metrics.height as i32;
    RasterizedGlyph {
        advance_x: metrics.advance_width.ceil() as i32,
        bearing_x: metrics.xmin,
        width: metrics.width as i32,
        height,
        cbox_left: metrics.xmin,
        cbox_top: metrics.ymin + height,
        coverage,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn garbage_bytes_are_rejected() {
        let context = FontdueContext;
        let result = context.load_face(b"definitely not a font", 16);
        assert!(matches!(
            result.map(|_| ()),
            Err(pica_core::PicaError::Raster(RasterError::InvalidFontData(_)))
        ));
    }

    #[test]
    fn contexts_are_always_available() {
        let rasterizer = FontdueRasterizer::new();
        assert_eq!(rasterizer.name(), "fontdue");
        assert!(rasterizer.new_context().is_ok());
    }

    #[test]
    fn metric_conversion_places_the_control_box() {
        let metrics = Metrics {
            xmin: -2,
            ymin: -3,
            width: 7,
            height: 10,
            advance_width: 8.2,
            advance_height: 0.0,
            bounds: fontdue::OutlineBounds {
                xmin: 0.0,
                ymin: 0.0,
                width: 0.0,
                height: 0.0,
            },
        };
        let glyph = convert(&metrics, vec![0; 70]);
        assert_eq!(glyph.advance_x, 9);
        assert_eq!(glyph.bearing_x, -2);
        assert_eq!(glyph.cbox_left, -2);
        assert_eq!(glyph.cbox_top, 7);
        assert!(!glyph.is_empty());
    }
}
