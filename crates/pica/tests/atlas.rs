//! Atlas packing behavior observed through the recording backend:
//! upload placement, page overflow, and the giant-glyph failure.

mod common;

use common::{registry, FaceSpec, FONT_BYTES};
use pica::raster::FaceMetrics;
use pica::{PicaError, Rect, Settings, TextureProfile};

#[test]
fn glyphs_upload_into_their_cell() {
    let (mut registry, backend) = registry(FaceSpec::default(), Settings::default());
    let font = registry.font("test", Some(FONT_BYTES), 12).unwrap();

    font.glyph('a').unwrap();

    let textures = backend.textures.lock().unwrap();
    let uploads = textures[0].uploads.lock().unwrap();
    // Bitmap is 6x8 in a cell with nominal height 12: the bitmap sits
    // at y = 12 - 8 (+1 baseline nudge), centered within its 8-wide
    // advance.
    assert_eq!(*uploads, vec![Rect::new(1, 5, 6, 8)]);
}

#[test]
fn underscore_skips_the_baseline_nudge() {
    let (mut registry, backend) = registry(FaceSpec::default(), Settings::default());
    let font = registry.font("test", Some(FONT_BYTES), 12).unwrap();

    font.glyph('_').unwrap();

    let textures = backend.textures.lock().unwrap();
    let uploads = textures[0].uploads.lock().unwrap();
    assert_eq!(*uploads, vec![Rect::new(1, 4, 6, 8)]);
}

#[test]
fn negative_bearing_is_clamped_to_the_page_edge() {
    let mut spec = FaceSpec::default();
    spec.bearings.insert('j', -9);
    let (mut registry, backend) = registry(spec, Settings::default());
    let font = registry.font("test", Some(FONT_BYTES), 12).unwrap();

    font.glyph('j').unwrap();

    let textures = backend.textures.lock().unwrap();
    let uploads = textures[0].uploads.lock().unwrap();
    // cbox pushes the rect to x = -9; it is pulled back to 0 before
    // the centering shift.
    assert_eq!(uploads[0].x, 1);
    assert!(uploads[0].y >= 0);
}

#[test]
fn glyphs_are_rasterized_once() {
    let (mut registry, backend) = registry(FaceSpec::default(), Settings::default());
    let font = registry.font("test", Some(FONT_BYTES), 12).unwrap();

    font.glyph('a').unwrap();
    font.glyph('a').unwrap();

    let textures = backend.textures.lock().unwrap();
    assert_eq!(textures[0].uploads.lock().unwrap().len(), 1);
}

#[test]
fn whitespace_uploads_nothing() {
    let (mut registry, backend) = registry(FaceSpec::default(), Settings::default());
    let font = registry.font("test", Some(FONT_BYTES), 12).unwrap();

    font.glyph(' ').unwrap();
    font.glyph('\t').unwrap();

    let textures = backend.textures.lock().unwrap();
    assert!(textures[0].uploads.lock().unwrap().is_empty());
}

fn oversized_spec() -> FaceSpec {
    FaceSpec {
        metrics: FaceMetrics {
            glyph_height: 600,
            nominal_width: 5,
            nominal_height: 5,
            descender: -4,
        },
        advance: 1000,
        bitmap_width: 4,
        bitmap_height: 4,
        ..FaceSpec::default()
    }
}

#[test]
fn a_full_page_overflows_onto_a_new_one() {
    let settings = Settings {
        texture_profile: TextureProfile::Constrained,
        ..Settings::default()
    };
    let (mut registry, backend) = registry(oversized_spec(), settings);
    let font = registry.font("test", Some(FONT_BYTES), 12).unwrap();

    // Two 1000-wide glyphs per row, three rows per 2048 page.
    for ch in "abcdefg".chars() {
        font.glyph(ch).unwrap();
    }
    assert_eq!(font.page_count(), 2);
    assert_eq!(font.glyph('g').unwrap().page.index(), 1);

    // Everything uploaded must land inside its page.
    let textures = backend.textures.lock().unwrap();
    for texture in textures.iter() {
        for rect in texture.uploads.lock().unwrap().iter() {
            assert!(rect.x >= 0 && rect.y >= 0);
            assert!(rect.right() <= 2048 && rect.bottom() <= 2048);
        }
    }
}

#[test]
fn earlier_pages_are_reused_when_they_still_have_room() {
    let settings = Settings {
        texture_profile: TextureProfile::Constrained,
        ..Settings::default()
    };
    let (mut registry, _) = registry(oversized_spec(), settings);
    let font = registry.font("test", Some(FONT_BYTES), 12).unwrap();

    for ch in "abcdef".chars() {
        font.glyph(ch).unwrap();
    }
    assert_eq!(font.page_count(), 1);
    // The sixth glyph filled page 0 without overflowing it.
    assert_eq!(font.glyph('f').unwrap().page.index(), 0);
}

#[test]
fn a_glyph_taller_than_a_page_is_an_error() {
    let settings = Settings {
        texture_profile: TextureProfile::Constrained,
        ..Settings::default()
    };
    let mut spec = oversized_spec();
    spec.metrics.glyph_height = 2048;
    let (mut registry, _) = registry(spec, settings);
    let font = registry.font("test", Some(FONT_BYTES), 12).unwrap();

    assert!(matches!(
        font.glyph('a'),
        Err(PicaError::GlyphTooLarge('a'))
    ));
}
