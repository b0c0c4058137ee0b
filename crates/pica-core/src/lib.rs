//! Pica Core: the small pieces every other crate leans on
//!
//! Text rendering is mostly bookkeeping, and this crate holds the
//! bookkeeping types: pixel geometry, colors and the named-color table
//! the markup syntax resolves against, the bounded FIFO cache that
//! backs both the per-font layout cache and the per-text transform
//! cache, the inline color-tag parser, and the error taxonomy.
//!
//! Nothing here touches a rasterizer or a GPU. The heavier machinery
//! lives in the `pica` crate; backends plug in underneath it.

pub mod cache;
pub mod color;
pub mod error;
pub mod geometry;
pub mod markup;

pub use cache::BoundedCache;
pub use color::Color;
pub use error::{MarkupError, PicaError, RasterError, Result};
pub use geometry::{Point, Rect, Size};

/// A full turn, for detecting rotations that are really the identity.
pub const TWO_PI: f32 = std::f32::consts::TAU;

/// Approximate float comparison used when classifying rotations.
///
/// Transform cache keys never use this; they compare exact bits. This
/// exists only so a rotation of `0.0000001` takes the cheap
/// scale/translate path instead of the trigonometric one.
pub fn nearly_equal(a: f32, b: f32) -> bool {
    (a - b).abs() <= 1e-5
}

/// Round a float dimension to the integer the public API exposes.
pub fn round_to_int(value: f32) -> i32 {
    value.round() as i32
}
