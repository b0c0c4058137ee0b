//! A font family across sizes
//!
//! A [`Typeface`] is one source font (a name plus, optionally, its
//! retained bytes) and the [`Font`] instances created from it, one
//! per pixel size. Fonts are created lazily and dropped individually;
//! dropping a font releases its atlas pages.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::Arc;

use pica_core::{RasterError, Result};

use crate::backend::GraphicsBackend;
use crate::font::Font;
use crate::raster::RasterContext;
use crate::settings::Settings;

/// One font family and its per-size instances.
pub struct Typeface {
    name: String,
    data: Option<Vec<u8>>,
    fonts: HashMap<u32, Font>,
}

impl Typeface {
    pub(crate) fn new(name: &str, data: Option<Vec<u8>>) -> Self {
        Self {
            name: name.to_string(),
            data,
            fonts: HashMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// True when the typeface retains its source bytes, so new sizes
    /// need no data from the caller.
    pub fn retains_data(&self) -> bool {
        self.data.is_some()
    }

    /// The sizes with a live font instance.
    pub fn sizes(&self) -> impl Iterator<Item = u32> + '_ {
        self.fonts.keys().copied()
    }

    /// Get or create the font at `size`.
    ///
    /// Creation needs font bytes: either `bytes` from the caller or
    /// the typeface's retained copy. With the retention setting on,
    /// caller bytes are kept for later sizes.
    pub(crate) fn font(
        &mut self,
        size: u32,
        bytes: Option<&[u8]>,
        context: &dyn RasterContext,
        backend: &Arc<dyn GraphicsBackend>,
        settings: &Settings,
    ) -> Result<&mut Font> {
        match self.fonts.entry(size) {
            Entry::Occupied(entry) => Ok(entry.into_mut()),
            Entry::Vacant(entry) => {
                let data = match bytes.or(self.data.as_deref()) {
                    Some(data) => data,
                    None => {
                        return Err(RasterError::InvalidFontData(format!(
                            "typeface {:?} retains no font data and none was supplied",
                            self.name
                        ))
                        .into())
                    }
                };
                let face = context.load_face(data, size)?;
                let mut font =
                    Font::new(&self.name, size, face, Arc::clone(backend), settings.clone());
                if settings.pregenerate {
                    font.pregenerate(&settings.pregenerate_characters)?;
                }
                if settings.store_typeface_data && self.data.is_none() {
                    self.data = bytes.map(<[u8]>::to_vec);
                }
                Ok(entry.insert(font))
            }
        }
    }

    /// Drop the font at `size`, releasing its atlas pages. Returns
    /// whether a font existed.
    pub fn release_font(&mut self, size: u32) -> bool {
        let released = self.fonts.remove(&size).is_some();
        if released {
            log::debug!("released size {size} of typeface {:?}", self.name);
        }
        released
    }
}

impl std::fmt::Debug for Typeface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Typeface")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

impl PartialEq for Typeface {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Typeface {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typefaces_compare_by_name() {
        let a = Typeface::new("serif", None);
        let b = Typeface::new("serif", Some(vec![1, 2, 3]));
        let c = Typeface::new("mono", None);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn releasing_an_absent_size_reports_false() {
        let mut face = Typeface::new("serif", None);
        assert!(!face.release_font(12));
    }
}
