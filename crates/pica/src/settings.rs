//! Engine settings
//!
//! Everything tunable lives in one struct with sensible defaults, the
//! same values the system has always shipped with. Construct one,
//! tweak what you need, hand it to the registry.

use crate::backend::TextureProfile;

/// The characters pre-generated by default when pre-generation is
/// enabled: ASCII plus the CJK punctuation that tends to show up in
/// mixed text.
pub const DEFAULT_CHARACTERS: &str = " AaBbCcDdEeFfGgHhIiJjKkLlMmNnOoPpQqRrSsTtUuVvWwXxYyZz0123456789~`!@#$%^&*()_+-=[]\\{}|;':\",./<>?。？　【】｛｝、｜《》（）…￥";

/// Tunables for the whole engine.
#[derive(Debug, Clone)]
pub struct Settings {
    /// How many space-widths a `\t` expands to.
    pub spaces_per_tab: i32,
    /// Kerning values larger in magnitude than
    /// `advance * kerning_sanity_multiplier` are discarded.
    pub kerning_sanity_multiplier: i32,
    /// Per-font laid-out-string cache capacity.
    pub layout_cache_capacity: usize,
    /// Per-text transformed-position cache capacity.
    pub transform_cache_capacity: usize,
    /// Atlas page size tier.
    pub texture_profile: TextureProfile,
    /// How many rasterizer contexts the registry pools.
    pub context_pool_capacity: usize,
    /// Keep typeface bytes around so new sizes don't need the caller
    /// to supply them again.
    pub store_typeface_data: bool,
    /// Rasterize a character set eagerly when a font is created.
    pub pregenerate: bool,
    /// Which characters to pre-generate.
    pub pregenerate_characters: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            spaces_per_tab: 4,
            kerning_sanity_multiplier: 5,
            layout_cache_capacity: 16,
            transform_cache_capacity: 8,
            texture_profile: TextureProfile::default(),
            context_pool_capacity: 1,
            store_typeface_data: true,
            pregenerate: false,
            pregenerate_characters: DEFAULT_CHARACTERS.to_string(),
        }
    }
}
