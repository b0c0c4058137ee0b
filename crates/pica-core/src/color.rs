//! Simple RGBA color plus the named-color table
//!
//! Markup tags like `[c: red]` resolve against `Color::named`. The
//! table is the standard web color set (the same set the original
//! platform exposed as named color properties), keyed
//! case-insensitively. Raw channel accessors are not names, so there
//! is no `"R"` or `"A"` entry.

use std::collections::HashMap;
use std::sync::OnceLock;

/// Simple RGBA color that works everywhere
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);

    /// Look up a color by name, case-insensitively.
    ///
    /// ```
    /// use pica_core::Color;
    ///
    /// assert_eq!(Color::named("Red"), Some(Color::rgb(255, 0, 0)));
    /// assert_eq!(Color::named("not a color"), None);
    /// ```
    pub fn named(name: &str) -> Option<Color> {
        let table = NAMED_TABLE.get_or_init(|| {
            NAMED_COLORS
                .iter()
                .map(|(name, color)| (*name, *color))
                .collect()
        });
        table.get(name.to_uppercase().as_str()).copied()
    }
}

static NAMED_TABLE: OnceLock<HashMap<&'static str, Color>> = OnceLock::new();

/// The standard named colors, keys pre-uppercased for lookup.
const NAMED_COLORS: &[(&str, Color)] = &[
    ("ALICEBLUE", Color::rgb(240, 248, 255)),
    ("ANTIQUEWHITE", Color::rgb(250, 235, 215)),
    ("AQUA", Color::rgb(0, 255, 255)),
    ("AQUAMARINE", Color::rgb(127, 255, 212)),
    ("AZURE", Color::rgb(240, 255, 255)),
    ("BEIGE", Color::rgb(245, 245, 220)),
    ("BISQUE", Color::rgb(255, 228, 196)),
    ("BLACK", Color::rgb(0, 0, 0)),
    ("BLANCHEDALMOND", Color::rgb(255, 235, 205)),
    ("BLUE", Color::rgb(0, 0, 255)),
    ("BLUEVIOLET", Color::rgb(138, 43, 226)),
    ("BROWN", Color::rgb(165, 42, 42)),
    ("BURLYWOOD", Color::rgb(222, 184, 135)),
    ("CADETBLUE", Color::rgb(95, 158, 160)),
    ("CHARTREUSE", Color::rgb(127, 255, 0)),
    ("CHOCOLATE", Color::rgb(210, 105, 30)),
    ("CORAL", Color::rgb(255, 127, 80)),
    ("CORNFLOWERBLUE", Color::rgb(100, 149, 237)),
    ("CORNSILK", Color::rgb(255, 248, 220)),
    ("CRIMSON", Color::rgb(220, 20, 60)),
    ("CYAN", Color::rgb(0, 255, 255)),
    ("DARKBLUE", Color::rgb(0, 0, 139)),
    ("DARKCYAN", Color::rgb(0, 139, 139)),
    ("DARKGOLDENROD", Color::rgb(184, 134, 11)),
    ("DARKGRAY", Color::rgb(169, 169, 169)),
    ("DARKGREEN", Color::rgb(0, 100, 0)),
    ("DARKKHAKI", Color::rgb(189, 183, 107)),
    ("DARKMAGENTA", Color::rgb(139, 0, 139)),
    ("DARKOLIVEGREEN", Color::rgb(85, 107, 47)),
    ("DARKORANGE", Color::rgb(255, 140, 0)),
    ("DARKORCHID", Color::rgb(153, 50, 204)),
    ("DARKRED", Color::rgb(139, 0, 0)),
    ("DARKSALMON", Color::rgb(233, 150, 122)),
    ("DARKSEAGREEN", Color::rgb(143, 188, 143)),
    ("DARKSLATEBLUE", Color::rgb(72, 61, 139)),
    ("DARKSLATEGRAY", Color::rgb(47, 79, 79)),
    ("DARKTURQUOISE", Color::rgb(0, 206, 209)),
    ("DARKVIOLET", Color::rgb(148, 0, 211)),
    ("DEEPPINK", Color::rgb(255, 20, 147)),
    ("DEEPSKYBLUE", Color::rgb(0, 191, 255)),
    ("DIMGRAY", Color::rgb(105, 105, 105)),
    ("DODGERBLUE", Color::rgb(30, 144, 255)),
    ("FIREBRICK", Color::rgb(178, 34, 34)),
    ("FLORALWHITE", Color::rgb(255, 250, 240)),
    ("FORESTGREEN", Color::rgb(34, 139, 34)),
    ("FUCHSIA", Color::rgb(255, 0, 255)),
    ("GAINSBORO", Color::rgb(220, 220, 220)),
    ("GHOSTWHITE", Color::rgb(248, 248, 255)),
    ("GOLD", Color::rgb(255, 215, 0)),
    ("GOLDENROD", Color::rgb(218, 165, 32)),
    ("GRAY", Color::rgb(128, 128, 128)),
    ("GREEN", Color::rgb(0, 128, 0)),
    ("GREENYELLOW", Color::rgb(173, 255, 47)),
    ("HONEYDEW", Color::rgb(240, 255, 240)),
    ("HOTPINK", Color::rgb(255, 105, 180)),
    ("INDIANRED", Color::rgb(205, 92, 92)),
    ("INDIGO", Color::rgb(75, 0, 130)),
    ("IVORY", Color::rgb(255, 255, 240)),
    ("KHAKI", Color::rgb(240, 230, 140)),
    ("LAVENDER", Color::rgb(230, 230, 250)),
    ("LAVENDERBLUSH", Color::rgb(255, 240, 245)),
    ("LAWNGREEN", Color::rgb(124, 252, 0)),
    ("LEMONCHIFFON", Color::rgb(255, 250, 205)),
    ("LIGHTBLUE", Color::rgb(173, 216, 230)),
    ("LIGHTCORAL", Color::rgb(240, 128, 128)),
    ("LIGHTCYAN", Color::rgb(224, 255, 255)),
    ("LIGHTGOLDENRODYELLOW", Color::rgb(250, 250, 210)),
    ("LIGHTGRAY", Color::rgb(211, 211, 211)),
    ("LIGHTGREEN", Color::rgb(144, 238, 144)),
    ("LIGHTPINK", Color::rgb(255, 182, 193)),
    ("LIGHTSALMON", Color::rgb(255, 160, 122)),
    ("LIGHTSEAGREEN", Color::rgb(32, 178, 170)),
    ("LIGHTSKYBLUE", Color::rgb(135, 206, 250)),
    ("LIGHTSLATEGRAY", Color::rgb(119, 136, 153)),
    ("LIGHTSTEELBLUE", Color::rgb(176, 196, 222)),
    ("LIGHTYELLOW", Color::rgb(255, 255, 224)),
    ("LIME", Color::rgb(0, 255, 0)),
    ("LIMEGREEN", Color::rgb(50, 205, 50)),
    ("LINEN", Color::rgb(250, 240, 230)),
    ("MAGENTA", Color::rgb(255, 0, 255)),
    ("MAROON", Color::rgb(128, 0, 0)),
    ("MEDIUMAQUAMARINE", Color::rgb(102, 205, 170)),
    ("MEDIUMBLUE", Color::rgb(0, 0, 205)),
    ("MEDIUMORCHID", Color::rgb(186, 85, 211)),
    ("MEDIUMPURPLE", Color::rgb(147, 112, 219)),
    ("MEDIUMSEAGREEN", Color::rgb(60, 179, 113)),
    ("MEDIUMSLATEBLUE", Color::rgb(123, 104, 238)),
    ("MEDIUMSPRINGGREEN", Color::rgb(0, 250, 154)),
    ("MEDIUMTURQUOISE", Color::rgb(72, 209, 204)),
    ("MEDIUMVIOLETRED", Color::rgb(199, 21, 133)),
    ("MIDNIGHTBLUE", Color::rgb(25, 25, 112)),
    ("MINTCREAM", Color::rgb(245, 255, 250)),
    ("MISTYROSE", Color::rgb(255, 228, 225)),
    ("MOCCASIN", Color::rgb(255, 228, 181)),
    ("NAVAJOWHITE", Color::rgb(255, 222, 173)),
    ("NAVY", Color::rgb(0, 0, 128)),
    ("OLDLACE", Color::rgb(253, 245, 230)),
    ("OLIVE", Color::rgb(128, 128, 0)),
    ("OLIVEDRAB", Color::rgb(107, 142, 35)),
    ("ORANGE", Color::rgb(255, 165, 0)),
    ("ORANGERED", Color::rgb(255, 69, 0)),
    ("ORCHID", Color::rgb(218, 112, 214)),
    ("PALEGOLDENROD", Color::rgb(238, 232, 170)),
    ("PALEGREEN", Color::rgb(152, 251, 152)),
    ("PALETURQUOISE", Color::rgb(175, 238, 238)),
    ("PALEVIOLETRED", Color::rgb(219, 112, 147)),
    ("PAPAYAWHIP", Color::rgb(255, 239, 213)),
    ("PEACHPUFF", Color::rgb(255, 218, 185)),
    ("PERU", Color::rgb(205, 133, 63)),
    ("PINK", Color::rgb(255, 192, 203)),
    ("PLUM", Color::rgb(221, 160, 221)),
    ("POWDERBLUE", Color::rgb(176, 224, 230)),
    ("PURPLE", Color::rgb(128, 0, 128)),
    ("RED", Color::rgb(255, 0, 0)),
    ("ROSYBROWN", Color::rgb(188, 143, 143)),
    ("ROYALBLUE", Color::rgb(65, 105, 225)),
    ("SADDLEBROWN", Color::rgb(139, 69, 19)),
    ("SALMON", Color::rgb(250, 128, 114)),
    ("SANDYBROWN", Color::rgb(244, 164, 96)),
    ("SEAGREEN", Color::rgb(46, 139, 87)),
    ("SEASHELL", Color::rgb(255, 245, 238)),
    ("SIENNA", Color::rgb(160, 82, 45)),
    ("SILVER", Color::rgb(192, 192, 192)),
    ("SKYBLUE", Color::rgb(135, 206, 235)),
    ("SLATEBLUE", Color::rgb(106, 90, 205)),
    ("SLATEGRAY", Color::rgb(112, 128, 144)),
    ("SNOW", Color::rgb(255, 250, 250)),
    ("SPRINGGREEN", Color::rgb(0, 255, 127)),
    ("STEELBLUE", Color::rgb(70, 130, 180)),
    ("TAN", Color::rgb(210, 180, 140)),
    ("TEAL", Color::rgb(0, 128, 128)),
    ("THISTLE", Color::rgb(216, 191, 216)),
    ("TOMATO", Color::rgb(255, 99, 71)),
    ("TRANSPARENT", Color::TRANSPARENT),
    ("TURQUOISE", Color::rgb(64, 224, 208)),
    ("VIOLET", Color::rgb(238, 130, 238)),
    ("WHEAT", Color::rgb(245, 222, 179)),
    ("WHITE", Color::rgb(255, 255, 255)),
    ("WHITESMOKE", Color::rgb(245, 245, 245)),
    ("YELLOW", Color::rgb(255, 255, 0)),
    ("YELLOWGREEN", Color::rgb(154, 205, 50)),
];
