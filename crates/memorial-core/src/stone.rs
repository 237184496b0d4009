//! Gravestone option enumerations.
//!
//! Each enumeration is a closed set of control values. The ones that style
//! the card through a class are [`TokenFamily`]s; [`Icon`] maps to a glyph
//! instead.

use serde::{Serialize, Serializer};

use crate::tokens::{Keyed, TokenFamily};

/// Card silhouette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    Rectangle,
    Arched,
    Oval,
    Cross,
    Heart,
}

impl Keyed for Shape {
    const ALL: &'static [Self] = &[
        Shape::Rectangle,
        Shape::Arched,
        Shape::Oval,
        Shape::Cross,
        Shape::Heart,
    ];

    fn key(self) -> &'static str {
        match self {
            Shape::Rectangle => "rectangle",
            Shape::Arched => "arched",
            Shape::Oval => "oval",
            Shape::Cross => "cross",
            Shape::Heart => "heart",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Shape::Rectangle => "Classic Rectangle",
            Shape::Arched => "Gothic Arch",
            Shape::Oval => "Oval",
            Shape::Cross => "Celtic Cross",
            Shape::Heart => "Heart",
        }
    }
}

impl TokenFamily for Shape {
    const PREFIX: &'static str = "shape-";
}

/// Stone material color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoneColor {
    GraniteGray,
    GraniteBlack,
    MarbleWhite,
    RoseRed,
    GreenJade,
    BluePearl,
    ObsidianBlack,
    SandstoneTan,
    PurpleAmethyst,
}

impl StoneColor {
    /// Base RGB of the material, used by the rasterizer.
    pub fn rgb(self) -> [u8; 3] {
        match self {
            StoneColor::GraniteGray => [0x80, 0x80, 0x80],
            StoneColor::GraniteBlack => [0x2b, 0x2b, 0x2b],
            StoneColor::MarbleWhite => [0xf0, 0xee, 0xe9],
            StoneColor::RoseRed => [0x9e, 0x4b, 0x55],
            StoneColor::GreenJade => [0x3f, 0x7d, 0x5c],
            StoneColor::BluePearl => [0x4a, 0x5d, 0x7e],
            StoneColor::ObsidianBlack => [0x12, 0x12, 0x16],
            StoneColor::SandstoneTan => [0xc2, 0xa6, 0x7a],
            StoneColor::PurpleAmethyst => [0x6b, 0x4a, 0x8c],
        }
    }
}

impl Keyed for StoneColor {
    const ALL: &'static [Self] = &[
        StoneColor::GraniteGray,
        StoneColor::GraniteBlack,
        StoneColor::MarbleWhite,
        StoneColor::RoseRed,
        StoneColor::GreenJade,
        StoneColor::BluePearl,
        StoneColor::ObsidianBlack,
        StoneColor::SandstoneTan,
        StoneColor::PurpleAmethyst,
    ];

    fn key(self) -> &'static str {
        match self {
            StoneColor::GraniteGray => "granite-gray",
            StoneColor::GraniteBlack => "granite-black",
            StoneColor::MarbleWhite => "marble-white",
            StoneColor::RoseRed => "rose-red",
            StoneColor::GreenJade => "green-jade",
            StoneColor::BluePearl => "blue-pearl",
            StoneColor::ObsidianBlack => "obsidian-black",
            StoneColor::SandstoneTan => "sandstone-tan",
            StoneColor::PurpleAmethyst => "purple-amethyst",
        }
    }

    fn label(self) -> &'static str {
        match self {
            StoneColor::GraniteGray => "Granite Gray",
            StoneColor::GraniteBlack => "Granite Black",
            StoneColor::MarbleWhite => "Marble White",
            StoneColor::RoseRed => "Rose Red",
            StoneColor::GreenJade => "Green Jade",
            StoneColor::BluePearl => "Blue Pearl",
            StoneColor::ObsidianBlack => "Obsidian Black",
            StoneColor::SandstoneTan => "Sandstone Tan",
            StoneColor::PurpleAmethyst => "Purple Amethyst",
        }
    }
}

impl TokenFamily for StoneColor {
    const PREFIX: &'static str = "color-";
}

/// Inscription typeface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Font {
    SerifClassic,
    SansModern,
    ScriptElegant,
    Creepster,
    Cinzel,
    Typewriter,
}

impl Keyed for Font {
    const ALL: &'static [Self] = &[
        Font::SerifClassic,
        Font::SansModern,
        Font::ScriptElegant,
        Font::Creepster,
        Font::Cinzel,
        Font::Typewriter,
    ];

    fn key(self) -> &'static str {
        match self {
            Font::SerifClassic => "serif-classic",
            Font::SansModern => "sans-modern",
            Font::ScriptElegant => "script-elegant",
            Font::Creepster => "creepster",
            Font::Cinzel => "cinzel",
            Font::Typewriter => "typewriter",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Font::SerifClassic => "Classic Serif",
            Font::SansModern => "Modern Sans",
            Font::ScriptElegant => "Elegant Script",
            Font::Creepster => "Creepster",
            Font::Cinzel => "Cinzel",
            Font::Typewriter => "Typewriter",
        }
    }
}

impl TokenFamily for Font {
    const PREFIX: &'static str = "font-";
}

/// Color of the engraved text and icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EngravingColor {
    Gold,
    Silver,
    White,
}

impl EngravingColor {
    pub fn rgb(self) -> [u8; 3] {
        match self {
            EngravingColor::Gold => [0xd4, 0xaf, 0x37],
            EngravingColor::Silver => [0xc0, 0xc0, 0xc0],
            EngravingColor::White => [0xff, 0xff, 0xff],
        }
    }
}

impl Keyed for EngravingColor {
    const ALL: &'static [Self] = &[
        EngravingColor::Gold,
        EngravingColor::Silver,
        EngravingColor::White,
    ];

    fn key(self) -> &'static str {
        match self {
            EngravingColor::Gold => "gold",
            EngravingColor::Silver => "silver",
            EngravingColor::White => "white",
        }
    }

    fn label(self) -> &'static str {
        match self {
            EngravingColor::Gold => "Gold Leaf",
            EngravingColor::Silver => "Silver",
            EngravingColor::White => "Chalk White",
        }
    }
}

impl TokenFamily for EngravingColor {
    const PREFIX: &'static str = "engraving-";
}

/// Emblem carved above the name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    None,
    Cross,
    Heart,
    Star,
    Dove,
    Angel,
    Rose,
    Skull,
    Moon,
}

impl Icon {
    /// Literal glyph shown on the card; empty for [`Icon::None`].
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::None => "",
            Icon::Cross => "†",
            Icon::Heart => "❤️",
            Icon::Star => "★",
            Icon::Dove => "🕊️",
            Icon::Angel => "👼",
            Icon::Rose => "🌹",
            Icon::Skull => "💀",
            Icon::Moon => "🌙",
        }
    }
}

impl Keyed for Icon {
    const ALL: &'static [Self] = &[
        Icon::None,
        Icon::Cross,
        Icon::Heart,
        Icon::Star,
        Icon::Dove,
        Icon::Angel,
        Icon::Rose,
        Icon::Skull,
        Icon::Moon,
    ];

    fn key(self) -> &'static str {
        match self {
            Icon::None => "none",
            Icon::Cross => "cross",
            Icon::Heart => "heart",
            Icon::Star => "star",
            Icon::Dove => "dove",
            Icon::Angel => "angel",
            Icon::Rose => "rose",
            Icon::Skull => "skull",
            Icon::Moon => "moon",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Icon::None => "No Icon",
            Icon::Cross => "† Cross",
            Icon::Heart => "❤️ Heart",
            Icon::Star => "★ Star",
            Icon::Dove => "🕊️ Dove",
            Icon::Angel => "👼 Angel",
            Icon::Rose => "🌹 Rose",
            Icon::Skull => "💀 Skull",
            Icon::Moon => "🌙 Moon",
        }
    }
}

/// Scene surrounding the designer.
///
/// Only `gothic-night` selects the dark palette; any other control value
/// reads as daylight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SceneTheme {
    GothicNight,
    Daylight,
}

impl SceneTheme {
    pub fn from_value(value: &str) -> Self {
        if value == "gothic-night" {
            SceneTheme::GothicNight
        } else {
            SceneTheme::Daylight
        }
    }
}

impl Keyed for SceneTheme {
    const ALL: &'static [Self] = &[SceneTheme::GothicNight, SceneTheme::Daylight];

    fn key(self) -> &'static str {
        match self {
            SceneTheme::GothicNight => "gothic-night",
            SceneTheme::Daylight => "daylight",
        }
    }

    fn label(self) -> &'static str {
        match self {
            SceneTheme::GothicNight => "Gothic Night",
            SceneTheme::Daylight => "Daylight Cemetery",
        }
    }
}

impl Serialize for SceneTheme {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_round_trip() {
        for shape in Shape::ALL {
            assert_eq!(Shape::from_key(shape.key()), Some(*shape));
        }
        for color in StoneColor::ALL {
            assert_eq!(StoneColor::from_key(color.key()), Some(*color));
        }
        for font in Font::ALL {
            assert_eq!(Font::from_key(font.key()), Some(*font));
        }
    }

    #[test]
    fn test_tokens_carry_prefix() {
        assert_eq!(StoneColor::RoseRed.token(), "color-rose-red");
        assert_eq!(Font::ScriptElegant.token(), "font-script-elegant");
        assert_eq!(EngravingColor::Silver.token(), "engraving-silver");
        assert_eq!(Shape::closed_tokens().len(), 5);
    }

    #[test]
    fn test_only_none_icon_is_empty() {
        for icon in Icon::ALL {
            assert_eq!(icon.glyph().is_empty(), *icon == Icon::None);
        }
    }

    #[test]
    fn test_scene_theme_falls_back_to_daylight() {
        assert_eq!(SceneTheme::from_value("gothic-night"), SceneTheme::GothicNight);
        assert_eq!(SceneTheme::from_value("daylight"), SceneTheme::Daylight);
        assert_eq!(SceneTheme::from_value("anything"), SceneTheme::Daylight);
        assert_eq!(SceneTheme::from_value(""), SceneTheme::Daylight);
    }
}
