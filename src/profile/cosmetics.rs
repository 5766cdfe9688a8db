//! Snake skins and head shapes.

use serde::{Deserialize, Serialize};

/// An RGB colour triple.
pub type Rgb = (u8, u8, u8);

/// Colour set used to draw the snake.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub aura: Rgb,
    pub head: Rgb,
    pub body: Rgb,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Skin {
    #[default]
    Default,
    Lava,
    Gold,
    Ghost,
}

impl Skin {
    pub const ALL: [Skin; 4] = [Skin::Default, Skin::Lava, Skin::Gold, Skin::Ghost];

    pub fn name(&self) -> &'static str {
        match self {
            Skin::Default => "Neon",
            Skin::Lava => "Lava",
            Skin::Gold => "Gold",
            Skin::Ghost => "Ghost",
        }
    }

    pub fn palette(&self) -> Palette {
        match self {
            Skin::Default => Palette {
                aura: (0x00, 0xf2, 0xff),
                head: (0xff, 0xff, 0xff),
                body: (0x0e, 0xa5, 0xe9),
            },
            Skin::Lava => Palette {
                aura: (0xff, 0x4d, 0x00),
                head: (0xff, 0xcc, 0x00),
                body: (0x7f, 0x1d, 0x1d),
            },
            Skin::Gold => Palette {
                aura: (0xff, 0xd7, 0x00),
                head: (0xff, 0xff, 0xff),
                body: (0x78, 0x35, 0x0f),
            },
            Skin::Ghost => Palette {
                aura: (0xff, 0xff, 0xff),
                head: (0xff, 0xff, 0xff),
                body: (0x33, 0x41, 0x55),
            },
        }
    }

    /// The next skin in display order, wrapping around.
    pub fn next(&self) -> Self {
        let i = Self::ALL.iter().position(|s| s == self).unwrap_or(0);
        Self::ALL[(i + 1) % Self::ALL.len()]
    }
}

/// Shape of the snake's head.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeadShape {
    #[default]
    Default,
    Mecha,
    Viper,
    Orb,
}

impl HeadShape {
    pub const ALL: [HeadShape; 4] = [
        HeadShape::Default,
        HeadShape::Mecha,
        HeadShape::Viper,
        HeadShape::Orb,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            HeadShape::Default => "Classic",
            HeadShape::Mecha => "Mecha",
            HeadShape::Viper => "Viper",
            HeadShape::Orb => "Orb",
        }
    }

    /// Glyph drawn for the head, indexed Up, Down, Left, Right.
    pub fn glyphs(&self) -> [char; 4] {
        match self {
            HeadShape::Default => ['▲', '▼', '◀', '▶'],
            HeadShape::Mecha => ['⏶', '⏷', '⏴', '⏵'],
            HeadShape::Viper => ['^', 'v', '<', '>'],
            HeadShape::Orb => ['●', '●', '●', '●'],
        }
    }

    pub fn next(&self) -> Self {
        let i = Self::ALL.iter().position(|h| h == self).unwrap_or(0);
        Self::ALL[(i + 1) % Self::ALL.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycles_wrap() {
        assert_eq!(Skin::Ghost.next(), Skin::Default);
        assert_eq!(HeadShape::Orb.next(), HeadShape::Default);
        assert_eq!(HeadShape::Default.next(), HeadShape::Mecha);
    }

    #[test]
    fn test_serialized_names() {
        assert_eq!(serde_json::to_string(&Skin::Default).unwrap(), "\"default\"");
        let head: HeadShape = serde_json::from_str("\"viper\"").unwrap();
        assert_eq!(head, HeadShape::Viper);
    }
}
