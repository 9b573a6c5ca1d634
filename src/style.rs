/// Rarity styling tables
///
/// Border, gradient and background colors for the five rarity tiers,
/// converted from the build planner's CSS. The table is fixed at compile
/// time; unknown tier names fall back to gray.

use iced::Color;
use serde::{Deserialize, Serialize};

/// The five rarity tiers, lowest to highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    #[default]
    Gray,
    Green,
    Blue,
    Purple,
    Orange,
}

/// Colors attached to one rarity tier.
///
/// `gradient` holds the three stops in start → mid → end order. Start is
/// fully transparent, mid is at 0.2 alpha, end at 0.5 alpha. Which end of
/// the gradient sits at which stop position depends on the slot family
/// (see `ui::geometry`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RarityPalette {
    /// 1px border color
    pub border: Color,
    /// Gradient stops: [start, mid, end]
    pub gradient: [Color; 3],
    /// Slot background behind the gradient
    pub background: Color,
}

/// Base window background (#050b0d)
pub const BASE_BG: Color = Color {
    r: 5.0 / 255.0,
    g: 11.0 / 255.0,
    b: 13.0 / 255.0,
    a: 1.0,
};
/// Darker band of the window background gradient (#0b181e)
pub const DARK_BG: Color = Color {
    r: 11.0 / 255.0,
    g: 24.0 / 255.0,
    b: 30.0 / 255.0,
    a: 1.0,
};
/// Secondary text / badge text
pub const GREY_2: Color = Color {
    r: 136.0 / 255.0,
    g: 138.0 / 255.0,
    b: 156.0 / 255.0,
    a: 1.0,
};
/// Placeholder glyph color
pub const GREY_3: Color = Color {
    r: 150.0 / 255.0,
    g: 148.0 / 255.0,
    b: 171.0 / 255.0,
    a: 1.0,
};
/// Weapon number badge background
pub const BADGE_BG: Color = Color {
    r: 20.0 / 255.0,
    g: 24.0 / 255.0,
    b: 28.0 / 255.0,
    a: 1.0,
};

impl Rarity {
    /// All tiers, in display order.
    pub const ALL: [Rarity; 5] = [
        Rarity::Gray,
        Rarity::Green,
        Rarity::Blue,
        Rarity::Purple,
        Rarity::Orange,
    ];

    /// Parse a tier from its lowercase name. Unknown names fall back to gray.
    pub fn from_name(name: &str) -> Rarity {
        match name {
            "green" => Rarity::Green,
            "blue" => Rarity::Blue,
            "purple" => Rarity::Purple,
            "orange" => Rarity::Orange,
            _ => Rarity::Gray,
        }
    }

    /// The tier's lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Rarity::Gray => "gray",
            Rarity::Green => "green",
            Rarity::Blue => "blue",
            Rarity::Purple => "purple",
            Rarity::Orange => "orange",
        }
    }

    /// Look up the color record for this tier.
    pub fn palette(&self) -> RarityPalette {
        match self {
            Rarity::Gray => RarityPalette {
                border: rgb8(0x96, 0x94, 0xab),
                gradient: stops(136, 138, 156),
                background: BASE_BG,
            },
            Rarity::Green => RarityPalette {
                border: rgb8(0x5e, 0xc7, 0x53),
                gradient: stops(94, 199, 83),
                background: BASE_BG,
            },
            Rarity::Blue => RarityPalette {
                border: rgb8(0x00, 0xa3, 0xd0),
                gradient: stops(39, 101, 179),
                background: BASE_BG,
            },
            Rarity::Purple => RarityPalette {
                border: rgb8(0x8e, 0x1d, 0xb6),
                gradient: stops(142, 29, 182),
                background: BASE_BG,
            },
            Rarity::Orange => RarityPalette {
                border: rgb8(0xc1, 0x78, 0x0f),
                gradient: stops(193, 120, 15),
                background: BASE_BG,
            },
        }
    }
}

fn rgb8(r: u8, g: u8, b: u8) -> Color {
    Color::from_rgb8(r, g, b)
}

/// Build the three gradient stops from one base color:
/// alpha 0 (start), 0.2 (mid), 0.5 (end).
fn stops(r: u8, g: u8, b: u8) -> [Color; 3] {
    [
        Color::from_rgba8(r, g, b, 0.0),
        Color::from_rgba8(r, g, b, 0.2),
        Color::from_rgba8(r, g, b, 0.5),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_tier_has_three_stops_and_border() {
        for rarity in Rarity::ALL {
            let palette = rarity.palette();
            assert_eq!(palette.gradient.len(), 3);
            assert!(palette.border.a > 0.0);
            // Stop alphas are fixed across tiers
            assert_eq!(palette.gradient[0].a, 0.0);
            assert!((palette.gradient[1].a - 0.2).abs() < 1e-6);
            assert!((palette.gradient[2].a - 0.5).abs() < 1e-6);
        }
    }

    #[test]
    fn test_unknown_name_falls_back_to_gray() {
        assert_eq!(Rarity::from_name("iridium"), Rarity::Gray);
        assert_eq!(Rarity::from_name(""), Rarity::Gray);
        assert_eq!(Rarity::from_name("purple"), Rarity::Purple);
    }

    #[test]
    fn test_purple_border_color() {
        // #8e1db6
        let border = Rarity::Purple.palette().border;
        assert!((border.r - 0x8e as f32 / 255.0).abs() < 1e-6);
        assert!((border.g - 0x1d as f32 / 255.0).abs() < 1e-6);
        assert!((border.b - 0xb6 as f32 / 255.0).abs() < 1e-6);
    }

    #[test]
    fn test_name_round_trip() {
        for rarity in Rarity::ALL {
            assert_eq!(Rarity::from_name(rarity.as_str()), rarity);
        }
    }
}
