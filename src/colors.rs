//! Fixed palette shared by every glyph variant.

use palette::Srgba;
use serde::{Deserialize, Serialize};

/// Identifies one palette entry in the declarative glyph tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Accent {
    Orange,
    Gold,
    Purple,
    Blue,
    Highlight,
}

/// Named RGBA colors used to paint a glyph.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Palette {
    /// Rounded-rectangle fill behind the glyph.
    pub background: Srgba<u8>,
    pub orange: Srgba<u8>,
    pub gold: Srgba<u8>,
    pub purple: Srgba<u8>,
    pub blue: Srgba<u8>,
    /// Hub fill (white).
    pub highlight: Srgba<u8>,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Srgba::new(26, 31, 58, 255),
            orange: Srgba::new(255, 107, 53, 255),
            gold: Srgba::new(253, 200, 48, 255),
            purple: Srgba::new(118, 75, 162, 255),
            blue: Srgba::new(102, 126, 234, 255),
            highlight: Srgba::new(255, 255, 255, 255),
        }
    }
}

impl Palette {
    /// Looks up the color for an accent.
    pub fn accent(&self, accent: Accent) -> Srgba<u8> {
        match accent {
            Accent::Orange => self.orange,
            Accent::Gold => self.gold,
            Accent::Purple => self.purple,
            Accent::Blue => self.blue,
            Accent::Highlight => self.highlight,
        }
    }
}

/// Returns `color` with its alpha replaced.
pub fn with_alpha(color: Srgba<u8>, alpha: u8) -> Srgba<u8> {
    Srgba::new(color.red, color.green, color.blue, alpha)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_palette_is_opaque() {
        let palette = Palette::default();
        for accent in [
            Accent::Orange,
            Accent::Gold,
            Accent::Purple,
            Accent::Blue,
            Accent::Highlight,
        ] {
            assert_eq!(palette.accent(accent).alpha, 255);
        }
        assert_eq!(palette.background.alpha, 255);
    }

    #[test]
    fn accent_lookup_matches_fields() {
        let palette = Palette::default();
        assert_eq!(palette.accent(Accent::Gold), palette.gold);
        assert_eq!(palette.accent(Accent::Blue), Srgba::new(102, 126, 234, 255));
    }

    #[test]
    fn with_alpha_keeps_channels() {
        let glow = with_alpha(Palette::default().highlight, 220);
        assert_eq!((glow.red, glow.green, glow.blue, glow.alpha), (255, 255, 255, 220));
    }
}
