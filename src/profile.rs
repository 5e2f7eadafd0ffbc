//! Serializable render configuration.
//!
//! A [`RenderProfile`] is the immutable table every render reads from: the
//! glyph variant, the palette and the rasterization mode. It serializes to
//! camelCase JSON so a run's exact settings can be printed and compared.
//!
//! ```
//! use netglyph::{RenderProfile, Variant};
//!
//! let profile = RenderProfile::new(Variant::HubSpokes);
//! let json = profile.to_json().unwrap();
//! let restored = RenderProfile::from_json(&json).unwrap();
//! assert_eq!(restored, profile);
//! ```

use serde::{Deserialize, Serialize};

use crate::colors::Palette;
use crate::design::Variant;

/// Everything a render depends on besides the pixel size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderProfile {
    /// Which glyph design to draw.
    #[serde(default)]
    pub variant: Variant,

    /// Colors for the background and accents.
    #[serde(default)]
    pub palette: Palette,

    /// Smooth shape edges. Off by default for crisp pixel output.
    #[serde(default)]
    pub anti_alias: bool,
}

impl Default for RenderProfile {
    fn default() -> Self {
        Self::new(Variant::default())
    }
}

impl RenderProfile {
    /// Creates a profile for `variant` with the default palette.
    pub fn new(variant: Variant) -> Self {
        Self {
            variant,
            palette: Palette::default(),
            anti_alias: false,
        }
    }

    pub fn with_anti_alias(mut self, anti_alias: bool) -> Self {
        self.anti_alias = anti_alias;
        self
    }

    /// Serializes the profile to a JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Serializes the profile to a pretty-printed JSON string.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserializes a profile from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_json_format() {
        let json = RenderProfile::new(Variant::HubSpokes)
            .with_anti_alias(true)
            .to_json_pretty()
            .unwrap();

        assert!(json.contains("\"variant\": \"hub-spokes\""));
        assert!(json.contains("\"antiAlias\": true"));
        assert!(json.contains("\"background\""));
    }

    #[test]
    fn empty_profile_deserializes_to_default() {
        let profile = RenderProfile::from_json("{}").unwrap();
        assert_eq!(profile, RenderProfile::default());
        assert_eq!(profile.variant, Variant::HexNetwork);
        assert!(!profile.anti_alias);
    }

    #[test]
    fn unknown_variant_is_rejected() {
        assert!(RenderProfile::from_json(r#"{"variant":"spiral"}"#).is_err());
    }
}
