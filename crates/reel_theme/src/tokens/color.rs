//! Color tokens for theming

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Semantic color token keys for dynamic access
///
/// The set is closed: every token has a value in both the light and the dark
/// [`Palette`](crate::Palette).
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ColorToken {
    // Brand colors
    Primary,
    Secondary,

    // Surface colors
    Background,
    Surface,
    SurfaceSecondary,
    SurfaceTertiary,

    // Text colors
    Text,
    TextSecondary,
    TextTertiary,

    // Border colors
    Border,
    BorderSecondary,

    // Accent
    Accent,
    AccentSecondary,

    // Semantic colors
    Destructive,
    Success,
    Warning,

    // Translucent glass surfaces
    Glass,
    GlassSecondary,

    // Shadow tints
    Shadow,
    ShadowSecondary,
}

impl ColorToken {
    /// Every token, in declaration order
    pub const ALL: [ColorToken; 20] = [
        ColorToken::Primary,
        ColorToken::Secondary,
        ColorToken::Background,
        ColorToken::Surface,
        ColorToken::SurfaceSecondary,
        ColorToken::SurfaceTertiary,
        ColorToken::Text,
        ColorToken::TextSecondary,
        ColorToken::TextTertiary,
        ColorToken::Border,
        ColorToken::BorderSecondary,
        ColorToken::Accent,
        ColorToken::AccentSecondary,
        ColorToken::Destructive,
        ColorToken::Success,
        ColorToken::Warning,
        ColorToken::Glass,
        ColorToken::GlassSecondary,
        ColorToken::Shadow,
        ColorToken::ShadowSecondary,
    ];

    /// Stable camelCase name, used as the CSS variable / config key
    pub fn name(self) -> &'static str {
        match self {
            ColorToken::Primary => "primary",
            ColorToken::Secondary => "secondary",
            ColorToken::Background => "background",
            ColorToken::Surface => "surface",
            ColorToken::SurfaceSecondary => "surfaceSecondary",
            ColorToken::SurfaceTertiary => "surfaceTertiary",
            ColorToken::Text => "text",
            ColorToken::TextSecondary => "textSecondary",
            ColorToken::TextTertiary => "textTertiary",
            ColorToken::Border => "border",
            ColorToken::BorderSecondary => "borderSecondary",
            ColorToken::Accent => "accent",
            ColorToken::AccentSecondary => "accentSecondary",
            ColorToken::Destructive => "destructive",
            ColorToken::Success => "success",
            ColorToken::Warning => "warning",
            ColorToken::Glass => "glass",
            ColorToken::GlassSecondary => "glassSecondary",
            ColorToken::Shadow => "shadow",
            ColorToken::ShadowSecondary => "shadowSecondary",
        }
    }

    /// Look a token up by its camelCase name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|token| token.name() == name)
    }
}

impl fmt::Display for ColorToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a token name is not part of the closed set
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownColorToken(pub String);

impl fmt::Display for UnknownColorToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown color token `{}`", self.0)
    }
}

impl std::error::Error for UnknownColorToken {}

impl FromStr for ColorToken {
    type Err = UnknownColorToken;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| UnknownColorToken(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_all_is_complete_and_unique() {
        let names: HashSet<&str> = ColorToken::ALL.iter().map(|t| t.name()).collect();
        assert_eq!(names.len(), ColorToken::ALL.len());
    }

    #[test]
    fn test_names_round_trip() {
        for token in ColorToken::ALL {
            assert_eq!(token.name().parse::<ColorToken>(), Ok(token));
        }
        assert!("tint".parse::<ColorToken>().is_err());
    }

    #[test]
    fn test_serde_name_matches_name() {
        for token in ColorToken::ALL {
            let json = serde_json::to_string(&token).unwrap();
            assert_eq!(json, format!("\"{}\"", token.name()));
        }
    }
}
