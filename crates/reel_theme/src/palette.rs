//! Palette registry
//!
//! Exactly two palettes exist, light and dark, modelled on Apple's system
//! colors. Both are built once on first access and live for the rest of the
//! process. Every [`ColorToken`] is a struct field, so a token added to one
//! palette but not the other is a compile error rather than a runtime hole.

use std::sync::OnceLock;

use indexmap::IndexMap;

use crate::appearance::Appearance;
use crate::color::Color;
use crate::tokens::ColorToken;

static LIGHT: OnceLock<Palette> = OnceLock::new();
static DARK: OnceLock<Palette> = OnceLock::new();

/// Complete set of semantic color tokens for one appearance
#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
    // Brand colors
    pub primary: Color,
    pub secondary: Color,

    // Surface colors
    pub background: Color,
    pub surface: Color,
    pub surface_secondary: Color,
    pub surface_tertiary: Color,

    // Text colors
    pub text: Color,
    pub text_secondary: Color,
    pub text_tertiary: Color,

    // Border colors
    pub border: Color,
    pub border_secondary: Color,

    // Accent
    pub accent: Color,
    pub accent_secondary: Color,

    // Semantic colors
    pub destructive: Color,
    pub success: Color,
    pub warning: Color,

    // Glass
    pub glass: Color,
    pub glass_secondary: Color,

    // Shadows
    pub shadow: Color,
    pub shadow_secondary: Color,
}

impl Palette {
    /// The light palette
    pub fn light() -> &'static Palette {
        LIGHT.get_or_init(|| {
            tracing::trace!("building light palette");
            light_palette()
        })
    }

    /// The dark palette
    pub fn dark() -> &'static Palette {
        DARK.get_or_init(|| {
            tracing::trace!("building dark palette");
            dark_palette()
        })
    }

    /// Palette for a resolved appearance
    pub fn for_appearance(appearance: Appearance) -> &'static Palette {
        match appearance {
            Appearance::Light => Self::light(),
            Appearance::Dark => Self::dark(),
        }
    }

    /// Get a color by token key
    pub fn get(&self, token: ColorToken) -> Color {
        match token {
            ColorToken::Primary => self.primary,
            ColorToken::Secondary => self.secondary,
            ColorToken::Background => self.background,
            ColorToken::Surface => self.surface,
            ColorToken::SurfaceSecondary => self.surface_secondary,
            ColorToken::SurfaceTertiary => self.surface_tertiary,
            ColorToken::Text => self.text,
            ColorToken::TextSecondary => self.text_secondary,
            ColorToken::TextTertiary => self.text_tertiary,
            ColorToken::Border => self.border,
            ColorToken::BorderSecondary => self.border_secondary,
            ColorToken::Accent => self.accent,
            ColorToken::AccentSecondary => self.accent_secondary,
            ColorToken::Destructive => self.destructive,
            ColorToken::Success => self.success,
            ColorToken::Warning => self.warning,
            ColorToken::Glass => self.glass,
            ColorToken::GlassSecondary => self.glass_secondary,
            ColorToken::Shadow => self.shadow,
            ColorToken::ShadowSecondary => self.shadow_secondary,
        }
    }

    /// Iterate over every `(token, color)` pair in token order
    pub fn tokens(&self) -> impl Iterator<Item = (ColorToken, Color)> + '_ {
        ColorToken::ALL
            .iter()
            .map(move |&token| (token, self.get(token)))
    }

    /// Map of token name to CSS color string, in token order
    ///
    /// Useful for ad-hoc styling outside the component variants and for
    /// exporting the palette to a host stylesheet.
    pub fn to_css_variable_map(&self) -> IndexMap<&'static str, String> {
        self.tokens()
            .map(|(token, color)| (token.name(), color.to_css()))
            .collect()
    }
}

fn light_palette() -> Palette {
    Palette {
        primary: Color::from_hex(0x007AFF),
        secondary: Color::from_hex(0x5856D6),
        background: Color::WHITE,
        surface: Color::from_hex(0xF2F2F7),
        surface_secondary: Color::WHITE,
        surface_tertiary: Color::from_hex(0xE5E5EA),
        text: Color::BLACK,
        text_secondary: Color::from_hex(0x3C3C43),
        text_tertiary: Color::from_hex(0x3C3C4399),
        border: Color::from_hex(0xC6C6C8),
        border_secondary: Color::from_hex(0xE5E5EA),
        accent: Color::from_hex(0xFF9500),
        accent_secondary: Color::from_hex(0xFF3B30),
        destructive: Color::from_hex(0xFF3B30),
        success: Color::from_hex(0x34C759),
        warning: Color::from_hex(0xFF9500),
        glass: Color::WHITE.with_alpha(0.8),
        glass_secondary: Color::WHITE.with_alpha(0.6),
        shadow: Color::BLACK.with_alpha(0.1),
        shadow_secondary: Color::BLACK.with_alpha(0.05),
    }
}

fn dark_palette() -> Palette {
    // Elevated gray used under the dark glass
    let gray6 = Color::from_hex(0x1C1C1E);

    Palette {
        primary: Color::from_hex(0x0A84FF),
        secondary: Color::from_hex(0x5E5CE6),
        background: Color::BLACK,
        surface: gray6,
        surface_secondary: Color::from_hex(0x2C2C2E),
        surface_tertiary: Color::from_hex(0x3A3A3C),
        text: Color::WHITE,
        text_secondary: Color::from_hex(0xEBEBF5),
        text_tertiary: Color::from_hex(0xEBEBF599),
        border: Color::from_hex(0x38383A),
        border_secondary: Color::from_hex(0x48484A),
        accent: Color::from_hex(0xFF9F0A),
        accent_secondary: Color::from_hex(0xFF453A),
        destructive: Color::from_hex(0xFF453A),
        success: Color::from_hex(0x30D158),
        warning: Color::from_hex(0xFF9F0A),
        glass: gray6.with_alpha(0.8),
        glass_secondary: gray6.with_alpha(0.6),
        shadow: Color::BLACK.with_alpha(0.3),
        shadow_secondary: Color::BLACK.with_alpha(0.2),
    }
}
