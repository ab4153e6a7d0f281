//! Shadow tokens for theming

use serde::{Deserialize, Serialize};

use crate::color::Color;

/// Semantic shadow token keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum ShadowToken {
    /// Barely-there lift used by search fields
    Hairline,
    /// Soft lift used by text inputs
    Subtle,
    /// Buttons and other pressables
    Raised,
    /// Content cards
    Card,
    /// Glass panels floating over content
    Floating,
    None,
}

/// A drop shadow in the host primitive's model
///
/// The tint comes from the palette (`shadow` token); `opacity` scales it and
/// `elevation` is the Android-style z height.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shadow {
    pub color: Color,
    pub offset_x: f32,
    pub offset_y: f32,
    pub opacity: f32,
    pub radius: f32,
    pub elevation: f32,
}

impl Shadow {
    pub const fn new(
        color: Color,
        offset_x: f32,
        offset_y: f32,
        opacity: f32,
        radius: f32,
        elevation: f32,
    ) -> Self {
        Self {
            color,
            offset_x,
            offset_y,
            opacity,
            radius,
            elevation,
        }
    }

    pub const fn none() -> Self {
        Self {
            color: Color::TRANSPARENT,
            offset_x: 0.0,
            offset_y: 0.0,
            opacity: 0.0,
            radius: 0.0,
            elevation: 0.0,
        }
    }

    /// Whether this shadow renders anything
    pub fn is_visible(&self) -> bool {
        self.opacity > 0.0 && self.color.a > 0.0
    }
}

impl Default for Shadow {
    fn default() -> Self {
        Self::none()
    }
}

impl ShadowToken {
    /// Build the shadow for this token, tinted with `color`
    pub fn shadow(self, color: Color) -> Shadow {
        match self {
            ShadowToken::Hairline => Shadow::new(color, 0.0, 1.0, 0.03, 4.0, 1.0),
            ShadowToken::Subtle => Shadow::new(color, 0.0, 2.0, 0.05, 8.0, 2.0),
            ShadowToken::Raised => Shadow::new(color, 0.0, 2.0, 0.1, 4.0, 2.0),
            ShadowToken::Card => Shadow::new(color, 0.0, 4.0, 0.1, 12.0, 4.0),
            ShadowToken::Floating => Shadow::new(color, 0.0, 8.0, 0.15, 24.0, 8.0),
            ShadowToken::None => Shadow::none(),
        }
    }
}
