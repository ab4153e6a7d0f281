//! Theme toggle - cycles light, dark, and system modes
//!
//! Shows an icon badge for the current mode, a short label, and a caption
//! describing what is actually rendered. Pressing it advances the provider's
//! mode.

use reel_theme::{Palette, RadiusToken, ThemeContext, ThemeMode, ThemeState};

use crate::components::text::{TextSize, TextSpec, TextVariant, TextWeight};
use crate::style::StyleFragment;
use crate::variant::VariantSpec;

/// Opacity of the toggle while pressed
pub const PRESSED_OPACITY: f32 = 0.7;

/// Side length of the icon badge
pub const BADGE_SIZE: f32 = 48.0;

/// Icon shown for a mode
pub fn mode_icon(mode: ThemeMode) -> &'static str {
    match mode {
        ThemeMode::Light => "☀️",
        ThemeMode::Dark => "🌙",
        ThemeMode::System => "🔄",
    }
}

/// Short label shown for a mode
pub fn mode_label(mode: ThemeMode) -> &'static str {
    match mode {
        ThemeMode::Light => "Light",
        ThemeMode::Dark => "Dark",
        ThemeMode::System => "Auto",
    }
}

/// A theme toggle resolved for one theme state
#[derive(Clone, Debug, PartialEq)]
pub struct ThemeToggle {
    pub mode: ThemeMode,
    pub icon: &'static str,
    pub label: &'static str,
    pub caption: String,
    pub badge: StyleFragment,
    /// Badge while held down
    pub pressed_badge: StyleFragment,
    pub label_style: StyleFragment,
    pub caption_style: StyleFragment,
}

impl ThemeToggle {
    pub fn from_state(state: &ThemeState) -> Self {
        let palette = state.palette;
        let caption = match state.mode {
            ThemeMode::System => format!("Using {}", state.effective),
            ThemeMode::Light => "Light mode".to_string(),
            ThemeMode::Dark => "Dark mode".to_string(),
        };

        let badge = badge_style(palette);
        Self {
            mode: state.mode,
            icon: mode_icon(state.mode),
            label: mode_label(state.mode),
            caption,
            pressed_badge: badge.clone().opacity(PRESSED_OPACITY),
            badge,
            label_style: TextSpec::resolve_weighted(
                TextVariant::Default,
                TextSize::Base,
                TextWeight::Medium,
                palette,
            ),
            caption_style: TextSpec::resolve(TextVariant::Default, TextSize::Sm, palette)
                .color(palette.text_tertiary),
        }
    }

    /// Resolve against the provider's current state
    pub fn render(theme: &ThemeContext) -> reel_theme::Result<Self> {
        Ok(Self::from_state(&theme.state()?))
    }

    /// Advance to the next mode and return the toggle for the new state
    pub fn press(theme: &ThemeContext) -> reel_theme::Result<Self> {
        let state = theme.cycle_mode()?;
        tracing::debug!("theme toggle pressed, mode is now {}", state.mode);
        Ok(Self::from_state(&state))
    }
}

fn badge_style(palette: &Palette) -> StyleFragment {
    StyleFragment::new()
        .w(BADGE_SIZE)
        .h(BADGE_SIZE)
        .rounded(RadiusToken::Full.get())
        .background(palette.glass)
        .border(1.0, palette.border)
}
