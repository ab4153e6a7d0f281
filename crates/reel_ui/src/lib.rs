//! Reel UI Components
//!
//! Themed button, text, card, and input families for the Reel app. Each
//! family maps a `(variant, size)` choice plus the active palette to a
//! concrete [`StyleFragment`] that a rendering primitive can apply directly.
//!
//! # Usage
//!
//! ```
//! use std::sync::Arc;
//! use reel_theme::{AppearanceSignal, SystemAppearance, ThemeConfig, ThemeProvider};
//! use reel_ui::prelude::*;
//!
//! let host = Arc::new(AppearanceSignal::new(SystemAppearance::Light));
//! let provider = ThemeProvider::mounted(ThemeConfig::default(), host);
//! let theme = provider.context();
//!
//! let play = button("Play").variant(ButtonVariant::Default).render(&theme).unwrap();
//! let title = text("Dune: Part Two").size(TextSize::Xl2).render(&theme).unwrap();
//!
//! assert_eq!(play.container.height, Some(48.0));
//! assert_eq!(title.style.font_size, Some(24.0));
//! ```
//!
//! # Resolution by name
//!
//! Variant and size names arriving from untyped sources resolve through
//! [`ComponentFamily::resolve_style`]. Unknown names render as the family's
//! default variant or size.

pub mod variant;

pub mod components;
pub mod label;
pub mod style;

pub use components::*;
pub use label::{RenderedLabel, ResolvedLabel};
pub use style::{Edges, StyleFragment, StyleValue, SYSTEM_FONT};
pub use variant::{ComponentFamily, Selector, UnknownFamily, VariantSpec};

/// Create a button with a text label
pub fn button(label: impl Into<String>) -> Button {
    Button::new(label)
}

pub fn text(content: impl Into<String>) -> Text {
    Text::new(content)
}

pub fn card() -> Card {
    Card::new()
}

pub fn input() -> Input {
    Input::new()
}

/// Common imports
pub mod prelude {
    pub use crate::components::*;
    pub use crate::variant::{ComponentFamily, Selector, VariantSpec};
    pub use crate::{button, card, input, text};
    pub use crate::{Edges, RenderedLabel, ResolvedLabel, StyleFragment};
}
