//! Reel Theme System
//!
//! Light/dark theming for the Reel component library.
//!
//! # Overview
//!
//! The theme system provides:
//! - **Palettes**: two fixed color token sets, light and dark
//! - **Appearance resolution**: the user's `light | dark | system` choice plus
//!   the host's reported appearance decide which palette renders
//! - **Provider**: a mounted, subscribable owner of the current theme state
//!
//! # Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use reel_theme::{AppearanceSignal, ColorToken, SystemAppearance, ThemeConfig, ThemeProvider};
//!
//! // The platform layer feeds the OS appearance into a signal
//! let host = Arc::new(AppearanceSignal::new(SystemAppearance::Dark));
//!
//! // Mount a provider at the root of the component tree
//! let provider = ThemeProvider::mounted(ThemeConfig::default(), host);
//!
//! // Hand contexts to consumers
//! let theme = provider.context();
//! let primary = theme.color(ColorToken::Primary).unwrap();
//! assert_eq!(primary.to_css(), "#0A84FF");
//! ```
//!
//! # Tokens
//!
//! - [`ColorToken`]: semantic colors (primary, surface, text, destructive, ...)
//! - [`ShadowToken`]: elevation presets tinted by the palette's shadow color
//! - [`RadiusToken`]: corner radii shared by the components

pub mod appearance;
pub mod color;
pub mod config;
pub mod error;
pub mod host;
pub mod palette;
pub mod provider;
pub mod tokens;

// Re-export commonly used types
pub use appearance::{resolve_appearance, Appearance, AppearanceResolver, SystemAppearance, ThemeMode};
pub use color::Color;
pub use config::ThemeConfig;
pub use error::{Result, ThemeError};
pub use host::{AppearanceHost, AppearanceListener, AppearanceSignal, ListenerId};
pub use palette::Palette;
pub use provider::{SubscriptionId, ThemeCallback, ThemeContext, ThemeProvider, ThemeState};
pub use tokens::*;
