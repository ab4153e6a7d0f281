//! Button component - pressable action with eight visual variants
//!
//! # Example
//!
//! ```
//! use reel_theme::Palette;
//! use reel_ui::prelude::*;
//!
//! let button = button("Play")
//!     .variant(ButtonVariant::Outline)
//!     .size(ButtonSize::Large)
//!     .resolve(Palette::light());
//!
//! assert_eq!(button.container.height, Some(56.0));
//! assert_eq!(button.container.border_color, Some(Palette::light().border));
//! ```

use reel_theme::{Color, Palette, RadiusToken, ShadowToken, ThemeContext};

use crate::label::{RenderedLabel, ResolvedLabel};
use crate::style::{Edges, StyleFragment, SYSTEM_FONT};
use crate::variant::{selector, ComponentFamily, Selector, VariantSpec};

/// Opacity of a disabled button
pub const DISABLED_OPACITY: f32 = 0.6;

selector! {
    /// Button visual variants
    pub enum ButtonVariant {
        /// Primary fill
        #[default]
        Default => "default",
        Destructive => "destructive",
        /// Transparent with a border
        Outline => "outline",
        Secondary => "secondary",
        /// Transparent, no border or shadow
        Ghost => "ghost",
        Gradient => "gradient",
        Filled => "filled",
        /// Translucent glass with backdrop blur
        Tinted => "tinted",
    }
}

selector! {
    /// Button sizes
    pub enum ButtonSize {
        /// 48px tall
        #[default]
        Default => "default",
        /// 40px tall
        Small => "sm",
        /// 56px tall
        Large => "lg",
        /// 48px square
        Icon => "icon",
        /// 64px tall
        ExtraLarge => "large",
    }
}

/// Style rules for buttons
pub struct ButtonSpec;

impl VariantSpec for ButtonSpec {
    type Variant = ButtonVariant;
    type Size = ButtonSize;

    const FAMILY: ComponentFamily = ComponentFamily::Button;

    fn base(palette: &Palette) -> StyleFragment {
        StyleFragment::new()
            .rounded(RadiusToken::Lg.get())
            .shadow(ShadowToken::Raised.shadow(palette.shadow))
    }

    fn size_style(size: ButtonSize, _palette: &Palette) -> StyleFragment {
        let style = StyleFragment::new();
        match size {
            ButtonSize::Default => style.h(48.0).padding(Edges::symmetric(24.0, 12.0)),
            ButtonSize::Small => style.h(40.0).padding(Edges::symmetric(16.0, 8.0)),
            ButtonSize::Large => style.h(56.0).padding(Edges::symmetric(32.0, 16.0)),
            ButtonSize::Icon => style.h(48.0).w(48.0).padding(Edges::ZERO),
            ButtonSize::ExtraLarge => style.h(64.0).padding(Edges::symmetric(40.0, 20.0)),
        }
    }

    fn variant_style(variant: ButtonVariant, palette: &Palette) -> StyleFragment {
        let style = StyleFragment::new();
        match variant {
            ButtonVariant::Default | ButtonVariant::Gradient => style.background(palette.primary),
            ButtonVariant::Destructive => style.background(palette.destructive),
            ButtonVariant::Outline => style
                .background(Color::TRANSPARENT)
                .border(1.0, palette.border),
            ButtonVariant::Secondary | ButtonVariant::Filled => style.background(palette.surface),
            ButtonVariant::Ghost => style
                .background(Color::TRANSPARENT)
                .shadow(ShadowToken::None.shadow(palette.shadow)),
            ButtonVariant::Tinted => style.background(palette.glass).backdrop_blur(20.0),
        }
    }
}

impl ButtonSpec {
    /// Style of a text label inside a button
    pub fn label_style(variant: ButtonVariant, size: ButtonSize, palette: &Palette) -> StyleFragment {
        let color = match variant {
            ButtonVariant::Default | ButtonVariant::Destructive | ButtonVariant::Gradient => {
                Color::WHITE
            }
            ButtonVariant::Outline | ButtonVariant::Ghost => palette.primary,
            ButtonVariant::Secondary | ButtonVariant::Filled | ButtonVariant::Tinted => {
                palette.text
            }
        };
        let font_size = match size {
            ButtonSize::Small => 14.0,
            ButtonSize::Large | ButtonSize::ExtraLarge => 18.0,
            ButtonSize::Default | ButtonSize::Icon => 16.0,
        };

        StyleFragment::new()
            .color(color)
            .font_size(font_size)
            .font_weight(600)
            .font_family(SYSTEM_FONT)
    }
}

/// A button with its styles resolved against a palette
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedButton<C = ()> {
    pub variant: ButtonVariant,
    pub size: ButtonSize,
    pub container: StyleFragment,
    pub label: ResolvedLabel<C>,
    pub disabled: bool,
}

/// Button builder
#[derive(Clone, Debug)]
pub struct Button<C = ()> {
    label: RenderedLabel<C>,
    variant: ButtonVariant,
    size: ButtonSize,
    disabled: bool,
}

impl Button {
    /// Create a button with a text label
    pub fn new(label: impl Into<String>) -> Self {
        Self::with_label(RenderedLabel::Text(label.into()))
    }
}

impl<C> Button<C> {
    /// Create a button around caller-provided content
    pub fn custom(content: C) -> Self {
        Self::with_label(RenderedLabel::Custom(content))
    }

    fn with_label(label: RenderedLabel<C>) -> Self {
        Self {
            label,
            variant: ButtonVariant::default(),
            size: ButtonSize::default(),
            disabled: false,
        }
    }

    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Set the variant by name; unknown names keep the default look
    pub fn variant_named(self, name: &str) -> Self {
        self.variant(ButtonVariant::from_name_or_default(name))
    }

    pub fn size(mut self, size: ButtonSize) -> Self {
        self.size = size;
        self
    }

    pub fn size_named(self, name: &str) -> Self {
        self.size(ButtonSize::from_name_or_default(name))
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn resolve(self, palette: &Palette) -> ResolvedButton<C> {
        let Button {
            label,
            variant,
            size,
            disabled,
        } = self;

        let mut container = ButtonSpec::resolve(variant, size, palette);
        if disabled {
            container = container.opacity(DISABLED_OPACITY);
        }

        ResolvedButton {
            variant,
            size,
            container,
            label: label.resolve(|| ButtonSpec::label_style(variant, size, palette)),
            disabled,
        }
    }

    /// Resolve against the theme's current palette
    pub fn render(self, theme: &ThemeContext) -> reel_theme::Result<ResolvedButton<C>> {
        Ok(self.resolve(theme.colors()?))
    }
}
