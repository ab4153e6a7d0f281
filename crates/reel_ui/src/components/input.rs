//! Input component - themed text field
//!
//! Fields may carry a leading and/or trailing adornment (an icon). The
//! adorned side gets extra horizontal padding so text never runs under the
//! icon.

use reel_theme::{Color, Palette, RadiusToken, ShadowToken, ThemeContext};

use crate::style::{Edges, StyleFragment, SYSTEM_FONT};
use crate::variant::{selector, ComponentFamily, Selector, VariantSpec};

selector! {
    /// Input visual variants
    pub enum InputVariant {
        /// Bordered surface field
        #[default]
        Default => "default",
        /// Pill-shaped search field
        Search => "search",
    }
}

selector! {
    /// Input sizes
    pub enum InputSize {
        #[default]
        Default => "default",
        Small => "sm",
        Large => "lg",
    }
}

impl InputVariant {
    /// Horizontal padding without an adornment
    pub fn inset(self) -> f32 {
        match self {
            InputVariant::Default => 16.0,
            InputVariant::Search => 20.0,
        }
    }

    /// Horizontal padding on an adorned side
    pub fn adornment_inset(self) -> f32 {
        match self {
            InputVariant::Default => 48.0,
            InputVariant::Search => 44.0,
        }
    }
}

/// Which sides of a field carry an adornment
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Adornments {
    pub leading: bool,
    pub trailing: bool,
}

/// Style rules for inputs
pub struct InputSpec;

impl VariantSpec for InputSpec {
    type Variant = InputVariant;
    type Size = InputSize;

    const FAMILY: ComponentFamily = ComponentFamily::Input;

    fn base(palette: &Palette) -> StyleFragment {
        StyleFragment::new()
            .background(palette.surface)
            .rounded(RadiusToken::Md.get())
            .border(1.0, palette.border)
            .shadow(ShadowToken::Subtle.shadow(palette.shadow))
            .color(palette.text)
            .font_family(SYSTEM_FONT)
            .padding(Edges::symmetric(InputVariant::Default.inset(), 0.0))
    }

    fn size_style(size: InputSize, _palette: &Palette) -> StyleFragment {
        let style = StyleFragment::new();
        match size {
            InputSize::Small => style.h(44.0).font_size(14.0),
            InputSize::Default => style.h(52.0).font_size(16.0),
            InputSize::Large => style.h(60.0).font_size(18.0),
        }
    }

    fn variant_style(variant: InputVariant, palette: &Palette) -> StyleFragment {
        match variant {
            InputVariant::Default => StyleFragment::new(),
            InputVariant::Search => StyleFragment::new()
                .background(palette.surface_secondary)
                .rounded(RadiusToken::Xxl.get())
                .border(1.0, palette.border_secondary)
                .shadow(ShadowToken::Hairline.shadow(palette.shadow))
                .h(48.0)
                .padding(Edges::symmetric(InputVariant::Search.inset(), 0.0)),
        }
    }
}

impl InputSpec {
    /// Resolve a field style, widening padding on adorned sides
    pub fn resolve_adorned(
        variant: InputVariant,
        size: InputSize,
        adornments: Adornments,
        palette: &Palette,
    ) -> StyleFragment {
        let mut style = Self::resolve(variant, size, palette);
        if let Some(padding) = style.padding.as_mut() {
            if adornments.leading {
                padding.left = variant.adornment_inset();
            }
            if adornments.trailing {
                padding.right = variant.adornment_inset();
            }
        }
        style
    }

    /// Placeholder text color
    pub fn placeholder_color(palette: &Palette) -> Color {
        palette.text_tertiary
    }
}

/// An input with its styles resolved against a palette
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedInput {
    pub variant: InputVariant,
    pub size: InputSize,
    pub style: StyleFragment,
    pub placeholder: Option<String>,
    pub placeholder_color: Color,
    pub adornments: Adornments,
}

/// Input builder
#[derive(Clone, Debug, Default)]
pub struct Input {
    variant: InputVariant,
    size: InputSize,
    placeholder: Option<String>,
    adornments: Adornments,
}

impl Input {
    pub fn new() -> Self {
        Self::default()
    }

    /// A search field
    pub fn search() -> Self {
        Self::new().variant(InputVariant::Search)
    }

    pub fn variant(mut self, variant: InputVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn variant_named(self, name: &str) -> Self {
        self.variant(InputVariant::from_name_or_default(name))
    }

    pub fn size(mut self, size: InputSize) -> Self {
        self.size = size;
        self
    }

    pub fn size_named(self, name: &str) -> Self {
        self.size(InputSize::from_name_or_default(name))
    }

    pub fn placeholder(mut self, text: impl Into<String>) -> Self {
        self.placeholder = Some(text.into());
        self
    }

    pub fn leading_icon(mut self) -> Self {
        self.adornments.leading = true;
        self
    }

    pub fn trailing_icon(mut self) -> Self {
        self.adornments.trailing = true;
        self
    }

    pub fn resolve(self, palette: &Palette) -> ResolvedInput {
        ResolvedInput {
            variant: self.variant,
            size: self.size,
            style: InputSpec::resolve_adorned(self.variant, self.size, self.adornments, palette),
            placeholder: self.placeholder,
            placeholder_color: InputSpec::placeholder_color(palette),
            adornments: self.adornments,
        }
    }

    pub fn render(self, theme: &ThemeContext) -> reel_theme::Result<ResolvedInput> {
        Ok(self.resolve(theme.colors()?))
    }
}
