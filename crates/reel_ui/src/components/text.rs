//! Text component - themed typography

use reel_theme::{Palette, ThemeContext};

use crate::style::{StyleFragment, SYSTEM_FONT};
use crate::variant::{selector, ComponentFamily, Selector, VariantSpec};

selector! {
    /// Text color variants
    pub enum TextVariant {
        /// Primary text color
        #[default]
        Default => "default",
        /// Secondary text color
        Muted => "muted",
        /// Brand color
        Accent => "accent",
        Destructive => "destructive",
        Success => "success",
        Warning => "warning",
    }
}

selector! {
    /// Type scale
    pub enum TextSize {
        Xs => "xs",
        Sm => "sm",
        #[default]
        Base => "base",
        Lg => "lg",
        Xl => "xl",
        Xl2 => "2xl",
        Xl3 => "3xl",
        Xl4 => "4xl",
        Xl5 => "5xl",
    }
}

selector! {
    /// Font weights
    pub enum TextWeight {
        Light => "light",
        #[default]
        Normal => "normal",
        Medium => "medium",
        Semibold => "semibold",
        Bold => "bold",
        Black => "black",
    }
}

impl TextSize {
    /// `(font size, line height)` in points
    pub fn metrics(self) -> (f32, f32) {
        match self {
            TextSize::Xs => (12.0, 16.0),
            TextSize::Sm => (14.0, 20.0),
            TextSize::Base => (16.0, 24.0),
            TextSize::Lg => (18.0, 28.0),
            TextSize::Xl => (20.0, 28.0),
            TextSize::Xl2 => (24.0, 32.0),
            TextSize::Xl3 => (30.0, 36.0),
            TextSize::Xl4 => (36.0, 40.0),
            TextSize::Xl5 => (48.0, 48.0),
        }
    }
}

impl TextWeight {
    /// Numeric CSS weight
    pub fn value(self) -> u16 {
        match self {
            TextWeight::Light => 300,
            TextWeight::Normal => 400,
            TextWeight::Medium => 500,
            TextWeight::Semibold => 600,
            TextWeight::Bold => 700,
            TextWeight::Black => 900,
        }
    }
}

/// Style rules for text
pub struct TextSpec;

impl VariantSpec for TextSpec {
    type Variant = TextVariant;
    type Size = TextSize;

    const FAMILY: ComponentFamily = ComponentFamily::Text;

    fn base(_palette: &Palette) -> StyleFragment {
        StyleFragment::new()
            .font_family(SYSTEM_FONT)
            .font_weight(TextWeight::default().value())
    }

    fn size_style(size: TextSize, _palette: &Palette) -> StyleFragment {
        let (font_size, line_height) = size.metrics();
        StyleFragment::new()
            .font_size(font_size)
            .line_height(line_height)
    }

    fn variant_style(variant: TextVariant, palette: &Palette) -> StyleFragment {
        let color = match variant {
            TextVariant::Default => palette.text,
            TextVariant::Muted => palette.text_secondary,
            TextVariant::Accent => palette.primary,
            TextVariant::Destructive => palette.destructive,
            TextVariant::Success => palette.success,
            TextVariant::Warning => palette.warning,
        };
        StyleFragment::new().color(color)
    }
}

impl TextSpec {
    /// Resolve with an explicit weight layered between size and variant
    pub fn resolve_weighted(
        variant: TextVariant,
        size: TextSize,
        weight: TextWeight,
        palette: &Palette,
    ) -> StyleFragment {
        Self::base(palette)
            .merge(&Self::size_style(size, palette))
            .merge(&StyleFragment::new().font_weight(weight.value()))
            .merge(&Self::variant_style(variant, palette))
    }
}

/// Text with its style resolved against a palette
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedText {
    pub content: String,
    pub style: StyleFragment,
}

/// Text builder
#[derive(Clone, Debug)]
pub struct Text {
    content: String,
    variant: TextVariant,
    size: TextSize,
    weight: TextWeight,
}

impl Text {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            variant: TextVariant::default(),
            size: TextSize::default(),
            weight: TextWeight::default(),
        }
    }

    pub fn variant(mut self, variant: TextVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn variant_named(self, name: &str) -> Self {
        self.variant(TextVariant::from_name_or_default(name))
    }

    pub fn size(mut self, size: TextSize) -> Self {
        self.size = size;
        self
    }

    pub fn size_named(self, name: &str) -> Self {
        self.size(TextSize::from_name_or_default(name))
    }

    pub fn weight(mut self, weight: TextWeight) -> Self {
        self.weight = weight;
        self
    }

    pub fn weight_named(self, name: &str) -> Self {
        self.weight(TextWeight::from_name_or_default(name))
    }

    pub fn resolve(self, palette: &Palette) -> ResolvedText {
        ResolvedText {
            style: TextSpec::resolve_weighted(self.variant, self.size, self.weight, palette),
            content: self.content,
        }
    }

    pub fn render(self, theme: &ThemeContext) -> reel_theme::Result<ResolvedText> {
        Ok(self.resolve(theme.colors()?))
    }
}
