//! Card component - elevated content container
//!
//! Cards come in a plain surface style, a translucent glass style, and a
//! fixed-width movie poster style. Header, content, and footer sections share
//! the card's horizontal padding so their edges line up.

use reel_theme::{Palette, RadiusToken, ShadowToken, ThemeContext};

use crate::style::{Edges, StyleFragment};
use crate::variant::{selector, ComponentFamily, Selector, VariantSpec};

/// Width of a movie card
pub const MOVIE_CARD_WIDTH: f32 = 160.0;

/// Height of the poster area inside a movie card
pub const MOVIE_POSTER_HEIGHT: f32 = 224.0;

/// Opacity of a movie card while pressed
pub const MOVIE_PRESSED_OPACITY: f32 = 0.9;

selector! {
    /// Card visual variants
    pub enum CardVariant {
        /// Solid surface with border and shadow
        #[default]
        Default => "default",
        /// Translucent glass panel
        Glass => "glass",
        /// Fixed-width poster card
        Movie => "movie",
    }
}

selector! {
    /// Card padding scale
    pub enum CardSize {
        #[default]
        Default => "default",
        Compact => "compact",
        Spacious => "spacious",
    }
}

impl CardSize {
    /// Section padding in points
    pub fn padding(self) -> f32 {
        match self {
            CardSize::Compact => 16.0,
            CardSize::Default => 24.0,
            CardSize::Spacious => 32.0,
        }
    }
}

/// Card sections
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CardSection {
    Header,
    Content,
    Footer,
}

/// Style rules for cards
pub struct CardSpec;

impl VariantSpec for CardSpec {
    type Variant = CardVariant;
    type Size = CardSize;

    const FAMILY: ComponentFamily = ComponentFamily::Card;

    fn base(palette: &Palette) -> StyleFragment {
        StyleFragment::new()
            .background(palette.surface)
            .rounded(RadiusToken::Lg.get())
            .border(1.0, palette.border)
            .shadow(ShadowToken::Card.shadow(palette.shadow))
    }

    // Padding lives on the sections, the container only carries the scale
    fn size_style(_size: CardSize, _palette: &Palette) -> StyleFragment {
        StyleFragment::new()
    }

    fn variant_style(variant: CardVariant, palette: &Palette) -> StyleFragment {
        match variant {
            CardVariant::Default => StyleFragment::new(),
            CardVariant::Glass => StyleFragment::new()
                .background(palette.glass)
                .rounded(RadiusToken::Xl.get())
                .border(1.0, palette.border_secondary)
                .shadow(ShadowToken::Floating.shadow(palette.shadow)),
            CardVariant::Movie => StyleFragment::new().w(MOVIE_CARD_WIDTH),
        }
    }
}

impl CardSpec {
    /// Padding for a card section at the given size
    pub fn section_style(section: CardSection, size: CardSize) -> StyleFragment {
        let p = size.padding();
        let padding = match section {
            CardSection::Header => Edges::new(p, p, p / 2.0, p),
            CardSection::Content => Edges::new(0.0, p, p, p),
            CardSection::Footer => Edges::new(0.0, p, p, p),
        };
        StyleFragment::new().padding(padding)
    }

    /// Poster image area at the top of a movie card
    pub fn poster_style() -> StyleFragment {
        StyleFragment::new()
            .w(MOVIE_CARD_WIDTH)
            .h(MOVIE_POSTER_HEIGHT)
            .rounded(RadiusToken::Lg.get())
    }
}

/// A card with container and section styles resolved
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedCard {
    pub variant: CardVariant,
    pub size: CardSize,
    pub container: StyleFragment,
    pub header: StyleFragment,
    pub content: StyleFragment,
    pub footer: StyleFragment,
    /// Poster image area (movie cards)
    pub poster: Option<StyleFragment>,
    /// Container while held down (movie cards)
    pub pressed: Option<StyleFragment>,
}

/// Card builder
#[derive(Clone, Debug, Default)]
pub struct Card {
    variant: CardVariant,
    size: CardSize,
}

impl Card {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn variant(mut self, variant: CardVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn variant_named(self, name: &str) -> Self {
        self.variant(CardVariant::from_name_or_default(name))
    }

    pub fn size(mut self, size: CardSize) -> Self {
        self.size = size;
        self
    }

    pub fn size_named(self, name: &str) -> Self {
        self.size(CardSize::from_name_or_default(name))
    }

    pub fn resolve(self, palette: &Palette) -> ResolvedCard {
        let container = CardSpec::resolve(self.variant, self.size, palette);
        let (poster, pressed) = match self.variant {
            CardVariant::Movie => (
                Some(CardSpec::poster_style()),
                Some(container.clone().opacity(MOVIE_PRESSED_OPACITY)),
            ),
            CardVariant::Default | CardVariant::Glass => (None, None),
        };

        ResolvedCard {
            variant: self.variant,
            size: self.size,
            container,
            header: CardSpec::section_style(CardSection::Header, self.size),
            content: CardSpec::section_style(CardSection::Content, self.size),
            footer: CardSpec::section_style(CardSection::Footer, self.size),
            poster,
            pressed,
        }
    }

    pub fn render(self, theme: &ThemeContext) -> reel_theme::Result<ResolvedCard> {
        Ok(self.resolve(theme.colors()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_card() {
        let palette = Palette::light();
        let style = CardSpec::resolve(CardVariant::Default, CardSize::Default, palette);

        assert_eq!(style.background_color, Some(palette.surface));
        assert_eq!(style.border_radius, Some(16.0));
        assert_eq!(style.border_color, Some(palette.border));
        assert_eq!(style.shadow, Some(ShadowToken::Card.shadow(palette.shadow)));
    }

    #[test]
    fn test_glass_card() {
        let palette = Palette::dark();
        let style = CardSpec::resolve(CardVariant::Glass, CardSize::Default, palette);

        assert_eq!(style.background_color, Some(palette.glass));
        assert_eq!(style.border_radius, Some(20.0));
        assert_eq!(style.border_color, Some(palette.border_secondary));
        assert_eq!(style.shadow.map(|s| s.elevation), Some(8.0));
    }

    #[test]
    fn test_movie_card_keeps_surface() {
        let palette = Palette::light();
        let style = CardSpec::resolve(CardVariant::Movie, CardSize::Compact, palette);
        assert_eq!(style.width, Some(MOVIE_CARD_WIDTH));
        assert_eq!(style.background_color, Some(palette.surface));
    }

    #[test]
    fn test_movie_card_poster_and_press() {
        let palette = Palette::dark();
        let card = Card::new().variant(CardVariant::Movie).resolve(palette);

        let poster = card.poster.expect("movie cards have a poster");
        assert_eq!(poster.width, Some(MOVIE_CARD_WIDTH));
        assert_eq!(poster.height, Some(MOVIE_POSTER_HEIGHT));

        let pressed = card.pressed.expect("movie cards have a pressed style");
        assert_eq!(pressed.opacity, Some(MOVIE_PRESSED_OPACITY));
        assert_eq!(pressed.background_color, card.container.background_color);
    }

    #[test]
    fn test_plain_cards_have_no_poster() {
        let card = Card::new().variant_named("glass").resolve(Palette::light());
        assert_eq!(card.poster, None);
        assert_eq!(card.pressed, None);
    }

    #[test]
    fn test_sections_share_horizontal_padding() {
        let card = Card::new().size(CardSize::Spacious).resolve(Palette::light());

        assert_eq!(card.header.padding, Some(Edges::new(32.0, 32.0, 16.0, 32.0)));
        assert_eq!(card.content.padding, Some(Edges::new(0.0, 32.0, 32.0, 32.0)));
        assert_eq!(card.footer.padding, card.content.padding);
    }
}
