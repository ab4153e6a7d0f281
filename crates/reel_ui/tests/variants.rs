use std::sync::Arc;

use pretty_assertions::assert_eq;
use reel_theme::{
    AppearanceSignal, Palette, SystemAppearance, ThemeConfig, ThemeError, ThemeMode,
    ThemeProvider,
};
use reel_ui::prelude::*;

#[test]
fn default_button_background_is_primary_in_both_palettes() {
    for palette in [Palette::light(), Palette::dark()] {
        let style = ComponentFamily::Button.resolve_style("default", "default", palette);
        assert_eq!(style.background_color, Some(palette.primary));
    }
    assert_ne!(Palette::light().primary, Palette::dark().primary);
}

#[test]
fn destructive_text_uses_destructive_color() {
    for palette in [Palette::light(), Palette::dark()] {
        let style = ComponentFamily::Text.resolve_style("destructive", "base", palette);
        assert_eq!(style.color, Some(palette.destructive));
    }
}

#[test]
fn unknown_names_resolve_as_defaults() {
    let palette = Palette::light();
    let cases = [
        (
            ComponentFamily::Button,
            ButtonSpec::resolve(ButtonVariant::default(), ButtonSize::default(), palette),
        ),
        (
            ComponentFamily::Text,
            TextSpec::resolve(TextVariant::default(), TextSize::default(), palette),
        ),
        (
            ComponentFamily::Card,
            CardSpec::resolve(CardVariant::default(), CardSize::default(), palette),
        ),
        (
            ComponentFamily::Input,
            InputSpec::resolve(InputVariant::default(), InputSize::default(), palette),
        ),
    ];

    for (family, defaults) in cases {
        assert_eq!(family.resolve_style("holographic", "xxxl", palette), defaults, "family={family}");
        assert_eq!(family.resolve_style("", "", palette), defaults, "family={family}");
    }
}

#[test]
fn resolution_is_pure() {
    for family in ComponentFamily::ALL {
        for variant in family.variants() {
            for size in family.sizes() {
                for palette in [Palette::light(), Palette::dark()] {
                    assert_eq!(
                        family.resolve_style(variant, size, palette),
                        family.resolve_style(variant, size, palette),
                        "family={family} variant={variant} size={size}"
                    );
                }
            }
        }
    }
}

#[test]
fn variant_overrides_size_overrides_base() {
    let palette = Palette::light();

    // Size sets dimensions the base leaves open
    let small = ButtonSpec::resolve(ButtonVariant::Default, ButtonSize::Small, palette);
    let large = ButtonSpec::resolve(ButtonVariant::Default, ButtonSize::Large, palette);
    assert_eq!(small.height, Some(40.0));
    assert_eq!(large.height, Some(56.0));

    // Variant overrides size where both set a property
    let search = InputSpec::resolve(InputVariant::Search, InputSize::Small, palette);
    assert_eq!(search.height, Some(48.0));

    // Variant overrides base
    let glass = CardSpec::resolve(CardVariant::Glass, CardSize::Default, palette);
    assert_eq!(glass.border_radius, Some(20.0));
    assert_eq!(glass.background_color, Some(palette.glass));
}

#[test]
fn every_family_resolves_every_combination() {
    for family in ComponentFamily::ALL {
        for variant in family.variants() {
            for size in family.sizes() {
                let style = family.resolve_style(variant, size, Palette::dark());
                assert!(!style.is_empty(), "family={family} variant={variant} size={size}");
            }
        }
    }
}

#[test]
fn components_follow_provider_state() {
    let host = Arc::new(AppearanceSignal::new(SystemAppearance::Light));
    let provider = ThemeProvider::mounted(ThemeConfig::default(), host.clone());
    let theme = provider.context();

    let light = button("Play").render(&theme).unwrap();
    assert_eq!(light.container.background_color, Some(Palette::light().primary));

    host.set(SystemAppearance::Dark);
    let dark = button("Play").render(&theme).unwrap();
    assert_eq!(dark.container.background_color, Some(Palette::dark().primary));
}

#[test]
fn rendering_without_provider_fails() {
    let mut provider = ThemeProvider::mounted(
        ThemeConfig::default(),
        Arc::new(AppearanceSignal::new(SystemAppearance::Light)),
    );
    let theme = provider.context();
    provider.unmount();

    assert!(matches!(
        text("Hello").render(&theme),
        Err(ThemeError::NoProvider)
    ));
    assert!(matches!(ThemeToggle::render(&theme), Err(ThemeError::NoProvider)));
}

#[test]
fn theme_toggle_cycles_modes() {
    let host = Arc::new(AppearanceSignal::new(SystemAppearance::Dark));
    let config = ThemeConfig::default().with_initial_mode(ThemeMode::Light);
    let provider = ThemeProvider::mounted(config, host);
    let theme = provider.context();

    assert_eq!(ThemeToggle::render(&theme).unwrap().caption, "Light mode");

    let captions: Vec<String> = (0..3)
        .map(|_| ThemeToggle::press(&theme).unwrap().caption)
        .collect();
    assert_eq!(captions, vec!["Dark mode", "Using dark", "Light mode"]);
    assert_eq!(theme.state().unwrap().mode, ThemeMode::Light);
}
