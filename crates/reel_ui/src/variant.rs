//! Variant resolution
//!
//! Every component family declares a closed set of variants and sizes. A
//! family's style for a `(variant, size, palette)` triple is built in three
//! layers, each overriding the previous one where they overlap:
//!
//! 1. the family base
//! 2. the size layer (dimensions, padding, font size)
//! 3. the variant layer (colors, borders, shadows)
//!
//! Resolution is pure: the same inputs always produce the same fragment.
//! Unknown variant or size names fall back to the family's defaults.

use std::fmt;
use std::str::FromStr;

use reel_theme::Palette;

use crate::components::{ButtonSpec, CardSpec, InputSpec, TextSpec};
use crate::style::StyleFragment;

/// A closed, named set of options (a variant or size enum)
pub trait Selector: Copy + Default + Eq + fmt::Debug + 'static {
    /// Every option, in declaration order
    const ALL: &'static [Self];

    /// The option's external name
    fn name(self) -> &'static str;

    /// Look up an option by name (case-insensitive)
    fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|option| option.name().eq_ignore_ascii_case(name))
    }

    /// Look up an option by name, falling back to the default
    fn from_name_or_default(name: &str) -> Self {
        Self::from_name(name).unwrap_or_else(|| {
            let fallback = Self::default();
            tracing::debug!(
                "unknown {} `{}`, falling back to `{}`",
                short_type_name::<Self>(),
                name,
                fallback.name()
            );
            fallback
        })
    }
}

fn short_type_name<T>() -> &'static str {
    let full = std::any::type_name::<T>();
    full.rsplit("::").next().unwrap_or(full)
}

/// Declares a [`Selector`] enum from `Variant => "name"` pairs.
///
/// Mark the default option with `#[default]`.
macro_rules! selector {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $(
                $(#[$option_meta:meta])*
                $option:ident => $label:literal,
            )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
        pub enum $name {
            $(
                $(#[$option_meta])*
                $option,
            )+
        }

        impl $crate::variant::Selector for $name {
            const ALL: &'static [Self] = &[$(Self::$option,)+];

            fn name(self) -> &'static str {
                match self {
                    $(Self::$option => $label,)+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::variant::Selector::name(*self))
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S: ::serde::Serializer>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error> {
                serializer.serialize_str($crate::variant::Selector::name(*self))
            }
        }
    };
}

pub(crate) use selector;

/// Layered style rules for one component family
pub trait VariantSpec {
    type Variant: Selector;
    type Size: Selector;

    const FAMILY: ComponentFamily;

    /// Properties shared by every variant and size
    fn base(palette: &Palette) -> StyleFragment;

    /// Size layer
    fn size_style(size: Self::Size, palette: &Palette) -> StyleFragment;

    /// Variant layer
    fn variant_style(variant: Self::Variant, palette: &Palette) -> StyleFragment;

    /// Resolve a container style: base, then size, then variant
    fn resolve(variant: Self::Variant, size: Self::Size, palette: &Palette) -> StyleFragment {
        Self::base(palette)
            .merge(&Self::size_style(size, palette))
            .merge(&Self::variant_style(variant, palette))
    }

    /// Resolve by name; unknown names resolve as the defaults
    fn resolve_named(variant: &str, size: &str, palette: &Palette) -> StyleFragment {
        Self::resolve(
            Self::Variant::from_name_or_default(variant),
            Self::Size::from_name_or_default(size),
            palette,
        )
    }
}

/// The component families with variant rules
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ComponentFamily {
    Button,
    Text,
    Card,
    Input,
}

impl ComponentFamily {
    pub const ALL: [ComponentFamily; 4] = [
        ComponentFamily::Button,
        ComponentFamily::Text,
        ComponentFamily::Card,
        ComponentFamily::Input,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ComponentFamily::Button => "button",
            ComponentFamily::Text => "text",
            ComponentFamily::Card => "card",
            ComponentFamily::Input => "input",
        }
    }

    /// Names of the family's variants, default first
    pub fn variants(self) -> Vec<&'static str> {
        match self {
            ComponentFamily::Button => names::<<ButtonSpec as VariantSpec>::Variant>(),
            ComponentFamily::Text => names::<<TextSpec as VariantSpec>::Variant>(),
            ComponentFamily::Card => names::<<CardSpec as VariantSpec>::Variant>(),
            ComponentFamily::Input => names::<<InputSpec as VariantSpec>::Variant>(),
        }
    }

    /// Names of the family's sizes
    pub fn sizes(self) -> Vec<&'static str> {
        match self {
            ComponentFamily::Button => names::<<ButtonSpec as VariantSpec>::Size>(),
            ComponentFamily::Text => names::<<TextSpec as VariantSpec>::Size>(),
            ComponentFamily::Card => names::<<CardSpec as VariantSpec>::Size>(),
            ComponentFamily::Input => names::<<InputSpec as VariantSpec>::Size>(),
        }
    }

    /// Resolve a container style for this family by variant and size name
    pub fn resolve_style(self, variant: &str, size: &str, palette: &Palette) -> StyleFragment {
        match self {
            ComponentFamily::Button => ButtonSpec::resolve_named(variant, size, palette),
            ComponentFamily::Text => TextSpec::resolve_named(variant, size, palette),
            ComponentFamily::Card => CardSpec::resolve_named(variant, size, palette),
            ComponentFamily::Input => InputSpec::resolve_named(variant, size, palette),
        }
    }
}

fn names<S: Selector>() -> Vec<&'static str> {
    S::ALL.iter().map(|option| option.name()).collect()
}

impl fmt::Display for ComponentFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown component family
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownFamily(pub String);

impl fmt::Display for UnknownFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown component family `{}`", self.0)
    }
}

impl std::error::Error for UnknownFamily {}

impl FromStr for ComponentFamily {
    type Err = UnknownFamily;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Self::ALL
            .into_iter()
            .find(|family| family.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| UnknownFamily(s.to_string()))
    }
}
