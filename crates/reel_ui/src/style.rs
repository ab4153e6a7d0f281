//! Style fragments
//!
//! A [`StyleFragment`] is the concrete output of variant resolution: a sparse
//! set of style properties ready for a rendering primitive. Fragments layer
//! with [`StyleFragment::merge`], where the overlay's set properties win.

use reel_theme::{Color, Shadow};
use serde::Serialize;
use smallvec::SmallVec;

/// Font family every component renders with
pub const SYSTEM_FONT: &str = "System";

/// Per-side spacing (padding)
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct Edges {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Edges {
    pub const ZERO: Edges = Edges::all(0.0);

    pub const fn new(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    pub const fn all(value: f32) -> Self {
        Self::new(value, value, value, value)
    }

    /// Horizontal and vertical padding
    pub const fn symmetric(horizontal: f32, vertical: f32) -> Self {
        Self::new(vertical, horizontal, vertical, horizontal)
    }
}

/// A single resolved style value
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum StyleValue {
    Color(Color),
    Number(f32),
    Weight(u16),
    Edges(Edges),
    Shadow(Shadow),
    Keyword(&'static str),
}

macro_rules! style_fragment {
    (
        $(
            $(#[$doc:meta])*
            $field:ident: $ty:ty => $name:literal as $kind:ident,
        )+
    ) => {
        /// Sparse set of style properties
        #[derive(Clone, Debug, Default, PartialEq, Serialize)]
        #[serde(rename_all = "camelCase")]
        pub struct StyleFragment {
            $(
                $(#[$doc])*
                #[serde(skip_serializing_if = "Option::is_none")]
                pub $field: Option<$ty>,
            )+
        }

        impl StyleFragment {
            /// Layer `over` on top of `self`; properties set in `over` win
            pub fn merge(mut self, over: &StyleFragment) -> Self {
                $(
                    if over.$field.is_some() {
                        self.$field = over.$field;
                    }
                )+
                self
            }

            /// Set properties as `(name, value)` pairs, in declaration order
            pub fn properties(&self) -> SmallVec<[(&'static str, StyleValue); 8]> {
                let mut props = SmallVec::new();
                $(
                    if let Some(value) = self.$field {
                        props.push(($name, StyleValue::$kind(value)));
                    }
                )+
                props
            }

            /// Whether no property is set
            pub fn is_empty(&self) -> bool {
                true $( && self.$field.is_none() )+
            }
        }
    };
}

style_fragment! {
    background_color: Color => "backgroundColor" as Color,
    /// Foreground (text) color
    color: Color => "color" as Color,
    border_width: f32 => "borderWidth" as Number,
    border_color: Color => "borderColor" as Color,
    border_radius: f32 => "borderRadius" as Number,
    shadow: Shadow => "shadow" as Shadow,
    height: f32 => "height" as Number,
    width: f32 => "width" as Number,
    padding: Edges => "padding" as Edges,
    font_size: f32 => "fontSize" as Number,
    /// Numeric CSS weight (100-900)
    font_weight: u16 => "fontWeight" as Weight,
    line_height: f32 => "lineHeight" as Number,
    font_family: &'static str => "fontFamily" as Keyword,
    /// Blur radius applied to content behind translucent surfaces
    backdrop_blur: f32 => "backdropBlur" as Number,
    opacity: f32 => "opacity" as Number,
}

impl StyleFragment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a property by its style name (`backgroundColor`, `fontSize`, ...)
    pub fn property(&self, name: &str) -> Option<StyleValue> {
        self.properties()
            .into_iter()
            .find(|(prop, _)| *prop == name)
            .map(|(_, value)| value)
    }

    pub fn background(mut self, color: Color) -> Self {
        self.background_color = Some(color);
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Set border width and color together
    pub fn border(mut self, width: f32, color: Color) -> Self {
        self.border_width = Some(width);
        self.border_color = Some(color);
        self
    }

    pub fn rounded(mut self, radius: f32) -> Self {
        self.border_radius = Some(radius);
        self
    }

    pub fn shadow(mut self, shadow: Shadow) -> Self {
        self.shadow = Some(shadow);
        self
    }

    pub fn h(mut self, height: f32) -> Self {
        self.height = Some(height);
        self
    }

    pub fn w(mut self, width: f32) -> Self {
        self.width = Some(width);
        self
    }

    pub fn padding(mut self, padding: Edges) -> Self {
        self.padding = Some(padding);
        self
    }

    pub fn font_size(mut self, size: f32) -> Self {
        self.font_size = Some(size);
        self
    }

    pub fn font_weight(mut self, weight: u16) -> Self {
        self.font_weight = Some(weight);
        self
    }

    pub fn line_height(mut self, height: f32) -> Self {
        self.line_height = Some(height);
        self
    }

    pub fn font_family(mut self, family: &'static str) -> Self {
        self.font_family = Some(family);
        self
    }

    pub fn backdrop_blur(mut self, radius: f32) -> Self {
        self.backdrop_blur = Some(radius);
        self
    }

    pub fn opacity(mut self, opacity: f32) -> Self {
        self.opacity = Some(opacity);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_merge_overlay_wins() {
        let base = StyleFragment::new().rounded(16.0).h(48.0).background(Color::WHITE);
        let over = StyleFragment::new().background(Color::BLACK);

        let merged = base.merge(&over);
        assert_eq!(merged.background_color, Some(Color::BLACK));
        assert_eq!(merged.border_radius, Some(16.0));
        assert_eq!(merged.height, Some(48.0));
    }

    #[test]
    fn test_merge_empty_is_identity() {
        let base = StyleFragment::new().font_size(16.0).padding(Edges::symmetric(24.0, 12.0));
        assert_eq!(base.clone().merge(&StyleFragment::new()), base);
        assert_eq!(StyleFragment::new().merge(&base), base);
    }

    #[test]
    fn test_properties_order_and_lookup() {
        let style = StyleFragment::new()
            .font_size(14.0)
            .background(Color::WHITE)
            .font_family(SYSTEM_FONT);

        let names: Vec<&str> = style.properties().iter().map(|(name, _)| *name).collect();
        assert_eq!(names, vec!["backgroundColor", "fontSize", "fontFamily"]);
        assert_eq!(style.property("fontSize"), Some(StyleValue::Number(14.0)));
        assert_eq!(style.property("height"), None);
        assert!(!style.is_empty());
        assert!(StyleFragment::new().is_empty());
    }

    #[test]
    fn test_serializes_only_set_fields() {
        let style = StyleFragment::new()
            .background(Color::from_hex(0x007AFF))
            .padding(Edges::symmetric(16.0, 8.0));
        let json = serde_json::to_value(&style).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "backgroundColor": "#007AFF",
                "padding": { "top": 8.0, "right": 16.0, "bottom": 8.0, "left": 16.0 }
            })
        );
    }

    #[test]
    fn test_edges_symmetric() {
        let edges = Edges::symmetric(24.0, 12.0);
        assert_eq!(edges, Edges::new(12.0, 24.0, 12.0, 24.0));
    }
}
