//! Component labels
//!
//! A label is either plain text, which the component styles itself, or
//! caller-provided content that renders as given.

use crate::style::StyleFragment;

/// Label content as supplied to a component
#[derive(Clone, Debug, PartialEq)]
pub enum RenderedLabel<C = ()> {
    Text(String),
    Custom(C),
}

impl<C> RenderedLabel<C> {
    pub fn text(&self) -> Option<&str> {
        match self {
            RenderedLabel::Text(text) => Some(text),
            RenderedLabel::Custom(_) => None,
        }
    }

    /// Attach the component's label style; custom content is left alone
    pub fn resolve(self, style: impl FnOnce() -> StyleFragment) -> ResolvedLabel<C> {
        match self {
            RenderedLabel::Text(text) => ResolvedLabel::Text {
                text,
                style: style(),
            },
            RenderedLabel::Custom(content) => ResolvedLabel::Custom(content),
        }
    }
}

impl<C> From<&str> for RenderedLabel<C> {
    fn from(text: &str) -> Self {
        RenderedLabel::Text(text.to_string())
    }
}

impl<C> From<String> for RenderedLabel<C> {
    fn from(text: String) -> Self {
        RenderedLabel::Text(text)
    }
}

/// A label ready to render
#[derive(Clone, Debug, PartialEq)]
pub enum ResolvedLabel<C = ()> {
    Text { text: String, style: StyleFragment },
    Custom(C),
}

impl<C> ResolvedLabel<C> {
    /// Style applied to a text label
    pub fn style(&self) -> Option<&StyleFragment> {
        match self {
            ResolvedLabel::Text { style, .. } => Some(style),
            ResolvedLabel::Custom(_) => None,
        }
    }
}
