//! Themed components

pub mod button;
pub mod card;
pub mod input;
pub mod text;
pub mod theme_toggle;

pub use button::{Button, ButtonSize, ButtonSpec, ButtonVariant, ResolvedButton};
pub use card::{Card, CardSection, CardSize, CardSpec, CardVariant, ResolvedCard};
pub use input::{Adornments, Input, InputSize, InputSpec, InputVariant, ResolvedInput};
pub use text::{ResolvedText, Text, TextSize, TextSpec, TextVariant, TextWeight};
pub use theme_toggle::ThemeToggle;
