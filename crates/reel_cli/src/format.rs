//! Plain-text rendering of theme values

use std::fmt::Write;

use reel_theme::Palette;
use reel_ui::StyleValue;

/// Render a resolved style value the way a stylesheet would spell it
pub fn style_value(value: &StyleValue) -> String {
    match value {
        StyleValue::Color(color) => color.to_css(),
        StyleValue::Number(number) => number.to_string(),
        StyleValue::Weight(weight) => weight.to_string(),
        StyleValue::Edges(edges) => format!(
            "{} {} {} {}",
            edges.top, edges.right, edges.bottom, edges.left
        ),
        StyleValue::Shadow(shadow) if !shadow.is_visible() => "none".to_string(),
        StyleValue::Shadow(shadow) => format!(
            "{} {} {} {} opacity={} elevation={}",
            shadow.offset_x,
            shadow.offset_y,
            shadow.radius,
            shadow.color.to_css(),
            shadow.opacity,
            shadow.elevation
        ),
        StyleValue::Keyword(keyword) => keyword.to_string(),
    }
}

/// Palette as a CSS `:root` block of custom properties
pub fn css_variables(palette: &Palette) -> String {
    let mut css = String::from(":root {\n");
    for (name, value) in palette.to_css_variable_map() {
        let _ = writeln!(css, "  --{}: {};", kebab_case(name), value);
    }
    css.push('}');
    css
}

fn kebab_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for c in name.chars() {
        if c.is_ascii_uppercase() {
            out.push('-');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}
