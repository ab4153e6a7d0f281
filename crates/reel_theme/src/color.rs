//! Color types and utilities

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ThemeError;

/// RGBA color with f32 components (0.0 to 1.0)
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color {
        r: 1.0,
        g: 1.0,
        b: 1.0,
        a: 1.0,
    };
    pub const BLACK: Color = Color {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 1.0,
    };
    pub const TRANSPARENT: Color = Color {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 0.0,
    };

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Create from u8 components (0-255)
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: a as f32 / 255.0,
        }
    }

    /// Create from hex value (0xRRGGBB or 0xRRGGBBAA)
    ///
    /// Values up to `0xFFFFFF` are read as opaque RGB, so a translucent color
    /// whose red channel is zero must go through [`Color::from_rgba8`].
    pub fn from_hex(hex: u32) -> Self {
        if hex > 0xFFFFFF {
            Self::from_rgba8(
                ((hex >> 24) & 0xFF) as u8,
                ((hex >> 16) & 0xFF) as u8,
                ((hex >> 8) & 0xFF) as u8,
                (hex & 0xFF) as u8,
            )
        } else {
            Self::from_rgba8(
                ((hex >> 16) & 0xFF) as u8,
                ((hex >> 8) & 0xFF) as u8,
                (hex & 0xFF) as u8,
                255,
            )
        }
    }

    /// Set alpha and return new color
    pub fn with_alpha(self, alpha: f32) -> Self {
        Self { a: alpha, ..self }
    }

    /// Whether the color has no transparency
    pub fn is_opaque(&self) -> bool {
        self.a >= 1.0
    }

    /// Convert to u8 array [r, g, b, a]
    pub fn to_rgba8(&self) -> [u8; 4] {
        [
            channel_to_u8(self.r),
            channel_to_u8(self.g),
            channel_to_u8(self.b),
            channel_to_u8(self.a),
        ]
    }

    /// Format as a CSS color string (`#RRGGBB` or `rgba(r, g, b, a)`)
    pub fn to_css(&self) -> String {
        self.to_string()
    }
}

fn channel_to_u8(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b, _] = self.to_rgba8();
        if self.is_opaque() {
            write!(f, "#{:02X}{:02X}{:02X}", r, g, b)
        } else {
            // Three decimals keep byte-derived alphas (0x99 -> 0.6) readable
            let a = (self.a.clamp(0.0, 1.0) * 1000.0).round() / 1000.0;
            write!(f, "rgba({}, {}, {}, {})", r, g, b, a)
        }
    }
}

impl FromStr for Color {
    type Err = ThemeError;

    /// Parse `#RGB`, `#RRGGBB`, `#RRGGBBAA`, `rgb(..)`, `rgba(..)` or `transparent`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        let invalid = || ThemeError::InvalidColor(s.to_string());

        if text.eq_ignore_ascii_case("transparent") {
            return Ok(Color::TRANSPARENT);
        }

        if let Some(hex) = text.strip_prefix('#') {
            return parse_hex(hex).ok_or_else(invalid);
        }

        let lower = text.to_ascii_lowercase();
        let (args, has_alpha) = if let Some(rest) = lower.strip_prefix("rgba(") {
            (rest.strip_suffix(')').ok_or_else(invalid)?, true)
        } else if let Some(rest) = lower.strip_prefix("rgb(") {
            (rest.strip_suffix(')').ok_or_else(invalid)?, false)
        } else {
            return Err(invalid());
        };

        let parts: Vec<&str> = args.split(',').map(str::trim).collect();
        let expected = if has_alpha { 4 } else { 3 };
        if parts.len() != expected {
            return Err(invalid());
        }

        let channel = |part: &str| part.parse::<u8>().map_err(|_| invalid());
        let r = channel(parts[0])?;
        let g = channel(parts[1])?;
        let b = channel(parts[2])?;
        let a = if has_alpha {
            let a: f32 = parts[3].parse().map_err(|_| invalid())?;
            if !(0.0..=1.0).contains(&a) {
                return Err(invalid());
            }
            a
        } else {
            1.0
        };

        Ok(Color::from_rgba8(r, g, b, 255).with_alpha(a))
    }
}

fn parse_hex(hex: &str) -> Option<Color> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    match hex.len() {
        3 => {
            // #RGB expands each nibble
            let n = u32::from_str_radix(hex, 16).ok()?;
            let expand = |v: u32| ((v & 0xF) * 0x11) as u8;
            Some(Color::from_rgba8(
                expand(n >> 8),
                expand(n >> 4),
                expand(n),
                255,
            ))
        }
        6 => u32::from_str_radix(hex, 16).ok().map(|n| {
            Color::from_rgba8((n >> 16) as u8, (n >> 8) as u8, n as u8, 255)
        }),
        8 => u32::from_str_radix(hex, 16).ok().map(|n| {
            Color::from_rgba8((n >> 24) as u8, (n >> 16) as u8, (n >> 8) as u8, n as u8)
        }),
        _ => None,
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}
