//! Theme modes and light/dark resolution
//!
//! A [`ThemeMode`] is what the user picked; an [`Appearance`] is what actually
//! renders. [`resolve_appearance`] maps one to the other using the host's
//! [`SystemAppearance`] when the user follows the system.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ThemeError;

/// User-selected theme mode
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    /// Follow the host's system appearance
    #[default]
    System,
}

impl ThemeMode {
    pub const ALL: [ThemeMode; 3] = [ThemeMode::Light, ThemeMode::Dark, ThemeMode::System];

    pub fn name(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
            ThemeMode::System => "system",
        }
    }

    /// Next mode in the toggle cycle: light, dark, system, light, ...
    pub fn next(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::System,
            ThemeMode::System => ThemeMode::Light,
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ThemeMode {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        ThemeMode::ALL
            .into_iter()
            .find(|mode| mode.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| ThemeError::InvalidMode(s.to_string()))
    }
}

/// Appearance reported by the host platform
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SystemAppearance {
    Light,
    Dark,
    /// The host could not tell (no preference, or not yet reported)
    #[default]
    Unknown,
}

impl SystemAppearance {
    pub fn name(self) -> &'static str {
        match self {
            SystemAppearance::Light => "light",
            SystemAppearance::Dark => "dark",
            SystemAppearance::Unknown => "unknown",
        }
    }
}

impl fmt::Display for SystemAppearance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SystemAppearance {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(SystemAppearance::Light),
            "dark" => Ok(SystemAppearance::Dark),
            "unknown" | "" => Ok(SystemAppearance::Unknown),
            _ => Err(ThemeError::InvalidAppearance(s.to_string())),
        }
    }
}

impl From<Appearance> for SystemAppearance {
    fn from(appearance: Appearance) -> Self {
        match appearance {
            Appearance::Light => SystemAppearance::Light,
            Appearance::Dark => SystemAppearance::Dark,
        }
    }
}

/// The concrete appearance being rendered (never "system")
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Appearance {
    #[default]
    Light,
    Dark,
}

impl Appearance {
    pub fn name(self) -> &'static str {
        match self {
            Appearance::Light => "light",
            Appearance::Dark => "dark",
        }
    }

    pub fn is_dark(self) -> bool {
        self == Appearance::Dark
    }
}

impl fmt::Display for Appearance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Appearance {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Appearance::Light),
            "dark" => Ok(Appearance::Dark),
            _ => Err(ThemeError::InvalidAppearance(s.to_string())),
        }
    }
}

/// Resolve the rendered appearance
///
/// Explicit modes win over the host. `System` follows the host, and falls
/// back to `fallback` when the host reports [`SystemAppearance::Unknown`].
pub fn resolve_appearance(
    mode: ThemeMode,
    host: SystemAppearance,
    fallback: Appearance,
) -> Appearance {
    match (mode, host) {
        (ThemeMode::Light, _) => Appearance::Light,
        (ThemeMode::Dark, _) => Appearance::Dark,
        (ThemeMode::System, SystemAppearance::Light) => Appearance::Light,
        (ThemeMode::System, SystemAppearance::Dark) => Appearance::Dark,
        (ThemeMode::System, SystemAppearance::Unknown) => fallback,
    }
}

/// [`resolve_appearance`] bound to a configured fallback
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AppearanceResolver {
    fallback: Appearance,
}

impl AppearanceResolver {
    pub fn new(fallback: Appearance) -> Self {
        Self { fallback }
    }

    /// Appearance used when the host cannot report one
    pub fn fallback(&self) -> Appearance {
        self.fallback
    }

    pub fn resolve(&self, mode: ThemeMode, host: SystemAppearance) -> Appearance {
        resolve_appearance(mode, host, self.fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HOSTS: [SystemAppearance; 3] = [
        SystemAppearance::Light,
        SystemAppearance::Dark,
        SystemAppearance::Unknown,
    ];

    #[test]
    fn test_explicit_mode_ignores_host() {
        let resolver = AppearanceResolver::default();
        for host in HOSTS {
            assert_eq!(resolver.resolve(ThemeMode::Light, host), Appearance::Light);
            assert_eq!(resolver.resolve(ThemeMode::Dark, host), Appearance::Dark);
        }
    }

    #[test]
    fn test_system_follows_host() {
        let resolver = AppearanceResolver::default();
        assert_eq!(
            resolver.resolve(ThemeMode::System, SystemAppearance::Light),
            Appearance::Light
        );
        assert_eq!(
            resolver.resolve(ThemeMode::System, SystemAppearance::Dark),
            Appearance::Dark
        );
        assert_eq!(
            resolver.resolve(ThemeMode::System, SystemAppearance::Unknown),
            Appearance::Light
        );
    }

    #[test]
    fn test_unknown_host_uses_configured_fallback() {
        let resolver = AppearanceResolver::new(Appearance::Dark);
        assert_eq!(
            resolver.resolve(ThemeMode::System, SystemAppearance::Unknown),
            Appearance::Dark
        );
        // The fallback never overrides an explicit choice
        assert_eq!(
            resolver.resolve(ThemeMode::Light, SystemAppearance::Unknown),
            Appearance::Light
        );
    }

    #[test]
    fn test_mode_cycle_visits_every_mode() {
        let mut mode = ThemeMode::Light;
        let mut seen = Vec::new();
        for _ in 0..3 {
            seen.push(mode);
            mode = mode.next();
        }
        assert_eq!(mode, ThemeMode::Light);
        assert_eq!(seen, ThemeMode::ALL.to_vec());
    }

    #[test]
    fn test_mode_parsing() {
        assert_eq!("Dark".parse::<ThemeMode>().unwrap(), ThemeMode::Dark);
        assert_eq!(" system ".parse::<ThemeMode>().unwrap(), ThemeMode::System);
        assert!(matches!(
            "sepia".parse::<ThemeMode>(),
            Err(ThemeError::InvalidMode(name)) if name == "sepia"
        ));
    }

    #[test]
    fn test_appearance_parsing() {
        assert_eq!("".parse::<SystemAppearance>().unwrap(), SystemAppearance::Unknown);
        assert_eq!("DARK".parse::<Appearance>().unwrap(), Appearance::Dark);
        assert!("system".parse::<Appearance>().is_err());
    }
}
