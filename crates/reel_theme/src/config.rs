//! Theme configuration (reel.toml `[theme]` table or a standalone file)

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::appearance::{Appearance, AppearanceResolver, ThemeMode};
use crate::error::Result;

/// Startup configuration for a [`ThemeProvider`](crate::ThemeProvider)
///
/// The user's choice is never written back; every process starts from
/// `initial_mode`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeConfig {
    /// Mode applied when the provider mounts
    #[serde(default)]
    pub initial_mode: ThemeMode,
    /// Appearance used in `system` mode when the host reports none
    #[serde(default)]
    pub fallback_appearance: Appearance,
}

impl ThemeConfig {
    /// Parse a configuration from TOML text
    pub fn from_toml_str(src: &str) -> Result<Self> {
        Ok(toml::from_str(src)?)
    }

    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!("loaded theme config from {}: {:?}", path.display(), config);
        Ok(config)
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn with_initial_mode(mut self, mode: ThemeMode) -> Self {
        self.initial_mode = mode;
        self
    }

    pub fn with_fallback(mut self, fallback: Appearance) -> Self {
        self.fallback_appearance = fallback;
        self
    }

    /// Resolver bound to this config's fallback
    pub fn resolver(&self) -> AppearanceResolver {
        AppearanceResolver::new(self.fallback_appearance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ThemeError;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let config = ThemeConfig::from_toml_str("").unwrap();
        assert_eq!(config.initial_mode, ThemeMode::System);
        assert_eq!(config.fallback_appearance, Appearance::Light);
    }

    #[test]
    fn test_parse_values() {
        let config = ThemeConfig::from_toml_str(
            r#"
initial_mode = "dark"
fallback_appearance = "dark"
"#,
        )
        .unwrap();
        assert_eq!(
            config,
            ThemeConfig {
                initial_mode: ThemeMode::Dark,
                fallback_appearance: Appearance::Dark,
            }
        );
    }

    #[test]
    fn test_rejects_unknown_mode() {
        let err = ThemeConfig::from_toml_str(r#"initial_mode = "sepia""#).unwrap_err();
        assert!(matches!(err, ThemeError::Config(_)));
    }

    #[test]
    fn test_toml_round_trip() {
        let config = ThemeConfig::default().with_fallback(Appearance::Dark);
        let text = config.to_toml().unwrap();
        assert_eq!(ThemeConfig::from_toml_str(&text).unwrap(), config);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = ThemeConfig::load("/definitely/not/here/reel.toml").unwrap_err();
        assert!(matches!(err, ThemeError::Io(_)));
    }
}
