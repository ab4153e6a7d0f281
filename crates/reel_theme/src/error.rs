//! Theme error types

use thiserror::Error;

/// Errors raised by the theming core
///
/// Every variant is a developer-facing contract violation or a configuration
/// problem. Nothing on the render path returns these.
#[derive(Error, Debug)]
pub enum ThemeError {
    /// Theme state was accessed while no provider was mounted
    #[error("theme accessed outside a mounted ThemeProvider")]
    NoProvider,

    /// A theme mode name outside `light`, `dark`, `system`
    #[error("invalid theme mode `{0}` (expected light, dark or system)")]
    InvalidMode(String),

    /// An appearance name outside the accepted set
    #[error("invalid appearance `{0}`")]
    InvalidAppearance(String),

    /// Color text that could not be parsed
    #[error("invalid color `{0}`")]
    InvalidColor(String),

    /// Failed to parse a theme configuration file
    #[error("failed to parse theme config: {0}")]
    Config(#[from] toml::de::Error),

    /// Failed to serialize a theme configuration
    #[error("failed to serialize theme config: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    /// Failed to read a theme configuration file
    #[error("failed to read theme config: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for theme operations
pub type Result<T> = std::result::Result<T, ThemeError>;
