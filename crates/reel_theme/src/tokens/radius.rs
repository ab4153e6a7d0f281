//! Border radius tokens

/// Semantic radius token keys
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum RadiusToken {
    None,
    /// Text fields
    Md,
    /// Buttons and cards
    Lg,
    /// Glass panels
    Xl,
    /// Search pills
    Xxl,
    /// Fully rounded (circles, capsules)
    Full,
}

impl RadiusToken {
    /// Radius in points
    pub fn get(self) -> f32 {
        match self {
            RadiusToken::None => 0.0,
            RadiusToken::Md => 12.0,
            RadiusToken::Lg => 16.0,
            RadiusToken::Xl => 20.0,
            RadiusToken::Xxl => 24.0,
            RadiusToken::Full => 9999.0,
        }
    }
}
