//! Design tokens for theming
//!
//! Tokens are the atomic values that make up the design system:
//! - Colors
//! - Border radii
//! - Shadows

mod color;
mod radius;
mod shadow;

pub use color::*;
pub use radius::*;
pub use shadow::*;
