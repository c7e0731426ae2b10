//! Theme validation for incoming documents
//!
//! This module provides soft validation: non-standard themes are reported,
//! never rejected.

mod types;

pub use types::{validate_theme, validate_themes, STANDARD_THEMES};
