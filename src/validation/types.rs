//! Standard theme vocabulary with soft validation

/// Legal subject tags of the closed theme vocabulary
pub const STANDARD_THEMES: &[&str] = &["Civil", "Pénal", "Commercial", "Social", "Administratif"];

/// Check if a theme is standard, return warning if not
///
/// Comparison is exact: themes relate documents by equality, so
/// `"civil"` and `"Civil"` are different tags.
pub fn validate_theme(theme: &str) -> Option<String> {
    if STANDARD_THEMES.contains(&theme) {
        None
    } else {
        Some(format!(
            "Non-standard theme '{}'. Recommended: {:?}",
            theme, STANDARD_THEMES
        ))
    }
}

/// Warnings for every non-standard theme of a batch, in order of appearance
pub fn validate_themes<'a, I>(themes: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen: Vec<&str> = Vec::new();
    let mut warnings = Vec::new();
    for theme in themes {
        if seen.contains(&theme) {
            continue;
        }
        seen.push(theme);
        if let Some(warning) = validate_theme(theme) {
            warnings.push(warning);
        }
    }
    warnings
}
