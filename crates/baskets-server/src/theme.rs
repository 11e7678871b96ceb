//! CSS theme catalog for the web UI.
//!
//! Pages embed the markup returned by [`to_theme_css`] verbatim, the
//! catalog is resolved once when the configuration is built.

pub const THEME_STANDARD: &str = "standard";
pub const THEME_ADAPTIVE: &str = "adaptive";
pub const THEME_FLATLY: &str = "flatly";

const STANDARD_CSS: &str = r#"<link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/bootstrap@3.4.1/dist/css/bootstrap.min.css">"#;

const FLATLY_CSS: &str = r#"<link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/bootswatch@3.4.1/flatly/bootstrap.min.css">"#;

// Standard stylesheet plus a dark override that only applies when the
// browser asks for a dark color scheme.
const ADAPTIVE_CSS: &str = concat!(
    r#"<link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/bootstrap@3.4.1/dist/css/bootstrap.min.css">"#,
    "\n",
    r#"<link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/bootswatch@3.4.1/darkly/bootstrap.min.css" media="(prefers-color-scheme: dark)">"#,
);

/// Stylesheet markup for a theme name, unknown names fall back to the
/// standard theme.
pub fn to_theme_css(theme: &str) -> &'static str {
    match theme {
        THEME_ADAPTIVE => ADAPTIVE_CSS,
        THEME_FLATLY => FLATLY_CSS,
        _ => STANDARD_CSS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_themes() {
        assert_eq!(to_theme_css(THEME_STANDARD), STANDARD_CSS);
        assert_eq!(to_theme_css(THEME_ADAPTIVE), ADAPTIVE_CSS);
        assert_eq!(to_theme_css(THEME_FLATLY), FLATLY_CSS);
    }

    #[test]
    fn test_unknown_theme_falls_back_to_standard() {
        assert_eq!(to_theme_css("neon"), to_theme_css(THEME_STANDARD));
        assert_eq!(to_theme_css(""), STANDARD_CSS);
    }

    #[test]
    fn test_theme_markup_is_distinct() {
        assert_ne!(STANDARD_CSS, FLATLY_CSS);
        assert_ne!(STANDARD_CSS, ADAPTIVE_CSS);
        assert!(ADAPTIVE_CSS.contains("prefers-color-scheme"));
        assert!(FLATLY_CSS.contains("<link"));
    }
}
