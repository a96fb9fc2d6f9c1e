//! Display font resolution for the editor preview.
//!
//! `industry` is served from Adobe Fonts; every other name is requested from
//! Google Fonts with regular and bold weights.

/// Name of the font served from the Adobe Fonts kit.
pub const INDUSTRY_FONT_NAME: &str = "industry";
/// Stylesheet of the Adobe Fonts kit.
pub const INDUSTRY_STYLESHEET_URL: &str = "https://use.typekit.net/jej3tln.css";

const GOOGLE_FONTS_CSS_URL: &str = "https://fonts.googleapis.com/css2";

/// Font family plus the stylesheet that provides it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedFont {
    /// Family name used in the CSS declaration.
    pub family: String,
    /// Stylesheet URL to load.
    pub stylesheet_url: String,
}

impl ResolvedFont {
    /// CSS `font-family` declaration with a sans-serif fallback.
    #[must_use]
    pub fn css_declaration(&self) -> String {
        declaration(&self.family)
    }
}

/// Case-insensitive match against [`INDUSTRY_FONT_NAME`].
#[must_use]
pub const fn is_industry(name: &str) -> bool {
    name.eq_ignore_ascii_case(INDUSTRY_FONT_NAME)
}

/// Resolve a free-text font name, `None` when it is blank.
#[must_use]
pub fn resolve_font(name: &str) -> Option<ResolvedFont> {
    let name = name.trim();
    if name.is_empty() {
        return None;
    }
    if is_industry(name) {
        return Some(ResolvedFont {
            family: INDUSTRY_FONT_NAME.to_string(),
            stylesheet_url: INDUSTRY_STYLESHEET_URL.to_string(),
        });
    }
    Some(ResolvedFont {
        family: name.to_string(),
        stylesheet_url: format!(
            "{GOOGLE_FONTS_CSS_URL}?family={}:wght@400;700&display=swap",
            urlencoding::encode(name)
        ),
    })
}

/// CSS declaration for an optional font name; blank or missing yields `""`.
#[must_use]
pub fn font_style(name: Option<&str>) -> String {
    let name = name.map(str::trim).unwrap_or_default();
    if name.is_empty() {
        return String::new();
    }
    if is_industry(name) {
        return declaration(INDUSTRY_FONT_NAME);
    }
    declaration(name)
}

fn declaration(family: &str) -> String {
    format!("font-family: '{family}', sans-serif")
}
