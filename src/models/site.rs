//! Root data document and the search widget configuration.
//!
//! The whole page is described by one JSON document shaped as [`SiteData`].
//! Everything here is read-only after load; only the page state changes at
//! runtime.

use serde::Deserialize;

use super::Category;

/// The root of the data document.
#[derive(Debug, Clone, Deserialize)]
pub struct SiteData {
    /// Search engines and quick links.
    pub search: SearchConfig,
    /// Tabbed content sections, in display order. May be empty.
    #[serde(default)]
    pub categories: Vec<Category>,
}

/// Configuration for the search widget.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchConfig {
    /// Selectable search providers. The first is the default-active one.
    pub engines: Vec<Engine>,
    /// Decorative shortcut icons next to the engine buttons.
    #[serde(default, rename = "quickLinks")]
    pub quick_links: Vec<QuickLink>,
}

/// One external search provider.
#[derive(Debug, Clone, Deserialize)]
pub struct Engine {
    /// Display label, e.g. "Google".
    pub name: String,
    /// Query-capable URL, e.g. "https://google.com/search?q=".
    /// The form action is this URL truncated at the first '?'.
    pub url: String,
    /// Query-string key the provider expects, e.g. "q".
    pub param: String,
}

impl Engine {
    /// The form submission target: `url` with any query string stripped.
    pub fn action(&self) -> &str {
        self.url.split('?').next().unwrap_or(&self.url)
    }
}

/// A decorative external shortcut shown beside the engine buttons.
#[derive(Debug, Clone, Deserialize)]
pub struct QuickLink {
    pub url: String,
    /// Icon image URL.
    pub icon: String,
    pub title: String,
}
