//! Application-wide constants.
//!
//! Centralizes the anchor ids, CSS class names, and configuration defaults
//! shared between the renderers, the page state, and the server.

use std::path::PathBuf;

// ── Skeleton anchors ──────────────────────────────────────────────
/// Element id the search widget is injected into.
pub const SEARCH_CONTAINER_ID: &str = "search-container";
/// Element id the navigation tab bar is injected into.
pub const NAV_TABS_ID: &str = "navTabs";
/// Element id the category sections are injected into.
pub const MAIN_CONTENT_ID: &str = "main-content-area";

// ── CSS classes ───────────────────────────────────────────────────
/// Marker class for the currently selected engine, tab, or section.
pub const ACTIVE_CLASS: &str = "active";
/// Class carried by every engine-switch control.
pub const ENGINE_BTN_CLASS: &str = "engine-btn";
/// Class carried by every navigation tab control.
pub const TAB_BTN_CLASS: &str = "tab-btn";
/// Class carried by every category content section.
pub const SECTION_CLASS: &str = "category-section";

// ── Rendering defaults ────────────────────────────────────────────
/// Background applied to glyph icons when the item sets none.
pub const DEFAULT_ICON_BG: &str = "transparent";
/// Placeholder text in the search input.
pub const SEARCH_PLACEHOLDER: &str = "Search...";
/// Initial capacity for assembled page fragments.
pub const FRAGMENT_CAPACITY: usize = 4096;

// ── Server / interaction routes ───────────────────────────────────
/// Path that receives engine- and tab-selection clicks.
pub const SELECT_PATH: &str = "/select";
/// Query key naming an engine index.
pub const ENGINE_PARAM: &str = "engine";
/// Query key naming a tab (category id).
pub const TAB_PARAM: &str = "tab";

// ── Defaults ──────────────────────────────────────────────────────
/// Default data document in the working directory.
pub const DEFAULT_DATA_SOURCE: &str = "data.json";
/// Default listen address for the page server.
pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:7420";
/// Default page title.
pub const DEFAULT_PAGE_TITLE: &str = "Homeport";
/// HTTP fetch timeout for the data document (seconds).
pub const FETCH_TIMEOUT_SECS: u64 = 10;

// ── Paths ─────────────────────────────────────────────────────────

/// Returns the user's home directory, falling back to /tmp.
pub fn home_dir() -> PathBuf {
    PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string()))
}

/// Returns `~/.config/homeport/`.
pub fn config_dir() -> PathBuf {
    home_dir().join(".config").join("homeport")
}

/// Returns `~/.config/homeport/config.toml`.
pub fn config_file_path() -> PathBuf {
    config_dir().join("config.toml")
}
