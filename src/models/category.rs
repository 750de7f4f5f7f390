//! Categories, groups, and link items.

use serde::Deserialize;

/// One top-level content section, selectable via a navigation tab.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Unique id, doubles as the section's DOM anchor and tab target.
    pub id: String,
    /// Short label shown on the navigation tab.
    pub nav_title: String,
    /// Icon class for both the tab and the section header.
    pub icon: String,
    /// Heading shown above the section content.
    pub section_title: String,
    /// Color applied to the section header icon.
    pub title_color: String,
    /// Flat display mode: cards rendered directly in one grid.
    #[serde(default)]
    pub items: Option<Vec<Item>>,
    /// Grouped display mode: collapsible sub-sections, each with a grid.
    /// Takes precedence over `items` when both are present.
    #[serde(default)]
    pub groups: Option<Vec<Group>>,
}

/// How a category's body is rendered.
#[derive(Debug)]
pub enum DisplayMode<'a> {
    /// One collapsible block per group.
    Grouped(&'a [Group]),
    /// A single card grid.
    Flat(&'a [Item]),
}

impl Category {
    /// Resolve the display mode. Groups win over items; a category with
    /// neither renders an empty grid.
    pub fn display_mode(&self) -> DisplayMode<'_> {
        match (&self.groups, &self.items) {
            (Some(groups), _) => DisplayMode::Grouped(groups),
            (None, Some(items)) => DisplayMode::Flat(items),
            (None, None) => DisplayMode::Flat(&[]),
        }
    }
}

/// A named, independently collapsible subdivision of items.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    pub name: String,
    /// Whether the block starts expanded. Absent means collapsed.
    #[serde(default)]
    pub is_open: bool,
    #[serde(default)]
    pub items: Vec<Item>,
}

/// One linked card. `icon` (image) and `icon_symbol` (glyph) are mutually
/// exclusive rendering modes; with neither set the card has no icon.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub url: String,
    pub title: String,
    /// Icon image URL.
    #[serde(default)]
    pub icon: Option<String>,
    /// Glyph class used when no image icon is set.
    #[serde(default)]
    pub icon_symbol: Option<String>,
    /// Glyph color.
    #[serde(default)]
    pub icon_color: Option<String>,
    /// Glyph background; defaults to `transparent` at render time.
    #[serde(default)]
    pub icon_bg: Option<String>,
}
