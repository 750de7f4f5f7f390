//! Page assembly: the skeleton, the injection points, and the live page.
//!
//! The skeleton is a fixed HTML shell exposing three empty anchor elements
//! by id. Rendering clones the shell and injects the three fragments into
//! their anchors; an anchor missing from the shell silently skips that
//! fragment, leaving the rest of the page intact.

mod state;

pub use state::PageState;

use crate::constants::*;
use crate::models::SiteData;
use crate::render::{render_nav, render_search, render_sections};

/// The embedded page shell.
const SKELETON_HTML: &str = include_str!("../../assets/skeleton.html");

/// An HTML shell with named, empty anchor elements.
#[derive(Debug, Clone)]
pub struct Skeleton {
    html: String,
}

impl Skeleton {
    /// The built-in shell with the page title filled in.
    pub fn standard(title: &str) -> Self {
        Self {
            html: SKELETON_HTML.replace("{{title}}", title),
        }
    }

    /// A caller-supplied shell (used by tests and custom skeletons).
    pub fn from_html(html: impl Into<String>) -> Self {
        Self { html: html.into() }
    }

    /// Insert a fragment into the element with the given id.
    ///
    /// The fragment lands right after the anchor's opening tag, so anchors
    /// are expected to be empty elements. An absent id is a no-op.
    pub fn inject(&mut self, id: &str, fragment: &str) {
        let marker = format!("id=\"{}\"", id);
        let Some(pos) = self.html.find(&marker) else {
            return;
        };
        let Some(tag_end) = self.html[pos..].find('>') else {
            return;
        };
        self.html.insert_str(pos + tag_end + 1, fragment);
    }

    pub fn into_html(self) -> String {
        self.html
    }
}

/// The live page: immutable site data plus the current selection state.
#[derive(Debug, Clone)]
pub struct Page {
    data: SiteData,
    state: PageState,
    title: String,
}

impl Page {
    /// Build a page from loaded data. Initial state selects the first
    /// engine and the first category.
    pub fn new(title: &str, data: SiteData) -> Self {
        let state = PageState::new(&data);
        Self {
            data,
            state,
            title: title.to_string(),
        }
    }

    /// Apply an engine-selection click.
    pub fn select_engine(&mut self, index: usize) {
        self.state.select_engine(&self.data, index);
    }

    /// Apply a tab-selection click.
    pub fn select_tab(&mut self, id: &str) {
        self.state.select_tab(id);
    }

    /// Render the full page into the built-in shell.
    pub fn render(&self) -> String {
        self.render_into(Skeleton::standard(&self.title))
    }

    /// Render the full page into a given shell.
    pub fn render_into(&self, mut skeleton: Skeleton) -> String {
        skeleton.inject(
            SEARCH_CONTAINER_ID,
            &render_search(&self.data.search, &self.state),
        );
        skeleton.inject(NAV_TABS_ID, &render_nav(&self.data.categories, &self.state));
        skeleton.inject(
            MAIN_CONTENT_ID,
            &render_sections(&self.data.categories, &self.state),
        );
        skeleton.into_html()
    }
}

/// The bare shell, served when the data document failed to load.
pub fn skeleton_page(title: &str) -> String {
    Skeleton::standard(title).into_html()
}
