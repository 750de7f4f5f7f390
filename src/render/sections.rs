//! Navigation tabs and category content sections.

use crate::constants::*;
use crate::models::{Category, DisplayMode};
use crate::page::PageState;

use super::render_cards;

/// Render one navigation tab per category, in order. The selected
/// category's tab carries the `active` class; every tab links to the
/// selection route with its category id as the target.
pub fn render_nav(categories: &[Category], state: &PageState) -> String {
    let mut out = String::with_capacity(FRAGMENT_CAPACITY);
    for category in categories {
        out.push_str(&format!(
            "<a class=\"{class}{active}\" href=\"{path}?{key}={id}\" data-target=\"{id}\"><i class=\"{icon}\"></i> {title}</a>",
            class = TAB_BTN_CLASS,
            active = active_suffix(state, &category.id),
            path = SELECT_PATH,
            key = TAB_PARAM,
            id = category.id,
            icon = category.icon,
            title = category.nav_title,
        ));
    }
    out
}

/// Render one content section per category, in order. Only the selected
/// category's section carries the `active` class; a dangling selection
/// leaves every section inactive.
pub fn render_sections(categories: &[Category], state: &PageState) -> String {
    let mut out = String::with_capacity(FRAGMENT_CAPACITY);
    for category in categories {
        out.push_str(&format!(
            "<div id=\"{id}\" class=\"{class}{active}\">\
             <div class=\"section-header\">\
             <i class=\"{icon}\" style=\"font-size: 1.8rem; color: {color};\"></i>\
             <div class=\"section-title\">{title}</div>\
             </div>{body}</div>",
            id = category.id,
            class = SECTION_CLASS,
            active = active_suffix(state, &category.id),
            icon = category.icon,
            color = category.title_color,
            title = category.section_title,
            body = render_body(category),
        ));
    }
    out
}

fn render_body(category: &Category) -> String {
    match category.display_mode() {
        DisplayMode::Grouped(groups) => groups
            .iter()
            .map(|group| {
                format!(
                    "<details{open}><summary>{name}</summary><div class=\"grid\">{cards}</div></details>",
                    open = if group.is_open { " open" } else { "" },
                    name = group.name,
                    cards = render_cards(&group.items),
                )
            })
            .collect(),
        DisplayMode::Flat(items) => {
            format!("<div class=\"grid\">{}</div>", render_cards(items))
        }
    }
}

fn active_suffix(state: &PageState, id: &str) -> &'static str {
    if state.is_tab_active(id) {
        " active"
    } else {
        ""
    }
}
