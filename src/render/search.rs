//! The search widget: engine switcher, quick links, and the form.

use crate::constants::*;
use crate::models::SearchConfig;
use crate::page::PageState;

/// Render the full search widget.
///
/// The selected engine carries the `active` class and determines the form's
/// submission target and input name. Engine controls link to the selection
/// route so switching works without client-side script; the provider URL
/// and parameter name ride along as data attributes.
pub fn render_search(search: &SearchConfig, state: &PageState) -> String {
    let mut out = String::with_capacity(FRAGMENT_CAPACITY);

    out.push_str("<div class=\"search-engines\">");
    for (index, engine) in search.engines.iter().enumerate() {
        let active = if index == state.active_engine_index() {
            format!(" {}", ACTIVE_CLASS)
        } else {
            String::new()
        };
        out.push_str(&format!(
            "<a class=\"{class}{active}\" href=\"{path}?{key}={index}\" data-url=\"{url}\" data-name=\"{param}\">{name}</a>",
            class = ENGINE_BTN_CLASS,
            active = active,
            path = SELECT_PATH,
            key = ENGINE_PARAM,
            index = index,
            url = engine.url,
            param = engine.param,
            name = engine.name,
        ));
    }
    out.push_str("<div class=\"divider\"></div>");
    for link in &search.quick_links {
        out.push_str(&format!(
            "<a href=\"{url}\" class=\"mini-icon\" target=\"_blank\" title=\"{title}\"><img src=\"{icon}\" alt=\"{title}\"></a>",
            url = link.url,
            icon = link.icon,
            title = link.title,
        ));
    }
    out.push_str("</div>");

    let engine = &search.engines[state.active_engine_index()];
    out.push_str(&format!(
        "<form id=\"searchForm\" action=\"{action}\" method=\"get\" target=\"_blank\">\
         <div class=\"search-box\">\
         <input type=\"text\" name=\"{param}\" class=\"search-input\" placeholder=\"{placeholder}\" autocomplete=\"off\">\
         <button type=\"submit\" class=\"search-btn\"><i class=\"ri-search-2-line\"></i></button>\
         </div></form>",
        action = engine.action(),
        param = engine.param,
        placeholder = SEARCH_PLACEHOLDER,
    ));

    out
}
