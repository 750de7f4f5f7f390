//! Link-item cards.

use crate::constants::DEFAULT_ICON_BG;
use crate::models::Item;

/// Render one card per item, in input order.
///
/// An image icon wins over a glyph; an item with neither gets no icon
/// element at all. The title is always present.
pub fn render_cards(items: &[Item]) -> String {
    items.iter().map(render_card).collect()
}

fn render_card(item: &Item) -> String {
    format!(
        "<a href=\"{url}\" class=\"card\" target=\"_blank\">{icon}<div class=\"card-info\"><h3>{title}</h3></div></a>",
        url = item.url,
        icon = render_icon(item),
        title = item.title,
    )
}

fn render_icon(item: &Item) -> String {
    if let Some(icon) = &item.icon {
        format!("<img src=\"{}\" alt=\"{}\">", icon, item.title)
    } else if let Some(symbol) = &item.icon_symbol {
        format!(
            "<i class=\"{symbol}\" style=\"font-size: 36px; color: {color}; background: {bg}; \
             border-radius: 8px; width: 36px; height: 36px; display: flex; align-items: center; \
             justify-content: center;\"></i>",
            symbol = symbol,
            color = item.icon_color.as_deref().unwrap_or_default(),
            bg = item.icon_bg.as_deref().unwrap_or(DEFAULT_ICON_BG),
        )
    } else {
        String::new()
    }
}
