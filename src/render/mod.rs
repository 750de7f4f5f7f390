//! Pure HTML fragment builders.
//!
//! Each renderer is a deterministic function from data (plus the current
//! [`PageState`](crate::page::PageState)) to a markup string; none of them
//! touch the page skeleton. Strings from the data document are interpolated
//! as-is — the document is the operator's own file.

mod cards;
mod search;
mod sections;

pub use cards::render_cards;
pub use search::render_search;
pub use sections::{render_nav, render_sections};
