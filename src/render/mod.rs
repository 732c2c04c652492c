//! # Page Renderer
//!
//! Pure functions from entries to markup. The full page and the partial
//! list share [`components::render_entry_list`], so a submission response
//! can swap the `#message-list` container in place.
pub mod components;
pub mod html;
pub mod styles;

pub use components::{
    ENTRY_LIST_ID, avatar, render_document, render_entry, render_entry_list, render_page,
};
