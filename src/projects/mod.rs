//! Project data: the record model, the data-source loader, the store that
//! derives the visible list, and the renderer that turns it into cards.

pub mod project;
pub mod render;
pub mod source;
pub mod store;
