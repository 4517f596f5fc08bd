//! gui/mod.rs
//!
//! This folder contains ONLY frontend concerns:
//! - app state ('Quill')
//! - messages ('Message')
//! - update logic ('update()')
//! - view layout ('view()')
//! - small UI helpers ('util')
//!
//! Every metaflac call goes through `core::store`.

pub(crate) mod state;
pub(crate) mod update;
pub(crate) mod util;
pub(crate) mod view;

// Re-export the entry points main.rs needs.
pub(crate) use state::Quill;
pub(crate) use update::{boot, update};
pub(crate) use view::view;
