//! Language and input-method options screen controller.
//!
//! Presents a selectable list of display languages and, for the selected
//! language, derives and lets the user edit the UI display language, the
//! spell-check dictionary, and the set of enabled input methods -- keeping
//! three independently persisted preferences consistent with the panel.

pub mod catalog;
pub mod controller;
pub(crate) mod test_utils;
pub mod view;

pub use catalog::{
    InputMethodDescriptor, InputMethodKind, build_language_map, builtin_catalog, load_catalog,
    parse_catalog,
};
pub use controller::{DownloadStatus, LanguageOptionsConfig, LanguageOptionsController};
pub use view::{LanguageOptionsView, SpellCheckDisplay, UiLanguageDisplay};
