//! Theme synchronization: the persisted light/dark store, its OS-preference
//! reconciliation, and the stateless presenter controls.
//!
//! The store is the sole writer of the persisted theme key and the document
//! presentation attribute. Presenters read the store through context and call
//! its mutators; they never hold mode state of their own.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod presenters;
mod provider;
mod store;

pub use presenters::{ThemeModePill, ThemeSwitch, ThemeToggleButton};
pub use provider::{use_theme, ThemeProvider};
pub use store::{PersistedTheme, ThemeMode, ThemeSource, ThemeStore, THEME_PREF_KEY};
