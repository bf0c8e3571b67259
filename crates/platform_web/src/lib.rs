//! Browser adapters for the [`platform`] host-service contracts.
//!
//! Every adapter is a thin wrapper over one browser API: `localStorage` for
//! preferences, `setTimeout`/`requestAnimationFrame` for scheduling,
//! `matchMedia` for the OS color-scheme signal, and the document element for
//! the presentation attribute. On non-WASM targets the adapters degrade to
//! inert stubs so dependent crates keep compiling natively.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod color_scheme;
mod mode_attribute;
mod prefs;
mod scheduler;

use std::rc::Rc;

use platform::PlatformServices;

pub use color_scheme::MediaColorScheme;
pub use mode_attribute::DocumentModeAttribute;
pub use prefs::LocalPrefsStore;
pub use scheduler::WebScheduler;

/// Assembles the browser service bundle consumed by the providers.
pub fn web_services() -> PlatformServices {
    PlatformServices {
        prefs: Rc::new(LocalPrefsStore),
        scheduler: Rc::new(WebScheduler::default()),
        color_scheme: Rc::new(MediaColorScheme::default()),
        mode_attribute: Rc::new(DocumentModeAttribute),
    }
}
