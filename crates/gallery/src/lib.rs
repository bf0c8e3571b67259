//! Component gallery application.
//!
//! Composes the shared UI kit, the theme store, and the toast queue into demo
//! pages that exercise every primitive family in a real routed surface.

mod app;
mod pages;

pub use app::GalleryApp;
