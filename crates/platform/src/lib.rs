//! Typed host-service contracts shared by the theme store, the toast queue, and
//! the gallery entry layer.
//!
//! This crate is the API-first boundary for platform services. It owns the
//! preference-store, scheduler, color-scheme, and document-attribute contracts
//! together with in-memory adapters for native tests, while concrete browser
//! adapters live in `platform_web`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod color_scheme;
pub mod mode_attribute;
pub mod prefs;
pub mod scheduler;
pub mod services;
pub mod time;

pub use color_scheme::{
    ColorSchemeSignal, FixedColorScheme, NoopColorScheme, SchemeListener, SchemeSubscription,
};
pub use mode_attribute::{MemoryModeAttribute, ModeAttribute, NoopModeAttribute};
pub use prefs::{load_pref_typed, save_pref_typed, MemoryPrefsStore, NoopPrefsStore, PrefsStore};
pub use scheduler::{delay, ManualScheduler, NoopScheduler, ScheduledCallback, Scheduler, TimerHandle};
pub use services::PlatformServices;
pub use time::unix_time_ms_now;
