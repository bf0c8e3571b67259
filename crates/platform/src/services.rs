//! Host service bundle injected into the stores.

use std::rc::Rc;

use crate::{
    color_scheme::{ColorSchemeSignal, NoopColorScheme},
    mode_attribute::{ModeAttribute, NoopModeAttribute},
    prefs::{NoopPrefsStore, PrefsStore},
    scheduler::{NoopScheduler, Scheduler},
};

#[derive(Clone)]
/// Bundle of the host services the theme store and toast queue consume.
///
/// Assembled once at the entry layer (`platform_web::web_services` in the
/// browser, adapter-by-adapter in tests) and passed to the providers rather
/// than looked up ambiently.
pub struct PlatformServices {
    /// Preference store for the persisted theme key.
    pub prefs: Rc<dyn PrefsStore>,
    /// Timer and paint-frame scheduler.
    pub scheduler: Rc<dyn Scheduler>,
    /// OS color-scheme preference signal.
    pub color_scheme: Rc<dyn ColorSchemeSignal>,
    /// Document-level dark-mode attribute.
    pub mode_attribute: Rc<dyn ModeAttribute>,
}

impl PlatformServices {
    /// Returns a bundle of no-op services.
    pub fn noop() -> Self {
        Self {
            prefs: Rc::new(NoopPrefsStore),
            scheduler: Rc::new(NoopScheduler),
            color_scheme: Rc::new(NoopColorScheme),
            mode_attribute: Rc::new(NoopModeAttribute),
        }
    }
}
