//! Theme store state machine.

use std::{cell::Cell, rc::Rc};

use leptos::{
    create_rw_signal, logging, ReadSignal, RwSignal, SignalGetUntracked, SignalSet,
};
use platform::{
    save_pref_typed, PlatformServices, PrefsStore, SchemeSubscription, TimerHandle,
};
use serde::{Deserialize, Serialize};

/// Preference key holding the persisted theme record.
pub const THEME_PREF_KEY: &str = "gallery.theme.v1";

/// How long presenters may animate a mode switch before the store clears the
/// transitioning marker.
const THEME_TRANSITION_MS: u64 = 220;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// The active light/dark mode.
pub enum ThemeMode {
    /// Light mode.
    Light,
    /// Dark mode.
    Dark,
}

impl Default for ThemeMode {
    fn default() -> Self {
        Self::Light
    }
}

impl ThemeMode {
    /// Returns the other mode.
    pub fn opposite(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Returns `true` for [`ThemeMode::Dark`].
    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    /// Maps an OS dark-preference flag onto a mode.
    pub fn from_dark(dark: bool) -> Self {
        if dark {
            Self::Dark
        } else {
            Self::Light
        }
    }

    /// Stable token for DOM attributes and labels.
    pub fn token(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Who chose the persisted mode.
///
/// The persisted store always mirrors the active mode, so this marker is what
/// lets an explicit user choice outlive OS preference changes while a mode the
/// store merely reconciled from the OS keeps following it.
pub enum ThemeSource {
    /// The user picked the mode through a store mutator.
    Explicit,
    /// The store resolved the mode from the OS preference or the default.
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Persisted theme record.
pub struct PersistedTheme {
    /// Persisted mode, always equal to the active in-memory mode.
    pub mode: ThemeMode,
    /// Origin of the persisted mode.
    pub source: ThemeSource,
}

fn load_persisted(prefs: &dyn PrefsStore) -> Option<PersistedTheme> {
    let raw = match prefs.load(THEME_PREF_KEY) {
        Ok(raw) => raw?,
        Err(err) => {
            logging::warn!("theme preference load failed: {err}");
            return None;
        }
    };
    if let Ok(record) = serde_json::from_str::<PersistedTheme>(&raw) {
        return Some(record);
    }
    // Earlier versions persisted the bare mode; a bare value was always an
    // explicit user choice.
    match serde_json::from_str::<ThemeMode>(&raw) {
        Ok(mode) => Some(PersistedTheme {
            mode,
            source: ThemeSource::Explicit,
        }),
        Err(err) => {
            logging::warn!("theme preference parse failed: {err}");
            None
        }
    }
}

#[derive(Clone)]
/// Owner of the light/dark mode and every side effect attached to it.
///
/// Cheap to clone; clones share one store. Created by
/// [`crate::ThemeProvider`] and read back through [`crate::use_theme`].
pub struct ThemeStore {
    inner: Rc<ThemeStoreInner>,
}

struct ThemeStoreInner {
    services: PlatformServices,
    mode: RwSignal<ThemeMode>,
    transitioning: RwSignal<bool>,
    initialized: Cell<bool>,
    initialize_queued: Cell<bool>,
    explicit: Cell<bool>,
    transition_timer: Cell<Option<TimerHandle>>,
    scheme_subscription: Cell<Option<SchemeSubscription>>,
}

impl ThemeStore {
    /// Creates a store over the injected host services.
    ///
    /// The store starts at the built-in default mode; call
    /// [`ThemeStore::initialize`] to resolve the real starting mode.
    pub fn new(services: PlatformServices) -> Self {
        Self {
            inner: Rc::new(ThemeStoreInner {
                services,
                mode: create_rw_signal(ThemeMode::default()),
                transitioning: create_rw_signal(false),
                initialized: Cell::new(false),
                initialize_queued: Cell::new(false),
                explicit: Cell::new(false),
                transition_timer: Cell::new(None),
                scheme_subscription: Cell::new(None),
            }),
        }
    }

    /// Resolves the starting mode with precedence persisted value, then OS
    /// preference, then the built-in default.
    ///
    /// Resolution is deferred to the next paint frame so first paint happens
    /// before any attribute flip. Runs once per session; later calls are
    /// no-ops.
    pub fn initialize(&self) {
        if self.inner.initialized.get() || self.inner.initialize_queued.get() {
            return;
        }
        self.inner.initialize_queued.set(true);
        let store = self.clone();
        self.inner
            .services
            .scheduler
            .request_frame(Box::new(move || store.resolve_initial_mode()));
    }

    fn resolve_initial_mode(&self) {
        if self.inner.initialized.get() {
            return;
        }
        let (mode, source) = match load_persisted(self.inner.services.prefs.as_ref()) {
            Some(record) => (record.mode, record.source),
            None => match self.inner.services.color_scheme.prefers_dark() {
                Some(dark) => (ThemeMode::from_dark(dark), ThemeSource::System),
                None => (ThemeMode::default(), ThemeSource::System),
            },
        };
        self.inner.explicit.set(source == ThemeSource::Explicit);
        self.apply_mode(mode, source, false);
        self.inner.initialized.set(true);
        self.subscribe_to_scheme();
    }

    /// Returns the current mode without subscribing.
    pub fn get(&self) -> ThemeMode {
        self.inner.mode.get_untracked()
    }

    /// Reactive mode signal for presenters and styling consumers.
    pub fn mode(&self) -> ReadSignal<ThemeMode> {
        self.inner.mode.read_only()
    }

    /// Reactive marker that is `true` for a short window after each mode
    /// switch, for presenter animations.
    pub fn transitioning(&self) -> ReadSignal<bool> {
        self.inner.transitioning.read_only()
    }

    /// Returns whether [`ThemeStore::initialize`] has completed.
    pub fn is_initialized(&self) -> bool {
        self.inner.initialized.get()
    }

    /// Applies an explicit mode choice: memory, persisted record, document
    /// attribute, and the transitioning marker.
    pub fn set(&self, mode: ThemeMode) {
        self.inner.explicit.set(true);
        self.apply_mode(mode, ThemeSource::Explicit, true);
    }

    /// Switches to the opposite of the current mode.
    pub fn toggle(&self) {
        self.set(self.get().opposite());
    }

    /// Handles an OS preference change.
    ///
    /// Ignored while an explicit user choice is persisted; the OS only drives
    /// the mode for sessions that never picked one.
    pub fn on_external_preference_change(&self, prefers_dark: bool) {
        if self.inner.explicit.get() {
            return;
        }
        self.apply_mode(ThemeMode::from_dark(prefers_dark), ThemeSource::System, true);
    }

    /// Unsubscribes from the OS preference signal and cancels the pending
    /// transition timer.
    pub fn teardown(&self) {
        if let Some(subscription) = self.inner.scheme_subscription.take() {
            self.inner.services.color_scheme.unsubscribe(subscription);
        }
        if let Some(handle) = self.inner.transition_timer.take() {
            self.inner.services.scheduler.cancel(handle);
        }
    }

    fn apply_mode(&self, mode: ThemeMode, source: ThemeSource, animate: bool) {
        self.inner.mode.set(mode);
        self.inner.services.mode_attribute.set_dark(mode.is_dark());
        // Persistence failures never block the in-memory mode; the UI stays
        // consistent and the failure is only logged.
        if let Err(err) = save_pref_typed(
            self.inner.services.prefs.as_ref(),
            THEME_PREF_KEY,
            &PersistedTheme { mode, source },
        ) {
            logging::warn!("theme preference persist failed: {err}");
        }
        if animate {
            self.begin_transition_marker();
        }
    }

    fn begin_transition_marker(&self) {
        if let Some(handle) = self.inner.transition_timer.take() {
            self.inner.services.scheduler.cancel(handle);
        }
        self.inner.transitioning.set(true);
        let store = self.clone();
        let handle = self.inner.services.scheduler.schedule(
            THEME_TRANSITION_MS,
            Box::new(move || {
                store.inner.transition_timer.set(None);
                store.inner.transitioning.set(false);
            }),
        );
        self.inner.transition_timer.set(Some(handle));
    }

    fn subscribe_to_scheme(&self) {
        let store = self.clone();
        let subscription = self
            .inner
            .services
            .color_scheme
            .subscribe(Rc::new(move |dark| store.on_external_preference_change(dark)));
        self.inner.scheme_subscription.set(Some(subscription));
    }
}

#[cfg(test)]
mod tests {
    use platform::{
        load_pref_typed, FixedColorScheme, ManualScheduler, MemoryModeAttribute, MemoryPrefsStore,
        ModeAttribute,
    };
    use pretty_assertions::assert_eq;

    use super::*;

    struct Harness {
        store: ThemeStore,
        scheduler: Rc<ManualScheduler>,
        prefs: MemoryPrefsStore,
        attribute: Rc<MemoryModeAttribute>,
        scheme: Rc<FixedColorScheme>,
    }

    impl Harness {
        fn new(prefers_dark: Option<bool>) -> Self {
            let _ = leptos::create_runtime();
            let scheduler = Rc::new(ManualScheduler::default());
            let prefs = MemoryPrefsStore::default();
            let attribute = Rc::new(MemoryModeAttribute::default());
            let scheme = Rc::new(FixedColorScheme::reporting(prefers_dark));
            let store = ThemeStore::new(PlatformServices {
                prefs: Rc::new(prefs.clone()),
                scheduler: scheduler.clone(),
                color_scheme: scheme.clone(),
                mode_attribute: attribute.clone(),
            });
            Self {
                store,
                scheduler,
                prefs,
                attribute,
                scheme,
            }
        }

        fn initialized(prefers_dark: Option<bool>) -> Self {
            let harness = Self::new(prefers_dark);
            harness.store.initialize();
            harness.scheduler.run_frames();
            harness
        }

        fn persisted(&self) -> Option<PersistedTheme> {
            load_pref_typed(&self.prefs, THEME_PREF_KEY).expect("load persisted theme")
        }
    }

    #[test]
    fn initialize_prefers_persisted_value_over_os_preference() {
        let harness = Harness::new(Some(false));
        save_pref_typed(
            &harness.prefs,
            THEME_PREF_KEY,
            &PersistedTheme {
                mode: ThemeMode::Dark,
                source: ThemeSource::Explicit,
            },
        )
        .expect("seed persisted theme");

        harness.store.initialize();
        assert!(!harness.store.is_initialized());
        harness.scheduler.run_frames();

        assert!(harness.store.is_initialized());
        assert_eq!(harness.store.get(), ThemeMode::Dark);
        assert!(harness.attribute.is_dark());
    }

    #[test]
    fn initialize_resolves_os_preference_and_persists_it() {
        let harness = Harness::initialized(Some(true));

        assert_eq!(harness.store.get(), ThemeMode::Dark);
        assert!(harness.attribute.is_dark());
        assert_eq!(
            harness.persisted(),
            Some(PersistedTheme {
                mode: ThemeMode::Dark,
                source: ThemeSource::System,
            })
        );
    }

    #[test]
    fn initialize_defaults_to_light_without_any_signal() {
        let harness = Harness::initialized(None);

        assert_eq!(harness.store.get(), ThemeMode::Light);
        assert!(!harness.attribute.is_dark());
    }

    #[test]
    fn initialize_runs_exactly_once() {
        let harness = Harness::new(Some(true));
        harness.store.initialize();
        harness.store.initialize();
        harness.scheduler.run_frames();
        assert_eq!(harness.scheme.listener_count(), 1);

        harness.store.set(ThemeMode::Light);
        harness.store.initialize();
        harness.scheduler.run_frames();

        // A late initialize neither re-resolves the mode nor re-subscribes.
        assert_eq!(harness.store.get(), ThemeMode::Light);
        assert_eq!(harness.scheme.listener_count(), 1);
    }

    #[test]
    fn set_reflects_last_call_in_memory_persisted_store_and_attribute() {
        let harness = Harness::initialized(None);

        for mode in [ThemeMode::Dark, ThemeMode::Light, ThemeMode::Dark] {
            harness.store.set(mode);
        }

        assert_eq!(harness.store.get(), ThemeMode::Dark);
        assert!(harness.attribute.is_dark());
        assert_eq!(
            harness.persisted(),
            Some(PersistedTheme {
                mode: ThemeMode::Dark,
                source: ThemeSource::Explicit,
            })
        );
    }

    #[test]
    fn toggle_twice_returns_to_the_original_mode() {
        let harness = Harness::initialized(None);
        let original = harness.store.get();

        harness.store.toggle();
        assert_eq!(harness.store.get(), original.opposite());
        harness.store.toggle();
        assert_eq!(harness.store.get(), original);
    }

    #[test]
    fn os_change_applies_while_no_explicit_choice_exists() {
        let harness = Harness::initialized(Some(false));
        assert_eq!(harness.store.get(), ThemeMode::Light);

        harness.scheme.emit(true);
        assert_eq!(harness.store.get(), ThemeMode::Dark);
        assert_eq!(
            harness.persisted(),
            Some(PersistedTheme {
                mode: ThemeMode::Dark,
                source: ThemeSource::System,
            })
        );

        harness.scheme.emit(false);
        assert_eq!(harness.store.get(), ThemeMode::Light);
    }

    #[test]
    fn os_change_loses_to_persisted_explicit_choice() {
        let harness = Harness::new(Some(true));
        save_pref_typed(
            &harness.prefs,
            THEME_PREF_KEY,
            &PersistedTheme {
                mode: ThemeMode::Light,
                source: ThemeSource::Explicit,
            },
        )
        .expect("seed persisted theme");
        harness.store.initialize();
        harness.scheduler.run_frames();

        harness.scheme.emit(true);

        assert_eq!(harness.store.get(), ThemeMode::Light);
        assert!(!harness.attribute.is_dark());
    }

    #[test]
    fn explicit_choice_in_session_blocks_later_os_changes() {
        let harness = Harness::initialized(None);

        harness.store.set(ThemeMode::Dark);
        harness.scheme.emit(false);

        assert_eq!(harness.store.get(), ThemeMode::Dark);
    }

    #[test]
    fn legacy_bare_mode_value_counts_as_explicit() {
        let harness = Harness::new(Some(false));
        harness
            .prefs
            .save(THEME_PREF_KEY, "\"dark\"")
            .expect("seed legacy value");
        harness.store.initialize();
        harness.scheduler.run_frames();

        assert_eq!(harness.store.get(), ThemeMode::Dark);
        harness.scheme.emit(false);
        assert_eq!(harness.store.get(), ThemeMode::Dark);
    }

    #[test]
    fn transition_marker_clears_after_the_store_owned_delay() {
        let harness = Harness::initialized(None);

        harness.store.set(ThemeMode::Dark);
        assert!(harness.store.transitioning().get_untracked());

        harness.scheduler.advance(THEME_TRANSITION_MS);
        assert!(!harness.store.transitioning().get_untracked());
        assert_eq!(harness.scheduler.pending_timers(), 0);
    }

    #[test]
    fn rapid_switches_rearm_one_transition_timer() {
        let harness = Harness::initialized(None);

        harness.store.set(ThemeMode::Dark);
        harness.scheduler.advance(THEME_TRANSITION_MS / 2);
        harness.store.toggle();

        assert_eq!(harness.scheduler.pending_timers(), 1);
        harness.scheduler.advance(THEME_TRANSITION_MS / 2);
        assert!(harness.store.transitioning().get_untracked());
        harness.scheduler.advance(THEME_TRANSITION_MS / 2);
        assert!(!harness.store.transitioning().get_untracked());
    }

    #[test]
    fn persistence_failure_never_blocks_the_in_memory_mode() {
        struct FailingPrefsStore;

        impl PrefsStore for FailingPrefsStore {
            fn load(&self, _key: &str) -> Result<Option<String>, String> {
                Err("storage unavailable".to_string())
            }

            fn save(&self, _key: &str, _value: &str) -> Result<(), String> {
                Err("storage unavailable".to_string())
            }

            fn delete(&self, _key: &str) -> Result<(), String> {
                Err("storage unavailable".to_string())
            }
        }

        let _ = leptos::create_runtime();
        let scheduler = Rc::new(ManualScheduler::default());
        let attribute = Rc::new(MemoryModeAttribute::default());
        let store = ThemeStore::new(PlatformServices {
            prefs: Rc::new(FailingPrefsStore),
            scheduler: scheduler.clone(),
            color_scheme: Rc::new(FixedColorScheme::reporting(None)),
            mode_attribute: attribute.clone(),
        });
        store.initialize();
        scheduler.run_frames();

        store.set(ThemeMode::Dark);

        assert_eq!(store.get(), ThemeMode::Dark);
        assert!(attribute.is_dark());
    }

    #[test]
    fn teardown_unsubscribes_from_the_os_signal() {
        let harness = Harness::initialized(None);
        assert_eq!(harness.scheme.listener_count(), 1);

        harness.store.teardown();

        assert_eq!(harness.scheme.listener_count(), 0);
        harness.scheme.emit(true);
        assert_eq!(harness.store.get(), ThemeMode::Light);
    }
}
