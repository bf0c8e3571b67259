//! Provider and context wiring for the theme store.

use leptos::*;
use platform::PlatformServices;

use crate::store::ThemeStore;

#[component]
/// Creates the [`ThemeStore`] over the injected host services, provides it to
/// descendants, and starts initialization.
pub fn ThemeProvider(
    /// Host service bundle assembled by the entry layer.
    services: PlatformServices,
    children: Children,
) -> impl IntoView {
    let store = ThemeStore::new(services);
    store.initialize();
    provide_context(store.clone());

    on_cleanup(move || store.teardown());

    children().into_view()
}

/// Returns the current [`ThemeStore`].
///
/// # Panics
///
/// Panics if called outside [`ThemeProvider`].
pub fn use_theme() -> ThemeStore {
    use_context::<ThemeStore>().expect("ThemeStore not provided")
}
