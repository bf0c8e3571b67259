//! Provider and context wiring for the toast queue.

use leptos::*;
use platform::PlatformServices;

use crate::queue::ToastQueue;

#[component]
/// Creates the [`ToastQueue`] over the injected host services and provides it
/// to descendants.
pub fn ToastProvider(
    /// Host service bundle assembled by the entry layer.
    services: PlatformServices,
    children: Children,
) -> impl IntoView {
    let queue = ToastQueue::new(services.scheduler.clone());
    provide_context(queue);

    children().into_view()
}

/// Returns the current [`ToastQueue`].
///
/// # Panics
///
/// Panics if called outside [`ToastProvider`].
pub fn use_toasts() -> ToastQueue {
    use_context::<ToastQueue>().expect("ToastQueue not provided")
}
