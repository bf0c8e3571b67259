//! `matchMedia`-backed OS color-scheme signal.

#[cfg(target_arch = "wasm32")]
use std::{
    cell::{Cell, RefCell},
    collections::HashMap,
    rc::Rc,
};

use platform::{ColorSchemeSignal, SchemeListener, SchemeSubscription};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast};

#[cfg(target_arch = "wasm32")]
const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

#[derive(Clone, Default)]
/// Browser color-scheme signal backed by the `prefers-color-scheme` media
/// query.
pub struct MediaColorScheme {
    #[cfg(target_arch = "wasm32")]
    inner: Rc<MediaColorSchemeState>,
}

#[cfg(target_arch = "wasm32")]
#[derive(Default)]
struct MediaColorSchemeState {
    next_id: Cell<u64>,
    // Listener closures must outlive their registration on the media query
    // list, so each subscription retains its closure until unsubscribe.
    registrations: RefCell<HashMap<u64, Registration>>,
}

#[cfg(target_arch = "wasm32")]
struct Registration {
    query: web_sys::MediaQueryList,
    closure: Closure<dyn FnMut(web_sys::MediaQueryListEvent)>,
}

#[cfg(target_arch = "wasm32")]
fn dark_media_query() -> Option<web_sys::MediaQueryList> {
    web_sys::window()?.match_media(DARK_SCHEME_QUERY).ok().flatten()
}

impl ColorSchemeSignal for MediaColorScheme {
    fn prefers_dark(&self) -> Option<bool> {
        #[cfg(target_arch = "wasm32")]
        {
            dark_media_query().map(|query| query.matches())
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            None
        }
    }

    fn subscribe(&self, listener: SchemeListener) -> SchemeSubscription {
        #[cfg(target_arch = "wasm32")]
        {
            let Some(query) = dark_media_query() else {
                return SchemeSubscription(0);
            };

            let closure = Closure::<dyn FnMut(web_sys::MediaQueryListEvent)>::wrap(Box::new(
                move |event: web_sys::MediaQueryListEvent| listener(event.matches()),
            ));
            if query
                .add_event_listener_with_callback("change", closure.as_ref().unchecked_ref())
                .is_err()
            {
                return SchemeSubscription(0);
            }

            let id = self.inner.next_id.get() + 1;
            self.inner.next_id.set(id);
            self.inner
                .registrations
                .borrow_mut()
                .insert(id, Registration { query, closure });
            SchemeSubscription(id)
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = listener;
            SchemeSubscription(0)
        }
    }

    fn unsubscribe(&self, subscription: SchemeSubscription) {
        #[cfg(target_arch = "wasm32")]
        {
            let Some(registration) = self
                .inner
                .registrations
                .borrow_mut()
                .remove(&subscription.0)
            else {
                return;
            };
            let _ = registration.query.remove_event_listener_with_callback(
                "change",
                registration.closure.as_ref().unchecked_ref(),
            );
        }

        #[cfg(not(target_arch = "wasm32"))]
        let _ = subscription;
    }
}
