//! `setTimeout`/`requestAnimationFrame` scheduler implementation.

#[cfg(target_arch = "wasm32")]
use std::{
    cell::{Cell, RefCell},
    collections::HashMap,
    rc::Rc,
};

use platform::{ScheduledCallback, Scheduler, TimerHandle};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast};

#[derive(Clone, Default)]
/// Browser scheduler mapping [`Scheduler`] onto `window` timer APIs.
pub struct WebScheduler {
    #[cfg(target_arch = "wasm32")]
    inner: Rc<WebSchedulerState>,
}

#[cfg(target_arch = "wasm32")]
#[derive(Default)]
struct WebSchedulerState {
    next_id: Cell<u64>,
    // Maps live handles to their browser timeout ids so cancel can clear them.
    active: RefCell<HashMap<u64, i32>>,
}

impl Scheduler for WebScheduler {
    fn schedule(&self, delay_ms: u64, callback: ScheduledCallback) -> TimerHandle {
        #[cfg(target_arch = "wasm32")]
        {
            let Some(window) = web_sys::window() else {
                return TimerHandle(0);
            };

            let handle_id = self.inner.next_id.get() + 1;
            self.inner.next_id.set(handle_id);

            let state = self.inner.clone();
            let fire = Closure::once_into_js(move || {
                state.active.borrow_mut().remove(&handle_id);
                callback();
            });
            let timeout_ms = delay_ms.min(i32::MAX as u64) as i32;
            match window.set_timeout_with_callback_and_timeout_and_arguments_0(
                fire.unchecked_ref(),
                timeout_ms,
            ) {
                Ok(timeout_id) => {
                    self.inner.active.borrow_mut().insert(handle_id, timeout_id);
                    TimerHandle(handle_id)
                }
                Err(_) => TimerHandle(0),
            }
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = (delay_ms, callback);
            TimerHandle(0)
        }
    }

    fn cancel(&self, handle: TimerHandle) {
        #[cfg(target_arch = "wasm32")]
        {
            let Some(timeout_id) = self.inner.active.borrow_mut().remove(&handle.0) else {
                return;
            };
            if let Some(window) = web_sys::window() {
                window.clear_timeout_with_handle(timeout_id);
            }
        }

        #[cfg(not(target_arch = "wasm32"))]
        let _ = handle;
    }

    fn request_frame(&self, callback: ScheduledCallback) {
        #[cfg(target_arch = "wasm32")]
        {
            let Some(window) = web_sys::window() else {
                return;
            };
            let fire = Closure::once_into_js(move || callback());
            let _ = window.request_animation_frame(fire.unchecked_ref());
        }

        #[cfg(not(target_arch = "wasm32"))]
        let _ = callback;
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn native_stub_returns_inert_handles() {
        let scheduler = WebScheduler::default();
        let handle = scheduler.schedule(10, Box::new(|| {}));
        assert_eq!(handle, TimerHandle(0));
        scheduler.cancel(handle);
        scheduler.request_frame(Box::new(|| {}));
    }
}
