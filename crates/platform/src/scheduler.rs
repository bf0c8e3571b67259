//! Timer and paint-frame scheduling contracts.
//!
//! Every timed side effect in the stores (auto-dismiss, transition-marker
//! clear, deferred initialization) runs through [`Scheduler`], so native tests
//! can drive time deterministically with [`ManualScheduler`] while the browser
//! adapter maps onto `setTimeout`/`requestAnimationFrame`.

use std::cell::{Cell, RefCell};

use futures::channel::oneshot;

/// One-shot callback owned by the scheduler until it fires or is cancelled.
pub type ScheduledCallback = Box<dyn FnOnce()>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Opaque handle for a scheduled timeout.
///
/// Handles stay valid after the timer fires; cancelling a fired or unknown
/// handle is a no-op.
pub struct TimerHandle(pub u64);

/// Host service for one-shot timers and next-paint-frame callbacks.
pub trait Scheduler {
    /// Schedules `callback` to run once after `delay_ms` milliseconds.
    fn schedule(&self, delay_ms: u64, callback: ScheduledCallback) -> TimerHandle;

    /// Cancels a pending timeout. Unknown or already-fired handles are ignored.
    fn cancel(&self, handle: TimerHandle);

    /// Schedules `callback` to run on the next paint frame.
    fn request_frame(&self, callback: ScheduledCallback);
}

#[derive(Debug, Clone, Copy, Default)]
/// Scheduler that drops every callback, for unsupported targets.
pub struct NoopScheduler;

impl Scheduler for NoopScheduler {
    fn schedule(&self, _delay_ms: u64, _callback: ScheduledCallback) -> TimerHandle {
        TimerHandle(0)
    }

    fn cancel(&self, _handle: TimerHandle) {}

    fn request_frame(&self, _callback: ScheduledCallback) {}
}

struct PendingTimer {
    handle: TimerHandle,
    due_ms: u64,
    seq: u64,
    callback: ScheduledCallback,
}

#[derive(Default)]
/// Deterministic scheduler driven by an explicit virtual clock.
///
/// Timers fire from [`ManualScheduler::advance`] in due-time order, ties
/// breaking in arm order. Frame callbacks queue until
/// [`ManualScheduler::run_frames`] drains them.
pub struct ManualScheduler {
    now_ms: Cell<u64>,
    next_id: Cell<u64>,
    timers: RefCell<Vec<PendingTimer>>,
    frames: RefCell<Vec<ScheduledCallback>>,
}

impl ManualScheduler {
    /// Returns the current virtual time in milliseconds.
    pub fn now_ms(&self) -> u64 {
        self.now_ms.get()
    }

    /// Returns the number of pending (not yet fired or cancelled) timers.
    pub fn pending_timers(&self) -> usize {
        self.timers.borrow().len()
    }

    /// Returns the number of queued frame callbacks.
    pub fn pending_frames(&self) -> usize {
        self.frames.borrow().len()
    }

    /// Advances the virtual clock by `delta_ms`, firing every timer that comes
    /// due on the way.
    ///
    /// Callbacks run with the clock set to their due time, so a callback that
    /// re-arms a timer schedules relative to its own firing instant. Timers
    /// armed or cancelled by a firing callback are honored within the same
    /// advance.
    pub fn advance(&self, delta_ms: u64) {
        let target = self.now_ms.get().saturating_add(delta_ms);
        loop {
            let next_index = {
                let timers = self.timers.borrow();
                timers
                    .iter()
                    .enumerate()
                    .filter(|(_, timer)| timer.due_ms <= target)
                    .min_by_key(|(_, timer)| (timer.due_ms, timer.seq))
                    .map(|(index, _)| index)
            };
            let Some(index) = next_index else {
                break;
            };
            let timer = self.timers.borrow_mut().remove(index);
            self.now_ms.set(timer.due_ms.max(self.now_ms.get()));
            (timer.callback)();
        }
        self.now_ms.set(target);
    }

    /// Runs every frame callback queued before this call.
    ///
    /// Frames queued by a running frame callback wait for the next call.
    pub fn run_frames(&self) {
        let queued = std::mem::take(&mut *self.frames.borrow_mut());
        for callback in queued {
            callback();
        }
    }

    fn next_handle(&self) -> (TimerHandle, u64) {
        let seq = self.next_id.get();
        self.next_id.set(seq + 1);
        (TimerHandle(seq + 1), seq)
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, delay_ms: u64, callback: ScheduledCallback) -> TimerHandle {
        let (handle, seq) = self.next_handle();
        self.timers.borrow_mut().push(PendingTimer {
            handle,
            due_ms: self.now_ms.get().saturating_add(delay_ms),
            seq,
            callback,
        });
        handle
    }

    fn cancel(&self, handle: TimerHandle) {
        self.timers.borrow_mut().retain(|timer| timer.handle != handle);
    }

    fn request_frame(&self, callback: ScheduledCallback) {
        self.frames.borrow_mut().push(callback);
    }
}

/// Returns a future that resolves once `delay_ms` milliseconds have elapsed on
/// `scheduler`.
///
/// The timer arms immediately at call time; the returned future only observes
/// its completion.
pub fn delay(scheduler: &dyn Scheduler, delay_ms: u64) -> impl std::future::Future<Output = ()> {
    let (tx, rx) = oneshot::channel::<()>();
    scheduler.schedule(
        delay_ms,
        Box::new(move || {
            let _ = tx.send(());
        }),
    );
    async move {
        let _ = rx.await;
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use futures::executor::block_on;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn timers_fire_in_due_order_with_arm_order_ties() {
        let scheduler = ManualScheduler::default();
        let log = Rc::new(RefCell::new(Vec::new()));

        for (delay_ms, label) in [(20u64, "b"), (10, "a"), (20, "c")] {
            let log = log.clone();
            scheduler.schedule(delay_ms, Box::new(move || log.borrow_mut().push(label)));
        }
        scheduler.advance(25);

        assert_eq!(*log.borrow(), vec!["a", "b", "c"]);
        assert_eq!(scheduler.pending_timers(), 0);
    }

    #[test]
    fn cancelled_timer_never_fires() {
        let scheduler = ManualScheduler::default();
        let fired = Rc::new(Cell::new(false));
        let fired_in = fired.clone();

        let handle = scheduler.schedule(10, Box::new(move || fired_in.set(true)));
        scheduler.cancel(handle);
        scheduler.advance(100);

        assert!(!fired.get());
        // Cancelling again is a no-op.
        scheduler.cancel(handle);
    }

    #[test]
    fn callback_rearm_is_relative_to_its_firing_instant() {
        let scheduler = Rc::new(ManualScheduler::default());
        let fired_at = Rc::new(RefCell::new(Vec::new()));

        let inner_scheduler = scheduler.clone();
        let inner_fired = fired_at.clone();
        scheduler.schedule(
            10,
            Box::new(move || {
                inner_fired.borrow_mut().push(inner_scheduler.now_ms());
                let chained_scheduler = inner_scheduler.clone();
                let chained_fired = inner_fired.clone();
                inner_scheduler.schedule(
                    10,
                    Box::new(move || chained_fired.borrow_mut().push(chained_scheduler.now_ms())),
                );
            }),
        );
        scheduler.advance(30);

        assert_eq!(*fired_at.borrow(), vec![10, 20]);
    }

    #[test]
    fn frames_drain_once_per_run() {
        let scheduler = Rc::new(ManualScheduler::default());
        let ran = Rc::new(Cell::new(0u32));

        let requeue_scheduler = scheduler.clone();
        let ran_in = ran.clone();
        scheduler.request_frame(Box::new(move || {
            ran_in.set(ran_in.get() + 1);
            let ran_next = ran_in.clone();
            requeue_scheduler.request_frame(Box::new(move || ran_next.set(ran_next.get() + 1)));
        }));

        scheduler.run_frames();
        assert_eq!(ran.get(), 1);
        scheduler.run_frames();
        assert_eq!(ran.get(), 2);
    }

    #[test]
    fn delay_future_resolves_after_advance() {
        let scheduler = ManualScheduler::default();
        let pending = delay(&scheduler, 50);
        scheduler.advance(50);
        block_on(pending);
    }
}
