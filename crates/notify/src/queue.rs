//! Toast queue state machine.

use std::{
    cell::{Cell, RefCell},
    collections::HashMap,
    future::Future,
    rc::Rc,
};

use leptos::{
    create_rw_signal, logging, Callable, Callback, ReadSignal, RwSignal, SignalSet, SignalUpdate,
    SignalWithUntracked,
};
use platform::{unix_time_ms_now, Scheduler, TimerHandle};

/// Auto-dismiss duration applied when a caller does not supply one.
pub const DEFAULT_TOAST_DURATION_MS: u64 = 4500;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
/// Unique notification id, assigned at creation and stable across updates.
pub struct ToastId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Semantic notification kinds.
pub enum ToastKind {
    /// Completed operation.
    Success,
    /// Failed operation.
    Error,
    /// Non-fatal caution.
    Warning,
    /// Neutral information.
    Info,
    /// In-flight operation, expected to be updated rather than to expire.
    Loading,
}

impl ToastKind {
    /// Stable token for DOM attributes.
    pub fn token(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
            Self::Loading => "loading",
        }
    }

    fn default_duration_ms(self) -> u64 {
        match self {
            // A loading toast is mutated on settlement, not expired.
            Self::Loading => 0,
            _ => DEFAULT_TOAST_DURATION_MS,
        }
    }
}

#[derive(Clone)]
/// Optional action rendered on a notification.
pub struct ToastAction {
    /// Button label.
    pub label: String,
    /// Caller-supplied handler. An `Err` is caught and logged; it never aborts
    /// dismissal or queue processing.
    pub on_invoke: Callback<(), Result<(), String>>,
}

impl ToastAction {
    /// Runs the handler, containing any failure to a logged warning.
    pub fn invoke(&self) {
        if let Err(err) = self.on_invoke.call(()) {
            logging::warn!("notification action `{}` failed: {err}", self.label);
        }
    }
}

impl std::fmt::Debug for ToastAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToastAction")
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Clone)]
/// One visible notification.
pub struct Toast {
    /// Unique id within the live sequence.
    pub id: ToastId,
    /// Semantic kind.
    pub kind: ToastKind,
    /// Primary message.
    pub title: String,
    /// Optional secondary message.
    pub description: Option<String>,
    /// Auto-dismiss delay; `0` means persistent.
    pub duration_ms: u64,
    /// Optional action button.
    pub action: Option<ToastAction>,
    /// Unix creation timestamp in milliseconds.
    pub created_at_ms: u64,
}

impl Toast {
    /// Returns `true` when the entry has no auto-dismiss timer.
    pub fn is_persistent(&self) -> bool {
        self.duration_ms == 0
    }
}

#[derive(Debug, Clone, Default)]
/// Optional settings recognized by [`ToastQueue::enqueue`].
pub struct ToastOptions {
    /// Auto-dismiss override; `Some(0)` makes the entry persistent.
    pub duration_ms: Option<u64>,
    /// Action button.
    pub action: Option<ToastAction>,
}

#[derive(Debug, Clone, Default)]
/// In-place merge applied by [`ToastQueue::update`].
///
/// Outer `None` leaves a field untouched; for the double-optional fields the
/// inner value distinguishes setting from clearing.
pub struct ToastPatch {
    /// New kind.
    pub kind: Option<ToastKind>,
    /// New title.
    pub title: Option<String>,
    /// New description (`Some(None)` clears it).
    pub description: Option<Option<String>>,
    /// New duration; supplying one re-arms (or, at `0`, cancels) the timer.
    pub duration_ms: Option<u64>,
    /// New action (`Some(None)` clears it).
    pub action: Option<Option<ToastAction>>,
}

#[derive(Debug, Clone)]
/// Messages for the three lifecycle states of a tracked operation.
pub struct TrackMessages {
    /// Title while the operation is in flight.
    pub loading: String,
    /// Title applied when the operation resolves.
    pub success: String,
    /// Title applied when the operation rejects.
    pub error: String,
}

#[derive(Clone)]
/// Owner of the ordered notification sequence and every auto-dismiss timer.
///
/// Cheap to clone; clones share one queue. Display order is strictly
/// insertion order and updates never reorder.
pub struct ToastQueue {
    inner: Rc<ToastQueueInner>,
}

struct ToastQueueInner {
    scheduler: Rc<dyn Scheduler>,
    entries: RwSignal<Vec<Toast>>,
    timers: RefCell<HashMap<ToastId, TimerHandle>>,
    next_id: Cell<u64>,
}

impl ToastQueue {
    /// Creates an empty queue scheduling through the injected scheduler.
    pub fn new(scheduler: Rc<dyn Scheduler>) -> Self {
        Self {
            inner: Rc::new(ToastQueueInner {
                scheduler,
                entries: create_rw_signal(Vec::new()),
                timers: RefCell::new(HashMap::new()),
                next_id: Cell::new(0),
            }),
        }
    }

    /// Reactive view of the live sequence, in insertion order.
    pub fn entries(&self) -> ReadSignal<Vec<Toast>> {
        self.inner.entries.read_only()
    }

    /// Returns the number of live notifications without subscribing.
    pub fn len(&self) -> usize {
        self.inner.entries.with_untracked(|entries| entries.len())
    }

    /// Returns `true` when no notifications are live.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Appends a notification and returns its id.
    ///
    /// Unless overridden, every kind gets [`DEFAULT_TOAST_DURATION_MS`] except
    /// [`ToastKind::Loading`], which defaults to persistent. A positive
    /// duration arms an auto-dismiss timer for the new entry.
    pub fn enqueue(
        &self,
        kind: ToastKind,
        title: impl Into<String>,
        description: Option<String>,
        options: ToastOptions,
    ) -> ToastId {
        let id = ToastId(self.inner.next_id.get() + 1);
        self.inner.next_id.set(id.0);
        debug_assert!(
            !self.contains(id),
            "toast id collision: {id:?} is already live"
        );

        let duration_ms = options
            .duration_ms
            .unwrap_or_else(|| kind.default_duration_ms());
        let toast = Toast {
            id,
            kind,
            title: title.into(),
            description,
            duration_ms,
            action: options.action,
            created_at_ms: unix_time_ms_now(),
        };
        self.inner.entries.update(|entries| entries.push(toast));
        if duration_ms > 0 {
            self.arm_timer(id, duration_ms);
        }
        id
    }

    /// Merges `patch` into the entry with this id, in place.
    ///
    /// Position and id are preserved. Supplying a duration re-arms the
    /// auto-dismiss timer (or cancels it at `0`); without one the existing
    /// timer keeps running, so callers transitioning a persistent loading
    /// toast to a terminal kind must supply a duration or the entry stays
    /// persistent. Unknown ids are ignored.
    pub fn update(&self, id: ToastId, patch: ToastPatch) {
        if !self.contains(id) {
            return;
        }
        let rearm = patch.duration_ms;
        self.inner.entries.update(|entries| {
            let Some(entry) = entries.iter_mut().find(|entry| entry.id == id) else {
                return;
            };
            if let Some(kind) = patch.kind {
                entry.kind = kind;
            }
            if let Some(title) = patch.title {
                entry.title = title;
            }
            if let Some(description) = patch.description {
                entry.description = description;
            }
            if let Some(action) = patch.action {
                entry.action = action;
            }
            if let Some(duration_ms) = patch.duration_ms {
                entry.duration_ms = duration_ms;
            }
        });
        if let Some(duration_ms) = rearm {
            if duration_ms > 0 {
                self.arm_timer(id, duration_ms);
            } else {
                self.cancel_timer(id);
            }
        }
    }

    /// Cancels the entry's timer and removes it. Unknown ids are a no-op, not
    /// an error, so a settling tracker and a manual dismissal can race freely.
    pub fn dismiss(&self, id: ToastId) {
        self.cancel_timer(id);
        if !self.contains(id) {
            return;
        }
        self.inner
            .entries
            .update(|entries| entries.retain(|entry| entry.id != id));
    }

    /// Cancels every timer and clears the sequence.
    pub fn dismiss_all(&self) {
        let handles: Vec<TimerHandle> = self
            .inner
            .timers
            .borrow_mut()
            .drain()
            .map(|(_, handle)| handle)
            .collect();
        for handle in handles {
            self.inner.scheduler.cancel(handle);
        }
        if self.is_empty() {
            return;
        }
        self.inner.entries.set(Vec::new());
    }

    /// Enqueues a success notification.
    pub fn success(
        &self,
        title: impl Into<String>,
        description: Option<String>,
        options: ToastOptions,
    ) -> ToastId {
        self.enqueue(ToastKind::Success, title, description, options)
    }

    /// Enqueues an error notification.
    pub fn error(
        &self,
        title: impl Into<String>,
        description: Option<String>,
        options: ToastOptions,
    ) -> ToastId {
        self.enqueue(ToastKind::Error, title, description, options)
    }

    /// Enqueues a warning notification.
    pub fn warning(
        &self,
        title: impl Into<String>,
        description: Option<String>,
        options: ToastOptions,
    ) -> ToastId {
        self.enqueue(ToastKind::Warning, title, description, options)
    }

    /// Enqueues an info notification.
    pub fn info(
        &self,
        title: impl Into<String>,
        description: Option<String>,
        options: ToastOptions,
    ) -> ToastId {
        self.enqueue(ToastKind::Info, title, description, options)
    }

    /// Enqueues a persistent loading notification.
    pub fn loading(
        &self,
        title: impl Into<String>,
        description: Option<String>,
        options: ToastOptions,
    ) -> ToastId {
        self.enqueue(ToastKind::Loading, title, description, options)
    }

    /// Binds a notification's lifecycle to the settlement of `operation`.
    ///
    /// A loading toast appears immediately. When the operation resolves the
    /// same entry becomes a success toast, on rejection an error toast, either
    /// way with the default duration. The settlement handler attaches once
    /// here, so exactly one outcome fires exactly once; if the toast was
    /// dismissed in the meantime the settlement is a no-op.
    pub fn track<F, T, E>(&self, operation: F, messages: TrackMessages) -> ToastId
    where
        F: Future<Output = Result<T, E>> + 'static,
        T: 'static,
        E: 'static,
    {
        let id = self.loading(messages.loading.clone(), None, ToastOptions::default());
        leptos::spawn_local(follow_settlement(self.clone(), id, operation, messages));
        id
    }

    fn contains(&self, id: ToastId) -> bool {
        self.inner
            .entries
            .with_untracked(|entries| entries.iter().any(|entry| entry.id == id))
    }

    fn settle_tracked(&self, id: ToastId, succeeded: bool, messages: &TrackMessages) {
        let (kind, title) = if succeeded {
            (ToastKind::Success, messages.success.clone())
        } else {
            (ToastKind::Error, messages.error.clone())
        };
        self.update(
            id,
            ToastPatch {
                kind: Some(kind),
                title: Some(title),
                duration_ms: Some(DEFAULT_TOAST_DURATION_MS),
                ..Default::default()
            },
        );
    }

    fn arm_timer(&self, id: ToastId, duration_ms: u64) {
        self.cancel_timer(id);
        let queue = self.clone();
        let handle = self.inner.scheduler.schedule(
            duration_ms,
            Box::new(move || {
                queue.inner.timers.borrow_mut().remove(&id);
                // dismiss re-checks presence, so a fire that lost a race with
                // removal is a guarded no-op.
                queue.dismiss(id);
            }),
        );
        self.inner.timers.borrow_mut().insert(id, handle);
    }

    fn cancel_timer(&self, id: ToastId) {
        if let Some(handle) = self.inner.timers.borrow_mut().remove(&id) {
            self.inner.scheduler.cancel(handle);
        }
    }
}

async fn follow_settlement<F, T, E>(
    queue: ToastQueue,
    id: ToastId,
    operation: F,
    messages: TrackMessages,
) where
    F: Future<Output = Result<T, E>>,
{
    let succeeded = operation.await.is_ok();
    queue.settle_tracked(id, succeeded, &messages);
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use platform::ManualScheduler;
    use pretty_assertions::assert_eq;

    use super::*;

    fn queue_with_manual_clock() -> (ToastQueue, Rc<ManualScheduler>) {
        let _ = leptos::create_runtime();
        let scheduler = Rc::new(ManualScheduler::default());
        (ToastQueue::new(scheduler.clone()), scheduler)
    }

    fn messages() -> TrackMessages {
        TrackMessages {
            loading: "Saving profile".to_string(),
            success: "Profile saved".to_string(),
            error: "Profile save failed".to_string(),
        }
    }

    fn kinds(queue: &ToastQueue) -> Vec<ToastKind> {
        queue
            .entries()
            .with_untracked(|entries| entries.iter().map(|entry| entry.kind).collect())
    }

    #[test]
    fn enqueue_returns_distinct_ids_in_insertion_order() {
        let (queue, _scheduler) = queue_with_manual_clock();

        let first = queue.info("one", None, ToastOptions::default());
        let second = queue.warning("two", None, ToastOptions::default());
        let third = queue.success("three", None, ToastOptions::default());

        assert!(first != second && second != third && first != third);
        let ordered: Vec<ToastId> = queue
            .entries()
            .with_untracked(|entries| entries.iter().map(|entry| entry.id).collect());
        assert_eq!(ordered, vec![first, second, third]);
    }

    #[test]
    fn default_duration_is_positive_except_for_loading() {
        let (queue, scheduler) = queue_with_manual_clock();

        queue.success("done", None, ToastOptions::default());
        queue.loading("working", None, ToastOptions::default());

        queue.entries().with_untracked(|entries| {
            assert_eq!(entries[0].duration_ms, DEFAULT_TOAST_DURATION_MS);
            assert!(entries[1].is_persistent());
        });
        assert_eq!(scheduler.pending_timers(), 1);
    }

    #[test]
    fn timed_toast_auto_dismisses_when_its_duration_elapses() {
        let (queue, scheduler) = queue_with_manual_clock();
        queue.info(
            "short lived",
            None,
            ToastOptions {
                duration_ms: Some(500),
                ..Default::default()
            },
        );

        scheduler.advance(499);
        assert_eq!(queue.len(), 1);
        scheduler.advance(1);
        assert_eq!(queue.len(), 0);
        assert_eq!(scheduler.pending_timers(), 0);
    }

    #[test]
    fn persistent_toast_survives_until_dismiss_all() {
        let (queue, scheduler) = queue_with_manual_clock();
        queue.success(
            "Saved",
            Some("ok".to_string()),
            ToastOptions {
                duration_ms: Some(0),
                ..Default::default()
            },
        );

        scheduler.advance(10_000);
        assert_eq!(queue.len(), 1);

        queue.dismiss_all();
        assert_eq!(queue.len(), 0);
        assert_eq!(scheduler.pending_timers(), 0);
    }

    #[test]
    fn dismiss_is_idempotent_and_cancels_the_timer() {
        let (queue, scheduler) = queue_with_manual_clock();
        let id = queue.info(
            "gone soon",
            None,
            ToastOptions {
                duration_ms: Some(500),
                ..Default::default()
            },
        );

        queue.dismiss(id);
        assert_eq!(queue.len(), 0);
        assert_eq!(scheduler.pending_timers(), 0);

        queue.dismiss(id);
        assert_eq!(queue.len(), 0);
        scheduler.advance(1_000);
    }

    #[test]
    fn update_preserves_id_and_position() {
        let (queue, _scheduler) = queue_with_manual_clock();
        let first = queue.loading("working", None, ToastOptions::default());
        let second = queue.info("bystander", None, ToastOptions::default());

        queue.update(
            first,
            ToastPatch {
                kind: Some(ToastKind::Success),
                title: Some("worked".to_string()),
                description: Some(Some("all good".to_string())),
                ..Default::default()
            },
        );

        queue.entries().with_untracked(|entries| {
            assert_eq!(entries[0].id, first);
            assert_eq!(entries[0].kind, ToastKind::Success);
            assert_eq!(entries[0].title, "worked");
            assert_eq!(entries[0].description.as_deref(), Some("all good"));
            assert_eq!(entries[1].id, second);
            assert_eq!(entries[1].title, "bystander");
        });
    }

    #[test]
    fn update_without_duration_keeps_a_persistent_entry_persistent() {
        let (queue, scheduler) = queue_with_manual_clock();
        let id = queue.loading("working", None, ToastOptions::default());

        queue.update(
            id,
            ToastPatch {
                kind: Some(ToastKind::Success),
                ..Default::default()
            },
        );

        scheduler.advance(60_000);
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn update_with_duration_rearms_the_auto_dismiss_timer() {
        let (queue, scheduler) = queue_with_manual_clock();
        let id = queue.loading("working", None, ToastOptions::default());

        queue.update(
            id,
            ToastPatch {
                kind: Some(ToastKind::Success),
                duration_ms: Some(300),
                ..Default::default()
            },
        );

        scheduler.advance(299);
        assert_eq!(queue.len(), 1);
        scheduler.advance(1);
        assert_eq!(queue.len(), 0);
    }

    #[test]
    fn update_to_zero_duration_cancels_the_timer() {
        let (queue, scheduler) = queue_with_manual_clock();
        let id = queue.info(
            "sticky now",
            None,
            ToastOptions {
                duration_ms: Some(500),
                ..Default::default()
            },
        );

        queue.update(
            id,
            ToastPatch {
                duration_ms: Some(0),
                ..Default::default()
            },
        );

        assert_eq!(scheduler.pending_timers(), 0);
        scheduler.advance(10_000);
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn update_with_unknown_id_is_a_noop() {
        let (queue, _scheduler) = queue_with_manual_clock();
        queue.info("only entry", None, ToastOptions::default());

        queue.update(
            ToastId(999),
            ToastPatch {
                title: Some("never lands".to_string()),
                ..Default::default()
            },
        );

        queue
            .entries()
            .with_untracked(|entries| assert_eq!(entries[0].title, "only entry"));
    }

    #[test]
    fn track_resolution_turns_the_same_entry_into_a_success_toast() {
        let (queue, scheduler) = queue_with_manual_clock();
        let id = queue.loading(messages().loading, None, ToastOptions::default());

        block_on(follow_settlement(
            queue.clone(),
            id,
            async { Ok::<(), String>(()) },
            messages(),
        ));

        assert_eq!(queue.len(), 1);
        queue.entries().with_untracked(|entries| {
            assert_eq!(entries[0].id, id);
            assert_eq!(entries[0].kind, ToastKind::Success);
            assert_eq!(entries[0].title, "Profile saved");
            assert_eq!(entries[0].duration_ms, DEFAULT_TOAST_DURATION_MS);
        });

        scheduler.advance(DEFAULT_TOAST_DURATION_MS);
        assert_eq!(queue.len(), 0);
    }

    #[test]
    fn track_rejection_turns_the_same_entry_into_an_error_toast() {
        let (queue, _scheduler) = queue_with_manual_clock();
        let id = queue.loading(messages().loading, None, ToastOptions::default());

        block_on(follow_settlement(
            queue.clone(),
            id,
            async { Err::<(), String>("boom".to_string()) },
            messages(),
        ));

        assert_eq!(kinds(&queue), vec![ToastKind::Error]);
        queue
            .entries()
            .with_untracked(|entries| assert_eq!(entries[0].id, id));
    }

    #[test]
    fn settlement_after_manual_dismiss_is_a_noop() {
        let (queue, scheduler) = queue_with_manual_clock();
        let id = queue.loading(messages().loading, None, ToastOptions::default());

        queue.dismiss(id);
        block_on(follow_settlement(
            queue.clone(),
            id,
            async { Ok::<(), String>(()) },
            messages(),
        ));

        assert_eq!(queue.len(), 0);
        assert_eq!(scheduler.pending_timers(), 0);
    }

    #[test]
    fn failing_action_handler_is_contained_and_dismissal_proceeds() {
        let (queue, _scheduler) = queue_with_manual_clock();
        let action = ToastAction {
            label: "Retry".to_string(),
            on_invoke: Callback::new(|_| Err("handler exploded".to_string())),
        };
        let id = queue.error(
            "Upload failed",
            None,
            ToastOptions {
                duration_ms: Some(0),
                action: Some(action),
            },
        );

        let entry = queue
            .entries()
            .with_untracked(|entries| entries[0].clone());
        entry.action.as_ref().expect("action present").invoke();

        queue.dismiss(id);
        assert_eq!(queue.len(), 0);
    }

    #[test]
    fn mixed_operations_keep_insertion_order() {
        let (queue, scheduler) = queue_with_manual_clock();
        let first = queue.info(
            "a",
            None,
            ToastOptions {
                duration_ms: Some(100),
                ..Default::default()
            },
        );
        let _second = queue.warning("b", None, ToastOptions::default());
        let third = queue.loading("c", None, ToastOptions::default());

        queue.update(
            third,
            ToastPatch {
                kind: Some(ToastKind::Success),
                duration_ms: Some(50),
                ..Default::default()
            },
        );
        assert_eq!(
            kinds(&queue),
            vec![ToastKind::Info, ToastKind::Warning, ToastKind::Success]
        );

        scheduler.advance(60);
        queue
            .entries()
            .with_untracked(|entries| assert_eq!(entries.len(), 2));
        assert!(!queue
            .entries()
            .with_untracked(|entries| entries.iter().any(|entry| entry.id == third)));

        scheduler.advance(40);
        assert!(!queue
            .entries()
            .with_untracked(|entries| entries.iter().any(|entry| entry.id == first)));
    }
}
