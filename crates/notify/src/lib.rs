//! Notification delivery: the ordered toast queue, its per-entry lifecycle
//! timers, and the stacked presenter.
//!
//! The queue owns every notification and every auto-dismiss timer. The
//! presenter renders the queue's reactive sequence and calls back into it;
//! consumers enqueue through the kind helpers or bind a toast to an in-flight
//! operation with [`ToastQueue::track`].

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod presenter;
mod provider;
mod queue;

pub use presenter::{Toaster, ToasterPosition};
pub use provider::{use_toasts, ToastProvider};
pub use queue::{
    Toast, ToastAction, ToastId, ToastKind, ToastOptions, ToastPatch, ToastQueue, TrackMessages,
    DEFAULT_TOAST_DURATION_MS,
};
