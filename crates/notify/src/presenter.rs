//! Stacked toast presenter.

use leptos::*;
use ui_kit::{
    Button, ButtonSize, ButtonVariant, Icon, IconButton, IconName, IconSize, Text, TextRole,
    TextTone,
};

use crate::{
    queue::{Toast, ToastKind},
    use_toasts,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Corner the toast stack anchors to.
///
/// Purely a style token consumed by the gallery CSS; the stack itself is a
/// single ordered column regardless of corner.
pub enum ToasterPosition {
    /// Top-left corner.
    TopLeft,
    /// Top-right corner.
    TopRight,
    /// Bottom-left corner.
    BottomLeft,
    /// Bottom-right corner.
    BottomRight,
}

impl Default for ToasterPosition {
    fn default() -> Self {
        Self::BottomRight
    }
}

impl ToasterPosition {
    fn token(self) -> &'static str {
        match self {
            Self::TopLeft => "top-left",
            Self::TopRight => "top-right",
            Self::BottomLeft => "bottom-left",
            Self::BottomRight => "bottom-right",
        }
    }
}

fn kind_icon(kind: ToastKind) -> IconName {
    match kind {
        ToastKind::Success => IconName::Check,
        ToastKind::Error => IconName::Cross,
        ToastKind::Warning => IconName::Warning,
        ToastKind::Info => IconName::Info,
        ToastKind::Loading => IconName::Spinner,
    }
}

#[component]
/// Renders the queue's current sequence as a stacked, positioned column.
pub fn Toaster(
    #[prop(default = ToasterPosition::BottomRight)] position: ToasterPosition,
) -> impl IntoView {
    let queue = use_toasts();
    let entries = queue.entries();

    view! {
        <div
            class="notify-toaster"
            role="region"
            aria-label="Notifications"
            data-notify-position=position.token()
        >
            <For each=move || entries.get() key=|toast| toast.id let:toast>
                <ToastCard toast />
            </For>
        </div>
    }
}

#[component]
fn ToastCard(toast: Toast) -> impl IntoView {
    let queue = use_toasts();
    let dismiss_queue = queue.clone();
    let id = toast.id;
    let persistent = toast.is_persistent();

    let action_view = toast.action.map(|action| {
        let label = action.label.clone();
        let action_queue = queue;
        view! {
            <Button
                size=ButtonSize::Sm
                variant=ButtonVariant::Quiet
                ui_slot="toast-action"
                on_click=Callback::new(move |_| {
                    action.invoke();
                    action_queue.dismiss(id);
                })
            >
                {label}
            </Button>
        }
    });

    view! {
        <div
            class="notify-toast"
            role="status"
            data-notify-kind=toast.kind.token()
            data-notify-persistent=persistent.to_string()
        >
            <Icon icon=kind_icon(toast.kind) size=IconSize::Sm />
            <div data-kit-slot="copy">
                <Text role=TextRole::Label>{toast.title}</Text>
                {toast.description.map(|description| {
                    view! {
                        <Text role=TextRole::Caption tone=TextTone::Secondary>
                            {description}
                        </Text>
                    }
                })}
            </div>
            {action_view}
            <IconButton
                icon=IconName::Cross
                size=ButtonSize::Sm
                ui_slot="toast-dismiss"
                aria_label="Dismiss notification".to_string()
                on_click=Callback::new(move |_| dismiss_queue.dismiss(id))
            />
        </div>
    }
}
