use std::rc::Rc;

use leptos::*;
use notify::{use_toasts, ToastAction, ToastOptions, ToastQueue, TrackMessages};
use platform::{delay, PlatformServices, Scheduler};
use ui_kit::prelude::*;

fn track_demo(queue: ToastQueue, scheduler: Rc<dyn Scheduler>, succeed: bool) {
    let operation = async move {
        delay(scheduler.as_ref(), 1200).await;
        if succeed {
            Ok(())
        } else {
            Err(())
        }
    };
    queue.track(
        operation,
        TrackMessages {
            loading: "Publishing draft".to_string(),
            success: "Draft published".to_string(),
            error: "Publish failed".to_string(),
        },
    );
}

#[component]
/// Notification queue demos: every kind, persistence, actions, and tracking.
pub fn NotificationsPage() -> impl IntoView {
    let queue = use_toasts();
    let services = use_context::<PlatformServices>().expect("PlatformServices not provided");

    let success_queue = queue.clone();
    let error_queue = queue.clone();
    let warning_queue = queue.clone();
    let info_queue = queue.clone();
    let persistent_queue = queue.clone();
    let action_queue = queue.clone();
    let track_ok_queue = queue.clone();
    let track_err_queue = queue.clone();
    let clear_queue = queue;
    let track_ok_scheduler = services.scheduler.clone();
    let track_err_scheduler = services.scheduler;

    view! {
        <Section aria_label="Notifications".to_string()>
            <Heading role=TextRole::Title>"Notifications"</Heading>

            <Card>
                <Heading role=TextRole::Label>"Kinds"</Heading>
                <Row gap=LayoutGap::Sm>
                    <Button on_click=Callback::new(move |_| {
                        success_queue
                            .success("Saved", Some("Your changes are safe.".to_string()), ToastOptions::default());
                    })>"Success"</Button>
                    <Button on_click=Callback::new(move |_| {
                        error_queue
                            .error("Save failed", Some("The server said no.".to_string()), ToastOptions::default());
                    })>"Error"</Button>
                    <Button on_click=Callback::new(move |_| {
                        warning_queue.warning("Unsaved changes", None, ToastOptions::default());
                    })>"Warning"</Button>
                    <Button on_click=Callback::new(move |_| {
                        info_queue.info("Three drafts restored", None, ToastOptions::default());
                    })>"Info"</Button>
                </Row>
            </Card>

            <Card>
                <Heading role=TextRole::Label>"Persistence and actions"</Heading>
                <Row gap=LayoutGap::Sm>
                    <Button on_click=Callback::new(move |_| {
                        persistent_queue.success(
                            "Export ready",
                            Some("Stays until dismissed.".to_string()),
                            ToastOptions {
                                duration_ms: Some(0),
                                ..Default::default()
                            },
                        );
                    })>"Persistent"</Button>
                    <Button on_click=Callback::new(move |_| {
                        action_queue.info(
                            "Draft archived",
                            None,
                            ToastOptions {
                                action: Some(ToastAction {
                                    label: "Undo".to_string(),
                                    on_invoke: Callback::new(|_| Ok(())),
                                }),
                                ..Default::default()
                            },
                        );
                    })>"With action"</Button>
                </Row>
            </Card>

            <Card>
                <Heading role=TextRole::Label>"Tracked operations"</Heading>
                <Text tone=TextTone::Secondary>
                    "A loading toast appears immediately and mutates in place when the operation settles."
                </Text>
                <Row gap=LayoutGap::Sm>
                    <Button
                        variant=ButtonVariant::Primary
                        on_click=Callback::new(move |_| {
                            track_demo(track_ok_queue.clone(), track_ok_scheduler.clone(), true);
                        })
                    >
                        "Track a success"
                    </Button>
                    <Button
                        variant=ButtonVariant::Danger
                        on_click=Callback::new(move |_| {
                            track_demo(track_err_queue.clone(), track_err_scheduler.clone(), false);
                        })
                    >
                        "Track a failure"
                    </Button>
                </Row>
            </Card>

            <Card>
                <Heading role=TextRole::Label>"Cleanup"</Heading>
                <Button
                    variant=ButtonVariant::Quiet
                    on_click=Callback::new(move |_| clear_queue.dismiss_all())
                >
                    "Dismiss all"
                </Button>
            </Card>
        </Section>
    }
}
