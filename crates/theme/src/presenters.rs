//! Stateless theme controls.
//!
//! Every control renders the store's current mode and calls back into its
//! mutators; none of them keeps mode state of its own.

use leptos::*;
use ui_kit::{Button, ButtonShape, ButtonVariant, Icon, IconName, Row, Switch};

use crate::{store::ThemeMode, use_theme};

#[component]
/// Switch presenter bound to the theme store.
pub fn ThemeSwitch() -> impl IntoView {
    let theme = use_theme();
    let mode = theme.mode();

    view! {
        <Switch
            aria_label="Dark mode".to_string()
            ui_slot="theme-switch"
            checked=Signal::derive(move || mode.get().is_dark())
            on_toggle=Callback::new(move |next_dark| theme.set(ThemeMode::from_dark(next_dark)))
        />
    }
}

#[component]
/// Circular button presenter that flips to the opposite mode on click.
pub fn ThemeToggleButton() -> impl IntoView {
    let theme = use_theme();
    let mode = theme.mode();

    view! {
        <Button
            shape=ButtonShape::Circle
            variant=ButtonVariant::Quiet
            ui_slot="theme-toggle"
            aria_label=Signal::derive(move || {
                format!("Switch to {} mode", mode.get().opposite().token())
            })
            on_click=Callback::new(move |_| theme.toggle())
        >
            {move || match mode.get() {
                ThemeMode::Light => view! { <Icon icon=IconName::Moon /> },
                ThemeMode::Dark => view! { <Icon icon=IconName::Sun /> },
            }}
        </Button>
    }
}

#[component]
/// Pill presenter offering both modes side by side.
pub fn ThemeModePill() -> impl IntoView {
    let theme = use_theme();
    let mode = theme.mode();
    let transitioning = theme.transitioning();
    let theme_for_light = theme.clone();
    let theme_for_dark = theme;

    view! {
        <div
            class="theme-mode-pill"
            data-kit-slot="theme-pill"
            data-theme-transitioning=move || transitioning.get().to_string()
        >
            <Row gap=ui_kit::LayoutGap::None>
                <Button
                    shape=ButtonShape::Pill
                    variant=ButtonVariant::Quiet
                    leading_icon=IconName::Sun
                    selected=Signal::derive(move || mode.get() == ThemeMode::Light)
                    on_click=Callback::new(move |_| theme_for_light.set(ThemeMode::Light))
                >
                    "Light"
                </Button>
                <Button
                    shape=ButtonShape::Pill
                    variant=ButtonVariant::Quiet
                    leading_icon=IconName::Moon
                    selected=Signal::derive(move || mode.get() == ThemeMode::Dark)
                    on_click=Callback::new(move |_| theme_for_dark.set(ThemeMode::Dark))
                >
                    "Dark"
                </Button>
            </Row>
        </div>
    }
}
