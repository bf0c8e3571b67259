use super::*;

#[component]
/// Shared modal dialog shell.
///
/// Renders a backdrop plus a centered dialog surface. Open/close state and
/// focus management stay with the caller.
pub fn Modal(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional)] on_backdrop_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class="kit-modal-backdrop"
            data-kit-primitive="true"
            data-kit-kind="modal-backdrop"
            on:click=move |ev| {
                if let Some(on_backdrop_click) = on_backdrop_click.as_ref() {
                    on_backdrop_click.call(ev);
                }
            }
        >
            <div
                class=merge_layout_class("kit-modal", layout_class)
                role="dialog"
                aria-modal="true"
                aria-label=aria_label
                data-kit-primitive="true"
                data-kit-kind="modal"
                on:click=move |ev| ev.stop_propagation()
            >
                {children()}
            </div>
        </div>
    }
}
