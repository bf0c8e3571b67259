use super::*;

#[component]
/// Compact status badge primitive.
pub fn Badge(
    #[prop(default = TextTone::Secondary)] tone: TextTone,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <span
            class=merge_layout_class("kit-badge", layout_class)
            data-kit-primitive="true"
            data-kit-kind="badge"
            data-kit-slot=ui_slot
            data-kit-tone=tone.token()
        >
            {children()}
        </span>
    }
}

#[component]
/// Shared card surface for option tiles, summaries, and document-like regions.
pub fn Card(
    #[prop(default = LayoutPadding::Md)] padding: LayoutPadding,
    #[prop(default = LayoutGap::Sm)] gap: LayoutGap,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <article
            class=merge_layout_class("kit-card", layout_class)
            data-kit-primitive="true"
            data-kit-kind="card"
            data-kit-slot=ui_slot
            data-kit-padding=padding.token()
            data-kit-gap=gap.token()
        >
            {children()}
        </article>
    }
}

#[component]
/// Shared heading primitive.
pub fn Heading(
    #[prop(default = TextRole::Title)] role: TextRole,
    #[prop(default = TextTone::Primary)] tone: TextTone,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("kit-heading", layout_class)
            data-kit-primitive="true"
            data-kit-kind="heading"
            data-kit-slot=ui_slot
            data-kit-variant=role.token()
            data-kit-tone=tone.token()
        >
            {children()}
        </div>
    }
}

#[component]
/// Shared text primitive.
pub fn Text(
    #[prop(default = TextRole::Body)] role: TextRole,
    #[prop(default = TextTone::Primary)] tone: TextTone,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <span
            class=merge_layout_class("kit-text", layout_class)
            data-kit-primitive="true"
            data-kit-kind="text"
            data-kit-slot=ui_slot
            data-kit-variant=role.token()
            data-kit-tone=tone.token()
        >
            {children()}
        </span>
    }
}
