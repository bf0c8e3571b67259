use super::*;

#[component]
/// Top-level page section surface.
pub fn Section(
    #[prop(default = LayoutPadding::Md)] padding: LayoutPadding,
    #[prop(default = LayoutGap::Md)] gap: LayoutGap,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <section
            class=merge_layout_class("kit-section", layout_class)
            data-kit-primitive="true"
            data-kit-kind="section"
            data-kit-padding=padding.token()
            data-kit-gap=gap.token()
            aria-label=aria_label
        >
            {children()}
        </section>
    }
}

#[component]
/// Horizontal layout row.
pub fn Row(
    #[prop(default = LayoutGap::Md)] gap: LayoutGap,
    #[prop(default = LayoutAlign::Center)] align: LayoutAlign,
    #[prop(default = LayoutJustify::Start)] justify: LayoutJustify,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("kit-row", layout_class)
            data-kit-primitive="true"
            data-kit-kind="row"
            data-kit-gap=gap.token()
            data-kit-align=align.token()
            data-kit-justify=justify.token()
        >
            {children()}
        </div>
    }
}

#[component]
/// Vertical layout column.
pub fn Col(
    #[prop(default = LayoutGap::Md)] gap: LayoutGap,
    #[prop(default = LayoutAlign::Stretch)] align: LayoutAlign,
    #[prop(optional)] span: Option<u8>,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("kit-col", layout_class)
            data-kit-primitive="true"
            data-kit-kind="col"
            data-kit-gap=gap.token()
            data-kit-align=align.token()
            data-kit-span=span
        >
            {children()}
        </div>
    }
}

#[component]
/// Primary content landmark.
pub fn Main(
    #[prop(default = LayoutPadding::Md)] padding: LayoutPadding,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <main
            class=merge_layout_class("kit-main", layout_class)
            data-kit-primitive="true"
            data-kit-kind="main"
            data-kit-padding=padding.token()
        >
            {children()}
        </main>
    }
}

#[component]
/// Complementary sidebar landmark.
pub fn Aside(
    #[prop(default = LayoutPadding::Md)] padding: LayoutPadding,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <aside
            class=merge_layout_class("kit-aside", layout_class)
            data-kit-primitive="true"
            data-kit-kind="aside"
            data-kit-padding=padding.token()
            aria-label=aria_label
        >
            {children()}
        </aside>
    }
}

#[component]
/// Grid layout primitive.
pub fn Grid(
    #[prop(default = LayoutGap::Md)] gap: LayoutGap,
    #[prop(default = LayoutPadding::None)] padding: LayoutPadding,
    #[prop(optional)] columns: Option<u8>,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("kit-grid", layout_class)
            data-kit-primitive="true"
            data-kit-kind="grid"
            data-kit-gap=gap.token()
            data-kit-padding=padding.token()
            data-kit-columns=columns
        >
            {children()}
        </div>
    }
}
