use super::*;

#[component]
/// Shared tab list primitive.
pub fn TabList(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("kit-tab-list", layout_class)
            data-kit-primitive="true"
            data-kit-kind="tab-list"
            role="tablist"
            aria-label=aria_label
        >
            {children()}
        </div>
    }
}

#[component]
/// Shared tab trigger primitive.
pub fn Tab(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] selected: MaybeSignal<bool>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <Button
            layout_class=layout_class.unwrap_or("")
            role="tab".to_string()
            selected=selected
            ui_slot="tab"
            variant=ButtonVariant::Quiet
            on_click=Callback::new(move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            })
        >
            {children()}
        </Button>
    }
}

#[component]
/// Shared breadcrumb trail container.
pub fn Breadcrumbs(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <nav
            class=merge_layout_class("kit-breadcrumbs", layout_class)
            aria-label="Breadcrumb"
            data-kit-primitive="true"
            data-kit-kind="breadcrumbs"
        >
            {children()}
        </nav>
    }
}

#[component]
/// Individual breadcrumb entry.
///
/// The last entry of a trail renders with `current=true` and carries
/// `aria-current="page"`.
pub fn Crumb(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] current: MaybeSignal<bool>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <Button
            layout_class=layout_class.unwrap_or("")
            aria_current=Signal::derive(move || {
                if current.get() { "page".to_string() } else { String::new() }
            })
            selected=current
            ui_slot="crumb"
            variant=ButtonVariant::Quiet
            size=ButtonSize::Sm
            on_click=Callback::new(move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            })
        >
            {children()}
        </Button>
    }
}

#[component]
/// Shared pagination control.
pub fn Pagination(
    /// Currently selected 1-based page.
    #[prop(into)]
    page: MaybeSignal<u32>,
    /// Total page count.
    pages: u32,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] on_select: Option<Callback<u32>>,
) -> impl IntoView {
    let select = move |target: u32| {
        if target >= 1 && target <= pages {
            if let Some(on_select) = on_select.as_ref() {
                on_select.call(target);
            }
        }
    };

    let numbers = (1..=pages)
        .map(|number| {
            view! {
                <Button
                    ui_slot="page"
                    variant=ButtonVariant::Quiet
                    size=ButtonSize::Sm
                    selected=Signal::derive(move || page.get() == number)
                    on_click=Callback::new(move |_| select(number))
                >
                    {number}
                </Button>
            }
        })
        .collect_view();

    view! {
        <nav
            class=merge_layout_class("kit-pagination", layout_class)
            aria-label="Pagination"
            data-kit-primitive="true"
            data-kit-kind="pagination"
            data-kit-pages=pages
        >
            <IconButton
                icon=IconName::ChevronLeft
                size=ButtonSize::Sm
                ui_slot="previous"
                aria_label="Previous page"
                disabled=Signal::derive(move || page.get() <= 1)
                on_click=Callback::new(move |_| select(page.get_untracked().saturating_sub(1)))
            />
            {numbers}
            <IconButton
                icon=IconName::ChevronRight
                size=ButtonSize::Sm
                ui_slot="next"
                aria_label="Next page"
                disabled=Signal::derive(move || page.get() >= pages)
                on_click=Callback::new(move |_| select(page.get_untracked() + 1))
            />
        </nav>
    }
}

#[component]
/// Shared disclosure section for grouped secondary content.
pub fn Accordion(
    #[prop(optional)] layout_class: Option<&'static str>,
    title: &'static str,
    #[prop(optional)] description: Option<&'static str>,
    #[prop(optional, into)] expanded: MaybeSignal<bool>,
    #[prop(optional)] on_toggle: Option<Callback<MouseEvent>>,
    children: ChildrenFn,
) -> impl IntoView {
    view! {
        <section
            class=merge_layout_class("kit-accordion", layout_class)
            data-kit-primitive="true"
            data-kit-kind="accordion"
            data-kit-state=move || if expanded.get() { "open" } else { "closed" }
            data-kit-expanded=move || bool_token(expanded.get())
        >
            <Button
                layout_class="kit-accordion-toggle"
                ui_slot="toggle"
                variant=ButtonVariant::Quiet
                selected=expanded
                aria_label=title.to_string()
                trailing_icon=IconName::ChevronDown
                on_click=Callback::new(move |ev| {
                    if let Some(on_toggle) = on_toggle.as_ref() {
                        on_toggle.call(ev);
                    }
                })
            >
                <span data-kit-slot="copy">
                    <span data-kit-slot="title">{title}</span>
                    {description.map(|description| view! { <span data-kit-slot="description">{description}</span> })}
                </span>
            </Button>
            <Show when=move || expanded.get() fallback=|| ()>
                <div data-kit-slot="body">{children()}</div>
            </Show>
        </section>
    }
}
