use leptos::*;
use ui_kit::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DemoTab {
    Overview,
    Usage,
    History,
}

impl DemoTab {
    fn label(self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::Usage => "Usage",
            Self::History => "History",
        }
    }

    fn blurb(self) -> &'static str {
        match self {
            Self::Overview => "Tabs switch between sibling views without leaving the page.",
            Self::Usage => "Select a tab with a click; the selected state is a style token.",
            Self::History => "Tab state lives in the page, not in the primitive.",
        }
    }
}

#[component]
/// Navigation primitives: tabs, accordion, breadcrumbs, pagination, and the
/// modal shell.
pub fn NavigationPage() -> impl IntoView {
    let active_tab = create_rw_signal(DemoTab::Overview);
    let accordion_open = create_rw_signal(false);
    let page = create_rw_signal(1u32);
    let modal_open = create_rw_signal(false);

    let tabs = [DemoTab::Overview, DemoTab::Usage, DemoTab::History]
        .into_iter()
        .map(|tab| {
            view! {
                <Tab
                    selected=Signal::derive(move || active_tab.get() == tab)
                    on_click=Callback::new(move |_| active_tab.set(tab))
                >
                    {tab.label()}
                </Tab>
            }
        })
        .collect_view();

    view! {
        <Section aria_label="Navigation".to_string()>
            <Heading role=TextRole::Title>"Navigation"</Heading>

            <Card>
                <Heading role=TextRole::Label>"Breadcrumbs"</Heading>
                <Breadcrumbs>
                    <Crumb>"Gallery"</Crumb>
                    <Crumb>"Navigation"</Crumb>
                    <Crumb current=true>"Breadcrumbs"</Crumb>
                </Breadcrumbs>
            </Card>

            <Card>
                <Heading role=TextRole::Label>"Tabs"</Heading>
                <TabList aria_label="Demo tabs".to_string()>{tabs}</TabList>
                <Text tone=TextTone::Secondary>{move || active_tab.get().blurb()}</Text>
            </Card>

            <Card>
                <Heading role=TextRole::Label>"Accordion"</Heading>
                <Accordion
                    title="Advanced options"
                    description="Secondary settings stay collapsed until needed."
                    expanded=Signal::derive(move || accordion_open.get())
                    on_toggle=Callback::new(move |_| accordion_open.update(|open| *open = !*open))
                >
                    <Text tone=TextTone::Secondary>
                        "Disclosure bodies render only while expanded."
                    </Text>
                </Accordion>
            </Card>

            <Card>
                <Heading role=TextRole::Label>"Pagination"</Heading>
                <Pagination
                    page=Signal::derive(move || page.get())
                    pages=5
                    on_select=Callback::new(move |target| page.set(target))
                />
                <Text tone=TextTone::Secondary>{move || format!("Page {} of 5", page.get())}</Text>
            </Card>

            <Card>
                <Heading role=TextRole::Label>"Modal"</Heading>
                <Button
                    variant=ButtonVariant::Primary
                    on_click=Callback::new(move |_| modal_open.set(true))
                >
                    "Open modal"
                </Button>
                <Show when=move || modal_open.get() fallback=|| ()>
                    <Modal
                        aria_label="Demo modal".to_string()
                        on_backdrop_click=Callback::new(move |_| modal_open.set(false))
                    >
                        <Heading role=TextRole::Title>"Modal shell"</Heading>
                        <Text tone=TextTone::Secondary>
                            "The shell owns backdrop and dialog markup; open state stays with the page."
                        </Text>
                        <Row justify=LayoutJustify::End gap=LayoutGap::Sm>
                            <Button
                                variant=ButtonVariant::Quiet
                                on_click=Callback::new(move |_| modal_open.set(false))
                            >
                                "Dismiss"
                            </Button>
                            <Button
                                variant=ButtonVariant::Primary
                                on_click=Callback::new(move |_| modal_open.set(false))
                            >
                                "Confirm"
                            </Button>
                        </Row>
                    </Modal>
                </Show>
            </Card>
        </Section>
    }
}
