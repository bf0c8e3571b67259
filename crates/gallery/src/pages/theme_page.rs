use leptos::*;
use theme::{use_theme, ThemeModePill, ThemeSwitch, ThemeToggleButton};
use ui_kit::prelude::*;

#[component]
/// Theme presenters bound to the shared store.
pub fn ThemePage() -> impl IntoView {
    let theme = use_theme();
    let mode = theme.mode();
    let transitioning = theme.transitioning();

    view! {
        <Section aria_label="Theme".to_string()>
            <Heading role=TextRole::Title>"Theme"</Heading>

            <Card>
                <Heading role=TextRole::Label>"Current mode"</Heading>
                <Row gap=LayoutGap::Sm>
                    <Badge tone=TextTone::Accent>{move || mode.get().token()}</Badge>
                    <Text tone=TextTone::Secondary>
                        {move || {
                            if transitioning.get() {
                                "switching…"
                            } else {
                                "settled"
                            }
                        }}
                    </Text>
                </Row>
                <Text tone=TextTone::Secondary>
                    "Every control below reads the same store; none of them keeps mode state."
                </Text>
            </Card>

            <Card>
                <Heading role=TextRole::Label>"Switch"</Heading>
                <ThemeSwitch />
            </Card>

            <Card>
                <Heading role=TextRole::Label>"Toggle button"</Heading>
                <ThemeToggleButton />
            </Card>

            <Card>
                <Heading role=TextRole::Label>"Mode pill"</Heading>
                <ThemeModePill />
            </Card>
        </Section>
    }
}
