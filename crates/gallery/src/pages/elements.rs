use leptos::*;
use ui_kit::prelude::*;

#[component]
/// Presentational leaf elements: buttons, badges, cards, text, and icons.
pub fn ElementsPage() -> impl IntoView {
    let switch_enabled = create_rw_signal(true);

    view! {
        <Section aria_label="Elements".to_string()>
            <Heading role=TextRole::Title>"Elements"</Heading>

            <Card>
                <Heading role=TextRole::Label>"Buttons"</Heading>
                <Row gap=LayoutGap::Sm>
                    <Button variant=ButtonVariant::Primary>"Primary"</Button>
                    <Button>"Standard"</Button>
                    <Button variant=ButtonVariant::Quiet>"Quiet"</Button>
                    <Button variant=ButtonVariant::Danger>"Danger"</Button>
                    <Button disabled=true>"Disabled"</Button>
                </Row>
                <Row gap=LayoutGap::Sm>
                    <Button size=ButtonSize::Sm>"Small"</Button>
                    <Button size=ButtonSize::Lg>"Large"</Button>
                    <Button shape=ButtonShape::Pill leading_icon=IconName::Check>
                        "Pill with icon"
                    </Button>
                    <IconButton icon=IconName::Bell aria_label="Notifications".to_string() />
                </Row>
            </Card>

            <Card>
                <Heading role=TextRole::Label>"Badges"</Heading>
                <Row gap=LayoutGap::Sm>
                    <Badge>"default"</Badge>
                    <Badge tone=TextTone::Success>"stable"</Badge>
                    <Badge tone=TextTone::Warning>"preview"</Badge>
                    <Badge tone=TextTone::Danger>"deprecated"</Badge>
                    <Badge tone=TextTone::Accent>"new"</Badge>
                </Row>
            </Card>

            <Card>
                <Heading role=TextRole::Label>"Text"</Heading>
                <Col gap=LayoutGap::Sm>
                    <Text role=TextRole::Title>"Title copy sets the page voice."</Text>
                    <Text>"Body copy carries the bulk of every surface."</Text>
                    <Text role=TextRole::Label>"Label copy names controls."</Text>
                    <Text role=TextRole::Caption tone=TextTone::Secondary>
                        "Caption copy annotates quietly."
                    </Text>
                    <Text role=TextRole::Code>"kit-text[data-kit-variant=code]"</Text>
                </Col>
            </Card>

            <Card>
                <Heading role=TextRole::Label>"Icons"</Heading>
                <Row gap=LayoutGap::Sm>
                    <Icon icon=IconName::Sun />
                    <Icon icon=IconName::Moon />
                    <Icon icon=IconName::Check />
                    <Icon icon=IconName::Cross />
                    <Icon icon=IconName::Info />
                    <Icon icon=IconName::Warning />
                    <Icon icon=IconName::Spinner />
                    <Icon icon=IconName::Bell size=IconSize::Lg />
                </Row>
            </Card>

            <Card>
                <Heading role=TextRole::Label>"Switch"</Heading>
                <Row gap=LayoutGap::Sm>
                    <Switch
                        aria_label="Demo switch".to_string()
                        checked=Signal::derive(move || switch_enabled.get())
                        on_toggle=Callback::new(move |next| switch_enabled.set(next))
                    />
                    <Text tone=TextTone::Secondary>
                        {move || if switch_enabled.get() { "On" } else { "Off" }}
                    </Text>
                </Row>
            </Card>
        </Section>
    }
}
