use leptos::*;
use ui_kit::prelude::*;

#[component]
/// Layout primitives: section, row, col, and grid.
pub fn LayoutPage() -> impl IntoView {
    view! {
        <Section aria_label="Layout".to_string()>
            <Heading role=TextRole::Title>"Layout"</Heading>

            <Card>
                <Heading role=TextRole::Label>"Row"</Heading>
                <Row gap=LayoutGap::Sm justify=LayoutJustify::Between>
                    <Badge>"start"</Badge>
                    <Badge>"middle"</Badge>
                    <Badge>"end"</Badge>
                </Row>
            </Card>

            <Card>
                <Heading role=TextRole::Label>"Columns"</Heading>
                <Row gap=LayoutGap::Md align=LayoutAlign::Start>
                    <Col span=8 gap=LayoutGap::Sm>
                        <Text>"A wide column for primary content."</Text>
                        <Text tone=TextTone::Secondary>
                            "Column spans are style tokens resolved by the grid CSS."
                        </Text>
                    </Col>
                    <Col span=4 gap=LayoutGap::Sm>
                        <Text role=TextRole::Label>"A narrow rail"</Text>
                        <Text tone=TextTone::Secondary>"for metadata."</Text>
                    </Col>
                </Row>
            </Card>

            <Card>
                <Heading role=TextRole::Label>"Grid"</Heading>
                <Grid columns=3 gap=LayoutGap::Sm>
                    {(1..=6)
                        .map(|cell| {
                            view! {
                                <Card padding=LayoutPadding::Sm>
                                    <Text role=TextRole::Caption tone=TextTone::Secondary>
                                        {format!("Cell {cell}")}
                                    </Text>
                                </Card>
                            }
                        })
                        .collect_view()}
                </Grid>
            </Card>
        </Section>
    }
}
