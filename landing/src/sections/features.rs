use super::VERSION;
use crate::components::FeatureCard;
use crate::layout::{CardGrid, Section};
use leptos::prelude::*;

#[component]
pub fn Features() -> impl IntoView {
    let eyebrow = format!("{} Features", VERSION);
    view! {
        <Section
            id="features"
            eyebrow=eyebrow
            title="Everything moves. Nothing jumps."
            description="Every block reflows across six breakpoints, from phones to ultrawide."
        >
            <CardGrid>
                <FeatureCard
                    index=0
                    icon="[1]"
                    title="Staggered reveals"
                    description="Sections fade in one child at a time, capped so long lists never lag."
                />
                <FeatureCard
                    index=1
                    icon="[2]"
                    title="Glow on hover"
                    description="Cards follow the pointer with a soft radial highlight."
                />
                <FeatureCard
                    index=2
                    icon="[3]"
                    title="Particle fields"
                    description="Seeded floating particles; fewer on phones, denser on desktops."
                />
                <FeatureCard
                    index=3
                    icon="[4]"
                    title="Tunable breakpoints"
                    description="Move any threshold from index.html without rebuilding."
                    code=r#"<meta name="lumen-breakpoints" content='{"md": 800}'>"#
                />
            </CardGrid>
        </Section>
    }
}
