use leptos::prelude::*;
use lumen_breakpoints::use_breakpoints;

use crate::components::GlowCard;
use crate::layout::{CardGrid, Section};

#[component]
pub fn Showcase() -> impl IntoView {
    let breakpoints = use_breakpoints();

    view! {
        <Section id="showcase" eyebrow="Showcase" title="Try resizing this window.">
            <p class="showcase-readout fade-in">
                "Current breakpoint: "
                <code>{move || breakpoints.current_tier().name()}</code>
                " at "
                <code>{move || format!("{}×{}", breakpoints.viewport().width, breakpoints.viewport().height)}</code>
            </p>
            <CardGrid>
                <GlowCard index=0 title="Compact">
                    <p>"xs and sm stack everything in one column and fold the nav into a drawer."</p>
                </GlowCard>
                <GlowCard index=1 title="Tablet">
                    <p>"md splits cards two by two and keeps the nav inline."</p>
                </GlowCard>
                <GlowCard index=2 title="Desktop">
                    <p>"lg and up bring the hero orb and the full particle field."</p>
                </GlowCard>
            </CardGrid>
        </Section>
    }
}
