use leptos::prelude::*;
use lumen_breakpoints::{Tier, use_breakpoints};

use super::VERSION;
use crate::components::{Button, ButtonVariant, ParticleField};

#[component]
pub fn Hero() -> impl IntoView {
    let breakpoints = use_breakpoints();
    let badge_text = format!("{} — now with motion", VERSION);

    view! {
        <section class="hero">
            <ParticleField seed=0x5eed />
            <div class="container">
                <div class=move || if breakpoints.is_compact() { "hero-grid stacked" } else { "hero-grid" }>
                    <div class="hero-content fade-in">
                        <div class="hero-badge">
                            <span class="hero-badge-dot"></span>
                            {badge_text}
                        </div>
                        <h1 class="hero-title">
                            <span class="hero-title-accent">"Light up"</span>
                            <br />
                            "your next launch."
                        </h1>
                        <p class="hero-description">
                            "Animated sections, glowing cards and a page that adapts to every screen."
                        </p>
                        <div class="hero-actions">
                            <Button href="#start">"Get Started"</Button>
                            <Button href="#showcase" variant=ButtonVariant::Secondary>
                                "See it move →"
                            </Button>
                        </div>
                    </div>
                    // decorative orb only where there is room beside the copy
                    <Show when=move || breakpoints.at_least_tier(Tier::Lg)>
                        <div class="hero-orb" aria-hidden="true">
                            <div class="hero-orb-core"></div>
                            <div class="hero-orb-ring"></div>
                        </div>
                    </Show>
                </div>
            </div>
        </section>
    }
}
