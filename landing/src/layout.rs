//! Page and section wrappers, plus the tier-driven layout numbers they use.

use leptos::prelude::*;
use lumen_breakpoints::{Tier, use_breakpoints};

use crate::sections::{Footer, Nav};

/// Columns in a card grid for `tier`.
pub const fn grid_columns(tier: Tier) -> usize {
    match tier {
        Tier::Xs | Tier::Sm => 1,
        Tier::Md => 2,
        Tier::Lg => 3,
        Tier::Xl | Tier::Xxl => 4,
    }
}

/// Fade-in delay for the `index`-th child: `index * step_ms`, capped at `max_ms`
/// so long lists do not keep the last items hidden.
pub fn stagger_delay(index: usize, step_ms: u32, max_ms: u32) -> u32 {
    u32::try_from(index)
        .unwrap_or(u32::MAX)
        .saturating_mul(step_ms)
        .min(max_ms)
}

/// Inline style for the `index`-th staggered child.
pub fn stagger_style(index: usize) -> String {
    format!("animation-delay: {}ms;", stagger_delay(index, STAGGER_STEP_MS, STAGGER_MAX_MS))
}

const STAGGER_STEP_MS: u32 = 80;
const STAGGER_MAX_MS: u32 = 640;

/// Grid style with the column count for `tier`.
pub fn grid_style(tier: Tier) -> String {
    format!(
        "grid-template-columns: repeat({}, minmax(0, 1fr));",
        grid_columns(tier)
    )
}

/// Nav + main + footer. The root carries the current tier so CSS can
/// branch on `[data-tier]` and `.compact`.
#[component]
pub fn PageLayout(children: Children) -> impl IntoView {
    let breakpoints = use_breakpoints();

    view! {
        <div
            class=move || if breakpoints.is_compact() { "page compact" } else { "page" }
            data-tier=move || breakpoints.current_tier().name()
        >
            <Nav />
            <main>{children()}</main>
            <Footer />
        </div>
    }
}

/// A titled page section whose body fades in.
#[component]
pub fn Section(
    id: &'static str,
    #[prop(into)] eyebrow: String,
    title: &'static str,
    #[prop(optional)] description: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <section id=id class="section">
            <div class="container">
                <div class="section-header fade-in">
                    <p class="section-eyebrow">{eyebrow}</p>
                    <h2 class="section-title">{title}</h2>
                    {description.map(|text| view! { <p class="section-description">{text}</p> })}
                </div>
                {children()}
            </div>
        </section>
    }
}

/// Responsive card grid; column count follows the breakpoint tier.
#[component]
pub fn CardGrid(children: Children) -> impl IntoView {
    let breakpoints = use_breakpoints();

    view! {
        <div class="card-grid" style=move || grid_style(breakpoints.current_tier())>
            {children()}
        </div>
    }
}
