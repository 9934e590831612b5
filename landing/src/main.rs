// Lumen Landing Page — Leptos 0.8 Edition
// Developed with 💀 by The Lumen Team (c)2025

mod components;
mod config;
mod layout;
mod sections;

use components::Loader;
use layout::PageLayout;
use leptos::prelude::*;
use lumen_breakpoints::provide_breakpoints;
use sections::*;

fn main() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();
    leptos::mount::mount_to_body(App);
}

#[component]
fn App() -> impl IntoView {
    // one window listener for the whole page
    let breakpoints = provide_breakpoints(&config::breakpoint_overrides());
    tracing::info!(
        tier = %breakpoints.signal().get_untracked().classification.current_tier(),
        "landing page mounted"
    );

    let (ready, set_ready) = signal(false);
    Effect::new(move |_| set_ready.set(true));

    view! {
        <Loader ready=ready />
        <PageLayout>
            <Hero />
            <Features />
            <Showcase />
            <CallToAction />
        </PageLayout>
    }
}
