use leptos::prelude::*;
use lumen_breakpoints::use_breakpoints;

use super::VERSION;
use crate::components::{Button, ButtonVariant};

const LINKS: [(&str, &str); 3] = [
    ("#features", "Features"),
    ("#showcase", "Showcase"),
    ("#start", "Get started"),
];

#[component]
pub fn Nav() -> impl IntoView {
    let breakpoints = use_breakpoints();
    let (drawer_open, set_drawer_open) = signal(false);

    // the drawer only exists on compact screens; close it when we grow out of them
    Effect::new(move |_| {
        if !breakpoints.is_compact() {
            set_drawer_open.set(false);
        }
    });

    let links = move || {
        LINKS
            .iter()
            .map(|(href, label)| {
                view! {
                    <a href=*href class="nav-link" on:click=move |_| set_drawer_open.set(false)>
                        {*label}
                    </a>
                }
            })
            .collect_view()
    };

    view! {
        <nav class="nav">
            <div class="nav-inner">
                <a href="/" class="nav-brand">
                    <span class="nav-title">"lumen"</span>
                    <span class="nav-version">{VERSION}</span>
                </a>
                <Show
                    when=move || breakpoints.is_compact()
                    fallback=move || view! {
                        <div class="nav-links">
                            {links}
                            <Button href="#start" variant=ButtonVariant::Secondary>
                                "Start"
                            </Button>
                        </div>
                    }
                >
                    <button
                        class=move || if drawer_open.get() { "nav-toggle active" } else { "nav-toggle" }
                        aria-label="Toggle navigation"
                        aria-expanded=move || if drawer_open.get() { "true" } else { "false" }
                        on:click=move |_| set_drawer_open.update(|open| *open = !*open)
                    >
                        {move || if drawer_open.get() { "Close" } else { "Menu" }}
                    </button>
                </Show>
            </div>

            // Dropdown drawer overlay
            <Show when=move || drawer_open.get()>
                <div class="nav-drawer">
                    <div class="nav-drawer-inner">{links}</div>
                </div>
            </Show>
        </nav>
    }
}
