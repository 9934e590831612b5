use leptos::prelude::*;
use lumen_breakpoints::use_breakpoints;

use super::VERSION;

#[component]
pub fn Footer() -> impl IntoView {
    let breakpoints = use_breakpoints();

    view! {
        <footer class=move || if breakpoints.is_compact() { "footer stacked" } else { "footer" }>
            <div class="container">
                <div class="footer-brand">
                    <span class="footer-title">"lumen"</span>
                    <span class="footer-version">{VERSION}</span>
                </div>
                <div class="footer-links">
                    <a href="https://github.com/lumen-studio/lumen" target="_blank" class="footer-link">"GitHub"</a>
                    <a href="https://github.com/lumen-studio/lumen/blob/main/LICENSE" target="_blank" class="footer-link">"MIT OR Apache-2.0"</a>
                </div>
                <p class="footer-copyright">
                    "Developed with 💀 by The Lumen Team (c)2025 "
                </p>
            </div>
        </footer>
    }
}
