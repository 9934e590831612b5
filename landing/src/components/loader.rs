use leptos::prelude::*;

/// Full-page spinner, faded out once `ready` turns true.
#[component]
pub fn Loader(#[prop(into)] ready: Signal<bool>) -> impl IntoView {
    view! {
        <div
            class=move || if ready.get() { "loader loader-done" } else { "loader" }
            aria-hidden=move || if ready.get() { "true" } else { "false" }
            role="status"
        >
            <div class="loader-ring"></div>
            <span class="loader-label">"Loading"</span>
        </div>
    }
}
