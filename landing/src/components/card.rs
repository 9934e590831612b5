use leptos::prelude::*;

use crate::layout::stagger_style;

/// Feature tile with an optional copyable snippet. `index` orders the
/// staggered fade-in inside its grid.
#[component]
pub fn FeatureCard(
    icon: &'static str,
    title: &'static str,
    description: &'static str,
    #[prop(optional)] code: Option<&'static str>,
    #[prop(optional)] index: usize,
) -> impl IntoView {
    let (copied, set_copied) = signal(false);

    view! {
        <article class="feature-card fade-in" style=stagger_style(index)>
            <div class="feature-icon">{icon}</div>
            <h3 class="feature-title">{title}</h3>
            <p class="feature-description">{description}</p>
            {code.map(|c| {
                let copy_code = move |_| {
                    if let Some(window) = web_sys::window() {
                        let clipboard = window.navigator().clipboard();
                        let _ = clipboard.write_text(c);
                        set_copied.set(true);
                        set_timeout(
                            move || set_copied.set(false),
                            std::time::Duration::from_millis(1500),
                        );
                    }
                };
                view! {
                    <div class="feature-code-box">
                        <code class="feature-code-text">{c}</code>
                        <button class="feature-copy-btn" on:click=copy_code>
                            {move || if copied.get() { "ok" } else { "cp" }}
                        </button>
                    </div>
                }
            })}
        </article>
    }
}

/// Position of the hover glow as CSS custom properties.
pub fn glow_style(x: i32, y: i32) -> String {
    format!("--glow-x: {x}px; --glow-y: {y}px;")
}

/// Card with a radial glow that follows the pointer while hovered.
#[component]
pub fn GlowCard(
    title: &'static str,
    #[prop(optional)] index: usize,
    children: Children,
) -> impl IntoView {
    let (pointer, set_pointer) = signal(None::<(i32, i32)>);

    let style = move || {
        let glow = pointer
            .get()
            .map(|(x, y)| glow_style(x, y))
            .unwrap_or_default();
        format!("{}{glow}", stagger_style(index))
    };

    view! {
        <div
            class=move || if pointer.get().is_some() { "glow-card fade-in glowing" } else { "glow-card fade-in" }
            style=style
            on:mousemove=move |ev| set_pointer.set(Some((ev.offset_x(), ev.offset_y())))
            on:mouseleave=move |_| set_pointer.set(None)
        >
            <h3 class="glow-card-title">{title}</h3>
            <div class="glow-card-body">{children()}</div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::glow_style;

    #[test]
    fn glow_position_is_exposed_as_custom_properties() {
        assert_eq!(glow_style(12, -4), "--glow-x: 12px; --glow-y: -4px;");
    }
}
