use leptos::prelude::*;
use lumen_breakpoints::use_breakpoints;

/// Visual weight of a [`Button`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Ghost,
}

impl ButtonVariant {
    pub const fn class(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn btn-primary",
            ButtonVariant::Secondary => "btn btn-secondary",
            ButtonVariant::Ghost => "btn btn-ghost",
        }
    }
}

/// Buttons stretch to the container width on compact screens.
pub fn button_class(variant: ButtonVariant, compact: bool) -> String {
    if compact {
        format!("{} btn-block", variant.class())
    } else {
        variant.class().to_string()
    }
}

/// A call-to-action. Renders a link when `href` is set, a `<button>` otherwise.
#[component]
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional, into)] href: Option<String>,
    #[prop(optional)] external: bool,
    children: Children,
) -> impl IntoView {
    let breakpoints = use_breakpoints();
    let class = move || button_class(variant, breakpoints.is_compact());

    match href {
        Some(href) => {
            let target = external.then_some("_blank");
            let rel = external.then_some("noopener noreferrer");
            view! {
                <a href=href class=class target=target rel=rel>
                    {children()}
                </a>
            }
            .into_any()
        }
        None => view! {
            <button type="button" class=class>
                {children()}
            </button>
        }
        .into_any(),
    }
}
