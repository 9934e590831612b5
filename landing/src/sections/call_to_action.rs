use leptos::prelude::*;

use crate::components::{Button, ButtonVariant};
use crate::layout::Section;

#[component]
pub fn CallToAction() -> impl IntoView {
    view! {
        <Section
            id="start"
            eyebrow="Get started"
            title="Ship a page that feels alive."
            description="Drop in the components, tune the breakpoints, launch."
        >
            <div class="cta-actions fade-in">
                <Button href="https://github.com/lumen-studio/lumen" external=true>
                    "View source"
                </Button>
                <Button variant=ButtonVariant::Ghost href="#features">
                    "Back to features"
                </Button>
            </div>
        </Section>
    }
}
