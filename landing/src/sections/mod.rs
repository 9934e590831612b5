// Landing page sections
// Developed with 💀 by The Lumen Team (c)2025

/// Version string used across the landing page (single source of truth)
pub const VERSION: &str = "v0.3.2";

mod call_to_action;
mod features;
mod footer;
mod hero;
mod nav;
mod showcase;

pub use call_to_action::CallToAction;
pub use features::Features;
pub use footer::Footer;
pub use hero::Hero;
pub use nav::Nav;
pub use showcase::Showcase;
