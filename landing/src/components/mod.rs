// Reusable presentational components
// Developed with 💀 by The Lumen Team (c)2025

mod button;
mod card;
mod loader;
mod particles;

pub use button::{Button, ButtonVariant};
pub use card::{FeatureCard, GlowCard};
pub use loader::Loader;
pub use particles::ParticleField;
