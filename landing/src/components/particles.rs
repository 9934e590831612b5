//! Floating particle background.
//!
//! Particles are generated from a fixed seed so the field looks the same
//! on every load and only changes when the tier (and so the count) does.

use leptos::prelude::*;
use lumen_breakpoints::{Tier, use_breakpoints};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// One decorative dot. Positions are percentages of the field.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub id: usize,
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub opacity: f32,
    pub duration: f32,
    pub delay: f32,
}

impl Particle {
    pub fn style(&self) -> String {
        format!(
            "left: {:.2}%; top: {:.2}%; width: {:.1}px; height: {:.1}px; opacity: {:.2}; \
             animation-duration: {:.1}s; animation-delay: -{:.1}s;",
            self.x, self.y, self.size, self.size, self.opacity, self.duration, self.delay
        )
    }
}

pub const SIZE_PX: std::ops::Range<f32> = 2.0..6.0;
pub const OPACITY: std::ops::Range<f32> = 0.15..0.6;
pub const DURATION_S: std::ops::Range<f32> = 8.0..20.0;

/// Fewer particles on small screens.
pub const fn particle_count(tier: Tier) -> usize {
    match tier {
        Tier::Xs | Tier::Sm => 12,
        Tier::Md => 24,
        Tier::Lg | Tier::Xl | Tier::Xxl => 40,
    }
}

/// `count` particles drawn from `seed`. The first `n` particles are the
/// same for any `count >= n`, so growing the field keeps existing dots.
pub fn generate_particles(seed: u64, count: usize) -> Vec<Particle> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count)
        .map(|id| {
            let duration = rng.gen_range(DURATION_S);
            Particle {
                id,
                x: rng.gen_range(0.0..100.0),
                y: rng.gen_range(0.0..100.0),
                size: rng.gen_range(SIZE_PX),
                opacity: rng.gen_range(OPACITY),
                duration,
                delay: rng.gen_range(0.0..duration),
            }
        })
        .collect()
}

#[component]
pub fn ParticleField(#[prop(default = 0x1u64)] seed: u64) -> impl IntoView {
    let breakpoints = use_breakpoints();
    let particles = Memo::new(move |_| generate_particles(seed, particle_count(breakpoints.current_tier())));

    view! {
        <div class="particle-field" aria-hidden="true">
            <For each=move || particles.get() key=|particle| particle.id let:particle>
                <span class="particle" style=particle.style()></span>
            </For>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_follows_tier() {
        assert_eq!(particle_count(Tier::Xs), 12);
        assert_eq!(particle_count(Tier::Sm), 12);
        assert_eq!(particle_count(Tier::Md), 24);
        assert_eq!(particle_count(Tier::Xxl), 40);
    }

    #[test]
    fn same_seed_same_field() {
        assert_eq!(generate_particles(7, 24), generate_particles(7, 24));
        assert_ne!(generate_particles(7, 24), generate_particles(8, 24));
    }

    #[test]
    fn larger_field_extends_smaller_one() {
        let small = generate_particles(42, 12);
        let large = generate_particles(42, 40);
        assert_eq!(large.len(), 40);
        assert_eq!(&large[..12], &small[..]);
    }

    #[test]
    fn particles_stay_within_ranges() {
        for p in generate_particles(3, 200) {
            assert!((0.0..100.0).contains(&p.x) && (0.0..100.0).contains(&p.y));
            assert!(SIZE_PX.contains(&p.size));
            assert!(OPACITY.contains(&p.opacity));
            assert!(DURATION_S.contains(&p.duration));
            assert!(p.delay >= 0.0 && p.delay < p.duration);
        }
    }

    #[test]
    fn style_is_inline_css() {
        let particle = Particle {
            id: 0,
            x: 12.5,
            y: 50.0,
            size: 3.0,
            opacity: 0.4,
            duration: 10.0,
            delay: 2.5,
        };
        assert_eq!(
            particle.style(),
            "left: 12.50%; top: 50.00%; width: 3.0px; height: 3.0px; opacity: 0.40; \
             animation-duration: 10.0s; animation-delay: -2.5s;"
        );
    }
}
