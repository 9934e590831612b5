//! Classification of a single viewport size.
//!
//! [`Classification`] is everything derived from one width: the current
//! tier, whether it is compact, and the precomputed "below" set. It is
//! plain `Copy` data, so owners can stash it in a signal or compare two
//! snapshots cheaply. [`BreakpointState`] pairs it with the [`Viewport`]
//! it was computed from.

use crate::error::BreakpointError;
use crate::table::BreakpointTable;
use crate::tier::{Tier, TierSet};

/// Width and height of the observed surface, in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Viewport {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Viewport {
    /// Viewport of the given size.
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// The `(0, 0)` viewport used when nothing is observable.
    pub const ZERO: Viewport = Viewport::new(0, 0);
}

/// Derived breakpoint queries for one width.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Classification {
    tier: Tier,
    below: TierSet,
}

impl Classification {
    /// Classification for a known tier.
    pub const fn for_tier(tier: Tier) -> Self {
        Self {
            tier,
            // below[T] holds for every T ranked above the current tier
            below: TierSet::at_least(tier).difference(TierSet::only(tier)),
        }
    }

    /// Classify `width` against `table`.
    pub fn classify(table: &BreakpointTable, width: u32) -> Self {
        Self::for_tier(table.classify(width))
    }

    /// The largest tier whose threshold is `<=` the width.
    pub const fn current_tier(&self) -> Tier {
        self.tier
    }

    /// `true` when the current tier is `xs` or `sm`.
    pub const fn is_compact(&self) -> bool {
        self.tier.is_compact()
    }

    /// Tiers the viewport is currently below.
    ///
    /// Never contains the smallest tier.
    pub const fn below_set(&self) -> TierSet {
        self.below
    }

    /// Whether the current tier ranks at or above `tier`.
    pub const fn at_least_tier(&self, tier: Tier) -> bool {
        !self.below.has(tier)
    }

    /// Whether the current tier ranks below `tier`.
    pub const fn below_tier(&self, tier: Tier) -> bool {
        self.below.has(tier)
    }

    /// [`Classification::at_least_tier`] by tier name.
    ///
    /// Fails only when `name` is not a tier.
    pub fn at_least(&self, name: &str) -> Result<bool, BreakpointError> {
        Ok(self.at_least_tier(name.parse()?))
    }

    /// [`Classification::below_tier`] by tier name.
    ///
    /// Fails only when `name` is not a tier.
    pub fn below(&self, name: &str) -> Result<bool, BreakpointError> {
        Ok(self.below_tier(name.parse()?))
    }

    /// Whether the current tier is a member of `set`.
    pub const fn matches(&self, set: TierSet) -> bool {
        set.has(self.tier)
    }
}

impl Default for Classification {
    fn default() -> Self {
        Self::for_tier(Tier::SMALLEST)
    }
}

/// A viewport together with its classification, as published to owners.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct BreakpointState {
    /// The measured surface size.
    pub viewport: Viewport,
    /// Classification of `viewport.width`.
    pub classification: Classification,
}

impl BreakpointState {
    /// Measure `viewport` against `table`.
    pub fn measure(table: &BreakpointTable, viewport: Viewport) -> Self {
        Self {
            viewport,
            classification: Classification::classify(table, viewport.width),
        }
    }

    /// Constant state for hosts without a surface: `(0, 0)`, smallest tier.
    pub fn headless(table: &BreakpointTable) -> Self {
        Self::measure(table, Viewport::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn below_set_excludes_current_and_smaller_tiers() {
        let md = Classification::for_tier(Tier::Md);
        assert_eq!(md.below_set(), TierSet::LG | TierSet::XL | TierSet::XXL);

        let xxl = Classification::for_tier(Tier::Xxl);
        assert!(xxl.below_set().is_empty());

        let xs = Classification::for_tier(Tier::Xs);
        assert_eq!(xs.below_set(), TierSet::all().difference(TierSet::XS));
    }

    #[test]
    fn at_least_and_below_are_complements() {
        for current in Tier::ALL {
            let c = Classification::for_tier(current);
            for tier in Tier::ALL {
                assert_eq!(c.at_least_tier(tier), !c.below_tier(tier));
                assert_eq!(c.at_least_tier(tier), current.rank() >= tier.rank());
            }
        }
    }

    #[test]
    fn name_queries_reject_unknown_tiers() {
        let c = Classification::for_tier(Tier::Lg);
        assert!(c.at_least("md").unwrap());
        assert!(c.below("xl").unwrap());
        assert!(matches!(
            c.at_least("tablet"),
            Err(BreakpointError::InvalidTier(name)) if name == "tablet"
        ));
        assert!(matches!(c.below("LG"), Err(BreakpointError::InvalidTier(_))));
    }

    #[test]
    fn matches_checks_tier_set_membership() {
        let c = Classification::for_tier(Tier::Sm);
        assert!(c.matches(TierSet::COMPACT));
        assert!(!c.matches(TierSet::at_least(Tier::Md)));
        assert!(c.matches(TierSet::range(Tier::Xs..=Tier::Md)));
    }

    #[test]
    fn headless_state_is_zero_and_smallest() {
        let state = BreakpointState::headless(&BreakpointTable::DEFAULT);
        assert_eq!(state.viewport, Viewport::ZERO);
        assert_eq!(state.classification.current_tier(), Tier::Xs);
        assert!(state.classification.is_compact());
        assert_eq!(state, BreakpointState::default());
    }
}
