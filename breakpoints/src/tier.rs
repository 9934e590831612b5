//! Tier names, their ordering, and sets of tiers.
//!
//! A [`Tier`] is one named width bucket. Tiers are totally ordered from
//! smallest to largest; every query in this crate compares ranks, never
//! pixel values. A [`TierSet`] lets layout code say "md and up" or
//! "only on sm" without spelling out each tier.

use std::fmt;
use std::ops::{Bound, RangeBounds};
use std::str::FromStr;

use bitflags::bitflags;

use crate::error::BreakpointError;

/// A named breakpoint bucket, ordered smallest (`Xs`) to largest (`Xxl`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tier {
    /// `xs` - phones in portrait, and the fallback for unknown widths
    Xs,
    /// `sm`
    Sm,
    /// `md`
    Md,
    /// `lg`
    Lg,
    /// `xl`
    Xl,
    /// `2xl`
    Xxl,
}

impl Tier {
    /// Number of tiers.
    pub const COUNT: usize = 6;

    /// All tiers in ascending order.
    pub const ALL: [Tier; Tier::COUNT] = [
        Tier::Xs,
        Tier::Sm,
        Tier::Md,
        Tier::Lg,
        Tier::Xl,
        Tier::Xxl,
    ];

    /// The smallest tier.
    pub const SMALLEST: Tier = Tier::Xs;

    /// The largest tier.
    pub const LARGEST: Tier = Tier::Xxl;

    /// Ordinal position, `0` for `xs` up to `5` for `2xl`.
    pub const fn rank(self) -> usize {
        self as usize
    }

    /// Tier at `rank`, if there is one.
    pub const fn from_rank(rank: usize) -> Option<Tier> {
        if rank < Tier::COUNT {
            Some(Tier::ALL[rank])
        } else {
            None
        }
    }

    /// Canonical name as used in class names and config keys.
    pub const fn name(self) -> &'static str {
        match self {
            Tier::Xs => "xs",
            Tier::Sm => "sm",
            Tier::Md => "md",
            Tier::Lg => "lg",
            Tier::Xl => "xl",
            Tier::Xxl => "2xl",
        }
    }

    /// Look up a tier by its canonical name. Names are case-sensitive.
    pub fn from_name(name: &str) -> Option<Tier> {
        Tier::ALL.into_iter().find(|tier| tier.name() == name)
    }

    /// `true` for the two smallest tiers (the "mobile" half of a
    /// mobile/desktop split).
    pub const fn is_compact(self) -> bool {
        matches!(self, Tier::Xs | Tier::Sm)
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Tier {
    type Err = BreakpointError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tier::from_name(s).ok_or_else(|| BreakpointError::InvalidTier(s.to_string()))
    }
}

bitflags! {
    /// A set of tiers, one bit per tier in rank order.
    #[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
    #[must_use]
    pub struct TierSet: u8 {
        /// `xs`
        const XS = 1;
        /// `sm`
        const SM = 1 << 1;
        /// `md`
        const MD = 1 << 2;
        /// `lg`
        const LG = 1 << 3;
        /// `xl`
        const XL = 1 << 4;
        /// `2xl`
        const XXL = 1 << 5;
    }
}

impl TierSet {
    /// The two compact tiers, `xs` and `sm`.
    pub const COMPACT: TierSet = TierSet::XS.union(TierSet::SM);

    /// A set holding just `tier`.
    pub const fn only(tier: Tier) -> Self {
        TierSet::from_bits_truncate(1 << tier.rank())
    }

    /// Every tier strictly smaller than `tier`.
    pub const fn below(tier: Tier) -> Self {
        TierSet::from_bits_truncate((1u8 << tier.rank()) - 1)
    }

    /// `tier` and every tier larger than it.
    pub const fn at_least(tier: Tier) -> Self {
        TierSet::all().difference(TierSet::below(tier))
    }

    /// Every tier inside `range`, e.g. `TierSet::range(Tier::Sm..=Tier::Lg)`.
    ///
    /// An empty or inverted range yields an empty set.
    pub fn range<R: RangeBounds<Tier>>(range: R) -> Self {
        let start = match range.start_bound() {
            Bound::Included(tier) => tier.rank(),
            Bound::Excluded(tier) => tier.rank() + 1,
            Bound::Unbounded => 0,
        };
        let end = match range.end_bound() {
            Bound::Included(tier) => tier.rank() + 1,
            Bound::Excluded(tier) => tier.rank(),
            Bound::Unbounded => Tier::COUNT,
        };
        if start >= end {
            return TierSet::empty();
        }
        TierSet::below_rank(end).difference(TierSet::below_rank(start))
    }

    /// Whether `tier` is a member.
    pub const fn has(self, tier: Tier) -> bool {
        self.contains(TierSet::only(tier))
    }

    /// Members in ascending order.
    pub fn tiers(self) -> impl Iterator<Item = Tier> {
        Tier::ALL.into_iter().filter(move |tier| self.has(*tier))
    }

    const fn below_rank(rank: usize) -> Self {
        TierSet::from_bits_truncate(((1u16 << rank) - 1) as u8)
    }
}

impl From<Tier> for TierSet {
    fn from(tier: Tier) -> Self {
        TierSet::only(tier)
    }
}

#[cfg(test)]
mod tests {
    use super::{Tier, TierSet};

    #[test]
    fn names_round_trip_through_from_str() {
        for tier in Tier::ALL {
            assert_eq!(tier.name().parse::<Tier>().unwrap(), tier);
        }
        assert_eq!(Tier::Xxl.to_string(), "2xl");
    }

    #[test]
    fn unknown_and_miscased_names_are_rejected() {
        assert!("XL".parse::<Tier>().is_err());
        assert!("xxl".parse::<Tier>().is_err());
        assert!("".parse::<Tier>().is_err());
        assert_eq!(Tier::from_name("tablet"), None);
    }

    #[test]
    fn rank_follows_declaration_order() {
        for (rank, tier) in Tier::ALL.into_iter().enumerate() {
            assert_eq!(tier.rank(), rank);
            assert_eq!(Tier::from_rank(rank), Some(tier));
        }
        assert_eq!(Tier::from_rank(Tier::COUNT), None);
        assert!(Tier::Xs < Tier::Sm && Tier::Xl < Tier::Xxl);
    }

    #[test]
    fn only_the_two_smallest_tiers_are_compact() {
        let compact: Vec<Tier> = Tier::ALL.into_iter().filter(|t| t.is_compact()).collect();
        assert_eq!(compact, vec![Tier::Xs, Tier::Sm]);
        assert_eq!(TierSet::COMPACT, TierSet::below(Tier::Md));
    }

    #[test]
    fn below_and_at_least_partition_all_tiers() {
        for tier in Tier::ALL {
            let below = TierSet::below(tier);
            let at_least = TierSet::at_least(tier);
            assert!(below.intersection(at_least).is_empty());
            assert_eq!(below | at_least, TierSet::all());
            assert!(at_least.has(tier));
            assert!(!below.has(tier));
        }
        assert!(TierSet::below(Tier::Xs).is_empty());
        assert_eq!(TierSet::at_least(Tier::Xxl), TierSet::XXL);
    }

    #[test]
    fn range_inclusive_and_exclusive() {
        let incl = TierSet::range(Tier::Sm..=Tier::Lg);
        assert_eq!(incl, TierSet::SM | TierSet::MD | TierSet::LG);

        let excl = TierSet::range(Tier::Xs..Tier::Lg);
        assert_eq!(excl, TierSet::XS | TierSet::SM | TierSet::MD);

        assert_eq!(TierSet::range(..), TierSet::all());
        assert_eq!(TierSet::range(Tier::Xl..), TierSet::XL | TierSet::XXL);
        assert_eq!(TierSet::range(..Tier::Sm), TierSet::XS);
    }

    #[test]
    fn inverted_range_is_empty() {
        assert!(TierSet::range(Tier::Lg..=Tier::Sm).is_empty());
        assert!(TierSet::range(Tier::Md..Tier::Md).is_empty());
    }

    #[test]
    fn tiers_iterates_in_ascending_order() {
        let set = TierSet::XXL | TierSet::XS | TierSet::MD;
        let tiers: Vec<Tier> = set.tiers().collect();
        assert_eq!(tiers, vec![Tier::Xs, Tier::Md, Tier::Xxl]);
    }
}
