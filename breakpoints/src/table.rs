//! Breakpoint thresholds: the default table and caller overrides.
//!
//! A [`BreakpointTable`] maps each [`Tier`] to the minimum viewport width
//! (in CSS pixels) at which that tier becomes active. Callers never edit
//! the default in place: they describe the tiers they want changed in a
//! [`BreakpointOverrides`] and get a fresh table back from
//! [`BreakpointTable::with_overrides`].
//!
//! # Example
//!
//! ```rust
//! use lumen_breakpoints::{BreakpointOverrides, BreakpointTable, Tier};
//!
//! let overrides = BreakpointOverrides::from_json(r#"{ "md": 800 }"#).unwrap();
//! let table = BreakpointTable::DEFAULT.with_overrides(&overrides);
//!
//! assert_eq!(table.threshold(Tier::Md), 800);
//! assert_eq!(table.classify(770), Tier::Sm);
//! assert_eq!(BreakpointTable::DEFAULT.classify(770), Tier::Md);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::BreakpointError;
use crate::tier::Tier;

/// Minimum width per tier, indexed by tier rank.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BreakpointTable {
    thresholds: [u32; Tier::COUNT],
}

impl BreakpointTable {
    /// `xs: 0, sm: 640, md: 768, lg: 1024, xl: 1280, 2xl: 1536`.
    pub const DEFAULT: BreakpointTable = BreakpointTable {
        thresholds: [0, 640, 768, 1024, 1280, 1536],
    };

    /// Build a table from explicit thresholds in tier order.
    ///
    /// No ordering is enforced; see [`BreakpointTable::is_ascending`].
    pub const fn from_thresholds(thresholds: [u32; Tier::COUNT]) -> Self {
        Self { thresholds }
    }

    /// Threshold for `tier`.
    pub const fn threshold(&self, tier: Tier) -> u32 {
        self.thresholds[tier.rank()]
    }

    /// `(tier, threshold)` pairs in tier order.
    pub fn entries(&self) -> impl Iterator<Item = (Tier, u32)> + '_ {
        Tier::ALL.into_iter().map(|tier| (tier, self.threshold(tier)))
    }

    /// Copy of this table with every tier set in `overrides` replaced.
    pub fn with_overrides(&self, overrides: &BreakpointOverrides) -> Self {
        let mut merged = *self;
        for (tier, threshold) in overrides.entries() {
            merged.thresholds[tier.rank()] = threshold;
        }
        merged
    }

    /// Whether thresholds never decrease from `xs` to `2xl`.
    pub fn is_ascending(&self) -> bool {
        self.thresholds.windows(2).all(|pair| pair[0] <= pair[1])
    }

    /// The largest tier whose threshold is `<= width`.
    ///
    /// Tiers are scanned from largest to smallest and the first match wins,
    /// so a table that is not ascending still classifies deterministically.
    /// When nothing matches (the smallest tier was given a threshold above
    /// `width`) the smallest tier is returned.
    pub fn classify(&self, width: u32) -> Tier {
        Tier::ALL
            .into_iter()
            .rev()
            .find(|tier| self.threshold(*tier) <= width)
            .unwrap_or(Tier::SMALLEST)
    }
}

impl Default for BreakpointTable {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// A partial table: thresholds for whichever tiers the caller wants to move.
///
/// Deserializes from an object keyed by tier name (`"xs"` … `"2xl"`);
/// unknown keys are rejected.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BreakpointOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    xs: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    sm: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    md: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    lg: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    xl: Option<u32>,
    #[serde(default, rename = "2xl", skip_serializing_if = "Option::is_none")]
    xxl: Option<u32>,
}

impl BreakpointOverrides {
    /// No overrides: merging yields the base table unchanged.
    pub const fn new() -> Self {
        Self {
            xs: None,
            sm: None,
            md: None,
            lg: None,
            xl: None,
            xxl: None,
        }
    }

    /// Parse overrides from JSON such as `{"md": 800, "2xl": 1600}`.
    pub fn from_json(text: &str) -> Result<Self, BreakpointError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Set the threshold for `tier`.
    #[must_use]
    pub fn with(mut self, tier: Tier, threshold: u32) -> Self {
        *self.slot_mut(tier) = Some(threshold);
        self
    }

    /// The overridden threshold for `tier`, if any.
    pub fn get(&self, tier: Tier) -> Option<u32> {
        match tier {
            Tier::Xs => self.xs,
            Tier::Sm => self.sm,
            Tier::Md => self.md,
            Tier::Lg => self.lg,
            Tier::Xl => self.xl,
            Tier::Xxl => self.xxl,
        }
    }

    /// Whether no tier is overridden.
    pub fn is_empty(&self) -> bool {
        self.entries().next().is_none()
    }

    /// Overridden `(tier, threshold)` pairs in tier order.
    pub fn entries(&self) -> impl Iterator<Item = (Tier, u32)> + '_ {
        Tier::ALL
            .into_iter()
            .filter_map(|tier| self.get(tier).map(|threshold| (tier, threshold)))
    }

    fn slot_mut(&mut self, tier: Tier) -> &mut Option<u32> {
        match tier {
            Tier::Xs => &mut self.xs,
            Tier::Sm => &mut self.sm,
            Tier::Md => &mut self.md,
            Tier::Lg => &mut self.lg,
            Tier::Xl => &mut self.xl,
            Tier::Xxl => &mut self.xxl,
        }
    }
}

impl FromIterator<(Tier, u32)> for BreakpointOverrides {
    fn from_iter<I: IntoIterator<Item = (Tier, u32)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::new(), |overrides, (tier, threshold)| {
                overrides.with(tier, threshold)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_table_is_ascending_and_starts_at_zero() {
        assert!(BreakpointTable::DEFAULT.is_ascending());
        assert_eq!(BreakpointTable::DEFAULT.threshold(Tier::Xs), 0);
        assert_eq!(BreakpointTable::default(), BreakpointTable::DEFAULT);
    }

    #[test]
    fn classify_picks_largest_matching_tier() {
        let table = BreakpointTable::DEFAULT;
        assert_eq!(table.classify(0), Tier::Xs);
        assert_eq!(table.classify(639), Tier::Xs);
        assert_eq!(table.classify(640), Tier::Sm);
        assert_eq!(table.classify(767), Tier::Sm);
        assert_eq!(table.classify(768), Tier::Md);
        assert_eq!(table.classify(800), Tier::Md);
        assert_eq!(table.classify(1024), Tier::Lg);
        assert_eq!(table.classify(1279), Tier::Lg);
        assert_eq!(table.classify(1280), Tier::Xl);
        assert_eq!(table.classify(1535), Tier::Xl);
        assert_eq!(table.classify(1536), Tier::Xxl);
        assert_eq!(table.classify(u32::MAX), Tier::Xxl);
    }

    #[test]
    fn overrides_replace_only_named_tiers() {
        let overrides = BreakpointOverrides::new().with(Tier::Md, 800);
        let table = BreakpointTable::DEFAULT.with_overrides(&overrides);

        assert_eq!(
            table,
            BreakpointTable::from_thresholds([0, 640, 800, 1024, 1280, 1536])
        );
        // the default constant is untouched
        assert_eq!(BreakpointTable::DEFAULT.threshold(Tier::Md), 768);
    }

    #[test]
    fn empty_overrides_leave_table_unchanged() {
        let overrides = BreakpointOverrides::new();
        assert!(overrides.is_empty());
        assert_eq!(
            BreakpointTable::DEFAULT.with_overrides(&overrides),
            BreakpointTable::DEFAULT
        );
    }

    #[test]
    fn non_ascending_table_still_classifies_literally() {
        // md moved above lg: widths between them can never be md
        let table = BreakpointTable::DEFAULT.with_overrides(&BreakpointOverrides::new().with(Tier::Md, 1100));
        assert!(!table.is_ascending());
        assert_eq!(table.classify(900), Tier::Sm);
        assert_eq!(table.classify(1050), Tier::Lg);
        assert_eq!(table.classify(1150), Tier::Lg);
        assert_eq!(table.classify(1300), Tier::Xl);
    }

    #[test]
    fn raised_smallest_threshold_falls_back_to_smallest_tier() {
        let table = BreakpointTable::DEFAULT.with_overrides(&BreakpointOverrides::new().with(Tier::Xs, 100));
        assert_eq!(table.classify(50), Tier::Xs);
        assert_eq!(table.classify(100), Tier::Xs);
    }

    #[test]
    fn overrides_parse_from_json() {
        let overrides = BreakpointOverrides::from_json(r#"{"sm": 600, "2xl": 1600}"#).unwrap();
        let entries: Vec<(Tier, u32)> = overrides.entries().collect();
        assert_eq!(entries, vec![(Tier::Sm, 600), (Tier::Xxl, 1600)]);
        assert_eq!(overrides.get(Tier::Md), None);
    }

    #[test]
    fn overrides_json_rejects_unknown_tiers_and_bad_values() {
        assert!(BreakpointOverrides::from_json(r#"{"tablet": 700}"#).is_err());
        assert!(BreakpointOverrides::from_json(r#"{"md": -1}"#).is_err());
        assert!(BreakpointOverrides::from_json(r#"{"md": "800px"}"#).is_err());
        assert!(BreakpointOverrides::from_json("md=800").is_err());
    }

    #[test]
    fn overrides_serialize_only_set_tiers() {
        let overrides = BreakpointOverrides::new().with(Tier::Xxl, 1600);
        let json = serde_json::to_string(&overrides).unwrap();
        assert_eq!(json, r#"{"2xl":1600}"#);
    }

    #[test]
    fn overrides_collect_from_pairs_last_wins() {
        let overrides: BreakpointOverrides = [(Tier::Lg, 1000), (Tier::Lg, 1050), (Tier::Xl, 1300)]
            .into_iter()
            .collect();
        assert_eq!(overrides.get(Tier::Lg), Some(1050));
        assert_eq!(overrides.get(Tier::Xl), Some(1300));
    }
}
