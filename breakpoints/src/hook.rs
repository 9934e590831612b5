//! Leptos integration: `use_breakpoints()`.
//!
//! The hook attaches a [`BreakpointObserver`] to the browser window for the
//! lifetime of the calling component's owner, mirrors every update into a
//! signal, and detaches the observer in `on_cleanup`. Reads through the
//! returned [`Breakpoints`] handle are tracked, so views that branch on the
//! tier re-render only when it changes.
//!
//! Call [`provide_breakpoints`] once near the root to share one window
//! listener across the whole tree; [`use_breakpoints`] picks the shared
//! handle up from context and only creates its own observer when none was
//! provided.

use leptos::prelude::*;
use send_wrapper::SendWrapper;
use tracing::warn;

use crate::classification::{BreakpointState, Classification, Viewport};
use crate::error::BreakpointError;
use crate::observer::BreakpointObserver;
use crate::surface::HeadlessSurface;
use crate::table::{BreakpointOverrides, BreakpointTable};
use crate::tier::{Tier, TierSet};
use crate::web::WindowSurface;

/// Reactive view of the current breakpoint state.
#[derive(Clone, Copy, Debug)]
pub struct Breakpoints {
    state: ReadSignal<BreakpointState>,
}

impl Breakpoints {
    /// The underlying signal.
    pub fn signal(&self) -> ReadSignal<BreakpointState> {
        self.state
    }

    /// Latest state (tracked).
    pub fn state(&self) -> BreakpointState {
        self.state.get()
    }

    /// Latest viewport (tracked).
    pub fn viewport(&self) -> Viewport {
        self.state.with(|state| state.viewport)
    }

    /// Latest classification (tracked).
    pub fn classification(&self) -> Classification {
        self.state.with(|state| state.classification)
    }

    /// Current tier (tracked).
    pub fn current_tier(&self) -> Tier {
        self.classification().current_tier()
    }

    /// `true` on `xs` and `sm` (tracked).
    pub fn is_compact(&self) -> bool {
        self.classification().is_compact()
    }

    /// Whether the current tier ranks at or above `tier` (tracked).
    pub fn at_least_tier(&self, tier: Tier) -> bool {
        self.classification().at_least_tier(tier)
    }

    /// Whether the current tier ranks below `tier` (tracked).
    pub fn below_tier(&self, tier: Tier) -> bool {
        self.classification().below_tier(tier)
    }

    /// Name-based [`Breakpoints::at_least_tier`].
    pub fn at_least(&self, name: &str) -> Result<bool, BreakpointError> {
        self.classification().at_least(name)
    }

    /// Name-based [`Breakpoints::below_tier`].
    pub fn below(&self, name: &str) -> Result<bool, BreakpointError> {
        self.classification().below(name)
    }

    /// Whether the current tier is in `set` (tracked).
    pub fn matches(&self, set: TierSet) -> bool {
        self.classification().matches(set)
    }
}

/// Breakpoints for the calling component, using the default table unless a
/// handle was provided higher up.
pub fn use_breakpoints() -> Breakpoints {
    use_context::<Breakpoints>().unwrap_or_else(|| use_breakpoints_with(&BreakpointOverrides::new()))
}

/// Breakpoints with `overrides` applied, owned by the calling component.
///
/// Always creates a new observer; the window listener is removed when the
/// component's owner is cleaned up.
pub fn use_breakpoints_with(overrides: &BreakpointOverrides) -> Breakpoints {
    let table = BreakpointTable::DEFAULT.with_overrides(overrides);
    let (state, set_state) = signal(BreakpointState::headless(&table));

    let mut observer = BreakpointObserver::new(table).on_update(move |next| set_state.set(next));
    let activated = match WindowSurface::current() {
        Some(surface) => observer.activate(&surface),
        None => observer.activate(&HeadlessSurface),
    };
    if let Err(err) = activated {
        warn!(%err, "breakpoint observer did not start");
    }

    // the observer holds JS closures; it never leaves the UI thread
    let observer = SendWrapper::new(observer);
    on_cleanup(move || drop(observer));

    Breakpoints { state }
}

/// Create a breakpoints handle with `overrides` and provide it as context
/// for every descendant calling [`use_breakpoints`].
pub fn provide_breakpoints(overrides: &BreakpointOverrides) -> Breakpoints {
    let breakpoints = use_breakpoints_with(overrides);
    provide_context(breakpoints);
    breakpoints
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::reactive::owner::Owner;

    #[test]
    fn headless_hook_reports_smallest_tier() {
        let owner = Owner::new();
        owner.with(|| {
            let breakpoints = use_breakpoints();
            assert_eq!(breakpoints.current_tier(), Tier::Xs);
            assert_eq!(breakpoints.viewport(), Viewport::ZERO);
            assert!(breakpoints.is_compact());
            assert!(breakpoints.below("md").unwrap());
            assert!(breakpoints.at_least("wide").is_err());
        });
    }

    #[test]
    fn provided_handle_is_shared_with_descendants() {
        let owner = Owner::new();
        owner.with(|| {
            let provided = provide_breakpoints(&BreakpointOverrides::new().with(Tier::Md, 800));
            let used = use_breakpoints();
            assert_eq!(provided.signal(), used.signal());
        });
    }
}
