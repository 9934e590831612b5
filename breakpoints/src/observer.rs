//! The breakpoint observer and its lifecycle.
//!
//! An observer moves through three phases, in order and only once:
//!
//! ```text
//! Uninitialized --activate--> Observing --deactivate/drop--> TornDown
//! ```
//!
//! Activation measures the surface immediately and then subscribes to
//! resizes. Every notification re-classifies synchronously, in delivery
//! order, and hands the new [`BreakpointState`] to the optional update
//! callback. Teardown releases the subscription; dropping the observer
//! does the same, so a panic elsewhere in the owning tree cannot leave a
//! listener behind.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use tracing::{debug, trace, warn};

use crate::classification::{BreakpointState, Classification, Viewport};
use crate::error::BreakpointError;
use crate::surface::{Subscription, Surface};
use crate::table::{BreakpointOverrides, BreakpointTable};
use crate::tier::Tier;

/// Where an observer is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ObserverPhase {
    /// Created, not yet attached to a surface.
    Uninitialized,
    /// Attached; classification follows resizes.
    Observing,
    /// Detached for good.
    TornDown,
}

type UpdateCallback = Box<dyn FnMut(BreakpointState)>;

/// Shared between the observer handle and its resize listener.
#[derive(Clone)]
struct Publisher {
    table: BreakpointTable,
    state: Rc<Cell<BreakpointState>>,
    on_update: Rc<RefCell<Option<UpdateCallback>>>,
}

impl Publisher {
    fn publish(&self, viewport: Viewport) {
        let next = BreakpointState::measure(&self.table, viewport);
        let previous = self.state.replace(next);

        let tier = next.classification.current_tier();
        trace!(width = viewport.width, height = viewport.height, %tier, "viewport resized");
        if previous.classification.current_tier() != tier {
            debug!(
                from = %previous.classification.current_tier(),
                to = %tier,
                width = viewport.width,
                "breakpoint tier changed"
            );
        }

        // out of the cell while it runs, so a callback that resizes the
        // surface cannot hit an outstanding borrow
        let callback = self.on_update.borrow_mut().take();
        if let Some(mut callback) = callback {
            callback(next);
            let mut slot = self.on_update.borrow_mut();
            if slot.is_none() {
                *slot = Some(callback);
            }
        }
    }
}

/// Classifies a [`Surface`] into breakpoint tiers and keeps it current.
///
/// # Example
///
/// ```rust
/// use lumen_breakpoints::{BreakpointObserver, BreakpointOverrides, ManualSurface, Tier, Viewport};
///
/// let surface = ManualSurface::new(Viewport::new(770, 900));
/// let mut observer = BreakpointObserver::with_overrides(
///     &BreakpointOverrides::new().with(Tier::Md, 800),
/// );
/// observer.activate(&surface).unwrap();
/// assert_eq!(observer.current_tier(), Tier::Sm);
///
/// observer.deactivate();
/// surface.resize(Viewport::new(1600, 900));
/// assert_eq!(observer.current_tier(), Tier::Sm);
/// ```
pub struct BreakpointObserver {
    publisher: Publisher,
    subscription: Option<Subscription>,
    phase: ObserverPhase,
}

impl BreakpointObserver {
    /// Observer classifying against `table`.
    ///
    /// A table whose thresholds are not ascending is accepted as is; tiers
    /// are still picked by the "largest tier whose threshold fits" rule.
    pub fn new(table: BreakpointTable) -> Self {
        if !table.is_ascending() {
            warn!(?table, "breakpoint thresholds are not ascending; tier selection may skip tiers");
        }
        Self {
            publisher: Publisher {
                table,
                state: Rc::new(Cell::new(BreakpointState::headless(&table))),
                on_update: Rc::new(RefCell::new(None)),
            },
            subscription: None,
            phase: ObserverPhase::Uninitialized,
        }
    }

    /// Observer over the default table with `overrides` applied.
    pub fn with_overrides(overrides: &BreakpointOverrides) -> Self {
        Self::new(BreakpointTable::DEFAULT.with_overrides(overrides))
    }

    /// Call `callback` with the new state after activation and after every
    /// resize.
    #[must_use]
    pub fn on_update(self, callback: impl FnMut(BreakpointState) + 'static) -> Self {
        *self.publisher.on_update.borrow_mut() = Some(Box::new(callback));
        self
    }

    /// Measure `surface` now and follow its resizes.
    ///
    /// A surface without a size leaves the observer at `(0, 0)` and the
    /// smallest tier, without subscribing.
    ///
    /// # Errors
    ///
    /// [`BreakpointError::AlreadyObserving`] or
    /// [`BreakpointError::TornDown`] when the observer is past
    /// [`ObserverPhase::Uninitialized`].
    pub fn activate<S: Surface + ?Sized>(&mut self, surface: &S) -> Result<(), BreakpointError> {
        match self.phase {
            ObserverPhase::Uninitialized => {}
            ObserverPhase::Observing => return Err(BreakpointError::AlreadyObserving),
            ObserverPhase::TornDown => return Err(BreakpointError::TornDown),
        }

        match surface.viewport() {
            Some(viewport) => {
                self.publisher.publish(viewport);
                let publisher = self.publisher.clone();
                self.subscription = Some(surface.subscribe(Box::new(move |viewport: Viewport| {
                    publisher.publish(viewport);
                })));
                debug!(
                    width = viewport.width,
                    tier = %self.current_tier(),
                    "breakpoint observer attached"
                );
            }
            None => {
                self.publisher.publish(Viewport::ZERO);
                debug!("no surface to observe; using headless breakpoints");
            }
        }

        self.phase = ObserverPhase::Observing;
        Ok(())
    }

    /// Stop following resizes. Safe to call any number of times; the
    /// surface sees at most one unsubscribe.
    pub fn deactivate(&mut self) {
        if let Some(mut subscription) = self.subscription.take() {
            subscription.cancel();
        }
        if self.phase != ObserverPhase::TornDown {
            debug!("breakpoint observer torn down");
            self.phase = ObserverPhase::TornDown;
        }
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> ObserverPhase {
        self.phase
    }

    /// The effective threshold table.
    pub fn table(&self) -> &BreakpointTable {
        &self.publisher.table
    }

    /// Latest viewport and classification.
    pub fn state(&self) -> BreakpointState {
        self.publisher.state.get()
    }

    /// Latest measured viewport.
    pub fn viewport(&self) -> Viewport {
        self.state().viewport
    }

    /// Latest classification.
    pub fn classification(&self) -> Classification {
        self.state().classification
    }

    /// The largest tier whose threshold fits the current width.
    pub fn current_tier(&self) -> Tier {
        self.classification().current_tier()
    }

    /// `true` while the current tier is `xs` or `sm`.
    pub fn is_compact(&self) -> bool {
        self.classification().is_compact()
    }

    /// Whether the current tier ranks at or above the tier named `name`.
    ///
    /// # Errors
    ///
    /// [`BreakpointError::InvalidTier`] when `name` is not a tier.
    pub fn at_least(&self, name: &str) -> Result<bool, BreakpointError> {
        self.classification().at_least(name)
    }

    /// Whether the current tier ranks below the tier named `name`.
    ///
    /// # Errors
    ///
    /// [`BreakpointError::InvalidTier`] when `name` is not a tier.
    pub fn below(&self, name: &str) -> Result<bool, BreakpointError> {
        self.classification().below(name)
    }

    /// Typed form of [`BreakpointObserver::at_least`].
    pub fn at_least_tier(&self, tier: Tier) -> bool {
        self.classification().at_least_tier(tier)
    }

    /// Typed form of [`BreakpointObserver::below`].
    pub fn below_tier(&self, tier: Tier) -> bool {
        self.classification().below_tier(tier)
    }
}

impl Default for BreakpointObserver {
    fn default() -> Self {
        Self::new(BreakpointTable::DEFAULT)
    }
}

impl Drop for BreakpointObserver {
    fn drop(&mut self) {
        self.deactivate();
    }
}

impl fmt::Debug for BreakpointObserver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BreakpointObserver")
            .field("phase", &self.phase)
            .field("table", &self.publisher.table)
            .field("state", &self.state())
            .finish()
    }
}
