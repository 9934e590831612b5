//! # lumen-breakpoints
//!
//! Responsive breakpoint observer for the Lumen landing page.
//!
//! The crate classifies a viewport width into one of six named tiers
//! (`xs`, `sm`, `md`, `lg`, `xl`, `2xl`) and keeps that classification
//! current while the viewport is resized. The core is DOM-free: anything
//! that can report its size and notify about resizes implements
//! [`Surface`], and the browser window is just one such surface.
//!
//! ## Quick Start
//!
//! ```rust
//! use lumen_breakpoints::{BreakpointObserver, BreakpointTable, ManualSurface, Tier, Viewport};
//!
//! let surface = ManualSurface::new(Viewport::new(800, 600));
//! let mut observer = BreakpointObserver::new(BreakpointTable::DEFAULT);
//! observer.activate(&surface).unwrap();
//!
//! assert_eq!(observer.current_tier(), Tier::Md);
//! assert!(!observer.is_compact());
//!
//! surface.resize(Viewport::new(390, 844));
//! assert_eq!(observer.current_tier(), Tier::Xs);
//! assert!(observer.below("md").unwrap());
//! ```
//!
//! ## Architecture
//!
//! - [`tier`] - Tier names, ordering and [`TierSet`]
//! - [`table`] - Threshold table, the default constant and overrides
//! - [`classification`] - Derived queries for one width
//! - [`surface`] - The [`Surface`] seam and RAII [`Subscription`]
//! - [`observer`] - [`BreakpointObserver`] lifecycle
//! - `web` (feature `web`) - `WindowSurface` over `web_sys::Window`
//! - `hook` (feature `leptos`) - `use_breakpoints()` for Leptos components
//!
//! ---
//!
//! Developed with 💀 by The Lumen Team (c)2025

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod classification;
pub mod error;
pub mod observer;
pub mod surface;
pub mod table;
pub mod tier;

#[cfg(feature = "leptos")]
#[cfg_attr(docsrs, doc(cfg(feature = "leptos")))]
pub mod hook;
#[cfg(feature = "web")]
#[cfg_attr(docsrs, doc(cfg(feature = "web")))]
pub mod web;

pub use classification::{BreakpointState, Classification, Viewport};
pub use error::BreakpointError;
pub use observer::{BreakpointObserver, ObserverPhase};
pub use surface::{HeadlessSurface, ManualSurface, ResizeListener, Subscription, Surface};
pub use table::{BreakpointOverrides, BreakpointTable};
pub use tier::{Tier, TierSet};

#[cfg(feature = "leptos")]
pub use hook::{Breakpoints, provide_breakpoints, use_breakpoints, use_breakpoints_with};
#[cfg(feature = "web")]
pub use web::WindowSurface;
