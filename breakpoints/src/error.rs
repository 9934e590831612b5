//! Error type for breakpoint queries and observer lifecycle.

use thiserror::Error;

/// Errors raised by the breakpoint API.
///
/// Resize handling never produces one of these. They only signal misuse:
/// a tier name that does not exist, an observer activated twice, or
/// override text that does not describe a breakpoint table.
#[derive(Debug, Error)]
pub enum BreakpointError {
    /// A tier name outside `xs`, `sm`, `md`, `lg`, `xl`, `2xl`.
    #[error("unknown breakpoint tier: {0:?}")]
    InvalidTier(String),
    /// `activate` called on an observer that is already observing.
    #[error("breakpoint observer is already observing a surface")]
    AlreadyObserving,
    /// `activate` called on an observer that has been torn down.
    #[error("breakpoint observer was torn down; create a new one to observe again")]
    TornDown,
    /// Override configuration could not be parsed.
    #[error("invalid breakpoint overrides: {0}")]
    InvalidOverrides(#[from] serde_json::Error),
}
