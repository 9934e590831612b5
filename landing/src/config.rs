//! Page configuration read from `index.html`.
//!
//! Breakpoint overrides live in a meta tag so the page can be retuned
//! without rebuilding the wasm bundle:
//!
//! ```html
//! <meta name="lumen-breakpoints" content='{"md": 800}'>
//! ```

use lumen_breakpoints::BreakpointOverrides;
use tracing::{debug, warn};

/// `name` of the meta tag holding breakpoint overrides.
pub const BREAKPOINTS_META: &str = "lumen-breakpoints";

/// Overrides from the page, or none when the tag is missing or malformed.
pub fn breakpoint_overrides() -> BreakpointOverrides {
    parse_overrides(read_meta(BREAKPOINTS_META).as_deref())
}

fn read_meta(name: &str) -> Option<String> {
    let document = web_sys::window()?.document()?;
    document
        .query_selector(&format!("meta[name=\"{name}\"]"))
        .ok()
        .flatten()?
        .get_attribute("content")
}

/// Parse meta content; a bad value is logged and ignored so the page
/// still renders with default breakpoints.
pub fn parse_overrides(content: Option<&str>) -> BreakpointOverrides {
    let Some(text) = content.map(str::trim).filter(|text| !text.is_empty()) else {
        return BreakpointOverrides::new();
    };
    match BreakpointOverrides::from_json(text) {
        Ok(overrides) => {
            debug!(?overrides, "breakpoint overrides loaded");
            overrides
        }
        Err(err) => {
            warn!(%err, "ignoring breakpoint overrides");
            BreakpointOverrides::new()
        }
    }
}
