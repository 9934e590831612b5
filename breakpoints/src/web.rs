//! Browser window surface.
//!
//! Reads `innerWidth`/`innerHeight` and listens for the window `resize`
//! event. Outside `wasm32` there is no window, so [`WindowSurface::current`]
//! returns `None` and callers fall back to headless breakpoints.

use tracing::warn;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

use crate::classification::Viewport;
use crate::surface::{ResizeListener, Subscription, Surface};

/// The global `window`, observed through its `resize` event.
#[derive(Clone, Debug)]
pub struct WindowSurface {
    window: web_sys::Window,
}

impl WindowSurface {
    /// The current browser window, if there is one.
    pub fn current() -> Option<Self> {
        if !cfg!(target_arch = "wasm32") {
            return None;
        }
        web_sys::window().map(Self::new)
    }

    /// Observe a specific window.
    pub fn new(window: web_sys::Window) -> Self {
        Self { window }
    }
}

/// Round a CSS length to whole pixels; negative and NaN become 0.
fn to_px(value: f64) -> u32 {
    value.max(0.0).round() as u32
}

fn measure(window: &web_sys::Window) -> Option<Viewport> {
    let width = window.inner_width().ok()?.as_f64()?;
    let height = window.inner_height().ok()?.as_f64()?;
    Some(Viewport::new(to_px(width), to_px(height)))
}

impl Surface for WindowSurface {
    fn viewport(&self) -> Option<Viewport> {
        measure(&self.window)
    }

    fn subscribe(&self, mut listener: ResizeListener) -> Subscription {
        let window = self.window.clone();
        let closure = Closure::wrap(Box::new(move || {
            if let Some(viewport) = measure(&window) {
                listener(viewport);
            }
        }) as Box<dyn FnMut()>);

        if let Err(err) = self
            .window
            .add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())
        {
            warn!(?err, "could not listen for window resize");
            return Subscription::detached();
        }

        let target = self.window.clone();
        Subscription::new(move || {
            if let Err(err) = target
                .remove_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())
            {
                warn!(?err, "could not remove window resize listener");
            }
        })
    }
}
