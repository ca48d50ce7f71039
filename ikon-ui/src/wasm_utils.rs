//! WASM utilities for browser interop
//!
//! A JavaScript listener attached through a `Closure` must outlive the
//! listener registration. [`WindowEventListener`] owns the closure and removes
//! the listener in `Drop`, so the listener lives exactly as long as the value.
//!
//! ```ignore
//! let listener = WindowEventListener::new(window, "resize", callback);
//! drop(listener); // listener removed
//! ```
//!
//! With Dioxus, keep it in a `Signal<Option<WindowEventListener>>` and set it
//! to `None` to detach.

use wasm_bindgen_x::prelude::*;

/// A window event listener that removes itself when dropped.
pub struct WindowEventListener {
    window: web_sys_x::Window,
    event_name: &'static str,
    callback: Closure<dyn FnMut(wasm_bindgen_x::JsValue)>,
}

impl WindowEventListener {
    /// Attaches `callback` to `event_name` on the window.
    pub fn new(
        window: web_sys_x::Window,
        event_name: &'static str,
        callback: impl FnMut(wasm_bindgen_x::JsValue) + 'static,
    ) -> Self {
        let callback: Closure<dyn FnMut(wasm_bindgen_x::JsValue)> =
            Closure::wrap(Box::new(callback));

        if let Err(e) =
            window.add_event_listener_with_callback(event_name, callback.as_ref().unchecked_ref())
        {
            tracing::warn!("Failed to attach {} listener: {:?}", event_name, e);
        }

        Self {
            window,
            event_name,
            callback,
        }
    }
}

impl Drop for WindowEventListener {
    fn drop(&mut self) {
        let _ = self.window.remove_event_listener_with_callback(
            self.event_name,
            self.callback.as_ref().unchecked_ref(),
        );
    }
}

/// Current `innerWidth` / `innerHeight`, if a window is available.
pub fn viewport_size() -> Option<(f64, f64)> {
    let window = web_sys_x::window()?;
    let width = window.inner_width().ok()?.as_f64()?;
    let height = window.inner_height().ok()?.as_f64()?;
    Some((width, height))
}
