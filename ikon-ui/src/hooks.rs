//! Hooks bridging browser state into signals

use crate::wasm_utils::{viewport_size, WindowEventListener};
use dioxus::prelude::*;
use ikon_common::WindowState;

/// Viewport size, kept current by a window `resize` listener.
///
/// Every resize event overwrites the stored size. Derived values
/// (breakpoint, device class, orientation) are computed by `WindowState` on read.
pub fn use_window_state() -> Signal<WindowState> {
    let mut state = use_signal(WindowState::default);
    let mut listener: Signal<Option<WindowEventListener>> = use_signal(|| None);

    // Attach after mount: the JS bridge may not be ready during component init
    use_effect(move || {
        if listener.peek().is_some() {
            return;
        }
        let Some(window) = web_sys_x::window() else {
            return;
        };

        if let Some((width, height)) = viewport_size() {
            state.write().resize(width, height);
        }

        listener.set(Some(WindowEventListener::new(
            window,
            "resize",
            move |_: wasm_bindgen_x::JsValue| {
                if let Some((width, height)) = viewport_size() {
                    state.write().resize(width, height);
                }
            },
        )));
    });

    state
}
