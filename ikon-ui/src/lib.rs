//! ikon-ui - View components and UI state for the icon browser
//!
//! Views are pure: they take state and callbacks, and never touch storage.
//! Browser adapters (localStorage, window resize) live in `storage` and
//! `wasm_utils`.

pub mod components;
pub mod display_types;
pub mod hooks;
pub mod storage;
pub mod stores;
pub mod wasm_utils;

pub use components::*;
pub use display_types::*;
