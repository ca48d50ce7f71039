//! Store types for UI state management
//!
//! Session-only state. Persisted preferences are held by the app in a
//! `Signal<ikon_common::Preferences>` and passed to views as plain values.

pub mod browser;

pub use browser::*;
