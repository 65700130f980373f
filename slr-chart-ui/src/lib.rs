//! Shared Dioxus components and D3.js bridge for the launch dashboard.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for the D3.js pie and scatter renderers via `js_sys::eval()`
//! - `state`: Reactive AppState with Dioxus Signals
//! - `components`: RSX widgets (site selector, payload range slider, chart containers)

pub mod js_bridge;
pub mod state;
pub mod components;
