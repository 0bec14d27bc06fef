//!
//! src/view/mod.rs
//! View layer: renders the model, never changes it
//!
//!     ┌ title bar ─────────────────────────┐
//!     │ page (list or form)                │
//!     └ status bar ────────────────────────┘
//!

mod components;
mod layout;
mod pages;
pub mod theme;

pub use layout::render;
