//! Shared view components

pub mod statusbar;
