//!
//! src/util/mod.rs
//! Util layer: terminal setup and log sink, nothing domain-specific
//!

mod logging;
mod terminal;

pub use logging::{init_logging, LOG_FILTER_ENV};
pub use terminal::{init_terminal, restore_terminal, Term};
