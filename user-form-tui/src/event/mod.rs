//!
//! src/event/mod.rs
//! Event layer: terminal input → messages
//!
//!     poll_event(timeout)         // wait up to `timeout` for input
//!     handle_event(event, &app)   // translate into an AppMessage
//!
//! Key meaning depends on the current route: on the form page printable
//! characters are typed into the focused field, on the list page they are
//! shortcuts.
//!

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
