//!
//! src/message/mod.rs
//! Message layer: bridge between Event and Update
//!
//! Raw terminal events are translated into messages by `event/handler.rs`;
//! `update/mod.rs` consumes them and changes the model.
//!
//!     AppMessage
//!         ├── Quit, Navigate(path), Refresh, ClearStatus, Noop
//!         ├── Form(FormMessage)   // input on the form page
//!         └── List(ListMessage)   // input on the list page
//!

mod app;
mod form;
mod list;

pub use app::AppMessage;
pub use form::FormMessage;
pub use list::ListMessage;
