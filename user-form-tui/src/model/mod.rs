//!
//! src/model/mod.rs
//! Model layer: application state
//!
//! The model is the single source of truth. It holds plain data only; every
//! change goes through the update layer.
//!
//!     App {
//!         should_quit,        // exit flag
//!         route,              // List | Create | Edit { id }
//!         store,              // UserStore: users list + form state
//!         list,               // list page selection
//!         form,               // open form page (focus, touched fields)
//!         status_message,     // status bar text
//!     }
//!
//! `Route` says where we are, `store` says what we know. The form page's
//! focus and touched set are view-local and are dropped when the route
//! changes. Entering a form route also resets the store's form record.
//!

mod app;
mod form_view;
mod list_view;
mod route;

pub use app::App;
pub use form_view::{FormFocus, FormView};
pub use list_view::ListView;
pub use route::Route;
