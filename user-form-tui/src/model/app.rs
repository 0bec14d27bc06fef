//! Main application state

use user_form_core::UserStore;

use super::{FormView, ListView, Route};

/// Application state
pub struct App {
    /// Whether to exit
    pub should_quit: bool,

    /// Current route
    pub route: Route,

    /// Users slice: list and form state
    pub store: UserStore,

    /// List page selection
    pub list: ListView,

    /// Open form page, present on form routes
    pub form: Option<FormView>,

    /// Status bar message
    pub status_message: Option<String>,
}

impl App {
    pub fn new() -> Self {
        Self {
            should_quit: false,
            route: Route::List,
            store: UserStore::new(),
            list: ListView::default(),
            form: None,
            status_message: None,
        }
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
