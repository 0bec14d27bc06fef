//! Main application message

use super::{FormMessage, ListMessage};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMessage {
    /// Exit the application
    Quit,

    /// Go to a route path (`/`, `/users/new`, `/users/{id}`)
    Navigate(String),

    /// Form page input
    Form(FormMessage),

    /// List page input
    List(ListMessage),

    /// Reload the current page from the backend
    Refresh,

    ClearStatus,

    /// No-op (ignored events)
    Noop,
}
