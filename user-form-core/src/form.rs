//! User form page
//!
//! Framework-independent behaviour of the create/edit form: what happens on
//! mount and on submit, and which title to show. The route parameter and the
//! navigation callback are injected; the store is passed in by the caller,
//! which owns it.

use std::sync::Arc;

use crate::api::UserApi;
use crate::store::UserStore;

/// Path of the users list
pub const LIST_ROUTE: &str = "/";

pub const EDIT_TITLE: &str = "Edit User";
pub const CREATE_TITLE: &str = "Create User";

/// Receives navigation requests from the page
pub trait Navigator {
    fn navigate(&mut self, path: &str);
}

impl<F> Navigator for F
where
    F: FnMut(&str),
{
    fn navigate(&mut self, path: &str) {
        self(path);
    }
}

/// How a submit attempt ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Record created on the backend and appended to the list
    Created,
    /// Record patched on the backend and replaced in the list
    Updated,
    /// Request failed; the page stays where it is
    Failed,
    /// Another submit was already in flight
    Ignored,
}

/// Create/edit page for a single user
pub struct UserFormPage {
    route_id: Option<String>,
    api: Arc<dyn UserApi>,
}

impl UserFormPage {
    /// `route_id` is the `id` segment of the page route, if any.
    pub fn new(route_id: Option<String>, api: Arc<dyn UserApi>) -> Self {
        Self { route_id, api }
    }

    pub fn is_edit(&self) -> bool {
        self.route_id.is_some()
    }

    pub fn title(&self) -> &'static str {
        if self.is_edit() {
            EDIT_TITLE
        } else {
            CREATE_TITLE
        }
    }

    /// Load the record named by the route (if any) into the form.
    ///
    /// Fetched keys overwrite the form's values; keys the backend leaves out
    /// keep theirs. A failed fetch is logged and leaves the form as it was.
    pub async fn mount(&self, store: &mut UserStore) {
        if let Some(id) = self.route_id.as_deref() {
            match self.api.get_user(id).await {
                Ok(patch) => {
                    log::info!("Fetched user: {patch:?}");
                    store.set_form_user(patch);
                }
                Err(e) => log::error!("Error fetching user data: {e}"),
            }
        }
        store.set_submitting(false);
    }

    /// Send the current form values to the backend.
    ///
    /// Validation messages do not block submission. On success the list is
    /// updated and `navigator` is sent to [`LIST_ROUTE`].
    pub async fn submit(&self, store: &mut UserStore, navigator: &mut dyn Navigator) -> SubmitOutcome {
        if store.form().submitting {
            log::debug!("Submit ignored: a request is already in flight");
            return SubmitOutcome::Ignored;
        }

        let values = store.form().user.clone();
        store.set_submitting(true);

        let outcome = match values.id.clone() {
            Some(id) => match self.api.update_user(&id, &values).await {
                Ok(()) => {
                    store.update_user(values);
                    SubmitOutcome::Updated
                }
                Err(e) => {
                    log::error!("Error submitting user: {e}");
                    SubmitOutcome::Failed
                }
            },
            None => match self.api.create_user(&values).await {
                Ok(created) => {
                    store.add_user(created);
                    SubmitOutcome::Created
                }
                Err(e) => {
                    log::error!("Error submitting user: {e}");
                    SubmitOutcome::Failed
                }
            },
        };

        store.set_submitting(false);
        if outcome != SubmitOutcome::Failed {
            navigator.navigate(LIST_ROUTE);
        }
        outcome
    }
}
