//! List page update logic

use crate::backend::Backend;
use crate::message::ListMessage;
use crate::model::{App, Route};

/// Handle a list page message
pub fn update(app: &mut App, backend: &Backend, msg: ListMessage) {
    match msg {
        ListMessage::SelectPrevious => app.list.select_previous(),

        ListMessage::SelectNext => app.list.select_next(app.store.users().len()),

        ListMessage::Open => {
            let Some(id) = app
                .list
                .selected_user(app.store.users())
                .and_then(|u| u.id.clone())
            else {
                return;
            };
            let path = Route::Edit { id: id.to_string() }.path();
            super::navigate(app, backend, &path);
        }

        ListMessage::Create => {
            super::navigate(app, backend, &Route::Create.path());
        }

        ListMessage::Delete => delete_selected(app, backend),
    }
}

/// Fetch the list from the backend into the store
pub fn load(app: &mut App, backend: &Backend) {
    let api = backend.api();
    match backend.block_on(api.list_users()) {
        Ok(users) => {
            log::info!("Loaded {} users", users.len());
            app.store.set_users(users);
        }
        Err(e) => {
            log::error!("Error fetching users: {e}");
            if e.is_transport() {
                app.set_status(format!("Failed to load users, backend unreachable: {e}"));
            } else {
                app.set_status(format!("Failed to load users: {e}"));
            }
        }
    }
    app.list.clamp(app.store.users().len());
}

fn delete_selected(app: &mut App, backend: &Backend) {
    let Some(user) = app.list.selected_user(app.store.users()) else {
        return;
    };
    let Some(id) = user.id.clone() else {
        return;
    };
    let name = user.name.clone();

    let api = backend.api();
    match backend.block_on(api.delete_user(&id)) {
        Ok(()) => {
            app.store.delete_user(&id);
            app.list.clamp(app.store.users().len());
            app.set_status(format!("Deleted \"{name}\""));
        }
        Err(e) => {
            log::error!("Error deleting user {id}: {e}");
            app.set_status(format!("Failed to delete \"{name}\": {e}"));
        }
    }
}
