//!
//! src/update/mod.rs
//! Update layer: the only place that changes the model
//!
//!     pub fn update(app: &mut App, backend: &Backend, msg: AppMessage)
//!
//! Sub-messages go to `form.rs` and `list.rs`. Backend calls are awaited
//! here through `Backend::block_on`; their results are written into the
//! store before control returns to the main loop, which then redraws.
//!

mod form;
mod list;

use crate::backend::Backend;
use crate::message::AppMessage;
use crate::model::{App, FormView, Route};

/// Handle one message
pub fn update(app: &mut App, backend: &Backend, msg: AppMessage) {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
        }

        AppMessage::Navigate(path) => {
            navigate(app, backend, &path);
        }

        AppMessage::Form(form_msg) => {
            form::update(app, backend, form_msg);
        }

        AppMessage::List(list_msg) => {
            list::update(app, backend, list_msg);
        }

        // Reloading a form route would discard unsaved edits
        AppMessage::Refresh => {
            if !app.route.is_form() {
                app.clear_status();
                list::load(app, backend);
            }
        }

        AppMessage::ClearStatus => {
            app.clear_status();
        }

        AppMessage::Noop => {}
    }
}

/// Switch routes and run the new page's mount logic
pub fn navigate(app: &mut App, backend: &Backend, path: &str) {
    let route = Route::parse(path);
    log::debug!("Navigate {path} -> {route:?}");
    app.clear_status();

    if route.is_form() {
        // A new form page never inherits the previous page's record.
        app.store.reset_form();
        let view = FormView::new(route.id_param().map(str::to_string), backend.api());
        backend.block_on(view.page.mount(&mut app.store));
        app.form = Some(view);
    } else {
        app.form = None;
        list::load(app, backend);
    }

    app.route = route;
}
