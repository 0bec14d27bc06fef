//! Form page update logic

use user_form_core::{FormField, UserPatch};

use crate::backend::Backend;
use crate::message::FormMessage;
use crate::model::{App, FormFocus};

/// Handle a form page message
pub fn update(app: &mut App, backend: &Backend, msg: FormMessage) {
    let Some(view) = app.form.as_mut() else {
        return;
    };

    match msg {
        FormMessage::NextField => view.focus_next(),

        FormMessage::PrevField => view.focus_previous(),

        FormMessage::Confirm => {
            if view.focus == FormFocus::SubmitButton {
                submit(app, backend);
            } else {
                view.focus_next();
            }
        }

        FormMessage::Submit => submit(app, backend),

        FormMessage::Input(ch) => {
            if let Some(field) = view.focus.field() {
                let mut value = app.store.form().user.field(field).to_string();
                value.push(ch);
                edit_field(app, field, value);
            }
        }

        FormMessage::Backspace => {
            if let Some(field) = view.focus.field() {
                let mut value = app.store.form().user.field(field).to_string();
                value.pop();
                edit_field(app, field, value);
            }
        }

        FormMessage::Cancel => {
            super::navigate(app, backend, user_form_core::form::LIST_ROUTE);
        }
    }
}

/// Write a field value into the store and re-run its rule
fn edit_field(app: &mut App, field: FormField, value: String) {
    app.store.validate_field(field, &value);
    app.store.set_form_user(UserPatch::field(field, value));
}

fn submit(app: &mut App, backend: &Backend) {
    let Some(view) = app.form.as_mut() else {
        return;
    };
    // A submit attempt counts as touching every field.
    view.touch_all();

    let mut target: Option<String> = None;
    let outcome = backend.block_on(
        view.page
            .submit(&mut app.store, &mut |path: &str| target = Some(path.to_string())),
    );
    log::debug!("Submit finished: {outcome:?}");

    if let Some(path) = target {
        super::navigate(app, backend, &path);
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::{ann, setup};
    use super::*;
    use crate::message::AppMessage;
    use crate::model::Route;
    use crate::update::update as app_update;

    fn send(app: &mut App, backend: &Backend, msg: FormMessage) {
        app_update(app, backend, AppMessage::Form(msg));
    }

    #[test]
    fn typing_updates_store_and_validates() {
        let (mut app, backend, _) = setup(Vec::new());
        app_update(&mut app, &backend, AppMessage::Navigate("/users/new".into()));

        send(&mut app, &backend, FormMessage::NextField);
        for ch in "12345".chars() {
            send(&mut app, &backend, FormMessage::Input(ch));
        }

        assert_eq!(app.store.form().user.phone, "12345");
        assert_eq!(
            app.store.form().error(FormField::Phone),
            user_form_core::validation::PHONE_MESSAGE
        );

        for ch in "67890".chars() {
            send(&mut app, &backend, FormMessage::Input(ch));
        }
        assert_eq!(app.store.form().error(FormField::Phone), "");

        send(&mut app, &backend, FormMessage::Backspace);
        assert_eq!(app.store.form().user.phone, "123456789");
    }

    #[test]
    fn leaving_a_field_marks_it_touched() {
        let (mut app, backend, _) = setup(Vec::new());
        app_update(&mut app, &backend, AppMessage::Navigate("/users/new".into()));

        let touched = |app: &App, field| app.form.as_ref().is_some_and(|f| f.is_touched(field));
        assert!(!touched(&app, FormField::Name));

        send(&mut app, &backend, FormMessage::NextField);
        assert!(touched(&app, FormField::Name));
        assert!(!touched(&app, FormField::Phone));

        send(&mut app, &backend, FormMessage::PrevField);
        assert!(touched(&app, FormField::Phone));
    }

    #[test]
    fn edit_submit_patches_and_navigates() {
        let (mut app, backend, api) = setup(vec![ann()]);
        app_update(&mut app, &backend, AppMessage::Navigate("/users/42".into()));

        send(&mut app, &backend, FormMessage::Input('e'));
        send(&mut app, &backend, FormMessage::Submit);

        assert_eq!(app.route, Route::List);
        assert_eq!(
            api.requests(),
            vec![
                "GET /users/42".to_string(),
                "PATCH /users/42".to_string(),
                "GET /users".to_string(),
            ]
        );
    }

    #[test]
    fn failed_submit_stays_on_form() {
        let (mut app, backend, api) = setup(Vec::new());
        app_update(&mut app, &backend, AppMessage::Navigate("/users/new".into()));
        send(&mut app, &backend, FormMessage::Input('A'));
        api.set_fail(true);

        send(&mut app, &backend, FormMessage::Submit);

        assert_eq!(app.route, Route::Create);
        assert_eq!(app.store.form().user.name, "A");
        assert!(!app.store.form().submitting);
        assert!(app.form.as_ref().is_some_and(|f| f.is_touched(FormField::Marks3)));
    }

    #[test]
    fn confirm_on_submit_button_submits() {
        let (mut app, backend, api) = setup(Vec::new());
        app_update(&mut app, &backend, AppMessage::Navigate("/users/new".into()));
        for _ in 0..6 {
            send(&mut app, &backend, FormMessage::Confirm);
        }
        assert_eq!(app.form.as_ref().map(|f| f.focus), Some(FormFocus::SubmitButton));
        assert!(api.requests().is_empty());

        send(&mut app, &backend, FormMessage::Confirm);

        assert_eq!(app.route, Route::List);
        assert_eq!(api.requests().first().map(String::as_str), Some("POST /users"));
    }

    #[test]
    fn create_after_edit_starts_blank() {
        let (mut app, backend, _) = setup(vec![ann()]);
        app_update(&mut app, &backend, AppMessage::Navigate("/users/42".into()));
        assert_eq!(app.store.form().user.name, "Ann");

        send(&mut app, &backend, FormMessage::Cancel);
        app_update(&mut app, &backend, AppMessage::Navigate("/users/new".into()));

        assert_eq!(app.store.form().user.id, None);
        assert_eq!(app.store.form().user.name, "");
    }
}
