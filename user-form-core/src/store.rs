//! User store slice
//!
//! Holds the list of known users plus the state of the one form currently
//! open. Every mutation goes through a named operation; nothing here does I/O.

use std::collections::BTreeMap;

use crate::types::{FormField, UserId, UserPatch, UserRecord};
use crate::validation::validate_field;

/// State of the user form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    /// Record under edit
    pub user: UserRecord,
    /// Field → current message; empty string means no error
    pub errors: BTreeMap<FormField, String>,
    /// A create/update request is in flight
    pub submitting: bool,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            user: UserRecord::default(),
            errors: FormField::ALL
                .into_iter()
                .map(|field| (field, String::new()))
                .collect(),
            submitting: false,
        }
    }
}

impl FormState {
    /// Message for `field`, empty when the field is valid or was never checked
    pub fn error(&self, field: FormField) -> &str {
        self.errors.get(&field).map_or("", String::as_str)
    }

    pub fn has_errors(&self) -> bool {
        self.errors.values().any(|msg| !msg.is_empty())
    }
}

/// Store operations, for callers that prefer dispatching values
#[derive(Debug, Clone)]
pub enum UserAction {
    SetUsers(Vec<UserRecord>),
    AddUser(UserRecord),
    UpdateUser(UserRecord),
    DeleteUser(UserId),
    SetFormUser(UserPatch),
    SetSubmitting(bool),
    ValidateField { field: FormField, value: String },
    ResetForm,
}

/// Users slice of the application state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserStore {
    users: Vec<UserRecord>,
    form: FormState,
}

impl UserStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn users(&self) -> &[UserRecord] {
        &self.users
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn find_user(&self, id: &UserId) -> Option<&UserRecord> {
        self.users.iter().find(|u| u.id.as_ref() == Some(id))
    }

    /// Apply one action
    pub fn dispatch(&mut self, action: UserAction) {
        match action {
            UserAction::SetUsers(users) => self.set_users(users),
            UserAction::AddUser(user) => self.add_user(user),
            UserAction::UpdateUser(user) => self.update_user(user),
            UserAction::DeleteUser(id) => self.delete_user(&id),
            UserAction::SetFormUser(patch) => self.set_form_user(patch),
            UserAction::SetSubmitting(submitting) => self.set_submitting(submitting),
            UserAction::ValidateField { field, value } => self.validate_field(field, &value),
            UserAction::ResetForm => self.reset_form(),
        }
    }

    /// Replace the list wholesale
    pub fn set_users(&mut self, users: Vec<UserRecord>) {
        self.users = users;
    }

    pub fn add_user(&mut self, user: UserRecord) {
        self.users.push(user);
    }

    /// Replace the first entry with the same id; no-op when there is none.
    pub fn update_user(&mut self, user: UserRecord) {
        let Some(id) = user.id.as_ref() else {
            return;
        };
        if let Some(slot) = self.users.iter_mut().find(|u| u.id.as_ref() == Some(id)) {
            *slot = user;
        }
    }

    /// Remove every entry carrying `id`
    pub fn delete_user(&mut self, id: &UserId) {
        self.users.retain(|u| u.id.as_ref() != Some(id));
    }

    /// Merge `patch` into the form's record
    pub fn set_form_user(&mut self, patch: UserPatch) {
        log::debug!("Setting user for form: {patch:?}");
        self.form.user.apply(patch);
    }

    pub fn set_submitting(&mut self, submitting: bool) {
        self.form.submitting = submitting;
    }

    /// Run the rule for `field` and store the resulting message
    pub fn validate_field(&mut self, field: FormField, value: &str) {
        let message = validate_field(field, value);
        self.form.errors.insert(field, message);
    }

    /// Blank record, no messages, not submitting
    pub fn reset_form(&mut self) {
        self.form = FormState::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: u64, name: &str) -> UserRecord {
        UserRecord {
            id: Some(UserId::Number(id)),
            name: name.to_string(),
            ..UserRecord::default()
        }
    }

    #[test]
    fn new_store_has_blank_form() {
        let store = UserStore::new();
        assert!(store.users().is_empty());
        assert_eq!(store.form().user, UserRecord::default());
        assert_eq!(store.form().errors.len(), FormField::ALL.len());
        assert!(!store.form().has_errors());
        assert!(!store.form().submitting);
    }

    #[test]
    fn add_then_update_replaces_single_entry() {
        let mut store = UserStore::new();
        store.add_user(user(1, "Ann"));
        store.add_user(user(2, "Bo"));

        let changed = UserRecord {
            phone: "5551234567".into(),
            ..user(1, "Annie")
        };
        store.update_user(changed.clone());

        let matching: Vec<_> = store
            .users()
            .iter()
            .filter(|u| u.id == Some(UserId::Number(1)))
            .collect();
        assert_eq!(matching, vec![&changed]);
        assert_eq!(store.users().len(), 2);
    }

    #[test]
    fn update_of_unknown_id_is_noop() {
        let mut store = UserStore::new();
        store.add_user(user(1, "Ann"));
        let before = store.clone();

        store.update_user(user(7, "Ghost"));
        store.update_user(UserRecord::default());

        assert_eq!(store, before);
    }

    #[test]
    fn delete_removes_all_matches_only() {
        let mut store = UserStore::new();
        store.set_users(vec![user(1, "Ann"), user(2, "Bo"), user(1, "Dup")]);

        store.delete_user(&UserId::Number(1));

        assert_eq!(store.users(), &[user(2, "Bo")]);
    }

    #[test]
    fn delete_of_absent_id_leaves_list_unchanged() {
        let mut store = UserStore::new();
        store.set_users(vec![user(1, "Ann"), user(2, "Bo")]);

        store.delete_user(&UserId::Number(9));

        assert_eq!(store.users(), &[user(1, "Ann"), user(2, "Bo")]);
    }

    #[test]
    fn set_form_user_merges_without_discarding() {
        let mut store = UserStore::new();
        store.set_form_user(UserPatch::from(UserRecord {
            email: "a@b.com".into(),
            phone: "5551234567".into(),
            ..user(3, "Ann")
        }));

        store.set_form_user(UserPatch::field(FormField::Name, "X"));

        let form_user = &store.form().user;
        assert_eq!(form_user.name, "X");
        assert_eq!(form_user.email, "a@b.com");
        assert_eq!(form_user.phone, "5551234567");
        assert_eq!(form_user.id, Some(UserId::Number(3)));
    }

    #[test]
    fn validate_field_records_and_clears_message() {
        let mut store = UserStore::new();

        store.validate_field(FormField::Phone, "12345");
        assert!(!store.form().error(FormField::Phone).is_empty());
        assert!(store.form().has_errors());

        store.validate_field(FormField::Phone, "1234567890");
        assert_eq!(store.form().error(FormField::Phone), "");
        assert!(!store.form().has_errors());
    }

    #[test]
    fn reset_form_keeps_users() {
        let mut store = UserStore::new();
        store.add_user(user(1, "Ann"));
        store.set_form_user(UserPatch::from(user(1, "Ann")));
        store.validate_field(FormField::Name, "A1");
        store.set_submitting(true);

        store.reset_form();

        assert_eq!(store.form(), &FormState::default());
        assert_eq!(store.users().len(), 1);
    }

    #[test]
    fn dispatch_routes_to_operations() {
        let mut store = UserStore::new();
        store.dispatch(UserAction::SetUsers(vec![user(1, "Ann")]));
        store.dispatch(UserAction::AddUser(user(2, "Bo")));
        store.dispatch(UserAction::DeleteUser(UserId::Number(1)));
        store.dispatch(UserAction::SetSubmitting(true));
        store.dispatch(UserAction::ValidateField {
            field: FormField::Name,
            value: "Bo2".into(),
        });

        assert_eq!(store.users(), &[user(2, "Bo")]);
        assert!(store.form().submitting);
        assert!(store.form().has_errors());
        assert_eq!(store.find_user(&UserId::Number(2)).map(|u| u.name.as_str()), Some("Bo"));
    }
}
