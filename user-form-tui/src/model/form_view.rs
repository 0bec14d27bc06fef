//! Form page view state
//!
//! Everything here is local to the open form page: which input has focus and
//! which fields the user has already left. The record itself and its
//! validation messages live in the store.

use std::collections::BTreeSet;
use std::sync::Arc;

use user_form_core::{FormField, UserApi, UserFormPage};

/// What the cursor is on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormFocus {
    Field(FormField),
    SubmitButton,
}

impl FormFocus {
    const ORDER: [Self; 7] = [
        Self::Field(FormField::Name),
        Self::Field(FormField::Phone),
        Self::Field(FormField::Email),
        Self::Field(FormField::Marks1),
        Self::Field(FormField::Marks2),
        Self::Field(FormField::Marks3),
        Self::SubmitButton,
    ];

    fn index(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ORDER[(self.index() + 1) % Self::ORDER.len()]
    }

    pub fn previous(self) -> Self {
        let len = Self::ORDER.len();
        Self::ORDER[(self.index() + len - 1) % len]
    }

    pub fn field(self) -> Option<FormField> {
        match self {
            Self::Field(field) => Some(field),
            Self::SubmitButton => None,
        }
    }
}

/// State of the open form page
pub struct FormView {
    pub page: UserFormPage,
    pub focus: FormFocus,
    touched: BTreeSet<FormField>,
}

impl FormView {
    pub fn new(route_id: Option<String>, api: Arc<dyn UserApi>) -> Self {
        Self {
            page: UserFormPage::new(route_id, api),
            focus: FormFocus::Field(FormField::Name),
            touched: BTreeSet::new(),
        }
    }

    /// Mark the focused field as interacted with
    pub fn blur(&mut self) {
        if let Some(field) = self.focus.field() {
            self.touched.insert(field);
        }
    }

    pub fn touch_all(&mut self) {
        self.touched.extend(FormField::ALL);
    }

    pub fn is_touched(&self, field: FormField) -> bool {
        self.touched.contains(&field)
    }

    pub fn focus_next(&mut self) {
        self.blur();
        self.focus = self.focus.next();
    }

    pub fn focus_previous(&mut self) {
        self.blur();
        self.focus = self.focus.previous();
    }
}
