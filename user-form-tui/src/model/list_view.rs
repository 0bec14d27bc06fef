//! Users list page state

use user_form_core::UserRecord;

/// Selection on the list page; the records themselves live in the store
#[derive(Debug, Default)]
pub struct ListView {
    /// Index of the highlighted row
    pub selected: usize,
}

impl ListView {
    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_next(&mut self, len: usize) {
        if len > 0 && self.selected < len - 1 {
            self.selected += 1;
        }
    }

    /// Keep the selection inside a list of `len` rows
    pub fn clamp(&mut self, len: usize) {
        self.selected = self.selected.min(len.saturating_sub(1));
    }

    pub fn selected_user<'a>(&self, users: &'a [UserRecord]) -> Option<&'a UserRecord> {
        users.get(self.selected)
    }
}
