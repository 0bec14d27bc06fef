//! Event handler

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, FormMessage, ListMessage};
use crate::model::App;

/// Poll for an event
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Translate an event into a message
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app),
        _ => AppMessage::Noop,
    }
}

fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // Press only; Windows terminals also report Release
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    if DefaultKeymap::FORCE_QUIT.matches(&key) || DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    if DefaultKeymap::REFRESH.matches(&key) {
        return AppMessage::Refresh;
    }

    if app.route.is_form() {
        handle_form_keys(key)
    } else {
        handle_list_keys(key, app)
    }
}

fn handle_form_keys(key: KeyEvent) -> AppMessage {
    let msg = if DefaultKeymap::BACK.matches(&key) {
        FormMessage::Cancel
    } else if DefaultKeymap::SUBMIT.matches(&key) {
        FormMessage::Submit
    } else if DefaultKeymap::FIELD_PREV.matches(&key) || key.code == KeyCode::BackTab || key.code == KeyCode::Up {
        FormMessage::PrevField
    } else if DefaultKeymap::FIELD_NEXT.matches(&key) || key.code == KeyCode::Down {
        FormMessage::NextField
    } else {
        match key.code {
            KeyCode::Enter => FormMessage::Confirm,
            KeyCode::Backspace => FormMessage::Backspace,
            KeyCode::Char(c)
                if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT =>
            {
                FormMessage::Input(c)
            }
            _ => return AppMessage::Noop,
        }
    };
    AppMessage::Form(msg)
}

fn handle_list_keys(key: KeyEvent, app: &App) -> AppMessage {
    let msg = if DefaultKeymap::NAV_UP.matches(&key) {
        ListMessage::SelectPrevious
    } else if DefaultKeymap::NAV_DOWN.matches(&key) {
        ListMessage::SelectNext
    } else if DefaultKeymap::NAV_CONFIRM.matches(&key) {
        ListMessage::Open
    } else if DefaultKeymap::ACTION_ADD.matches(&key) {
        ListMessage::Create
    } else if DefaultKeymap::ACTION_DELETE.matches(&key) {
        ListMessage::Delete
    } else if DefaultKeymap::BACK.matches(&key) {
        // First Esc dismisses the status message
        return if app.status_message.is_some() {
            AppMessage::ClearStatus
        } else {
            AppMessage::Quit
        };
    } else {
        return AppMessage::Noop;
    };
    AppMessage::List(msg)
}
