//! Users list page

use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph},
    Frame,
};
use user_form_core::UserRecord;

use crate::model::App;
use crate::view::theme::{colors, Styles};

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let users = app.store.users();

    if users.is_empty() {
        let empty = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled("No users yet", Style::default().fg(c.muted))),
            Line::from(Span::styled(
                "Press Alt+a to create one",
                Style::default().fg(c.muted),
            )),
        ])
        .alignment(Alignment::Center);
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = users.iter().map(user_row).collect();
    let list = List::new(items)
        .highlight_style(Styles::selected())
        .highlight_symbol("▶ ");

    let mut state = ListState::default();
    state.select(Some(app.list.selected));
    frame.render_stateful_widget(list, area, &mut state);
}

fn user_row(user: &UserRecord) -> ListItem<'static> {
    let c = colors();
    let id = user.id.as_ref().map(ToString::to_string).unwrap_or_default();

    ListItem::new(Line::from(vec![
        Span::styled(format!("{id:>6}  "), Style::default().fg(c.muted)),
        Span::styled(format!("{:<24}", user.name), Style::default().fg(c.fg)),
        Span::styled(format!("{:<14}", user.phone), Style::default().fg(c.fg)),
        Span::styled(format!("{:<28}", user.email), Style::default().fg(c.fg)),
        Span::styled(
            format!("{} / {} / {}", user.marks1, user.marks2, user.marks3),
            Style::default().fg(c.muted),
        ),
    ]))
}
