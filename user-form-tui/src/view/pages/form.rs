//! Create/edit form page

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use user_form_core::FormField;

use crate::model::{App, FormFocus, FormView};
use crate::view::theme::{colors, Styles};

/// Rows per input: bordered box (3) + message line (1)
const FIELD_HEIGHT: u16 = 4;

pub fn render(app: &App, view: &FormView, frame: &mut Frame, area: Rect) {
    let mut constraints: Vec<Constraint> = FormField::ALL
        .iter()
        .map(|_| Constraint::Length(FIELD_HEIGHT))
        .collect();
    constraints.push(Constraint::Length(3));
    constraints.push(Constraint::Min(0));

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for (i, field) in FormField::ALL.into_iter().enumerate() {
        render_field(app, view, field, frame, rows[i]);
    }

    render_submit_button(app, view, frame, rows[FormField::ALL.len()]);
}

fn render_field(app: &App, view: &FormView, field: FormField, frame: &mut Frame, area: Rect) {
    let form = app.store.form();
    let focused = view.focus == FormFocus::Field(field);
    let message = form.error(field);
    let show_error = view.is_touched(field) && !message.is_empty();

    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(1)])
        .split(area);

    let mut spans = vec![Span::styled(
        form.user.field(field).to_string(),
        Styles::input(focused),
    )];
    if focused {
        spans.push(Span::styled(
            "█",
            Style::default().add_modifier(Modifier::SLOW_BLINK),
        ));
    }

    let input = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .title(Span::styled(format!(" {} ", field.label()), Styles::label()))
            .borders(Borders::ALL)
            .border_style(Styles::input_border(focused, show_error)),
    );
    frame.render_widget(input, parts[0]);

    if show_error {
        let error = Paragraph::new(format!(" {message}")).style(Styles::error());
        frame.render_widget(error, parts[1]);
    }
}

fn render_submit_button(app: &App, view: &FormView, frame: &mut Frame, area: Rect) {
    let c = colors();
    let focused = view.focus == FormFocus::SubmitButton;
    let submitting = app.store.form().submitting;
    // Validation does not block submission; the border only warns.
    let invalid = app.store.form().has_errors();

    let (label, style) = if submitting {
        (" Submitting... ", Style::default().fg(c.muted))
    } else if focused {
        (" Submit ", Styles::selected())
    } else {
        (" Submit ", Style::default().fg(c.fg))
    };

    let button_area = Rect {
        width: area.width.min(20),
        ..area
    };
    let button = Paragraph::new(label)
        .style(style)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Styles::input_border(focused, invalid)),
        );
    frame.render_widget(button, button_area);
}
