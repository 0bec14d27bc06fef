//! Main layout

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::model::{App, Route};

use super::components;
use super::pages;
use super::theme::{colors, Styles};

pub fn render(app: &App, frame: &mut Frame) {
    let size = frame.area();

    // Title bar + page + status bar
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(size);

    render_title_bar(frame, main_layout[0]);
    render_page(app, frame, main_layout[1]);
    components::statusbar::render(app, frame, main_layout[2]);
}

fn render_title_bar(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new(concat!(" User Form v", env!("CARGO_PKG_VERSION")))
        .style(Styles::title_bar());
    frame.render_widget(title, area);
}

fn render_page(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();

    let page_title = match (&app.route, app.form.as_ref()) {
        (Route::List, _) | (_, None) => "Users",
        (_, Some(form)) => form.page.title(),
    };

    let block = Block::default()
        .title(format!(" {page_title} "))
        .title_style(Style::default().fg(c.fg).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(c.border_focused));

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    match app.form.as_ref() {
        Some(form) if app.route.is_form() => pages::form::render(app, form, frame, inner_area),
        _ => pages::list::render(app, frame, inner_area),
    }
}
