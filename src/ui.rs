//! User interface rendering.

use crate::app::{App, Screen};
use crate::detail;
use crate::results;
use crate::search_form;
use crate::shared::{draw_keymap, draw_status, ThemeColors};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Draw the UI.
pub fn draw(f: &mut Frame<'_>, app: &mut App) {
    let colors = ThemeColors::from_theme(&app.theme);

    // Main layout with status bar and key map bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(f.area());

    match app.screen {
        Screen::Search => search_form::ui::draw_form(f, &app.form, chunks[0], &colors),
        Screen::Results => results::ui::draw_results(f, &mut app.results, chunks[0], &colors),
        Screen::Detail => match app.detail {
            Some(ref state) => {
                detail::ui::draw_detail(f, state, &app.client, chunks[0], &colors);
            },
            None => {
                let paragraph = Paragraph::new(Line::from(Span::styled(
                    "No Details found.",
                    Style::default().fg(colors.error),
                )));
                f.render_widget(paragraph, chunks[0]);
            },
        },
    }

    draw_status(f, chunks[1], &app.status, &colors);
    draw_keymap(f, chunks[2], app, &colors);
}
