//! Search form UI rendering.

use super::{FormRow, SearchFormState};
use crate::filters::Classification;
use crate::shared::{centered_rect, ThemeColors};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
    Frame,
};

/// Draw the search form.
pub fn draw_form(f: &mut Frame<'_>, state: &SearchFormState, area: Rect, colors: &ThemeColors) {
    let mut lines = vec![
        Line::from(Span::styled(
            "Welcome to Museo!",
            Style::default()
                .fg(colors.heading)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    let rows = state.rows();
    let cursor = state.cursor();

    for (idx, row) in rows.iter().enumerate() {
        let focused = idx == cursor;
        lines.push(form_row_line(state, *row, focused, colors));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Toggle a filter group to include it in the search.",
        Style::default().fg(colors.border),
    )));

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(" Museo ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(colors.border))
            .style(Style::default().bg(colors.bg)),
    );

    f.render_widget(paragraph, area);

    if let Some(ref picker) = state.picker {
        draw_picker(f, picker.cursor, area, colors);
    }
}

fn form_row_line(
    state: &SearchFormState,
    row: FormRow,
    focused: bool,
    colors: &ThemeColors,
) -> Line<'static> {
    let caret = if focused && state.editing { "▏" } else { "" };

    let text = match row {
        FormRow::Query => {
            // The shake nudges the input sideways for a few ticks.
            let offset = " ".repeat(state.shake_offset() as usize);
            format!("{}Search term: {}{}", offset, state.query, caret)
        },
        FormRow::ArtistToggle => format!("[{}] Artist filter", mark(state.show_artist)),
        FormRow::ArtistInput => format!("    Artist: {}{}", state.artist, caret),
        FormRow::ClassificationToggle => {
            format!("[{}] Classification filter", mark(state.show_classification))
        },
        FormRow::ClassificationPicker => match state.classification {
            Some(classification) => format!("    Classification: {}", classification.label()),
            None => "    Select a classification".to_string(),
        },
        FormRow::DateToggle => format!("[{}] Date range filter", mark(state.show_date_range)),
        FormRow::DateFromInput => format!("    Year from: {}{}", state.date_from, caret),
        FormRow::DateToInput => format!("    Year to: {}{}", state.date_to, caret),
        FormRow::Submit => "[ Search ]".to_string(),
    };

    let style = if row == FormRow::Query && state.shake_active() {
        Style::default()
            .fg(colors.error)
            .add_modifier(Modifier::BOLD)
    } else if focused {
        Style::default()
            .fg(colors.cursor_fg)
            .bg(colors.cursor_bg)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(colors.text)
    };

    Line::from(Span::styled(text, style))
}

fn mark(on: bool) -> &'static str {
    if on {
        "x"
    } else {
        " "
    }
}

fn draw_picker(f: &mut Frame<'_>, cursor: usize, area: Rect, colors: &ThemeColors) {
    let height = Classification::ALL.len() as u16 + 2;
    let popup = centered_rect(40, height, area);

    let items: Vec<ListItem<'_>> = Classification::ALL
        .iter()
        .enumerate()
        .map(|(idx, classification)| {
            let style = if idx == cursor {
                Style::default()
                    .fg(colors.cursor_fg)
                    .bg(colors.cursor_bg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(colors.text)
            };

            ListItem::new(Line::from(classification.label())).style(style)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(" Classification ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(colors.border))
            .style(Style::default().bg(colors.bg)),
    );

    f.render_widget(Clear, popup);
    f.render_widget(list, popup);
}
