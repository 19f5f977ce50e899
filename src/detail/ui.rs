//! Detail view UI rendering.

use super::{
    artist_text, description_text, dimensions_text, medium_text, title_text, year_text, DetailState,
};
use crate::api::ApiClient;
use crate::shared::ThemeColors;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw the detail screen.
pub fn draw_detail(
    f: &mut Frame<'_>,
    state: &DetailState,
    client: &ApiClient,
    area: Rect,
    colors: &ThemeColors,
) {
    let block = Block::default()
        .title(" Artwork Details ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border))
        .style(Style::default().bg(colors.bg));

    if state.loading {
        let paragraph = Paragraph::new(Line::from(Span::styled(
            "Loading...",
            Style::default().fg(colors.label),
        )))
        .block(block);
        f.render_widget(paragraph, area);
        return;
    }

    let Some(ref record) = state.detail else {
        let paragraph = Paragraph::new(Line::from(Span::styled(
            "No Details found.",
            Style::default().fg(colors.error),
        )))
        .block(block);
        f.render_widget(paragraph, area);
        return;
    };

    let mut lines = vec![
        Line::from(Span::styled(
            title_text(record),
            Style::default()
                .fg(colors.heading)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            artist_text(record),
            Style::default().fg(colors.label),
        )),
        Line::from(Span::styled(
            "─".repeat(50),
            Style::default().fg(colors.border),
        )),
    ];

    // The image block is omitted entirely without an image id.
    if let Some(image_id) = record.image_id.as_deref() {
        lines.push(Line::from(vec![
            Span::styled("Image: ", Style::default().fg(colors.label)),
            Span::styled(
                client.detail_image_url(image_id),
                Style::default().fg(colors.value),
            ),
        ]));
        lines.push(Line::from(""));
    }

    for text in [
        year_text(record),
        description_text(record),
        medium_text(record),
        dimensions_text(record),
    ] {
        lines.push(Line::from(Span::styled(
            text,
            Style::default().fg(colors.text),
        )));
        lines.push(Line::from(""));
    }

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true })
        .scroll((state.scroll, 0));

    f.render_widget(paragraph, area);
}
