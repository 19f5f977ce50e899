//! Results list UI rendering.

use super::ResultsState;
use crate::api::ArtworkSummary;
use crate::shared::ThemeColors;
use crate::util::truncate_to_width;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

/// Draw the results screen.
pub fn draw_results(f: &mut Frame<'_>, state: &mut ResultsState, area: Rect, colors: &ThemeColors) {
    let block = Block::default()
        .title(" Search Results ")
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

    if state.items.is_empty() {
        let paragraph = Paragraph::new(Line::from(Span::styled(
            "No Results Found.",
            Style::default().fg(colors.text),
        )))
        .block(block);
        f.render_widget(paragraph, area);
        return;
    }

    // Borders take two rows.
    let viewport_height = area.height.saturating_sub(2) as usize;
    state.adjust_scroll(viewport_height);

    let row_width = area.width.saturating_sub(2) as usize;
    let cursor = state.cursor();

    let items: Vec<ListItem<'_>> = state
        .items
        .iter()
        .enumerate()
        .skip(state.scroll())
        .take(viewport_height)
        .map(|(idx, artwork)| {
            let style = if idx == cursor {
                Style::default()
                    .fg(colors.cursor_fg)
                    .bg(colors.cursor_bg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(colors.text)
            };

            ListItem::new(Line::from(result_row_text(artwork, row_width))).style(style)
        })
        .collect();

    let list = List::new(items).block(block);
    f.render_widget(list, area);
}

fn result_row_text(artwork: &ArtworkSummary, width: usize) -> String {
    let mut text = artwork.title.clone();

    if !artwork.artist_display.is_empty() {
        // The attribution line can span several lines; only the first is useful here.
        let artist = artwork.artist_display.lines().next().unwrap_or_default();
        text.push_str(&format!(" — {}", artist));
    }

    if let Some(year) = artwork.date_start {
        text.push_str(&format!(" ({})", year));
    }

    if let Some(ref classification) = artwork.classification_title {
        text.push_str(&format!(" [{}]", classification));
    }

    truncate_to_width(&text, width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_text_combines_present_fields() {
        let artwork = ArtworkSummary {
            id: 1,
            title: "The Bedroom".to_string(),
            artist_display: "Vincent van Gogh\nDutch, 1853-1890".to_string(),
            image_id: None,
            date_start: Some(1889),
            classification_title: Some("Painting".to_string()),
        };

        assert_eq!(
            result_row_text(&artwork, 200),
            "The Bedroom — Vincent van Gogh (1889) [Painting]"
        );
    }

    #[test]
    fn row_text_skips_absent_fields() {
        let artwork = ArtworkSummary {
            id: 1,
            title: "Untitled".to_string(),
            artist_display: String::new(),
            image_id: None,
            date_start: None,
            classification_title: None,
        };

        assert_eq!(result_row_text(&artwork, 200), "Untitled");
    }

    #[test]
    fn row_text_is_truncated_to_the_viewport() {
        let artwork = ArtworkSummary {
            id: 1,
            title: "A very long artwork title that cannot fit".to_string(),
            artist_display: String::new(),
            image_id: None,
            date_start: None,
            classification_title: None,
        };

        let text = result_row_text(&artwork, 10);
        assert!(text.ends_with('…'));
    }
}
