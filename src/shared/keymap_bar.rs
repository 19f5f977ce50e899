//! Keymap help bar UI component.

use crate::app::{App, Screen};
use crate::shared::ThemeColors;
use ratatui::{layout::Rect, style::Style, widgets::Paragraph, Frame};

/// Draw the keymap help bar.
pub fn draw_keymap(f: &mut Frame<'_>, area: Rect, app: &App, colors: &ThemeColors) {
    let keymap_text = match app.screen {
        Screen::Search if app.form.picker.is_some() => "jk/↑↓:nav | Enter:choose | Esc:cancel",
        Screen::Search if app.form.editing => "Enter/Esc:done | Type to edit",
        Screen::Search => "jk/↑↓:nav | Enter:edit/toggle | Space:toggle | s:search | T:theme | q:quit",
        Screen::Results => {
            "jk/↑↓:nav | Enter/l:details | h/Esc:back | gg/G:first/last | y:copy | T:theme | q:quit"
        },
        Screen::Detail => "jk:scroll | h/Esc:back | y:copy | T:theme | q:quit",
    };

    let paragraph =
        Paragraph::new(keymap_text).style(Style::default().fg(colors.text).bg(colors.bg));

    f.render_widget(paragraph, area);
}
