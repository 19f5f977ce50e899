//! Shared UI components.
//!
//! This module contains shared UI components used across different screens:
//! - Theme colors and styling
//! - Status bar and keymap bar widgets
//! - Popup layout helper

mod keymap_bar;
mod status_bar;
mod theme;

pub use keymap_bar::draw_keymap;
pub use status_bar::draw_status;
pub use theme::ThemeColors;

use ratatui::layout::Rect;

/// Centered rectangle of the given size, clamped to the available area.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    Rect::new(x, y, width, height)
}
