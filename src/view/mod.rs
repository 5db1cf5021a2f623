//! View layer
//!
//! Rendering of the hex grid and the status line with ratatui.

pub mod hex_view;
pub mod status_bar;

use ratatui::layout::Rect;

/// Split the screen into the grid area and the one-line status bar below it
pub fn split_layout(area: Rect) -> (Rect, Rect) {
    let status_height = area.height.min(1);
    let grid = Rect::new(area.x, area.y, area.width, area.height - status_height);
    let status = Rect::new(area.x, area.y + grid.height, area.width, status_height);
    (grid, status)
}
