//! The offset / hex / ASCII grid.
//!
//! Row layout: `OOOOOOOO  XX XX .. XX  ascii...`

use crate::config::ViewConfig;
use crate::model::ByteBuffer;
use crate::primitives::hex::{ascii_display_char, format_hex_byte};
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

const OFFSET_STYLE: Style = Style::new().fg(Color::Cyan);
const HEX_STYLE: Style = Style::new().fg(Color::Yellow);
const PRINTABLE_STYLE: Style = Style::new().fg(Color::Green);
const NON_PRINTABLE_STYLE: Style = Style::new().fg(Color::White);
const EMPTY_HINT_STYLE: Style = Style::new().fg(Color::DarkGray);

/// Build the line for one grid row starting at `offset`
pub fn render_row(
    bytes: &[u8],
    offset: usize,
    cursor: usize,
    config: &ViewConfig,
) -> Line<'static> {
    let bpl = config.bytes_per_line;
    let row = &bytes[offset.min(bytes.len())..(offset + bpl).min(bytes.len())];

    let mut spans = Vec::with_capacity(2 * bpl + 3);
    spans.push(Span::styled(format!("{offset:08x}"), OFFSET_STYLE));
    spans.push(Span::raw("  "));

    for i in 0..bpl {
        match row.get(i) {
            Some(&byte) => {
                let style = if offset + i == cursor {
                    HEX_STYLE.add_modifier(Modifier::REVERSED)
                } else {
                    HEX_STYLE
                };
                spans.push(Span::styled(format_hex_byte(byte, config.uppercase_hex), style));
                spans.push(Span::raw(" "));
            }
            None => spans.push(Span::raw("   ")),
        }
    }

    if config.show_ascii {
        spans.push(Span::raw(" "));
        for &byte in row {
            let c = ascii_display_char(byte);
            let style = if c == '.' && byte != b'.' {
                NON_PRINTABLE_STYLE
            } else {
                PRINTABLE_STYLE
            };
            spans.push(Span::styled(c.to_string(), style));
        }
    }

    Line::from(spans)
}

/// Render as many rows as fit in `area`, starting at grid row `scroll_row`
pub fn render_hex_view(
    frame: &mut Frame,
    area: Rect,
    buffer: &ByteBuffer,
    cursor: usize,
    scroll_row: usize,
    config: &ViewConfig,
) {
    if buffer.is_empty() {
        let hint = Line::styled(
            "Empty file. Press 'a' to append bytes.",
            EMPTY_HINT_STYLE,
        );
        frame.render_widget(Paragraph::new(hint), area);
        return;
    }

    let bytes = buffer.as_slice();
    let bpl = config.bytes_per_line;
    let lines: Vec<Line> = (scroll_row..)
        .map(|row| row * bpl)
        .take_while(|&offset| offset < bytes.len())
        .take(usize::from(area.height))
        .map(|offset| render_row(bytes, offset, cursor, config))
        .collect();

    frame.render_widget(Paragraph::new(lines), area);
}
