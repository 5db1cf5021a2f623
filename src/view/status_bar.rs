use crate::app::prompt::Prompt;
use crate::state::EditorSession;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

const STATUS_STYLE: Style = Style::new().fg(Color::White).bg(Color::Blue);

const KEY_HINTS: &str =
    "q=Quit s=Save e=Edit i=Insert d=Delete / SearchASCII h=SearchHex u=Undo r=Redo";

/// File name, size, cursor and modified flag followed by the key hints
pub fn status_text(session: &EditorSession, cursor: usize) -> String {
    let modified = if session.is_modified() { " [MODIFIED]" } else { "" };
    format!(
        "File: {} | Size: {} bytes | Cursor: 0x{:x}{} | {}",
        session.path().display(),
        session.len(),
        cursor,
        modified,
        KEY_HINTS
    )
}

/// Render the bottom line.
///
/// An open prompt takes precedence over a status message, which in turn
/// replaces the normal file summary for one key press.
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    session: &EditorSession,
    cursor: usize,
    prompt: Option<&Prompt>,
    message: Option<&str>,
) {
    if area.height == 0 {
        return;
    }

    let text = match (prompt, message) {
        (Some(prompt), _) => {
            let text = format!("{}{}", prompt.message(), prompt.input);
            let width = u16::try_from(text.chars().count()).unwrap_or(u16::MAX);
            let x = area.x.saturating_add(width).min(area.right().saturating_sub(1));
            frame.set_cursor_position(Position::new(x, area.y));
            text
        }
        (None, Some(message)) => message.to_string(),
        (None, None) => status_text(session, cursor),
    };

    frame.render_widget(Paragraph::new(text).style(STATUS_STYLE), area);
}
