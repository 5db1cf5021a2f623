//! The interactive shell around an [`EditorSession`].
//!
//! `App` owns presentation state (cursor, scroll position, prompt, status
//! message) and turns key presses into calls on the session. One key press is
//! handled to completion before the next one is read.

pub mod prompt;

use crate::config::Config;
use crate::input::keybindings::{Action, KeybindingResolver};
use crate::model::{Edit, EditError};
use crate::primitives::hex::{parse_hex_byte, parse_hex_bytes};
use crate::state::EditorSession;
use crate::view;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use prompt::{Prompt, PromptInput, PromptKind};
use ratatui::backend::Backend;
use ratatui::{Frame, Terminal};
use std::io;

/// Rows assumed visible before the first render reports the real height
const DEFAULT_PAGE_ROWS: usize = 20;

pub struct App {
    session: EditorSession,
    config: Config,
    keybindings: KeybindingResolver,

    /// Offset of the selected byte
    cursor: usize,

    /// Index of the first grid row on screen
    scroll_row: usize,

    /// Grid rows that fit on screen, updated on every render
    page_rows: usize,

    prompt: Option<Prompt>,

    /// One-shot message shown in the status bar until the next key press
    status_message: Option<String>,

    should_quit: bool,
}

impl App {
    pub fn new(session: EditorSession, config: Config) -> Self {
        let keybindings = KeybindingResolver::with_overrides(&config.keybindings);
        Self {
            session,
            config,
            keybindings,
            cursor: 0,
            scroll_row: 0,
            page_rows: DEFAULT_PAGE_ROWS,
            prompt: None,
            status_message: None,
            should_quit: false,
        }
    }

    pub fn session(&self) -> &EditorSession {
        &self.session
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn scroll_row(&self) -> usize {
        self.scroll_row
    }

    pub fn prompt(&self) -> Option<&Prompt> {
        self.prompt.as_ref()
    }

    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    fn bytes_per_line(&self) -> usize {
        self.config.view.bytes_per_line
    }

    /// Draw until the user quits
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        while !self.should_quit {
            terminal.draw(|frame| self.render(frame))?;

            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
                Event::Resize(width, height) => {
                    tracing::trace!("Terminal resized to {}x{}", width, height);
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Render the grid and the status line into `frame`
    pub fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        let (grid_area, status_area) = view::split_layout(area);
        self.page_rows = usize::from(grid_area.height).max(1);
        self.scroll_to_cursor();

        view::hex_view::render_hex_view(
            frame,
            grid_area,
            &self.session.buffer,
            self.cursor,
            self.scroll_row,
            &self.config.view,
        );
        view::status_bar::render_status_bar(
            frame,
            status_area,
            &self.session,
            self.cursor,
            self.prompt.as_ref(),
            self.status_message.as_deref(),
        );
    }

    /// Handle one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if let Some(prompt) = self.prompt.as_mut() {
            match prompt.handle_key(&key) {
                PromptInput::Pending => {}
                PromptInput::Cancelled => {
                    self.prompt = None;
                }
                PromptInput::Confirmed(input) => {
                    let kind = prompt.kind;
                    self.prompt = None;
                    self.confirm_prompt(kind, &input);
                }
            }
            return;
        }

        self.status_message = None;
        if let Some(action) = self.keybindings.resolve(&key) {
            self.dispatch(action);
        }
    }

    /// Run a single action
    pub fn dispatch(&mut self, action: Action) {
        tracing::trace!("Dispatching {:?}", action);
        let bpl = self.bytes_per_line();
        let len = self.session.len();
        let page = self.page_rows * bpl;

        match action {
            Action::MoveLeft => self.cursor = self.cursor.saturating_sub(1),
            Action::MoveRight => {
                if self.cursor + 1 < len {
                    self.cursor += 1;
                }
            }
            Action::MoveUp => {
                if self.cursor >= bpl {
                    self.cursor -= bpl;
                }
            }
            Action::MoveDown => {
                if self.cursor + bpl < len {
                    self.cursor += bpl;
                }
            }
            Action::PageUp => self.cursor = self.cursor.saturating_sub(page),
            Action::PageDown => {
                if self.cursor + page < len {
                    self.cursor += page;
                } else {
                    self.cursor = len.saturating_sub(1);
                }
            }
            Action::MoveToStart => self.cursor = 0,
            Action::MoveToEnd => self.cursor = len.saturating_sub(1),
            Action::EditByte => {
                if self.session.is_empty() {
                    self.set_status("Buffer is empty.");
                } else {
                    self.open_prompt(PromptKind::EditByte);
                }
            }
            Action::InsertBytes => self.open_prompt(PromptKind::InsertBytes),
            Action::AppendBytes => self.open_prompt(PromptKind::AppendBytes),
            Action::DeleteByte => self.delete_at_cursor(),
            Action::SearchText => self.open_prompt(PromptKind::SearchText),
            Action::SearchHex => self.open_prompt(PromptKind::SearchHex),
            Action::Undo => {
                let result = self.session.undo();
                self.after_history_step(result, "Undid");
            }
            Action::Redo => {
                let result = self.session.redo();
                self.after_history_step(result, "Redid");
            }
            Action::Save => self.save(),
            Action::Quit => {
                if self.session.is_modified() && self.config.editor.confirm_quit_when_modified {
                    self.open_prompt(PromptKind::ConfirmQuit);
                } else {
                    self.should_quit = true;
                }
            }
            Action::ForceQuit => self.should_quit = true,
        }

        self.clamp_cursor();
    }

    fn open_prompt(&mut self, kind: PromptKind) {
        self.prompt = Some(Prompt::new(kind));
    }

    fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    fn confirm_prompt(&mut self, kind: PromptKind, input: &str) {
        match kind {
            PromptKind::EditByte => match parse_hex_byte(input) {
                Ok(value) => {
                    if let Err(e) = self.session.overwrite(self.cursor, value) {
                        self.set_status(format!("Error: {e}"));
                    }
                }
                Err(e) => self.set_status(e.to_string()),
            },
            PromptKind::InsertBytes => self.insert_hex(self.cursor, input),
            PromptKind::AppendBytes => self.insert_hex(self.session.len(), input),
            PromptKind::SearchText => {
                if !input.is_empty() {
                    self.search(input.as_bytes());
                }
            }
            PromptKind::SearchHex => match parse_hex_bytes(input) {
                Ok(pattern) if pattern.is_empty() => {}
                Ok(pattern) => self.search(&pattern),
                Err(e) => self.set_status(e.to_string()),
            },
            PromptKind::ConfirmQuit => {
                if input == "yes" {
                    self.should_quit = true;
                } else {
                    self.set_status("Quit cancelled.");
                }
            }
        }
        self.clamp_cursor();
    }

    fn insert_hex(&mut self, offset: usize, input: &str) {
        let bytes = match parse_hex_bytes(input) {
            Ok(bytes) => bytes,
            Err(e) => {
                self.set_status(e.to_string());
                return;
            }
        };
        if bytes.is_empty() {
            return;
        }
        match self.session.insert(offset, &bytes) {
            Ok(()) => {
                tracing::debug!("Inserted {} bytes at 0x{:x}", bytes.len(), offset);
                self.cursor = offset;
            }
            Err(e) => self.set_status(format!("Error: {e}")),
        }
    }

    fn delete_at_cursor(&mut self) {
        match self.session.delete(self.cursor, 1) {
            Ok(0) => self.set_status("Nothing to delete."),
            Ok(_) => tracing::debug!("Deleted byte at 0x{:x}", self.cursor),
            Err(e) => self.set_status(format!("Error: {e}")),
        }
    }

    fn search(&mut self, pattern: &[u8]) {
        let start = if self.config.editor.search_from_next_byte {
            self.cursor + 1
        } else {
            self.cursor
        };
        match self.session.find(pattern, start) {
            Some(offset) => {
                self.cursor = offset;
                self.set_status(format!("Found at 0x{offset:x}."));
            }
            None => self.set_status("Not found."),
        }
    }

    fn after_history_step(&mut self, result: Result<Edit, EditError>, verb: &str) {
        match result {
            Ok(edit) => {
                let what = match edit {
                    Edit::Overwrite { .. } => "edit",
                    Edit::Insert { .. } => "insert",
                    Edit::Delete { .. } => "delete",
                };
                self.cursor = edit.offset();
                self.set_status(format!("{verb} {what} at 0x{:x}.", edit.offset()));
            }
            Err(e) => self.set_status(format!("{e}.")),
        }
    }

    fn save(&mut self) {
        match self.session.save() {
            Ok(()) => {
                tracing::info!(
                    "Saved {} bytes to {:?}",
                    self.session.len(),
                    self.session.path()
                );
                self.set_status("File saved.");
            }
            Err(e) => {
                tracing::warn!("Save failed: {}", e);
                self.set_status(format!("Error saving file: {e}"));
            }
        }
    }

    fn clamp_cursor(&mut self) {
        self.cursor = self.cursor.min(self.session.len().saturating_sub(1));
    }

    /// Scroll just enough to bring the cursor's row on screen
    fn scroll_to_cursor(&mut self) {
        let cursor_row = self.cursor / self.bytes_per_line();
        if cursor_row < self.scroll_row {
            self.scroll_row = cursor_row;
        } else if cursor_row >= self.scroll_row + self.page_rows {
            self.scroll_row = cursor_row + 1 - self.page_rows;
        }
    }
}
