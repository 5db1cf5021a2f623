// Drives an `App` against ratatui's TestBackend

use super::fixtures::TestFixture;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use hexed::app::App;
use hexed::config::Config;
use hexed::state::EditorSession;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::Terminal;
use std::path::Path;

/// Virtual terminal plus an editor, for end-to-end tests
pub struct EditorTestHarness {
    app: App,
    terminal: Terminal<TestBackend>,
    /// Keeps the backing file alive for the lifetime of the harness
    fixture: Option<TestFixture>,
}

impl EditorTestHarness {
    /// Harness editing an empty file
    pub fn new(width: u16, height: u16) -> anyhow::Result<Self> {
        Self::with_bytes(width, height, &[])
    }

    /// Harness editing a temporary file holding `bytes`
    pub fn with_bytes(width: u16, height: u16, bytes: &[u8]) -> anyhow::Result<Self> {
        Self::with_config(width, height, bytes, Config::default())
    }

    /// Harness editing a temporary file holding `bytes`, with a custom config
    pub fn with_config(
        width: u16,
        height: u16,
        bytes: &[u8],
        config: Config,
    ) -> anyhow::Result<Self> {
        super::tracing::init_tracing_from_env();
        let fixture = TestFixture::new("test.bin", bytes)?;
        let session = EditorSession::open(&fixture.path)?;
        let terminal = Terminal::new(TestBackend::new(width, height))?;
        Ok(Self {
            app: App::new(session, config),
            terminal,
            fixture: Some(fixture),
        })
    }

    /// Replace the editor with one editing `path`
    pub fn open_file(&mut self, path: &Path) -> anyhow::Result<()> {
        let session = EditorSession::open(path)?;
        let config = self.app.config().clone();
        self.app = App::new(session, config);
        Ok(())
    }

    pub fn app(&self) -> &App {
        &self.app
    }

    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }

    /// Path of the temporary file backing the harness
    pub fn file_path(&self) -> Option<&Path> {
        self.fixture.as_ref().map(|f| f.path.as_path())
    }

    pub fn send_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> anyhow::Result<()> {
        self.app.handle_key(KeyEvent::new(code, modifiers));
        Ok(())
    }

    /// Send each character of `text` as a key press
    pub fn type_text(&mut self, text: &str) -> anyhow::Result<()> {
        for c in text.chars() {
            self.send_key(KeyCode::Char(c), KeyModifiers::NONE)?;
        }
        Ok(())
    }

    /// Open a prompt with `command`, type `input` and press Enter
    pub fn run_prompt(&mut self, command: char, input: &str) -> anyhow::Result<()> {
        self.send_key(KeyCode::Char(command), KeyModifiers::NONE)?;
        self.type_text(input)?;
        self.send_key(KeyCode::Enter, KeyModifiers::NONE)
    }

    pub fn render(&mut self) -> anyhow::Result<()> {
        let app = &mut self.app;
        self.terminal.draw(|frame| app.render(frame))?;
        Ok(())
    }

    pub fn buffer(&self) -> &Buffer {
        self.terminal.backend().buffer()
    }

    /// Text of screen row `y`
    pub fn screen_row(&self, y: u16) -> String {
        let buffer = self.buffer();
        (0..buffer.area.width)
            .map(|x| buffer[(x, y)].symbol())
            .collect()
    }

    /// Text of the bottom row
    pub fn status_line(&self) -> String {
        self.screen_row(self.buffer().area.height.saturating_sub(1))
    }

    pub fn screen_to_string(&self) -> String {
        (0..self.buffer().area.height)
            .map(|y| self.screen_row(y))
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn assert_screen_contains(&self, text: &str) {
        let screen = self.screen_to_string();
        assert!(
            screen.contains(text),
            "Expected screen to contain '{}'\nScreen:\n{}",
            text,
            screen
        );
    }

    pub fn assert_screen_not_contains(&self, text: &str) {
        let screen = self.screen_to_string();
        assert!(
            !screen.contains(text),
            "Expected screen not to contain '{}'\nScreen:\n{}",
            text,
            screen
        );
    }

    pub fn cursor_position(&self) -> usize {
        self.app.cursor()
    }

    pub fn get_buffer_bytes(&self) -> Vec<u8> {
        self.app.session().buffer.snapshot()
    }

    pub fn assert_buffer_content(&self, expected: &[u8]) {
        assert_eq!(
            self.app.session().buffer.as_slice(),
            expected,
            "Buffer content mismatch"
        );
    }

    pub fn should_quit(&self) -> bool {
        self.app.should_quit()
    }
}
