//! Single-line prompt shown in the status bar.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What the prompt's answer will be used for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    /// New value for the byte under the cursor
    EditByte,
    /// Hex bytes to insert at the cursor
    InsertBytes,
    /// Hex bytes to append at the end of the buffer
    AppendBytes,
    /// ASCII text to search for
    SearchText,
    /// Hex byte sequence to search for
    SearchHex,
    /// Confirmation before discarding unsaved changes
    ConfirmQuit,
}

impl PromptKind {
    /// Text shown before the user's input
    pub fn message(self) -> &'static str {
        match self {
            PromptKind::EditByte => "Enter new hex value (00-FF): ",
            PromptKind::InsertBytes => "Enter hex bytes to insert (e.g., 41 42 43): ",
            PromptKind::AppendBytes => "Enter hex bytes to append (e.g., 41 42 43): ",
            PromptKind::SearchText => "Enter ASCII text to search: ",
            PromptKind::SearchHex => "Enter hex sequence (e.g., 48 65 6C): ",
            PromptKind::ConfirmQuit => "Unsaved changes! Type 'yes' to quit: ",
        }
    }
}

/// Result of feeding a key to the prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptInput {
    /// Still editing
    Pending,
    /// Enter pressed; carries the final input
    Confirmed(String),
    /// Esc pressed
    Cancelled,
}

#[derive(Debug, Clone)]
pub struct Prompt {
    pub kind: PromptKind,
    pub input: String,
}

impl Prompt {
    pub fn new(kind: PromptKind) -> Self {
        Self {
            kind,
            input: String::new(),
        }
    }

    pub fn message(&self) -> &'static str {
        self.kind.message()
    }

    pub fn handle_key(&mut self, event: &KeyEvent) -> PromptInput {
        let ctrl = event.modifiers.contains(KeyModifiers::CONTROL);
        match event.code {
            KeyCode::Enter => PromptInput::Confirmed(std::mem::take(&mut self.input)),
            KeyCode::Esc => PromptInput::Cancelled,
            KeyCode::Char('c') if ctrl => PromptInput::Cancelled,
            KeyCode::Char('u') if ctrl => {
                self.input.clear();
                PromptInput::Pending
            }
            KeyCode::Char(c) if !ctrl => {
                self.input.push(c);
                PromptInput::Pending
            }
            KeyCode::Backspace => {
                self.input.pop();
                PromptInput::Pending
            }
            _ => PromptInput::Pending,
        }
    }
}
