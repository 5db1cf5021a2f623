//! Key → action resolution for the hex view.
//!
//! The built-in map mirrors the classic single-letter hex editor commands.
//! Bindings from the config file are layered on top and win on conflict.

use crate::config::Keybinding;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// A command the shell can run in response to a key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    MoveLeft,
    MoveRight,
    MoveUp,
    MoveDown,
    PageUp,
    PageDown,
    MoveToStart,
    MoveToEnd,
    EditByte,
    InsertBytes,
    AppendBytes,
    DeleteByte,
    SearchText,
    SearchHex,
    Undo,
    Redo,
    Save,
    Quit,
    ForceQuit,
}

impl Action {
    /// Parse the snake_case name used in config files
    pub fn from_name(name: &str) -> Option<Self> {
        let action = match name {
            "move_left" => Action::MoveLeft,
            "move_right" => Action::MoveRight,
            "move_up" => Action::MoveUp,
            "move_down" => Action::MoveDown,
            "page_up" => Action::PageUp,
            "page_down" => Action::PageDown,
            "move_to_start" => Action::MoveToStart,
            "move_to_end" => Action::MoveToEnd,
            "edit_byte" => Action::EditByte,
            "insert_bytes" => Action::InsertBytes,
            "append_bytes" => Action::AppendBytes,
            "delete_byte" => Action::DeleteByte,
            "search_text" => Action::SearchText,
            "search_hex" => Action::SearchHex,
            "undo" => Action::Undo,
            "redo" => Action::Redo,
            "save" => Action::Save,
            "quit" => Action::Quit,
            "force_quit" => Action::ForceQuit,
            _ => return None,
        };
        Some(action)
    }
}

/// Parse a key name such as `"a"`, `"Enter"` or `"PageDown"`
pub fn parse_key_code(key: &str) -> Option<KeyCode> {
    let code = match key.to_ascii_lowercase().as_str() {
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "pageup" => KeyCode::PageUp,
        "pagedown" => KeyCode::PageDown,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "enter" => KeyCode::Enter,
        "esc" | "escape" => KeyCode::Esc,
        "tab" => KeyCode::Tab,
        "backspace" => KeyCode::Backspace,
        "delete" | "del" => KeyCode::Delete,
        "insert" | "ins" => KeyCode::Insert,
        _ => {
            let mut chars = key.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => KeyCode::Char(c),
                _ => return None,
            }
        }
    };
    Some(code)
}

/// Parse modifier names (`ctrl`, `alt`, `shift`)
pub fn parse_modifiers(names: &[String]) -> Option<KeyModifiers> {
    names.iter().try_fold(KeyModifiers::NONE, |acc, name| {
        let modifier = match name.to_ascii_lowercase().as_str() {
            "ctrl" | "control" => KeyModifiers::CONTROL,
            "alt" => KeyModifiers::ALT,
            "shift" => KeyModifiers::SHIFT,
            _ => return None,
        };
        Some(acc | modifier)
    })
}

/// Resolves key events to actions
#[derive(Debug, Clone)]
pub struct KeybindingResolver {
    bindings: HashMap<(KeyCode, KeyModifiers), Action>,
}

impl Default for KeybindingResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl KeybindingResolver {
    /// Resolver with only the built-in bindings
    pub fn new() -> Self {
        let none = KeyModifiers::NONE;
        let bindings = [
            (KeyCode::Left, none, Action::MoveLeft),
            (KeyCode::Right, none, Action::MoveRight),
            (KeyCode::Up, none, Action::MoveUp),
            (KeyCode::Down, none, Action::MoveDown),
            (KeyCode::PageUp, none, Action::PageUp),
            (KeyCode::PageDown, none, Action::PageDown),
            (KeyCode::Home, none, Action::MoveToStart),
            (KeyCode::End, none, Action::MoveToEnd),
            (KeyCode::Char('e'), none, Action::EditByte),
            (KeyCode::Char('i'), none, Action::InsertBytes),
            (KeyCode::Char('a'), none, Action::AppendBytes),
            (KeyCode::Char('d'), none, Action::DeleteByte),
            (KeyCode::Delete, none, Action::DeleteByte),
            (KeyCode::Char('/'), none, Action::SearchText),
            (KeyCode::Char('h'), none, Action::SearchHex),
            (KeyCode::Char('u'), none, Action::Undo),
            (KeyCode::Char('r'), none, Action::Redo),
            (KeyCode::Char('s'), none, Action::Save),
            (KeyCode::Char('q'), none, Action::Quit),
            (KeyCode::Char('c'), KeyModifiers::CONTROL, Action::ForceQuit),
        ]
        .into_iter()
        .map(|(code, modifiers, action)| ((code, modifiers), action))
        .collect();

        Self { bindings }
    }

    /// Built-in bindings plus the ones from the config.
    ///
    /// Entries with an unknown key, modifier or action are skipped with a warning.
    pub fn with_overrides(overrides: &[Keybinding]) -> Self {
        let mut resolver = Self::new();
        for binding in overrides {
            let code = parse_key_code(&binding.key);
            let modifiers = parse_modifiers(&binding.modifiers);
            let action = Action::from_name(&binding.action);
            match (code, modifiers, action) {
                (Some(code), Some(modifiers), Some(action)) => {
                    resolver.bind(code, modifiers, action);
                }
                _ => tracing::warn!("Ignoring invalid keybinding: {:?}", binding),
            }
        }
        resolver
    }

    pub fn bind(&mut self, code: KeyCode, modifiers: KeyModifiers, action: Action) {
        self.bindings.insert((code, normalize(code, modifiers)), action);
    }

    /// Find the action bound to `event`, if any
    pub fn resolve(&self, event: &KeyEvent) -> Option<Action> {
        self.bindings
            .get(&(event.code, normalize(event.code, event.modifiers)))
            .copied()
    }
}

/// Terminals report Shift alongside already-shifted characters; ignore it for chars
fn normalize(code: KeyCode, modifiers: KeyModifiers) -> KeyModifiers {
    match code {
        KeyCode::Char(_) => modifiers.difference(KeyModifiers::SHIFT),
        _ => modifiers,
    }
}
