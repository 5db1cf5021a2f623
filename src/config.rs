use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub view: ViewConfig,

    #[serde(default)]
    pub editor: EditorConfig,

    /// Extra bindings applied on top of the built-in key map
    #[serde(default)]
    pub keybindings: Vec<Keybinding>,
}

/// Layout of the hex grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewConfig {
    /// Number of bytes shown on each row
    #[serde(default = "default_bytes_per_line")]
    pub bytes_per_line: usize,

    #[serde(default = "default_true")]
    pub uppercase_hex: bool,

    /// Show the ASCII column to the right of the hex cells
    #[serde(default = "default_true")]
    pub show_ascii: bool,
}

fn default_bytes_per_line() -> usize {
    16
}

fn default_true() -> bool {
    true
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            bytes_per_line: default_bytes_per_line(),
            uppercase_hex: true,
            show_ascii: true,
        }
    }
}

/// Editing behaviour
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorConfig {
    /// Ask before quitting with unsaved changes
    #[serde(default = "default_true")]
    pub confirm_quit_when_modified: bool,

    /// Start searches one byte after the cursor, so repeating a search finds the next match
    #[serde(default = "default_true")]
    pub search_from_next_byte: bool,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            confirm_quit_when_modified: true,
            search_from_next_byte: true,
        }
    }
}

/// Keybinding definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Keybinding {
    /// Key name (e.g., "a", "Enter", "PageDown")
    pub key: String,

    /// Modifiers (e.g., ["ctrl"], ["ctrl", "shift"])
    #[serde(default)]
    pub modifiers: Vec<String>,

    /// Action to perform (e.g., "undo", "search_hex")
    pub action: String,
}

/// Largest supported row width
pub const MAX_BYTES_PER_LINE: usize = 64;

impl Config {
    /// Load configuration from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::IoError(e.to_string()))?;

        let config: Config =
            serde_json::from_str(&contents).map_err(|e| ConfigError::ParseError(e.to_string()))?;

        Ok(config)
    }

    /// Save configuration to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| ConfigError::SerializeError(e.to_string()))?;

        std::fs::write(path.as_ref(), contents).map_err(|e| ConfigError::IoError(e.to_string()))?;

        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.view.bytes_per_line == 0 {
            return Err(ConfigError::ValidationError(
                "bytes_per_line must be greater than 0".to_string(),
            ));
        }

        if self.view.bytes_per_line > MAX_BYTES_PER_LINE {
            return Err(ConfigError::ValidationError(format!(
                "bytes_per_line must be <= {MAX_BYTES_PER_LINE}"
            )));
        }

        for binding in &self.keybindings {
            if binding.key.is_empty() {
                return Err(ConfigError::ValidationError(
                    "keybinding key cannot be empty".to_string(),
                ));
            }
            if binding.action.is_empty() {
                return Err(ConfigError::ValidationError(
                    "keybinding action cannot be empty".to_string(),
                ));
            }
        }

        Ok(())
    }
}

/// Configuration error types
#[derive(Debug)]
pub enum ConfigError {
    IoError(String),
    ParseError(String),
    SerializeError(String),
    ValidationError(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(msg) => write!(f, "IO error: {msg}"),
            ConfigError::ParseError(msg) => write!(f, "Parse error: {msg}"),
            ConfigError::SerializeError(msg) => write!(f, "Serialize error: {msg}"),
            ConfigError::ValidationError(msg) => write!(f, "Validation error: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}
