//! Input handling: mapping terminal key events to shell actions

pub mod keybindings;
