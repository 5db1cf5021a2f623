//! Core data model for the edited file
//!
//! This module contains pure data structures with no terminal or I/O dependencies.

pub mod buffer;
pub mod edit;
pub mod edit_log;
pub mod error;

pub use buffer::ByteBuffer;
pub use edit::Edit;
pub use edit_log::EditLog;
pub use error::EditError;
