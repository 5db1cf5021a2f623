//! Process-level services used by the binary

pub mod log_dirs;
pub mod tracing_setup;
