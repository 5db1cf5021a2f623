// Hex editor library - the byte model is usable without the terminal runtime

pub mod config;
pub mod model;
pub mod persistence;
pub mod primitives;
pub mod search;
pub mod state;

#[cfg(feature = "runtime")]
pub mod app;
#[cfg(feature = "runtime")]
pub mod config_io;
#[cfg(feature = "runtime")]
pub mod input;
#[cfg(feature = "runtime")]
pub mod services;
#[cfg(feature = "runtime")]
pub mod view;
