//! Low-level primitives and utilities
//!
//! Conversions between user-typed text and raw bytes.

pub mod hex;
