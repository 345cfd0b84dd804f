//! Core types shared by the Tessera TUI crates.
//!
//! This crate carries the [`Error`] type and [`Result`] alias used by the
//! terminal backend and the render loop. The rendering crates themselves
//! (`tessera-tui-grid`, `tessera-tui-text`) treat contract violations as
//! panics rather than recoverable errors; see their documentation.

mod error;

pub use error::{Error, Result};
