//! Terminal backend for Tessera TUI.
//!
//! A thin wrapper over the operating system's terminal: raw mode, the
//! alternate screen buffer, cursor visibility, size queries, and raw reads
//! and writes. The render loop drives everything through the
//! [`TerminalBackend`] trait so tests can substitute an in-memory backend;
//! [`CrosstermBackend`] is the production implementation.

mod backend;

pub use backend::{CrosstermBackend, TerminalBackend};
