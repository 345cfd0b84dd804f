//! Render loop and screen lifecycle for Tessera TUI.
//!
//! A single-threaded cooperative loop: the [`Renderer`] asks the active
//! [`Screen`] for a view, renders it, composites the result onto a
//! persistent canvas grid, flushes the canvas to the terminal, then drains
//! the signal queue and hands control back to the screen's update step.
//!
//! One logical thread owns the canvas, the signal queue, and the redraw
//! flag; there is no locking and no parallelism. The only suspension point
//! is the screen's update step, which may block waiting for input.

mod context;
mod renderer;
mod screen;
mod signal;

pub use context::RenderContext;
pub use renderer::{LoopState, Renderer};
pub use screen::{LifecycleEvent, Screen};
pub use signal::Signal;
