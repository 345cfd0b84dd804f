//! Tessera TUI: a character-grid rendering engine for terminal UIs.
//!
//! The engine maintains a 2-D buffer of character cells, resolves a
//! CSS-like box model for a text element (position, fixed/auto dimensions,
//! padding, border, wrapping policy), lays the text out inside its box, and
//! composites the result onto a canvas for output to a terminal.
//!
//! The member crates, leaf first:
//!
//! - [`grid`]: the growable character grid, region composition, bordering,
//!   and serialization
//! - [`layout`]: optional box-model parameters and their resolution into
//!   concrete values
//! - [`text`]: the wrapping/ellipsis engine and the `Text` element
//! - [`terminal`]: raw-mode terminal control behind a backend trait
//! - [`runtime`]: the cooperative render loop, screens, and signals
//!
//! # Example
//!
//! ```no_run
//! use tessera_tui::prelude::*;
//! use tessera_tui::runtime::{LifecycleEvent, RenderContext};
//!
//! struct Hello;
//!
//! impl Screen for Hello {
//!     fn on_event(&mut self, _ctx: &mut RenderContext, _event: LifecycleEvent) {}
//!
//!     fn update(&mut self, ctx: &mut RenderContext) {
//!         // A real screen would block on input here.
//!         ctx.send_signal(Signal::Exit);
//!     }
//!
//!     fn view(&mut self, _ctx: &RenderContext) -> Box<dyn Renderable> {
//!         Box::new(Text::new("Hello, world!").with_layout(
//!             LayoutParams::new().with_border(Border::uniform(BorderStyle::Rounded)),
//!         ))
//!     }
//! }
//!
//! fn main() -> tessera_tui::core::Result<()> {
//!     let mut backend = CrosstermBackend::new();
//!     backend.setup()?;
//!     let mut renderer = Renderer::new(backend)?;
//!     renderer.run(&mut Hello)
//! }
//! ```

pub use tessera_tui_core as core;
pub use tessera_tui_grid as grid;
pub use tessera_tui_layout as layout;
pub use tessera_tui_runtime as runtime;
pub use tessera_tui_terminal as terminal;
pub use tessera_tui_text as text;

pub mod prelude {
    pub use tessera_tui_grid::{BorderGlyphs, Grid};
    pub use tessera_tui_layout::{
        Border, BorderStyle, Dimensions, LayoutParams, Padding, Position, TextProps,
    };
    pub use tessera_tui_runtime::{Renderer, Screen, Signal};
    pub use tessera_tui_terminal::{CrosstermBackend, TerminalBackend};
    pub use tessera_tui_text::{Renderable, RenderResult, Text};
}
