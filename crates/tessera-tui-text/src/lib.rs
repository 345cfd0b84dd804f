//! Text wrapping and box compositing for Tessera TUI.
//!
//! Given a string and a resolved box model, this crate lays the text out
//! inside its box ([`wrap`]) and composites the result with padding and an
//! optional border into the final grid ([`Text`]).
//!
//! The engine treats one Unicode code point as one terminal column; it does
//! not measure grapheme clusters or wide characters.
//!
//! # Examples
//!
//! ```
//! use tessera_tui_layout::{Border, BorderStyle, LayoutParams, Padding};
//! use tessera_tui_text::{Renderable, Text};
//!
//! let text = Text::new("Hi").with_layout(
//!     LayoutParams::new()
//!         .with_padding(Padding::uniform(1))
//!         .with_border(Border::uniform(BorderStyle::Rounded)),
//! );
//!
//! let result = text.render();
//! assert_eq!(
//!     result.grid.serialize(),
//!     "╭────╮\n│    │\n│ Hi │\n│    │\n╰────╯"
//! );
//! ```

mod element;
pub mod wrap;

pub use element::{Renderable, RenderResult, Text};
