//! Box-model resolution for Tessera TUI.
//!
//! A text element is described by a set of optional layout parameters:
//! position, dimensions, padding, border, and text properties. This crate
//! provides those value types ([`LayoutParams`] and friends), the border
//! style to glyph mapping ([`BorderStyle`], [`Border`]), and the pure
//! [`resolve`] step that turns the optional parameters into the
//! fully-defaulted [`ResolvedLayout`] the wrapping engine and compositor
//! consume.
//!
//! Resolution happens once per render call, before any layout math runs, so
//! the algorithms downstream never see an absent field.
//!
//! # Defaults
//!
//! | Parameter                | Absent value            |
//! |--------------------------|-------------------------|
//! | Position                 | `(1, 1)`                |
//! | Width / Height           | `0` (auto: size to content) |
//! | Padding (each side)      | `0`                     |
//! | Border (each side)       | absent, no cell reserved |
//! | Max lines                | `0` (unbounded)         |
//! | Ellipsis / word wrap     | `false`                 |

mod border;
mod params;
mod resolved;

pub use border::{Border, BorderStyle, Edge};
pub use params::{Dimensions, LayoutParams, Padding, Position, TextProps};
pub use resolved::{resolve, ResolvedLayout};
