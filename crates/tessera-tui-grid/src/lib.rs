//! Growable character grid for Tessera TUI.
//!
//! This crate provides [`Grid`], a mutable rectangular buffer of Unicode
//! code points, and [`BorderGlyphs`], the set of characters used to overlay
//! a border ring onto a grid.
//!
//! The grid is the rendering target for the whole engine: the text layout
//! pipeline produces grids, the compositor nests them, and the render loop
//! keeps one long-lived grid as its output canvas.
//!
//! # Coordinate System
//!
//! Coordinates are 1-indexed: `(1, 1)` is the top-left cell, columns grow to
//! the right and rows grow downward. Reads are strictly bounds-checked;
//! writes through [`Grid::place`] grow the grid on demand instead.
//!
//! # Examples
//!
//! ```
//! use tessera_tui_grid::Grid;
//!
//! let mut grid = Grid::new(5, 2);
//! grid.place(1, 1, 'H');
//! grid.place(2, 1, 'i');
//!
//! // Writing past the right edge grows the grid.
//! grid.place(7, 1, '!');
//! assert_eq!(grid.width(), 7);
//!
//! assert_eq!(grid.serialize(), "Hi    !\n       ");
//! ```

mod border;
mod grid;

pub use border::BorderGlyphs;
pub use grid::Grid;
