//! The text element and its compositing step.

use tessera_tui_grid::Grid;
use tessera_tui_layout::{resolve, LayoutParams, ResolvedLayout};

use crate::wrap::layout_textbox;

/// The output of rendering one element: the finished box grid and the
/// absolute 1-indexed canvas coordinate of its top-left cell.
///
/// Ownership transfers to the caller, which composites the grid onto its
/// canvas and discards it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderResult {
    /// The rendered box.
    pub grid: Grid,
    /// Canvas column of the box's top-left cell.
    pub x: usize,
    /// Canvas row of the box's top-left cell.
    pub y: usize,
}

/// Anything that can render itself to a grid.
///
/// This single-method capability is the only contract the render loop
/// imposes on producers of renderable content.
pub trait Renderable {
    /// Renders the element to a grid plus its canvas origin.
    fn render(&self) -> RenderResult;
}

/// A text element: a string plus the box model governing its layout.
///
/// Rendering resolves the layout parameters, lays the text out inside the
/// inner text box, then wraps the result in padding and an optional border.
///
/// # Examples
///
/// ```
/// use tessera_tui_layout::{Dimensions, LayoutParams, TextProps};
/// use tessera_tui_text::{Renderable, Text};
///
/// let text = Text::new("lorem ipsum dolor").with_layout(
///     LayoutParams::new()
///         .with_dimensions(Dimensions::new(6, 0))
///         .with_text(TextProps::new(0, false, true)),
/// );
///
/// assert_eq!(text.render().grid.serialize(), "lorem \nipsum \ndolor ");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Text {
    content: String,
    layout: LayoutParams,
}

impl Text {
    /// Creates a text element with all layout parameters absent.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            layout: LayoutParams::new(),
        }
    }

    /// Sets the layout parameters.
    pub fn with_layout(mut self, layout: LayoutParams) -> Self {
        self.layout = layout;
        self
    }

    /// Returns the element's content string.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns the element's layout parameters.
    pub fn layout(&self) -> &LayoutParams {
        &self.layout
    }
}

impl Renderable for Text {
    fn render(&self) -> RenderResult {
        let resolved = resolve(&self.layout);
        let (inner_width, inner_height) = resolved.content_size();

        let inner = layout_textbox(
            &self.content,
            inner_width,
            inner_height,
            resolved.max_lines,
            resolved.ellipsis,
            resolved.word_wrap,
        );

        RenderResult {
            grid: frame(&inner, &resolved),
            x: resolved.x,
            y: resolved.y,
        }
    }
}

/// Wraps the laid-out text grid in padding and an optional border ring.
///
/// Outer size per axis is `border + padding + inner + padding + border`,
/// with the border contributing one cell per side as soon as any side is
/// present. The inner grid lands at the offset that leaves room for the
/// ring and the leading paddings.
fn frame(inner: &Grid, layout: &ResolvedLayout) -> Grid {
    let bs = layout.border_size();

    let width = bs + layout.padding_left + inner.width() + layout.padding_right + bs;
    let height = bs + layout.padding_top + inner.height() + layout.padding_bottom + bs;

    let mut outer = Grid::new(width, height);
    outer.place_grid(bs + layout.padding_left + 1, bs + layout.padding_top + 1, inner);

    if layout.has_border() {
        outer.apply_border(1, &layout.border_glyphs());
    }

    outer
}
