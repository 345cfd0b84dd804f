//! Optional layout parameters describing one text element.

use crate::Border;

/// Absolute position of a box's top-left cell on the canvas, 1-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    /// Column of the top-left cell.
    pub x: i32,
    /// Row of the top-left cell.
    pub y: i32,
}

impl Position {
    /// Creates a position. Values below 1 resolve to 1.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Outer dimensions of a box.
///
/// A dimension of 0 is the auto sentinel: the box sizes itself to its
/// content on that axis. Negative values resolve to 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    /// Outer width in columns, 0 = auto.
    pub width: i32,
    /// Outer height in rows, 0 = auto.
    pub height: i32,
}

impl Dimensions {
    /// Creates a dimensions pair.
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

/// Inner spacing between the border ring and the text box, per side.
///
/// Negative values resolve to 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Padding {
    /// Rows above the text box.
    pub top: i32,
    /// Columns right of the text box.
    pub right: i32,
    /// Rows below the text box.
    pub bottom: i32,
    /// Columns left of the text box.
    pub left: i32,
}

impl Padding {
    /// Creates padding from explicit per-side values.
    pub const fn new(top: i32, right: i32, bottom: i32, left: i32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// The same padding on all four sides.
    pub const fn uniform(value: i32) -> Self {
        Self::new(value, value, value, value)
    }

    /// Horizontal padding for left/right, vertical for top/bottom.
    pub const fn symmetric(horizontal: i32, vertical: i32) -> Self {
        Self::new(vertical, horizontal, vertical, horizontal)
    }
}

/// Text behavior inside the box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextProps {
    /// Maximum number of rendered lines, 0 = unbounded. Negative values
    /// resolve to 0.
    pub max_lines: i32,
    /// Replace the tail of the last line with `...` when content is cut.
    pub ellipsis: bool,
    /// Wrap at word boundaries instead of breaking words at the column
    /// limit.
    pub word_wrap: bool,
}

impl TextProps {
    /// Creates text properties.
    pub const fn new(max_lines: i32, ellipsis: bool, word_wrap: bool) -> Self {
        Self {
            max_lines,
            ellipsis,
            word_wrap,
        }
    }
}

/// The full optional parameter set governing layout of one text element.
///
/// All fields absent means: position (1,1), auto width and height, no
/// padding, no border, unbounded lines, no ellipsis, break-word wrapping.
/// Immutable once constructed; consumed by value during one render call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LayoutParams {
    /// Where the rendered box lands on the canvas.
    pub position: Option<Position>,
    /// Fixed outer dimensions, or auto per axis.
    pub dimensions: Option<Dimensions>,
    /// Spacing between border and text.
    pub padding: Option<Padding>,
    /// Border specification.
    pub border: Option<Border>,
    /// Wrapping and truncation behavior.
    pub text: Option<TextProps>,
}

impl LayoutParams {
    /// Parameters with every field absent.
    pub const fn new() -> Self {
        Self {
            position: None,
            dimensions: None,
            padding: None,
            border: None,
            text: None,
        }
    }

    /// Sets the position.
    pub fn with_position(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }

    /// Sets the outer dimensions.
    pub fn with_dimensions(mut self, dimensions: Dimensions) -> Self {
        self.dimensions = Some(dimensions);
        self
    }

    /// Sets the padding.
    pub fn with_padding(mut self, padding: Padding) -> Self {
        self.padding = Some(padding);
        self
    }

    /// Sets the border.
    pub fn with_border(mut self, border: Border) -> Self {
        self.border = Some(border);
        self
    }

    /// Sets the text properties.
    pub fn with_text(mut self, text: TextProps) -> Self {
        self.text = Some(text);
        self
    }
}
