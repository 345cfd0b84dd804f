//! The fully-defaulted form of the layout parameters.

use tessera_tui_grid::BorderGlyphs;

use crate::{Border, LayoutParams};

/// The concrete integer/flag form of [`LayoutParams`], derived fresh per
/// render call and never mutated afterwards.
///
/// Width and height keep the 0 = auto sentinel; everything else is a plain
/// value with its default applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedLayout {
    /// Canvas column of the box's top-left cell, at least 1.
    pub x: usize,
    /// Canvas row of the box's top-left cell, at least 1.
    pub y: usize,
    /// Outer width, 0 = auto.
    pub width: usize,
    /// Outer height, 0 = auto.
    pub height: usize,
    /// Padding rows above the text box.
    pub padding_top: usize,
    /// Padding columns right of the text box.
    pub padding_right: usize,
    /// Padding rows below the text box.
    pub padding_bottom: usize,
    /// Padding columns left of the text box.
    pub padding_left: usize,
    /// The border specification, all-absent when none was supplied.
    pub border: Border,
    /// Maximum rendered lines, 0 = unbounded.
    pub max_lines: usize,
    /// Ellipsis truncation requested.
    pub ellipsis: bool,
    /// Word-preserving wrap requested.
    pub word_wrap: bool,
}

impl ResolvedLayout {
    /// Returns true if at least one border side is present.
    pub const fn has_border(&self) -> bool {
        self.border.any()
    }

    /// The border thickness contributed to outer sizing per side: exactly
    /// one cell on every side as soon as any side is present, independent of
    /// the glyph styles chosen.
    pub const fn border_size(&self) -> usize {
        if self.has_border() {
            1
        } else {
            0
        }
    }

    /// Resolves the glyph set for the border ring.
    pub fn border_glyphs(&self) -> BorderGlyphs {
        self.border.glyphs()
    }

    /// Computes the inner text-box dimensions from the outer dimensions.
    ///
    /// A fixed axis loses its paddings and border cells and is clamped to at
    /// least 1; an auto axis stays 0.
    pub fn content_size(&self) -> (usize, usize) {
        let bs = self.border_size();

        let width = if self.width > 0 {
            self.width
                .saturating_sub(self.padding_left + self.padding_right + 2 * bs)
                .max(1)
        } else {
            0
        };

        let height = if self.height > 0 {
            self.height
                .saturating_sub(self.padding_top + self.padding_bottom + 2 * bs)
                .max(1)
        } else {
            0
        };

        (width, height)
    }
}

/// Clamp for coordinates and fixed dimensions: anything below 1 becomes 1.
fn at_least_one(value: i32) -> usize {
    value.max(1) as usize
}

/// Clamp for paddings and line counts: anything below 0 becomes 0.
fn at_least_zero(value: i32) -> usize {
    value.max(0) as usize
}

/// A fixed dimension below 0 is clamped to 1; 0 stays the auto sentinel.
fn dimension(value: i32) -> usize {
    if value < 0 {
        1
    } else {
        value as usize
    }
}

/// Resolves the optional parameter set into its fully-defaulted form.
///
/// Pure and side-effect-free; the defaults are documented on
/// [`LayoutParams`] and in the crate docs.
pub fn resolve(params: &LayoutParams) -> ResolvedLayout {
    let (x, y) = match params.position {
        Some(pos) => (at_least_one(pos.x), at_least_one(pos.y)),
        None => (1, 1),
    };

    let (width, height) = match params.dimensions {
        Some(dims) => (dimension(dims.width), dimension(dims.height)),
        None => (0, 0),
    };

    let (padding_top, padding_right, padding_bottom, padding_left) = match params.padding {
        Some(pad) => (
            at_least_zero(pad.top),
            at_least_zero(pad.right),
            at_least_zero(pad.bottom),
            at_least_zero(pad.left),
        ),
        None => (0, 0, 0, 0),
    };

    let border = params.border.unwrap_or_default();

    let (max_lines, ellipsis, word_wrap) = match params.text {
        Some(props) => (
            at_least_zero(props.max_lines),
            props.ellipsis,
            props.word_wrap,
        ),
        None => (0, false, false),
    };

    ResolvedLayout {
        x,
        y,
        width,
        height,
        padding_top,
        padding_right,
        padding_bottom,
        padding_left,
        border,
        max_lines,
        ellipsis,
        word_wrap,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BorderStyle, Dimensions, Padding, Position, TextProps};

    #[test]
    fn all_absent_yields_documented_defaults() {
        let resolved = resolve(&LayoutParams::new());

        assert_eq!((resolved.x, resolved.y), (1, 1));
        assert_eq!((resolved.width, resolved.height), (0, 0));
        assert_eq!(resolved.padding_top, 0);
        assert_eq!(resolved.padding_left, 0);
        assert!(!resolved.has_border());
        assert_eq!(resolved.border_size(), 0);
        assert_eq!(resolved.max_lines, 0);
        assert!(!resolved.ellipsis);
        assert!(!resolved.word_wrap);
    }

    #[test]
    fn position_below_one_clamps() {
        let resolved = resolve(&LayoutParams::new().with_position(Position::new(-3, 0)));
        assert_eq!((resolved.x, resolved.y), (1, 1));
    }

    #[test]
    fn explicit_zero_dimension_stays_auto() {
        let resolved = resolve(&LayoutParams::new().with_dimensions(Dimensions::new(0, 7)));
        assert_eq!(resolved.width, 0);
        assert_eq!(resolved.height, 7);
    }

    #[test]
    fn negative_dimension_clamps_to_one() {
        let resolved = resolve(&LayoutParams::new().with_dimensions(Dimensions::new(-5, -1)));
        assert_eq!((resolved.width, resolved.height), (1, 1));
    }

    #[test]
    fn negative_padding_clamps_to_zero() {
        let resolved = resolve(&LayoutParams::new().with_padding(Padding::new(-1, 2, -3, 4)));
        assert_eq!(resolved.padding_top, 0);
        assert_eq!(resolved.padding_right, 2);
        assert_eq!(resolved.padding_bottom, 0);
        assert_eq!(resolved.padding_left, 4);
    }

    #[test]
    fn single_border_side_reserves_ring() {
        let border = Border::sides(Some(BorderStyle::Solid), None, None, None);
        let resolved = resolve(&LayoutParams::new().with_border(border));
        assert!(resolved.has_border());
        assert_eq!(resolved.border_size(), 1);
    }

    #[test]
    fn content_size_subtracts_padding_and_border() {
        let params = LayoutParams::new()
            .with_dimensions(Dimensions::new(10, 6))
            .with_padding(Padding::uniform(1))
            .with_border(Border::uniform(BorderStyle::Solid));
        let resolved = resolve(&params);

        // 10 - 1 - 1 - 2 = 6 wide, 6 - 1 - 1 - 2 = 2 tall.
        assert_eq!(resolved.content_size(), (6, 2));
    }

    #[test]
    fn content_size_clamps_to_one() {
        let params = LayoutParams::new()
            .with_dimensions(Dimensions::new(3, 3))
            .with_padding(Padding::uniform(5));
        let resolved = resolve(&params);
        assert_eq!(resolved.content_size(), (1, 1));
    }

    #[test]
    fn content_size_keeps_auto_axes() {
        let params = LayoutParams::new()
            .with_dimensions(Dimensions::new(8, 0))
            .with_padding(Padding::uniform(1));
        let resolved = resolve(&params);
        assert_eq!(resolved.content_size(), (6, 0));
    }

    #[test]
    fn negative_max_lines_clamps_to_unbounded() {
        let resolved = resolve(&LayoutParams::new().with_text(TextProps::new(-2, true, true)));
        assert_eq!(resolved.max_lines, 0);
        assert!(resolved.ellipsis);
        assert!(resolved.word_wrap);
    }
}
