//! Border styles and their glyph sets.

use tessera_tui_grid::BorderGlyphs;

/// The four edges of a box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    /// Top edge.
    Top,
    /// Right edge.
    Right,
    /// Bottom edge.
    Bottom,
    /// Left edge.
    Left,
}

/// Visual style of one border edge.
///
/// Each style maps to a fixed glyph set per edge. The reserved border
/// thickness is always exactly one cell regardless of style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BorderStyle {
    /// Single-line box-drawing characters.
    /// ```text
    /// ┌───┐
    /// │   │
    /// └───┘
    /// ```
    Solid,
    /// Heavy box-drawing characters.
    /// ```text
    /// ┏━━━┓
    /// ┃   ┃
    /// ┗━━━┛
    /// ```
    Thick,
    /// Plain ASCII characters.
    /// ```text
    /// +---+
    /// |   |
    /// +---+
    /// ```
    Dashed,
    /// Double-line box-drawing characters.
    /// ```text
    /// ╔═══╗
    /// ║   ║
    /// ╚═══╝
    /// ```
    Double,
    /// Single-line with curved corners.
    /// ```text
    /// ╭───╮
    /// │   │
    /// ╰───╯
    /// ```
    Rounded,
}

impl BorderStyle {
    /// Returns `(leading corner, fill, trailing corner)` for a horizontal
    /// edge, or the vertical fill in the first slot for a side edge.
    ///
    /// The top edge owns the top-left/top-right corners and the bottom edge
    /// owns the bottom pair; side edges contribute no corners.
    pub fn edge_glyphs(self, edge: Edge) -> (char, char, char) {
        match edge {
            Edge::Top => match self {
                Self::Solid => ('┌', '─', '┐'),
                Self::Thick => ('┏', '━', '┓'),
                Self::Dashed => ('+', '-', '+'),
                Self::Double => ('╔', '═', '╗'),
                Self::Rounded => ('╭', '─', '╮'),
            },
            Edge::Bottom => match self {
                Self::Solid => ('└', '─', '┘'),
                Self::Thick => ('┗', '━', '┛'),
                Self::Dashed => ('+', '-', '+'),
                Self::Double => ('╚', '═', '╝'),
                Self::Rounded => ('╰', '─', '╯'),
            },
            Edge::Left | Edge::Right => {
                let fill = match self {
                    Self::Solid | Self::Rounded => '│',
                    Self::Thick => '┃',
                    Self::Dashed => '|',
                    Self::Double => '║',
                };
                (fill, ' ', ' ')
            }
        }
    }
}

/// Border specification: four independently present sides.
///
/// A side that is `None` reserves no glyph of its own, but the box still
/// reserves the one-cell ring on every side as soon as any side is present;
/// absent sides then render as blanks inside that ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Border {
    /// Style of the top edge, if drawn.
    pub top: Option<BorderStyle>,
    /// Style of the right edge, if drawn.
    pub right: Option<BorderStyle>,
    /// Style of the bottom edge, if drawn.
    pub bottom: Option<BorderStyle>,
    /// Style of the left edge, if drawn.
    pub left: Option<BorderStyle>,
}

impl Border {
    /// A border drawn on all four sides with the same style.
    pub fn uniform(style: BorderStyle) -> Self {
        Self {
            top: Some(style),
            right: Some(style),
            bottom: Some(style),
            left: Some(style),
        }
    }

    /// A border from explicit per-side styles.
    pub fn sides(
        top: Option<BorderStyle>,
        right: Option<BorderStyle>,
        bottom: Option<BorderStyle>,
        left: Option<BorderStyle>,
    ) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// A border from a horizontal pair (left and right edges) and a
    /// vertical pair (top and bottom edges).
    pub fn symmetric(horizontal: Option<BorderStyle>, vertical: Option<BorderStyle>) -> Self {
        Self {
            top: vertical,
            right: horizontal,
            bottom: vertical,
            left: horizontal,
        }
    }

    /// Returns true if at least one side is present.
    pub const fn any(&self) -> bool {
        self.top.is_some() || self.right.is_some() || self.bottom.is_some() || self.left.is_some()
    }

    /// Resolves the full glyph set for this border.
    ///
    /// Each edge independently resolves to its own style's glyphs, or to
    /// blanks when absent. Corners come from the adjacent horizontal edge.
    pub fn glyphs(&self) -> BorderGlyphs {
        let (top_left, top, top_right) = match self.top {
            Some(style) => style.edge_glyphs(Edge::Top),
            None => (' ', ' ', ' '),
        };
        let (bottom_left, bottom, bottom_right) = match self.bottom {
            Some(style) => style.edge_glyphs(Edge::Bottom),
            None => (' ', ' ', ' '),
        };
        let left = match self.left {
            Some(style) => style.edge_glyphs(Edge::Left).0,
            None => ' ',
        };
        let right = match self.right {
            Some(style) => style.edge_glyphs(Edge::Right).0,
            None => ' ',
        };

        BorderGlyphs {
            top,
            bottom,
            left,
            right,
            top_left,
            top_right,
            bottom_left,
            bottom_right,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_sets_all_sides() {
        let border = Border::uniform(BorderStyle::Solid);
        assert!(border.any());
        assert_eq!(border.top, Some(BorderStyle::Solid));
        assert_eq!(border.left, Some(BorderStyle::Solid));
    }

    #[test]
    fn default_border_has_no_sides() {
        let border = Border::default();
        assert!(!border.any());
    }

    #[test]
    fn symmetric_maps_pairs_to_edges() {
        let border = Border::symmetric(Some(BorderStyle::Double), Some(BorderStyle::Solid));
        assert_eq!(border.left, Some(BorderStyle::Double));
        assert_eq!(border.right, Some(BorderStyle::Double));
        assert_eq!(border.top, Some(BorderStyle::Solid));
        assert_eq!(border.bottom, Some(BorderStyle::Solid));
    }

    #[test]
    fn rounded_glyphs() {
        let glyphs = Border::uniform(BorderStyle::Rounded).glyphs();
        assert_eq!(glyphs.top_left, '╭');
        assert_eq!(glyphs.top_right, '╮');
        assert_eq!(glyphs.bottom_left, '╰');
        assert_eq!(glyphs.bottom_right, '╯');
        assert_eq!(glyphs.top, '─');
        assert_eq!(glyphs.left, '│');
    }

    #[test]
    fn absent_edges_resolve_to_blanks() {
        let border = Border::sides(Some(BorderStyle::Thick), None, None, None);
        let glyphs = border.glyphs();
        assert_eq!(glyphs.top, '━');
        assert_eq!(glyphs.top_left, '┏');
        assert_eq!(glyphs.bottom, ' ');
        assert_eq!(glyphs.left, ' ');
        assert_eq!(glyphs.right, ' ');
        assert_eq!(glyphs.bottom_left, ' ');
    }

    #[test]
    fn corner_ownership_follows_horizontal_edges() {
        // Mixed styles: corners come from top/bottom, not the side edges.
        let border = Border::sides(
            Some(BorderStyle::Double),
            Some(BorderStyle::Solid),
            Some(BorderStyle::Rounded),
            Some(BorderStyle::Solid),
        );
        let glyphs = border.glyphs();
        assert_eq!(glyphs.top_left, '╔');
        assert_eq!(glyphs.top_right, '╗');
        assert_eq!(glyphs.bottom_left, '╰');
        assert_eq!(glyphs.bottom_right, '╯');
        assert_eq!(glyphs.left, '│');
    }
}
