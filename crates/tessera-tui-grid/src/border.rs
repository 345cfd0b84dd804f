//! Border glyph sets for overlaying a ring onto a grid.

/// The eight characters used to draw one border ring.
///
/// Four edge fills plus four corners. Sides that should not be drawn use the
/// blank glyph `' '`, which still occupies the reserved ring cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorderGlyphs {
    /// Fill character for the top edge.
    pub top: char,
    /// Fill character for the bottom edge.
    pub bottom: char,
    /// Fill character for the left edge.
    pub left: char,
    /// Fill character for the right edge.
    pub right: char,
    /// Top-left corner character.
    pub top_left: char,
    /// Top-right corner character.
    pub top_right: char,
    /// Bottom-left corner character.
    pub bottom_left: char,
    /// Bottom-right corner character.
    pub bottom_right: char,
}

impl BorderGlyphs {
    /// All-blank glyphs. Drawing with these wipes the ring to spaces.
    pub const BLANK: Self = Self {
        top: ' ',
        bottom: ' ',
        left: ' ',
        right: ' ',
        top_left: ' ',
        top_right: ' ',
        bottom_left: ' ',
        bottom_right: ' ',
    };
}

impl Default for BorderGlyphs {
    fn default() -> Self {
        Self::BLANK
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_blank() {
        let glyphs = BorderGlyphs::default();
        assert_eq!(glyphs, BorderGlyphs::BLANK);
        assert_eq!(glyphs.top, ' ');
        assert_eq!(glyphs.bottom_right, ' ');
    }
}
