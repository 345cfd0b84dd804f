//! Text layout inside a resolved box.
//!
//! [`layout_textbox`] is the entry point: it applies the fixed/auto sizing
//! decision table and hands off to one of the line-production strategies:
//!
//! - [`single_line`] when the width is auto,
//! - [`wrap_words`] for word-preserving wrap,
//! - [`wrap_chars`] for break-word wrap.
//!
//! All strategies produce a [`Grid`] whose width equals the text-box width
//! and whose height is the number of produced lines, relying on the grid's
//! growth-on-write to extend downward as lines are committed.

use tessera_tui_grid::Grid;

/// Lays out `text` inside a text box of the given inner dimensions.
///
/// `width` and `height` follow the auto convention (0 = size to content);
/// `max_lines` of 0 means unbounded.
///
/// Sizing decision table:
///
/// 1. width auto, height fixed: a single line of the given height.
/// 2. width auto, height auto: a single line of height 1.
/// 3. width fixed, height auto: multi-line, growing vertically without
///    bound, subject to `max_lines`.
/// 4. width fixed, height fixed: multi-line with `max_lines` defaulting to
///    the fixed height; the result is padded with blank rows up to the
///    fixed height (rows already produced are never truncated).
///
/// Ellipsis is disallowed whenever the fixed width is less than 4, since the
/// `...` marker needs room for at least one content character.
pub fn layout_textbox(
    text: &str,
    width: usize,
    height: usize,
    max_lines: usize,
    ellipsis: bool,
    word_wrap: bool,
) -> Grid {
    let fixed_w = width > 0;
    let fixed_h = height > 0;

    if !fixed_w {
        return single_line(text, if fixed_h { height } else { 1 });
    }

    let ellipsis = ellipsis && width >= 4;

    if !fixed_h {
        return if word_wrap {
            wrap_words(text, width, max_lines, ellipsis)
        } else {
            wrap_chars(text, width, max_lines, ellipsis)
        };
    }

    let max_lines = if max_lines == 0 { height } else { max_lines };

    let mut grid = if word_wrap {
        wrap_words(text, width, max_lines, ellipsis)
    } else {
        wrap_chars(text, width, max_lines, ellipsis)
    };

    // Enforce the fixed height by appending blank rows for any shortfall.
    if height > grid.height() {
        grid.grow_down(height - grid.height());
    }

    grid
}

/// Renders `text` as one unconstrained line on a grid of the given height.
///
/// The grid width is the character count of the text, clamped to 1 so the
/// grid invariant holds for empty input.
pub fn single_line(text: &str, height: usize) -> Grid {
    let count = text.chars().count();
    let mut grid = Grid::new(count.max(1), height.max(1));

    for (i, ch) in text.chars().enumerate() {
        grid.place(i + 1, 1, ch);
    }

    grid
}

/// Word-preserving wrap: greedy packing of space-separated words.
///
/// The input is trimmed of surrounding spaces and split on single spaces. A
/// word longer than `width` cannot fit on any line and invalidates word
/// mode for the whole text, falling back to [`wrap_chars`]. Otherwise words
/// are packed onto the current line with one separating space; when the
/// next word would overflow, the line is space-padded to exactly `width`
/// and committed. Production stops once `max_lines` is reached; words
/// beyond that point are not rendered, which is what arms the ellipsis.
///
/// # Panics
///
/// Panics if ellipsis truncation triggers with `width` below 4; the `...`
/// marker needs room for at least one content character.
pub fn wrap_words(text: &str, width: usize, max_lines: usize, ellipsis: bool) -> Grid {
    let trimmed = text.trim_matches(' ');
    let words: Vec<&str> = trimmed.split(' ').collect();

    if words.iter().any(|w| w.chars().count() > width) {
        return wrap_chars(text, width, max_lines, ellipsis);
    }

    let mut grid = Grid::new(width, 1);
    let mut row = String::new();
    let mut line = 1;
    let mut rendered = 0;

    for word in &words {
        let row_len = row.chars().count();
        let word_len = word.chars().count();

        if row_len + word_len <= width {
            row.push_str(word);
            rendered += 1;

            if row.chars().count() + 1 <= width {
                row.push(' ');
            }
        } else {
            // Pad the committed line with trailing spaces to exactly width.
            for _ in row.chars().count()..width {
                row.push(' ');
            }
            commit_row(&mut grid, line, &row);
            row.clear();
            line += 1;

            if max_lines > 0 && line > max_lines {
                break;
            }

            grid.grow_down(1);

            row.push_str(word);
            rendered += 1;

            if row.chars().count() + 1 <= width {
                row.push(' ');
            }
        }
    }

    if !row.is_empty() {
        commit_row(&mut grid, line, &row);
    }

    if ellipsis && rendered < words.len() {
        ellipsize_line(&mut grid, max_lines, width);
    }

    grid
}

/// Break-word wrap: characters packed left-to-right, breaking strictly at
/// the `width`-th column regardless of word boundaries.
///
/// A space that would land in the very first column of a new line is
/// absorbed rather than rendered, so a hard break never produces a leading
/// space. Spaces elsewhere pass through untouched.
///
/// # Panics
///
/// Panics if ellipsis truncation triggers with `width` below 4; the `...`
/// marker needs room for at least one content character.
pub fn wrap_chars(text: &str, width: usize, max_lines: usize, ellipsis: bool) -> Grid {
    let chars: Vec<char> = text.chars().collect();
    let size = chars.len();

    let mut grid = Grid::new(width, 1);
    let mut line = 1;
    let mut index = 0;
    let mut offset = 0;

    for i in 1..=size {
        let ch = chars[index];
        let mut x = (i - offset) % width;

        if x == 1 && ch == ' ' {
            offset += 1;
            index += 1;
            continue;
        }

        if x == 0 {
            x = width;
        }

        grid.place(x, line, ch);

        if (i - offset) % width == 0 {
            line += 1;

            if max_lines > 0 && line > max_lines {
                if ellipsis && i < size {
                    ellipsize_line(&mut grid, max_lines, width);
                }
                break;
            }

            if i < size {
                grid.grow_down(1);
            }
        }

        index += 1;
    }

    grid
}

/// Writes `row` into the grid at the given line, one cell per character.
fn commit_row(grid: &mut Grid, line: usize, row: &str) {
    for (i, ch) in row.chars().enumerate() {
        grid.place(i + 1, line, ch);
    }
}

/// Replaces the tail of `line` with the `...` marker.
///
/// Strips trailing spaces, drops final characters until the marker fits
/// within `width`, appends it, and overwrites exactly `width` cells of the
/// stored line (space-padded on the right if the result is shorter).
///
/// # Panics
///
/// Panics if `width` is below 4: the marker plus one content character
/// cannot fit, and the shrink loop would never terminate. Callers guarantee
/// that `line` is within the grid.
fn ellipsize_line(grid: &mut Grid, line: usize, width: usize) {
    assert!(width >= 4, "ellipsis needs a width of at least 4, got {width}");

    let raw: String = grid.row(line).iter().collect();
    let mut kept: Vec<char> = raw.trim_end_matches(' ').chars().collect();

    while kept.len() + 3 > width {
        kept.pop();
    }

    let mut replaced: String = kept.into_iter().collect();
    replaced.push_str("...");

    let mut chars = replaced.chars();
    for x in 1..=width {
        grid.place(x, line, chars.next().unwrap_or(' '));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn single_line_matches_text() {
        let grid = single_line("Hello World!", 1);
        assert_eq!(grid.size(), (12, 1));
        assert_eq!(grid.serialize(), "Hello World!");
    }

    #[test]
    fn single_line_fixed_height_pads_rows() {
        let grid = single_line("Hi", 3);
        assert_eq!(grid.size(), (2, 3));
        assert_eq!(grid.serialize(), "Hi\n  \n  ");
    }

    #[test]
    fn single_line_empty_text_is_one_blank_cell() {
        let grid = single_line("", 1);
        assert_eq!(grid.size(), (1, 1));
        assert_eq!(grid.serialize(), " ");
    }

    #[test]
    fn wrap_words_greedy_packing() {
        let grid = wrap_words("a bb ccc dddddddddd eeee", 10, 0, false);
        assert_eq!(grid.serialize(), "a bb ccc  \ndddddddddd\neeee      ");
    }

    #[test]
    fn wrap_words_never_splits_fitting_words() {
        let grid = wrap_words("alpha beta gamma", 6, 0, false);
        assert_eq!(grid.serialize(), "alpha \nbeta  \ngamma ");
    }

    #[test]
    fn wrap_words_falls_back_when_word_exceeds_width() {
        // "characters" is 10 chars, wider than 6: the whole text goes
        // through break-word mode.
        let grid = wrap_words("ab characters", 6, 0, false);
        assert_eq!(grid.serialize(), "ab cha\nracter\ns     ");
    }

    #[test]
    fn wrap_words_stops_at_max_lines() {
        let grid = wrap_words("aa bb cc dd", 5, 2, false);
        assert_eq!(grid.height(), 2);
        assert_eq!(grid.serialize(), "aa bb\ncc dd");
    }

    #[test]
    fn wrap_words_ellipsis_on_cut_content() {
        let grid = wrap_words("aaa bbb ccc ddd", 10, 1, true);
        assert_eq!(grid.size(), (10, 1));
        assert_eq!(grid.serialize(), "aaa bbb...");
    }

    #[test]
    fn wrap_words_no_ellipsis_when_everything_fits() {
        let grid = wrap_words("aaa bbb", 10, 1, true);
        assert_eq!(grid.serialize(), "aaa bbb   ");
    }

    #[test]
    fn wrap_chars_breaks_at_column_limit() {
        let grid = wrap_chars("abcdefgh", 3, 0, false);
        assert_eq!(grid.serialize(), "abc\ndef\ngh ");
    }

    #[test]
    fn wrap_chars_absorbs_space_at_line_start() {
        let grid = wrap_chars("abc de", 3, 0, false);
        assert_eq!(grid.serialize(), "abc\nde ");
    }

    #[test]
    fn wrap_chars_keeps_mid_line_spaces() {
        let grid = wrap_chars("a  b", 5, 0, false);
        assert_eq!(grid.serialize(), "a  b ");
    }

    #[test]
    fn wrap_chars_ellipsis_truncation_arithmetic() {
        // Eleven chars in a 5x2 box: "fghij" is cut at 'j', the last line
        // keeps two chars plus the three-char marker.
        let grid = wrap_chars("abcdefghijk", 5, 2, true);
        assert_eq!(grid.size(), (5, 2));
        assert_eq!(grid.serialize(), "abcde\nfg...");
    }

    #[test]
    #[should_panic(expected = "ellipsis needs a width of at least 4")]
    fn wrap_words_rejects_ellipsis_below_marker_width() {
        let _ = wrap_words("aa bb", 2, 1, true);
    }

    #[test]
    #[should_panic(expected = "ellipsis needs a width of at least 4")]
    fn wrap_chars_rejects_ellipsis_below_marker_width() {
        let _ = wrap_chars("abcdef", 2, 1, true);
    }

    #[test]
    fn wrap_chars_no_ellipsis_when_content_exactly_fits() {
        let grid = wrap_chars("abcdefghij", 5, 2, true);
        assert_eq!(grid.serialize(), "abcde\nfghij");
    }

    #[test]
    fn layout_textbox_auto_width_ignores_wrapping() {
        let grid = layout_textbox("Hello World!", 0, 0, 0, false, true);
        assert_eq!(grid.serialize(), "Hello World!");
    }

    #[test]
    fn layout_textbox_auto_width_fixed_height() {
        let grid = layout_textbox("abc", 0, 2, 0, false, false);
        assert_eq!(grid.size(), (3, 2));
        assert_eq!(grid.serialize(), "abc\n   ");
    }

    #[test]
    fn layout_textbox_fixed_both_pads_shortfall() {
        let grid = layout_textbox("ab", 5, 4, 0, false, false);
        assert_eq!(grid.size(), (5, 4));
        assert_eq!(grid.serialize(), "ab   \n     \n     \n     ");
    }

    #[test]
    fn layout_textbox_fixed_both_defaults_max_lines_to_height() {
        let grid = layout_textbox("abcdefghijklmno", 5, 2, 0, false, false);
        assert_eq!(grid.size(), (5, 2));
        assert_eq!(grid.serialize(), "abcde\nfghij");
    }

    #[test]
    fn layout_textbox_narrow_width_disables_ellipsis() {
        let grid = layout_textbox("abcdefgh", 3, 2, 0, true, false);
        // Width 3 < 4: no marker, plain truncation at max lines.
        assert_eq!(grid.serialize(), "abc\ndef");
    }

    #[test]
    fn layout_textbox_fixed_width_auto_height_grows() {
        let grid = layout_textbox("abcdefghij", 4, 0, 0, false, false);
        assert_eq!(grid.size(), (4, 3));
        assert_eq!(grid.serialize(), "abcd\nefgh\nij  ");
    }
}
