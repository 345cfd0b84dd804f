//! The character grid and its composition operations.

use crate::BorderGlyphs;

/// A mutable rectangular buffer of Unicode code points.
///
/// Cells are stored in row-major order with an explicit `width`/`height`
/// pair. Both dimensions are at least 1 and only ever grow: a write whose
/// target falls outside the current bounds extends the grid rightward or
/// downward with blank cells before landing. This lets a variable-length
/// render extend its own canvas without a pre-computed final size.
///
/// Every bound or size violation is a caller bug, not a runtime condition,
/// and panics with a diagnostic. Callers are expected to validate sizes
/// before calling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    /// Cell storage in row-major order, `width * height` entries.
    cells: Vec<char>,
    width: usize,
    height: usize,
}

impl Grid {
    /// Creates a new grid with every cell set to the space character.
    ///
    /// # Panics
    ///
    /// Panics if `width` or `height` is less than 1.
    pub fn new(width: usize, height: usize) -> Self {
        assert!(width >= 1, "grid width must be at least 1, got {width}");
        assert!(height >= 1, "grid height must be at least 1, got {height}");

        Self {
            cells: vec![' '; width * height],
            width,
            height,
        }
    }

    /// Returns the grid width in columns.
    #[inline]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Returns the grid height in rows.
    #[inline]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Returns the grid dimensions as `(width, height)`.
    #[inline]
    pub const fn size(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Converts 1-indexed coordinates to a linear index. Bounds must already
    /// have been checked.
    #[inline]
    fn index(&self, col: usize, row: usize) -> usize {
        (row - 1) * self.width + (col - 1)
    }

    /// Returns the character at `(col, row)`, 1-indexed.
    ///
    /// # Panics
    ///
    /// Panics if `col` is outside `[1, width]` or `row` is outside
    /// `[1, height]`.
    pub fn get(&self, col: usize, row: usize) -> char {
        assert!(
            (1..=self.width).contains(&col),
            "column {col} out of bounds for grid of width {}",
            self.width
        );
        assert!(
            (1..=self.height).contains(&row),
            "row {row} out of bounds for grid of height {}",
            self.height
        );
        self.cells[self.index(col, row)]
    }

    /// Returns the cells of the given 1-indexed row.
    ///
    /// # Panics
    ///
    /// Panics if `row` is outside `[1, height]`.
    pub fn row(&self, row: usize) -> &[char] {
        assert!(
            (1..=self.height).contains(&row),
            "row {row} out of bounds for grid of height {}",
            self.height
        );
        let start = (row - 1) * self.width;
        &self.cells[start..start + self.width]
    }

    /// Returns the cells of the given 1-indexed column, top to bottom.
    ///
    /// # Panics
    ///
    /// Panics if `col` is outside `[1, width]`.
    pub fn column(&self, col: usize) -> Vec<char> {
        assert!(
            (1..=self.width).contains(&col),
            "column {col} out of bounds for grid of width {}",
            self.width
        );
        (1..=self.height)
            .map(|row| self.cells[self.index(col, row)])
            .collect()
    }

    /// Writes `ch` at `(x, y)`, 1-indexed, growing the grid if the target
    /// lies beyond the current right or bottom edge.
    ///
    /// Growth is monotonic: the grid never shrinks, and new cells are blank.
    ///
    /// # Panics
    ///
    /// Panics if `x` or `y` is 0.
    pub fn place(&mut self, x: usize, y: usize, ch: char) {
        assert!(x >= 1, "cannot place a cell at column 0");
        assert!(y >= 1, "cannot place a cell at row 0");

        if x > self.width {
            self.grow_right(x - self.width);
        }
        if y > self.height {
            self.grow_down(y - self.height);
        }

        let idx = self.index(x, y);
        self.cells[idx] = ch;
    }

    /// Appends `n` blank columns to the right edge. No-op when `n` is 0.
    ///
    /// Existing content is preserved; the row-major backing store is re-laid
    /// out for the new width.
    pub fn grow_right(&mut self, n: usize) {
        if n == 0 {
            return;
        }

        let new_width = self.width + n;
        let mut cells = vec![' '; new_width * self.height];

        for row in 0..self.height {
            let src = row * self.width;
            let dst = row * new_width;
            cells[dst..dst + self.width].copy_from_slice(&self.cells[src..src + self.width]);
        }

        self.cells = cells;
        self.width = new_width;
    }

    /// Appends `n` blank rows to the bottom edge. No-op when `n` is 0.
    pub fn grow_down(&mut self, n: usize) {
        if n == 0 {
            return;
        }

        self.height += n;
        self.cells.resize(self.width * self.height, ' ');
    }

    /// Copies every cell of `source` into this grid, with the source's
    /// top-left cell anchored at `(x, y)`.
    ///
    /// Traversal is row-major and each cell lands through [`Grid::place`],
    /// so the copy can grow this grid. Row boundaries of the source are
    /// preserved in the destination.
    ///
    /// # Panics
    ///
    /// Panics if `x` or `y` is 0.
    pub fn place_grid(&mut self, x: usize, y: usize, source: &Grid) {
        for row in 0..source.height {
            for col in 0..source.width {
                let ch = source.cells[row * source.width + col];
                self.place(x + col, y + row, ch);
            }
        }
    }

    /// Extracts a new grid from the sub-rectangle whose top-left cell is
    /// `(x, y)` and whose size is `width` x `height`.
    ///
    /// # Panics
    ///
    /// Panics if the rectangle is not fully contained in this grid, or if
    /// `width` or `height` is 0.
    pub fn slice(&self, x: usize, y: usize, width: usize, height: usize) -> Grid {
        assert!(width >= 1, "slice width must be at least 1");
        assert!(height >= 1, "slice height must be at least 1");
        assert!(
            x >= 1 && y >= 1 && x + width - 1 <= self.width && y + height - 1 <= self.height,
            "slice rectangle ({x}, {y}) {width}x{height} out of bounds for {}x{} grid",
            self.width,
            self.height
        );

        let mut out = Grid::new(width, height);
        for row in 0..height {
            for col in 0..width {
                let ch = self.cells[self.index(x + col, y + row)];
                out.cells[row * width + col] = ch;
            }
        }
        out
    }

    /// Overlays border glyphs on the ring at the given depth.
    ///
    /// Depth 1 is the outermost ring. Corner cells take the corner glyphs;
    /// the rest of the top and bottom rows take the horizontal fills; the
    /// left and right columns between them take the vertical fills. Interior
    /// cells are untouched.
    ///
    /// # Panics
    ///
    /// Panics if `depth` is 0.
    pub fn apply_border(&mut self, depth: usize, glyphs: &BorderGlyphs) {
        assert!(depth >= 1, "border depth must be at least 1");

        let top = depth;
        let bottom = (self.height + 1).saturating_sub(depth);
        let left = depth;
        let right = (self.width + 1).saturating_sub(depth);

        for y in 1..=self.height {
            for x in 1..=self.width {
                let ch = if y == top {
                    if x == left {
                        glyphs.top_left
                    } else if x == right {
                        glyphs.top_right
                    } else {
                        glyphs.top
                    }
                } else if y == bottom {
                    if x == left {
                        glyphs.bottom_left
                    } else if x == right {
                        glyphs.bottom_right
                    } else {
                        glyphs.bottom
                    }
                } else if x == left {
                    glyphs.left
                } else if x == right {
                    glyphs.right
                } else {
                    continue;
                };

                let idx = self.index(x, y);
                self.cells[idx] = ch;
            }
        }
    }

    /// Resets every cell to the space character.
    pub fn clear(&mut self) {
        self.cells.fill(' ');
    }

    /// Invokes `f` once per cell in row-major order and stores its return
    /// value back into the cell.
    ///
    /// The callback receives the 1-indexed column and row, the current
    /// character, and whether the cell is the last one of its row. This is
    /// the generalized map-in-place behind fill and transform operations.
    pub fn traverse<F>(&mut self, mut f: F)
    where
        F: FnMut(usize, usize, char, bool) -> char,
    {
        for row in 1..=self.height {
            for col in 1..=self.width {
                let idx = self.index(col, row);
                self.cells[idx] = f(col, row, self.cells[idx], col == self.width);
            }
        }
    }

    /// Produces the textual form of the grid: rows joined by a single
    /// newline, top to bottom, with no trailing newline after the last row.
    pub fn serialize(&self) -> String {
        let mut out = String::with_capacity((self.width + 1) * self.height);
        for row in 1..=self.height {
            if row > 1 {
                out.push('\n');
            }
            out.extend(self.row(row).iter());
        }
        out
    }
}
