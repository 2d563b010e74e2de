/// A single screen coordinate. Rows grow downward, row 0 is the top line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub row: i32,
    pub col: i32,
}

impl Cell {
    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    pub fn shifted(&self, rows: i32, cols: i32) -> Self {
        Cell::new(self.row + rows, self.col + cols)
    }

    pub fn checked_shifted(&self, rows: i32, cols: i32) -> Option<Self> {
        Some(Cell::new(
            self.row.checked_add(rows)?,
            self.col.checked_add(cols)?,
        ))
    }
}

/// Terminal geometry, fixed for the whole session (LINES x COLS).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Screen {
    pub rows: i32,
    pub cols: i32,
}

impl Screen {
    pub fn new(rows: i32, cols: i32) -> Self {
        Self { rows, cols }
    }

    pub fn contains(&self, cell: Cell) -> bool {
        cell.row >= 0 && cell.col >= 0 && cell.row < self.rows && cell.col < self.cols
    }

    pub fn mid_row(&self) -> i32 {
        self.rows / 2
    }
}

/// Axis-aligned rectangle of cells anchored at its top-left origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shape {
    pub origin: Cell,
    pub height: i32,
    pub width: i32,
}

impl Shape {
    pub fn new(origin: Cell, height: i32, width: i32) -> Self {
        Self {
            origin,
            height,
            width,
        }
    }

    /// One past the bottom-right corner, or `None` when the rectangle runs
    /// beyond the `i32` coordinate space.
    pub fn end(&self) -> Option<Cell> {
        self.origin.checked_shifted(self.height, self.width)
    }

    /// Cells in row-major order: the first is the top-left corner,
    /// the last the bottom-right one. Coordinates that do not fit in `i32`
    /// are left out.
    pub fn cells(&self) -> Vec<Cell> {
        let mut cells = Vec::new();
        for dr in 0..self.height {
            let Some(row) = self.origin.row.checked_add(dr) else {
                break;
            };
            for dc in 0..self.width {
                let Some(col) = self.origin.col.checked_add(dc) else {
                    break;
                };
                cells.push(Cell::new(row, col));
            }
        }
        cells
    }

    /// The same rectangle moved by an offset, if it still fits in `i32`.
    pub fn checked_moved(&self, rows: i32, cols: i32) -> Option<Self> {
        let moved = Shape::new(self.origin.checked_shifted(rows, cols)?, self.height, self.width);
        moved.end().map(|_| moved)
    }
}
