use crate::entity::{Cell, Screen};
use crate::error::{GameError, Result};

/// A pipe spans the full screen height over `[left, right)` except for the
/// gap rows `[gap_top, gap_bottom)` the bird has to fly through.
#[derive(Debug, Clone)]
pub struct Pipe {
    pub glyph: char,
    left: i32,
    right: i32,
    gap_top: i32,
    gap_bottom: i32,
    scan: (i32, i32),
    cells: Vec<Cell>,
}

impl Pipe {
    /// Builds a pipe covering columns `width.0..width.1`.
    ///
    /// With `validate` the pipe must fit on screen and have a well-formed gap.
    /// Auto-spawned pipes skip the check because they are placed relative to
    /// the previous pipe and may start beyond the right edge.
    pub fn build(
        screen: Screen,
        glyph: char,
        width: (i32, i32),
        gap_top: i32,
        gap_bottom: i32,
        validate: bool,
    ) -> Result<Self> {
        let (left, right) = width;
        if validate {
            if left < 0 {
                return Err(GameError::PipeLeftEdge { left });
            }
            if right > screen.cols {
                return Err(GameError::PipeRightEdge {
                    right,
                    cols: screen.cols,
                });
            }
            if gap_top < 0 {
                return Err(GameError::GapTop { top: gap_top });
            }
            if gap_bottom > screen.rows {
                return Err(GameError::GapBottom {
                    bottom: gap_bottom,
                    rows: screen.rows,
                });
            }
            if gap_top >= gap_bottom {
                return Err(GameError::GapInverted {
                    top: gap_top,
                    bottom: gap_bottom,
                });
            }
        }

        let scan = (0, screen.rows);
        let mut cells = Vec::new();
        for col in left..right {
            for row in scan.0..scan.1 {
                // Leave the opening empty
                if row < gap_top || row >= gap_bottom {
                    cells.push(Cell::new(row, col));
                }
            }
        }

        Ok(Self {
            glyph,
            left,
            right,
            gap_top,
            gap_bottom,
            scan,
            cells,
        })
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn left(&self) -> i32 {
        self.left
    }

    pub fn right(&self) -> i32 {
        self.right
    }

    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    pub fn gap_top(&self) -> i32 {
        self.gap_top
    }

    pub fn gap_bottom(&self) -> i32 {
        self.gap_bottom
    }

    pub fn scan_range(&self) -> (i32, i32) {
        self.scan
    }

    /// Moves the pipe `amount` columns to the left (right when negative).
    /// Returns the previous cells so they can be erased.
    pub fn shift(&mut self, amount: i32) -> Vec<Cell> {
        self.left -= amount;
        self.right -= amount;
        let moved = self.cells.iter().map(|c| c.shifted(0, -amount)).collect();
        std::mem::replace(&mut self.cells, moved)
    }

    /// Drops the leading columns named by `columns`, counted from the current
    /// left edge. The indices must read `0, 1, 2, ...` and may not exceed the
    /// pipe width. Returns the removed cells.
    pub fn trim_leading_columns(&mut self, columns: &[i32]) -> Result<Vec<Cell>> {
        let contiguous = columns
            .iter()
            .enumerate()
            .all(|(i, &column)| column == i as i32);
        if !contiguous || columns.len() as i32 > self.width() {
            return Err(GameError::InvalidTrimRange {
                columns: columns.to_vec(),
                width: self.width(),
            });
        }
        if columns.is_empty() {
            return Ok(Vec::new());
        }

        let cutoff = self.left + columns.len() as i32;
        let (removed, kept): (Vec<Cell>, Vec<Cell>) =
            self.cells.iter().copied().partition(|c| c.col < cutoff);
        self.cells = kept;
        self.left = cutoff;
        Ok(removed)
    }

    /// True once the rightmost column has scrolled past column 0.
    pub fn is_fully_offscreen(&self) -> bool {
        self.right - 1 < 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn screen() -> Screen {
        Screen::new(30, 100)
    }

    #[test]
    fn test_build_scenario_100x30() {
        let pipe = Pipe::build(screen(), '&', (40, 50), 10, 20, true).unwrap();

        assert!(pipe.cells().contains(&Cell::new(5, 45)));
        assert!(pipe.cells().contains(&Cell::new(25, 45)));
        for row in 10..20 {
            for col in 40..50 {
                assert!(!pipe.cells().contains(&Cell::new(row, col)));
            }
        }
        assert_eq!(pipe.cells().len(), 10 * 20);
    }

    #[test]
    fn test_build_validation() {
        assert!(matches!(
            Pipe::build(screen(), '&', (-1, 5), 10, 20, true),
            Err(GameError::PipeLeftEdge { left: -1 })
        ));
        assert!(matches!(
            Pipe::build(screen(), '&', (95, 101), 10, 20, true),
            Err(GameError::PipeRightEdge { right: 101, cols: 100 })
        ));
        assert!(matches!(
            Pipe::build(screen(), '&', (40, 50), -2, 20, true),
            Err(GameError::GapTop { top: -2 })
        ));
        assert!(matches!(
            Pipe::build(screen(), '&', (40, 50), 10, 31, true),
            Err(GameError::GapBottom { bottom: 31, rows: 30 })
        ));
        assert!(matches!(
            Pipe::build(screen(), '&', (40, 50), 20, 20, true),
            Err(GameError::GapInverted { top: 20, bottom: 20 })
        ));
    }

    #[test]
    fn test_unvalidated_build_allows_offscreen_span() {
        let pipe = Pipe::build(screen(), '&', (110, 120), 10, 20, false).unwrap();
        assert_eq!(pipe.left(), 110);
        assert_eq!(pipe.cells().len(), 10 * 20);
    }

    #[test]
    fn test_shift_moves_columns_only() {
        let mut pipe = Pipe::build(screen(), '&', (40, 50), 10, 20, true).unwrap();
        let before = pipe.cells().to_vec();

        let vacated = pipe.shift(3);

        assert_eq!(vacated, before);
        assert_eq!((pipe.left(), pipe.right()), (37, 47));
        assert!(pipe.cells().iter().all(|c| c.row < 10 || c.row >= 20));
        assert!(pipe.cells().contains(&Cell::new(0, 37)));
        assert!(!pipe.cells().iter().any(|c| c.col >= 47));
    }

    #[test]
    fn test_trim_leading_columns() {
        let mut pipe = Pipe::build(screen(), '&', (0, 10), 10, 20, true).unwrap();
        pipe.shift(3);
        assert_eq!(pipe.left(), -3);

        let removed = pipe.trim_leading_columns(&[0, 1, 2]).unwrap();

        assert_eq!(removed.len(), 3 * 20);
        assert!(removed.iter().all(|c| (-3..0).contains(&c.col)));
        assert!(pipe.cells().iter().all(|c| c.col >= 0));
        assert_eq!(pipe.left(), 0);
        assert_eq!(pipe.cells().len(), 7 * 20);
    }

    #[test]
    fn test_trim_rejects_malformed_ranges() {
        let mut pipe = Pipe::build(screen(), '&', (0, 10), 10, 20, true).unwrap();
        let before = pipe.cells().to_vec();

        assert!(matches!(
            pipe.trim_leading_columns(&[1, 2, 3]),
            Err(GameError::InvalidTrimRange { .. })
        ));
        assert!(pipe.trim_leading_columns(&[0, 2]).is_err());
        assert!(pipe.trim_leading_columns(&(0..11).collect::<Vec<_>>()).is_err());

        // Nothing changed
        assert_eq!(pipe.cells(), before.as_slice());
        assert!(pipe.trim_leading_columns(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_offscreen_detection() {
        let mut pipe = Pipe::build(screen(), '&', (0, 3), 10, 20, true).unwrap();
        assert!(!pipe.is_fully_offscreen());

        pipe.shift(2);
        assert!(!pipe.is_fully_offscreen());

        pipe.shift(1);
        assert!(pipe.is_fully_offscreen());
    }
}
