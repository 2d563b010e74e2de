use crate::entity::{Cell, Shape};
use crate::error::{GameError, Result};

/// Vertical motion state of the bird.
///
/// After a flap the bird coasts for exactly one tick before gravity takes
/// over again, which gives the flap its floaty feel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionState {
    Idle,
    JustFlapped,
    Coasting,
    Falling,
    Collided,
}

#[derive(Debug, Clone)]
pub struct Bird {
    pub glyph: char,
    shape: Shape,
    cells: Vec<Cell>,
    state: MotionState,
    ticks_since_flap: u32,
}

impl Bird {
    /// Builds a `height` x `width` bird whose top-left corner sits at `origin`.
    pub fn build(glyph: char, height: i32, width: i32, origin: Cell) -> Result<Self> {
        if height <= 0 || width <= 0 {
            return Err(GameError::InvalidBirdSize { height, width });
        }

        let shape = Shape::new(origin, height, width);
        if shape.end().is_none() {
            return Err(GameError::BirdOutOfRange {
                row: origin.row,
                col: origin.col,
                height,
                width,
            });
        }
        Ok(Self {
            glyph,
            shape,
            cells: shape.cells(),
            state: MotionState::Idle,
            ticks_since_flap: 0,
        })
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn origin(&self) -> Cell {
        self.shape.origin
    }

    pub fn height(&self) -> i32 {
        self.shape.height
    }

    pub fn width(&self) -> i32 {
        self.shape.width
    }

    pub fn state(&self) -> MotionState {
        self.state
    }

    pub fn ticks_since_flap(&self) -> u32 {
        self.ticks_since_flap
    }

    /// Moves the bird up by `lift` rows. Returns the cells it vacated so the
    /// caller can erase them before drawing the new position.
    pub fn flap(&mut self, lift: i32) -> Result<Vec<Cell>> {
        let lift = lift.checked_neg().ok_or_else(|| self.out_of_range())?;
        let vacated = self.translate(lift)?;
        self.ticks_since_flap = 0;
        self.state = MotionState::JustFlapped;
        Ok(vacated)
    }

    /// Moves the bird down by `drop` rows. Returns the vacated cells.
    pub fn fall(&mut self, drop: i32) -> Result<Vec<Cell>> {
        let vacated = self.translate(drop)?;
        self.ticks_since_flap += 1;
        self.state = MotionState::Falling;
        Ok(vacated)
    }

    pub fn coast(&mut self) {
        self.ticks_since_flap += 1;
        self.state = MotionState::Coasting;
    }

    /// Advances the motion state machine by one tick.
    ///
    /// Returns the vacated cells when the bird moved, `None` when it held
    /// still (coasting or collided).
    pub fn step(&mut self, flap_requested: bool, lift: i32, drop: i32) -> Result<Option<Vec<Cell>>> {
        if self.state == MotionState::Collided {
            return Ok(None);
        }
        if flap_requested {
            return self.flap(lift).map(Some);
        }

        match self.state {
            MotionState::Idle | MotionState::JustFlapped => {
                self.coast();
                Ok(None)
            }
            MotionState::Coasting | MotionState::Falling => self.fall(drop).map(Some),
            MotionState::Collided => Ok(None),
        }
    }

    pub fn mark_collided(&mut self) {
        self.state = MotionState::Collided;
    }

    pub fn is_collided(&self) -> bool {
        self.state == MotionState::Collided
    }

    // Shape and cells are replaced together so the cell set never holds a
    // partially shifted bird.
    fn translate(&mut self, rows: i32) -> Result<Vec<Cell>> {
        self.shape = self
            .shape
            .checked_moved(rows, 0)
            .ok_or_else(|| self.out_of_range())?;
        Ok(std::mem::replace(&mut self.cells, self.shape.cells()))
    }

    fn out_of_range(&self) -> GameError {
        GameError::BirdOutOfRange {
            row: self.shape.origin.row,
            col: self.shape.origin.col,
            height: self.shape.height,
            width: self.shape.width,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows_of(bird: &Bird) -> (i32, i32) {
        let min = bird.cells().iter().map(|c| c.row).min().unwrap();
        let max = bird.cells().iter().map(|c| c.row).max().unwrap();
        (min, max + 1)
    }

    #[test]
    fn test_build_rejects_empty_dimensions() {
        assert!(matches!(
            Bird::build('#', 0, 5, Cell::new(10, 10)),
            Err(GameError::InvalidBirdSize { height: 0, width: 5 })
        ));
        assert!(Bird::build('#', 3, -1, Cell::new(10, 10)).is_err());
    }

    #[test]
    fn test_flap_coast_fall_scenario() {
        let mut bird = Bird::build('#', 3, 5, Cell::new(10, 10)).unwrap();

        let vacated = bird.flap(3).unwrap();
        assert_eq!(vacated.len(), 15);
        assert_eq!(rows_of(&bird), (7, 10));
        assert!(bird.cells().iter().all(|c| (10..15).contains(&c.col)));

        bird.coast();
        assert_eq!(rows_of(&bird), (7, 10));

        bird.fall(2).unwrap();
        assert_eq!(rows_of(&bird), (9, 12));
    }

    #[test]
    fn test_step_coasts_once_after_flap() {
        let mut bird = Bird::build('#', 1, 1, Cell::new(10, 10)).unwrap();

        assert!(bird.step(true, 3, 2).unwrap().is_some());
        assert_eq!(bird.state(), MotionState::JustFlapped);
        assert_eq!(bird.origin().row, 7);

        assert!(bird.step(false, 3, 2).unwrap().is_none());
        assert_eq!(bird.state(), MotionState::Coasting);
        assert_eq!(bird.origin().row, 7);

        bird.step(false, 3, 2).unwrap();
        assert_eq!(bird.state(), MotionState::Falling);
        assert_eq!(bird.origin().row, 9);

        bird.step(false, 3, 2).unwrap();
        assert_eq!(bird.origin().row, 11);
        assert_eq!(bird.ticks_since_flap(), 3);

        // A flap while falling resets the counter
        bird.step(true, 3, 2).unwrap();
        assert_eq!(bird.origin().row, 8);
        assert_eq!(bird.ticks_since_flap(), 0);
    }

    #[test]
    fn test_idle_bird_coasts_before_falling() {
        let mut bird = Bird::build('#', 2, 2, Cell::new(5, 5)).unwrap();
        assert_eq!(bird.state(), MotionState::Idle);

        bird.step(false, 3, 2).unwrap();
        assert_eq!(bird.origin().row, 5);
        bird.step(false, 3, 2).unwrap();
        assert_eq!(bird.origin().row, 7);
    }

    #[test]
    fn test_collided_bird_stops_moving() {
        let mut bird = Bird::build('#', 2, 2, Cell::new(5, 5)).unwrap();
        bird.mark_collided();

        assert!(bird.step(true, 3, 2).unwrap().is_none());
        assert!(bird.step(false, 3, 2).unwrap().is_none());
        assert_eq!(bird.origin(), Cell::new(5, 5));
        assert!(bird.is_collided());
    }

    #[test]
    fn test_build_rejects_rectangle_beyond_coordinate_space() {
        assert!(matches!(
            Bird::build('#', 2, 3, Cell::new(i32::MAX - 1, 10)),
            Err(GameError::BirdOutOfRange { height: 2, width: 3, .. })
        ));
        assert!(Bird::build('#', 1, 5, Cell::new(0, i32::MAX - 2)).is_err());
        assert!(Bird::build('#', 1, 1, Cell::new(i32::MAX - 1, 0)).is_ok());
    }

    #[test]
    fn test_motion_past_coordinate_space_fails_without_moving() {
        let mut bird = Bird::build('#', 1, 1, Cell::new(i32::MIN + 1, 0)).unwrap();

        assert!(matches!(bird.flap(3), Err(GameError::BirdOutOfRange { .. })));
        assert_eq!(bird.origin(), Cell::new(i32::MIN + 1, 0));
        assert_eq!(bird.cells(), &[Cell::new(i32::MIN + 1, 0)]);
        assert_eq!(bird.state(), MotionState::Idle);

        let mut bird = Bird::build('#', 2, 1, Cell::new(i32::MAX - 3, 0)).unwrap();
        assert!(bird.fall(2).is_err());
        assert!(bird.flap(i32::MIN).is_err());
        assert_eq!(bird.origin().row, i32::MAX - 3);
        assert_eq!(bird.cells().len(), 2);
    }
}
