use log::{debug, warn};
use rand::Rng;

use super::{grid::Grid, state::Position};

/// The single piece of food on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Food {
    position: Position,
}

impl Food {
    pub fn new(position: Position) -> Self {
        Self { position }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    /// Move the food to a random interior cell and return where it landed.
    ///
    /// `x` is drawn from `1..=width-2` and `y` from `1..=height-2`, so food never
    /// sits on the border ring. The snake body is not consulted: food may land
    /// under a segment. A grid narrower or shorter than 3 cells has no interior,
    /// in which case the food stays put.
    pub fn relocate<R: Rng + ?Sized>(&mut self, grid: &Grid, rng: &mut R) -> Position {
        if grid.width() < 3 || grid.height() < 3 {
            warn!(
                "No interior on a {}x{} grid, food stays at ({}, {})",
                grid.width(),
                grid.height(),
                self.position.x,
                self.position.y
            );
            return self.position;
        }

        let x = rng.gen_range(1..grid.width() as i32 - 1);
        let y = rng.gen_range(1..grid.height() as i32 - 1);
        self.position = Position::new(x, y);
        debug!("Food relocated to ({}, {})", x, y);
        self.position
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Direction, Snake};
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn test_relocate_stays_off_border() {
        let grid = Grid::new(30, 20);
        let mut rng = StdRng::seed_from_u64(7);
        let mut food = Food::new(Position::new(10, 10));

        for _ in 0..2_000 {
            let pos = food.relocate(&grid, &mut rng);
            assert!((1..=28).contains(&pos.x), "x out of range: {:?}", pos);
            assert!((1..=18).contains(&pos.y), "y out of range: {:?}", pos);
            assert!(!grid.is_border(pos));
            assert_eq!(food.position(), pos);
        }
    }

    #[test]
    fn test_relocate_covers_interior() {
        let grid = Grid::new(5, 4);
        let mut rng = StdRng::seed_from_u64(42);
        let mut food = Food::new(Position::new(1, 1));
        let mut seen = std::collections::HashSet::new();

        for _ in 0..500 {
            seen.insert(food.relocate(&grid, &mut rng));
        }

        // Interior is 3 columns by 2 rows
        assert_eq!(seen.len(), 6);
    }

    #[test]
    fn test_smallest_grid_has_one_spot() {
        let grid = Grid::new(3, 3);
        let mut rng = StdRng::seed_from_u64(1);
        let mut food = Food::new(Position::new(0, 0));

        assert_eq!(food.relocate(&grid, &mut rng), Position::new(1, 1));
    }

    #[test]
    fn test_relocate_without_interior_keeps_position() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut food = Food::new(Position::new(0, 1));

        for grid in [Grid::new(2, 3), Grid::new(3, 2), Grid::new(1, 1)] {
            assert_eq!(food.relocate(&grid, &mut rng), Position::new(0, 1));
        }
    }

    #[test]
    fn test_relocate_may_land_under_the_snake() {
        // Interior of a 4x3 grid is (1,1) and (2,1), both covered by the body
        let grid = Grid::new(4, 3);
        let snake = Snake::new(Position::new(1, 1), Direction::Left, 2);
        let mut rng = StdRng::seed_from_u64(9);
        let mut food = Food::new(Position::new(3, 2));

        for _ in 0..50 {
            let pos = food.relocate(&grid, &mut rng);
            assert!(snake.occupies(pos), "food left the body at {:?}", pos);
        }
    }
}
