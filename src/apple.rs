use rand::Rng;

use crate::config::GridSize;
use crate::snake::{Position, Snake};

/// Picks a uniformly random cell the snake does not cover.
///
/// Candidates are enumerated row by row, so a given random source always
/// yields the same cell for the same board. Returns `None` when the snake
/// covers the whole grid.
#[must_use]
pub fn spawn_position<R: Rng + ?Sized>(
    rng: &mut R,
    bounds: GridSize,
    snake: &Snake,
) -> Option<Position> {
    let mut candidates = Vec::with_capacity(bounds.total_cells());

    for y in 0..i32::from(bounds.height) {
        for x in 0..i32::from(bounds.width) {
            let position = Position::new(x, y);
            if !snake.occupies(position) {
                candidates.push(position);
            }
        }
    }

    if candidates.is_empty() {
        return None;
    }

    let index = rng.gen_range(0..candidates.len());
    Some(candidates[index])
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use crate::config::GridSize;
    use crate::snake::{Position, Snake};

    use super::spawn_position;

    #[test]
    fn apple_spawn_never_overlaps_snake() {
        let mut rng = StdRng::seed_from_u64(7);
        let snake = Snake::from_cells(vec![
            Position::new(0, 0),
            Position::new(1, 0),
            Position::new(2, 0),
        ]);
        let bounds = GridSize {
            width: 8,
            height: 6,
        };

        for _ in 0..100 {
            let apple = spawn_position(&mut rng, bounds, &snake).expect("grid has free cells");
            assert!(!snake.occupies(apple));
            assert!(apple.is_within_bounds(bounds));
        }
    }

    #[test]
    fn single_free_cell_is_always_chosen() {
        let mut rng = StdRng::seed_from_u64(11);
        let snake = Snake::from_cells(vec![
            Position::new(0, 0),
            Position::new(1, 0),
            Position::new(1, 1),
        ]);
        let bounds = GridSize {
            width: 2,
            height: 2,
        };

        assert_eq!(
            spawn_position(&mut rng, bounds, &snake),
            Some(Position::new(0, 1))
        );
    }

    #[test]
    fn full_grid_has_no_spawn_position() {
        let mut rng = StdRng::seed_from_u64(3);
        let snake = Snake::from_cells(vec![Position::new(0, 0), Position::new(1, 0)]);
        let bounds = GridSize {
            width: 2,
            height: 1,
        };

        assert_eq!(spawn_position(&mut rng, bounds, &snake), None);
    }
}
