use rand::Rng;

use crate::action::Heading;
use crate::apple::spawn_position;
use crate::board::{Board, Cell};
use crate::config::{ConfigError, GridSize};
use crate::snake::{Position, Segment, Snake};

/// What a single simulation step did.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Default)]
pub struct StepOutcome {
    pub terminated: bool,
    pub ate_apple: bool,
}

/// Authoritative simulation state for one game.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct GameState {
    snake: Snake,
    heading: Heading,
    apple: Position,
    bounds: GridSize,
}

impl GameState {
    /// Spawns a game after checking that the snake fits the grid.
    pub fn new<R: Rng + ?Sized>(
        rng: &mut R,
        bounds: GridSize,
        snake_size: u16,
    ) -> Result<Self, ConfigError> {
        bounds.check_snake_fits(snake_size)?;
        Ok(Self::spawn(rng, bounds, snake_size))
    }

    /// Spawns a game from a size already accepted by
    /// [`GridSize::check_snake_fits`].
    ///
    /// The snake lies horizontally on row `height / 2`, tail at a random
    /// x in `0..width - snake_size`, heading right. The apple goes on a
    /// random free cell.
    #[must_use]
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, bounds: GridSize, snake_size: u16) -> Self {
        debug_assert!(bounds.check_snake_fits(snake_size).is_ok());

        let x = rng.gen_range(0..i32::from(bounds.width) - i32::from(snake_size));
        let y = i32::from(bounds.height / 2);
        let snake = Snake::horizontal(Position::new(x, y), snake_size);
        let apple = spawn_position(rng, bounds, &snake)
            .expect("a snake narrower than the grid leaves free cells");

        Self {
            snake,
            heading: Heading::Right,
            apple,
            bounds,
        }
    }

    /// Assembles a game from a prepared layout.
    #[must_use]
    pub fn from_parts(bounds: GridSize, snake: Snake, heading: Heading, apple: Position) -> Self {
        Self {
            snake,
            heading,
            apple,
            bounds,
        }
    }

    /// Builds the board snapshot: body, then head, then apple, each
    /// overwriting what came before.
    #[must_use]
    pub fn board(&self) -> Board {
        let mut board = Board::empty(self.bounds);

        let body_len = self.snake.len().saturating_sub(1);
        for segment in self.snake.segments().take(body_len) {
            if let Segment::Placed(position) = segment {
                board.set(*position, Cell::Body);
            }
        }
        board.set(self.snake.head(), Cell::Head);
        board.set(self.apple, Cell::Apple);

        board
    }

    /// Advances the game by one move along the current heading.
    ///
    /// Collision is checked against the body before the tail moves, so
    /// entering the cell the tail is about to leave ends the game. A
    /// colliding step leaves the state untouched.
    pub fn step<R: Rng + ?Sized>(&mut self, rng: &mut R) -> StepOutcome {
        let new_head = self.snake.head().stepped(self.heading).wrapped(self.bounds);
        if self.snake.occupies(new_head) {
            return StepOutcome {
                terminated: true,
                ate_apple: false,
            };
        }

        self.snake.advance(new_head);
        if new_head != self.apple {
            return StepOutcome::default();
        }

        let respawned = spawn_position(rng, self.bounds, &self.snake);
        self.snake.grow();
        match respawned {
            Some(apple) => {
                self.apple = apple;
                StepOutcome {
                    terminated: false,
                    ate_apple: true,
                }
            }
            // The snake covers every cell: nothing left to play for.
            None => StepOutcome {
                terminated: true,
                ate_apple: true,
            },
        }
    }

    #[must_use]
    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    #[must_use]
    pub fn apple(&self) -> Position {
        self.apple
    }

    #[must_use]
    pub fn heading(&self) -> Heading {
        self.heading
    }

    pub fn set_heading(&mut self, heading: Heading) {
        self.heading = heading;
    }

    #[must_use]
    pub fn bounds(&self) -> GridSize {
        self.bounds
    }
}
