//! Snake on a toroidal grid, driven one discrete step at a time.
//!
//! [`game::GameState`] holds the simulation; [`env::SnakeEnv`] wraps it with
//! a three-action relative control scheme, rewards and episode termination.
//! The terminal renderer and keyboard input serve the `gym-snake` binary.

pub mod action;
pub mod apple;
pub mod board;
pub mod config;
pub mod env;
pub mod game;
pub mod input;
pub mod renderer;
pub mod snake;
pub mod terminal_runtime;
pub mod ui;

pub use action::{Action, Heading};
pub use board::{Board, Cell};
pub use config::{ConfigError, EnvConfig, GridSize};
pub use env::{EnvStatus, Observation, SnakeEnv};
pub use game::{GameState, StepOutcome};
pub use snake::{Position, Segment, Snake};
