use std::collections::BTreeMap;

use log::{debug, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use crate::action::Action;
use crate::board::Board;
use crate::config::{APPLE_REWARD, COLLISION_REWARD, ConfigError, EnvConfig};
use crate::game::{GameState, StepOutcome};

/// Auxiliary step information. Always empty; kept for the
/// `(board, reward, done, info)` shape agents expect.
pub type Info = BTreeMap<String, String>;

/// Result of a reset or an accepted step.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct Observation {
    pub board: Board,
    pub reward: i32,
    pub done: bool,
    pub info: Info,
}

/// Whether the environment accepts steps.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum EnvStatus {
    Active,
    Terminated,
}

/// Running totals for the current episode.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Default, Serialize)]
pub struct EpisodeStats {
    pub steps: u64,
    pub apples: u32,
    pub total_reward: i64,
    /// Snake segment count, pending growth included.
    pub length: usize,
}

impl EpisodeStats {
    fn starting(game: &GameState) -> Self {
        Self {
            length: game.snake().len(),
            ..Self::default()
        }
    }
}

/// Maps a step outcome to its reward. Termination outranks eating.
#[must_use]
pub fn reward_for(outcome: StepOutcome) -> i32 {
    if outcome.terminated {
        COLLISION_REWARD
    } else if outcome.ate_apple {
        APPLE_REWARD
    } else {
        0
    }
}

/// Step-based Snake environment with a three-action relative control scheme.
#[derive(Debug, Clone)]
pub struct SnakeEnv<R = StdRng> {
    config: EnvConfig,
    game: GameState,
    status: EnvStatus,
    stats: EpisodeStats,
    rng: R,
}

impl SnakeEnv<StdRng> {
    /// Creates an environment seeded from `config.seed`, or from entropy
    /// when no seed is set.
    pub fn new(config: EnvConfig) -> Result<Self, ConfigError> {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(config, rng)
    }
}

impl<R: Rng> SnakeEnv<R> {
    /// Creates an environment drawing all randomness from `rng`.
    pub fn with_rng(config: EnvConfig, mut rng: R) -> Result<Self, ConfigError> {
        let game = GameState::new(&mut rng, config.grid(), config.snake_size)?;
        Self::with_game(config, game, rng)
    }

    /// Creates an active environment around a prepared game. Later resets
    /// spawn from `config`, which is validated here.
    pub fn with_game(config: EnvConfig, game: GameState, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            stats: EpisodeStats::starting(&game),
            game,
            status: EnvStatus::Active,
            rng,
        })
    }

    /// Starts a fresh game.
    pub fn reset(&mut self) -> Observation {
        self.game = GameState::spawn(&mut self.rng, self.config.grid(), self.config.snake_size);
        self.status = EnvStatus::Active;
        self.stats = EpisodeStats::starting(&self.game);
        debug!(
            "reset: snake head at {:?}, apple at {:?}",
            self.game.snake().head(),
            self.game.apple()
        );

        self.observe(0, false)
    }

    /// Applies one action and advances the game.
    ///
    /// `0` turns right, `1` keeps the heading, `2` turns left; any other
    /// value keeps the heading. Returns `None` without touching the game
    /// once the episode has ended; call [`SnakeEnv::reset`] to continue.
    pub fn step(&mut self, action: i64) -> Option<Observation> {
        if self.status == EnvStatus::Terminated {
            warn!(
                "the environment has reached a terminal state and should be reset \
                 (by calling reset())"
            );
            return None;
        }

        let action = Action::from_index(action);
        let heading = self.game.heading().turned(action.turn());
        self.game.set_heading(heading);

        let outcome = self.game.step(&mut self.rng);
        let reward = reward_for(outcome);

        self.stats.steps += 1;
        self.stats.total_reward += i64::from(reward);
        if outcome.ate_apple {
            self.stats.apples += 1;
        }
        self.stats.length = self.game.snake().len();
        if outcome.terminated {
            self.status = EnvStatus::Terminated;
            debug!(
                "episode over after {} steps with {} apples",
                self.stats.steps, self.stats.apples
            );
        }

        Some(self.observe(reward, outcome.terminated))
    }

    #[must_use]
    pub fn game(&self) -> &GameState {
        &self.game
    }

    #[must_use]
    pub fn status(&self) -> EnvStatus {
        self.status
    }

    #[must_use]
    pub fn is_done(&self) -> bool {
        self.status == EnvStatus::Terminated
    }

    #[must_use]
    pub fn config(&self) -> &EnvConfig {
        &self.config
    }

    #[must_use]
    pub fn stats(&self) -> EpisodeStats {
        self.stats
    }

    fn observe(&self, reward: i32, done: bool) -> Observation {
        Observation {
            board: self.game.board(),
            reward,
            done,
            info: Info::new(),
        }
    }
}
