//! Randomized invariant checks over seeds and action sequences.

use gym_snake::board::Cell;
use gym_snake::config::{COLLISION_REWARD, EnvConfig};
use gym_snake::env::SnakeEnv;
use proptest::prelude::*;

fn env_for(seed: u64, width: u16, height: u16, snake_size: u16) -> SnakeEnv {
    SnakeEnv::new(EnvConfig {
        width,
        height,
        snake_size,
        seed: Some(seed),
    })
    .expect("generated config is valid")
}

fn assert_apple_off_snake(env: &SnakeEnv) {
    let game = env.game();
    assert!(!game.snake().occupies(game.apple()));
    assert!(game.apple().is_within_bounds(game.bounds()));
}

proptest! {
    #[test]
    fn apple_never_lands_on_the_snake(
        seed in any::<u64>(),
        actions in prop::collection::vec(-1i64..4, 1..300),
    ) {
        let mut env = env_for(seed, 8, 6, 3);
        env.reset();
        assert_apple_off_snake(&env);

        for action in actions {
            if env.step(action).is_none() {
                env.reset();
            }
            if !env.is_done() {
                assert_apple_off_snake(&env);
            }
        }
    }

    #[test]
    fn length_grows_only_when_eating(
        seed in any::<u64>(),
        actions in prop::collection::vec(0i64..3, 1..300),
    ) {
        let mut env = env_for(seed, 10, 10, 5);
        env.reset();

        for action in actions {
            let before = env.game().snake().len();
            let Some(observation) = env.step(action) else {
                env.reset();
                continue;
            };
            let after = env.game().snake().len();

            match observation.reward {
                1 => prop_assert_eq!(after, before + 1),
                0 => prop_assert_eq!(after, before),
                reward => {
                    prop_assert_eq!(reward, COLLISION_REWARD);
                    prop_assert!(observation.done);
                    prop_assert_eq!(after, before);
                }
            }
        }
    }

    #[test]
    fn board_has_one_head_and_one_apple(
        seed in any::<u64>(),
        actions in prop::collection::vec(0i64..3, 1..200),
    ) {
        let mut env = env_for(seed, 7, 9, 4);
        let observation = env.reset();
        prop_assert_eq!(observation.board.count(Cell::Head), 1);

        for action in actions {
            let Some(observation) = env.step(action) else {
                break;
            };
            prop_assert_eq!(observation.board.count(Cell::Head), 1);
            prop_assert_eq!(observation.board.count(Cell::Apple), 1);
            prop_assert_eq!(
                observation.board.count(Cell::Body),
                env.game().snake().cells().count() - 1
            );
        }
    }

    #[test]
    fn seeded_envs_agree_step_for_step(
        seed in any::<u64>(),
        actions in prop::collection::vec(0i64..3, 1..100),
    ) {
        let mut left = env_for(seed, 10, 10, 5);
        let mut right = env_for(seed, 10, 10, 5);
        prop_assert_eq!(left.reset(), right.reset());

        for action in actions {
            prop_assert_eq!(left.step(action), right.step(action));
        }
    }
}
