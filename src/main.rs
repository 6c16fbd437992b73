use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::{Parser, ValueEnum};
use gym_snake::action::Action;
use gym_snake::config::{DEFAULT_MAX_EPISODE_STEPS, DEFAULT_TICK_INTERVAL_MS, EnvConfig};
use gym_snake::env::SnakeEnv;
use gym_snake::input::{Command, poll_command};
use gym_snake::renderer::{self, RenderMode};
use gym_snake::terminal_runtime::{TerminalSession, install_panic_hook};
use gym_snake::ui::hud::HudInfo;
use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use simplelog::{Config, LevelFilter, WriteLogger};

/// Frames the final board stays up before `watch` starts the next episode.
const WATCH_EPISODE_OVER_FRAMES: u32 = 45;

#[derive(Debug, Clone, Copy, Eq, PartialEq, ValueEnum)]
enum Mode {
    /// Steer the snake with the keyboard.
    Play,
    /// Watch a random agent play, drawn per `--render-mode`.
    Watch,
    /// Run random agents headless and print one JSON summary per episode.
    Train,
}

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    #[arg(long, value_enum, default_value_t = Mode::Watch)]
    mode: Mode,

    /// Frame production for watch mode: human paces to 30 fps, test draws
    /// unpaced, train draws nothing and runs headless.
    #[arg(long, value_enum, default_value_t = RenderMode::Human)]
    render_mode: RenderMode,

    /// JSON environment config; flags below override its values.
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long)]
    width: Option<u16>,

    #[arg(long)]
    height: Option<u16>,

    /// Initial snake length; must be smaller than the grid width.
    #[arg(long)]
    snake_size: Option<u16>,

    #[arg(long)]
    seed: Option<u64>,

    /// Episodes to run in train mode.
    #[arg(long, default_value_t = 10)]
    episodes: u64,

    /// Step cap per episode in train mode.
    #[arg(long, default_value_t = DEFAULT_MAX_EPISODE_STEPS)]
    max_steps: u64,

    /// Milliseconds per snake move in play mode.
    #[arg(long, default_value_t = DEFAULT_TICK_INTERVAL_MS)]
    tick_ms: u64,

    /// Log destination for the rendered modes; train mode logs to stderr.
    #[arg(long, default_value = "gym-snake.log")]
    log_file: PathBuf,

    #[arg(long, default_value_t = LevelFilter::Info)]
    log_level: LevelFilter,
}

#[derive(Debug, Serialize)]
struct EpisodeSummary {
    episode: u64,
    steps: u64,
    apples: u32,
    total_reward: i64,
    length: usize,
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();
    let render_mode = render_mode_for(cli.mode, cli.render_mode);
    init_logging(&cli, render_mode)?;

    let config = resolve_config(&cli)?;
    info!("starting {:?} mode ({render_mode:?} rendering) with {config:?}", cli.mode);

    if !render_mode.draws() {
        return run_headless(&cli, config);
    }
    match cli.mode {
        Mode::Play => run_play(config, Duration::from_millis(cli.tick_ms)),
        Mode::Watch | Mode::Train => run_watch(config, render_mode),
    }
}

/// Train mode never draws and play mode is always paced; only watch mode
/// honours the requested render mode.
fn render_mode_for(mode: Mode, requested: RenderMode) -> RenderMode {
    match mode {
        Mode::Play => RenderMode::Human,
        Mode::Watch => requested,
        Mode::Train => RenderMode::Train,
    }
}

/// Headless runs log to stderr; rendered runs own the terminal and log to a file.
fn init_logging(cli: &Cli, render_mode: RenderMode) -> io::Result<()> {
    let result = if render_mode.draws() {
        WriteLogger::init(
            cli.log_level,
            Config::default(),
            File::create(&cli.log_file)?,
        )
    } else {
        WriteLogger::init(cli.log_level, Config::default(), io::stderr())
    };
    result.map_err(io::Error::other)
}

fn resolve_config(cli: &Cli) -> io::Result<EnvConfig> {
    let mut config = match &cli.config {
        Some(path) => EnvConfig::load(path).map_err(invalid_input)?,
        None => EnvConfig::default(),
    };

    if let Some(width) = cli.width {
        config.width = width;
    }
    if let Some(height) = cli.height {
        config.height = height;
    }
    if let Some(snake_size) = cli.snake_size {
        config.snake_size = snake_size;
    }
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }

    config.validate().map_err(invalid_input)?;
    Ok(config)
}

fn invalid_input(error: gym_snake::ConfigError) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidInput, error)
}

/// Agent randomness is kept apart from the environment's so a seeded
/// environment replays the same games for the same actions.
fn agent_rng(config: &EnvConfig) -> StdRng {
    match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(1)),
        None => StdRng::from_entropy(),
    }
}

fn random_action(rng: &mut StdRng) -> i64 {
    rng.gen_range(0..Action::COUNT as i64)
}

fn run_headless(cli: &Cli, config: EnvConfig) -> io::Result<()> {
    let mut env = SnakeEnv::new(config).map_err(invalid_input)?;
    let mut agent = agent_rng(&config);
    let mut stdout = io::stdout().lock();

    for episode in 1..=cli.episodes {
        env.reset();
        while env.stats().steps < cli.max_steps {
            match env.step(random_action(&mut agent)) {
                Some(observation) if !observation.done => {}
                _ => break,
            }
        }

        let stats = env.stats();
        let summary = EpisodeSummary {
            episode,
            steps: stats.steps,
            apples: stats.apples,
            total_reward: stats.total_reward,
            length: stats.length,
        };
        let line = serde_json::to_string(&summary).map_err(io::Error::other)?;
        writeln!(stdout, "{line}")?;
    }

    info!("finished {} episodes", cli.episodes);
    Ok(())
}

fn run_watch(config: EnvConfig, render_mode: RenderMode) -> io::Result<()> {
    let mut env = SnakeEnv::new(config).map_err(invalid_input)?;
    let mut agent = agent_rng(&config);
    let mut episode = 1;
    let mut frames_since_done = 0;

    install_panic_hook();
    let mut session = TerminalSession::enter()?;

    loop {
        let frame_start = Instant::now();
        draw(&mut session, &env, "watch", episode)?;

        if env.is_done() {
            frames_since_done += 1;
            if frames_since_done >= WATCH_EPISODE_OVER_FRAMES {
                info!("episode {episode} finished: {:?}", env.stats());
                env.reset();
                episode += 1;
                frames_since_done = 0;
            }
        } else {
            step_active(&mut env, random_action(&mut agent));
        }

        match poll_command(render_mode.frame_wait(frame_start.elapsed()))? {
            Some(Command::Quit) => break,
            Some(Command::Reset) => {
                env.reset();
                episode += 1;
                frames_since_done = 0;
            }
            Some(Command::Act(_)) | None => {}
        }
    }

    Ok(())
}

fn run_play(config: EnvConfig, tick_interval: Duration) -> io::Result<()> {
    let mut env = SnakeEnv::new(config).map_err(invalid_input)?;
    let mut episode = 1;
    let mut pending = Action::Straight;
    let mut last_tick = Instant::now();

    install_panic_hook();
    let mut session = TerminalSession::enter()?;

    loop {
        let frame_start = Instant::now();
        draw(&mut session, &env, "play", episode)?;

        let until_tick = tick_interval.saturating_sub(last_tick.elapsed());
        let until_frame = RenderMode::Human.frame_wait(frame_start.elapsed());
        match poll_command(until_tick.min(until_frame))? {
            Some(Command::Quit) => break,
            Some(Command::Reset) if env.is_done() => {
                info!("episode {episode} finished: {:?}", env.stats());
                env.reset();
                episode += 1;
                pending = Action::Straight;
                last_tick = Instant::now();
            }
            Some(Command::Act(action)) => pending = action,
            Some(Command::Reset) | None => {}
        }

        if !env.is_done() && last_tick.elapsed() >= tick_interval {
            step_active(&mut env, pending.index());
            pending = Action::Straight;
            last_tick = Instant::now();
        }
    }

    Ok(())
}

/// Steps an environment the caller has checked is still active.
fn step_active(env: &mut SnakeEnv, action: i64) {
    let observation = env.step(action);
    debug_assert!(observation.is_some(), "stepped an environment that had ended");
}

fn draw(
    session: &mut TerminalSession,
    env: &SnakeEnv,
    mode: &'static str,
    episode: u64,
) -> io::Result<()> {
    let hud_info = HudInfo {
        mode,
        episode,
        stats: env.stats(),
        status: env.status(),
    };

    session.draw(|frame| renderer::render(frame, env.game(), &hud_info))
}
