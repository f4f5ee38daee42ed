use std::io;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use q_connect_four::ai::{PolicyConfig, QLearningAgent};
use q_connect_four::checkpoint::{load_store, TableFile};
use q_connect_four::config::AppConfig;
use q_connect_four::game::Player;
use q_connect_four::logging::init_logging;
use q_connect_four::session::{NoopObserver, SelfPlayTally, Session, SessionObserver};
use q_connect_four::ui::{choose_mode, ConsoleView, GameMode, HumanAgent};

/// Play Connect Four against a Q-learning opponent.
#[derive(Parser)]
#[command(name = "q-connect-four", about = "Connect Four with a learning AI")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Path to TOML configuration file
    #[arg(long, global = true, default_value = "config.toml")]
    config: PathBuf,

    /// Override the value table file
    #[arg(long, global = true)]
    table: Option<PathBuf>,

    /// Skip the pause before automated moves
    #[arg(long, global = true)]
    no_delay: bool,

    /// Seed the automated players for reproducible games
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Override the exploration rate
    #[arg(long, global = true)]
    epsilon: Option<f64>,

    /// Log level used when RUST_LOG is unset
    #[arg(long, global = true, default_value = "info")]
    log_level: String,
}

#[derive(Subcommand)]
enum Command {
    /// Human vs AI
    Play,
    /// AI vs AI, both sides learning into the same table
    SelfPlay {
        /// Number of games to play back to back
        #[arg(long, default_value_t = 1)]
        games: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let _logger = init_logging(&cli.log_level).context("starting logger")?;

    // Load configuration
    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(table) = cli.table {
        config.session.table_path = table;
    }
    if cli.no_delay {
        config.session.move_delay_ms = 0;
    }
    if let Some(seed) = cli.seed {
        config.policy.seed = Some(seed);
    }
    if let Some(epsilon) = cli.epsilon {
        config.policy.epsilon = epsilon;
    }
    config.validate().context("invalid configuration")?;

    let (mode, games) = match cli.command {
        Some(Command::Play) => (GameMode::HumanVsAi, 1),
        Some(Command::SelfPlay { games }) => (GameMode::SelfPlay, games),
        None => {
            let mode = choose_mode(&mut io::stdin().lock(), &mut io::stdout())
                .context("reading menu choice")?;
            (mode, 1)
        }
    };

    let table = TableFile::new(&config.session.table_path);
    let delay = Duration::from_millis(config.session.move_delay_ms);

    match mode {
        GameMode::HumanVsAi => play_human(&config, &table, delay),
        GameMode::SelfPlay => play_self(&config, &table, delay, games),
    }
}

fn play_human(config: &AppConfig, table: &TableFile, delay: Duration) -> Result<()> {
    let mut store = load_store(table, config.learning);
    let mut human = HumanAgent::new(io::stdin().lock(), io::stdout());
    let mut ai = QLearningAgent::named("AI", &config.policy);
    let mut view = ConsoleView::new(io::stdout(), GameMode::HumanVsAi, delay);

    Session::new(&mut store, config.rewards)
        .with_persistence(table)
        .run(&mut human, &mut ai, &mut view)
        .context("playing game")?;
    Ok(())
}

fn play_self(config: &AppConfig, table: &TableFile, delay: Duration, games: usize) -> Result<()> {
    let mut store = load_store(table, config.learning);
    let second_policy = PolicyConfig {
        seed: config.policy.seed.map(|s| s.wrapping_add(1)),
        ..config.policy.clone()
    };
    let mut first = QLearningAgent::named("AI 1", &config.policy);
    let mut second = QLearningAgent::named("AI 2", &second_policy);
    let mut tally = SelfPlayTally::new();

    log::info!("Starting {} self-play game(s)", games);

    for game in 1..=games {
        // Only a single game is worth watching
        let mut observer: Box<dyn SessionObserver> = if games == 1 {
            Box::new(ConsoleView::new(io::stdout(), GameMode::SelfPlay, delay))
        } else {
            Box::new(NoopObserver)
        };

        let mut session = Session::new(&mut store, config.rewards).with_persistence(table);
        let outcome = session
            .run(&mut first, &mut second, observer.as_mut())
            .with_context(|| format!("playing self-play game {}", game))?;
        tally.record(outcome, session.move_count());
    }

    log::info!(
        "Self-play done: {} games | AI 1 {} wins ({:.1}%) | AI 2 {} wins | {} draws ({:.1}%) | avg length {:.1}",
        tally.games(),
        tally.wins(Player::Human),
        tally.first_mover_win_rate() * 100.0,
        tally.wins(Player::Ai),
        tally.draws(),
        tally.draw_rate() * 100.0,
        tally.average_game_length(),
    );
    Ok(())
}
