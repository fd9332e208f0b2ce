use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;

use color_shape_links::ai::{CancellationToken, ThinkerPrototype};
use color_shape_links::config::AppConfig;
use color_shape_links::game::{Board, GameOutcome, Move};

/// Ask a ColorShapeLinks thinker which move it would play.
#[derive(Parser)]
#[command(name = "csl-think", version, about = "Ask a ColorShapeLinks thinker for its next move")]
struct Cli {
    /// Moves to replay first, alternating from White, e.g. `r0 s4 s5`
    moves: Vec<Move>,

    /// Thinker to ask: negamax or random
    #[arg(long, default_value = "negamax")]
    thinker: String,

    /// Path to TOML configuration file
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    /// Override the search depth
    #[arg(long)]
    depth: Option<usize>,

    /// Override the time limit in milliseconds
    #[arg(long)]
    time_ms: Option<u64>,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    if cli.print_config {
        print!("{}", AppConfig::default_toml());
        return Ok(());
    }

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;
    if let Some(depth) = cli.depth {
        config.search.max_depth = depth;
    }
    if let Some(time_ms) = cli.time_ms {
        config.board.time_limit_ms = time_ms;
    }
    config.validate().context("validating configuration")?;

    let mut board =
        Board::from_moves(&config.board, &cli.moves).context("replaying move list")?;
    println!("\n=== Board after {} moves ===\n", board.move_count());
    print!("{board}");

    if let Some(outcome) = board.check_winner() {
        println!("\nGame is already over: {}", describe(outcome));
        return Ok(());
    }

    let mut thinker = ThinkerPrototype::new(&cli.thinker, config.clone())
        .create()
        .with_context(|| format!("creating thinker '{}'", cli.thinker))?;

    let token =
        CancellationToken::with_timeout(Duration::from_millis(config.board.time_limit_ms));
    let start = Instant::now();
    let chosen = thinker.think(&mut board, &token)?;
    let elapsed = start.elapsed();

    let Some(mv) = chosen else {
        println!(
            "\n-> {} found no move after {} ms.",
            thinker.name(),
            elapsed.as_millis()
        );
        return Ok(());
    };

    println!(
        "\n-> {} ({}) will play {} after {} ms.",
        thinker.name(),
        board.turn(),
        mv,
        elapsed.as_millis()
    );
    if token.is_cancelled() {
        log::warn!("time limit of {} ms reached", config.board.time_limit_ms);
    }

    board.do_move(mv.shape, mv.column)?;
    println!("\n=== Board after {} played ===\n", mv);
    print!("{board}");
    if let Some(outcome) = board.check_winner() {
        println!("\n{}", describe(outcome));
    }

    Ok(())
}

fn describe(outcome: GameOutcome) -> String {
    match outcome {
        GameOutcome::Winner(color) => format!("{color} wins"),
        GameOutcome::Draw => "Draw".to_string(),
    }
}
