mod config;
mod input;
mod render;
mod runner;

use clap::{Parser, ValueEnum};
use config::Config;
use tictactoe_engine::config::Validate;
use tictactoe_engine::logger::{self, LogLevel};
use tictactoe_engine::tictactoe::{GameSession, HumanSide, SearchAlgorithm};
use tictactoe_engine::{SessionRng, log};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum SideArg {
    X,
    O,
    Random,
}

impl From<SideArg> for HumanSide {
    fn from(side: SideArg) -> Self {
        match side {
            SideArg::X => HumanSide::X,
            SideArg::O => HumanSide::O,
            SideArg::Random => HumanSide::Random,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum AlgorithmArg {
    Minimax,
    AlphaBeta,
}

impl From<AlgorithmArg> for SearchAlgorithm {
    fn from(algorithm: AlgorithmArg) -> Self {
        match algorithm {
            AlgorithmArg::Minimax => SearchAlgorithm::Minimax,
            AlgorithmArg::AlphaBeta => SearchAlgorithm::AlphaBeta,
        }
    }
}

#[derive(Parser)]
#[command(name = "tictactoe_client", about = "Play tic-tac-toe against a minimax opponent")]
struct Args {
    /// YAML config file; defaults to one next to the executable
    #[arg(long)]
    config: Option<String>,

    #[arg(long, value_enum)]
    side: Option<SideArg>,

    #[arg(long, value_enum)]
    algorithm: Option<AlgorithmArg>,

    /// Seed for picking a random side
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long)]
    debug: bool,

    #[arg(long)]
    log_prefix: Option<String>,
}

/// Layers command-line flags over the file config and validates the result.
fn apply_overrides(mut config: Config, args: &Args) -> Result<Config, String> {
    if let Some(side) = args.side {
        config.human_side = side.into();
    }
    if let Some(algorithm) = args.algorithm {
        config.algorithm = algorithm.into();
    }
    if args.debug {
        config.log.level = LogLevel::Debug;
    }
    if let Some(prefix) = &args.log_prefix {
        config.log.prefix = Some(prefix.clone());
    }
    config.validate()?;
    Ok(config)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let file_config = config::get_config_manager(args.config.as_deref()).get_config()?;
    let config = apply_overrides(file_config, &args)?;

    logger::init_logger(config.log.prefix.clone(), config.log.level);

    let mut rng = args
        .seed
        .map(SessionRng::new)
        .unwrap_or_else(SessionRng::from_random);
    let human = config.human_side.resolve(&mut rng);
    log!(
        "Starting game: human plays {} ({:?}), computer uses {:?}, seed {}",
        human,
        config.human_side,
        config.algorithm,
        rng.seed()
    );

    let mut session = GameSession::new(human, config.algorithm);
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    runner::run(&mut session, stdin.lock(), stdout.lock())?;

    log!("Goodbye");
    Ok(())
}
