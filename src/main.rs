use clap::Parser;
use pocket_trainer::persistence::DEFAULT_SAVE_FILE;
use pocket_trainer::session::{choose_starter, Session};
use pocket_trainer::{GameConfig, GameResult, GameRng, RandomSource};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

/// A small turn-based creature battling game for the terminal.
#[derive(Parser, Debug)]
#[command(name = "pocket-trainer", version)]
struct Args {
    /// Where the game is saved and loaded from
    #[arg(long, default_value = DEFAULT_SAVE_FILE)]
    save_file: PathBuf,

    /// RON file with moves, species, items and the rival (built-in data if omitted)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for the random source, for reproducible sessions
    #[arg(long)]
    seed: Option<u64>,

    /// Your trainer name
    #[arg(long, default_value = "Red")]
    name: String,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{}", err);
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> GameResult<()> {
    let config = match &args.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };

    let rng: Box<dyn RandomSource> = match args.seed {
        Some(seed) => {
            log::info!("Using seed {}", seed);
            Box::new(GameRng::seeded(seed))
        }
        None => Box::new(GameRng::from_entropy()),
    };

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    writeln!(output, "Welcome to Pocket Trainer, {}!", args.name)?;
    let Some(player) = choose_starter(&config, &args.name, &mut input, &mut output)? else {
        return Ok(());
    };

    let mut session = Session::new(config, player, args.save_file, rng)?;
    session.run(&mut input, &mut output)
}
