//! Command-line blackjack table.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use bjsolo::options::DEFAULT_LEADERBOARD_PATH;
use bjsolo::{Session, SessionEnd, TableOptions};

#[derive(Parser)]
#[command(name = "bjsolo", about = "Play blackjack against the dealer", version)]
struct Cli {
    /// Leaderboard file
    #[arg(long, env = "BJSOLO_LEADERBOARD", default_value = DEFAULT_LEADERBOARD_PATH)]
    leaderboard: PathBuf,

    /// Seed for the deck shuffle (random when omitted)
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let mut options = TableOptions::default().with_leaderboard_path(&cli.leaderboard);
    if let Some(seed) = cli.seed {
        options = options.with_seed(seed);
    }

    let mut session = Session::new(io::stdin().lock(), io::stdout().lock(), options);
    match session.run() {
        Ok(SessionEnd::Exited { chips }) => {
            log::debug!("player left with {chips} chips");
            ExitCode::SUCCESS
        }
        Ok(SessionEnd::Broke) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            ExitCode::FAILURE
        }
    }
}
