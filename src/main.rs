use std::error::Error;

use clap::Parser;
use log::{error, info, LevelFilter};

use grid_chess::game_state::chess_rules::STARTING_LAYOUT;
use grid_chess::session::game_session::GameSession;
use grid_chess::utils::algebraic::long_algebraic_to_positions;
use grid_chess::utils::random_playout::{play_random_game_from, PlayoutConfig};
use grid_chess::utils::render_board::render_board;
use grid_chess::Board;

/// Plays scripted moves and then a seeded random continuation.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Board layout, rank 0 first, lowercase for Light.
    #[arg(long, default_value = STARTING_LAYOUT)]
    layout: String,

    /// Moves to play before the random continuation, e.g. `e2e4,e7e5`.
    #[arg(long, value_delimiter = ',')]
    moves: Vec<String>,

    #[arg(long, default_value_t = 0)]
    seed: u64,

    #[arg(long, default_value_t = 200)]
    max_plies: u16,

    #[arg(long, default_value = "info")]
    log_level: LevelFilter,
}

impl Args {
    fn playout_config(&self) -> PlayoutConfig {
        PlayoutConfig {
            max_plies: self.max_plies,
            seed: self.seed,
            layout: self.layout.clone(),
        }
    }
}

fn setup_logging(level: LevelFilter) -> Result<(), log::SetLoggerError> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level)
        .chain(std::io::stderr())
        .apply()
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    setup_logging(args.log_level)?;

    let config = args.playout_config();
    let mut session = GameSession::new(Board::from_layout(&config.layout)?);

    for text in &args.moves {
        let (origin, target) = long_algebraic_to_positions(text)?;
        if let Err(err) = session.play(origin, target) {
            error!("scripted move {text} refused: {err}");
            return Err(err.into());
        }
    }
    info!("played {} scripted moves", session.history().len());

    let report = play_random_game_from(session.board().clone(), config.seed, config.max_plies)?;

    println!("{}", render_board(report.session.board(), &[]));
    println!("{}", report.report());
    Ok(())
}
