use std::{error::Error, io::Read, process::ExitCode};

use backgammon_movegen::{
    api::{self, BoardResponse, MoveRequest, MovesResponse, SequencesResponse},
    backgammon::{Board, Move},
    config::GeneratorConfig,
};
use clap::{ArgAction, Parser, Subcommand};
use env_logger::Env;
use log::{LevelFilter, info};

#[derive(Parser, Debug)]
#[command(name = "bgmove", version, about = "Legal backgammon moves for a serialized board")]
struct Cli {
    /// More log output (-v info, -vv debug, -vvv trace). RUST_LOG works as well.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Expand roll search layers with at least this many branches on the thread pool.
    /// Defaults to BGMOVE_PARALLEL_THRESHOLD or 64.
    #[arg(long, global = true)]
    parallel_threshold: Option<usize>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Legal moves for a single die.
    Die {
        #[arg(allow_hyphen_values = true)]
        board: String,
        die: u8,
    },
    /// Every move playable with a roll.
    Roll {
        #[arg(allow_hyphen_values = true)]
        board: String,
        die1: u8,
        die2: u8,
        /// Print complete move sequences instead of the flattened move list.
        #[arg(long)]
        sequences: bool,
    },
    /// Apply a move given as JSON, e.g. '{"from":24,"to":18,"move_type":"NORMAL_MOVE"}'.
    Apply {
        #[arg(allow_hyphen_values = true)]
        board: String,
        #[arg(value_name = "MOVE_JSON")]
        mv: String,
        /// Pass the turn to the other player afterwards.
        #[arg(long)]
        end_of_turn: bool,
    },
    /// Read a move request ({"board_str", "move", "end_of_turn"}) from stdin and apply it.
    Request,
    /// Print the serialized starting position.
    Start,
    /// Draw a serialized board.
    Show {
        #[arg(allow_hyphen_values = true)]
        board: String,
    },
}

fn init_logger(verbose: u8) {
    let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or("warn"));
    match verbose {
        0 => {}
        1 => {
            builder.filter_level(LevelFilter::Info);
        }
        2 => {
            builder.filter_level(LevelFilter::Debug);
        }
        _ => {
            builder.filter_level(LevelFilter::Trace);
        }
    }
    builder.init();
}

fn run(cli: Cli) -> Result<String, Box<dyn Error>> {
    let mut config = GeneratorConfig::from_env();
    if let Some(threshold) = cli.parallel_threshold {
        config.parallel_threshold = threshold;
    }
    info!("{config:?}");

    let output = match cli.command {
        Command::Die { board, die } => {
            let moves = api::moves_for_die(&board, die)?;
            serde_json::to_string(&MovesResponse { moves })?
        }
        Command::Roll { board, die1, die2, sequences: true } => {
            let sequences = api::sequences_for_roll_with(&board, die1, die2, &config)?;
            serde_json::to_string(&SequencesResponse { sequences })?
        }
        Command::Roll { board, die1, die2, sequences: false } => {
            let moves = api::moves_for_roll_with(&board, die1, die2, &config)?;
            serde_json::to_string(&MovesResponse { moves })?
        }
        Command::Apply { board, mv, end_of_turn } => {
            let mv: Move = serde_json::from_str(&mv)?;
            let board = api::apply_move(&board, mv, end_of_turn)?;
            serde_json::to_string(&BoardResponse { board })?
        }
        Command::Request => {
            let mut body = String::new();
            std::io::stdin().read_to_string(&mut body)?;
            let request: MoveRequest = serde_json::from_str(&body)?;
            serde_json::to_string(&request.apply()?)?
        }
        Command::Start => Board::starting_position().serialize(),
        Command::Show { board } => Board::deserialize(&board)?.to_string(),
    };
    Ok(output)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    match run(cli) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
