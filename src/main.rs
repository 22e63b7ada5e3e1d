use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use clap::Parser;
use log::info;

use fen_movegen::board::{Position, STARTING_FEN};

/// Answers accepted at the prompt for "use the starting position".
const WORDS_MEANING_NO: [&str; 2] = ["N", "NO"];

/// List the pseudo-legal moves of a chess position.
#[derive(Parser, Debug)]
#[command(name = "fen-moves", version)]
struct Args {
    /// FEN of the position. Prompts on stdin when omitted.
    fen: Option<String>,

    /// Print moves as `e2e3` instead of short algebraic form
    #[arg(long)]
    coordinates: bool,

    /// Print only the number of moves
    #[arg(long)]
    count: bool,
}

fn prompt_for_fen() -> io::Result<String> {
    let mut stdout = io::stdout();
    write!(stdout, "Custom position?\n'N' for no, {{FEN}} for yes. ")?;
    stdout.flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    let answer = line.trim();
    if answer.is_empty() || WORDS_MEANING_NO.contains(&answer.to_uppercase().as_str()) {
        Ok(STARTING_FEN.to_string())
    } else {
        Ok(answer.to_string())
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let fen = match args.fen {
        Some(fen) => fen,
        None => match prompt_for_fen() {
            Ok(fen) => fen,
            Err(err) => {
                eprintln!("failed to read position: {err}");
                return ExitCode::FAILURE;
            }
        },
    };

    let position = match Position::try_from_fen(&fen) {
        Ok(position) => position,
        Err(err) => {
            eprintln!("invalid position '{fen}': {err}");
            return ExitCode::FAILURE;
        }
    };

    let moves = position.generate_moves();
    info!("{} moves for {}", moves.len(), position.side_to_move());

    if args.count {
        println!("{}", moves.len());
    } else if args.coordinates {
        let rendered: Vec<String> = moves.iter().map(ToString::to_string).collect();
        println!("{}", rendered.join(" "));
    } else {
        println!("{}", position.notation_list().join(" "));
    }
    ExitCode::SUCCESS
}
