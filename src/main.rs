use std::process::ExitCode;

use clap::Parser;

use board_replay::replay::render_line;

/// Replay moves from the standard starting position and print the board.
#[derive(Parser, Debug)]
#[command(name = "board_replay", version, about)]
struct Args {
    /// Whitespace-separated moves in coordinate notation, e.g. "e2e4 e7e5 g1f3"
    #[arg(value_name = "MOVES", allow_hyphen_values = true)]
    moves: Option<String>,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("error")).init();
    let args = Args::parse();

    match render_line(args.moves.as_deref().unwrap_or_default()) {
        Ok(text) => {
            println!("{text}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
