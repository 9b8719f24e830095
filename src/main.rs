//! Main CLI interface to Gridmax engine.
//!
//! A human plays one side from the terminal and the engine plays the other.
//! The game never ends on its own; type `exit` to leave.

use std::io::{self, Write};

use clap::{Parser, ValueEnum};
use env_logger::Env;

use gridmax_engine::coretypes::{PlyKind, Side};
use gridmax_engine::eval::{Evaluator, MaterialEvaluator, ZeroEvaluator};
use gridmax_engine::movegen::NeighborhoodGenerator;
use gridmax_engine::{Game, SearchEngine};

#[derive(Debug, Parser)]
#[command(name = "gridmax", version, about = "Play against an alpha-beta search engine")]
struct Args {
    /// Search depth in plies.
    #[arg(short, long, default_value_t = 3, value_parser = clap::value_parser!(u8).range(1..))]
    depth: u8,

    /// Static evaluation used at the bottom of the search.
    #[arg(short, long, value_enum, default_value_t = EvalKind::Zero)]
    eval: EvalKind,

    /// Side played by the engine. First always moves first.
    #[arg(long, value_enum, default_value_t = SideArg::Second)]
    engine_side: SideArg,

    /// Log filter used when RUST_LOG is not set.
    #[arg(long, default_value = "warn")]
    log_level: String,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
enum EvalKind {
    /// Every position scores 0.
    Zero,
    /// Piece values of the engine's side minus the human's.
    Material,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
enum SideArg {
    /// Uppercase pieces.
    First,
    /// Lowercase pieces.
    Second,
}

impl From<SideArg> for Side {
    fn from(side: SideArg) -> Self {
        match side {
            SideArg::First => Side::First,
            SideArg::Second => Side::Second,
        }
    }
}

enum InputKind {
    Exit,
    Help,
    GameMove(String),
}

impl From<&str> for InputKind {
    fn from(s: &str) -> Self {
        match s {
            "exit" | "quit" => Self::Exit,
            "help" => Self::Help,
            _ => Self::GameMove(s.to_string()),
        }
    }
}

fn main() -> io::Result<()> {
    let args = Args::parse();
    env_logger::Builder::from_env(Env::default().default_filter_or(&args.log_level)).init();

    let engine_side = Side::from(args.engine_side);
    log::info!(
        "depth {}, eval {:?}, engine plays {}",
        args.depth,
        args.eval,
        engine_side
    );

    match args.eval {
        EvalKind::Zero => {
            let engine = SearchEngine::new(NeighborhoodGenerator, ZeroEvaluator);
            play(&engine, args.depth, engine_side)
        }
        EvalKind::Material => {
            let evaluator = MaterialEvaluator::new(engine_side);
            let engine = SearchEngine::new(NeighborhoodGenerator, evaluator);
            play(&engine, args.depth, engine_side)
        }
    }
}

fn play<E: Evaluator>(
    engine: &SearchEngine<NeighborhoodGenerator, E>,
    depth: PlyKind,
    engine_side: Side,
) -> io::Result<()> {
    println!("Gridmax CLI {}\n", env!("CARGO_PKG_VERSION"));
    let mut game = Game::start_position();
    let mut input = String::new();

    loop {
        println!("{}", game.board());

        // Engine turn.
        if game.to_move() == engine_side {
            let result = game.play_engine(engine, depth);
            log::debug!("{}", result);
            match result.best_move {
                Some(best_move) => println!("AI move: {}", best_move),
                None => {
                    println!("AI has no move to play.");
                    break;
                }
            }
            continue;
        }

        // Wait for user input.
        print!("Enter your move (e.g., e2e4): ");
        io::stdout().flush()?;
        input.clear();
        if io::stdin().read_line(&mut input)? == 0 {
            break;
        }

        match InputKind::from(input.trim()) {
            InputKind::Exit => break,
            InputKind::Help => {
                println!("Commands:");
                println!("help => Print this help text.");
                println!("exit => end CLI.");
                println!("\nTo make a move, enter origin and destination squares.");
                println!("Examples: e2e4 -> Move piece on e2 to e4.");
            }
            InputKind::GameMove(text) => {
                if let Err(error) = game.play(&text) {
                    log::debug!("rejected {:?}: {}", text, error);
                    println!("Invalid move!");
                }
            }
        }
    }
    Ok(())
}
