use clap::{Parser, Subcommand, ValueEnum};
use pancake::app::App;
use pancake::config;
use pancake::game::evaluation::Evaluator;
use pancake::game::GameState;
use pancake::{Engine, EngineResult, GameBoard, SearchConfig};
use shakmaty::{CastlingMode, Color};
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;
use tracing::Level;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Log verbosity: -v for debug, -vv for trace
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the best move for a position
    Best {
        #[arg(long)]
        fen: String,

        /// Search depth; overrides the profile
        #[arg(long)]
        depth: Option<u8>,

        /// JSON search profile
        #[arg(long)]
        profile: Option<PathBuf>,
    },
    /// Print the static evaluation terms of a position as JSON
    Eval {
        #[arg(long)]
        fen: String,
    },
    /// Play against the engine on the terminal
    Play {
        /// Search depth; overrides the profile
        #[arg(long)]
        depth: Option<u8>,

        #[arg(long, value_enum, default_value_t = Side::White)]
        engine_color: Side,

        /// File receiving every move, FEN and evaluation
        #[arg(long)]
        log: Option<PathBuf>,

        /// Starting position, defaults to the standard one
        #[arg(long)]
        fen: Option<String>,

        /// JSON search profile
        #[arg(long)]
        profile: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Side {
    White,
    Black,
}

impl From<Side> for Color {
    fn from(side: Side) -> Color {
        match side {
            Side::White => Color::White,
            Side::Black => Color::Black,
        }
    }
}

/// Profile settings (or the defaults), with `depth` taking precedence when given.
fn load_config(profile: Option<&PathBuf>, depth: Option<u8>) -> EngineResult<SearchConfig> {
    let mut config = match profile {
        Some(path) => config::load_profile_file(path)?,
        None => SearchConfig::default(),
    };
    if let Some(depth) = depth {
        config.search_depth = depth;
    }
    Ok(config)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let level = match args.verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
    std::panic::set_hook(Box::new(tracing_panic::panic_hook));

    match args.command {
        Command::Best {
            fen,
            depth,
            profile,
        } => {
            let config = load_config(profile.as_ref(), depth)?;
            let mut board = GameBoard::from_fen(&fen)?;
            let mut engine = Engine::new(config);
            match engine.search(&mut board) {
                Some(best) => {
                    let game = GameState::new(board);
                    println!(
                        "{} {} {}",
                        best.mv.to_uci(CastlingMode::Standard),
                        game.san(best.mv),
                        best.score
                    );
                }
                None => println!("(none)"),
            }
        }
        Command::Eval { fen } => {
            let board = GameBoard::from_fen(&fen)?;
            let report = Evaluator::new(&board, board.turn()).breakdown();
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Command::Play {
            depth,
            engine_color,
            log,
            fen,
            profile,
        } => {
            let config = load_config(profile.as_ref(), depth)?;
            let game = match fen {
                Some(fen) => GameState::from_fen(&fen)?,
                None => GameState::default(),
            };
            let mut app = App::new(game, Engine::new(config), engine_color.into());
            if let Some(path) = log {
                app = app.with_log(Box::new(BufWriter::new(File::create(path)?)));
            }
            let stdin = io::stdin();
            app.run(stdin.lock(), io::stdout())?;
        }
    }
    Ok(())
}
