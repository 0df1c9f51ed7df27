// app/mod.rs

//! Human versus engine over a line-based terminal.

use crate::constants::MAX_ENGINE_MOVES;
use crate::error::EngineResult;
use crate::game::evaluation;
use crate::game::search::Engine;
use crate::game::GameState;
use shakmaty::{CastlingMode, Color};
use std::io::{BufRead, Write};
use tracing::{info, warn};

pub struct App {
    pub game_state: GameState,
    engine: Engine,
    engine_color: Color,
    log: Option<Box<dyn Write>>,
    engine_moves: u32,
}

impl App {
    pub fn new(game_state: GameState, engine: Engine, engine_color: Color) -> Self {
        Self {
            game_state,
            engine,
            engine_color,
            log: None,
            engine_moves: 0,
        }
    }

    /// Records every move, the FEN after it and its evaluation to `log`.
    pub fn with_log(mut self, log: Box<dyn Write>) -> Self {
        self.log = Some(log);
        self
    }

    /// Plays until the game ends, the engine has made its move quota, or
    /// `input` runs dry.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut out: W) -> EngineResult<()> {
        let start_fen = self.game_state.board().fen();
        self.write_log(format_args!("Start fen: {start_fen}"))?;

        while !self.game_state.is_game_over() && self.engine_moves < MAX_ENGINE_MOVES {
            if self.game_state.turn() == self.engine_color {
                self.engine_turn(&mut out)?;
            } else if !self.human_turn(&mut input, &mut out)? {
                break;
            }
        }

        writeln!(out, "{}", self.game_state.get_pgn())?;
        match self.game_state.result() {
            Some(result) => writeln!(out, "{result}")?,
            None => writeln!(out, "Game unfinished")?,
        }
        if let Some(log) = self.log.as_mut() {
            log.flush()?;
        }
        Ok(())
    }

    fn engine_turn<W: Write>(&mut self, out: &mut W) -> EngineResult<()> {
        let color = self.engine_color;
        let depth = self.engine.config().search_depth;
        let Some(best) = self
            .engine
            .find_best_move(self.game_state.board_mut(), depth, color)
        else {
            return Ok(());
        };

        let san = self.game_state.san(best.mv);
        let uci = best.mv.to_uci(CastlingMode::Standard);
        self.game_state.make_move(best.mv);
        self.engine_moves += 1;
        info!(mv = %uci, score = best.score, count = self.engine_moves, "Engine moved");

        writeln!(out, "Engine move: {san} ({uci}), evaluation {}", best.score)?;
        let fen = self.game_state.board().fen();
        self.write_log(format_args!("{color:?}'s move: {uci}"))?;
        self.write_log(format_args!("Board fen: {fen}"))?;
        self.write_log(format_args!("Move evaluation: {}", best.score))?;
        Ok(())
    }

    /// Returns `false` once input is exhausted.
    fn human_turn<R: BufRead, W: Write>(&mut self, input: &mut R, out: &mut W) -> EngineResult<bool> {
        write!(out, "Enter your move (e.g. e2e4, Nf3 or O-O): ")?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(false);
        }
        if line.trim().is_empty() {
            return Ok(true);
        }

        let m = match self.game_state.parse_move(&line) {
            Ok(m) => m,
            Err(e) => {
                warn!(input = line.trim(), "Rejected move input");
                writeln!(out, "{e}. Please try again.")?;
                return Ok(true);
            }
        };

        let uci = m.to_uci(CastlingMode::Standard);
        self.game_state.make_move(m);
        let fen = self.game_state.board().fen();
        let score = evaluation::evaluate(self.game_state.board());
        self.write_log(format_args!("Your move: {uci}"))?;
        self.write_log(format_args!("Board fen: {fen}"))?;
        self.write_log(format_args!("Move evaluation: {score}"))?;
        Ok(true)
    }

    fn write_log(&mut self, line: std::fmt::Arguments<'_>) -> EngineResult<()> {
        if let Some(log) = self.log.as_mut() {
            writeln!(log, "{line}")?;
        }
        Ok(())
    }
}
