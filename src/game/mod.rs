// game/mod.rs

pub mod board;
pub mod evaluation;
pub mod search;

use crate::error::{EngineError, EngineResult};
use board::{GameBoard, Terminal};
use shakmaty::san::{San, SanPlus};
use shakmaty::uci::UciMove;
use shakmaty::{Color, Move, Position};
use std::str::FromStr;

/// A game being played out move by move, with its PGN movetext.
#[derive(Clone, Debug, Default)]
pub struct GameState {
    board: GameBoard,
    pgn: String,
}

impl GameState {
    pub fn new(board: GameBoard) -> Self {
        Self {
            board,
            pgn: String::new(),
        }
    }

    pub fn from_fen(fen: &str) -> EngineResult<Self> {
        Ok(Self::new(GameBoard::from_fen(fen)?))
    }

    pub fn board(&self) -> &GameBoard {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut GameBoard {
        &mut self.board
    }

    pub fn turn(&self) -> Color {
        self.board.turn()
    }

    /// Reads a move in UCI (`e2e4`, `e7e8q`) or SAN (`Nf3`, `O-O`) notation.
    pub fn parse_move(&self, input: &str) -> EngineResult<Move> {
        let input = input.trim();
        let pos = self.board.position();
        let illegal = || EngineError::IllegalMove {
            input: input.to_string(),
        };

        if let Ok(uci) = UciMove::from_str(input) {
            return uci.to_move(pos).map_err(|_| illegal());
        }
        match SanPlus::from_str(input) {
            Ok(san) => san.san.to_move(pos).map_err(|_| illegal()),
            Err(_) => Err(EngineError::InvalidNotation {
                input: input.to_string(),
            }),
        }
    }

    /// Plays a legal move and appends it to the movetext.
    pub fn make_move(&mut self, m: Move) {
        let pos = self.board.position();
        if pos.turn() == Color::White {
            self.pgn.push_str(&format!("{}. ", pos.fullmoves()));
        } else if self.pgn.is_empty() {
            self.pgn.push_str(&format!("{}... ", pos.fullmoves()));
        }
        let san = SanPlus::from_move(pos.clone(), m);
        self.pgn.push_str(&san.to_string());
        self.pgn.push(' ');
        self.board.play(m);
    }

    pub fn san(&self, m: Move) -> String {
        San::from_move(self.board.position(), m).to_string()
    }

    pub fn is_game_over(&self) -> bool {
        self.board.terminal().is_over()
    }

    pub fn get_pgn(&self) -> &str {
        self.pgn.trim_end()
    }

    /// Human-readable result once the game is over.
    pub fn result(&self) -> Option<String> {
        match self.board.terminal() {
            Terminal::None => None,
            Terminal::Draw => Some("Draw".to_string()),
            Terminal::Loss => Some(format!("Checkmate! {:?} wins", !self.turn())),
            Terminal::Win => Some(format!("{:?} wins", self.turn())),
        }
    }
}
