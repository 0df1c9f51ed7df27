// src/game/board.rs

//! The mutable position the search works on.
//!
//! shakmaty positions have no unmake, so every applied move pushes the previous
//! position onto a stack and undo pops it back. [`GameBoard::apply`] hands out a
//! [`MoveGuard`] that performs the undo when it goes out of scope, which keeps
//! apply/undo strictly nested on every exit path, including early `break`s on
//! a cutoff.

use crate::error::{EngineError, EngineResult};
use shakmaty::fen::Fen;
use shakmaty::zobrist::{Zobrist64, ZobristHash};
use shakmaty::{Board, CastlingMode, Chess, Color, EnPassantMode, Move, MoveList, Position, Square};
use std::ops::{Deref, DerefMut};

/// Game-over classification, from the point of view of the side to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Terminal {
    None,
    Win,
    Loss,
    Draw,
}

impl Terminal {
    pub fn is_over(self) -> bool {
        self != Terminal::None
    }
}

#[derive(Clone, Debug)]
pub struct GameBoard {
    current: Chess,
    previous: Vec<Chess>,
    // Hash of every position since the board was set up, current one last.
    hashes: Vec<u64>,
}

impl Default for GameBoard {
    fn default() -> Self {
        Self::new(Chess::default())
    }
}

impl GameBoard {
    pub fn new(pos: Chess) -> Self {
        let hash = zobrist(&pos);
        Self {
            current: pos,
            previous: Vec::new(),
            hashes: vec![hash],
        }
    }

    pub fn from_fen(fen: &str) -> EngineResult<Self> {
        let invalid = |reason: String| EngineError::InvalidFen {
            fen: fen.to_string(),
            reason,
        };
        let parsed: Fen = fen.trim().parse().map_err(|e| invalid(format!("{e}")))?;
        let pos: Chess = parsed
            .into_position(CastlingMode::Standard)
            .map_err(|e| invalid(format!("{e}")))?;
        Ok(Self::new(pos))
    }

    pub fn fen(&self) -> String {
        Fen::from_position(&self.current, EnPassantMode::Legal).to_string()
    }

    pub fn position(&self) -> &Chess {
        &self.current
    }

    pub fn board(&self) -> &Board {
        self.current.board()
    }

    pub fn turn(&self) -> Color {
        self.current.turn()
    }

    pub fn hash(&self) -> u64 {
        self.hashes.last().copied().unwrap_or_else(|| zobrist(&self.current))
    }

    pub fn legal_moves(&self) -> MoveList {
        self.current.legal_moves()
    }

    pub fn is_capture(&self, m: &Move) -> bool {
        m.is_capture()
    }

    pub fn is_check(&self) -> bool {
        self.current.is_check()
    }

    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.board().king_of(color)
    }

    /// Number of moves currently applied on top of the initial setup.
    pub fn ply(&self) -> usize {
        self.previous.len()
    }

    pub fn terminal(&self) -> Terminal {
        let pos = &self.current;
        if pos.is_checkmate() {
            return Terminal::Loss;
        }
        if pos.is_stalemate()
            || pos.is_insufficient_material()
            || pos.halfmoves() >= 100
            || self.is_threefold_repetition()
        {
            return Terminal::Draw;
        }
        Terminal::None
    }

    /// Applies `m` for the lifetime of the returned guard.
    pub fn apply(&mut self, m: Move) -> MoveGuard<'_> {
        self.push(m);
        MoveGuard { board: self }
    }

    /// Applies `m` permanently, as a move of the actual game.
    pub fn play(&mut self, m: Move) {
        self.push(m);
    }

    fn push(&mut self, m: Move) {
        let mut next = self.current.clone();
        next.play_unchecked(m);
        self.hashes.push(zobrist(&next));
        self.previous.push(std::mem::replace(&mut self.current, next));
    }

    fn undo(&mut self) {
        if let Some(prev) = self.previous.pop() {
            self.current = prev;
            self.hashes.pop();
        }
    }

    fn is_threefold_repetition(&self) -> bool {
        let current = self.hash();
        // Only positions since the last capture or pawn move can repeat.
        let window = (self.current.halfmoves() as usize + 1).min(self.hashes.len());
        self.hashes
            .iter()
            .rev()
            .take(window)
            .step_by(2)
            .filter(|&&h| h == current)
            .count()
            >= 3
    }
}

fn zobrist(pos: &Chess) -> u64 {
    pos.zobrist_hash::<Zobrist64>(EnPassantMode::Legal).0
}

/// Undoes the move it was created for when dropped.
pub struct MoveGuard<'a> {
    board: &'a mut GameBoard,
}

impl Deref for MoveGuard<'_> {
    type Target = GameBoard;

    fn deref(&self) -> &GameBoard {
        self.board
    }
}

impl DerefMut for MoveGuard<'_> {
    fn deref_mut(&mut self) -> &mut GameBoard {
        self.board
    }
}

impl Drop for MoveGuard<'_> {
    fn drop(&mut self) {
        self.board.undo();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::seq::SliceRandom;
    use rand::SeedableRng;
    use shakmaty::uci::UciMove;
    use std::str::FromStr;

    fn uci(board: &GameBoard, s: &str) -> Move {
        UciMove::from_str(s).unwrap().to_move(board.position()).unwrap()
    }

    #[test]
    fn test_guard_restores_hash_and_turn() {
        let mut board = GameBoard::default();
        let hash = board.hash();
        let e4 = uci(&board, "e2e4");
        {
            let child = board.apply(e4);
            assert_ne!(child.hash(), hash);
            assert_eq!(child.turn(), Color::Black);
            assert_eq!(child.ply(), 1);
        }
        assert_eq!(board.hash(), hash);
        assert_eq!(board.turn(), Color::White);
        assert_eq!(board.ply(), 0);
    }

    #[test]
    fn test_nested_guards_unwind_in_order() {
        let mut board = GameBoard::default();
        let start_fen = board.fen();
        let e4 = uci(&board, "e2e4");
        let mut child = board.apply(e4);
        let mid_fen = child.fen();
        let e5 = uci(&child, "e7e5");
        {
            let grandchild = child.apply(e5);
            assert_eq!(grandchild.ply(), 2);
        }
        assert_eq!(child.fen(), mid_fen);
        drop(child);
        assert_eq!(board.fen(), start_fen);
    }

    #[test]
    fn test_random_walk_apply_undo_is_idempotent() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(7);
        let mut board = GameBoard::default();
        for _ in 0..40 {
            let moves = board.legal_moves();
            let Some(&m) = moves.as_slice().choose(&mut rng) else {
                break;
            };
            for &probe in moves.iter() {
                let (hash, turn) = (board.hash(), board.turn());
                drop(board.apply(probe));
                assert_eq!(board.hash(), hash);
                assert_eq!(board.turn(), turn);
            }
            board.play(m);
        }
    }

    #[test]
    fn test_checkmate_is_loss_for_side_to_move() {
        // Fool's mate
        let board =
            GameBoard::from_fen("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3").unwrap();
        assert_eq!(board.terminal(), Terminal::Loss);
    }

    #[test]
    fn test_stalemate_and_bare_kings_are_draws() {
        let stalemate = GameBoard::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").unwrap();
        assert_eq!(stalemate.terminal(), Terminal::Draw);
        let bare = GameBoard::from_fen("8/8/4k3/8/8/4K3/8/8 w - - 0 1").unwrap();
        assert_eq!(bare.terminal(), Terminal::Draw);
    }

    #[test]
    fn test_fifty_move_rule() {
        let board = GameBoard::from_fen("4k3/8/8/8/8/8/8/R3K3 w - - 100 80").unwrap();
        assert_eq!(board.terminal(), Terminal::Draw);
        let board = GameBoard::from_fen("4k3/8/8/8/8/8/8/R3K3 w - - 99 80").unwrap();
        assert_eq!(board.terminal(), Terminal::None);
    }

    #[test]
    fn test_threefold_repetition() {
        let mut board = GameBoard::default();
        for _ in 0..2 {
            for s in ["g1f3", "g8f6", "f3g1", "f6g8"] {
                let m = uci(&board, s);
                board.play(m);
            }
        }
        assert_eq!(board.terminal(), Terminal::Draw);
    }

    #[test]
    fn test_invalid_fen_is_rejected() {
        assert!(matches!(
            GameBoard::from_fen("not a fen"),
            Err(EngineError::InvalidFen { .. })
        ));
    }
}
